use serde::Serialize;

const LINKEDIN_SVG: &str = r#"<path xmlns="http://www.w3.org/2000/svg" d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z"/>"#;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Inner markup of the icon, placed inside an `<svg>` element.
    pub svg: &'static str,
}

/// Everything injected into the static page.
#[derive(Debug)]
pub struct Profile {
    pub display_name: &'static str,
    pub page_title: &'static str,
    pub avatar_url: &'static str,
    pub body_class: &'static str,
    pub links: &'static [Link],
    pub socials: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    display_name: "Justin Huynh",
    page_title: "Justin Huynh",
    avatar_url: "https://www.cloudflare.com/img/logo-cloudflare-dark.svg",
    body_class: "bg-indigo-400",
    links: &[
        Link {
            name: "Google",
            url: "https://www.google.com/",
        },
        Link {
            name: "Bing",
            url: "https://www.bing.com/",
        },
        Link {
            name: "DuckDuckGo",
            url: "https://duckduckgo.com/",
        },
        Link {
            name: "CloudFlare",
            url: "https://www.cloudflare.com/",
        },
    ],
    socials: &[SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/justincshuynh/",
        svg: LINKEDIN_SVG,
    }],
};
