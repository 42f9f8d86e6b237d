//! Element rewrites applied to the static page.
//!
//! Each [`RewriteRule`] pairs a selector with the mutations applied to every
//! matching element. Appended markup is interpolated as-is without escaping,
//! and appends are not idempotent: rewriting an already rewritten page
//! duplicates the injected links and icons.

use std::borrow::Cow;

use lol_html::{
    errors::SelectorError,
    html_content::{ContentType, Element},
    ElementContentHandlers, HandlerResult, HtmlRewriter, OutputSink, Selector, Settings,
};

use crate::{helper::PageError, profile::Profile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Appended as parsed HTML, not escaped text.
    AppendHtml(String),
    RemoveAttribute(&'static str),
    SetAttribute { name: &'static str, value: String },
    SetInnerText(String),
}

impl Mutation {
    fn apply(&self, element: &mut Element) -> HandlerResult {
        match self {
            Mutation::AppendHtml(markup) => element.append(markup, ContentType::Html),
            Mutation::RemoveAttribute(name) => element.remove_attribute(name),
            Mutation::SetAttribute { name, value } => element.set_attribute(name, value)?,
            Mutation::SetInnerText(text) => element.set_inner_content(text, ContentType::Text),
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub selector: &'static str,
    pub mutations: Vec<Mutation>,
}

impl RewriteRule {
    pub fn new(selector: &'static str, mutations: Vec<Mutation>) -> Self {
        Self {
            selector,
            mutations,
        }
    }

    fn apply(&self, element: &mut Element) -> HandlerResult {
        for mutation in &self.mutations {
            mutation.apply(element)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RewriteRules {
    rules: Vec<RewriteRule>,
}

impl RewriteRules {
    /// Checks every selector up front so a bad rule fails at startup
    /// rather than on the first request.
    pub fn new(rules: Vec<RewriteRule>) -> Result<Self, SelectorError> {
        for rule in &rules {
            rule.selector.parse::<Selector>()?;
        }

        Ok(Self { rules })
    }

    pub fn for_profile(profile: &Profile) -> Result<Self, SelectorError> {
        let links = profile
            .links
            .iter()
            .map(|link| Mutation::AppendHtml(format!("<a href={}>{}</a>", link.url, link.name)))
            .collect();

        let socials = std::iter::once(Mutation::RemoveAttribute("style"))
            .chain(profile.socials.iter().map(|social| {
                Mutation::AppendHtml(format!(
                    "<a href={}><svg>{}</svg></a>",
                    social.url, social.svg
                ))
            }))
            .collect();

        Self::new(vec![
            RewriteRule::new("div#links", links),
            RewriteRule::new("div#profile", vec![Mutation::RemoveAttribute("style")]),
            RewriteRule::new(
                "h1#name",
                vec![Mutation::SetInnerText(profile.display_name.to_owned())],
            ),
            RewriteRule::new(
                "img#avatar",
                vec![Mutation::SetAttribute {
                    name: "src",
                    value: profile.avatar_url.to_owned(),
                }],
            ),
            RewriteRule::new("div#social", socials),
            RewriteRule::new(
                "title",
                vec![Mutation::SetInnerText(profile.page_title.to_owned())],
            ),
            RewriteRule::new(
                "body",
                vec![Mutation::SetAttribute {
                    name: "class",
                    value: profile.body_class.to_owned(),
                }],
            ),
        ])
    }

    fn element_handlers(
        &self,
    ) -> Result<Vec<(Cow<'static, Selector>, ElementContentHandlers<'_>)>, SelectorError> {
        self.rules
            .iter()
            .map(|rule| {
                let selector: Selector = rule.selector.parse()?;

                Ok((
                    Cow::Owned(selector),
                    ElementContentHandlers::default().element(move |element| rule.apply(element)),
                ))
            })
            .collect()
    }

    /// Builds a streaming rewriter that writes transformed chunks to `sink`
    /// as soon as they are available.
    pub fn rewriter<O: OutputSink>(&self, sink: O) -> Result<HtmlRewriter<'_, O>, SelectorError> {
        Ok(HtmlRewriter::new(
            Settings {
                element_content_handlers: self.element_handlers()?,
                ..Settings::default()
            },
            sink,
        ))
    }

    pub fn rewrite_str(&self, html: &str) -> Result<String, PageError> {
        let mut output = Vec::with_capacity(html.len());

        let mut rewriter = self.rewriter(|chunk: &[u8]| output.extend_from_slice(chunk))?;
        rewriter.write(html.as_bytes())?;
        rewriter.end()?;

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}
