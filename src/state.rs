use std::sync::Arc;

use reqwest::Client;

use crate::{
    config::Config,
    helper::PageError,
    profile::{Profile, PROFILE},
    rewrite::RewriteRules,
};

#[derive(Clone)]
pub struct PageState {
    pub config: Config,
    pub profile: &'static Profile,
    pub rules: Arc<RewriteRules>,
    pub client: Client,
}

impl PageState {
    pub fn new(config: Config) -> Result<Self, PageError> {
        Ok(Self {
            config,
            profile: &PROFILE,
            rules: Arc::new(RewriteRules::for_profile(&PROFILE)?),
            client: Client::new(),
        })
    }
}
