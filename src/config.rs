use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Application configuration
///
/// The audit endpoint is compiled into the client; PAGESPEED_API_URL exists
/// for pointing it at the staging scope instead.
#[derive(Clone)]
pub struct Config {
    /// API key sent with every audit request
    pub api_key: String,
    /// Optional endpoint override (a full runPagespeed URL)
    pub api_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var("PAGESPEED_API_KEY").context("PAGESPEED_API_KEY must be set")?,

            api_url: env::var("PAGESPEED_API_URL")
                .ok()
                .map(|raw| Url::parse(&raw))
                .transpose()
                .context("PAGESPEED_API_URL is not a valid URL")?,
        })
    }
}
