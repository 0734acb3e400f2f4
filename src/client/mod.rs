//! Client for the PageSpeed Insights `runPagespeed` endpoint.

use tracing::{debug, error};
use url::Url;

use crate::categories;
use crate::error::AuditError;
use crate::types::{Audit, Crux, ResponseEnvelope};


/// Production API scope.
const API_SCOPE: &str = "https://www.googleapis.com/pagespeedonline";

/// API version the client speaks.
const API_VERSION: &str = "v5";

/// Locale requested for report strings.
const LOCALE: &str = "en_US";

/// Audit strategy. The service also accepts "desktop".
const STRATEGY: &str = "mobile";

/// Sentinel value meaning the captcha check passed.
const CAPTCHA_NOT_NEEDED: &str = "CAPTCHA_NOT_NEEDED";

/// Client for the remote Lighthouse auditing service.
///
/// Holds only immutable state (API key, endpoint, pooled HTTP client), so a
/// single instance can serve concurrent `audit` calls.
pub struct AuditClient {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl AuditClient {
    /// Client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        let endpoint = format!("{}/{}/runPagespeed", API_SCOPE, API_VERSION)
            .parse()
            .expect("production endpoint is a valid URL");
        Self::with_endpoint(api_key, endpoint)
    }

    /// Client against a non-default endpoint (the staging scope, a mock).
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        }
    }

    /// Audit a site.
    ///
    /// One GET against the runPagespeed endpoint; returns the decoded
    /// Lighthouse report plus whatever CrUX field data came back. Failures
    /// are logged here once and propagated unchanged.
    pub async fn audit(&self, target_url: &str) -> Result<Audit, AuditError> {
        match self.run_audit(target_url).await {
            Ok(audit) => Ok(audit),
            Err(err) => {
                error!("Audit of {} failed: {}", target_url, err);
                Err(err)
            }
        }
    }

    async fn run_audit(&self, target_url: &str) -> Result<Audit, AuditError> {
        let request_url = self.audit_url(target_url);

        debug!("Requesting Lighthouse audit for {}", target_url);

        let response = self.http_client.get(request_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&bytes)?;

        if let Some(captcha) = envelope.captcha_result {
            if captcha != CAPTCHA_NOT_NEEDED {
                return Err(AuditError::Captcha(captcha));
            }
        }

        if let Some(error) = envelope.error {
            return Err(AuditError::Api(error.message()));
        }

        let raw = envelope
            .lighthouse_response
            .ok_or(AuditError::MissingReport)?;
        let mut lhr = raw.into_value()?;

        // Bulk localization data, not needed downstream.
        if let Some(report) = lhr.as_object_mut() {
            report.remove("i18n");
        }

        let crux = Crux {
            loading_experience: envelope.loading_experience,
            origin_loading_experience: envelope.origin_loading_experience,
        };

        debug!("Audit of {} complete", target_url);

        Ok(Audit { lhr, crux })
    }

    /// Endpoint URL with the full query string attached.
    fn audit_url(&self, target_url: &str) -> Url {
        let mut audit_url = self.endpoint.clone();
        {
            let mut query = audit_url.query_pairs_mut();
            query.append_pair("key", &self.api_key);
            query.append_pair("locale", LOCALE);
            query.append_pair("strategy", STRATEGY);
            for category in categories::names() {
                query.append_pair("category", &categories::wire_name(category));
            }
            query.append_pair("url", target_url);
        }
        audit_url
    }
}
