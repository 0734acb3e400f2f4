use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope of the runPagespeed endpoint.
///
/// Only the fields the client inspects are modeled; everything else in the
/// body is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    pub captcha_result: Option<String>,

    #[serde(default)]
    pub error: Option<ApiErrorBody>,

    #[serde(default)]
    pub lighthouse_response: Option<RawLighthouseReport>,

    #[serde(default)]
    pub loading_experience: Option<Value>,

    #[serde(default)]
    pub origin_loading_experience: Option<Value>,
}

/// `error` object of an error-shaped response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub errors: Value,
}

impl ApiErrorBody {
    /// Render the `errors` sub-field as a message string.
    pub fn message(&self) -> String {
        match &self.errors {
            Value::String(text) => text.clone(),
            Value::Null => "unspecified API error".to_string(),
            other => other.to_string(),
        }
    }
}

/// The report payload arrives JSON-encoded today but may become a plain
/// object; both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawLighthouseReport {
    Encoded(String),
    Structured(Value),
}

impl RawLighthouseReport {
    /// Decode into a report value, parsing the encoded form.
    pub fn into_value(self) -> Result<Value, serde_json::Error> {
        match self {
            RawLighthouseReport::Encoded(text) => serde_json::from_str(&text),
            RawLighthouseReport::Structured(value) => Ok(value),
        }
    }
}

/// Normalized audit result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    /// Full Lighthouse report, with the bulk `i18n` section removed.
    pub lhr: Value,

    /// Chrome UX Report field data returned alongside the audit.
    pub crux: Crux,
}

/// Real-world field data (Chrome UX Report).
///
/// Absent fields are skipped on serialization; persistence layers downstream
/// reject null-valued keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crux {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_experience: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_loading_experience: Option<Value>,
}

impl Crux {
    /// True when the API returned no field data at all.
    pub fn is_empty(&self) -> bool {
        self.loading_experience.is_none() && self.origin_loading_experience.is_none()
    }
}
