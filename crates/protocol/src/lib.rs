use serde::{Deserialize, Serialize};
use std::fmt;

pub const URL_REQUIRED: &str = "URL is required";
pub const PREDICTION_FAILED: &str = "prediction failed";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl PredictRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Returns the url when it is present and non-empty.
    pub fn into_url(self) -> Option<String> {
        self.url.filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Legit,
}

impl Verdict {
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            Verdict::Phishing
        } else {
            Verdict::Legit
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Phishing => "Phishing",
            Verdict::Legit => "Legit",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictResponse {
    pub url: String,
    pub prediction: Verdict,
}

impl PredictResponse {
    pub fn new(url: impl Into<String>, class: i64) -> Self {
        Self {
            url: url.into(),
            prediction: Verdict::from_class(class),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn url_required() -> Self {
        Self::new(URL_REQUIRED)
    }
}
