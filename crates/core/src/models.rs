use serde::{Deserialize, Serialize};

use crate::templates::{self, ResponseTemplate};

/// Classification outcome for a passenger query.
///
/// Variants are declared in match precedence order; `General` is the fallback
/// and carries no triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Delay,
    Cancellation,
    Weather,
    General,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Delay,
        Category::Cancellation,
        Category::Weather,
        Category::General,
    ];

    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Delay => &["delay", "delayed"],
            Self::Cancellation => &["cancel"],
            Self::Weather => &["weather"],
            Self::General => &[],
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Delay => "delay",
            Self::Cancellation => "cancellation",
            Self::Weather => "weather",
            Self::General => "general",
        }
    }

    pub fn template(self) -> &'static ResponseTemplate {
        match self {
            Self::Delay => &templates::DELAY,
            Self::Cancellation => &templates::CANCELLATION,
            Self::Weather => &templates::WEATHER,
            Self::General => &templates::GENERAL,
        }
    }

    pub fn response(self) -> GuidanceResponse {
        self.template().to_response()
    }
}

/// Guidance returned to the passenger. Serializes with exactly three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceResponse {
    pub message: String,
    pub recommendations: Vec<String>,
    pub passenger_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub input_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEnvelope {
    pub response: GuidanceResponse,
}

impl From<GuidanceResponse> for RecommendationEnvelope {
    fn from(response: GuidanceResponse) -> Self {
        Self { response }
    }
}
