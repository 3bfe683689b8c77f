use serde::{Deserialize, Serialize};

/// A single AI-generated spending observation with an actionable tip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub insight: String,
    pub tip: String,
}

/// Response body of `GET /insights`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightsEnvelope {
    #[serde(default)]
    pub insights: Vec<Insight>,
}
