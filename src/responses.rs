//! Typed entry points for the four response shapes the copyforge generation
//! flow consumes.
//!
//! Each wrapper is pure configuration over the extraction pipeline: it pins
//! the required-field contract for its call site, supplies a fixed fallback
//! record, and never fails. Parsing failures surface to end users only as
//! placeholder content (and as diagnostics when logging is enabled).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::extract::{Extractor, ParseOptions};

/// Industry classification derived from spreadsheet campaign data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryClassification {
    pub suggested_industry: String,
    /// Confidence percentage, 0-100.
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl IndustryClassification {
    /// Fixed record returned when no classification can be recovered:
    /// undetermined industry at medium-low confidence.
    pub fn fallback() -> Self {
        Self {
            suggested_industry: "undetermined".to_string(),
            confidence: 40,
            reasoning: None,
        }
    }
}

/// Website/brand tone analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAnalysis {
    pub industry: String,
    pub tone_of_voice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_themes: Option<Vec<String>>,
}

impl ToneAnalysis {
    /// Generic-business record used when the analysis cannot be recovered.
    pub fn fallback() -> Self {
        Self {
            industry: "general business".to_string(),
            tone_of_voice: "professional and approachable".to_string(),
            target_audience: None,
            key_themes: None,
        }
    }
}

/// Market research summary for a client's competitive landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResearch {
    pub competitive_analysis: String,
    pub market_trends: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunities: Option<Vec<String>>,
}

impl MarketResearch {
    pub fn fallback() -> Self {
        Self {
            competitive_analysis: "No competitive analysis available.".to_string(),
            market_trends: "No market trend data available.".to_string(),
            opportunities: None,
        }
    }
}

/// Synthesized business context and editorial guidelines for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub business_context: String,
    pub editorial_guidelines: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl BusinessContext {
    pub fn fallback() -> Self {
        Self {
            business_context: "General business offering products and services to its customers."
                .to_string(),
            editorial_guidelines: "Clear, friendly and professional tone.".to_string(),
            keywords: None,
        }
    }
}

/// Parses an industry classification response.
///
/// Requires `suggestedIndustry` and `confidence`; falls back to
/// [`IndustryClassification::fallback`].
pub fn parse_industry_classification(raw: &str) -> IndustryClassification {
    parse_with_fallback(
        raw,
        &["suggestedIndustry", "confidence"],
        IndustryClassification::fallback(),
    )
}

/// Parses a website/brand tone analysis response.
///
/// Requires `industry` and `toneOfVoice`; falls back to
/// [`ToneAnalysis::fallback`].
pub fn parse_tone_analysis(raw: &str) -> ToneAnalysis {
    parse_with_fallback(raw, &["industry", "toneOfVoice"], ToneAnalysis::fallback())
}

/// Parses a market research summary response.
///
/// Requires `competitiveAnalysis` and `marketTrends`; falls back to
/// [`MarketResearch::fallback`].
pub fn parse_market_research(raw: &str) -> MarketResearch {
    parse_with_fallback(
        raw,
        &["competitiveAnalysis", "marketTrends"],
        MarketResearch::fallback(),
    )
}

/// Parses a client business-context synthesis response.
///
/// Requires `businessContext` and `editorialGuidelines`; falls back to
/// [`BusinessContext::fallback`].
pub fn parse_business_context(raw: &str) -> BusinessContext {
    parse_with_fallback(
        raw,
        &["businessContext", "editorialGuidelines"],
        BusinessContext::fallback(),
    )
}

/// Shared wrapper plumbing: required fields + serialized fallback + logging,
/// then typed extraction. The final `unwrap_or` keeps the never-fail
/// guarantee even if the fallback record itself cannot round-trip.
fn parse_with_fallback<T>(raw: &str, required_fields: &[&str], fallback: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let mut options = ParseOptions::new()
        .with_required_fields(required_fields.iter().copied())
        .with_log_errors(true);
    if let Ok(value) = serde_json::to_value(&fallback) {
        options = options.with_fallback(value);
    }
    Extractor::new()
        .extract_as(raw, &options)
        .unwrap_or(fallback)
}
