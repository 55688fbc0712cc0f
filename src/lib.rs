//! copyforge-extract: tolerant JSON extraction from LLM responses.
//!
//! LLM providers rarely return clean JSON. Responses arrive wrapped in
//! markdown code fences, surrounded by commentary, or with minor syntax
//! violations (single quotes, trailing commas, unquoted keys). This crate
//! recovers a validated `serde_json::Value` (or a typed record) from that
//! text by trying five increasingly aggressive strategies in fixed order,
//! then checking the winner against caller-supplied required fields. With a
//! fallback value configured, extraction never fails.
//!
//! # Example
//!
//! ```
//! use copyforge_extract::{Extractor, ParseOptions};
//!
//! let raw = "Sure! Here you go: {\"suggestedIndustry\": \"e-commerce\", \"confidence\": 92}";
//! let options = ParseOptions::new().with_required_fields(["suggestedIndustry", "confidence"]);
//!
//! let value = Extractor::new().extract(raw, &options).unwrap();
//! assert_eq!(value["suggestedIndustry"], "e-commerce");
//! ```

// Core modules
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod responses;
pub mod scan;
pub mod strategies;
pub mod validate;

// Re-export the public surface
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use error::ExtractError;
pub use extract::{extract_json, Extractor, ParseOptions};
pub use responses::{
    parse_business_context, parse_industry_classification, parse_market_research,
    parse_tone_analysis, BusinessContext, IndustryClassification, MarketResearch, ToneAnalysis,
};
pub use scan::{StructureAnalysis, Truncation};
pub use strategies::Strategy;
pub use validate::is_structurally_valid;
