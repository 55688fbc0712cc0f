//! End-to-end extraction tests over realistic LLM response fixtures.
//!
//! Each fixture is raw provider output as the generation flow actually
//! receives it: fences, commentary, reasoning preambles, and the minor
//! syntax violations the repair strategy exists for.

use copyforge_extract::{
    extract_json, parse_business_context, parse_industry_classification, parse_tone_analysis,
    ExtractError, Extractor, NullSink, ParseOptions,
};
use serde_json::{json, Value};

fn quiet() -> Extractor {
    Extractor::with_sink(NullSink)
}

#[test]
fn clean_json_matches_direct_parse() {
    let inputs = [
        r#"{"headline": "Walk taller", "description": "Boots built for the trail"}"#,
        r#"[{"headline": "A"}, {"headline": "B"}]"#,
        r#"{"nested": {"deep": [1, {"deeper": true}]}}"#,
    ];
    for input in inputs {
        let extracted = quiet()
            .extract(input, &ParseOptions::new())
            .expect("clean JSON should extract");
        let direct: Value = serde_json::from_str(input).expect("fixture should be valid JSON");
        assert_eq!(extracted, direct, "pipeline should be a no-op on: {input}");
    }
}

#[test]
fn fenced_response_equals_bare_object() {
    let bare = r#"{"suggestedIndustry": "e-commerce", "confidence": 92}"#;
    let wrapped = format!("Here is the result:\n```json\n{bare}\n```\nLet me know if you need more.");

    let options = ParseOptions::new().with_required_fields(["suggestedIndustry", "confidence"]);
    let from_bare = quiet().extract(bare, &options).expect("bare should parse");
    let from_wrapped = quiet()
        .extract(&wrapped, &options)
        .expect("wrapped should parse");

    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_wrapped["confidence"], 92);
}

#[test]
fn untagged_fence_is_handled() {
    let input = "```\n{\"industry\": \"food service\", \"toneOfVoice\": \"warm\"}\n```";
    let options = ParseOptions::new().with_required_fields(["industry", "toneOfVoice"]);
    let value = quiet().extract(input, &options).expect("should parse");
    assert_eq!(value["industry"], "food service");
}

#[test]
fn nested_braces_are_not_truncated() {
    // Combined inner brace count exceeds the outer pair; a naive
    // outermost-brace regex would truncate or over-extend.
    let input = "Analysis complete. {\"campaign\": {\"groups\": [{\"name\": \"shoes\"}, {\"name\": \"boots\"}]}, \"total\": 2} Anything else?";
    let value = quiet()
        .extract(input, &ParseOptions::new())
        .expect("nested object should extract");
    assert_eq!(value["campaign"]["groups"][1]["name"], "boots");
    assert_eq!(value["total"], 2);
}

#[test]
fn single_quoted_response_is_repaired() {
    let input = "{'name': 'Acme', 'tags': ['a','b',],}";
    let value = quiet()
        .extract(input, &ParseOptions::new())
        .expect("repairable input should extract");
    assert_eq!(value, json!({"name": "Acme", "tags": ["a", "b"]}));
}

#[test]
fn unquoted_keys_are_repaired() {
    let input = "{businessContext: 'we sell shoes', editorialGuidelines: 'friendly tone'}";
    let options =
        ParseOptions::new().with_required_fields(["businessContext", "editorialGuidelines"]);
    let value = quiet().extract(input, &options).expect("should repair");
    assert_eq!(value["businessContext"], "we sell shoes");
    assert_eq!(value["editorialGuidelines"], "friendly tone");
}

#[test]
fn commented_json_is_repaired() {
    let input = "```json\n{\n  \"headline\": \"Spring sale\", // primary\n  \"path\": \"sale\"\n}\n```";
    let value = quiet()
        .extract(input, &ParseOptions::new())
        .expect("commented JSON should repair");
    assert_eq!(value["headline"], "Spring sale");
}

#[test]
fn required_field_gating_never_returns_partial_object() {
    let input = r#"{"industry": "tech"}"#;
    let fallback = json!({"industry": "general business", "toneOfVoice": "professional"});
    let options = ParseOptions::new()
        .with_required_fields(["industry", "toneOfVoice"])
        .with_fallback(fallback.clone());

    let value = quiet().extract(input, &options).expect("fallback expected");
    assert_eq!(value, fallback, "partial object must not leak through");
}

#[test]
fn fallback_guarantee_holds_for_any_input() {
    let fallback = json!({"suggestedIndustry": "undetermined", "confidence": 40});
    let options = ParseOptions::new()
        .with_required_fields(["suggestedIndustry", "confidence"])
        .with_fallback(fallback.clone());

    let inputs = [
        "",
        "I cannot determine the industry from this description.",
        "```json\n```",
        "{{{{",
        "}}}}",
        "\u{fffd}\u{0}\u{7f} not text at all",
    ];
    for input in inputs {
        let value = quiet()
            .extract(input, &options)
            .expect("extract must not fail with a fallback configured");
        assert_eq!(value, fallback, "input: {input:?}");
    }
}

#[test]
fn no_fallback_prose_raises() {
    let input = "I cannot determine the industry from this description.";
    let err = quiet()
        .extract(input, &ParseOptions::new())
        .expect_err("prose without JSON must fail when no fallback is given");
    match err {
        ExtractError::NoJsonFound { raw, .. } => assert_eq!(raw, input),
        other => panic!("expected NoJsonFound, got {other:?}"),
    }
}

#[test]
fn reasoning_preamble_with_json_at_the_end() {
    let input = "Let me think through the brand voice first.\n\
        The site sells hiking gear, so the tone should feel outdoorsy.\n\
        \n\
        {\"industry\": \"outdoor retail\", \"toneOfVoice\": \"adventurous\"}";
    let options = ParseOptions::new().with_required_fields(["industry", "toneOfVoice"]);
    let value = quiet().extract(input, &options).expect("should extract");
    assert_eq!(value["toneOfVoice"], "adventurous");
}

#[test]
fn truncated_response_reports_unclosed_delimiters() {
    let input = "```json\n{\"competitiveAnalysis\": \"three major players\", \"marketTrends\": \"shift to";
    let err = quiet()
        .extract(input, &ParseOptions::new())
        .expect_err("truncated JSON cannot parse");
    let truncation = err.truncation().expect("should detect truncation");
    assert_eq!(truncation.unclosed_braces, 1);
}

#[test]
fn domain_wrappers_never_panic_or_fail() {
    let garbage = [
        "",
        "no json",
        "{'partial': ",
        "```json\n{\"wrong\": \"shape\"}\n```",
    ];
    for input in garbage {
        let _ = parse_industry_classification(input);
        let _ = parse_tone_analysis(input);
        let _ = parse_business_context(input);
    }

    let result = parse_industry_classification("nothing useful");
    assert_eq!(result.suggested_industry, "undetermined");
    assert_eq!(result.confidence, 40);
}

#[test]
fn wrappers_recover_real_provider_shapes() {
    // Anthropic-style: prose, fence, prose.
    let anthropic = "I've analyzed the campaign data.\n\n```json\n{\"suggestedIndustry\": \"fitness\", \"confidence\": 88, \"reasoning\": \"keywords mention gyms\"}\n```\n\nHappy to refine this further.";
    let industry = parse_industry_classification(anthropic);
    assert_eq!(industry.suggested_industry, "fitness");
    assert_eq!(industry.reasoning.as_deref(), Some("keywords mention gyms"));

    // Gemini-style: bare object, single quotes.
    let gemini = "{'businessContext': 'Independent coffee roaster', 'editorialGuidelines': 'Warm, artisanal voice'}";
    let context = parse_business_context(gemini);
    assert_eq!(context.business_context, "Independent coffee roaster");
}

#[test]
fn free_function_matches_extractor() {
    let input = r#"{"a": 1}"#;
    let via_free = extract_json(input, &ParseOptions::new()).expect("free fn should extract");
    let via_extractor = quiet()
        .extract(input, &ParseOptions::new())
        .expect("extractor should extract");
    assert_eq!(via_free, via_extractor);
}

#[test]
fn concurrent_extraction_is_safe() {
    // One extractor shared across parallel generation tasks; every call is
    // independent.
    let extractor = std::sync::Arc::new(quiet());
    let options = ParseOptions::new().with_fallback(json!({"ok": true}));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let extractor = extractor.clone();
            let options = options.clone();
            std::thread::spawn(move || {
                let input = format!("{{\"task\": {i}}}");
                extractor
                    .extract(&input, &options)
                    .expect("extraction should succeed")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("thread should not panic");
        assert_eq!(value["task"], i);
    }
}
