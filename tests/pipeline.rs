//! End-to-end pipeline tests over the library, without a live generation
//! backend: document normalization, structured-output validation, keyword
//! merging, project persistence, and the legacy adapter view.

use std::io::Write;

use seo_harness::adapter::to_legacy_analysis;
use seo_harness::error::PipelineError;
use seo_harness::generate::parse_structured;
use seo_harness::merge::merge_keywords;
use seo_harness::models::{
    Competition, HeadingStructure, KeywordProject, KeywordResult, SearchIntent,
};
use seo_harness::normalize::{normalize_file, NormalizedInput};
use seo_harness::schema::{schema_for, Operation};
use seo_harness::store::AppStore;

fn kw(keyword: &str) -> KeywordResult {
    KeywordResult {
        keyword: keyword.to_string(),
        volume: "1k-10k".to_string(),
        difficulty: 40,
        intent: SearchIntent::Commercial,
        competition: Competition::Medium,
    }
}

#[test]
fn docx_upload_flows_into_text_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.docx");

    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all(
            br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                 <w:body><w:p><w:r><w:t>Protein</w:t></w:r><w:r><w:t>guide</w:t></w:r></w:p></w:body>
               </w:document>"#,
        )
        .unwrap();
    writer.finish().unwrap();

    let input = normalize_file(&path).unwrap();
    match input {
        NormalizedInput::Text { content } => assert_eq!(content, "Protein guide"),
        other => panic!("expected text input, got {:?}", other),
    }
}

#[test]
fn generated_batch_is_validated_then_merged_and_persisted() {
    // A plausible backend response for the keyword contract.
    let response_text = r#"[
        {"keyword": "vegan protein powder", "volume": "10k-100k", "difficulty": 62,
         "intent": "Commercial", "competition": "High"},
        {"keyword": "best vegan protein for runners", "volume": "1k-10k", "difficulty": 28,
         "intent": "Commercial", "competition": "Low"},
        {"keyword": "pea protein vs whey", "volume": "1k-10k", "difficulty": 35,
         "intent": "Informational", "competition": "Medium"}
    ]"#;

    let schema = schema_for(Operation::KeywordResearch);
    let value = parse_structured(response_text, &schema).unwrap();
    let batch: Vec<KeywordResult> = serde_json::from_value(value).unwrap();
    assert_eq!(batch.len(), 3);
    assert!(batch.iter().all(|k| k.difficulty <= 100));

    let dir = tempfile::tempdir().unwrap();
    let store = AppStore::open(dir.path());

    // First research run creates the project.
    let project = KeywordProject::new("launch", "example.com");
    let merged = merge_keywords(&project, &batch);
    store.save_project(&merged).unwrap();

    // Second run returns an overlapping batch; duplicates collapse.
    let second_batch = vec![kw("vegan protein powder"), kw("vegan protein smoothie")];
    let reloaded = store.find_project_by_name("launch").unwrap().unwrap();
    let remerged = merge_keywords(&reloaded, &second_batch);
    store.save_project(&remerged).unwrap();

    let final_project = store.find_project_by_name("launch").unwrap().unwrap();
    assert_eq!(final_project.keywords.len(), 4);
    // The original entry survived the duplicate, unchanged.
    assert_eq!(final_project.keywords[0].keyword, "vegan protein powder");
    assert_eq!(final_project.keywords[0].difficulty, 62);
    assert_eq!(final_project.keywords[3].keyword, "vegan protein smoothie");
}

#[test]
fn malformed_backend_output_is_rejected_wholesale() {
    let schema = schema_for(Operation::KeywordResearch);

    // difficulty above 100 fails the contract even though the JSON parses.
    let out_of_range = r#"[
        {"keyword": "seo tips", "volume": "1k", "difficulty": 150,
         "intent": "Informational", "competition": "Low"}
    ]"#;
    assert!(matches!(
        parse_structured(out_of_range, &schema),
        Err(PipelineError::MalformedOutput(_))
    ));

    assert!(matches!(
        parse_structured("", &schema),
        Err(PipelineError::EmptyResponse)
    ));
}

#[test]
fn smart_analysis_response_maps_to_legacy_view() {
    let response_text = r##"{
        "seoScore": 71,
        "optimizedContent": "# The Complete Vegan Protein Guide\n\nBetter copy.",
        "meta": {"title": "Vegan Protein Guide", "description": "Everything to know.", "slug": "vegan-protein-guide"},
        "schemaMarkup": "{\"@context\":\"https://schema.org\",\"@type\":\"Article\"}",
        "internalLinks": [{"anchor": "protein calculator", "context": "Link from the intro"}],
        "insights": ["Stronger entity coverage"],
        "criticalIssues": ["Missing meta description", "No H2 structure"]
    }"##;

    let schema = schema_for(Operation::SmartAnalysis);
    let value = parse_structured(response_text, &schema).unwrap();
    let rich: seo_harness::models::SmartSeoAnalysis = serde_json::from_value(value).unwrap();

    let original = "short original draft about vegan protein";
    let legacy = to_legacy_analysis(&rich, original);

    assert_eq!(legacy.score, 71);
    assert_eq!(legacy.word_count, 6);
    assert_eq!(
        legacy.suggestions,
        vec!["Missing meta description", "No H2 structure"]
    );
    assert!(legacy.missing_keywords.is_empty());
    assert_eq!(legacy.heading_structure, HeadingStructure::Good);
}

#[test]
fn project_blob_round_trips_through_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut project = KeywordProject::new("round-trip", "example.com");
    project.keywords = vec![kw("alpha"), kw("beta")];

    {
        let store = AppStore::open(dir.path());
        store.save_project(&project).unwrap();
    }

    // A fresh accessor over the same directory sees an equal value.
    let store = AppStore::open(dir.path());
    let loaded = store.get_projects().unwrap();
    assert_eq!(loaded, vec![project]);
}
