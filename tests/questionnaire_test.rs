// Questionnaire loading and scoring through the public API
//
// Covers:
// 1. Interpretation ranges partition every possible score
// 2. Minimum and maximum answer runs
// 3. Fallback to the built-in set for missing, corrupt or wrongly shaped files
// 4. Fatal errors for malformed interpretation tables

use anyhow::Result;
use mindwell::questionnaire::{AnswerOutcome, Assessment, Questionnaire};
use mindwell::MindwellError;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const VALID_DOC: &str = r#"{
    "questions": ["Q1", "Q2", "Q3"],
    "scale": {"never": 0, "sometimes": 1, "often": 2, "always": 3},
    "interpretation": {"0-2": "Low", "3-5": "Medium", "6-9": "High"}
}"#;

fn run_all(questionnaire: Arc<Questionnaire>, points: u32) -> AnswerOutcome {
    let total = questionnaire.len();
    let mut assessment = Assessment::new(questionnaire);
    let mut last = None;
    for _ in 0..total {
        last = Some(assessment.submit_answer(points).expect("answer accepted"));
    }
    last.expect("at least one question")
}

#[test]
fn test_ranges_partition_all_scores() {
    let questionnaire = Questionnaire::phq9();
    let table = questionnaire.interpretation();

    for score in 0..=27 {
        let matching: Vec<&str> = table
            .ranges()
            .iter()
            .filter(|r| r.contains(score))
            .map(|r| r.label.as_str())
            .collect();
        assert_eq!(matching.len(), 1, "score {} matched {:?}", score, matching);
        assert_eq!(questionnaire.interpret(score).unwrap(), matching[0]);
    }
}

#[test]
fn test_minimum_and_maximum_runs() {
    let questionnaire = Arc::new(Questionnaire::phq9());

    match run_all(questionnaire.clone(), 0) {
        AnswerOutcome::Completed(result) => {
            assert_eq!(result.score, 0);
            assert_eq!(result.interpretation, "Minimal depression");
        }
        other => panic!("expected completion, got {:?}", other),
    }

    match run_all(questionnaire, 3) {
        AnswerOutcome::Completed(result) => {
            assert_eq!(result.score, 27);
            assert_eq!(result.interpretation, "Severe depression");
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn test_bundled_data_file_matches_builtin() -> Result<()> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/phq9_questions.json");
    let loaded = Questionnaire::load_from_file(&path)?;
    assert_eq!(loaded, Questionnaire::phq9());
    Ok(())
}

#[test]
fn test_custom_questionnaire_loads() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.json");
    fs::write(&path, VALID_DOC)?;

    let questionnaire = Arc::new(Questionnaire::load_or_default(&path)?);
    assert_eq!(questionnaire.len(), 3);
    assert_eq!(questionnaire.max_score(), 9);

    match run_all(questionnaire, 2) {
        AnswerOutcome::Completed(result) => assert_eq!(result.interpretation, "High"),
        other => panic!("expected completion, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_builtin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let questionnaire = Questionnaire::load_or_default(&temp_dir.path().join("absent.json"))?;
    assert_eq!(questionnaire, Questionnaire::phq9());
    Ok(())
}

#[test]
fn test_corrupt_file_falls_back_to_builtin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("corrupt.json");
    fs::write(&path, "{ \"questions\": [ \"unterminated")?;

    let questionnaire = Questionnaire::load_or_default(&path)?;
    assert_eq!(questionnaire.len(), 9);
    Ok(())
}

#[test]
fn test_wrong_shape_falls_back_to_builtin() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("no_questions.json");
    fs::write(
        &path,
        r#"{"scale": {"never": 0, "always": 3}, "interpretation": {"0-3": "Low"}}"#,
    )?;

    let questionnaire = Questionnaire::load_or_default(&path)?;
    assert_eq!(questionnaire, Questionnaire::phq9());

    fs::write(&path, r#"["not", "a", "questionnaire"]"#)?;
    let questionnaire = Questionnaire::load_or_default(&path)?;
    assert_eq!(questionnaire.len(), 9);
    Ok(())
}

#[test]
fn test_gap_in_table_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("gap.json");
    fs::write(&path, VALID_DOC.replace("\"3-5\"", "\"4-5\""))?;

    let err = Questionnaire::load_or_default(&path).unwrap_err();
    assert!(matches!(err, MindwellError::Configuration(_)));
    assert!(err.to_string().contains("gap"));
    Ok(())
}

#[test]
fn test_overlap_in_table_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("overlap.json");
    fs::write(&path, VALID_DOC.replace("\"3-5\"", "\"2-5\""))?;

    let err = Questionnaire::load_or_default(&path).unwrap_err();
    assert!(matches!(err, MindwellError::Configuration(_)));
    Ok(())
}

#[test]
fn test_unparseable_range_is_fatal() {
    let doc = VALID_DOC.replace("\"6-9\"", "\"six-nine\"");
    assert!(matches!(
        Questionnaire::from_json_str(&doc),
        Err(MindwellError::Configuration(_))
    ));
}
