//! End-to-end tests for qrels loading and dataset resolution.
//!
//! These tests exercise the full workflow: write a qrels file to disk,
//! load it through the path-based and symbol-based constructors, and
//! check that both produce identical structures.

use gavel_core::registry::{self, Dataset};
use gavel_core::{QrelsError, RelevanceJudgments};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

/// A small TREC-style qrels fixture with mixed grades and a duplicate pair.
const FIXTURE: &str = "\
301 0 FBIS3-10082 1
301 0 FBIS3-10169 0
700 0 LA123090-0137 0
700 0 LA123090-0137 1
700 0 LA052790-0055 2
";

fn write_fixture(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, FIXTURE).unwrap();
    path
}

#[test]
fn path_and_symbol_constructors_agree() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "qrels.fixture.txt");

    let from_path = RelevanceJudgments::from_path(&path).unwrap();
    // The literal path is not a recognized dataset name, so the symbol
    // constructor passes it through unchanged.
    let from_symbol = RelevanceJudgments::from_symbol(path.to_str().unwrap()).unwrap();

    let qids_a: HashSet<&str> = from_path.query_ids().collect();
    let qids_b: HashSet<&str> = from_symbol.query_ids().collect();
    assert_eq!(qids_a, qids_b);

    for qid in qids_a {
        assert_eq!(from_path.doc_grade_map(qid), from_symbol.doc_grade_map(qid));
    }
}

#[test]
fn fixture_scenario() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "qrels.fixture.txt");
    let qrels = RelevanceJudgments::from_path(&path).unwrap();

    let qids: HashSet<&str> = qrels.query_ids().collect();
    assert_eq!(qids, HashSet::from(["301", "700"]));

    // Duplicate (700, LA123090-0137) pair: the later grade wins.
    assert_eq!(qrels.num_judgments(), 4);
    assert_eq!(qrels.relevance_grade("700", "LA123090-0137"), 1);

    assert_eq!(qrels.relevance_grade("301", "FBIS3-10082"), 1);
    assert_eq!(qrels.relevance_grade("301", "FBIS3-10169"), 0);
    assert!(qrels.is_doc_judged("301", "FBIS3-10169"));
    assert_eq!(qrels.relevance_grade("700", "LA052790-0055"), 2);

    // Unknown keys degrade rather than fail.
    assert_eq!(qrels.relevance_grade("xxx", "FBIS3-10082"), 0);
    assert_eq!(qrels.relevance_grade("301", "nosuchdoc"), 0);
    assert!(!qrels.is_doc_judged("xxx", "FBIS3-10082"));
    assert!(qrels.doc_grade_map("xxx").is_none());
}

#[test]
fn dataset_resource_absent_from_cache() {
    // A valid identifier whose resource has not been fetched yet fails
    // with ResourceNotFound, not a parse error.
    let result = RelevanceJudgments::from_dataset(Dataset::BrightPony);
    assert!(matches!(result, Err(QrelsError::ResourceNotFound(_))));
}

#[test]
fn resource_len_matches_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "qrels.fixture.txt");

    assert_eq!(
        registry::resource_len(&path).unwrap(),
        FIXTURE.len() as u64
    );
}

#[test]
fn loaded_judgments_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelevanceJudgments>();
}
