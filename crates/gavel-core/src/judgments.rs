//! Qrels parsing and lookup.
//!
//! A qrels ("relevance judgments") file is the ground truth of an IR
//! benchmark: one judgment per line, fields separated by runs of whitespace.
//!
//! # File Format
//!
//! ```text
//! queryId [iteration] docId grade
//! ```
//!
//! The iteration column is a TREC convention and is discarded when present,
//! so both the 3-column and 4-column layouts are accepted. `grade` is a
//! signed base-10 integer; 0 conventionally means "not relevant". Blank
//! lines are skipped. Encoding is UTF-8 with no header line.
//!
//! If the same `(queryId, docId)` pair appears on more than one line, the
//! later line wins. Duplicate pairs occur in patched qrels distributions
//! and are tolerated rather than rejected.

use crate::error::QrelsError;
use crate::registry::{self, Dataset};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A loaded set of relevance judgments.
///
/// Construction reads and parses the whole source file in one pass and is
/// atomic: either every line parsed and the structure is fully populated,
/// or the constructor fails and nothing is returned. Instances are
/// immutable afterwards, so they can be shared freely across readers.
///
/// The query methods are total: unknown query or document identifiers
/// degrade to `0` / `None` / `false` rather than failing. Use
/// [`is_doc_judged`](Self::is_doc_judged) to distinguish "not judged" from
/// "judged not relevant with grade 0"; [`relevance_grade`](Self::relevance_grade)
/// alone cannot tell them apart.
#[derive(Debug, Clone)]
pub struct RelevanceJudgments {
    /// query_id -> (doc_id -> grade). No empty inner maps are retained.
    qrels: HashMap<String, HashMap<String, i32>>,
}

impl RelevanceJudgments {
    /// Loads qrels from a file path.
    ///
    /// # Errors
    ///
    /// [`QrelsError::ResourceNotFound`] if the file cannot be opened,
    /// [`QrelsError::MalformedQrels`] if any line does not match an
    /// accepted layout or carries a non-integer grade.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QrelsError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| QrelsError::ResourceNotFound(format!("{}: {}", path.display(), e)))?;
        let qrels = parse_qrels(BufReader::new(file), path)?;

        debug!(
            path = %path.display(),
            queries = qrels.len(),
            judgments = qrels.values().map(HashMap::len).sum::<usize>(),
            "loaded qrels"
        );
        Ok(Self { qrels })
    }

    /// Loads the qrels for a catalog dataset.
    ///
    /// Resolves the dataset to its bundled or cached location and proceeds
    /// as [`from_path`](Self::from_path). A valid identifier whose resource
    /// is absent from the file system yields
    /// [`QrelsError::ResourceNotFound`].
    pub fn from_dataset(dataset: Dataset) -> Result<Self, QrelsError> {
        Self::from_path(dataset.path())
    }

    /// Loads qrels from a dataset name, a symbolic string, or a literal path.
    ///
    /// Catalog names resolve through the registry; recognized symbolic
    /// names resolve to their cache location; anything else is treated as
    /// a literal file path.
    pub fn from_symbol(symbol: &str) -> Result<Self, QrelsError> {
        match Dataset::from_name(symbol) {
            Some(dataset) => Self::from_dataset(dataset),
            None => Self::from_path(registry::symbol_path(symbol)),
        }
    }

    /// All query identifiers with at least one judgment.
    pub fn query_ids(&self) -> impl Iterator<Item = &str> {
        self.qrels.keys().map(String::as_str)
    }

    /// The `doc_id -> grade` map for a query, or `None` if the query is unknown.
    pub fn doc_grade_map(&self, query_id: &str) -> Option<&HashMap<String, i32>> {
        self.qrels.get(query_id)
    }

    /// The stored grade for `(query_id, doc_id)`, or `0` if either is unknown.
    ///
    /// A return of `0` is ambiguous between "not judged" and "judged with
    /// grade 0"; use [`is_doc_judged`](Self::is_doc_judged) for membership.
    pub fn relevance_grade(&self, query_id: &str, doc_id: &str) -> i32 {
        self.qrels
            .get(query_id)
            .and_then(|docs| docs.get(doc_id))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `(query_id, doc_id)` carries a judgment, regardless of grade.
    pub fn is_doc_judged(&self, query_id: &str, doc_id: &str) -> bool {
        self.qrels
            .get(query_id)
            .is_some_and(|docs| docs.contains_key(doc_id))
    }

    /// Number of distinct judged queries.
    pub fn num_queries(&self) -> usize {
        self.qrels.len()
    }

    /// Total number of judgments across all queries.
    pub fn num_judgments(&self) -> usize {
        self.qrels.values().map(HashMap::len).sum()
    }
}

/// Parses qrels lines from a reader into the lookup structure.
///
/// `path` is only used for error messages.
fn parse_qrels(
    reader: impl BufRead,
    path: &Path,
) -> Result<HashMap<String, HashMap<String, i32>>, QrelsError> {
    let mut qrels: HashMap<String, HashMap<String, i32>> = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|e| QrelsError::ResourceNotFound(format!("{}: {}", path.display(), e)))?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        // 4 fields: queryId iteration docId grade; 3 fields: queryId docId grade
        let (query_id, doc_id, grade) = match fields.as_slice() {
            [query_id, _iteration, doc_id, grade] => (*query_id, *doc_id, *grade),
            [query_id, doc_id, grade] => (*query_id, *doc_id, *grade),
            _ => {
                return Err(QrelsError::MalformedQrels(format!(
                    "{}: line {}: expected 3 or 4 whitespace-separated fields, got {}",
                    path.display(),
                    line_num + 1,
                    fields.len()
                )));
            }
        };

        let grade: i32 = grade.parse().map_err(|_| {
            QrelsError::MalformedQrels(format!(
                "{}: line {}: invalid relevance grade '{}'",
                path.display(),
                line_num + 1,
                grade
            ))
        })?;

        // Later lines overwrite earlier ones for the same (query, doc) pair.
        qrels
            .entry(query_id.to_string())
            .or_default()
            .insert(doc_id.to_string(), grade);
    }

    Ok(qrels)
}
