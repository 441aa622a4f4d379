//! Symbolic dataset name resolution.
//!
//! Callers refer to qrels by dataset name ("robust04",
//! "msmarco-passage.dev-subset") without knowing the on-disk naming
//! convention. Recognized names resolve to a fixed per-user cache
//! directory, `<home>/.cache/gavel/topics-and-qrels/`, with the file name
//! and extension inferred from the shape of the name. Unrecognized names
//! pass through unchanged so that forward-compatible or user-supplied
//! literal paths keep working.
//!
//! The rules are an ordered list evaluated top to bottom, first match wins:
//!
//! 1. Versioned hyphen-dotted families (`miracl-v1.0-*`, `ciral-v1.0-*`)
//!    use tab-separated files: `qrels.<name>.tsv`.
//! 2. Legacy TREC families (`adhoc.*`, `microblog*`, `terabyte*`) use the
//!    default convention, `qrels.<name>.txt`, and are matched explicitly
//!    to keep them unambiguous.
//! 3. Any other catalog dataset name uses the default `qrels.<name>.txt`.
//! 4. Anything else is not a dataset name: the caller gets the input back
//!    as a literal path.

use crate::error::QrelsError;
use crate::registry::Dataset;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Directory of qrels files shipped with a source checkout.
pub const BUNDLED_QRELS_DIR: &str = "tools/topics-and-qrels";

/// Dataset families whose qrels files are tab-separated.
const TSV_FAMILIES: &[&str] = &["miracl-v1.0-", "ciral-v1.0-"];

/// Legacy TREC families recognized by name shape alone.
const LEGACY_FAMILIES: &[&str] = &["adhoc.", "microblog", "terabyte"];

/// The per-user cache directory for fetched qrels files.
///
/// Falls back to a relative `.cache/gavel/topics-and-qrels` in the unusual
/// case that no home directory can be determined.
pub fn cache_dir() -> PathBuf {
    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_default();
    home.join(".cache").join("gavel").join("topics-and-qrels")
}

/// Whether a dataset's qrels file is tab-separated.
pub(crate) fn uses_tabs(name: &str) -> bool {
    TSV_FAMILIES.iter().any(|prefix| name.starts_with(prefix))
}

/// The file name for a recognized dataset name, or `None` if the name
/// matches no naming rule.
pub fn qrels_file_name(symbol: &str) -> Option<String> {
    if uses_tabs(symbol) {
        return Some(format!("qrels.{symbol}.tsv"));
    }
    if LEGACY_FAMILIES.iter().any(|p| symbol.starts_with(p)) {
        return Some(format!("qrels.{symbol}.txt"));
    }
    if Dataset::from_name(symbol).is_some() {
        return Some(format!("qrels.{symbol}.txt"));
    }
    None
}

/// Resolves a symbolic dataset name to a file-system path.
///
/// Recognized names map into [`cache_dir`]; unrecognized input is returned
/// unchanged as a literal (possibly invalid) path. Resolution is pure and
/// deterministic: the same input always yields the same path.
pub fn symbol_path(symbol: &str) -> PathBuf {
    match qrels_file_name(symbol) {
        Some(file_name) => cache_dir().join(file_name),
        None => PathBuf::from(symbol),
    }
}

/// The byte length of a resolved qrels resource on disk.
///
/// Used by callers for integrity spot checks against known sizes.
///
/// # Errors
///
/// [`QrelsError::ResourceNotFound`] if the path does not exist.
pub fn resource_len(path: impl AsRef<Path>) -> Result<u64, QrelsError> {
    let path = path.as_ref();
    std::fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| QrelsError::ResourceNotFound(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_symbol_expansion() {
        let cases = [
            ("msmarco-passage.dev-subset", "qrels.msmarco-passage.dev-subset.txt"),
            ("msmarco-v2-passage.dev2", "qrels.msmarco-v2-passage.dev2.txt"),
            ("miracl-v1.0-en-dev", "qrels.miracl-v1.0-en-dev.tsv"),
            ("covid-round3", "qrels.covid-round3.txt"),
            ("ciral-v1.0-yo-test-a-pools", "qrels.ciral-v1.0-yo-test-a-pools.tsv"),
            ("adhoc.151-200", "qrels.adhoc.151-200.txt"),
            ("microblog2012", "qrels.microblog2012.txt"),
            ("terabyte04.701-750", "qrels.terabyte04.701-750.txt"),
        ];
        for (symbol, file_name) in cases {
            assert_eq!(
                symbol_path(symbol),
                cache_dir().join(file_name),
                "symbol: {symbol}"
            );
        }
    }

    #[test]
    fn test_unrecognized_symbol_passes_through() {
        assert_eq!(symbol_path("thisdoesnotexist"), PathBuf::from("thisdoesnotexist"));
        assert_eq!(
            symbol_path("/some/literal/qrels.txt"),
            PathBuf::from("/some/literal/qrels.txt")
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(symbol_path("robust04"), symbol_path("robust04"));
        assert_eq!(symbol_path("miracl-v1.0-ar-dev"), symbol_path("miracl-v1.0-ar-dev"));
    }

    #[test]
    fn test_cache_dir_shape() {
        let dir = cache_dir();
        assert!(dir.ends_with(".cache/gavel/topics-and-qrels"), "{}", dir.display());
    }

    #[test]
    fn test_resource_len() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"301 0 FBIS3-10082 1\n").unwrap();
        file.flush().unwrap();

        assert_eq!(resource_len(file.path()).unwrap(), 20);
        assert!(matches!(
            resource_len("tools/topics-and-qrels/qrels.xxx.txt"),
            Err(QrelsError::ResourceNotFound(_))
        ));
    }
}
