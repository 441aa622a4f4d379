//! # Gavel Core
//!
//! Relevance judgments (qrels) loading and benchmark dataset resolution for
//! information-retrieval evaluation.
//!
//! This crate provides the building blocks used by evaluation frontends
//! (CLI, notebooks, test harnesses): a qrels parser with a total read-only
//! query API, and a closed catalog of named benchmark qrels resources that
//! resolves symbolic dataset names to predictable on-disk locations.
//!
//! ## Modules
//!
//! - [`judgments`] - Qrels parsing and the `query -> doc -> grade` lookup structure
//! - [`registry`] - Static catalog of benchmark datasets and path resolution
//! - [`error`] - Error types for loading and resolution
//!
//! ## Example
//!
//! ```no_run
//! use gavel_core::judgments::RelevanceJudgments;
//!
//! let qrels = RelevanceJudgments::from_path("tools/topics-and-qrels/qrels.robust04.txt")?;
//! assert_eq!(qrels.relevance_grade("301", "FBIS3-10082"), 1);
//! assert!(qrels.is_doc_judged("301", "FBIS3-10082"));
//! # Ok::<(), gavel_core::error::QrelsError>(())
//! ```

pub mod error;
pub mod judgments;
pub mod registry;

pub use error::QrelsError;
pub use judgments::RelevanceJudgments;
pub use registry::{Dataset, ResourceKind};
