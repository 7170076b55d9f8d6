//! # Prompt Compare Analytics
//!
//! Pure text analytics behind prompt comparison: character/word/line
//! stats, lexical similarity, positional diff highlighting, and heuristic
//! token/cost estimates for a fixed pricing catalog.
//!
//! Nothing here performs I/O; every function is deterministic apart from
//! the timestamp stamped on exports.

pub mod diff;
pub mod estimator;
pub mod export;
pub mod format;
pub mod pricing;
pub mod report;
pub mod similarity;
pub mod stats;
pub mod whitespace;

pub use diff::{highlight, highlight_pair, DiffAnnotation, Segment};
pub use estimator::{estimate, estimate_all, estimate_for_key, ModelEstimate, TokenEstimate};
pub use export::{build_export, ComparisonExport, EXPORT_FILE_NAME};
pub use format::{format_cost, format_token_count};
pub use pricing::{all_models, get_model, resolve_model, CatalogEntry, ModelPricing, DEFAULT_MODEL};
pub use report::ComparisonReport;
pub use similarity::compute_similarity;
pub use stats::{compute_stats, TextStats};
