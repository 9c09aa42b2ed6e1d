//! In-place textual rewrites applied across a project tree.
//!
//! Each rewrite is a pure function returning `Some(new_content)` only when
//! the file would change, so callers can skip untouched files.

pub mod imports;
pub mod params;

pub use imports::{ImportRule, insert_import};
pub use params::{DEFAULT_PARAM_HELPER, rewrite_query_params};
