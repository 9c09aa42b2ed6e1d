pub mod io;
pub mod operations;
pub mod pattern;
pub mod rewrite;
pub mod sorting;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use operations::*;
pub use pattern::PatternError;
pub use rewrite::{ImportRule, insert_import, rewrite_query_params};
pub use sorting::{Block, BlockPatterns, SortedDocument, extract_blocks, sort_blocks, sort_document};
