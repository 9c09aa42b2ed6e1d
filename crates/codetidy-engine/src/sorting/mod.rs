//! Extraction and ordering of `#[component]` blocks.
//!
//! Blocks are found with a literal, non-recursive scan: a block starts at the
//! structural marker and runs to the first `}` that is followed (after
//! optional whitespace) by another `}`. This is not a balanced-brace parser;
//! a component whose body closes with a single brace will swallow text up to
//! the next `} }` pair. Matches never overlap and are taken left to right.
//!
//! Everything here is pure. Reading and writing files lives in [`crate::io`]
//! and [`crate::operations`].

mod block;

pub use block::{Block, SortedDocument};

use regex::Regex;

use crate::pattern::{self, PatternError};

/// Marker plus lazy body up to the first `}\s*}`.
pub const DEFAULT_BLOCK_PATTERN: &str = r"#\[component\][\s\S]*?\}\s*\}";

/// Named declaration whose first capture is the sort key.
pub const DEFAULT_IDENTIFIER_PATTERN: &str = r"pub fn (\w+)";

/// Placed between blocks in the rendered output.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// The pair of expressions that drive extraction.
#[derive(Debug, Clone)]
pub struct BlockPatterns {
    block: Regex,
    identifier: Regex,
}

impl BlockPatterns {
    pub fn new(block_pattern: &str, identifier_pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            block: pattern::compile(block_pattern)?,
            identifier: pattern::compile_capturing(identifier_pattern)?,
        })
    }

    /// Name captured by the first identifier match, or empty.
    pub fn identifier_of(&self, block_text: &str) -> String {
        self.identifier
            .captures(block_text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for BlockPatterns {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_PATTERN, DEFAULT_IDENTIFIER_PATTERN)
            .expect("Invalid default component patterns")
    }
}

/// Pull every block out of `content`, trimmed, in source order.
pub fn extract_blocks(content: &str, patterns: &BlockPatterns) -> Vec<Block> {
    patterns
        .block
        .find_iter(content)
        .map(|m| {
            let text = m.as_str().trim();
            Block {
                identifier: patterns.identifier_of(text),
                text: text.to_string(),
            }
        })
        .collect()
}

/// Stable, byte-wise ascending sort on the identifier.
pub fn sort_blocks(blocks: &mut [Block]) {
    blocks.sort_by(|a, b| a.identifier.cmp(&b.identifier));
}

/// Extract and order the blocks of one document.
pub fn sort_document(content: &str, patterns: &BlockPatterns) -> SortedDocument {
    let mut blocks = extract_blocks(content, patterns);
    sort_blocks(&mut blocks);
    SortedDocument::new(blocks)
}
