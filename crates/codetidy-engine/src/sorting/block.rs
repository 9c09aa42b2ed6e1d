use std::fmt;

use super::BLOCK_SEPARATOR;

/// One extracted unit of source text and the name it sorts under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Matched text with edge whitespace trimmed.
    pub text: String,
    /// Empty when the block has no named declaration.
    pub identifier: String,
}

/// Blocks in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedDocument {
    blocks: Vec<Block>,
}

impl SortedDocument {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block texts joined by a blank line; empty when there are no blocks.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SortedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str(BLOCK_SEPARATOR)?;
            }
            f.write_str(&block.text)?;
        }
        Ok(())
    }
}
