//! Stateful reassembly of classified lines into rendered blocks.

use crate::types::{Block, BlockKind, LineClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListType {
    None,
    Bullet,
    Numbered,
}

/// Per-page state machine that turns a stream of [`LineClass`] values into
/// rendered [`Block`]s.
///
/// Construct one per page: the list type, the numbered counter, and the
/// pending paragraph buffer must never survive a page boundary.
#[derive(Debug)]
pub struct BlockAssembler {
    list_type: ListType,
    counter: u32,
    pending: Vec<String>,
    blocks: Vec<Block>,
}

impl BlockAssembler {
    pub fn new() -> Self {
        BlockAssembler {
            list_type: ListType::None,
            counter: 0,
            pending: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Feed the next classified line.
    pub fn push(&mut self, class: LineClass) {
        match class {
            LineClass::Heading { level, text } => {
                self.flush_paragraph();
                self.list_type = ListType::None;
                let hashes = "#".repeat(level.as_u8() as usize);
                self.blocks
                    .push(Block::new(BlockKind::Heading, format!("{} {}", hashes, text)));
            }
            LineClass::Bullet { text } => {
                self.flush_paragraph();
                self.blocks
                    .push(Block::new(BlockKind::Bullet, format!("- {}", text)));
                self.list_type = ListType::Bullet;
            }
            LineClass::Numbered { text } => {
                self.flush_paragraph();
                if self.list_type != ListType::Numbered {
                    self.counter = 0;
                }
                self.counter += 1;
                self.blocks.push(Block::new(
                    BlockKind::Numbered,
                    format!("{}. {}", self.counter, text),
                ));
                self.list_type = ListType::Numbered;
            }
            LineClass::Emphasis { text } => {
                self.flush_paragraph();
                self.blocks
                    .push(Block::new(BlockKind::Bold, format!("**{}**", text)));
                self.list_type = ListType::None;
            }
            LineClass::Paragraph { text } => {
                // A plain line visually interrupts any list in progress, even
                // though the buffer only flushes on the next non-paragraph
                // line or at end of page.
                self.list_type = ListType::None;
                self.pending.push(text);
            }
        }
    }

    /// Flush the trailing paragraph run and return the page's blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.blocks
    }

    /// One Paragraph block per maximal run of paragraph lines, fragments
    /// joined with single spaces.
    fn flush_paragraph(&mut self) {
        if !self.pending.is_empty() {
            let text = self.pending.join(" ");
            self.pending.clear();
            self.blocks.push(Block::new(BlockKind::Paragraph, text));
        }
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}
