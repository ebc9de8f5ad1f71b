//! Document-structure inference: positioned characters in, Markdown out.
//!
//! This crate is the **functional core** of the pagemark project. It
//! recovers the semantic structure of a paginated document whose only
//! machine-visible representation is raw positioned characters with
//! typographic metadata, and re-emits that structure as Markdown. There is
//! no I/O here -- every function is a pure transformation over data already
//! materialized by the page source, and no input can make the engine fail.
//!
//! # Pipeline
//!
//! ```text
//! Char[] (all pages)  ->  FontProfile           fonts::FontProfile
//! Char[] (per page)   ->  Line[]                lines::assemble_lines
//! Line                ->  LineClass             classify::classify_line
//! LineClass stream    ->  Block[]               assemble::BlockAssembler
//! TableGrid           ->  Block (Markdown)      table::render_table
//! Block[][] (pages)   ->  String                compose::compose
//! ```
//!
//! The font profile is computed over the whole document before any page is
//! classified; pages are then processed strictly in order, with all
//! classifier and assembler state scoped to a single page.

pub mod assemble;
pub mod classify;
pub mod compose;
pub mod fonts;
pub mod lines;
pub mod table;
pub mod types;

pub use assemble::BlockAssembler;
pub use classify::classify_line;
pub use compose::compose;
pub use fonts::{FontProfile, DEFAULT_BODY_SIZE};
pub use lines::{assemble_lines, is_bold_font};
pub use table::render_table;
pub use types::*;

/// Convert a materialized document into Markdown.
///
/// Empty input yields an empty string.
pub fn document_to_markdown(doc: &Document) -> String {
    let profile = FontProfile::from_document(doc);
    let pages: Vec<Vec<Block>> = doc
        .pages
        .iter()
        .map(|page| page_blocks(page, &profile))
        .collect();
    compose(&pages)
}

/// One page's rendered blocks: extracted tables first, then classified text,
/// in the order the page source reports them.
fn page_blocks(page: &Page, profile: &FontProfile) -> Vec<Block> {
    let mut blocks: Vec<Block> = page
        .tables
        .iter()
        .filter_map(render_table)
        .map(|content| Block::new(BlockKind::Table, content))
        .collect();

    let mut assembler = BlockAssembler::new();
    for line in assemble_lines(page) {
        assembler.push(classify_line(&line, profile));
    }
    blocks.extend(assembler.finish());
    blocks
}
