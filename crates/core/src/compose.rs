//! Final document assembly from per-page block sequences.

use crate::types::{Block, BlockKind};

/// Whether a block kind asks for a blank separator line when the kind
/// changes. List items and emphasis stay visually tight.
fn wants_separator(kind: BlockKind) -> bool {
    matches!(
        kind,
        BlockKind::Heading | BlockKind::Paragraph | BlockKind::Table
    )
}

/// Join per-page block sequences into the final document string.
///
/// A blank line precedes a block whose kind differs from the previous
/// block's on the same page and wants separation. Pages are separated by a
/// single blank line, with none after the last page; the previous-kind
/// tracker resets at every page boundary.
pub fn compose(pages: &[Vec<Block>]) -> String {
    let mut out: Vec<&str> = Vec::new();

    for (index, blocks) in pages.iter().enumerate() {
        let mut prev: Option<BlockKind> = None;
        for block in blocks {
            if prev.is_some_and(|p| p != block.kind) && wants_separator(block.kind) {
                out.push("");
            }
            out.push(&block.content);
            prev = Some(block.kind);
        }
        if index + 1 < pages.len() {
            out.push("");
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: BlockKind, content: &str) -> Block {
        Block::new(kind, content)
    }

    #[test]
    fn heading_to_paragraph_gets_a_blank_line() {
        let pages = vec![vec![
            block(BlockKind::Heading, "# Title"),
            block(BlockKind::Paragraph, "Body."),
        ]];
        assert_eq!(compose(&pages), "# Title\n\nBody.");
    }

    #[test]
    fn consecutive_list_items_stay_tight() {
        let pages = vec![vec![
            block(BlockKind::Bullet, "- a"),
            block(BlockKind::Bullet, "- b"),
            block(BlockKind::Numbered, "1. c"),
        ]];
        // Bullet -> numbered is a kind change, but lists never force a blank.
        assert_eq!(compose(&pages), "- a\n- b\n1. c");
    }

    #[test]
    fn paragraph_after_a_list_gets_a_blank_line() {
        let pages = vec![vec![
            block(BlockKind::Bullet, "- a"),
            block(BlockKind::Paragraph, "After."),
        ]];
        assert_eq!(compose(&pages), "- a\n\nAfter.");
    }

    #[test]
    fn emphasis_transitions_get_no_blank_line() {
        let pages = vec![vec![
            block(BlockKind::Bullet, "- a"),
            block(BlockKind::Bold, "**note**"),
        ]];
        assert_eq!(compose(&pages), "- a\n**note**");
    }

    #[test]
    fn first_block_of_a_page_gets_no_separator() {
        // The tracker resets per page: no blank beyond the inter-page one,
        // even though the kind differs from the previous page's last block.
        let pages = vec![
            vec![block(BlockKind::Bullet, "- a")],
            vec![block(BlockKind::Paragraph, "Next page.")],
        ];
        assert_eq!(compose(&pages), "- a\n\nNext page.");
    }

    #[test]
    fn pages_are_separated_by_one_blank_line() {
        let pages = vec![
            vec![block(BlockKind::Paragraph, "One.")],
            vec![block(BlockKind::Paragraph, "Two.")],
        ];
        assert_eq!(compose(&pages), "One.\n\nTwo.");
    }

    #[test]
    fn no_trailing_blank_after_the_last_page() {
        let pages = vec![vec![block(BlockKind::Paragraph, "Only.")]];
        assert_eq!(compose(&pages), "Only.");
    }

    #[test]
    fn empty_input_composes_to_an_empty_string() {
        assert_eq!(compose(&[]), "");
    }

    #[test]
    fn same_kind_run_gets_no_separator() {
        let pages = vec![vec![
            block(BlockKind::Heading, "# A"),
            block(BlockKind::Heading, "## B"),
        ]];
        assert_eq!(compose(&pages), "# A\n## B");
    }
}
