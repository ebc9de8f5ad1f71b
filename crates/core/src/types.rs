use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single positioned character supplied by the external page source.
///
/// Field aliases match pdfplumber-style character records, so a JSON dump of
/// a page's `chars` deserializes directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Char {
    /// Rendered glyph text (a ligature may carry more than one `char`).
    pub text: String,
    /// Horizontal offset of the glyph's left edge.
    #[serde(alias = "x0")]
    pub x: f32,
    /// Vertical offset measured from the top of the page (smaller = higher).
    #[serde(alias = "top")]
    pub y: f32,
    /// Typographic point size. Absent or non-positive means the source has
    /// no size metadata for this glyph.
    #[serde(default)]
    pub size: Option<f32>,
    /// Font identifier string, e.g. `Helvetica-Bold`.
    #[serde(default, alias = "fontname")]
    pub font: Option<String>,
}

/// A rectangular grid of cell strings extracted by the external table
/// detector. The first row is the header; `None` cells render as empty
/// strings.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// One page of input: positioned characters plus already-extracted tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub chars: Vec<Char>,
    /// Plain-text fallback, used only when the page exposes no character
    /// geometry at all.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub tables: Vec<TableGrid>,
}

/// A whole document, materialized in memory by the page source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

/// A geometrically clustered run of characters approximated as sharing one
/// text baseline. Recomputed per page, never persisted across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Concatenated glyph text, trimmed.
    pub text: String,
    /// Mean size of the constituent characters; `None` when no character
    /// carries size metadata.
    pub size: Option<f32>,
    /// True when any constituent character's font is a bold variant.
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: Self = HeadingLevel(1);
    pub const H2: Self = HeadingLevel(2);
    pub const H3: Self = HeadingLevel(3);

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=3).contains(&value) {
            Ok(HeadingLevel(value))
        } else {
            Err(InvalidHeadingLevel)
        }
    }
}

/// Classification of a single line. Exactly one tag per line.
///
/// `Numbered` carries no ordinal: the emitted number is a counter owned by
/// the assembler, never the numeral found in the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Heading { level: HeadingLevel, text: String },
    Bullet { text: String },
    Numbered { text: String },
    Emphasis { text: String },
    Paragraph { text: String },
}

/// The kind tag of a rendered output block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Bullet,
    Numbered,
    Bold,
    Table,
}

/// One fully rendered unit of Markdown output. Blocks are produced in
/// document order and never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Block {
            kind,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
#[error("Heading level must be between 1 and 3")]
pub struct InvalidHeadingLevel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_valid() {
        assert!(HeadingLevel::try_from(1).is_ok());
        assert!(HeadingLevel::try_from(3).is_ok());
    }

    #[test]
    fn test_heading_level_invalid() {
        assert!(HeadingLevel::try_from(0).is_err());
        assert!(HeadingLevel::try_from(4).is_err());
    }

    #[test]
    fn test_heading_level_accessor() {
        assert_eq!(HeadingLevel::H2.as_u8(), 2);
        assert_eq!(HeadingLevel::try_from(3).unwrap(), HeadingLevel::H3);
    }

    #[test]
    fn test_char_deserializes_pdfplumber_fields() {
        let ch: Char = serde_json::from_str(
            r#"{"text": "A", "x0": 72.1, "top": 96.0, "size": 12.0, "fontname": "Times-Bold"}"#,
        )
        .unwrap();
        assert_eq!(ch.text, "A");
        assert!((ch.x - 72.1).abs() < f32::EPSILON);
        assert!((ch.y - 96.0).abs() < f32::EPSILON);
        assert_eq!(ch.size, Some(12.0));
        assert_eq!(ch.font.as_deref(), Some("Times-Bold"));
    }

    #[test]
    fn test_char_metadata_is_optional() {
        let ch: Char = serde_json::from_str(r#"{"text": "A", "x0": 0.0, "top": 0.0}"#).unwrap();
        assert_eq!(ch.size, None);
        assert_eq!(ch.font, None);
    }

    #[test]
    fn test_page_fields_default() {
        let page: Page = serde_json::from_str("{}").unwrap();
        assert!(page.chars.is_empty());
        assert!(page.text.is_none());
        assert!(page.tables.is_empty());
    }

    #[test]
    fn test_table_grid_null_cells() {
        let grid: TableGrid = serde_json::from_str(r#"[["a", null], [null, "b"]]"#).unwrap();
        assert_eq!(grid[0][1], None);
        assert_eq!(grid[1][1].as_deref(), Some("b"));
    }
}
