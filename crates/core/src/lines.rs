//! Geometric clustering of characters into lines.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::{Char, Line, Page};

/// Case-insensitive bold detection on a font identifier.
///
/// Font-name matching depends entirely on the source's naming convention;
/// the check stays behind this one predicate so a different page source can
/// swap it without touching the classifier.
pub fn is_bold_font(font_name: &str) -> bool {
    font_name.to_lowercase().contains("bold")
}

/// Group one page's characters into ordered lines, top of page first.
///
/// Characters sharing a vertical coordinate (rounded to the nearest whole
/// unit) form one line, ordered left to right before concatenation. Lines
/// whose text trims to empty are dropped.
///
/// A page without character geometry degrades to its plain text split on
/// line breaks: no size, no bold, so classification can only ever produce
/// paragraphs for such a page.
pub fn assemble_lines(page: &Page) -> Vec<Line> {
    if page.chars.is_empty() {
        return plain_text_lines(page.text.as_deref().unwrap_or(""));
    }

    let mut rows: BTreeMap<i64, Vec<&Char>> = BTreeMap::new();
    for ch in &page.chars {
        rows.entry(ch.y.round() as i64).or_default().push(ch);
    }

    rows.into_values().filter_map(build_line).collect()
}

/// Assemble one line from characters known to share a rounded baseline.
fn build_line(mut chars: Vec<&Char>) -> Option<Line> {
    // Stable sort keeps source order for equal x.
    chars.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    let text = chars
        .iter()
        .map(|c| c.text.as_str())
        .collect::<String>()
        .trim()
        .to_string();
    if text.is_empty() {
        return None;
    }

    let sizes: Vec<f32> = chars
        .iter()
        .filter_map(|c| c.size.filter(|s| *s > 0.0))
        .collect();
    let size = if sizes.is_empty() {
        None
    } else {
        Some(sizes.iter().sum::<f32>() / sizes.len() as f32)
    };

    let bold = chars
        .iter()
        .any(|c| c.font.as_deref().is_some_and(is_bold_font));

    Some(Line { text, size, bold })
}

fn plain_text_lines(text: &str) -> Vec<Line> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Line {
            text: line.to_string(),
            size: None,
            bold: false,
        })
        .collect()
}
