//! Document-wide typography statistics.

use std::collections::BTreeMap;

use crate::types::Document;

/// Body size used when no character in the document carries size metadata.
pub const DEFAULT_BODY_SIZE: f32 = 12.0;

/// The dominant ("body") font size of a document, the denominator for every
/// heading-ratio test.
///
/// Computed once, before any page is classified, and read-only thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontProfile {
    pub body_size: f32,
}

impl FontProfile {
    /// Estimate the body size as the statistical mode of character sizes,
    /// rounded to one decimal place, pooled across every page.
    ///
    /// Ties break toward the lowest size. Documents without any usable size
    /// metadata fall back to [`DEFAULT_BODY_SIZE`].
    pub fn from_document(doc: &Document) -> Self {
        let mut histogram: BTreeMap<i32, usize> = BTreeMap::new();
        for page in &doc.pages {
            for ch in &page.chars {
                if let Some(size) = ch.size.filter(|s| *s > 0.0) {
                    *histogram.entry(decimal_key(size)).or_insert(0) += 1;
                }
            }
        }

        // Ascending key order plus a strict comparison keeps the lowest
        // size on a tie.
        let mut best: Option<(i32, usize)> = None;
        for (key, count) in histogram {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((key, count));
            }
        }

        FontProfile {
            body_size: best.map_or(DEFAULT_BODY_SIZE, |(key, _)| key as f32 / 10.0),
        }
    }
}

/// Quantise a size to a one-decimal-place integer key.
fn decimal_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}
