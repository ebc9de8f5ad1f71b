//! Per-line structural classification.
//!
//! Classification is a priority-ordered, first-match rule list: heading >
//! bullet > numbered > emphasis, with paragraph as the default. The order is
//! part of the contract -- a heading-sized line that starts with a bullet
//! glyph is a heading, and keeps the glyph verbatim in its text.

use std::sync::OnceLock;

use regex::Regex;

use crate::fonts::FontProfile;
use crate::types::{HeadingLevel, Line, LineClass};

/// Heading thresholds as ratios of line size to body size, largest first.
/// Fixed configuration, never derived per document; thresholds are
/// inclusive.
const HEADING_RATIOS: [(f32, HeadingLevel); 3] = [
    (1.5, HeadingLevel::H1),
    (1.3, HeadingLevel::H2),
    (1.15, HeadingLevel::H3),
];

/// Bold runs at or past this length are body text set in a bold face, not
/// true emphasis.
const EMPHASIS_MAX_CHARS: usize = 100;

type Rule = fn(&Line, &FontProfile) -> Option<LineClass>;

/// The ordered rule list, evaluated top to bottom. First match wins.
const RULES: [Rule; 4] = [heading_rule, bullet_rule, numbered_rule, emphasis_rule];

/// Classify one line.
///
/// Pure: the only inputs are the line and the document's font profile. The
/// numbered-list counter is sequence state and lives in the assembler, not
/// here.
pub fn classify_line(line: &Line, profile: &FontProfile) -> LineClass {
    RULES
        .iter()
        .find_map(|rule| rule(line, profile))
        .unwrap_or_else(|| LineClass::Paragraph {
            text: line.text.clone(),
        })
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Size-ratio heading detection. A line without size metadata is never a
/// heading.
fn heading_rule(line: &Line, profile: &FontProfile) -> Option<LineClass> {
    let size = line.size?;
    let ratio = size / profile.body_size;
    HEADING_RATIOS
        .iter()
        .find(|(threshold, _)| ratio >= *threshold)
        .map(|(_, level)| LineClass::Heading {
            level: *level,
            text: line.text.clone(),
        })
}

/// A bullet glyph, or `-`/`*` followed by required whitespace.
fn bullet_rule(line: &Line, _profile: &FontProfile) -> Option<LineClass> {
    bullet_pattern().find(&line.text).map(|m| LineClass::Bullet {
        text: line.text[m.end()..].trim().to_string(),
    })
}

/// One of three equally valid numeral prefixes: digits plus `.`/`)`/`）`,
/// parenthesized digits, or a circled numeral. The source numeral is
/// discarded here; the assembler re-numbers the list contiguously.
fn numbered_rule(line: &Line, _profile: &FontProfile) -> Option<LineClass> {
    numbered_pattern()
        .find(&line.text)
        .map(|m| LineClass::Numbered {
            text: line.text[m.end()..].trim().to_string(),
        })
}

/// Short bold lines are emphasis; long ones fall through to paragraph.
fn emphasis_rule(line: &Line, _profile: &FontProfile) -> Option<LineClass> {
    if line.bold && line.text.chars().count() < EMPHASIS_MAX_CHARS {
        Some(LineClass::Emphasis {
            text: line.text.clone(),
        })
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Prefix patterns
// ---------------------------------------------------------------------------

fn bullet_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:[•・●○◆◇▪▫■□►▸‣⁃]\s*|[-*]\s+)").unwrap()
    })
}

fn numbered_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*(?:\d+[.)）]\s*|[(（]\d+[)）]\s*|[①②③④⑤⑥⑦⑧⑨⑩⑪⑫⑬⑭⑮⑯⑰⑱⑲⑳]\s*)",
        )
        .unwrap()
    })
}
