//! Two-pass rich document construction.
//!
//! Pass one accumulates plain text behind a single forward-only cursor;
//! pass two is the recorded list of styling operations addressed by exact
//! character ranges. [`DocFormatter::build`] emits one insert covering the
//! whole buffer followed by the styling operations in emission order, which
//! is the shape the document service's batch endpoint expects.

use serde::{Deserialize, Serialize};

/// First addressable position in a document body.
pub const BODY_START_INDEX: usize = 1;

/// Link accent color applied to every hyperlink.
const LINK_COLOR: RgbColor = RgbColor { red: 0.06, green: 0.45, blue: 0.85 };

/// Divider color for horizontal rules.
const RULE_COLOR: RgbColor = RgbColor { red: 0.8, green: 0.8, blue: 0.8 };

/// A half-open character range `[start, end)` in the accumulated buffer.
/// Spans are produced in strictly increasing order and never shift once
/// emitted, because all insertion happens at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// --- Wire types ------------------------------------------------------------
//
// Serialized JSON matches the document service's batchUpdate request format:
// an externally tagged enum gives `{"insertText": {...}}` and friends.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocRequest {
    InsertText(InsertText),
    UpdateParagraphStyle(UpdateParagraphStyle),
    UpdateTextStyle(UpdateTextStyle),
    CreateParagraphBullets(CreateParagraphBullets),
    DeleteContentRange(DeleteContentRange),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertText {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyle {
    pub range: Range,
    pub paragraph_style: ParagraphStyle,
    pub fields: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_style_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<ParagraphBorder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphBorder {
    pub color: OptionalColor,
    pub width: Dimension,
    pub padding: Dimension,
    pub dash_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyle {
    pub range: Range,
    pub text_style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalColor {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub rgb_color: RgbColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl From<RgbColor> for OptionalColor {
    fn from(rgb: RgbColor) -> Self {
        OptionalColor { color: Color { rgb_color: rgb } }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBullets {
    pub range: Range,
    pub bullet_preset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteContentRange {
    pub range: Range,
}

// --- Builder ---------------------------------------------------------------

/// Append-only text buffer plus recorded styling operations.
#[derive(Debug, Default)]
pub struct DocFormatter {
    text: String,
    ops: Vec<DocRequest>,
    cursor: usize,
}

impl DocFormatter {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            ops: Vec::new(),
            cursor: BODY_START_INDEX,
        }
    }

    /// Current cursor position. Capture before and after a run of whole-line
    /// appends to bracket a bullet range.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Append text and advance the cursor. Offsets count characters, since
    /// the document service addresses positions by character, not byte.
    fn advance(&mut self, text: &str) -> Span {
        let start = self.cursor;
        self.text.push_str(text);
        self.cursor += text.chars().count();
        Span { start, end: self.cursor }
    }

    pub fn add_text(&mut self, text: &str) -> Span {
        self.advance(text)
    }

    pub fn add_newline(&mut self) -> Span {
        self.advance("\n")
    }

    /// Heading with trailing line break. Levels outside 1..=3 fall back
    /// to level 1.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Span {
        let span = self.advance(&format!("{}\n", text));
        let style = match level {
            2 => "HEADING_2",
            3 => "HEADING_3",
            _ => "HEADING_1",
        };
        self.ops.push(DocRequest::UpdateParagraphStyle(UpdateParagraphStyle {
            range: span.into(),
            paragraph_style: ParagraphStyle {
                named_style_type: Some(style.to_string()),
                ..Default::default()
            },
            fields: "namedStyleType".to_string(),
        }));
        span
    }

    fn push_text_style(&mut self, span: Span, text_style: TextStyle, fields: &str) {
        self.ops.push(DocRequest::UpdateTextStyle(UpdateTextStyle {
            range: span.into(),
            text_style,
            fields: fields.to_string(),
        }));
    }

    pub fn add_bold_text(&mut self, text: &str) -> Span {
        let span = self.advance(text);
        self.push_text_style(
            span,
            TextStyle { bold: Some(true), ..Default::default() },
            "bold",
        );
        span
    }

    pub fn add_italic_text(&mut self, text: &str) -> Span {
        let span = self.advance(text);
        self.push_text_style(
            span,
            TextStyle { italic: Some(true), ..Default::default() },
            "italic",
        );
        span
    }

    /// Hyperlink with the fixed accent color.
    pub fn add_link(&mut self, display_text: &str, url: &str) -> Span {
        let span = self.advance(display_text);
        self.push_text_style(
            span,
            TextStyle {
                link: Some(Link { url: url.to_string() }),
                foreground_color: Some(LINK_COLOR.into()),
                ..Default::default()
            },
            "link,foregroundColor",
        );
        span
    }

    pub fn add_bold_link(&mut self, display_text: &str, url: &str) -> Span {
        let span = self.advance(display_text);
        self.push_text_style(
            span,
            TextStyle {
                bold: Some(true),
                link: Some(Link { url: url.to_string() }),
                foreground_color: Some(LINK_COLOR.into()),
                ..Default::default()
            },
            "bold,link,foregroundColor",
        );
        span
    }

    /// Visual divider: an empty paragraph with a bottom border.
    pub fn add_horizontal_rule(&mut self) -> Span {
        let span = self.advance("\n");
        self.ops.push(DocRequest::UpdateParagraphStyle(UpdateParagraphStyle {
            range: span.into(),
            paragraph_style: ParagraphStyle {
                border_bottom: Some(ParagraphBorder {
                    color: RULE_COLOR.into(),
                    width: Dimension { magnitude: 1.0, unit: "PT".to_string() },
                    padding: Dimension { magnitude: 6.0, unit: "PT".to_string() },
                    dash_style: "SOLID".to_string(),
                }),
                ..Default::default()
            },
            fields: "borderBottom".to_string(),
        }));
        span
    }

    /// A whole line destined for a bullet list. Bullet styling is applied
    /// separately over the bracketing range via
    /// [`add_bullets_to_range`](Self::add_bullets_to_range).
    pub fn add_bullet_item(&mut self, text: &str) -> Span {
        self.advance(&format!("{}\n", text))
    }

    /// One coalesced bullet operation covering every paragraph in
    /// `[start, end)`. The bounds must come from [`cursor`](Self::cursor)
    /// checkpoints bracketing whole appended lines; mis-bracketing corrupts
    /// the visual grouping but is a caller bug, not a runtime error.
    pub fn add_bullets_to_range(&mut self, start: usize, end: usize) {
        self.ops.push(DocRequest::CreateParagraphBullets(CreateParagraphBullets {
            range: Range { start_index: start, end_index: end },
            bullet_preset: "BULLET_DISC_CIRCLE_SQUARE".to_string(),
        }));
    }

    /// Total characters appended so far.
    pub fn text_len(&self) -> usize {
        self.cursor - BODY_START_INDEX
    }

    /// Finalize: one insert of the full buffer at the base offset, then the
    /// styling operations in the order they were recorded. Empty builder
    /// yields an empty list (no-op publish).
    pub fn build(self) -> Vec<DocRequest> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let mut requests = Vec::with_capacity(self.ops.len() + 1);
        requests.push(DocRequest::InsertText(InsertText {
            location: Location { index: BODY_START_INDEX },
            text: self.text,
        }));
        requests.extend(self.ops);
        requests
    }
}

impl From<Span> for Range {
    fn from(span: Span) -> Self {
        Range { start_index: span.start, end_index: span.end }
    }
}
