//! # Document content codec
//!
//! A document's `content` is stored as JSON of the form
//! `{"blocks": [{"type": "heading", "content": "..."}, ...]}`. The editor shows it
//! as plain lines instead, and this module converts between the two.
//!
//! ## Text to blocks ([`encode`])
//!
//! Blank lines are dropped. Each remaining line is trimmed and classified by its
//! prefix, longest first: `"## "` makes a `subheading`, `"# "` a `heading`,
//! anything else a `paragraph`.
//!
//! ## Blocks to text ([`decode`])
//!
//! A `heading` becomes `"# {content}\n\n"`; every other block type, `subheading`
//! included, becomes `"{content}\n"`. Fragments are joined with `"\n"`.
//! Content that is not a JSON object with a `blocks` array decodes to the empty
//! string so the editor always opens. Inside the array each block is read
//! leniently: a missing or `null` `content` is `""`, and a number or boolean is
//! shown as text, so one odd block never hides the others.
//!
//! The conversion is not a strict inverse: blank lines never survive a round
//! trip and subheadings come back without their `##` marker.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Block type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Subheading,
    Paragraph,
    /// Any tag this client does not know, or a missing one.
    #[default]
    #[serde(other)]
    Other,
}

impl BlockKind {
    fn from_tag(tag: &str) -> Self {
        serde_json::from_value(Value::String(tag.to_string())).unwrap_or_default()
    }
}

/// One unit of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Read one stored block. Never fails.
    fn from_value(value: &Value) -> Self {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(BlockKind::from_tag)
            .unwrap_or_default();
        let content = match value.get("content") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            _ => String::new(),
        };
        Block { kind, content }
    }

    /// Classify one trimmed, non-empty line of editor text.
    fn from_line(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix("## ") {
            Block::new(BlockKind::Subheading, rest.trim())
        } else if let Some(rest) = line.strip_prefix("# ") {
            Block::new(BlockKind::Heading, rest.trim())
        } else {
            Block::new(BlockKind::Paragraph, line)
        }
    }

    /// The editor text for this block.
    fn to_fragment(&self) -> String {
        match self.kind {
            BlockKind::Heading => format!("# {}\n\n", self.content),
            BlockKind::Subheading | BlockKind::Paragraph | BlockKind::Other => {
                format!("{}\n", self.content)
            }
        }
    }
}

/// The stored shape of a document's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockDocument {
    pub blocks: Vec<Block>,
}

impl BlockDocument {
    /// Pretty-printed JSON, as sent to the documents service.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| EMPTY_DOCUMENT.to_string())
    }
}

const EMPTY_DOCUMENT: &str = r#"{"blocks":[]}"#;

/// Parse stored content. `None` unless it is a JSON object whose `blocks`
/// field is an array.
pub fn parse(stored: &str) -> Option<BlockDocument> {
    let value: Value = serde_json::from_str(stored).ok()?;
    let blocks = value.as_object()?.get("blocks")?.as_array()?;
    Some(BlockDocument {
        blocks: blocks.iter().map(Block::from_value).collect(),
    })
}

/// Stored content to editor text. Malformed content yields `""`.
pub fn decode(stored: &str) -> String {
    match parse(stored) {
        Some(document) => decode_blocks(&document.blocks),
        None => String::new(),
    }
}

/// Blocks to editor text.
pub fn decode_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::to_fragment)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Editor text to blocks. Never fails; blank input gives no blocks.
pub fn encode_blocks(text: &str) -> BlockDocument {
    let blocks = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Block::from_line)
        .collect();
    BlockDocument { blocks }
}

/// Editor text to storable content.
pub fn encode(text: &str) -> String {
    encode_blocks(text).to_json()
}

/// Whether `json` is syntactically valid JSON. Used to reject raw edits.
pub fn is_well_formed(json: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(json).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks_of(stored: &str) -> Vec<Block> {
        parse(stored).expect("encode output parses").blocks
    }

    #[test]
    fn test_decode_malformed_content_is_empty() {
        assert_eq!(decode(""), "");
        assert_eq!(decode("not json"), "");
        assert_eq!(decode("{}"), "");
        assert_eq!(decode(r#"{"blocks": []}"#), "");
        assert_eq!(decode(r#"{"blocks": "nope"}"#), "");
        assert_eq!(decode("null"), "");
        assert_eq!(decode(r#"{"foo": 1}"#), "");
    }

    #[test]
    fn test_top_level_array_is_not_a_document() {
        assert!(parse(r#"[[{"type": "heading", "content": "x"}]]"#).is_none());
        assert_eq!(decode(r#"[[{"type": "heading", "content": "x"}]]"#), "");
        assert_eq!(decode("[]"), "");
    }

    #[test]
    fn test_odd_block_content_keeps_the_rest() {
        let stored = r#"{"blocks": [
            {"type": "heading", "content": "Keep"},
            {"type": "paragraph", "content": null},
            {"type": "paragraph", "content": 42},
            {"type": "paragraph", "content": {"nested": true}},
            "not a block",
            {"type": "paragraph", "content": "Tail"}
        ]}"#;
        assert_eq!(decode(stored), "# Keep\n\n\n\n\n42\n\n\n\n\n\nTail\n");
    }

    #[test]
    fn test_encode_blank_input() {
        assert_eq!(encode_blocks(""), BlockDocument::default());
        assert_eq!(encode_blocks("  \n\t\n   "), BlockDocument::default());
        assert!(blocks_of(&encode("")).is_empty());
    }

    #[test]
    fn test_heading_single_block() {
        let stored = encode("# Title");
        assert_eq!(blocks_of(&stored), vec![Block::new(BlockKind::Heading, "Title")]);
        assert_eq!(decode(&stored), "# Title\n\n");
    }

    #[test]
    fn test_subheading_loses_marker_on_decode() {
        let stored = encode("## Sub");
        assert_eq!(blocks_of(&stored), vec![Block::new(BlockKind::Subheading, "Sub")]);
        assert_eq!(decode(&stored), "Sub\n");
    }

    #[test]
    fn test_blank_lines_are_absorbed() {
        let blocks = encode_blocks("Line1\n\nLine2").blocks;
        assert_eq!(
            blocks,
            vec![
                Block::new(BlockKind::Paragraph, "Line1"),
                Block::new(BlockKind::Paragraph, "Line2"),
            ]
        );
    }

    #[test]
    fn test_encode_trims_and_classifies() {
        let text = "  #   Spaced heading  \r\n##    Spaced sub\n   plain text   \n#NoSpace\n# \n";
        let blocks = encode_blocks(text).blocks;
        assert_eq!(
            blocks,
            vec![
                Block::new(BlockKind::Heading, "Spaced heading"),
                Block::new(BlockKind::Subheading, "Spaced sub"),
                Block::new(BlockKind::Paragraph, "plain text"),
                Block::new(BlockKind::Paragraph, "#NoSpace"),
                Block::new(BlockKind::Paragraph, "#"),
            ]
        );
    }

    #[test]
    fn test_decode_joins_blocks_with_blank_line() {
        let stored = r#"{"blocks": [
            {"type": "paragraph", "content": "One"},
            {"type": "paragraph", "content": "Two"}
        ]}"#;
        assert_eq!(decode(stored), "One\n\nTwo\n");
    }

    #[test]
    fn test_decode_unknown_or_missing_fields() {
        let stored = r#"{"blocks": [
            {"type": "quote", "content": "Said"},
            {"content": "No type"},
            {"type": "paragraph"}
        ]}"#;
        assert_eq!(decode(stored), "Said\n\nNo type\n\n\n");
    }

    #[test]
    fn test_decode_then_encode_keeps_order_and_content() {
        let original = encode("# Intro\nFirst paragraph\n\nSecond paragraph");
        let reencoded = encode(&decode(&original));
        assert_eq!(blocks_of(&reencoded), blocks_of(&original));
    }

    #[test]
    fn test_encode_serializes_type_tag() {
        let json: serde_json::Value = serde_json::from_str(&encode("# A\nb")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blocks": [
                    {"type": "heading", "content": "A"},
                    {"type": "paragraph", "content": "b"}
                ]
            })
        );
    }

    #[test]
    fn test_encode_large_input() {
        let text = "# Head\nbody line\n\n".repeat(100_000);
        let document = encode_blocks(&text);
        assert_eq!(document.blocks.len(), 200_000);
        assert!(parse(&document.to_json()).is_some());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed(r#"{"blocks": []}"#));
        assert!(is_well_formed("[1, 2]"));
        assert!(!is_well_formed("{blocks: ["));
    }
}
