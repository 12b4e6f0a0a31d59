use serde::{Deserialize, Serialize};

/// Opaque handle to a named destination in the source document. The `links`
/// command carries it through to the write plan so a host-side adapter can
/// bind hyperlinks back to the original destination objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(pub usize);

/// Opaque handle to a paragraph in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParagraphId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DestinationKind {
    /// Points into a text range; the only kind anchors are built from.
    Text,
    /// Any other destination kind the host exports (pages, URLs, ...).
    Other,
}

impl From<String> for DestinationKind {
    fn from(value: String) -> Self {
        if value == "text" {
            Self::Text
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SelectionKind {
    TextFrame,
    Other,
}

impl From<String> for SelectionKind {
    fn from(value: String) -> Self {
        if value == "text_frame" {
            Self::TextFrame
        } else {
            Self::Other
        }
    }
}

/// One text frame currently displaying a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntry {
    pub page_name: String,
    #[serde(default = "default_true")]
    pub valid: bool,
}

fn default_true() -> bool {
    true
}

/// One (destination, resolved paragraph) pair discovered in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// Destination name with surrounding spaces trimmed.
    pub raw_name: String,
    /// `raw_name` with surrounding underscores additionally trimmed; distinct
    /// raw names may collapse to the same normalized name.
    pub normalized_name: String,
    /// Outline number ("1.2.3") or synthesized page label ("p12?", "?").
    pub display_number: String,
    /// Total-order sort key derived from `display_number`; ties keep input
    /// order.
    pub order_key: u64,
    pub destination: DestinationId,
}

/// One step of a hyperlink write plan. Plans are built fully in memory and
/// applied to the output target in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum WriteOp {
    Text {
        text: String,
    },
    /// A text run that becomes a hyperlink source bound to `destination`,
    /// styled with the named character style.
    Link {
        text: String,
        destination: DestinationId,
        style: String,
    },
    LineBreak,
}
