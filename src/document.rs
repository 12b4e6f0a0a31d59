use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::{DestinationId, DestinationKind, FrameEntry, ParagraphId, SelectionKind};

/// Narrow read-only port onto the host document object model. The anchor scan
/// needs nothing beyond these queries, so anything that can answer them (a
/// snapshot file, a live host adapter, a test fixture) can drive it.
pub trait Document {
    /// Named text destinations in document order.
    fn destination_ids(&self) -> Vec<DestinationId>;
    fn destination_kind(&self, id: DestinationId) -> DestinationKind;
    fn destination_name(&self, id: DestinationId) -> &str;
    /// First paragraph of the destination's target range, or `None` when the
    /// destination is orphaned or targets non-paragraph content.
    fn first_paragraph(&self, id: DestinationId) -> Option<ParagraphId>;
    /// Rendered outline-numbering label of the paragraph; empty when no
    /// numbering is applied.
    fn numbering_label(&self, id: ParagraphId) -> &str;
    /// Text frames currently threading the paragraph, in thread order.
    fn parent_frames(&self, id: ParagraphId) -> &[FrameEntry];
    fn has_character_style(&self, name: &str) -> bool;
}

/// Write port for the hyperlink variant. Applying the same plan twice appends
/// twice; the host shell never deduplicates.
pub trait StoryWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
    /// Writes `text`, then spans exactly that run with a hyperlink source
    /// bound to `destination` and styled with the named character style.
    fn write_link(&mut self, text: &str, destination: DestinationId, style: &str) -> Result<()>;
    fn write_line_break(&mut self) -> Result<()>;
}

/// JSON export of the host document state, as produced by the host-side
/// export script. Doubles as the in-memory document used by unit tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub destinations: Vec<DestinationEntry>,
    #[serde(default)]
    pub paragraphs: Vec<ParagraphEntry>,
    #[serde(default)]
    pub character_styles: Vec<String>,
    #[serde(default)]
    pub selection: Vec<SelectionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationEntry {
    pub name: String,
    pub kind: DestinationKind,
    /// Indices into `DocumentSnapshot::paragraphs` for the paragraphs of the
    /// destination's target range; empty when the destination is orphaned.
    #[serde(default)]
    pub paragraphs: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphEntry {
    #[serde(default)]
    pub numbering_label: String,
    #[serde(default)]
    pub frames: Vec<FrameEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub kind: SelectionKind,
}

const EMPTY_FRAMES: &[FrameEntry] = &[];

impl Document for DocumentSnapshot {
    fn destination_ids(&self) -> Vec<DestinationId> {
        (0..self.destinations.len()).map(DestinationId).collect()
    }

    fn destination_kind(&self, id: DestinationId) -> DestinationKind {
        self.destinations[id.0].kind
    }

    fn destination_name(&self, id: DestinationId) -> &str {
        &self.destinations[id.0].name
    }

    fn first_paragraph(&self, id: DestinationId) -> Option<ParagraphId> {
        self.destinations[id.0]
            .paragraphs
            .first()
            .copied()
            .filter(|index| *index < self.paragraphs.len())
            .map(ParagraphId)
    }

    fn numbering_label(&self, id: ParagraphId) -> &str {
        &self.paragraphs[id.0].numbering_label
    }

    fn parent_frames(&self, id: ParagraphId) -> &[FrameEntry] {
        self.paragraphs
            .get(id.0)
            .map(|paragraph| paragraph.frames.as_slice())
            .unwrap_or(EMPTY_FRAMES)
    }

    fn has_character_style(&self, name: &str) -> bool {
        self.character_styles.iter().any(|style| style == name)
    }
}

/// Validates the user's selection before any output is produced: exactly one
/// selected object, and it must be a text frame.
pub fn require_single_text_frame(selection: &[SelectionEntry]) -> Result<()> {
    if selection.len() != 1 {
        bail!("nothing selected or too much, exactly one text frame must be selected");
    }

    if selection[0].kind != SelectionKind::TextFrame {
        bail!("the selected element is not a text frame");
    }

    Ok(())
}
