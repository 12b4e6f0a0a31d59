use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::anchors::{OrderKeyOptions, apply_ops, collect_anchors, group_anchors, plan_link_ops};
use crate::cli::LinksArgs;
use crate::document::{Document, DocumentSnapshot, StoryWriter, require_single_text_frame};
use crate::model::DestinationId;
use crate::util::{read_json_file, write_json_pretty};

pub fn run(args: LinksArgs) -> Result<()> {
    let snapshot: DocumentSnapshot = read_json_file(&args.snapshot)?;
    require_single_text_frame(&snapshot.selection)?;

    if !snapshot.has_character_style(&args.character_style) {
        bail!(
            "character style not found in document: {}",
            args.character_style
        );
    }

    let options = OrderKeyOptions {
        prefer_outline_number: !args.page_order,
    };

    let anchors = collect_anchors(&snapshot, &options);
    info!(
        destination_count = snapshot.destinations.len(),
        anchor_count = anchors.len(),
        "scanned destinations"
    );

    let groups = group_anchors(anchors);
    let ops = plan_link_ops(&groups, &args.character_style);
    info!(
        group_count = groups.len(),
        op_count = ops.len(),
        style = %args.character_style,
        "planned hyperlink writes"
    );

    if args.preview {
        let mut preview = PreviewWriter::default();
        apply_ops(&ops, &mut preview)?;
        return emit(args.out.as_deref(), preview.text.as_bytes());
    }

    match &args.out {
        Some(path) => {
            write_json_pretty(path, &ops)?;
            info!(path = %path.display(), "wrote hyperlink plan");
            Ok(())
        }
        None => {
            let mut data = serde_json::to_vec_pretty(&ops).context("failed to serialize plan")?;
            data.push(b'\n');
            emit(None, &data)
        }
    }
}

fn emit(out: Option<&Path>, data: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, data)
                .with_context(|| format!("failed to write plan: {}", path.display()))?;
            info!(path = %path.display(), "wrote hyperlink plan");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(data)
                .context("failed to write plan to stdout")
        }
    }
}

/// Flattens a plan to plain text for inspection: link runs lose their styling
/// and destination binding, line breaks become newlines.
#[derive(Default)]
struct PreviewWriter {
    text: String,
}

impl StoryWriter for PreviewWriter {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text.push_str(text);
        Ok(())
    }

    fn write_link(&mut self, text: &str, _destination: DestinationId, _style: &str) -> Result<()> {
        self.text.push_str(text);
        Ok(())
    }

    fn write_line_break(&mut self) -> Result<()> {
        self.text.push('\n');
        Ok(())
    }
}
