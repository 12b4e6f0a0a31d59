use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::anchors::{OrderKeyOptions, collect_anchors, group_anchors, render_plain};
use crate::cli::IndexArgs;
use crate::document::{DocumentSnapshot, require_single_text_frame};
use crate::util::read_json_file;

pub fn run(args: IndexArgs) -> Result<()> {
    let snapshot: DocumentSnapshot = read_json_file(&args.snapshot)?;
    require_single_text_frame(&snapshot.selection)?;

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
    let text = render_plain(&groups);
    info!(group_count = groups.len(), "rendered anchor summary");

    match args.out {
        Some(path) => {
            fs::write(&path, &text)
                .with_context(|| format!("failed to write summary: {}", path.display()))?;
            info!(path = %path.display(), "wrote anchor summary");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write summary to stdout")?;
        }
    }

    Ok(())
}
