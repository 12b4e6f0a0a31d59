use std::collections::BTreeMap;

use anyhow::Result;

use crate::document::StoryWriter;
use crate::model::{AnchorRecord, WriteOp};

/// Buckets anchors by normalized name and sorts each bucket by order key.
/// The `BTreeMap` gives lexicographic group order; the per-bucket sort is
/// stable, so equal keys keep document order.
pub fn group_anchors(anchors: Vec<AnchorRecord>) -> BTreeMap<String, Vec<AnchorRecord>> {
    let mut groups: BTreeMap<String, Vec<AnchorRecord>> = BTreeMap::new();

    for anchor in anchors {
        groups
            .entry(anchor.normalized_name.clone())
            .or_default()
            .push(anchor);
    }

    for records in groups.values_mut() {
        records.sort_by_key(|record| record.order_key);
    }

    groups
}

/// Renders the plain summary block: one `"<name>: <n1> & <n2> & ...\r"` line
/// per group. The carriage return is the host's paragraph break; the block
/// replaces the selected frame's contents wholesale.
pub fn render_plain(groups: &BTreeMap<String, Vec<AnchorRecord>>) -> String {
    let mut out = String::new();

    for (name, records) in groups {
        let numbers = records
            .iter()
            .map(|record| record.display_number.as_str())
            .collect::<Vec<&str>>()
            .join(" & ");

        out.push_str(name);
        out.push_str(": ");
        out.push_str(&numbers);
        out.push('\r');
    }

    out
}

/// Builds the hyperlink variant's write plan in memory: per group a leading
/// `"<name>: "` run, one linked run per record with `"& "` between records,
/// then a line break. Applying the plan is a separate, side-effecting step.
pub fn plan_link_ops(
    groups: &BTreeMap<String, Vec<AnchorRecord>>,
    style_name: &str,
) -> Vec<WriteOp> {
    let mut ops = Vec::new();

    for (name, records) in groups {
        ops.push(WriteOp::Text {
            text: format!("{name}: "),
        });

        for (index, record) in records.iter().enumerate() {
            ops.push(WriteOp::Link {
                text: record.display_number.clone(),
                destination: record.destination,
                style: style_name.to_string(),
            });

            if index + 1 < records.len() {
                ops.push(WriteOp::Text {
                    text: "& ".to_string(),
                });
            }
        }

        ops.push(WriteOp::LineBreak);
    }

    ops
}

/// Replays a write plan against the output port in one pass. Appends to
/// whatever the target already holds; re-applying duplicates content.
pub fn apply_ops(ops: &[WriteOp], writer: &mut dyn StoryWriter) -> Result<()> {
    for op in ops {
        match op {
            WriteOp::Text { text } => writer.write_text(text)?,
            WriteOp::Link {
                text,
                destination,
                style,
            } => writer.write_link(text, *destination, style)?,
            WriteOp::LineBreak => writer.write_line_break()?,
        }
    }

    Ok(())
}
