use tracing::debug;

use crate::document::Document;
use crate::model::{AnchorRecord, DestinationKind};

use super::order_key::{OrderKeyOptions, derive_number};

/// Scans the document's named destinations and produces one [`AnchorRecord`]
/// per destination that resolves to an actual paragraph. Read-only; skipped
/// destinations are intentional filtering, not failures.
pub fn collect_anchors<D: Document + ?Sized>(
    document: &D,
    options: &OrderKeyOptions,
) -> Vec<AnchorRecord> {
    let mut anchors = Vec::new();

    for id in document.destination_ids() {
        if document.destination_kind(id) != DestinationKind::Text {
            debug!(destination = document.destination_name(id), "skipped non-text destination");
            continue;
        }

        let Some(paragraph) = document.first_paragraph(id) else {
            debug!(
                destination = document.destination_name(id),
                "skipped destination with no resolved paragraph"
            );
            continue;
        };

        let number = derive_number(
            document.numbering_label(paragraph),
            document.parent_frames(paragraph),
            options,
        );

        let raw_name = document.destination_name(id).trim().to_string();
        let normalized_name = normalize_anchor_name(&raw_name).to_string();

        anchors.push(AnchorRecord {
            raw_name,
            normalized_name,
            display_number: number.display,
            order_key: number.key,
            destination: id,
        });
    }

    anchors
}

/// Grouping key for a destination name: surrounding spaces trimmed, then
/// surrounding underscores. "_Gravity_" and "Gravity" land in the same group.
pub fn normalize_anchor_name(name: &str) -> &str {
    name.trim().trim_matches('_')
}
