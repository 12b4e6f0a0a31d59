mod discovery;
mod format;
mod order_key;

pub use discovery::{collect_anchors, normalize_anchor_name};
pub use format::{apply_ops, group_anchors, plan_link_ops, render_plain};
pub use order_key::{OrderKeyOptions, UNORDERED_KEY};
