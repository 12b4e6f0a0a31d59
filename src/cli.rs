use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "anchor-index",
    version,
    about = "Anchor glossary extraction tooling for document snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a plain-text summary of the document's named anchors.
    Index(IndexArgs),
    /// Emit a hyperlink write plan for the document's named anchors.
    Links(LinksArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Document snapshot exported from the host (JSON).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Write the rendered summary here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Order anchors by page position even when outline numbering exists.
    #[arg(long, default_value_t = false)]
    pub page_order: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LinksArgs {
    /// Document snapshot exported from the host (JSON).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Write the hyperlink plan here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Name of the character style applied to hyperlink runs. Must exist in
    /// the document.
    #[arg(long, default_value = "Hyperlink")]
    pub character_style: String,

    /// Print the plan as plain text (link runs flattened) instead of JSON.
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Order anchors by page position even when outline numbering exists.
    #[arg(long, default_value_t = false)]
    pub page_order: bool,
}
