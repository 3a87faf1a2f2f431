use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use assetbridge::scheme::MediaKind;

#[derive(Parser, Debug)]
#[command(name = "assetbridge")]
#[command(about = "Asset-library URL scheme CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a scheme URL for a local identifier
    Url(UrlArgs),
    /// Load a scheme URL against the configured media library
    Fetch(FetchArgs),
}

#[derive(clap::Args, Debug)]
pub struct UrlArgs {
    /// Local identifier (UUID, optionally with a store suffix)
    pub identifier: String,

    /// Media kind of the asset
    #[arg(long, value_enum, default_value_t = KindArg::Image)]
    pub kind: KindArg,

    /// Address the thumbnail variant
    #[arg(long)]
    pub thumbnail: bool,
}

#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    /// assets-library:// URL to load
    pub url: String,

    /// Write payload bytes here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Image,
    Video,
    Audio,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => MediaKind::Image,
            KindArg::Video => MediaKind::Video,
            KindArg::Audio => MediaKind::Audio,
        }
    }
}
