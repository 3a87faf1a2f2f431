mod cli;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands, FetchArgs, UrlArgs};
use tracing::info;

use assetbridge::config::Config;
use assetbridge::observability::Metrics;
use assetbridge::scheme::{
    self, ChannelDelegate, LoadEvent, SchemeHandler, THUMBNAIL_FRAGMENT,
};
use assetbridge::store::MediaLibrary;

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url(args) => print_url(args)?,
        Commands::Fetch(args) => fetch(args).await?,
    }

    Ok(())
}

fn print_url(args: UrlArgs) -> Result<(), AnyError> {
    let mut url = scheme::asset_url(&args.identifier, args.kind.into())?;
    if args.thumbnail {
        url.set_fragment(Some(THUMBNAIL_FRAGMENT));
    }
    println!("{url}");
    Ok(())
}

async fn fetch(args: FetchArgs) -> Result<(), AnyError> {
    let config = Config::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let library = MediaLibrary::open(&config.library.root, &config.library.catalog)
        .await
        .map_err(|e| format!("Failed to open media library: {e}"))?;

    let mut handler = SchemeHandler::new(
        Arc::new(library),
        config.thumbnail.spec(),
        Arc::new(Metrics::new()),
    );

    let (delegate, result) = ChannelDelegate::new();
    handler.start_load(&args.url, delegate)?;

    match result.await {
        Ok(LoadEvent::Data(payload)) => {
            info!(
                mime = %payload.mime,
                cache = ?payload.cache,
                size = payload.data.len(),
                "Load completed"
            );
            match args.out {
                Some(path) => tokio::fs::write(&path, &payload.data).await?,
                None => std::io::stdout().write_all(&payload.data)?,
            }
            Ok(())
        }
        Ok(LoadEvent::Error(error)) => Err(error.into()),
        Err(_) => Err("load finished without a result".into()),
    }
}
