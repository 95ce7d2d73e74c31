use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paleta::{collect_colors, default_palette_path, PaletteReport};

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the palette document,
    // so log output goes to stderr.
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Paleta v{}", env!("CARGO_PKG_VERSION"));

    let path = default_palette_path();
    let colors = collect_colors(&path)?;
    info!(count = colors.len(), "converted palette entries");

    let report = PaletteReport::new(colors);
    println!("{}", report.to_text());

    Ok(())
}
