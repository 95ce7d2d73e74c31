// Library exports for the paleta color list extractor
pub mod converter;
pub mod pipeline;
pub mod report;
pub mod types;

// Re-export key types for convenience
pub use converter::{hex_to_rgb, ColorParseError};
pub use pipeline::{collect_colors, default_palette_path};
pub use report::PaletteReport;
pub use types::Rgb;
