/// Report generation for the extracted palette
use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Ordered palette ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteReport {
    pub colors: Vec<Rgb>,
}

impl PaletteReport {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Render the palette as the `ALLOWED_COLORS` list literal.
    ///
    /// Entries are single-quoted, indented four spaces, and joined with
    /// `,\n`; an empty palette renders an empty body between the
    /// brackets.
    pub fn to_text(&self) -> String {
        let entries: Vec<String> = self
            .colors
            .iter()
            .map(|color| format!("    '{}'", color))
            .collect();

        let mut out = String::from("ALLOWED_COLORS: [\n");
        out.push_str(&entries.join(",\n"));
        out.push_str("\n],");
        out
    }
}
