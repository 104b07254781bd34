use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.6).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Industry → Color32
// ---------------------------------------------------------------------------

/// Stable colour per industry, shared by the sidebar and the table.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(industries: &BTreeSet<String>) -> Self {
        let mapping = industries
            .iter()
            .cloned()
            .zip(generate_palette(industries.len()))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, industry: &str) -> Color32 {
        self.mapping.get(industry).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn industries_get_distinct_colours() {
        let industries: BTreeSet<String> =
            ["Bank", "Pharma", "Tech"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&industries);
        assert_ne!(cm.color_for("Bank"), cm.color_for("Tech"));
        assert_eq!(cm.color_for("Mining"), Color32::GRAY);
    }
}
