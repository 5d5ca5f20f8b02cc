use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Category palette
// ---------------------------------------------------------------------------

/// The ten-colour categorical scheme used by d3 and matplotlib (`tab10`).
const CATEGORY10: [u32; 10] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22,
    0x17becf,
];

/// The `i`-th colour of the category scheme, wrapping around after ten.
pub fn category_color(i: usize) -> Color32 {
    let rgb: Srgb = Srgb::<u8>::from(CATEGORY10[i % CATEGORY10.len()]).into_format();
    to_color32(rgb)
}

/// A lighter tint of `color`, used for box fills.
pub fn tint(color: Color32, amount: f32) -> Color32 {
    let rgb: Srgb = Srgb::<u8>::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let rgb: Srgb = hsl.lighten(amount).into_color();
    to_color32(rgb)
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Ordinal colour scale: species label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels to colours in domain order, cycling through the
/// category scheme.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over `labels`, which are kept in the given order.
    pub fn new(labels: &[String]) -> Self {
        let mapping = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), category_color(i)))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour), domain order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.mapping
    }
}
