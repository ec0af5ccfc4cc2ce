use crate::datamodel::ColorIndex;

/// Colours offered by the colour slider.
pub const PALETTE: [&str; 5] = ["#e63946", "#f1faee", "#a8dadc", "#457b9d", "#1d3557"];

/// Continuous scale used for per-point colours.
pub const COLOR_SCALE: &str = "Viridis";

pub fn palette_color(index: ColorIndex) -> &'static str {
    PALETTE[index.get()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_index() {
        assert_eq!(PALETTE.len(), ColorIndex::MAX as usize + 1);
        assert_eq!(palette_color(ColorIndex::new(0).unwrap()), "#e63946");
        assert_eq!(palette_color(ColorIndex::new(2).unwrap()), "#a8dadc");
        assert_eq!(palette_color(ColorIndex::new(4).unwrap()), "#1d3557");
    }
}
