use serde::{Deserialize, Serialize};

/// Font used for both glyph measurement and drawing.
///
/// Measuring with one descriptor and drawing with another makes the collider
/// and the visible label drift apart, so a text body keeps its own copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub family: String,
    /// Pixel size
    pub size: f64,
    pub weight: u16,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f64, weight: u16) -> Self {
        Self { family: family.into(), size, weight }
    }

    /// CSS font shorthand, e.g. `500 50px Telma`
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.weight, self.size, self.family)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Telma", 50.0, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_shorthand_matches_canvas_syntax() {
        assert_eq!(FontDescriptor::default().css(), "500 50px Telma");
        assert_eq!(FontDescriptor::new("monospace", 16.0, 400).css(), "400 16px monospace");
        assert_eq!(FontDescriptor::new("Inter", 12.5, 700).css(), "700 12.5px Inter");
    }
}
