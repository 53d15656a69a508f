use crate::render::Color;

/// Fallback used when a theme has no palette entries.
pub const THEME_FALLBACK_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);

const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(1.0, 0.522, 0.2),
    Color::rgb(0.451, 0.675, 0.902),
    Color::rgb(0.51, 0.851, 0.51),
    Color::rgb(0.902, 0.451, 0.675),
    Color::rgb(0.804, 0.42, 0.929),
    Color::rgb(0.51, 0.51, 0.851),
    Color::rgb(0.753, 0.902, 0.314),
    Color::rgb(0.902, 0.675, 0.451),
    Color::rgb(0.42, 0.804, 0.929),
    Color::rgb(0.451, 0.902, 0.675),
];

/// Indexed color palette supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Theme {
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        Self { palette }
    }

    /// Palette entry for `index`, cycling when the index exceeds the palette.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return THEME_FALLBACK_COLOR;
        }
        self.palette[index % self.palette.len()]
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}
