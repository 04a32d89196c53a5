//! # Theme Configuration
//!
//! Centralized color, spacing and decoration tokens for every visual mode.
//! Views look a theme up once per render with [`ThemeConfig::for_mode`] and
//! build their inline styles from it, so switching mode is a single state
//! change at the root.
//!
//! ## Usage
//! ```rust
//! use lifeplan_domain::theme::{Mode, ThemeConfig};
//!
//! let theme = ThemeConfig::for_mode(Mode::from_name("dark"));
//! assert_eq!(theme.palette.background.to_hex(), "#1e1f26");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Simple,
    Cute,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Simple, Mode::Cute, Mode::Dark];

    /// Resolve a mode name, falling back to [`Mode::Simple`] for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cute" => Mode::Cute,
            "dark" => Mode::Dark,
            _ => Mode::Simple,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Cute => "cute",
            Mode::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Cute => "Cute",
            Mode::Dark => "Dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#ff9a9e`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Main theme configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub mode: Mode,
    pub palette: Palette,
    /// Pie slice colors, cycled when there are more slices than colors
    pub chart: [Rgb; 8],
    pub spacing: Spacing,
    pub decoration: Decoration,
}

/// Background, text and accent colors
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    /// Cards, tables and modals
    pub surface: Rgb,
    pub text: Rgb,
    pub muted_text: Rgb,
    pub accent: Rgb,
    /// Text drawn on top of `accent`
    pub on_accent: Rgb,
    pub border: Rgb,
    pub error: Rgb,
    pub header_background: Rgb,
    pub sidebar_background: Rgb,
}

/// Spacing tokens in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

/// Shape and ornament tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub border_radius: u16,
    pub border_width: u16,
    pub shadow: &'static str,
    pub font_family: &'static str,
    /// Prefix shown before page headings
    pub heading_icon: &'static str,
}

impl ThemeConfig {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Simple => simple(),
            Mode::Cute => cute(),
            Mode::Dark => dark(),
        }
    }

    /// Resolve straight from a mode name
    pub fn for_name(name: &str) -> Self {
        Self::for_mode(Mode::from_name(name))
    }

    pub fn chart_color(&self, index: usize) -> Rgb {
        self.chart[index % self.chart.len()]
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}

fn simple() -> ThemeConfig {
    ThemeConfig {
        mode: Mode::Simple,
        palette: Palette {
            background: Rgb(245, 246, 248),
            surface: Rgb(255, 255, 255),
            text: Rgb(51, 51, 51),
            muted_text: Rgb(110, 110, 110),
            accent: Rgb(52, 120, 246),
            on_accent: Rgb(255, 255, 255),
            border: Rgb(220, 220, 220),
            error: Rgb(211, 47, 47),
            header_background: Rgb(255, 255, 255),
            sidebar_background: Rgb(250, 250, 250),
        },
        chart: [
            Rgb(52, 120, 246),
            Rgb(0, 184, 148),
            Rgb(253, 203, 110),
            Rgb(225, 112, 85),
            Rgb(108, 92, 231),
            Rgb(0, 206, 201),
            Rgb(232, 67, 147),
            Rgb(99, 110, 114),
        ],
        spacing: Spacing { xs: 4, sm: 8, md: 16, lg: 24 },
        decoration: Decoration {
            border_radius: 4,
            border_width: 1,
            shadow: "0 1px 2px rgba(0, 0, 0, 0.08)",
            font_family: "system-ui, sans-serif",
            heading_icon: "",
        },
    }
}

fn cute() -> ThemeConfig {
    ThemeConfig {
        mode: Mode::Cute,
        palette: Palette {
            background: Rgb(255, 240, 245),
            surface: Rgb(255, 255, 255),
            text: Rgb(90, 60, 80),
            muted_text: Rgb(160, 120, 140),
            accent: Rgb(255, 154, 158),
            on_accent: Rgb(255, 255, 255),
            border: Rgb(250, 208, 196),
            error: Rgb(220, 20, 60),
            header_background: Rgb(255, 214, 224),
            sidebar_background: Rgb(255, 228, 236),
        },
        chart: [
            Rgb(255, 154, 158),
            Rgb(240, 147, 251),
            Rgb(196, 113, 237),
            Rgb(161, 196, 253),
            Rgb(194, 233, 251),
            Rgb(255, 236, 210),
            Rgb(252, 182, 159),
            Rgb(212, 252, 121),
        ],
        spacing: Spacing { xs: 6, sm: 10, md: 18, lg: 28 },
        decoration: Decoration {
            border_radius: 16,
            border_width: 2,
            shadow: "0 4px 12px rgba(255, 154, 158, 0.35)",
            font_family: "'Comic Neue', 'Rounded Mplus 1c', sans-serif",
            heading_icon: "🌸 ",
        },
    }
}

fn dark() -> ThemeConfig {
    ThemeConfig {
        mode: Mode::Dark,
        palette: Palette {
            background: Rgb(30, 31, 38),
            surface: Rgb(42, 44, 54),
            text: Rgb(230, 230, 235),
            muted_text: Rgb(150, 152, 165),
            accent: Rgb(126, 120, 229),
            on_accent: Rgb(255, 255, 255),
            border: Rgb(64, 66, 80),
            error: Rgb(255, 107, 107),
            header_background: Rgb(24, 25, 31),
            sidebar_background: Rgb(36, 37, 46),
        },
        chart: [
            Rgb(126, 120, 229),
            Rgb(72, 219, 251),
            Rgb(29, 209, 161),
            Rgb(254, 202, 87),
            Rgb(255, 107, 107),
            Rgb(255, 159, 243),
            Rgb(84, 160, 255),
            Rgb(200, 214, 229),
        ],
        spacing: Spacing { xs: 4, sm: 8, md: 16, lg: 24 },
        decoration: Decoration {
            border_radius: 8,
            border_width: 1,
            shadow: "0 2px 8px rgba(0, 0, 0, 0.5)",
            font_family: "system-ui, sans-serif",
            heading_icon: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(Mode::from_name("cute"), Mode::Cute);
        assert_eq!(Mode::from_name(" DARK "), Mode::Dark);
        assert_eq!(Mode::from_name("simple"), Mode::Simple);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_simple() {
        assert_eq!(Mode::from_name(""), Mode::Simple);
        assert_eq!(Mode::from_name("neon"), Mode::Simple);
        assert_eq!(ThemeConfig::for_name("neon"), ThemeConfig::default());
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), mode);
            assert_eq!(ThemeConfig::for_mode(mode).mode, mode);
        }
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb(255, 154, 158).to_hex(), "#ff9a9e");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_chart_colors_cycle() {
        let theme = ThemeConfig::for_mode(Mode::Cute);
        assert_eq!(theme.chart_color(0), theme.chart_color(8));
        assert_ne!(theme.chart_color(0), theme.chart_color(1));
    }

    #[test]
    fn test_modes_differ() {
        let simple = ThemeConfig::for_mode(Mode::Simple);
        let dark = ThemeConfig::for_mode(Mode::Dark);
        assert_ne!(simple.palette.background, dark.palette.background);
        assert!(ThemeConfig::for_mode(Mode::Cute).decoration.border_radius > simple.decoration.border_radius);
    }
}
