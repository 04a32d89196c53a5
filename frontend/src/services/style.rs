//! Inline style strings built from the active theme.

use lifeplan_domain::theme::ThemeConfig;

pub fn page_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; color: {}; font-family: {}; min-height: 100vh; display: flex; flex-direction: column;",
        theme.palette.background.to_hex(),
        theme.palette.text.to_hex(),
        theme.decoration.font_family,
    )
}

pub fn header_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; border-bottom: {}px solid {}; padding: {}px {}px; display: flex; justify-content: space-between; align-items: center;",
        theme.palette.header_background.to_hex(),
        theme.decoration.border_width,
        theme.palette.border.to_hex(),
        theme.spacing.sm,
        theme.spacing.lg,
    )
}

pub fn sidebar_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; border-right: {}px solid {}; padding: {}px; width: 220px; display: flex; flex-direction: column; gap: {}px;",
        theme.palette.sidebar_background.to_hex(),
        theme.decoration.border_width,
        theme.palette.border.to_hex(),
        theme.spacing.md,
        theme.spacing.sm,
    )
}

pub fn content_style(theme: &ThemeConfig) -> String {
    format!("flex: 1; padding: {}px; overflow-x: auto;", theme.spacing.lg)
}

pub fn card_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; border: {}px solid {}; border-radius: {}px; box-shadow: {}; padding: {}px; margin-bottom: {}px;",
        theme.palette.surface.to_hex(),
        theme.decoration.border_width,
        theme.palette.border.to_hex(),
        theme.decoration.border_radius,
        theme.decoration.shadow,
        theme.spacing.md,
        theme.spacing.md,
    )
}

pub fn button_style(theme: &ThemeConfig, primary: bool) -> String {
    let (background, color) = if primary {
        (theme.palette.accent.to_hex(), theme.palette.on_accent.to_hex())
    } else {
        (theme.palette.surface.to_hex(), theme.palette.text.to_hex())
    };
    format!(
        "background: {}; color: {}; border: {}px solid {}; border-radius: {}px; padding: {}px {}px; cursor: pointer;",
        background,
        color,
        theme.decoration.border_width,
        theme.palette.accent.to_hex(),
        theme.decoration.border_radius,
        theme.spacing.xs,
        theme.spacing.md,
    )
}

pub fn danger_button_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; color: #ffffff; border: none; border-radius: {}px; padding: {}px {}px; cursor: pointer;",
        theme.palette.error.to_hex(),
        theme.decoration.border_radius,
        theme.spacing.xs,
        theme.spacing.md,
    )
}

pub fn input_style(theme: &ThemeConfig, has_error: bool) -> String {
    let border = if has_error {
        theme.palette.error
    } else {
        theme.palette.border
    };
    format!(
        "background: {}; color: {}; border: {}px solid {}; border-radius: {}px; padding: {}px; width: 100%; box-sizing: border-box;",
        theme.palette.surface.to_hex(),
        theme.palette.text.to_hex(),
        theme.decoration.border_width,
        border.to_hex(),
        theme.decoration.border_radius,
        theme.spacing.sm,
    )
}

pub fn field_style(theme: &ThemeConfig) -> String {
    format!("display: flex; flex-direction: column; gap: {}px; margin-bottom: {}px;", theme.spacing.xs, theme.spacing.md)
}

pub fn error_text_style(theme: &ThemeConfig) -> String {
    format!("color: {}; font-size: 0.85rem;", theme.palette.error.to_hex())
}

pub fn muted_text_style(theme: &ThemeConfig) -> String {
    format!("color: {}; font-size: 0.9rem;", theme.palette.muted_text.to_hex())
}

pub fn link_style(theme: &ThemeConfig) -> String {
    format!("color: {}; text-decoration: none;", theme.palette.accent.to_hex())
}

pub fn table_style(theme: &ThemeConfig) -> String {
    format!(
        "width: 100%; border-collapse: collapse; background: {};",
        theme.palette.surface.to_hex()
    )
}

pub fn table_cell_style(theme: &ThemeConfig) -> String {
    format!(
        "border-bottom: 1px solid {}; padding: {}px {}px; text-align: left;",
        theme.palette.border.to_hex(),
        theme.spacing.xs,
        theme.spacing.sm,
    )
}

pub fn group_row_style(theme: &ThemeConfig) -> String {
    format!(
        "background: {}; color: {}; font-weight: 600;",
        theme.palette.accent.to_hex(),
        theme.palette.on_accent.to_hex(),
    )
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); display: flex; align-items: center; justify-content: center; z-index: 10;"
}

pub fn modal_style(theme: &ThemeConfig) -> String {
    format!(
        "{} min-width: 360px; max-width: 90vw; max-height: 90vh; overflow-y: auto;",
        card_style(theme)
    )
}

pub fn swatch_style(color_hex: &str) -> String {
    format!(
        "display: inline-block; width: 12px; height: 12px; border-radius: 2px; margin-right: 6px; background: {};",
        color_hex
    )
}

/// Page heading text with the theme's ornament in front
pub fn heading(theme: &ThemeConfig, text: &str) -> String {
    format!("{}{}", theme.decoration.heading_icon, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeplan_domain::theme::Mode;

    #[test]
    fn test_page_style_uses_mode_palette() {
        let dark = ThemeConfig::for_mode(Mode::Dark);
        assert!(page_style(&dark).contains("background: #1e1f26"));
    }

    #[test]
    fn test_input_style_marks_errors() {
        let theme = ThemeConfig::for_mode(Mode::Simple);
        let error_hex = theme.palette.error.to_hex();
        assert!(input_style(&theme, true).contains(&error_hex));
        assert!(!input_style(&theme, false).contains(&error_hex));
    }

    #[test]
    fn test_primary_and_secondary_buttons_differ() {
        let theme = ThemeConfig::for_mode(Mode::Cute);
        assert_ne!(button_style(&theme, true), button_style(&theme, false));
        assert!(button_style(&theme, true).contains("border-radius: 16px"));
    }

    #[test]
    fn test_heading_decoration() {
        assert_eq!(heading(&ThemeConfig::for_mode(Mode::Cute), "Expenses"), "🌸 Expenses");
        assert_eq!(heading(&ThemeConfig::for_mode(Mode::Simple), "Expenses"), "Expenses");
    }
}
