//! Typed style catalog consumed by the rendering layer.
//!
//! Tokens are plain struct fields, so lookups are checked at compile time.
//! Only whole themes are selected by name at runtime.

pub mod commons;
mod dark;
mod light;

use serde::Serialize;

use crate::error::{DexError, Result};

pub use commons::{
    SpinnerSize, ThemeBreakPoints, ThemeDimensions, ThemeFeatures, THEME_BREAKPOINTS,
    THEME_DIMENSIONS, THEME_FEATURES,
};
pub use dark::DARK_THEME;
pub use light::LIGHT_THEME;

/// Name of the theme used when none is requested.
pub const DEFAULT_THEME_NAME: &str = "LIGHT_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub components_theme: ThemeProperties,
    pub modal_theme: ThemeModalStyle,
}

/// Semantic color tokens. Values are CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProperties {
    pub background: &'static str,
    pub border_color: &'static str,
    pub box_shadow: &'static str,
    pub button_convert_background_color: &'static str,
    pub button_convert_border_color: &'static str,
    pub button_convert_text_color: &'static str,
    pub button_error_background_color: &'static str,
    pub button_primary_background_color: &'static str,
    pub button_secondary_background_color: &'static str,
    pub button_tertiary_background_color: &'static str,
    pub card_background_color: &'static str,
    pub card_border_color: &'static str,
    pub card_title_color: &'static str,
    pub dark_blue: &'static str,
    pub dark_gray: &'static str,
    pub darker_gray: &'static str,
    pub dropdown_background_color: &'static str,
    pub dropdown_border_color: &'static str,
    pub dropdown_text_color: &'static str,
    pub error_button_background: &'static str,
    pub error_card_background: &'static str,
    pub error_card_border: &'static str,
    pub error_card_text: &'static str,
    pub eth_box_active_color: &'static str,
    pub eth_box_border_color: &'static str,
    pub eth_set_min_eth_button_border_color: &'static str,
    pub eth_slider_thumb_color: &'static str,
    pub eth_slider_thumb_border_color: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub icon_locked_color: &'static str,
    pub icon_unlocked_color: &'static str,
    pub inactive_tab_background_color: &'static str,
    pub light_gray: &'static str,
    pub logo_color: &'static str,
    pub logo_text_color: &'static str,
    pub markets_search_field_background_color: &'static str,
    pub markets_search_field_border_color: &'static str,
    pub markets_search_field_text_color: &'static str,
    pub notification_active: &'static str,
    pub notification_icon_color: &'static str,
    pub notifications_badge_color: &'static str,
    pub number_decimals_color: &'static str,
    pub orange: &'static str,
    pub row_active: &'static str,
    pub table_border_color: &'static str,
    pub td_color: &'static str,
    pub text_color_common: &'static str,
    pub text_dark: &'static str,
    pub text_input_background_color: &'static str,
    pub text_input_border_color: &'static str,
    pub text_input_text_color: &'static str,
    pub text_light: &'static str,
    pub text_lighter: &'static str,
    pub th_color: &'static str,
    pub topbar_background_color: &'static str,
    pub topbar_border_color: &'static str,
    pub topbar_separator_color: &'static str,
    pub steps_progress_starting_dot_color: &'static str,
    pub steps_progress_step_title_color: &'static str,
    pub steps_progress_step_title_color_active: &'static str,
    pub steps_progress_step_line_color: &'static str,
    pub steps_progress_step_line_progress_color: &'static str,
    pub steps_progress_check_mark_color: &'static str,
    pub button_text_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeModalStyle {
    pub content: ModalContentStyle,
    pub overlay: ModalOverlayStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalContentStyle {
    pub background_color: &'static str,
    pub bottom: &'static str,
    pub border_color: &'static str,
    pub flex_grow: &'static str,
    pub left: &'static str,
    pub min_width: &'static str,
    pub position: &'static str,
    pub right: &'static str,
    pub top: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalOverlayStyle {
    pub align_items: &'static str,
    pub background_color: &'static str,
    pub display: &'static str,
    pub justify_content: &'static str,
    pub z_index: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeMetaData {
    pub name: &'static str,
    pub theme: Theme,
}

/// The known themes. Immutable; share [`ThemeCatalog::global`] by reference.
#[derive(Debug)]
pub struct ThemeCatalog {
    themes: &'static [ThemeMetaData],
}

static KNOWN_THEMES: [ThemeMetaData; 2] = [
    ThemeMetaData {
        name: DEFAULT_THEME_NAME,
        theme: LIGHT_THEME,
    },
    ThemeMetaData {
        name: "DARK_THEME",
        theme: DARK_THEME,
    },
];

static CATALOG: ThemeCatalog = ThemeCatalog {
    themes: &KNOWN_THEMES,
};

impl ThemeCatalog {
    pub fn global() -> &'static ThemeCatalog {
        &CATALOG
    }

    /// Look a theme up by name, ignoring ASCII case. The `_THEME` suffix may
    /// be omitted (`"dark"` finds `DARK_THEME`).
    ///
    /// # Errors
    ///
    /// Returns [`DexError::UnknownTheme`] if no theme matches.
    pub fn get(&self, name: &str) -> Result<&ThemeMetaData> {
        self.themes
            .iter()
            .find(|meta| {
                meta.name.eq_ignore_ascii_case(name)
                    || meta
                        .name
                        .strip_suffix("_THEME")
                        .is_some_and(|short| short.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| DexError::UnknownTheme(name.to_string()))
    }

    pub fn default_theme(&self) -> &ThemeMetaData {
        &self.themes[0]
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|meta| meta.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_full_and_short_name() {
        let catalog = ThemeCatalog::global();
        assert_eq!(catalog.get("DARK_THEME").unwrap().name, "DARK_THEME");
        assert_eq!(catalog.get("dark").unwrap().name, "DARK_THEME");
        assert_eq!(catalog.get("light_theme").unwrap().name, "LIGHT_THEME");
    }

    #[test]
    fn test_unknown_theme_errors() {
        let err = ThemeCatalog::global().get("solarized").unwrap_err();
        assert!(matches!(err, DexError::UnknownTheme(ref n) if n == "solarized"));
    }

    #[test]
    fn test_default_is_light() {
        let catalog = ThemeCatalog::global();
        assert_eq!(catalog.default_theme().name, DEFAULT_THEME_NAME);
        assert_eq!(catalog.default_theme().theme, LIGHT_THEME);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["LIGHT_THEME", "DARK_THEME"]
        );
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(ThemeCatalog::global(), ThemeCatalog::global()));
    }

    #[test]
    fn test_side_colors_are_distinct() {
        for meta in ThemeCatalog::global().names().map(|n| ThemeCatalog::global().get(n).unwrap()) {
            let props = &meta.theme.components_theme;
            assert_ne!(props.green, props.orange, "{}", meta.name);
        }
    }

    #[test]
    fn test_serialize_uses_original_token_names() {
        let json = serde_json::to_value(LIGHT_THEME).unwrap();
        let props = &json["componentsTheme"];
        assert!(props["ethSetMinEthButtonBorderColor"].is_string());
        assert!(props["numberDecimalsColor"].is_string());
        assert_eq!(json["modalTheme"]["overlay"]["zIndex"], "12345");
    }
}
