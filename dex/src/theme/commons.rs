//! Style constants shared by every theme.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDimensions {
    pub border_radius: &'static str,
    pub field_height: &'static str,
    pub horizontal_padding: &'static str,
    pub sidebar_width: &'static str,
    pub vertical_padding: &'static str,
    pub vertical_separation: &'static str,
}

pub const THEME_DIMENSIONS: ThemeDimensions = ThemeDimensions {
    border_radius: "4px",
    field_height: "46px",
    horizontal_padding: "16px",
    sidebar_width: "350px",
    vertical_padding: "10px",
    vertical_separation: "30px",
};

/// Viewport widths at which layouts change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeBreakPoints {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
    pub xxxl: &'static str,
}

pub const THEME_BREAKPOINTS: ThemeBreakPoints = ThemeBreakPoints {
    xs: "320px",
    sm: "480px",
    md: "768px",
    lg: "992px",
    xl: "1024px",
    xxl: "1280px",
    xxxl: "1366px",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFeatures {
    pub box_shadow: &'static str,
}

pub const THEME_FEATURES: ThemeFeatures = ThemeFeatures {
    box_shadow: "0 10px 10px rgba(0, 0, 0, 0.1)",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    pub fn as_str(self) -> &'static str {
        match self {
            SpinnerSize::Small => "26px",
            SpinnerSize::Medium => "52px",
        }
    }
}

impl std::fmt::Display for SpinnerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_sizes() {
        assert_eq!(SpinnerSize::Small.as_str(), "26px");
        assert_eq!(SpinnerSize::Medium.to_string(), "52px");
    }

    #[test]
    fn test_breakpoints_ascend() {
        let widths: Vec<u32> = [
            THEME_BREAKPOINTS.xs,
            THEME_BREAKPOINTS.sm,
            THEME_BREAKPOINTS.md,
            THEME_BREAKPOINTS.lg,
            THEME_BREAKPOINTS.xl,
            THEME_BREAKPOINTS.xxl,
            THEME_BREAKPOINTS.xxxl,
        ]
        .iter()
        .map(|w| w.trim_end_matches("px").parse().unwrap())
        .collect();
        assert!(widths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(THEME_DIMENSIONS).unwrap();
        assert_eq!(json["sidebarWidth"], "350px");
        assert_eq!(json["borderRadius"], "4px");
    }
}
