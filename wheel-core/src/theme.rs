//! Named visual roles and their resolution to concrete colors.
//!
//! Themes are partial: any unset role falls back to a built-in default, so
//! [`Theme::resolve`] is total and rendering never sees a missing color.

use serde::{Deserialize, Serialize};

/// Visual roles a theme may override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRole {
    SelectedBackground,
    WedgeBackground,
    SelectedBorder,
    WedgeBorder,
    CenterBackground,
    CenterText,
    CenterBorder,
    FocusRing,
    /// Hover overlay fill for unselected wedges; cascades to
    /// `WedgeBackground` when unset.
    HoverBackground,
    /// Hover overlay fill for the selected wedge; cascades to
    /// `SelectedBackground` when unset.
    SelectedHoverBackground,
}

/// Partial color theme supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub selected_background: Option<String>,
    pub wedge_background: Option<String>,
    pub selected_border: Option<String>,
    pub wedge_border: Option<String>,
    pub center_background: Option<String>,
    pub center_text: Option<String>,
    pub center_border: Option<String>,
    pub focus_ring_color: Option<String>,
    pub hover_background: Option<String>,
    pub selected_hover_background: Option<String>,
}

impl Theme {
    /// Resolve a role to a concrete color. Total: unset roles fall back to
    /// the defaults, hover roles cascade to their base backgrounds first.
    pub fn resolve(&self, role: ThemeRole) -> &str {
        match role {
            ThemeRole::SelectedBackground => {
                self.selected_background.as_deref().unwrap_or("#f0f0f0")
            }
            ThemeRole::WedgeBackground => self.wedge_background.as_deref().unwrap_or("#ffffff"),
            ThemeRole::SelectedBorder => self.selected_border.as_deref().unwrap_or("#007bff"),
            ThemeRole::WedgeBorder => self.wedge_border.as_deref().unwrap_or("#cccccc"),
            ThemeRole::CenterBackground => self.center_background.as_deref().unwrap_or("#fafafa"),
            ThemeRole::CenterText => self.center_text.as_deref().unwrap_or("#333333"),
            ThemeRole::CenterBorder => self.center_border.as_deref().unwrap_or("#e0e0e0"),
            ThemeRole::FocusRing => self.focus_ring_color.as_deref().unwrap_or("#007bff"),
            ThemeRole::HoverBackground => match self.hover_background.as_deref() {
                Some(color) => color,
                None => self.resolve(ThemeRole::WedgeBackground),
            },
            ThemeRole::SelectedHoverBackground => match self.selected_hover_background.as_deref() {
                Some(color) => color,
                None => self.resolve(ThemeRole::SelectedBackground),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_role() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(ThemeRole::SelectedBackground), "#f0f0f0");
        assert_eq!(theme.resolve(ThemeRole::WedgeBackground), "#ffffff");
        assert_eq!(theme.resolve(ThemeRole::SelectedBorder), "#007bff");
        assert_eq!(theme.resolve(ThemeRole::WedgeBorder), "#cccccc");
        assert_eq!(theme.resolve(ThemeRole::CenterBackground), "#fafafa");
        assert_eq!(theme.resolve(ThemeRole::CenterText), "#333333");
        assert_eq!(theme.resolve(ThemeRole::CenterBorder), "#e0e0e0");
        assert_eq!(theme.resolve(ThemeRole::FocusRing), "#007bff");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let theme = Theme {
            selected_border: Some("#ff0000".to_string()),
            ..Theme::default()
        };
        assert_eq!(theme.resolve(ThemeRole::SelectedBorder), "#ff0000");
        assert_eq!(theme.resolve(ThemeRole::WedgeBorder), "#cccccc");
    }

    #[test]
    fn test_hover_roles_cascade_to_base_backgrounds() {
        let theme = Theme {
            wedge_background: Some("#101010".to_string()),
            selected_background: Some("#202020".to_string()),
            ..Theme::default()
        };
        assert_eq!(theme.resolve(ThemeRole::HoverBackground), "#101010");
        assert_eq!(theme.resolve(ThemeRole::SelectedHoverBackground), "#202020");

        let explicit = Theme {
            hover_background: Some("#303030".to_string()),
            ..theme
        };
        assert_eq!(explicit.resolve(ThemeRole::HoverBackground), "#303030");
    }

    #[test]
    fn test_partial_theme_deserializes_from_json() {
        let theme: Theme = serde_json::from_str(
            r##"{"selectedBackground": "#112233", "focusRingColor": "#abcdef"}"##,
        )
        .unwrap();
        assert_eq!(theme.resolve(ThemeRole::SelectedBackground), "#112233");
        assert_eq!(theme.resolve(ThemeRole::FocusRing), "#abcdef");
        assert_eq!(theme.resolve(ThemeRole::WedgeBackground), "#ffffff");
        assert_eq!(theme.resolve(ThemeRole::SelectedHoverBackground), "#112233");
    }
}
