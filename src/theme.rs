use serde::{Deserialize, Serialize};

/// Colour scheme for the whole window. Persisted alongside the files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Solarized,
    Dracula,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Solarized, Theme::Dracula];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Solarized => "solarized",
            Theme::Dracula => "dracula",
        }
    }

    /// Unknown names fall back to [`Theme::Dark`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => Theme::Light,
            "solarized" => Theme::Solarized,
            "dracula" => Theme::Dracula,
            _ => Theme::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        use egui::Color32;

        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
            Theme::Solarized => {
                let mut visuals = egui::Visuals::dark();
                visuals.panel_fill = Color32::from_rgb(0, 43, 54);
                visuals.window_fill = Color32::from_rgb(7, 54, 66);
                visuals.extreme_bg_color = Color32::from_rgb(0, 34, 43);
                visuals.faint_bg_color = Color32::from_rgb(7, 54, 66);
                visuals.override_text_color = Some(Color32::from_rgb(147, 161, 161));
                visuals.hyperlink_color = Color32::from_rgb(38, 139, 210);
                visuals.selection.bg_fill = Color32::from_rgb(38, 139, 210);
                visuals
            }
            Theme::Dracula => {
                let mut visuals = egui::Visuals::dark();
                visuals.panel_fill = Color32::from_rgb(40, 42, 54);
                visuals.window_fill = Color32::from_rgb(68, 71, 90);
                visuals.extreme_bg_color = Color32::from_rgb(33, 34, 44);
                visuals.faint_bg_color = Color32::from_rgb(68, 71, 90);
                visuals.override_text_color = Some(Color32::from_rgb(248, 248, 242));
                visuals.hyperlink_color = Color32::from_rgb(139, 233, 253);
                visuals.selection.bg_fill = Color32::from_rgb(189, 147, 249);
                visuals
            }
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_is_dark() {
        assert_eq!(Theme::from_name("neon"), Theme::Dark);
        assert_eq!(Theme::from_name(""), Theme::Dark);
        assert_eq!(Theme::from_name("Dracula"), Theme::Dracula);
    }

    #[test]
    fn test_visuals_dark_mode() {
        assert!(Theme::Dracula.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
    }
}
