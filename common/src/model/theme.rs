use serde::{Deserialize, Serialize};

/// Light/dark preference applied to the document root as `data-theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Unknown values map to the default (light).
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim() {
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Icon of the toggle button: a moon offers dark mode, a sun offers light mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "fas fa-moon",
            ThemePreference::Dark => "fas fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_theme() {
        assert_eq!(ThemePreference::Light.icon_class(), "fas fa-moon");
        assert_eq!(ThemePreference::Dark.icon_class(), "fas fa-sun");
    }

    #[test]
    fn toggled_is_an_involution() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }
}
