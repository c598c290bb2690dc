//! Dashboard UI settings model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Visual theme options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Standard dashboard look
    #[default]
    Default,
    Cartoon,
    Retro,
    Neon,
}

impl Theme {
    pub const ALL: [Self; 4] = [Self::Default, Self::Cartoon, Self::Retro, Self::Neon];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cartoon => "cartoon",
            Self::Retro => "retro",
            Self::Neon => "neon",
        }
    }
}

/// Navigation layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Bottom tab bar
    #[default]
    Tabs,
    Sidebar,
    Topbar,
}

impl Layout {
    pub const ALL: [Self; 3] = [Self::Tabs, Self::Sidebar, Self::Topbar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Sidebar => "sidebar",
            Self::Topbar => "topbar",
        }
    }
}

/// Theme and layout chosen for the dashboard.
///
/// Both fields are always populated; stored data that does not name a known
/// variant never produces a `UiSettings` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiSettings {
    pub theme: Theme,
    pub layout: Layout,
}

/// Display toggles that sit next to the UI settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    /// Hide monetary amounts on screen
    pub privacy_blur: bool,
    /// Play notification sounds
    pub sound_enabled: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            privacy_blur: false,
            sound_enabled: true,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidInput(format!("unknown theme '{value}'")))
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::InvalidInput(format!("unknown layout '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = UiSettings::default();
        assert_eq!(settings.theme, Theme::Default);
        assert_eq!(settings.layout, Layout::Tabs);
    }

    #[test]
    fn test_display_preferences_default() {
        let prefs = DisplayPreferences::default();
        assert!(!prefs.privacy_blur);
        assert!(prefs.sound_enabled);
    }

    #[test]
    fn settings_serialize_as_lowercase_names() {
        let settings = UiSettings {
            theme: Theme::Neon,
            layout: Layout::Sidebar,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"theme":"neon","layout":"sidebar"}"#);
    }

    #[test]
    fn unknown_theme_is_rejected_by_deserializer() {
        let parsed = serde_json::from_str::<UiSettings>(r#"{"theme":"purple","layout":"tabs"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn from_str_is_case_insensitive_and_matches_display() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(" Retro ".parse::<Theme>().unwrap(), Theme::Retro);
        assert_eq!("TOPBAR".parse::<Layout>().unwrap(), Layout::Topbar);
        assert!("grid".parse::<Layout>().is_err());
    }
}
