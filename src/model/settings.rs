use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Follow the operating system preference
    #[default]
    #[serde(rename = "System Default")]
    SystemDefault,
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "System Default" => Ok(Theme::SystemDefault),
            "Light" => Ok(Theme::Light),
            "Dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options are: System Default, Light, Dark",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::SystemDefault => "System Default",
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        };
        f.write_str(s)
    }
}

/// Font scaling step for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontScale {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FromStr for FontScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Small" => Ok(FontScale::Small),
            "Medium" => Ok(FontScale::Medium),
            "Large" => Ok(FontScale::Large),
            "ExtraLarge" => Ok(FontScale::ExtraLarge),
            _ => Err(format!(
                "Invalid font scale '{}'. Valid options are: Small, Medium, Large, ExtraLarge",
                s
            )),
        }
    }
}

impl fmt::Display for FontScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FontScale::Small => "Small",
            FontScale::Medium => "Medium",
            FontScale::Large => "Large",
            FontScale::ExtraLarge => "ExtraLarge",
        };
        f.write_str(s)
    }
}

/// Application settings, one singleton per data file
///
/// Created with defaults on first load and mutated in place afterwards.
/// Unknown fields are preserved and round-tripped, like project extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub font_scale: FontScale,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_notifications() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            notifications: true,
            font_scale: FontScale::default(),
            extra: serde_json::Map::new(),
        }
    }
}
