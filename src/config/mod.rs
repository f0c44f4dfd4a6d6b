pub mod actions;
mod defaults;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
use keybindings::KeybindingsConfig;
pub use loader::load;
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

use crate::modal::StyleSheet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

/// Event loop rates, in events per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Timer resolution of the dialogs (exit animation, auto-close).
    pub tick_rate: f64,
    pub frame_rate: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            frame_rate: 60.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Stylesheet rules keyed by wrapper class name, merged over the built-in sheet.
    #[serde(default)]
    pub styles: StyleSheet,
}
