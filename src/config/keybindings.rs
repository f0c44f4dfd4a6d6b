use serde::{Deserialize, Serialize};

use crate::config::key::KeyBinding;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogKeybindings {
    pub close: KeyBinding,
    pub submit: KeyBinding,
    pub activate: KeyBinding,
    pub focus_next: KeyBinding,
    pub focus_prev: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageKeybindings {
    pub quit: KeyBinding,
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub next: KeyBinding,
    pub prev: KeyBinding,
    pub press: KeyBinding,
    pub open_default: KeyBinding,
    pub open_variant: KeyBinding,
    pub open_custom: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub dialog: DialogKeybindings,
    #[serde(default)]
    pub page: PageKeybindings,
}
