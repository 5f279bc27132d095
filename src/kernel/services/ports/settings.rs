use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub remote: RemoteSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    /// An empty command removes the binding.
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Editor preferences carried by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub word_wrap: bool,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    /// Widget options this crate does not interpret; handed through to the text widget.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_tab_size() -> u8 {
    2
}

fn default_theme() -> String {
    "vs-dark".to_string()
}

fn default_font_size() -> u8 {
    14
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            theme: default_theme(),
            word_wrap: false,
            font_size: default_font_size(),
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}
