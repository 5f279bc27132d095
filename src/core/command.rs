//! Semantic commands reachable from the keyboard surface.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Files ====================
    QuickOpen,
    Save,
    ReloadTree,
    Pack,

    // ==================== Tabs ====================
    CloseActiveTab,
    CloseOtherTabs,
    CloseAllTabs,

    // ==================== Overlays ====================
    Escape,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::QuickOpen => "quickOpen",
            Command::Save => "save",
            Command::ReloadTree => "reloadTree",
            Command::Pack => "pack",
            Command::CloseActiveTab => "closeTab",
            Command::CloseOtherTabs => "closeOtherTabs",
            Command::CloseAllTabs => "closeAllTabs",
            Command::Escape => "escape",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Command {
        match name {
            "quickOpen" => Command::QuickOpen,
            "save" => Command::Save,
            "reloadTree" => Command::ReloadTree,
            "pack" => Command::Pack,
            "closeTab" => Command::CloseActiveTab,
            "closeOtherTabs" => Command::CloseOtherTabs,
            "closeAllTabs" => Command::CloseAllTabs,
            "escape" => Command::Escape,
            _ => Command::Custom(name.to_string()),
        }
    }
}
