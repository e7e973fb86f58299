use crossterm::event::{KeyCode, KeyModifiers};

use super::events::KeyInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// Presentation-wide shortcuts, handled below every scoped context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    OpenSearch,
    SwitchRoute,
    Quit,
    ToggleBlackout,
    ShowPresentation,
    HidePresentation,
    NextItem,
    PrevItem,
}

impl GlobalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenSearch => "open-search",
            Self::SwitchRoute => "switch-route",
            Self::Quit => "quit",
            Self::ToggleBlackout => "toggle-blackout",
            Self::ShowPresentation => "show-presentation",
            Self::HidePresentation => "hide-presentation",
            Self::NextItem => "next-item",
            Self::PrevItem => "prev-item",
        }
    }
}

pub fn map_global_key(input: &KeyInput, preset: KeymapPreset) -> Option<GlobalAction> {
    match preset {
        KeymapPreset::Default => map_global_key_default(input),
        KeymapPreset::Emacs => map_global_key_emacs(input),
    }
}

fn map_global_key_default(input: &KeyInput) -> Option<GlobalAction> {
    if input.has_control() {
        return None;
    }

    match input.key_code() {
        KeyCode::Char('/') => Some(GlobalAction::OpenSearch),
        KeyCode::Tab => Some(GlobalAction::SwitchRoute),
        KeyCode::Char('q') => Some(GlobalAction::Quit),
        KeyCode::Char('b') => Some(GlobalAction::ToggleBlackout),
        KeyCode::F(5) => Some(GlobalAction::ShowPresentation),
        KeyCode::Esc => Some(GlobalAction::HidePresentation),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('n') => Some(GlobalAction::NextItem),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('p') => Some(GlobalAction::PrevItem),
        _ => None,
    }
}

fn map_global_key_emacs(input: &KeyInput) -> Option<GlobalAction> {
    if input.modifiers().contains(KeyModifiers::ALT) {
        return match input.key_code() {
            KeyCode::Char('x') => Some(GlobalAction::SwitchRoute),
            _ => None,
        };
    }

    if input.has_control() {
        return match input.key_code() {
            KeyCode::Char('s') => Some(GlobalAction::OpenSearch),
            KeyCode::Char('n') => Some(GlobalAction::NextItem),
            KeyCode::Char('p') => Some(GlobalAction::PrevItem),
            KeyCode::Char('g') => Some(GlobalAction::HidePresentation),
            KeyCode::Char('q') => Some(GlobalAction::Quit),
            _ => None,
        };
    }

    map_global_key_default(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::input::KeyInput;

    use super::{GlobalAction, KeymapPreset, map_global_key};

    #[test]
    fn keymap_preset_parse_defaults_on_unknown_values() {
        assert_eq!(KeymapPreset::parse("default"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Emacs);
        assert_eq!(KeymapPreset::parse("unknown"), KeymapPreset::Default);
    }

    #[test]
    fn default_preset_maps_arrows_to_item_jumps() {
        assert_eq!(
            map_global_key(&KeyInput::code(KeyCode::Right), KeymapPreset::Default),
            Some(GlobalAction::NextItem)
        );
        assert_eq!(
            map_global_key(&KeyInput::code(KeyCode::Up), KeymapPreset::Default),
            Some(GlobalAction::PrevItem)
        );
        assert_eq!(
            map_global_key(&KeyInput::ctrl('c'), KeymapPreset::Default),
            None
        );
    }

    #[test]
    fn emacs_preset_maps_ctrl_n_and_alt_x() {
        assert_eq!(
            map_global_key(&KeyInput::ctrl('n'), KeymapPreset::Emacs),
            Some(GlobalAction::NextItem)
        );

        let alt_x = KeyInput::new(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(
            map_global_key(&alt_x, KeymapPreset::Emacs),
            Some(GlobalAction::SwitchRoute)
        );
        assert_eq!(
            map_global_key(&KeyInput::char('/'), KeymapPreset::Emacs),
            Some(GlobalAction::OpenSearch)
        );
    }
}
