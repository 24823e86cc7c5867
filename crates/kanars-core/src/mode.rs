// Mode controller
// Tracks the exclusive active script and the layer stack. Transitions are
// explicit commands bound to chords outside this core; nothing is ever
// decoded out of the Latin text stream.

use log::debug;

use crate::action::Action;
use crate::tables::Script;

/// The exclusive active input mode.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ActiveMode {
    #[default]
    Latin,
    Hiragana,
    Katakana,
}

impl ActiveMode {
    /// The script whose match table drives the matcher, if any. Latin mode
    /// never invokes the matcher.
    pub fn script(self) -> Option<Script> {
        match self {
            ActiveMode::Latin => None,
            ActiveMode::Hiragana => Some(Script::Hiragana),
            ActiveMode::Katakana => Some(Script::Katakana),
        }
    }
}

/// Explicit mode-switch commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    EnterHiragana,
    EnterKatakana,
    ReturnToLatin,
}

/// Stack of armed keymap layers. The bottom of an empty stack is implicitly
/// the Latin base layer.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    stack: Vec<ActiveMode>,
}

impl LayerStack {
    pub fn push(&mut self, layer: ActiveMode) {
        self.stack.push(layer);
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn active(&self) -> ActiveMode {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Owns the active mode and layer stack.
pub struct ModeController {
    mode: ActiveMode,
    layers: LayerStack,
}

impl ModeController {
    pub fn new(initial: ActiveMode) -> Self {
        let mut layers = LayerStack::default();
        if initial != ActiveMode::Latin {
            layers.push(initial);
        }
        Self {
            mode: initial,
            layers,
        }
    }

    pub fn mode(&self) -> ActiveMode {
        self.mode
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Apply one mode command. Returns true when the transition requires a
    /// recent-symbol window reset.
    ///
    /// Entering a script happens on press. Returning to Latin is split in
    /// two phases: the press clears the layer stack (and the mode), the
    /// release re-arms the Latin base layer. The split keeps a released
    /// modifier chord from re-arming the wrong layer mid-combo.
    pub fn handle(&mut self, command: ModeCommand, action: Action) -> bool {
        match (command, action) {
            (ModeCommand::EnterHiragana, Action::Press) => {
                self.enter_script(ActiveMode::Hiragana)
            }
            (ModeCommand::EnterKatakana, Action::Press) => {
                self.enter_script(ActiveMode::Katakana)
            }
            (ModeCommand::ReturnToLatin, Action::Press) => {
                debug!("mode -> Latin (layers cleared)");
                self.layers.clear();
                self.mode = ActiveMode::Latin;
                true
            }
            (ModeCommand::ReturnToLatin, Action::Release) => {
                self.layers.push(ActiveMode::Latin);
                false
            }
            _ => false,
        }
    }

    fn enter_script(&mut self, mode: ActiveMode) -> bool {
        debug!("mode -> {}", mode);
        self.layers.clear();
        self.layers.push(mode);
        self.mode = mode;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode() {
        let controller = ModeController::new(ActiveMode::Latin);
        assert_eq!(controller.mode(), ActiveMode::Latin);
        assert!(controller.layers().is_empty());

        let controller = ModeController::new(ActiveMode::Hiragana);
        assert_eq!(controller.mode(), ActiveMode::Hiragana);
        assert_eq!(controller.layers().active(), ActiveMode::Hiragana);
    }

    #[test]
    fn test_enter_script_resets_window() {
        let mut controller = ModeController::new(ActiveMode::Latin);
        assert!(controller.handle(ModeCommand::EnterHiragana, Action::Press));
        assert_eq!(controller.mode(), ActiveMode::Hiragana);

        assert!(controller.handle(ModeCommand::EnterKatakana, Action::Press));
        assert_eq!(controller.mode(), ActiveMode::Katakana);
    }

    #[test]
    fn test_return_to_latin_is_two_phase() {
        let mut controller = ModeController::new(ActiveMode::Hiragana);

        // Press clears layers; no layer is armed until the release.
        assert!(controller.handle(ModeCommand::ReturnToLatin, Action::Press));
        assert_eq!(controller.mode(), ActiveMode::Latin);
        assert!(controller.layers().is_empty());

        // Release re-arms the Latin base layer.
        assert!(!controller.handle(ModeCommand::ReturnToLatin, Action::Release));
        assert_eq!(controller.layers().active(), ActiveMode::Latin);
    }

    #[test]
    fn test_enter_between_press_and_release_wins() {
        let mut controller = ModeController::new(ActiveMode::Hiragana);
        controller.handle(ModeCommand::ReturnToLatin, Action::Press);
        controller.handle(ModeCommand::EnterKatakana, Action::Press);
        assert_eq!(controller.mode(), ActiveMode::Katakana);
    }

    #[test]
    fn test_release_of_enter_commands_is_noop() {
        let mut controller = ModeController::new(ActiveMode::Latin);
        assert!(!controller.handle(ModeCommand::EnterHiragana, Action::Release));
        assert_eq!(controller.mode(), ActiveMode::Latin);
    }

    #[test]
    fn test_mode_parses_case_insensitive() {
        use std::str::FromStr;
        assert_eq!(ActiveMode::from_str("hiragana"), Ok(ActiveMode::Hiragana));
        assert_eq!(ActiveMode::from_str("KATAKANA"), Ok(ActiveMode::Katakana));
        assert!(ActiveMode::from_str("kanji").is_err());
    }
}
