// Kana transliteration engine
// Single-actor state machine: all window, deadline and mode mutation happens
// through one owning instance, from exactly two call sites (the per-event
// handler and the per-scan-tick timeout check).

use std::time::Instant;

use log::debug;

use crate::action::Action;
use crate::event::KeyEvent;
use crate::matcher::{decode, Decoded};
use crate::mode::{ActiveMode, ModeCommand, ModeController};
use crate::output::EngineOutput;
use crate::settings::Settings;
use crate::symbol::{classify, Classification, HeldModifiers, Symbol};
use crate::tables::{is_series_initiator, MatchTable};
use crate::window::RecentWindow;

/// The transliteration engine.
///
/// Owns the recent-symbol window, the mode controller and the tunable
/// settings; the static match tables are shared. Multiple independent
/// instances can coexist (each test builds its own).
pub struct KanaEngine {
    window: RecentWindow,
    modes: ModeController,
    settings: Settings,
}

impl Default for KanaEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl KanaEngine {
    pub fn new(settings: Settings) -> Self {
        Self {
            window: RecentWindow::new(settings.idle_timeout()),
            modes: ModeController::new(settings.startup_mode()),
            settings,
        }
    }

    pub fn mode(&self) -> ActiveMode {
        self.modes.mode()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Per-keystroke entry point. Classifies the event, updates the window,
    /// and runs the matcher when a script mode is active.
    pub fn process_event(&mut self, event: KeyEvent, held: HeldModifiers) -> EngineOutput {
        let symbol = match classify(&event, held) {
            Classification::Ignore => return EngineOutput::PassThrough,
            Classification::Symbol(symbol) => symbol,
        };

        match symbol {
            Symbol::Modifier(_) => EngineOutput::PassThrough,
            Symbol::Other => {
                self.window.reset();
                EngineOutput::PassThrough
            }
            Symbol::Letter(_) | Symbol::Kana(_) => {
                let Some(script) = self.modes.mode().script() else {
                    // Latin mode: the matcher is never invoked and the
                    // window holds no in-flight state.
                    return EngineOutput::PassThrough;
                };
                let table = MatchTable::for_script(script);
                self.handle_symbol(table, symbol, event.at)
            }
        }
    }

    /// Per-scan-tick entry point for the timeout monitor.
    pub fn tick(&mut self, now: Instant) {
        if self.window.expire(now) {
            debug!("idle timeout, partial series discarded");
        }
    }

    /// Apply an explicit mode-switch command.
    pub fn process_mode_command(&mut self, command: ModeCommand, action: Action) {
        if self.modes.handle(command, action) {
            self.window.reset();
        }
    }

    fn handle_symbol(&mut self, table: &MatchTable, symbol: Symbol, at: Instant) -> EngineOutput {
        let prev1 = self.window.peek(0);
        let prev2 = self.window.peek(1);

        match decode(table, prev1, prev2, symbol) {
            Decoded::Resolved { deletes, glyphs } => {
                debug!("resolved {:?} -> {} ({} deletes)", symbol, glyphs, deletes);
                self.window.reset();
                EngineOutput::Replace { deletes, glyphs }
            }
            Decoded::Miss => {
                // Failed three-symbol attempt: consume the terminal.
                self.window.reset();
                EngineOutput::Swallow
            }
            Decoded::MissTwo => {
                self.window.reset();
                EngineOutput::PassThrough
            }
            Decoded::Extend => {
                self.window.push(symbol, at);
                EngineOutput::Swallow
            }
            Decoded::Seed => {
                self.window.push(symbol, at);
                match symbol {
                    // Series-initiator consonants only seed the window.
                    Symbol::Letter(c) if is_series_initiator(c) => EngineOutput::Swallow,
                    _ => EngineOutput::PassThrough,
                }
            }
        }
    }
}
