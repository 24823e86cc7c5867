// Kanars Core Library
// Incremental romaji-to-kana transliteration engine

pub mod action;
pub mod engine;
pub mod event;
pub mod matcher;
pub mod mode;
pub mod output;
pub mod settings;
pub mod symbol;
pub mod tables;
pub mod window;

pub use action::Action;
pub use engine::KanaEngine;
pub use event::KeyEvent;
pub use matcher::{decode, Decoded};
pub use mode::{ActiveMode, LayerStack, ModeCommand, ModeController};
pub use output::{apply, plan, EngineOutput, OutputSink, RecordingSink, SinkAction};
pub use settings::{Settings, SettingsError, DEFAULT_IDLE_TIMEOUT_MS};
pub use symbol::{
    classify, is_kana_codepoint, Classification, HeldModifiers, KeySym, ModifierKind, Symbol,
};
pub use tables::{is_series_initiator, MatchTable, Script};
pub use window::{RecentWindow, WINDOW_CAPACITY};
