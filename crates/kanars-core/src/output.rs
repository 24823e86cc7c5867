// Output layer
// Typed actions handed to the transmission side, and the sink contract that
// guarantees correction deletes land before the glyphs they correct.

use smallvec::SmallVec;

/// What the engine wants done with one keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutput {
    /// Let the host type the raw key normally.
    PassThrough,
    /// Suppress the raw key entirely.
    Swallow,
    /// Retract `deletes` previously emitted glyphs, then type `glyphs`.
    Replace { deletes: u8, glyphs: String },
}

impl EngineOutput {
    pub fn replace(deletes: u8, glyphs: impl Into<String>) -> Self {
        EngineOutput::Replace {
            deletes,
            glyphs: glyphs.into(),
        }
    }

    pub fn emit(glyphs: impl Into<String>) -> Self {
        Self::replace(0, glyphs)
    }
}

/// One ordered side effect for the transmission layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkAction {
    /// One backspace keystroke.
    DeleteOne,
    /// Type a glyph string as Unicode codepoints.
    Emit(String),
}

/// Flatten an output into its ordered sink actions. All deletes for a match
/// precede the glyph string for that match; pass-through and swallow produce
/// nothing here because the raw-key path is the host's.
pub fn plan(output: &EngineOutput) -> SmallVec<[SinkAction; 3]> {
    let mut actions = SmallVec::new();
    if let EngineOutput::Replace { deletes, glyphs } = output {
        for _ in 0..*deletes {
            actions.push(SinkAction::DeleteOne);
        }
        if !glyphs.is_empty() {
            actions.push(SinkAction::Emit(glyphs.clone()));
        }
    }
    actions
}

/// The narrow contract of the excluded transmission/typing layer.
pub trait OutputSink {
    /// Emit one backspace keystroke.
    fn delete_one(&mut self);
    /// Type a glyph string.
    fn emit(&mut self, glyphs: &str);
}

/// Drive a sink with the ordered actions for `output`.
pub fn apply<S: OutputSink>(sink: &mut S, output: &EngineOutput) {
    for action in plan(output) {
        match action {
            SinkAction::DeleteOne => sink.delete_one(),
            SinkAction::Emit(glyphs) => sink.emit(&glyphs),
        }
    }
}

/// Sink that records every action and tracks the visible text, for tests
/// and the CLI driver.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub actions: Vec<SinkAction>,
    visible: String,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The net visible text after all recorded actions.
    pub fn visible(&self) -> &str {
        &self.visible
    }

    pub fn delete_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, SinkAction::DeleteOne))
            .count()
    }
}

impl OutputSink for RecordingSink {
    fn delete_one(&mut self) {
        self.actions.push(SinkAction::DeleteOne);
        self.visible.pop();
    }

    fn emit(&mut self, glyphs: &str) {
        self.actions.push(SinkAction::Emit(glyphs.to_string()));
        self.visible.push_str(glyphs);
    }
}
