// Kanars CLI
// Drives the transliteration engine with a synthetic keystroke stream and
// prints the resulting visible text. Useful for exercising the match tables
// without a keyboard matrix attached.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::debug;

use kanars_core::{
    apply, ActiveMode, EngineOutput, HeldModifiers, KanaEngine, KeyEvent, KeySym, OutputSink,
    RecordingSink, Settings,
};

/// Romaji-to-kana transliteration driver
#[derive(Parser, Debug)]
#[command(name = "kanars")]
#[command(about = "Feed a romaji keystroke stream through the kana engine")]
struct Args {
    /// Input mode (latin, hiragana, katakana)
    #[arg(short, long, default_value = "hiragana")]
    mode: ActiveMode,

    /// Settings file (TOML)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Idle timeout override in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Keystrokes to type; spaces abort any half-typed series
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::new(),
    };
    settings.set_startup_mode(args.mode);
    if let Some(ms) = args.timeout_ms {
        anyhow::ensure!(ms > 0, "timeout must be positive");
        settings.set_idle_timeout(std::time::Duration::from_millis(ms));
    }

    let mut engine = KanaEngine::new(settings);
    let mut sink = RecordingSink::new();
    let input = args.text.join(" ");

    for c in input.chars() {
        let sym = host_keysym(c, engine.mode());
        let now = Instant::now();
        let output = engine.process_event(KeyEvent::press(sym, now), HeldModifiers::none());
        debug!("{:?} -> {:?}", sym, output);
        if output == EngineOutput::PassThrough {
            if let Some(text) = host_text(sym) {
                sink.emit(&text);
            }
        } else {
            apply(&mut sink, &output);
        }
        engine.process_event(KeyEvent::release(sym, now), HeldModifiers::none());
    }

    println!("{}", sink.visible());
    Ok(())
}

/// Resolve a typed character to the key the host layout layer would report.
/// In a script mode the vowel and nasal positions carry Unicode glyph
/// bindings, exactly like the kana keymap layer.
fn host_keysym(c: char, mode: ActiveMode) -> KeySym {
    if c == ' ' {
        // Treat the separator as a navigation key: aborts partial series.
        return KeySym::Unmapped;
    }
    let glyph = match mode {
        ActiveMode::Hiragana => match c {
            'a' => Some('あ'),
            'i' => Some('い'),
            'u' => Some('う'),
            'e' => Some('え'),
            'o' => Some('お'),
            'n' => Some('ん'),
            _ => None,
        },
        ActiveMode::Katakana => match c {
            'a' => Some('ア'),
            'i' => Some('イ'),
            'u' => Some('ウ'),
            'e' => Some('エ'),
            'o' => Some('オ'),
            'n' => Some('ン'),
            _ => None,
        },
        ActiveMode::Latin => None,
    };
    match glyph {
        Some(g) => KeySym::Glyph(g),
        None => KeySym::Char(c),
    }
}

fn host_text(sym: KeySym) -> Option<String> {
    match sym {
        KeySym::Char(c) => Some(c.to_string()),
        KeySym::Glyph(g) => Some(g.to_string()),
        _ => None,
    }
}
