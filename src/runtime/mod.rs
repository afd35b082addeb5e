use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crate::audio::RodioEngine;
use crate::config::DebounceSetting;
use crate::display::{DisplayModel, RenderMode, Renderer, TerminalSurface};
use crate::inspect::LoftyInspector;
use crate::keys::{AUTO_REPEAT_WINDOW, DebounceMode, KeyBindings, KeyInterpreter, spawn_listener};
use crate::player::{ControllerOptions, PlaybackController};
use crate::storage::FsStorage;

mod logging;
mod refresh;
mod settings;
mod terminal;

pub use refresh::RefreshLoop;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Before anything touches the log file or the audio device.
    let Some(arg) = track_argument(env::args_os()) else {
        eprintln!("usage: termplay <FILE>");
        std::process::exit(2);
    };

    let settings = settings::load_settings();
    logging::init(&settings.log)?;

    let path = fs::canonicalize(&arg).unwrap_or(arg);

    let bindings = KeyBindings::from_settings(&settings.keys)?;
    let display = DisplayModel::new(settings.ui.box_width, bindings.legend());
    let options = ControllerOptions {
        seek_fraction: settings.player.seek_fraction,
        extensions: settings.player.extensions.clone(),
    };

    let engine = RodioEngine::open_default()?;
    let mut controller =
        PlaybackController::new(engine, LoftyInspector, FsStorage, options, display);
    // Fail before touching the terminal so the error prints cleanly.
    controller.start(&path)?;

    let debounce = match settings.keys.debounce {
        DebounceSetting::EventKind => DebounceMode::EventKind,
        DebounceSetting::Parity => DebounceMode::Parity,
    };
    let render_mode = if settings.ui.no_clear {
        RenderMode::NoClear
    } else {
        RenderMode::Standard
    };

    let guard = terminal::TerminalGuard::enter()?;
    let surface = TerminalSurface::new(io::stdout())?;

    let mut interpreter = KeyInterpreter::new(
        bindings,
        debounce,
        Duration::from_millis(settings.player.delete_window_ms),
    );
    if debounce == DebounceMode::EventKind && !guard.reports_event_types() {
        interpreter = interpreter.with_repeat_filter(AUTO_REPEAT_WINDOW);
    }

    let (tx, rx) = mpsc::channel();
    // Blocked on terminal input; exits by itself on the stop key, otherwise
    // it goes down with the process.
    let _listener = spawn_listener(interpreter, tx);

    let mut refresh = RefreshLoop::new(
        controller,
        surface,
        Renderer::new(settings.ui.box_width, render_mode),
        settings.player.refresh_interval(),
    );
    refresh.run(&rx)?;
    Ok(())
}

/// The file to play: the first argument after the program name.
fn track_argument<I: IntoIterator<Item = OsString>>(args: I) -> Option<PathBuf> {
    args.into_iter()
        .nth(1)
        .filter(|arg| !arg.is_empty())
        .map(PathBuf::from)
}
