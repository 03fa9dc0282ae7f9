#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::{Path, PathBuf};

use clap::Parser;
use mark_pad::app::infrastructure::error::Result;
use mark_pad::app::infrastructure::logging::init_logging;
use mark_pad::app::{AppSettings, CmarkParser, RenderPipeline, Stats};

mod cli;

use crate::cli::Cli;

fn render_file(path: &Path, settings: &AppSettings) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let pipeline = RenderPipeline::new(
        CmarkParser::new(settings.highlight_code_blocks),
        settings.render_debounce(),
    );
    println!("{}", pipeline.render(&content).html);
    Ok(())
}

fn stats_file(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    println!("{}", serde_json::to_string_pretty(&Stats::compute(&content))?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    let settings = AppSettings::load();

    let outcome = if let Some(path) = &cli.render {
        render_file(path, &settings)
    } else if let Some(path) = &cli.stats {
        stats_file(path)
    } else {
        run_gui(settings, cli.file)
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "MarkPad exited with an error");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "gui")]
fn run_gui(settings: AppSettings, path: Option<PathBuf>) -> Result<()> {
    use std::time::{Duration, Instant};

    use fltk::{
        app::{self, Sender, TimeoutHandle},
        prelude::*,
    };
    use mark_pad::app::{EditorSession, Message};
    use mark_pad::ui::buffer::read_buffer;
    use mark_pad::ui::main_window::build_main_window;
    use mark_pad::ui::surface::FltkSurface;

    /// Replace the pending wake-up with one `wake` from now, or none when idle.
    fn rearm_tick(timer: &mut Option<TimeoutHandle>, wake: Option<Duration>, sender: &Sender<Message>) {
        if let Some(handle) = timer.take() {
            if app::has_timeout3(handle) {
                app::remove_timeout3(handle);
            }
        }
        if let Some(wait) = wake {
            let s = sender.clone();
            *timer = Some(app::add_timeout3(wait.as_secs_f64(), move |_| {
                s.send(Message::Tick)
            }));
        }
    }

    let initial = match &path {
        Some(p) => Some(std::fs::read_to_string(p)?),
        None => None,
    };

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&settings, &sender);

    let mut session = EditorSession::new(FltkSurface::new(&widgets), settings);
    session.start();
    if let Some(text) = &initial {
        widgets.buffer.set_text(text);
        session.load_document(text.as_str());
    }

    let edit_sender = sender.clone();
    let watched = widgets.buffer.clone();
    widgets
        .buffer
        .add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                edit_sender.send(Message::ContentChanged(read_buffer(&watched)));
            }
        });

    widgets.wind.show();

    let mut tick: Option<TimeoutHandle> = None;
    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        if let Message::LoadDocument(text) = &msg {
            // Replacing the buffer fires the modify callback; the resulting
            // ContentChanged carries the same text and is a no-op.
            widgets.buffer.set_text(text);
        }
        if !session.dispatch(msg, Instant::now()) {
            app.quit();
            break;
        }
        rearm_tick(&mut tick, session.wake_after(Instant::now()), &sender);
    }

    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_settings: AppSettings, _path: Option<PathBuf>) -> Result<()> {
    eprintln!("error: built without the `gui` feature; use --render or --stats");
    std::process::exit(2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "one two three").unwrap();
        assert!(stats_file(&path).is_ok());
        assert!(stats_file(&dir.path().join("missing.md")).is_err());
    }

    #[test]
    fn test_render_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "**bold**").unwrap();
        assert!(render_file(&path, &AppSettings::default()).is_ok());
        assert!(render_file(&dir.path().join("missing.md"), &AppSettings::default()).is_err());
    }
}
