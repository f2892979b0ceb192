use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use quill::cli::CliArgs;
use quill::commands::MessageLevel;
use quill::config::EditorConfig;
use quill::model::AppModel;

mod runtime;
mod view;

use runtime::{dialogs, App};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let _log_guard = quill::tracing::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            dialogs::show_message(MessageLevel::Error, "Startup Error", &format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let mut config = EditorConfig::load();
    args.apply_to(&mut config);

    let startup_file = args.startup_file().map_err(|e| anyhow!(e))?;
    let font = view::load_font(config.font_path.as_deref())?;

    let (width, height) = (config.window_width, config.window_height);
    let model = AppModel::new(config, width, height);

    tracing::info!("Starting quill {}", env!("CARGO_PKG_VERSION"));

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, font, startup_file);
    event_loop.run_app(&mut app)?;

    app.finish()
}
