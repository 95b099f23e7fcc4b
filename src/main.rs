use anyhow::{Context, Result};
use clap::Parser;

use quire::cli::CliArgs;
use quire::config::EditorConfig;
use quire::model::AppModel;

fn main() -> Result<()> {
    quire::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = EditorConfig::load();
    if let Some(dir) = startup.save_dir.clone() {
        config.save_dir = Some(dir);
    }

    let document = startup
        .initial_document()
        .context("Failed to open document")?;

    let (width, height) =
        crossterm::terminal::size().context("Failed to read terminal size")?;
    let model = AppModel::new(document, config, (width as usize, height as usize))?;

    quire::runtime::run(model)
}
