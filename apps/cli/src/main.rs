#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{catalog, render, validate};
use crate::models::args::{AppCommands, Cli};

use academy::domain::config::AppConfig;
use academy::kernel::config::load_config;
use academy_logger::{LevelFilter, Logger};
use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let _log = Logger::builder().name("academy").level(level).stderr().init()?;

    let cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    match cli.command {
        AppCommands::Render { out } => {
            render::render_page(&cfg, out.as_deref())?;
        },
        AppCommands::Validate { strict } => validate::validate_catalog(strict)?,
        AppCommands::List { json } => catalog::list_lessons(json)?,
        AppCommands::Featured {} => catalog::list_featured(),
    }

    Ok(())
}
