//! Command-line interface for playspace-bounds.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::boundary::DisplayMode;

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CliCommand {
    /// Build the configured boundary and print the renderer state as JSON.
    Show,
    /// Write a default config file.
    InitConfig { filename: PathBuf },
}

/// Render a play-area boundary as line and/or mesh geometry.
#[derive(Debug, Parser)]
#[command(name = "playspace-bounds", version)]
pub struct Cli {
    /// JSON config file (display mode, boundary points, stage extents).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Override the configured display mode.
    #[arg(long, short, value_enum)]
    pub mode: Option<DisplayMode>,

    /// Single-line JSON output.
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Cli {
    /// `show` when no subcommand was given.
    pub fn command(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::Show)
    }
}
