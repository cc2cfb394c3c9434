use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde_json::json;

use playspace_bounds::engine::cli::{Cli, CliCommand};
use playspace_bounds::engine::config::BoundaryConfig;
use playspace_bounds::engine::EngineResult;
use playspace_bounds::utils;
use playspace_bounds::{BoundaryDisplay, BoundaryFeed, BoundarySource, MeshOutput, RecordingRenderer};

fn main() -> ExitCode {
    utils::logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let mut config = match &cli.config {
        Some(path) => BoundaryConfig::load(path)?,
        None => BoundaryConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.display_mode = mode;
    }

    match cli.command() {
        CliCommand::InitConfig { filename } => {
            config.save(&filename)?;
            info!("wrote {}", filename.display());
            Ok(())
        }
        CliCommand::Show => show(&config, cli.compact),
    }
}

fn show(config: &BoundaryConfig, compact: bool) -> EngineResult<()> {
    let feed = BoundaryFeed::new();
    let source = config.source();
    let mut display = BoundaryDisplay::new(RecordingRenderer::new(), feed.clone(), config.display_mode);

    feed.refresh_from(&source);
    display.sync();

    let renderer = display.renderer();
    let mesh = match &display.last_outputs().mesh {
        Some(MeshOutput::Built(mesh)) => json!({
            "status": "built",
            "name": mesh.name,
            "vertices": mesh.vertices,
            "uvs": mesh.uvs,
            "normals": mesh.normals,
            "indices": mesh.indices_u32,
        }),
        Some(MeshOutput::Cleared) => json!({ "status": "cleared" }),
        Some(MeshOutput::Invalid(err)) => json!({ "status": "invalid", "reason": err.to_string() }),
        None => serde_json::Value::Null,
    };
    let report = json!({
        "source": source.name(),
        "display_mode": config.display_mode,
        "line_active": renderer.active.line_active,
        "mesh_active": renderer.active.mesh_active,
        "line": display.last_outputs().line.as_ref().map(|l| &l.positions),
        "mesh": mesh,
    });

    let text = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", text);
    Ok(())
}
