// ABOUTME: Entry point for the stowage CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::path::PathBuf;
use stowage::error::Result;
use stowage::manifest::{self, Manifest};
use stowage::output::{Output, OutputMode};
use stowage::plan::{self, PlanOutcome};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { name, force } => {
            let cwd = env::current_dir()?;
            manifest::init_manifest(&cwd, name.as_deref(), force)
        }
        Commands::Check { file } => {
            let manifest = load_manifest(file)?;
            check(&manifest);
            Ok(())
        }
        Commands::Plan { file, json, quiet } => {
            let manifest = load_manifest(file)?;
            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };
            let outcome = plan::execute(&manifest)?;
            report(&Output::new(mode), &outcome);
            Ok(())
        }
    }
}

fn load_manifest(file: Option<PathBuf>) -> Result<Manifest> {
    match file {
        Some(path) => Manifest::load(&path),
        None => Manifest::discover(&env::current_dir()?),
    }
}

fn check(manifest: &Manifest) {
    let vessel = &manifest.vessel;
    println!("Vessel: {}", vessel.name);
    println!(
        "  {} knots, {} slots, {} t weight limit",
        vessel.max_speed_knots, vessel.max_container_slots, vessel.max_total_weight_tons
    );
    println!("Containers: {}", manifest.containers.len());
    println!("Declared load: {} kg", manifest.declared_load_kg());
}

fn report(output: &Output, outcome: &PlanOutcome) {
    output.emit_json(outcome);

    let vessel = &outcome.vessel;
    output.progress(&format!("Vessel: {}", vessel.name));
    for container in &vessel.containers {
        output.progress(&format!(
            "  {} {} {} kg / {} kg",
            container.serial,
            container.kind.label(),
            container.current_cargo_kg,
            container.max_payload_kg
        ));
    }
    for rejection in &outcome.rejected {
        output.warning(&format!("{} rejected: {}", rejection.serial, rejection.reason));
    }

    output.result(&format!(
        "Stowed {}/{} containers aboard {}, {} kg of cargo",
        outcome.stowed.len(),
        outcome.stowed.len() + outcome.rejected.len(),
        vessel.name,
        vessel.total_cargo_kg
    ));
}
