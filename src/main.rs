//! plugin-build CLI entrypoint
//! Expands command templates of a plugin into its `commands/` directory.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use plugin_build::{BuildOptions, build};
use std::path::PathBuf;
use std::process::ExitCode;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plugin-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plugin root containing src/commands; include paths resolve against it
    #[arg(long, default_value = ".")]
    plugin_root: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Build failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = BuildOptions::for_plugin_root(&cli.plugin_root);
    info!(
        source = %options.source_dir.display(),
        output = %options.output_dir.display(),
        "Starting plugin build"
    );

    let report = build(options)
        .await
        .with_context(|| format!("Failed to build {}", cli.plugin_root.display()))?;

    info!(commands = report.len(), "Successfully built commands");
    Ok(())
}
