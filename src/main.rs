mod cli;

use ideaxml::config::Config;
use ideaxml::emitter::Emission;
use ideaxml::generate::{check, generate_to_dir, output_path, render};
use ideaxml::logging::init_logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Descriptors from the command line, or the configured default.
fn descriptor_paths(descriptors: Vec<PathBuf>, config: &Config) -> Vec<PathBuf> {
    if descriptors.is_empty() {
        vec![config.descriptor.clone()]
    } else {
        descriptors
    }
}

fn handle_generate(descriptors: &[PathBuf], out_dir: &Path) -> Result<()> {
    match generate_to_dir(descriptors, out_dir)? {
        Emission::Written { bytes, .. } => {
            println!("Wrote {} ({} bytes)", output_path(out_dir).display(), bytes);
        }
        Emission::NoOp => {
            println!("No plugin declared; nothing generated");
        }
    }
    Ok(())
}

fn handle_print(descriptors: &[PathBuf]) -> Result<()> {
    match render(descriptors)? {
        Some(xml) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.flush()?;
        }
        None => {
            tracing::warn!("No plugin declared; nothing to print");
        }
    }
    Ok(())
}

fn handle_check(descriptors: &[PathBuf]) -> Result<()> {
    let (descriptor, warnings) = check(descriptors)?;
    for warning in &warnings {
        println!("warning: {}", warning);
    }

    let plugin = match descriptor.plugin {
        Some(ref plugin) => plugin.id.as_str(),
        None => "<none>",
    };
    println!(
        "OK: plugin {}, {} action(s), {} warning(s)",
        plugin,
        descriptor.actions.len(),
        warnings.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_logging(&config.log_level);

    match cli.command {
        Commands::Generate {
            descriptors,
            out_dir,
        } => {
            let descriptors = descriptor_paths(descriptors, &config);
            let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
            handle_generate(&descriptors, &out_dir)?;
        }
        Commands::Print { descriptors } => {
            handle_print(&descriptor_paths(descriptors, &config))?;
        }
        Commands::Check { descriptors } => {
            handle_check(&descriptor_paths(descriptors, &config))?;
        }
    }

    Ok(())
}
