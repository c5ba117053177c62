use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ideaxml")]
#[command(about = "Generates META-INF/plugin.xml for IDE plugins from declarative descriptors", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.ideaxml/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write META-INF/plugin.xml into the generated-resources directory
    Generate {
        /// Descriptor files, merged in order (default: ideaxml.toml)
        #[arg(short, long = "descriptor")]
        descriptors: Vec<PathBuf>,

        /// Generated-resources root
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the generated plugin.xml to stdout
    Print {
        #[arg(short, long = "descriptor")]
        descriptors: Vec<PathBuf>,
    },
    /// Validate descriptors and report warnings
    Check {
        #[arg(short, long = "descriptor")]
        descriptors: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "ideaxml",
            "generate",
            "-d",
            "a.toml",
            "--descriptor",
            "b.json",
            "-o",
            "build/res",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                descriptors,
                out_dir,
            } => {
                assert_eq!(descriptors, vec![PathBuf::from("a.toml"), PathBuf::from("b.json")]);
                assert_eq!(out_dir, Some(PathBuf::from("build/res")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ideaxml", "check", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Check { ref descriptors } if descriptors.is_empty()));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["ideaxml"]).is_err());
    }
}
