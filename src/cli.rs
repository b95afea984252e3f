//! Command-line interface implementation for Sprout.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::TEMPLATES_DIR_ENV;
use crate::installer::PackageManager;

/// Command-line arguments structure for Sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout: start a new project from a bundled template", long_about = None)]
pub struct Args {
    /// Directory where the project will be created (defaults to the current directory)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Name of the bundled template to use
    #[arg(short, long, value_name = "NAME", required_unless_present = "list")]
    pub template: Option<String>,

    /// Install dependencies after copying the template
    #[arg(short, long)]
    pub install: bool,

    /// Initialize a git repository with an initial commit
    #[arg(short, long)]
    pub git: bool,

    /// Package manager to install with instead of detecting it from lockfiles
    #[arg(long, value_enum, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Directory containing the templates, instead of the bundled ones
    #[arg(long, value_name = "DIR", env = TEMPLATES_DIR_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// List the available templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
