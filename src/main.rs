//! Sprout's main application entry point.

use owo_colors::{OwoColorize, Stream, Style};

use sprout::{
    cli::{get_args, Args},
    create_project,
    error::{default_error_handler, Error, Result},
    installer::CommandInstaller,
    logger::init_logger,
    options::ScaffoldOptions,
    pipeline::ConsoleReporter,
    template::{list_templates, templates_root},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template; an invalid name ends the run before any write
/// 2. Runs the copy, install and git tasks
/// 3. Reports success, or fails with the number of failed tasks
fn run(args: Args) -> Result<()> {
    if args.list {
        let root = templates_root(args.templates_dir.as_deref());
        for name in list_templates(&root) {
            println!("{name}");
        }
        return Ok(());
    }

    let options = ScaffoldOptions::from_args(&args)?;
    let installer = CommandInstaller::new(options.package_manager);
    let report = create_project(&options, &installer, &mut ConsoleReporter);

    if !report.is_success() {
        return Err(Error::PipelineFailed { failed: report.failed() });
    }

    println!(
        "{} Project Ready!",
        "DONE".if_supports_color(Stream::Stdout, |s| s.style(Style::new().bold().green()))
    );
    Ok(())
}
