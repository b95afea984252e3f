//! Sprout scaffolds new projects from bundled templates.
//! A run copies the template into the target directory, then optionally
//! installs dependencies and initializes a git repository.

use log::debug;

/// Command-line interface module for the Sprout application
pub mod cli;

/// Common constants
pub mod constants;

/// Recursive copy of a template into the target directory
pub mod copier;

/// Error types and handling for the Sprout application
pub mod error;

/// Repository initialization with `.gitignore` and an initial commit
pub mod git;

/// Package-manager driven dependency installation
pub mod installer;

/// Logger setup
pub mod logger;

/// Options of a single scaffolding run
pub mod options;

/// Ordered task runner with status reporting
pub mod pipeline;

/// Bundled template lookup
pub mod template;

use constants::{COPY_TASK_TITLE, GIT_TASK_TITLE, INSTALL_SKIP_REASON, INSTALL_TASK_TITLE};
use installer::Installer;
use options::ScaffoldOptions;
use pipeline::{Pipeline, Report, Reporter, Task};

/// Builds the copy, install and git tasks for `options`, in that order.
pub fn build_pipeline<'a>(
    options: &'a ScaffoldOptions,
    installer: &'a dyn Installer,
) -> Pipeline<'a> {
    let target = options.target_directory.as_path();

    Pipeline::new(vec![
        Task::new(COPY_TASK_TITLE, move || {
            let copied = copier::copy_template(&options.template_directory, target)?;
            debug!("Copied {} file(s).", copied);
            Ok(())
        })
        .abort_on_failure(true),
        Task::new(INSTALL_TASK_TITLE, move || installer.install(target))
            .skip((!options.run_install).then(|| INSTALL_SKIP_REASON.to_string())),
        Task::new(GIT_TASK_TITLE, move || git::init_repository(target)).enabled(options.git),
    ])
}

/// Runs the full scaffolding pipeline for already validated `options`.
pub fn create_project(
    options: &ScaffoldOptions,
    installer: &dyn Installer,
    reporter: &mut dyn Reporter,
) -> Report {
    debug!("Scaffolding with {:?}", options);
    build_pipeline(options, installer).run(reporter)
}
