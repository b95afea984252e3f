use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::Result;
use crate::installer::PackageManager;
use crate::template::{resolve, templates_root};

/// Everything a single scaffolding run needs.
///
/// `template_directory` is always derived from `template`, so a value built
/// through [`ScaffoldOptions::new`] points at a readable template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub template: String,
    pub target_directory: PathBuf,
    pub template_directory: PathBuf,
    pub run_install: bool,
    pub git: bool,
    pub package_manager: Option<PackageManager>,
}

impl ScaffoldOptions {
    /// Resolves `template` under `templates_root` and fixes the target
    /// directory, defaulting to the current working directory.
    ///
    /// # Errors
    /// * `Error::InvalidTemplate` if the template cannot be resolved
    /// * `Error::IoError` if the working directory is needed but unavailable
    pub fn new<S: Into<String>>(
        template: S,
        templates_root: &Path,
        target_directory: Option<PathBuf>,
    ) -> Result<Self> {
        let template = template.into();
        let template_directory = resolve(templates_root, &template)?;

        let target_directory = match target_directory {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => std::env::current_dir()?.join(dir),
            None => std::env::current_dir()?,
        };

        Ok(Self {
            template,
            target_directory,
            template_directory,
            run_install: false,
            git: false,
            package_manager: None,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let root = templates_root(args.templates_dir.as_deref());
        let template = args.template.clone().unwrap_or_default();
        let mut options = Self::new(template, &root, args.target_dir.clone())?;
        options.run_install = args.install;
        options.git = args.git;
        options.package_manager = args.package_manager;
        Ok(options)
    }
}
