//! Dependency installation through an external package manager.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use clap::ValueEnum;
use log::debug;

use crate::error::{Error, Result};

/// Package managers Sprout knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Picks the package manager from the lockfile present in `dir`,
    /// defaulting to npm.
    pub fn detect<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        if dir.join("pnpm-lock.yaml").exists() {
            Self::Pnpm
        } else if dir.join("yarn.lock").exists() {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    /// Executable name, with the `.cmd` shim on Windows.
    pub fn program(&self) -> &'static str {
        match (self, cfg!(windows)) {
            (Self::Npm, false) => "npm",
            (Self::Yarn, false) => "yarn",
            (Self::Pnpm, false) => "pnpm",
            (Self::Npm, true) => "npm.cmd",
            (Self::Yarn, true) => "yarn.cmd",
            (Self::Pnpm, true) => "pnpm.cmd",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        };
        write!(f, "{name}")
    }
}

/// Installs the dependencies of the project in a directory.
pub trait Installer {
    fn install(&self, dir: &Path) -> Result<()>;
}

/// Installer that spawns `<package manager> install`.
#[derive(Debug, Default)]
pub struct CommandInstaller {
    preferred: Option<PackageManager>,
}

impl CommandInstaller {
    pub fn new(preferred: Option<PackageManager>) -> Self {
        Self { preferred }
    }

    /// The package manager that will run in `dir`.
    pub fn package_manager(&self, dir: &Path) -> PackageManager {
        self.preferred.unwrap_or_else(|| PackageManager::detect(dir))
    }
}

impl Installer for CommandInstaller {
    fn install(&self, dir: &Path) -> Result<()> {
        let manager = self.package_manager(dir);
        debug!("Running '{} install' in '{}'.", manager, dir.display());

        let status = Command::new(manager.program())
            .arg("install")
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::InstallFailed {
                manager: manager.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::InstallFailed {
                manager: manager.to_string(),
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}
