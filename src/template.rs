//! Bundled template lookup.
//! Maps a template name onto a directory under the templates root that ships
//! next to the executable.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::constants::TEMPLATES_DIR;
use crate::error::{Error, Result};

/// Returns the directory holding the bundled templates.
///
/// An explicit `override_dir` always wins. Otherwise `<exe dir>/templates`,
/// `<exe dir>/../templates` and the crate's own `templates` directory are
/// tried in order and the first existing one is used; when none exists the
/// first candidate is returned.
pub fn templates_root(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return absolute(dir);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    let candidates = [
        exe_dir.join(TEMPLATES_DIR),
        exe_dir.join("..").join(TEMPLATES_DIR),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR),
    ];

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!("Using templates root '{}'.", candidate.display());
            return candidate.clone();
        }
    }

    let [first, ..] = candidates;
    first
}

/// Resolves `name` to a readable template directory under `root`.
///
/// The name is matched case-insensitively by lowercasing it, which is how the
/// bundled directories are named.
///
/// # Errors
/// * `Error::InvalidTemplate` if the name is not a single path segment or the
///   directory cannot be read
pub fn resolve<P: AsRef<Path>>(root: P, name: &str) -> Result<PathBuf> {
    let root = root.as_ref();
    let lowered = name.to_lowercase();

    let invalid = || Error::InvalidTemplate {
        name: name.to_string(),
        available: list_templates(root),
    };

    if !is_plain_name(&lowered) {
        return Err(invalid());
    }

    let template_dir = absolute(&root.join(&lowered));
    debug!("Checking template directory '{}'.", template_dir.display());

    match fs::read_dir(&template_dir) {
        Ok(_) => Ok(template_dir),
        Err(e) => {
            debug!("Template '{}' is not readable: {}", template_dir.display(), e);
            Err(invalid())
        }
    }
}

/// Lists the names of the templates available under `root`, sorted.
pub fn list_templates<P: AsRef<Path>>(root: P) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root.as_ref()) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}
