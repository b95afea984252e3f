//! Git repository initialization for freshly scaffolded projects.

use std::fs;
use std::path::Path;

use git2::{IndexAddOption, Oid, Repository, Signature};
use log::{debug, error};

use crate::constants::{FALLBACK_SIGNATURE, GITIGNORE_CONTENT, INITIAL_COMMIT_MESSAGE};
use crate::error::{Error, Result};

/// Initializes a repository in `dir`, writes `.gitignore`, stages every file
/// and creates the initial commit.
///
/// # Errors
/// * `Error::GitInitFailed` if any step fails. Steps already performed are
///   kept, so a failed commit leaves an initialized repository behind.
///   Running it again in a directory whose repository already has a commit
///   fails as well, since the initial commit has no parent.
pub fn init_repository<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    match commit_initial(dir) {
        Ok(oid) => {
            debug!("Created initial commit {} in '{}'.", oid, dir.display());
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(Error::GitInitFailed { source: Box::new(e) })
        }
    }
}

fn commit_initial(dir: &Path) -> Result<Oid> {
    let repo = Repository::init(dir)?;
    debug!("Initialized repository at '{}'.", repo.path().display());

    fs::write(dir.join(".gitignore"), GITIGNORE_CONTENT)?;

    let mut index = repo.index()?;
    index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = signature(&repo)?;
    let oid = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        INITIAL_COMMIT_MESSAGE,
        &tree,
        &[],
    )?;

    Ok(oid)
}

/// The user's configured identity, or Sprout's own when git has none.
fn signature(repo: &Repository) -> Result<Signature<'static>> {
    match repo.signature() {
        Ok(signature) => Ok(signature),
        Err(e) => {
            debug!("No git identity configured ({}), using fallback.", e.message());
            let (name, email) = FALLBACK_SIGNATURE;
            Ok(Signature::now(name, email)?)
        }
    }
}
