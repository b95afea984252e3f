//! Common constants used throughout the Sprout application.

/// Name of the directory holding the bundled templates
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the bundled templates location
pub const TEMPLATES_DIR_ENV: &str = "SPROUT_TEMPLATES_DIR";

/// Content written to `.gitignore` when a repository is initialized
pub const GITIGNORE_CONTENT: &str = "node_modules\npackage-lock.json\n.env\n";

/// Message of the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initialize Commit";

/// Signature used when git has no configured user
pub const FALLBACK_SIGNATURE: (&str, &str) = ("sprout", "sprout@localhost");

/// Reason shown when the install task is skipped
pub const INSTALL_SKIP_REASON: &str = "Pass --install to automatically install dependencies.";

pub const COPY_TASK_TITLE: &str = "Copy Project Files";
pub const INSTALL_TASK_TITLE: &str = "Install Dependencies";
pub const GIT_TASK_TITLE: &str = "Initialize Git";
