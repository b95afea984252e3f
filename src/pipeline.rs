//! Ordered task runner with per-task status reporting.
//!
//! Every task carries two gates computed before the run starts: `enabled`
//! (a disabled task is omitted entirely and never reported) and `skip` (a
//! skipped task is reported with its reason but its action never runs).
//! Each reported task moves `Pending -> Running -> Done | Failed`, or
//! `Pending -> Skipped`. There is no retry and no rollback.

use std::fmt;

use log::debug;
use owo_colors::{OwoColorize, Stream, Style};

use crate::error::Result;

/// Status of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Skipped(String),
    Done,
    Failed(String),
}

impl TaskStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Skipped(_) | Self::Done | Self::Failed(_))
    }
}

type Action<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

/// One named unit of work.
pub struct Task<'a> {
    title: String,
    skip: Option<String>,
    enabled: bool,
    abort_on_failure: bool,
    action: Action<'a>,
}

impl<'a> Task<'a> {
    pub fn new<S: Into<String>, F>(title: S, action: F) -> Self
    where
        F: FnOnce() -> Result<()> + 'a,
    {
        Self {
            title: title.into(),
            skip: None,
            enabled: true,
            abort_on_failure: false,
            action: Box::new(action),
        }
    }

    /// Skips the task with `reason` when it is `Some`.
    pub fn skip(mut self, reason: Option<String>) -> Self {
        self.skip = reason;
        self
    }

    /// Omits the task from the run when `false`.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Stops the pipeline when this task fails.
    pub fn abort_on_failure(mut self, abort: bool) -> Self {
        self.abort_on_failure = abort;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Debug for Task<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("title", &self.title)
            .field("skip", &self.skip)
            .field("enabled", &self.enabled)
            .field("abort_on_failure", &self.abort_on_failure)
            .finish_non_exhaustive()
    }
}

/// Receives every status transition of the run.
pub trait Reporter {
    fn report(&mut self, title: &str, status: &TaskStatus);
}

/// Prints task transitions to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, title: &str, status: &TaskStatus) {
        let paint = |s: &str, style: Style| {
            s.if_supports_color(Stream::Stdout, |s| s.style(style)).to_string()
        };
        match status {
            TaskStatus::Pending => {}
            TaskStatus::Running => println!("{} {}", paint("…", Style::new().yellow()), title),
            TaskStatus::Done => println!("{} {}", paint("✔", Style::new().green()), title),
            TaskStatus::Skipped(reason) => println!(
                "{} {} {}",
                paint("↓", Style::new().yellow()),
                title,
                paint(&format!("[skipped] {reason}"), Style::new().dimmed())
            ),
            TaskStatus::Failed(message) => println!(
                "{} {}\n  {} {}",
                paint("✖", Style::new().red()),
                title,
                paint("→", Style::new().red()),
                message
            ),
        }
    }
}

/// Final status of every task that took part in a run, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub tasks: Vec<(String, TaskStatus)>,
}

impl Report {
    pub fn status(&self, title: &str) -> Option<&TaskStatus> {
        self.tasks.iter().find(|(t, _)| t == title).map(|(_, status)| status)
    }

    pub fn failed(&self) -> usize {
        self.tasks
            .iter()
            .filter(|(_, status)| matches!(status, TaskStatus::Failed(_)))
            .count()
    }

    /// True when every reported task finished and none failed.
    pub fn is_success(&self) -> bool {
        self.tasks.iter().all(|(_, status)| status.is_final()) && self.failed() == 0
    }
}

/// A fixed, ordered list of tasks.
#[derive(Debug, Default)]
pub struct Pipeline<'a> {
    tasks: Vec<Task<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(tasks: Vec<Task<'a>>) -> Self {
        Self { tasks }
    }

    /// Runs the tasks in order and returns their final statuses.
    ///
    /// Errors returned by task actions are caught and recorded as `Failed`.
    /// After a failure of an `abort_on_failure` task the remaining tasks stay
    /// `Pending` and their actions are not called.
    pub fn run(self, reporter: &mut dyn Reporter) -> Report {
        let tasks: Vec<Task<'a>> = self.tasks.into_iter().filter(|task| task.enabled).collect();

        for task in &tasks {
            reporter.report(&task.title, &TaskStatus::Pending);
        }

        let mut report = Report::default();
        let mut aborted = false;

        for task in tasks {
            if aborted {
                report.tasks.push((task.title, TaskStatus::Pending));
                continue;
            }

            let status = match task.skip {
                Some(reason) => {
                    debug!("Skipping task '{}': {}", task.title, reason);
                    TaskStatus::Skipped(reason)
                }
                None => {
                    reporter.report(&task.title, &TaskStatus::Running);
                    match (task.action)() {
                        Ok(()) => TaskStatus::Done,
                        Err(e) => {
                            debug!("Task '{}' failed: {:?}", task.title, e);
                            aborted = task.abort_on_failure;
                            TaskStatus::Failed(e.to_string())
                        }
                    }
                }
            };

            reporter.report(&task.title, &status);
            report.tasks.push((task.title, status));
        }

        report
    }
}
