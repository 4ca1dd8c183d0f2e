//! Git as the record and diff source

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Tabs are expanded to this many spaces before anything is stored.
pub const TAB_SPACES: &str = "    ";

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepo,
    #[error("Git command failed: {0}")]
    CommandFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One commit in the browsable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full commit hash
    pub key: String,
    /// Subject line, tabs already expanded
    pub title: String,
}

impl Record {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into().replace('\t', TAB_SPACES),
        }
    }
}

/// Order of the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Initial commit first
    #[default]
    Up,
    /// Latest commit first
    Down,
}

/// Produces the text body for a record key.
pub trait DiffSource {
    fn diff(&self, key: &str) -> Result<Vec<String>, GitError>;
}

/// A git working copy queried through the `git` binary
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Every commit reachable from HEAD, ordered by `direction`.
    pub fn records(&self, direction: Direction) -> Result<Vec<Record>, GitError> {
        tracing::debug!(repo = %self.root.display(), ?direction, "git log");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .arg("log")
            .arg("--pretty=format:%H%n%s%n")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(GitError::NotARepo);
            }
            return Err(GitError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(parse_log(&String::from_utf8_lossy(&output.stdout), direction))
    }
}

impl DiffSource for GitRepo {
    fn diff(&self, key: &str) -> Result<Vec<String>, GitError> {
        tracing::debug!(repo = %self.root.display(), key, "git show");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .arg("show")
            .arg(key)
            .output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(split_lines(&output.stdout))
    }
}

/// Parse `git log --pretty=format:%H%n%s%n` output.
///
/// Each record is a hash line followed by its subject line, with blank
/// lines between records. The subject may itself be blank.
fn parse_log(output: &str, direction: Direction) -> Vec<Record> {
    let mut records = Vec::new();
    let mut lines = output.lines();
    while let Some(line) = lines.next() {
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        let title = lines.next().unwrap_or("");
        records.push(Record::new(key, title));
    }

    // git prints newest first
    if direction == Direction::Up {
        records.reverse();
    }
    records
}

/// Split raw command output into display lines, decoding each lossily.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    if bytes.is_empty() {
        return Vec::new();
    }
    bytes
        .split(|b| *b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).replace('\t', TAB_SPACES)
        })
        .collect()
}
