//! version and credential profile lookup
//!
//! - `config/info.yaml`: the first line reads `<label>: <version>`
//! - `config/<env>.tfvars`: the first line assigning `aws_profile = "<profile>"` selects the profile
use crate::scanner::is_space;
use crate::workspace::Workspace;
use nom::{
    bytes::complete::{tag, take_while},
    character::complete::char,
    IResult, Parser,
};
use std::io::BufRead;
use std::path::{Path, PathBuf};

const VERSION_DELIMITER: &str = ": ";
const PROFILE_KEY: &str = "aws_profile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub version: String,
    pub profile: String,
}

impl RepoInfo {
    pub fn load(workspace: &Workspace, env: &str) -> Result<Self, RepoInfoError> {
        let version = read_version(&workspace.info_path()).inspect_err(log_error)?;
        tracing::info!(%version, "current version");

        let profile = read_profile(&workspace.tfvars_path(env)).inspect_err(log_error)?;
        tracing::info!(%profile, "aws profile");

        Ok(Self { version, profile })
    }
}

fn log_error(err: &RepoInfoError) {
    tracing::error!(path=%err.path().display(), "{err}");
}

/// Version from the first line of `path`: everything after the first `": "`
pub fn read_version(path: &Path) -> Result<String, RepoInfoError> {
    let mut lines = open(path)?.lines();
    let first_line = lines.next().transpose().map_err(|source| RepoInfoError::Read {
        path: path.to_owned(),
        source,
    })?;
    let first_line = first_line.unwrap_or_default();
    let first_line = first_line.trim();

    match first_line.split_once(VERSION_DELIMITER) {
        Some((_label, version)) => Ok(version.to_string()),
        None => Err(RepoInfoError::KeyNotFound {
            path: path.to_owned(),
            line: first_line.to_string(),
        }),
    }
}

/// Profile from the first `aws_profile = "..."` line of `path`
pub fn read_profile(path: &Path) -> Result<String, RepoInfoError> {
    for line in open(path)?.lines() {
        let line = line.map_err(|source| RepoInfoError::Read {
            path: path.to_owned(),
            source,
        })?;

        if let Some(profile) = profile_value(&line) {
            return Ok(profile.to_string());
        }
    }

    Err(RepoInfoError::UndefinedProfile {
        path: path.to_owned(),
    })
}

fn open(path: &Path) -> Result<std::io::BufReader<std::fs::File>, RepoInfoError> {
    std::fs::File::open(path)
        .map(std::io::BufReader::new)
        .map_err(|source| RepoInfoError::FileNotFound {
            path: path.to_owned(),
            source,
        })
}

/// Value of an `aws_profile = "..."` assignment
///
/// Leading whitespace is allowed. The value runs up to the last `"` on the line, so anything
/// between an inner quote and the last one is part of it.
fn profile_value(line: &str) -> Option<&str> {
    let (rest, _) = profile_assignment(line).ok()?;
    rest.rfind('"').map(|end| &rest[..end])
}

/// `<ws>aws_profile<ws>=<ws>"`
fn profile_assignment(input: &str) -> IResult<&str, ()> {
    let whitespace = || take_while(is_space);
    (
        whitespace(),
        tag(PROFILE_KEY),
        whitespace(),
        char('='),
        whitespace(),
        char('"'),
    )
        .map(|_| ())
        .parse(input)
}

#[derive(thiserror::Error, Debug)]
pub enum RepoInfoError {
    #[error("File not found at {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to read {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Missing \": \" in first line of {}: {line:?}", .path.display())]
    KeyNotFound { path: PathBuf, line: String },
    #[error("No aws_profile defined in {}", .path.display())]
    UndefinedProfile { path: PathBuf },
}

impl RepoInfoError {
    pub fn path(&self) -> &Path {
        match self {
            RepoInfoError::FileNotFound { path, .. }
            | RepoInfoError::Read { path, .. }
            | RepoInfoError::KeyNotFound { path, .. }
            | RepoInfoError::UndefinedProfile { path } => path,
        }
    }
}
