//! repository layout
//!
//! ```text
//! <root>/
//!   terraform/<declaration files>
//!   config/info.yaml
//!   config/<env>.tfvars
//! ```
use crate::block::BlockReference;
use crate::scanner::{self, ScanError};
use std::path::{Path, PathBuf};

/// Directory holding `terraform/` and `config/`
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn terraform_dir(&self) -> PathBuf {
        self.root.join("terraform")
    }

    /// Declaration file identified by `identifier`, relative to `terraform/`
    ///
    /// `identifier` is appended as text, so an absolute identifier stays below `terraform/`.
    pub fn declaration_path(&self, identifier: &str) -> PathBuf {
        append(self.terraform_dir(), identifier)
    }

    pub fn info_path(&self) -> PathBuf {
        self.root.join("config").join("info.yaml")
    }

    pub fn tfvars_path(&self, env: &str) -> PathBuf {
        append(self.root.join("config"), &format!("{env}.tfvars"))
    }

    /// Scan the declaration file identified by `identifier`
    pub fn scan(&self, identifier: &str) -> Result<Vec<BlockReference>, ScanError> {
        scanner::scan_file(&self.declaration_path(identifier))
    }
}

/// `<dir>/<relative>`, never replacing `dir` the way [Path::join] does for absolute input
fn append(dir: PathBuf, relative: &str) -> PathBuf {
    let mut path = dir.into_os_string();
    path.push("/");
    path.push(relative);
    path.into()
}
