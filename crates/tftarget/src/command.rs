//! terraform invocation
//!
//! The command is built as a list of discrete arguments and started without a shell, so no
//! value needs quoting.
use crate::target::TargetExpression;
use std::fmt::Formatter;
use std::path::Path;
use std::process::{Command, ExitStatus};

pub const DEFAULT_PROGRAM: &str = "terraform";

/// Environment variable that selects the aws credential profile
pub const PROFILE_VARIABLE: &str = "AWS_PROFILE";

/// `<program> -chdir=terraform <action> -var-file=../config/<env>.tfvars -var=env_id=<env_id> -var=app_version=<version> <targets>`
#[derive(Debug, Clone, derive_new::new)]
pub struct TerraformCommand {
    program: String,
    action: String,
    env: String,
    env_id: String,
    version: String,
    targets: TargetExpression,
}

impl TerraformCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-chdir=terraform".to_string(),
            self.action.clone(),
            format!("-var-file=../config/{}.tfvars", self.env),
            format!("-var=env_id={}", self.env_id),
            format!("-var=app_version={}", self.version),
        ];
        args.extend(self.targets.args());
        args
    }

    /// Run the command in `workdir` with the credential `profile` exported
    ///
    /// Blocks until the program exits. Output is not captured.
    pub fn execute(&self, workdir: &Path, profile: &str) -> Result<(), CommandError> {
        tracing::info!(command=%self, "terraform command");

        let status = Command::new(&self.program)
            .args(self.args())
            .current_dir(workdir)
            .env(PROFILE_VARIABLE, profile)
            .status()
            .map_err(|source| {
                tracing::error!(
                    command=%self,
                    program=%self.program(),
                    %source,
                    "unable to start terraform"
                );
                CommandError::Spawn {
                    command: self.to_string(),
                    source,
                }
            })?;

        if !status.success() {
            tracing::error!(command=%self, %status, "terraform command failed");
            return Err(CommandError::CommandFailed {
                command: self.to_string(),
                status,
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for TerraformCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in self.args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("Unable to start `{command}`")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}
