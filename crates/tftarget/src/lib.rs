//! # tftarget - run terraform against selected files
//!
//! `tftarget` reads a handful of terraform declaration files, finds the `resource` and `module`
//! blocks they declare and runs terraform with one `-target=` flag per block.
//!
//! ## Introduction for developers
//!
//! ### Repository layout
//!
//! [workspace::Workspace] describes the directory `tftarget` operates on:
//!
//! ```text
//! terraform/           declaration files, selected by name relative to this directory
//! config/info.yaml     first line is `<label>: <version>`
//! config/<env>.tfvars  contains `aws_profile = "<profile>"`
//! ```
//!
//! ### Scanning
//!
//! see [scanner]
//!
//! Declaration files are not parsed as HCL. The scanner only looks for block headers:
//!
//! ```hcl
//! resource "aws_s3_bucket" "logs" {   # -> aws_s3_bucket.logs
//!   bucket = "logs"
//! }
//!
//! module "network" {                  # -> module.network
//!   source = "./modules/network"
//! }
//! ```
//!
//! Each header becomes a [block::BlockReference]. Per file, all resources are listed before
//! all modules.
//!
//! ### Targets
//!
//! [target::TargetExpression] concatenates the blocks of all selected files in the order the
//! files were given. Nothing is sorted or deduplicated. An empty expression is valid: terraform
//! then acts on the whole configuration.
//!
//! ```
//! use tftarget::block::BlockReference;
//! use tftarget::target::TargetExpression;
//!
//! let targets = TargetExpression::from(vec![
//!     BlockReference::resource("aws_s3_bucket", "logs"),
//!     BlockReference::module("network"),
//! ]);
//! assert_eq!(targets.to_string(), "-target=aws_s3_bucket.logs -target=module.network");
//! ```
//!
//! ### Running terraform
//!
//! [repo_info::RepoInfo] supplies the application version and the aws profile,
//! [command::TerraformCommand] assembles the arguments and runs terraform with `AWS_PROFILE`
//! set. A failing terraform run is reported as [command::CommandError::CommandFailed] and is
//! never retried.
//!
pub mod block;
pub mod command;
pub mod repo_info;
pub mod scanner;
pub mod target;
pub mod workspace;
