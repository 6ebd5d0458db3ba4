//! addressable terraform blocks
use std::fmt::Formatter;

/// A `resource` or `module` block found in a declaration file
///
/// Values are taken verbatim from the block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReference {
    /// `resource "<resource_type>" "<name>" {`
    Resource { resource_type: String, name: String },
    /// `module "<name>" {`
    Module { name: String },
}

impl BlockReference {
    pub fn resource(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Resource {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    pub fn module(name: impl Into<String>) -> Self {
        Self::Module { name: name.into() }
    }

    /// Terraform address of the block, e.g. `aws_s3_bucket.logs` or `module.network`
    pub fn address(&self) -> String {
        self.to_string()
    }

    /// The `-target=<address>` flag selecting this block
    pub fn target_flag(&self) -> String {
        format!("-target={self}")
    }
}

impl std::fmt::Display for BlockReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReference::Resource {
                resource_type,
                name,
            } => write!(f, "{resource_type}.{name}"),
            BlockReference::Module { name } => write!(f, "module.{name}"),
        }
    }
}
