//! target expression
//!
//! Turns the blocks of several declaration files into `-target=` flags. Order and repetition
//! are kept as scanned: terraform accumulates repeated `-target` flags.
use crate::block::BlockReference;
use crate::scanner::ScanError;
use crate::workspace::Workspace;
use std::fmt::Formatter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetExpression {
    blocks: Vec<BlockReference>,
}

impl TargetExpression {
    /// Scan a comma separated list of declaration files
    ///
    /// Files are scanned in list order. Identifiers are used verbatim (no trimming).
    /// The first file that fails aborts the scan; later files are not opened.
    pub fn collect(workspace: &Workspace, file_list: &str) -> Result<Self, ScanError> {
        let mut blocks = vec![];

        for identifier in file_list.split(',') {
            match workspace.scan(identifier) {
                Ok(found) => blocks.extend(found),
                Err(err) => {
                    tracing::error!(path=%err.path().display(), "{err}");
                    return Err(err);
                }
            }
        }

        Ok(blocks.into())
    }

    pub fn blocks(&self) -> &[BlockReference] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// No targets means terraform acts on everything
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// One `-target=<address>` argument per block
    pub fn args(&self) -> impl Iterator<Item = String> + '_ {
        self.blocks.iter().map(BlockReference::target_flag)
    }
}

impl From<Vec<BlockReference>> for TargetExpression {
    fn from(blocks: Vec<BlockReference>) -> Self {
        Self { blocks }
    }
}

impl std::fmt::Display for TargetExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut args = self.args();
        if let Some(first) = args.next() {
            f.write_str(&first)?;
        }
        for arg in args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
