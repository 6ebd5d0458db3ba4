//! block header scanner
//!
//! Only the two header shapes below are recognized. Everything else in a declaration file
//! (attributes, expressions, nested blocks, comments) is skipped over.
//!
//! ```text
//! resource "<TYPE>" "<NAME>" {
//! module "<NAME>" {
//! ```
//!
//! Keywords and quoted values have to be separated by at least one whitespace character
//! (see [is_space]), as does the last quoted value from `{`. A quoted value is any non-empty run of characters
//! other than `"` (which includes line breaks). There is no escaping.
//!
//! Headers are searched for the same way a regex search walks a string: the leftmost match
//! wins, and searching continues after its end. No word boundary is required in front of a
//! keyword.
use crate::block::BlockReference;
use nom::{
    bytes::complete::{tag, take_till1, take_while1},
    character::complete::char,
    sequence::delimited,
    IResult, Parser,
};
use std::path::{Path, PathBuf};

const RESOURCE: &str = "resource";
const MODULE: &str = "module";

/// Scan a declaration file
///
/// The file handle is released before returning, on success and on error.
pub fn scan_file(path: &Path) -> Result<Vec<BlockReference>, ScanError> {
    let text = {
        let file = std::fs::File::open(path).map_err(|source| ScanError::FileNotFound {
            path: path.to_owned(),
            source,
        })?;
        std::io::read_to_string(file).map_err(|source| ScanError::Read {
            path: path.to_owned(),
            source,
        })?
    };

    tracing::info!(path=%path.display(), "identifying resource blocks");
    let mut blocks = find_all(&text, RESOURCE, resource_header);

    tracing::info!(path=%path.display(), "identifying module blocks");
    blocks.extend(find_all(&text, MODULE, module_header));

    Ok(blocks)
}

/// Scan declaration text
///
/// Returns all resource headers in text order, followed by all module headers in text order.
pub fn scan_text(text: &str) -> Vec<BlockReference> {
    let mut blocks = find_all(text, RESOURCE, resource_header);
    blocks.extend(find_all(text, MODULE, module_header));
    blocks
}

/// Collect every non-overlapping match of `header`, left to right
///
/// `keyword` is the literal every match starts with and is only used to skip ahead.
fn find_all<'t>(
    text: &'t str,
    keyword: &str,
    mut header: impl Parser<&'t str, Output = BlockReference, Error = nom::error::Error<&'t str>>,
) -> Vec<BlockReference> {
    let mut blocks = vec![];
    let mut rest = text;

    while let Some(offset) = rest.find(keyword) {
        let candidate = &rest[offset..];
        match header.parse(candidate) {
            Ok((remaining, block)) => {
                tracing::trace!(%block, "header matched");
                blocks.push(block);
                rest = remaining;
            }
            // keywords are ascii, so skipping a single byte stays on a char boundary
            Err(_) => rest = &candidate[1..],
        }
    }

    blocks
}

fn resource_header(input: &str) -> IResult<&str, BlockReference> {
    (
        tag(RESOURCE),
        whitespace,
        quoted,
        whitespace,
        quoted,
        whitespace,
        char('{'),
    )
        .map(|(_, _, resource_type, _, name, _, _)| BlockReference::resource(resource_type, name))
        .parse(input)
}

fn module_header(input: &str) -> IResult<&str, BlockReference> {
    (tag(MODULE), whitespace, quoted, whitespace, char('{'))
        .map(|(_, _, name, _, _)| BlockReference::module(name))
        .parse(input)
}

/// Whitespace as regex engines see it: unicode whitespace plus the
/// file, group, record and unit separators (`\x1c`..=`\x1f`)
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// One or more whitespace characters
fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(is_space).parse(input)
}

/// A non-empty double-quoted value, without the quotes
fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till1(|c: char| c == '"'), char('"')).parse(input)
}

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
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
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::FileNotFound { path, .. } | ScanError::Read { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resources_then_modules() {
        let blocks = scan_text(
            r#"
module "network" {
  source = "./network"
}

resource "aws_s3_bucket" "logs" {
  bucket = "logs"
}

module "dns" {
  source = "./dns"
}

resource "aws_iam_role" "writer" {}
"#,
        );

        assert_eq!(
            blocks,
            vec![
                BlockReference::resource("aws_s3_bucket", "logs"),
                BlockReference::resource("aws_iam_role", "writer"),
                BlockReference::module("network"),
                BlockReference::module("dns"),
            ]
        );
    }

    #[test]
    fn flexible_whitespace() {
        let blocks = scan_text("resource\t \"a\"\n\n  \"b\"\t{\nmodule   \"c\"\r\n{");
        assert_eq!(
            blocks,
            vec![
                BlockReference::resource("a", "b"),
                BlockReference::module("c")
            ]
        );
    }

    #[test]
    fn separator_characters_count_as_whitespace() {
        let blocks = scan_text("module\x1f\"m\"\x1c{ resource\x1d\"a\"\x1e\"b\" {");
        assert_eq!(
            blocks,
            vec![
                BlockReference::resource("a", "b"),
                BlockReference::module("m")
            ]
        );
    }

    #[test]
    fn empty_text() {
        assert_eq!(scan_text(""), vec![]);
    }

    #[test]
    fn no_headers() {
        assert_eq!(scan_text("locals {\n  region = \"eu-west-1\"\n}\n"), vec![]);
    }

    #[test]
    fn malformed_headers_are_skipped() {
        let blocks = scan_text(
            r#"
resource "missing_brace" "one"
resource "no_space" "two"{
resource"no_space" "three" {
resource "" "four" {
module "no_brace"
module "" {
resource "fine" "five" {
"#,
        );
        assert_eq!(blocks, vec![BlockReference::resource("fine", "five")]);
    }

    #[test]
    fn keyword_inside_identifier() {
        // there is no word boundary in front of the keyword
        let blocks = scan_text(r#"my_resource "a" "b" { } submodule "c" {"#);
        assert_eq!(
            blocks,
            vec![
                BlockReference::resource("a", "b"),
                BlockReference::module("c")
            ]
        );
    }

    #[test]
    fn quoted_values_are_verbatim() {
        let blocks = scan_text("resource \"type with space\" \"näme\\\" {");
        assert_eq!(
            blocks,
            vec![BlockReference::resource("type with space", "näme\\")]
        );
    }

    #[test]
    fn failed_candidate_does_not_hide_later_match() {
        let blocks = scan_text(r#"resource resource "a" "b" {"#);
        assert_eq!(blocks, vec![BlockReference::resource("a", "b")]);
    }

    #[test]
    fn duplicates_are_kept() {
        let blocks = scan_text("module \"m\" {}\nmodule \"m\" {}\n");
        assert_eq!(
            blocks,
            vec![BlockReference::module("m"), BlockReference::module("m")]
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tf");

        let err = scan_file(&path).expect_err("must error");
        assert!(matches!(err, ScanError::FileNotFound { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn scans_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.tf");
        std::fs::write(&path, "module \"network\" {\n}\nresource \"a\" \"b\" {\n}\n").unwrap();

        assert_eq!(
            scan_file(&path).unwrap(),
            vec![
                BlockReference::resource("a", "b"),
                BlockReference::module("network")
            ]
        );
    }
}
