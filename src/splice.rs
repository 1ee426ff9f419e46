//! In-place rewriting of entity source files.
//!
//! The splicer reads the whole file, drops any existing annotation block from
//! the front, and writes the new block followed by the untouched remainder.
//! Removal is a line scanner rather than a regex: a removable block starts
//! with the marker line, continues through consecutive `#` comment lines, and
//! is closed by exactly one blank line (which belongs to the block). A block
//! that reaches a non-comment line or end-of-file before its blank terminator
//! is left alone.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::format::PREFIX;

#[derive(Debug, Error)]
pub enum SpliceError {
    #[error("source file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("reading or writing {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Replaces any existing annotation block at the top of `path` with `block`,
/// overwriting the file.
pub fn annotate_file(path: &Path, block: &str) -> Result<(), SpliceError> {
    let content = read(path)?;
    let remainder = strip_block(&content);
    let mut updated = String::with_capacity(block.len() + remainder.len());
    updated.push_str(block);
    updated.push_str(remainder);
    write(path, &updated)
}

/// Removes an existing annotation block from `path`, if present. Returns
/// whether the file was rewritten.
pub fn strip_file(path: &Path) -> Result<bool, SpliceError> {
    let content = read(path)?;
    let remainder = strip_block(&content);
    if remainder.len() == content.len() {
        return Ok(false);
    }
    write(path, remainder)?;
    Ok(true)
}

/// Returns the file content with a leading annotation block removed, or the
/// full content when no well-formed block is present.
pub fn strip_block(content: &str) -> &str {
    let marker = format!("# {PREFIX}");
    if !content.starts_with(&marker) {
        return content;
    }
    let mut consumed = 0usize;
    let mut on_marker_line = true;
    for line in content.split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if on_marker_line {
            on_marker_line = false;
        } else if text.is_empty() {
            // Blank terminator closes the block and is removed with it.
            return &content[consumed + line.len()..];
        } else if !text.starts_with('#') {
            // Comment run interrupted before a blank line: malformed block.
            return content;
        }
        consumed += line.len();
    }
    // End-of-file before the blank terminator.
    content
}

fn read(path: &Path) -> Result<String, SpliceError> {
    fs::read_to_string(path).map_err(|source| classify(path, source))
}

fn write(path: &Path, content: &str) -> Result<(), SpliceError> {
    fs::write(path, content).map_err(|source| classify(path, source))
}

fn classify(path: &Path, source: io::Error) -> SpliceError {
    if source.kind() == io::ErrorKind::NotFound {
        SpliceError::FileNotFound(path.to_path_buf())
    } else {
        SpliceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
