//! Puzzle input I/O operations
//!
//! This module resolves where the puzzle input comes from and reads it.

use crate::constants::INPUT_FILE_EXTENSION;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where to read the puzzle input from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Piped standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Pick the input source
    ///
    /// An explicit path always wins. Without one, piped standard input is
    /// used, and an interactive terminal falls back to `default_path`.
    pub fn resolve(explicit: Option<PathBuf>, default_path: PathBuf) -> Self {
        Self::resolve_with(explicit, default_path, !io::stdin().is_terminal())
    }

    /// Same as [`InputSource::resolve`] with the stdin state passed in
    pub fn resolve_with(
        explicit: Option<PathBuf>,
        default_path: PathBuf,
        stdin_piped: bool,
    ) -> Self {
        match explicit {
            Some(path) => Self::File(path),
            None if stdin_piped => Self::Stdin,
            None => Self::File(default_path),
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Input I/O errors
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file could not be read
    #[error("cannot read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read
    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Get the default input path for a puzzle
///
/// Format: `{dir}/{stem}.txt`
pub fn get_input_path(dir: impl AsRef<Path>, stem: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", stem, INPUT_FILE_EXTENSION))
}

/// Read the whole input
pub fn read_input(source: &InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            Ok(buf)
        }
        InputSource::File(path) => load_input(path),
    }
}

/// Read an input file
pub fn load_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_input_path() {
        assert_eq!(
            get_input_path("inputs", "2021_05"),
            PathBuf::from("inputs").join("2021_05.txt")
        );
        assert_eq!(
            get_input_path(".", "2020_05"),
            PathBuf::from(".").join("2020_05.txt")
        );
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let source = InputSource::resolve_with(
            Some(PathBuf::from("mine.txt")),
            PathBuf::from("default.txt"),
            true,
        );
        assert_eq!(source, InputSource::File(PathBuf::from("mine.txt")));
    }

    #[test]
    fn test_resolve_piped_stdin() {
        let source = InputSource::resolve_with(None, PathBuf::from("default.txt"), true);
        assert_eq!(source, InputSource::Stdin);
    }

    #[test]
    fn test_resolve_terminal_uses_default() {
        let source = InputSource::resolve_with(None, PathBuf::from("default.txt"), false);
        assert_eq!(source, InputSource::File(PathBuf::from("default.txt")));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("aoc_puzzles_missing_input.txt");
        let result = load_input(&path);
        assert!(matches!(result, Err(InputError::File { .. })));
    }
}
