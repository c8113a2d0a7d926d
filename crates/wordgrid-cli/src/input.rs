//! Reading grids and word lists from disk.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use wordgrid_core::{Grid, GridError};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Load a grid file (see [`Grid::parse`] for the format).
///
/// With `uppercase`, cells are folded to uppercase after parsing. Cells whose
/// uppercase form is more than one character (e.g. `ß`) are left unchanged.
pub fn load_grid(path: &Path, uppercase: bool) -> Result<Grid, InputError> {
    let text = fs::read_to_string(path)?;
    let grid = Grid::parse(&text)?;
    debug!(rows = grid.rows(), cols = grid.cols(), "grid loaded");
    if uppercase {
        Ok(grid.map_cells(upper_char))
    } else {
        Ok(grid)
    }
}

/// Load a word list: one word per line, trimmed.
///
/// Blank lines are skipped, as are lines starting with `comment_prefix`
/// unless it is empty.
pub fn load_dictionary(
    path: &Path,
    comment_prefix: &str,
    uppercase: bool,
) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path)?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.is_empty() || !line.starts_with(comment_prefix))
        .map(|line| {
            if uppercase {
                line.chars().map(upper_char).collect()
            } else {
                line.to_string()
            }
        })
        .collect();
    debug!(word_count = words.len(), "dictionary loaded");
    Ok(words)
}

fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_grid_separated() {
        let file = write_temp("C C C\nC A C\nC C T\nD O G\n");
        let grid = load_grid(file.path(), false).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(3, 2), Some('G'));
    }

    #[test]
    fn test_load_grid_uppercase() {
        let file = write_temp("cat\ndoß\n");
        let grid = load_grid(file.path(), true).unwrap();
        assert_eq!(grid.get(0, 1), Some('A'));
        // 'ß' uppercases to "SS", so it stays as is
        assert_eq!(grid.get(1, 2), Some('ß'));
    }

    #[test]
    fn test_load_grid_ragged() {
        let file = write_temp("ABC\nAB\n");
        let err = load_grid(file.path(), false).unwrap_err();
        assert!(matches!(err, InputError::Grid(GridError::RaggedRow { .. })));
    }

    #[test]
    fn test_load_grid_missing_file() {
        let err = load_grid(Path::new("/nonexistent/grid.txt"), false).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_load_dictionary_skips_blank_and_comments() {
        let file = write_temp("# animals\nCAT\n\n  DOG  \n#BIRD\nPLANE\n");
        let words = load_dictionary(file.path(), "#", false).unwrap();
        assert_eq!(words, vec!["CAT", "DOG", "PLANE"]);
    }

    #[test]
    fn test_load_dictionary_without_comments() {
        let file = write_temp("#TAG\nCAT\n");
        let words = load_dictionary(file.path(), "", false).unwrap();
        assert_eq!(words, vec!["#TAG", "CAT"]);
    }

    #[test]
    fn test_load_dictionary_uppercase() {
        let file = write_temp("cat\nDog\n");
        let words = load_dictionary(file.path(), "#", true).unwrap();
        assert_eq!(words, vec!["CAT", "DOG"]);
    }
}
