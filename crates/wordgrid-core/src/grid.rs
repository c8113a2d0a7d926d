//! Rectangular letter grid.
//!
//! Cells are stored row-major in a single buffer. Every constructor checks
//! that all rows share the first row's length, so the search never indexes
//! past a short row.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: cell {cell:?} is not a single character")]
    Parse { line: usize, cell: String },
}

/// The 8 neighbour offsets as (d_row, d_col): orthogonal first, then diagonal.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// Zero rows is a valid, empty grid.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[char]>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
            row_count += 1;
        }
        Ok(Self {
            cells,
            rows: row_count,
            cols,
        })
    }

    /// Parse a text grid, one row per line.
    ///
    /// A line containing whitespace is split into whitespace-separated cells,
    /// each of which must be a single character (`C A T`). A line without
    /// whitespace uses every character as a cell (`CAT`). Blank lines are
    /// skipped.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .map(|token| single_char(token).ok_or_else(|| GridError::Parse {
                        line: line_no + 1,
                        cell: token.to_string(),
                    }))
                    .collect::<Result<Vec<char>, _>>()?
            } else {
                line.chars().collect()
            };
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Cell at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major index of (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell by row-major index.
    pub fn at(&self, index: usize) -> char {
        self.cells[index]
    }

    /// Row-major indices of the in-bounds neighbours of `index`.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let row = index / self.cols;
        let col = index % self.cols;
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some(self.index(r, c))
        })
    }

    /// Apply `f` to every cell, e.g. for caller-side case folding.
    pub fn map_cells(&self, f: impl Fn(char) -> char) -> Self {
        Self {
            cells: self.cells.iter().map(|&c| f(c)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}
