use crate::error::RaycasterError;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;

/// Occupancy grid the viewer walks around in
/// Cell values: 0=free, 1=wall. Rows are stored row-major and always have equal length.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    /// Create a grid with all cells free
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Result<Self, RaycasterError> {
        Self::from_rows(vec![vec![0; cols]; rows], cell_size)
    }

    /// Create a grid with specific blocked cell ids (`x + y * cols`); out-of-range ids are ignored
    pub fn with_blocked(
        rows: usize,
        cols: usize,
        cell_size: f32,
        blocked: &[usize],
    ) -> Result<Self, RaycasterError> {
        let mut grid = Self::new(rows, cols, cell_size)?;
        for &cell_id in blocked {
            if cell_id < rows * cols {
                grid.cells[cell_id] = 1;
            }
        }
        Ok(grid)
    }

    /// Build a grid from explicit rows, rejecting empty and ragged input
    pub fn from_rows(rows: Vec<Vec<u8>>, cell_size: f32) -> Result<Self, RaycasterError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(RaycasterError::InvalidConfiguration(format!(
                "cell size must be positive, got {}",
                cell_size
            )));
        }

        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(RaycasterError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(RaycasterError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| u8::from(v != 0)));
        }

        debug!("Built {}x{} grid with cell size {}", cols, rows.len(), cell_size);

        Ok(OccupancyGrid {
            rows: rows.len(),
            cols,
            cell_size,
            cells,
        })
    }

    /// Parse a map made of '0'/'1' rows, one per line
    pub fn parse(text: &str, cell_size: f32) -> Result<Self, RaycasterError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut values = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '0' => values.push(0),
                    '1' => values.push(1),
                    found => return Err(RaycasterError::InvalidCell { row, col, found }),
                }
            }
            rows.push(values);
        }

        Self::from_rows(rows, cell_size)
    }

    /// Load a map file from disk
    pub fn from_file<P: AsRef<Path>>(path: P, cell_size: f32) -> Result<Self, RaycasterError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let grid = Self::parse(&contents, cell_size)?;
        info!(
            "Loaded {}x{} map from {}",
            grid.cols,
            grid.rows,
            path.display()
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Width of one tile of the map in world units
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// Height of one tile of the map in world units
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Occupancy at a world position.
    ///
    /// Negative coordinates are folded onto positive ones, then both axes wrap
    /// around the grid, so the map tiles the whole plane.
    pub fn query(&self, x: f32, y: f32) -> u8 {
        let fx = (x.abs() / self.cell_size) % self.cols as f32;
        let fy = (y.abs() / self.cell_size) % self.rows as f32;
        // fmod keeps both in [0, len); NaN casts to 0
        let col = fx as usize;
        let row = fy as usize;
        self.cells[self.get_id(col, row)]
    }

    pub fn is_occupied(&self, x: f32, y: f32) -> bool {
        self.query(x, y) != 0
    }

    /// Cell value at (col, row)
    pub fn cell(&self, col: usize, row: usize) -> Result<u8, RaycasterError> {
        if col >= self.cols || row >= self.rows {
            return Err(RaycasterError::IndexOutOfRange {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.cells[self.get_id(col, row)])
    }

    /// Convert (col, row) coordinates to cell ID
    pub fn get_id(&self, col: usize, row: usize) -> usize {
        col + row * self.cols
    }

    /// Convert cell ID to (col, row) coordinates
    pub fn get_coords(&self, id: usize) -> (usize, usize) {
        (id % self.cols, id / self.cols)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
