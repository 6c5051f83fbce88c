//! Faction ownership grid
//!
//! Flat row-major storage of one faction per cell.

use serde::{Deserialize, Serialize};

/// One of the two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Light,
    Dark,
}

impl Faction {
    pub fn opponent(self) -> Self {
        match self {
            Faction::Light => Faction::Dark,
            Faction::Dark => Faction::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Light => "Light",
            Faction::Dark => "Dark",
        }
    }

    /// Fill color for cells owned by this faction
    pub fn cell_color(&self) -> &'static str {
        match self {
            Faction::Light => "#FFD700",
            Faction::Dark => "#9370DB",
        }
    }

    /// Fill color for this faction's ball
    pub fn ball_color(&self) -> &'static str {
        match self {
            Faction::Light => "#FFFF00",
            Faction::Dark => "#DDA0DD",
        }
    }
}

/// Cell totals per faction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionCounts {
    pub light: usize,
    pub dark: usize,
}

impl FactionCounts {
    pub fn get(&self, faction: Faction) -> usize {
        match faction {
            Faction::Light => self.light,
            Faction::Dark => self.dark,
        }
    }

    pub fn total(&self) -> usize {
        self.light + self.dark
    }

    /// The faction owning every cell, if any
    pub fn sole_owner(&self) -> Option<Faction> {
        match (self.light, self.dark) {
            (0, 0) => None,
            (0, _) => Some(Faction::Dark),
            (_, 0) => Some(Faction::Light),
            _ => None,
        }
    }
}

/// Grid of faction-owned cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Faction>,
}

impl Grid {
    /// Create a grid split vertically: columns left of `cols / 2` are light,
    /// the rest dark.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: Vec::with_capacity(rows * cols),
        };
        grid.initialize();
        grid
    }

    /// Restore the vertical split in place
    pub fn initialize(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        self.cells.clear();
        self.cells.extend((0..rows).flat_map(|_| {
            // col < cols / 2 compared in real numbers, so odd widths give the
            // extra middle column to light
            (0..cols).map(move |col| {
                if 2 * col < cols {
                    Faction::Light
                } else {
                    Faction::Dark
                }
            })
        }));
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Faction at a cell, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Faction> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set one cell's faction.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid. Collision search clamps
    /// its indices before calling, so this only fires on caller bugs.
    pub fn convert(&mut self, row: usize, col: usize, faction: Faction) {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = faction;
    }

    /// Overwrite every cell with one faction
    pub fn fill(&mut self, faction: Faction) {
        self.cells.fill(faction);
    }

    /// Count cells per faction (O(rows * cols))
    pub fn count_by_faction(&self) -> FactionCounts {
        let light = self.cells.iter().filter(|&&f| f == Faction::Light).count();
        FactionCounts {
            light,
            dark: self.cells.len() - light,
        }
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Faction] {
        &self.cells
    }
}
