use rustris_engine::Grid;

/// Derived measurements of a board snapshot, computed once per evaluation.
///
/// Heights are measured from the floor to the topmost occupied cell of each
/// column (0 for an empty column), hidden buffer rows included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMetrics {
    heights: [u8; Grid::WIDTH],
    holes: u32,
}

impl BoardMetrics {
    #[must_use]
    pub fn measure(grid: &Grid) -> Self {
        let mut heights = [0u8; Grid::WIDTH];
        let mut holes = 0u32;
        for x in 0..Grid::WIDTH {
            let mut top: Option<usize> = None;
            for (y, row) in grid.rows().enumerate() {
                if row[x].is_empty() {
                    if top.is_some() {
                        holes += 1;
                    }
                } else if top.is_none() {
                    top = Some(y);
                }
            }
            if let Some(top) = top {
                heights[x] = u8::try_from(Grid::HEIGHT - top).unwrap();
            }
        }
        Self { heights, holes }
    }

    #[must_use]
    pub fn heights(&self) -> &[u8; Grid::WIDTH] {
        &self.heights
    }

    #[must_use]
    pub fn height(&self, x: usize) -> u8 {
        self.heights[x]
    }

    /// Sum of all column heights.
    #[must_use]
    pub fn aggregate_height(&self) -> u32 {
        self.heights.iter().copied().map(u32::from).sum()
    }

    #[must_use]
    pub fn max_height(&self) -> u8 {
        *self.heights.iter().max().unwrap()
    }

    /// Summed height of the four center columns, the survival-mode clog
    /// measure.
    #[must_use]
    pub fn center_height(&self) -> u32 {
        const CENTER_START: usize = 3;
        const CENTER_END: usize = 6;
        self.heights[CENTER_START..=CENTER_END]
            .iter()
            .copied()
            .map(u32::from)
            .sum()
    }

    /// Empty cells with an occupied cell above them in the same column.
    #[must_use]
    pub fn holes(&self) -> u32 {
        self.holes
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn bumpiness(&self) -> u32 {
        self.heights
            .windows(2)
            .map(|w| i32::from(w[0]).abs_diff(i32::from(w[1])))
            .sum()
    }

    /// Bumpiness with one adjacent column pair skipped.
    ///
    /// Well mode excludes the pair touching the well column: `excluded_pair`
    /// is the left column index of that pair, so `0` skips columns (0, 1) for
    /// a left well and `WIDTH - 2` skips (8, 9) for a right well. The well's
    /// depth is intentional, not a penalized bump.
    #[must_use]
    pub fn bumpiness_excluding_pair(&self, excluded_pair: usize) -> u32 {
        self.heights
            .windows(2)
            .enumerate()
            .filter(|(i, _)| *i != excluded_pair)
            .map(|(_, w)| i32::from(w[0]).abs_diff(i32::from(w[1])))
            .sum()
    }
}
