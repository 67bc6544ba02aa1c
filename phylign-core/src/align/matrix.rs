//! Dense (n+1) x (m+1) DP grids, flat row-major.

/// Traceback marker stored per cell. `Stop` appears only at [0,0].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Stop,
    Diag,
    Up,
    Left,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, val: i32) {
        self.data[i * self.cols + j] = val;
    }

    pub fn row(&self, i: usize) -> &[i32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracebackMatrix {
    data: Vec<Direction>,
    rows: usize,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![Direction::Stop; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Direction {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, dir: Direction) {
        self.data[i * self.cols + j] = dir;
    }
}

/// One cell on the traceback path; `dir` is the move that reached (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
}
