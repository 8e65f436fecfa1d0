use crate::errors::SimError;

/// Rectangular Ising lattice with periodic boundaries and on-the-fly
/// neighbor computation.
///
/// Sites are indexed in row-major order: site `(row, col)` has flat index
/// `row * cols + col`. Every site has exactly four neighbors (up, down,
/// left, right); wrapping at the edges makes the neighbor relation
/// symmetric and degree-4 at every site. On an axis of extent 2 the forward
/// and backward wrap reach the same partner, so neighbor lists contain
/// duplicate entries there; [`Lattice::all_neighbors`] and
/// [`Lattice::energy`] still count each coupled pair once.
///
/// Couplings are ferromagnetic nearest-neighbor with J = 1.
pub struct Lattice {
    rows: usize,
    cols: usize,
}

impl Lattice {
    /// Create a `rows x cols` periodic lattice.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SimError> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of sites.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index of site `(row, col)`.
    #[inline]
    pub fn to_idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` coordinates of a flat index.
    #[inline]
    pub fn to_coord(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// The four neighbors of `idx`, ordered `[up, down, left, right]` under
    /// periodic wraparound.
    ///
    /// Duplicate entries are preserved: on a 2-wide axis up/down (or
    /// left/right) resolve to the same site, and on a 1-wide axis to `idx`
    /// itself.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> Result<[usize; 4], SimError> {
        if idx >= self.size() {
            return Err(SimError::IndexOutOfRange {
                index: idx,
                size: self.size(),
            });
        }
        let (row, col) = self.to_coord(idx);

        let up = if row == 0 { self.rows - 1 } else { row - 1 };
        let down = if row + 1 == self.rows { 0 } else { row + 1 };
        let left = if col == 0 { self.cols - 1 } else { col - 1 };
        let right = if col + 1 == self.cols { 0 } else { col + 1 };

        Ok([
            self.to_idx(up, col),
            self.to_idx(down, col),
            self.to_idx(row, left),
            self.to_idx(row, right),
        ])
    }

    /// Visit every unordered coupled pair exactly once.
    ///
    /// Along an axis of extent L: every site contributes its forward bond
    /// when L > 2; only coordinate-0 sites contribute when L == 2 (forward
    /// and backward wrap coincide); an axis of extent 1 contributes no
    /// bonds (a site is not coupled to itself).
    fn for_each_bond(&self, mut visit: impl FnMut(usize, usize)) {
        if self.cols > 1 {
            let reach = if self.cols == 2 { 1 } else { self.cols };
            for row in 0..self.rows {
                for col in 0..reach {
                    let right = if col + 1 == self.cols { 0 } else { col + 1 };
                    visit(self.to_idx(row, col), self.to_idx(row, right));
                }
            }
        }
        if self.rows > 1 {
            let reach = if self.rows == 2 { 1 } else { self.rows };
            for row in 0..reach {
                let down = if row + 1 == self.rows { 0 } else { row + 1 };
                for col in 0..self.cols {
                    visit(self.to_idx(row, col), self.to_idx(down, col));
                }
            }
        }
    }

    /// All coupled pairs, each unordered pair listed once.
    pub fn all_neighbors(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(2 * self.size());
        self.for_each_bond(|i, j| pairs.push((i, j)));
        pairs
    }

    /// Total coupling energy `-J * sum s_i s_j` over coupled pairs, J = 1.
    pub fn energy(&self, conf: &[i8]) -> Result<f64, SimError> {
        if conf.len() != self.size() {
            return Err(SimError::DimensionMismatch {
                expected: self.size(),
                actual: conf.len(),
            });
        }
        let mut total = 0i64;
        self.for_each_bond(|i, j| total += (conf[i] * conf[j]) as i64);
        Ok(-(total as f64))
    }

    /// Total magnetization `sum s_i`.
    pub fn magnetization(&self, conf: &[i8]) -> Result<f64, SimError> {
        if conf.len() != self.size() {
            return Err(SimError::DimensionMismatch {
                expected: self.size(),
                actual: conf.len(),
            });
        }
        let sum: i64 = conf.iter().map(|&s| s as i64).sum();
        Ok(sum as f64)
    }
}
