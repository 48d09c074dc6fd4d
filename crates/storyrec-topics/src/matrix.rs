//! Small row-major dense matrix used by the vectorizer and topic model.

/// Row-major `f32` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// Set the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Whether every entry is zero.
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    /// Scale each row so it sums to 1.0. Rows whose sum is not positive
    /// become uniform.
    pub fn normalize_rows(&mut self) {
        for row in 0..self.rows {
            let start = row * self.cols;
            let sum: f32 = self.data[start..start + self.cols].iter().sum();
            if sum > 0.0 {
                for value in &mut self.data[start..start + self.cols] {
                    *value /= sum;
                }
            } else {
                let uniform = 1.0 / self.cols as f32;
                for value in &mut self.data[start..start + self.cols] {
                    *value = uniform;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_and_get_set() {
        let mut m = Matrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.is_all_zero());

        m.set(1, 2, 4.5);
        assert_eq!(m.get(1, 2), 4.5);
        assert!(!m.is_all_zero());
    }

    #[test]
    fn test_row_slice() {
        let mut m = Matrix::zeros(2, 2);
        m.set(1, 0, 1.0);
        m.set(1, 1, 2.0);
        assert_eq!(m.row(0), &[0.0, 0.0]);
        assert_eq!(m.row(1), &[1.0, 2.0]);
    }

    #[test]
    fn test_normalize_rows() {
        let mut m = Matrix::zeros(2, 2);
        m.set(0, 0, 1.0);
        m.set(0, 1, 3.0);
        m.normalize_rows();

        assert!((m.get(0, 0) - 0.25).abs() < f32::EPSILON);
        assert!((m.get(0, 1) - 0.75).abs() < f32::EPSILON);
        // Zero row becomes uniform
        assert!((m.get(1, 0) - 0.5).abs() < f32::EPSILON);
        assert!((m.get(1, 1) - 0.5).abs() < f32::EPSILON);
    }
}
