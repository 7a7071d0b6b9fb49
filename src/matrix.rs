use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{One, Zero};

use crate::error::{BinaryOp, DimensionError, Error, IndexError, Result};

/// Dense row-major matrix backed by a single `Vec<T>`.
///
/// Every live instance has `rows > 0`, `cols > 0` and a buffer of exactly
/// `rows * cols` elements. Operations are value-semantic: arithmetic
/// allocates a fresh result and never mutates its operands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix<T>")
)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::from_values(raw.rows, raw.cols, raw.data)
    }
}

impl<T> Matrix<T> {
    /// Validate the dimensions and return the element count.
    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 {
            return Err(DimensionError::ZeroRows.into());
        }
        if cols == 0 {
            return Err(DimensionError::ZeroColumns.into());
        }
        rows.checked_mul(cols).ok_or(Error::SizeOverflow)
    }

    /// Adopt `values` as the row-major buffer of a `rows x cols` matrix.
    pub fn from_values(rows: usize, cols: usize, values: Vec<T>) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        if values.len() != len {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self {
            data: values,
            rows,
            cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(IndexError::Row.into());
        }
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Matrix of the given shape with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, value);
        Ok(Self { data, rows, cols })
    }

    /// Bounds-checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows {
            return Err(IndexError::Row.into());
        }
        if col >= self.cols {
            return Err(IndexError::Column.into());
        }
        Ok(self.data[self.offset(row, col)].clone())
    }

    /// Row-major copy of the full buffer.
    pub fn to_values(&self) -> Vec<T> {
        self.data.clone()
    }

    /// New `cols x rows` matrix with `out[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[self.offset(row, col)].clone());
            }
        }
        Ok(Self {
            data,
            rows: self.cols,
            cols: self.rows,
        })
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    /// `n x n` matrix with ones on the diagonal, zeros elsewhere.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(DimensionError::ZeroOrder.into());
        }
        let mut m = Self::filled(n, n, T::zero())?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Add<Output = T>,
{
    /// Fresh matrix with `f` added to every element.
    ///
    /// The formula is applied uniformly; `f == 0.0` gets no shortcut so the
    /// result is always bit-identical to the elementwise sum.
    pub fn add_scalar(&self, f: T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend(self.data.iter().map(|&x| x + f));
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Elementwise sum. Shapes must match exactly.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch(BinaryOp::Add));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b),
        );
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Sub<Output = T>,
{
    /// Elementwise difference (`self - other`). Shapes must match exactly.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch(BinaryOp::Sub));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b),
        );
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Fresh matrix with every element multiplied by `f`.
    ///
    /// Multiplying by zero yields the zero matrix, as the formula demands.
    pub fn mul_scalar(&self, f: T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend(self.data.iter().map(|&x| x * f));
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// Standard matrix product; requires `self.cols == other.rows`.
    ///
    /// Accumulation runs over ascending `k` with no reordering, so results
    /// are reproducible across runs for identical inputs.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch(BinaryOp::Mul));
        }
        log::trace!(
            "matrix product: {}x{} * {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let len = self
            .rows
            .checked_mul(other.cols)
            .ok_or(Error::SizeOverflow)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.data[self.offset(i, k)] * other.data[other.offset(k, j)];
                }
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "  [")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[row * self.cols + col])?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}
