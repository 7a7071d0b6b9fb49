use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Zero-sized dimension passed to a constructor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("invalid number of rows")]
    ZeroRows,
    #[error("invalid number of columns")]
    ZeroColumns,
    #[error("invalid dimension")]
    ZeroOrder,
}

/// Out-of-range access, tagged with the axis that overran.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid row index")]
    Row,
    #[error("invalid column index")]
    Column,
    #[error("invalid index")]
    Element,
}

/// Binary operations whose operands must have compatible shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOp::Add => "sum",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "product",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    InvalidDimension(#[from] DimensionError),
    /// Flat data length does not match `rows * cols`.
    #[error("inconsistent shape and data size")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    #[error("{0}")]
    IndexOutOfRange(#[from] IndexError),
    #[error("inconsistent dimensions on {0}")]
    DimensionMismatch(BinaryOp),
    /// `rows * cols` does not fit in `usize`.
    #[error("matrix dimensions overflow")]
    SizeOverflow,
    #[error("insufficient memory")]
    OutOfMemory,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}
