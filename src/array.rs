use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::error::{IndexError, Result};

/// Flat contiguous numeric buffer.
///
/// Unlike [`Matrix`](crate::Matrix), the scalar operations here mutate the
/// buffer in place. An empty array is valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatArray<T> {
    data: Vec<T>,
}

impl<T> FlatArray<T> {
    /// Adopt `values` as the backing buffer.
    pub fn from_values(values: Vec<T>) -> Self {
        Self { data: values }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Bounds-checked write.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.data.len() {
            return Err(IndexError::Element.into());
        }
        self.data[index] = value;
        Ok(())
    }
}

impl<T> FlatArray<T>
where
    T: Clone,
{
    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(IndexError::Element.into());
        }
        Ok(self.data[index].clone())
    }

    /// Copy of the full buffer.
    pub fn to_values(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> FlatArray<T>
where
    T: Clone + Zero,
{
    /// Zero-filled array of the given length. `len == 0` is valid.
    pub fn zeros(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, T::zero());
        Ok(Self { data })
    }
}

impl<T> FlatArray<T>
where
    T: Copy + Add<Output = T>,
{
    /// Add `f` to every element, in place.
    pub fn add_scalar_inplace(&mut self, f: T) {
        for x in self.data.iter_mut() {
            *x = *x + f;
        }
    }
}

impl<T> FlatArray<T>
where
    T: Copy + Mul<Output = T>,
{
    /// Multiply every element by `f`, in place.
    pub fn mul_scalar_inplace(&mut self, f: T) {
        for x in self.data.iter_mut() {
            *x = *x * f;
        }
    }
}

impl<T> From<Vec<T>> for FlatArray<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_values(value)
    }
}

impl<T> From<FlatArray<T>> for Vec<T> {
    fn from(value: FlatArray<T>) -> Self {
        value.data
    }
}

impl<T> Index<usize> for FlatArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for FlatArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for FlatArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
