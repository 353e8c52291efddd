//! Fixed-size owning storage for per-cell data.
//!
//! A [`FlatBuffer`] is allocated once at its final length and never grows
//! or shrinks. Grids keep two of them: cell values and the flattened
//! neighbour table.

use std::ops::{Index, IndexMut};

/// A contiguous, fixed-length buffer initialised with `T::default()`.
///
/// The backing allocation is released when the buffer is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatBuffer<T> {
    data: Box<[T]>,
}

impl<T: Default> FlatBuffer<T> {
    /// Allocate `len` default-initialised elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }
}

impl<T> FlatBuffer<T> {
    /// Take ownership of existing data.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared element access; `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Exclusive element access; `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// The whole buffer as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Size of the backing allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.data)
    }

    /// Give the storage back as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T> Index<usize> for FlatBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for FlatBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a FlatBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default_initialised() {
        let buf: FlatBuffer<i32> = FlatBuffer::new(6);
        assert_eq!(buf.len(), 6);
        assert!(buf.iter().all(|&v| v == 0));

        let strings: FlatBuffer<String> = FlatBuffer::new(2);
        assert!(strings.iter().all(String::is_empty));
    }

    #[test]
    fn zero_length_is_empty() {
        let buf: FlatBuffer<u8> = FlatBuffer::new(0);
        assert!(buf.is_empty());
        assert_eq!(buf.memory_bytes(), 0);
    }

    #[test]
    fn writes_are_visible_through_every_view() {
        let mut buf: FlatBuffer<u16> = FlatBuffer::new(4);
        buf[1] = 7;
        *buf.get_mut(3).unwrap() = 9;
        buf.as_mut_slice()[0] = 1;
        assert_eq!(buf.as_slice(), &[1, 7, 0, 9]);
        assert_eq!(buf.get(4), None);
        assert_eq!((&buf).into_iter().copied().sum::<u16>(), 17);
    }

    #[test]
    fn memory_bytes_accounts_for_element_size() {
        let buf: FlatBuffer<i32> = FlatBuffer::new(10);
        assert_eq!(buf.memory_bytes(), 40);
    }

    #[test]
    fn vec_round_trip_keeps_contents() {
        let buf = FlatBuffer::from_vec(vec![3, 1, 2]);
        assert_eq!(buf.into_vec(), vec![3, 1, 2]);
    }
}
