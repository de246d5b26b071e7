// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

/// This struct wraps a [Vec] and uses unsafe methods to access its contents if `debug_assertions` is off.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct UVec<T>(Vec<T>);

impl<T> UVec<T> {
    /// See [Vec::new].
    #[inline]
    pub fn new() -> Self { Self(Vec::new()) }
    /// See [Vec::with_capacity].
    #[inline]
    pub fn with_capacity(size: usize) -> Self { Self(Vec::with_capacity(size)) }
    /// See [Vec::push].
    #[inline]
    pub fn push(&mut self, value: T) { self.0.push(value) }
    /// See [Vec::remove].
    #[inline]
    pub fn remove(&mut self, index: usize) -> T { self.0.remove(index) }
    /// See [slice::get].
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }
    /// See [Vec::clear].
    #[inline]
    pub fn clear(&mut self) { self.0.clear() }
    /// See [Vec::retain].
    #[inline]
    pub fn retain<F>(&mut self, f: F) where F: FnMut(&T) -> bool { self.0.retain(f) }
    /// See [Vec::len].
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }
    /// See [Vec::is_empty()].
    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    /// See [slice::iter].
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<T> { self.0.iter() }
    /// See [slice::iter_mut].
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<T> { self.0.iter_mut() }
    /// Unwrap the [UVec] and return a [Vec].
    #[inline]
    pub fn unwrap(self) -> Vec<T> { self.0 }
    /// Unwrap the [UVec] and borrow a [Vec].
    #[inline]
    pub fn unwrap_ref(&self) -> &Vec<T> { &self.0 }
    /// Return a [slice] of the underlying [Vec].
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }
}

impl<T> std::ops::Index<usize> for UVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        if cfg!(debug_assertions) {
            &self.0[index]
        } else {
            unsafe { self.0.get_unchecked(index) }
        }
    }
}

impl<T> std::ops::IndexMut<usize> for UVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if cfg!(debug_assertions) {
            &mut self.0[index]
        } else {
            unsafe { self.0.get_unchecked_mut(index) }
        }
    }
}

impl<T> Default for UVec<T> {
    fn default() -> Self { Self(Vec::default()) }
}

impl<T> IntoIterator for UVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'v, T> IntoIterator for &'v UVec<T> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T> FromIterator<T> for UVec<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self { Self(Vec::from_iter(iter)) }
}

impl<T> From<Vec<T>> for UVec<T> {
    fn from(inner: Vec<T>) -> Self { Self(inner) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for UVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for UVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.0 == other
    }
}

/// Same as [vec], but returns a UVec instead.
#[macro_export]
macro_rules! u_vec {
    ($elem:expr; $n:expr) => (UVec::from(vec![$elem; $n]));
    ($($x:expr),+ $(,)?) => (UVec::from(vec![$($x),+]));
}
