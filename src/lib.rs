#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

mod error;

pub use error::{Error, KeyNotFoundError, NullKeyError};

use core::{fmt, mem};
use core::iter::{FromIterator, FusedIterator};

use alloc::vec::Vec;

use log::trace;

/// Number of slots a freshly created [`AssociativeArray`] starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// A key/value pair living in one slot.
///
/// The key never changes once stored; the value is overwritten in place when
/// the same key is set again.
#[derive(Debug, Clone)]
struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    #[inline(always)]
    const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// An associative array backed by a buffer of optional pairs.
///
/// Every slot of the buffer exists up front (empty or occupied), so the
/// buffer length is the capacity. Pairs occupy the contiguous range
/// `[0, size)`; lookups scan that range from the left and compare keys with
/// [`Eq`]. When a new pair would not fit, the buffer doubles.
pub struct AssociativeArray<K, V> {
    slots: Vec<Option<Pair<K, V>>>, // len() == capacity
    size: usize,
}

impl<K, V> AssociativeArray<K, V> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with exactly `n` slots.
    ///
    /// A zero-slot array is fine: the first insertion grows it to
    /// [`DEFAULT_CAPACITY`].
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        let mut slots = Vec::with_capacity(n);
        slots.resize_with(n, || None);
        Self { slots, size: 0 }
    }

    /// Returns the number of pairs in the array.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the array holds no pairs.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots, occupied or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Doubles the number of slots.
    ///
    /// Occupied slots keep their indices and the new tail slots are empty.
    /// `set` calls this on its own whenever the array is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
    ///
    /// let mut arr = AssociativeArray::<u32, u32>::new();
    /// arr.expand();
    /// assert_eq!(arr.capacity(), DEFAULT_CAPACITY * 2);
    /// assert!(arr.is_empty());
    /// ```
    pub fn expand(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = match old_capacity {
            0 => DEFAULT_CAPACITY,
            n => n * 2,
        };

        let old_slots = mem::take(&mut self.slots);
        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(old_slots);
        slots.resize_with(new_capacity, || None);
        self.slots = slots;

        trace!("slot buffer grew from {old_capacity} to {new_capacity}");
    }

    /// Returns an iterator over the pairs in slot order.
    ///
    /// The iterator implements `ExactSizeIterator` and `FusedIterator`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots[..self.size].iter(),
            remaining: self.size,
        }
    }
}

impl<K, V> AssociativeArray<K, V>
where
    K: Eq,
{
    /// Sets the value for `key`, inserting a new pair if the key is new.
    ///
    /// An existing key keeps its slot and only its value changes. A new key
    /// lands in slot `size`. If the array is already full it doubles first,
    /// even when the key turns out to exist.
    ///
    /// Passing `None` as the key fails with [`NullKeyError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::{AssociativeArray, NullKeyError};
    ///
    /// let mut arr: AssociativeArray<&str, i32> = AssociativeArray::new();
    /// arr.set("a", 1).unwrap();
    /// arr.set("a", 2).unwrap();
    /// assert_eq!(arr.get(&"a"), Ok(&2));
    /// assert_eq!(arr.size(), 1);
    ///
    /// assert_eq!(arr.set(None, 3), Err(NullKeyError));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), NullKeyError> {
        let key = key.into().ok_or(NullKeyError)?;
        self.insert_pair(key, value);
        Ok(())
    }

    /// Returns the value stored for `key`.
    ///
    /// Fails with [`KeyNotFoundError`] when `key` is `None` or absent.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<&V, KeyNotFoundError>
    where
        K: 'q,
    {
        key.into()
            .and_then(|key| self.pair(key))
            .map(|pair| &pair.value)
            .ok_or(KeyNotFoundError)
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut<'q>(&mut self, key: impl Into<Option<&'q K>>) -> Result<&mut V, KeyNotFoundError>
    where
        K: 'q,
    {
        let key = key.into().ok_or(KeyNotFoundError)?;
        self.pair_mut(key)
            .map(|pair| &mut pair.value)
            .ok_or(KeyNotFoundError)
    }

    /// Returns `true` if a pair with `key` exists. `None` is never present.
    #[inline]
    pub fn has_key<'q>(&self, key: impl Into<Option<&'q K>>) -> bool
    where
        K: 'q,
    {
        key.into().is_some_and(|key| self.find(key).is_some())
    }

    /// Removes the pair stored for `key`.
    ///
    /// Every later pair moves one slot to the left, so the remaining pairs
    /// keep their order and no gap is left behind. Removing `None` or a key
    /// that is not present does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssociativeArray;
    ///
    /// let mut arr: AssociativeArray<char, u8> = "abc".chars().zip(1..).collect();
    /// arr.remove(&'b');
    /// assert_eq!(arr.to_string(), "{ a: 1, c: 3 }");
    ///
    /// arr.remove(&'z');
    /// assert_eq!(arr.size(), 2);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove<'q>(&mut self, key: impl Into<Option<&'q K>>)
    where
        K: 'q,
    {
        let Some(idx) = key.into().and_then(|key| self.find(key)) else {
            return
        };

        // drop the pair, then rotate the emptied slot to the end of the range
        self.slots[idx] = None;
        self.slots[idx..self.size].rotate_left(1);
        self.size -= 1;

        trace!("removed pair at slot {idx}, {} pairs left", self.size);
    }

    /// Index of the first occupied slot in `[0, size)` whose key equals `key`.
    #[inline]
    fn find(&self, key: &K) -> Option<usize> {
        self.slots[..self.size]
            .iter()
            .position(|slot| matches!(slot, Some(pair) if pair.key == *key))
    }

    #[inline]
    fn pair(&self, key: &K) -> Option<&Pair<K, V>> {
        self.find(key).and_then(|idx| self.slots[idx].as_ref())
    }

    #[inline]
    fn pair_mut(&mut self, key: &K) -> Option<&mut Pair<K, V>> {
        self.find(key).and_then(move |idx| self.slots[idx].as_mut())
    }

    fn insert_pair(&mut self, key: K, value: V) {
        if self.size >= self.slots.len() {
            self.expand()
        }

        if let Some(pair) = self.pair_mut(&key) {
            pair.value = value;
            return
        }

        self.slots[self.size] = Some(Pair::new(key, value));
        self.size += 1;
    }
}

/// Borrowing iterator over the pairs of an `AssociativeArray`, in slot order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Option<Pair<K, V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[cfg_attr(feature = "inline-more", inline)]
    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.slots.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some((&pair.key, &pair.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a AssociativeArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AssociativeArray<K, V>
where
    K: Eq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut arr = AssociativeArray::new();
        arr.extend(iter);
        arr
    }
}

impl<K, V> Extend<(K, V)> for AssociativeArray<K, V>
where
    K: Eq,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(k, v)| self.insert_pair(k, v));
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the pair structure of `[0, size)` into a fresh buffer sized to
/// `size`. Keys and values are duplicated with their own `Clone`, so `Rc`
/// and friends end up shared between the two arrays.
impl<K, V> Clone for AssociativeArray<K, V>
where
    K: Clone,
    V: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots[..self.size].to_vec(),
            size: self.size,
        }
    }
}

impl<K, V> PartialEq for AssociativeArray<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for AssociativeArray<K, V>
where
    K: Eq,
    V: Eq,
{
}

/// Renders `{}` when empty, otherwise `{ k1: v1, k2: v2 }` in slot order.
impl<K, V> fmt::Display for AssociativeArray<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}")
        }

        f.write_str("{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(" }")
    }
}

impl<K, V> fmt::Debug for AssociativeArray<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
