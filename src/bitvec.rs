use crate::{Bit, DestroyError, Error};
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use bounded_bitvec::byte_count;
///
/// assert_eq!(byte_count(9), 2);
/// assert_eq!(byte_count(16), 2);
/// assert_eq!(byte_count(17), 3);
/// ```
pub const fn byte_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Mask of the `width` lowest bits of a byte.
pub(crate) const fn low_mask(width: usize) -> u8 {
    if width >= 8 {
        // shift would overflow on u8
        !0u8
    } else {
        (1u8 << width) - 1
    }
}

/// A packed bit vector with a capacity fixed at creation and a length that
/// grows with [`append`] and shrinks with [`remove`], [`pop`] and [`clear`].
///
/// Internally stores bits in a `Vec<u8>` of [`byte_count(capacity)`] bytes;
/// bit `b` of byte `i` holds logical bit `i * 8 + b`. Bits at indices
/// `length..capacity` are stale and never observable.
///
/// A vector is meant to be released with [`destroy`], which refuses to
/// discard bits that are still live.
///
/// [`append`]: BitVector::append
/// [`remove`]: BitVector::remove
/// [`pop`]: BitVector::pop
/// [`clear`]: BitVector::clear
/// [`destroy`]: BitVector::destroy
/// [`byte_count(capacity)`]: byte_count
#[derive(Clone)]
pub struct BitVector {
    pub(crate) buffer: Vec<u8>,
    capacity: usize,
    length: usize,
}

impl BitVector {
    /// Creates an empty bit vector able to hold `capacity` bits.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `capacity == 0`.
    /// - [`Error::AllocationFailure`] if the buffer cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{BitVector, Error};
    ///
    /// let bv = BitVector::new(10).unwrap();
    /// assert_eq!(bv.capacity(), 10);
    /// assert_eq!(bv.len(), 0);
    ///
    /// assert!(matches!(BitVector::new(0), Err(Error::InvalidArgument(_))));
    /// ```
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            debug!("rejected zero capacity");
            return Err(Error::InvalidArgument("capacity must be greater than zero"));
        }

        let bytes = byte_count(capacity);
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(bytes).map_err(|_| {
            debug!(bytes, "failed to allocate buffer");
            Error::AllocationFailure { bytes }
        })?;
        buffer.resize(bytes, 0);

        trace!(capacity, bytes, "created bit vector");
        Ok(Self {
            buffer,
            capacity,
            length: 0,
        })
    }

    /// Releases the vector.
    ///
    /// # Errors
    /// Fails if the vector still holds bits. The returned [`DestroyError`]
    /// owns the vector, which stays fully usable after
    /// [`DestroyError::into_inner`].
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{BitVector, Error};
    ///
    /// let mut bv = BitVector::new(4).unwrap();
    /// bv.append(true).unwrap();
    ///
    /// let err = bv.destroy().unwrap_err();
    /// assert_eq!(err.error(), Error::ResourceBusy { length: 1 });
    ///
    /// let mut bv = err.into_inner();
    /// bv.clear();
    /// assert!(bv.destroy().is_ok());
    /// ```
    ///
    /// A destroyed vector is gone:
    /// ```compile_fail
    /// use bounded_bitvec::BitVector;
    ///
    /// let bv = BitVector::new(4).unwrap();
    /// bv.destroy().unwrap();
    /// bv.len();
    /// ```
    pub fn destroy(self) -> Result<(), DestroyError> {
        if self.length > 0 {
            debug!(length = self.length, "refusing to destroy non-empty bit vector");
            return Err(DestroyError::new(self));
        }
        trace!(capacity = self.capacity, "destroyed bit vector");
        Ok(())
    }

    /// Destroys the vector if there is one; `None` succeeds without doing
    /// anything, the way releasing a null handle is a no-op.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::BitVector;
    ///
    /// assert!(BitVector::destroy_opt(None).is_ok());
    /// assert!(BitVector::destroy_opt(BitVector::new(8).ok()).is_ok());
    /// ```
    pub fn destroy_opt(vector: Option<Self>) -> Result<(), DestroyError> {
        match vector {
            Some(vector) => vector.destroy(),
            None => Ok(()),
        }
    }

    /// Returns the number of valid bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns the maximum number of bits the vector can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the vector holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if the vector holds `capacity` bits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.length == self.capacity
    }

    /// Returns how many more bits can be appended.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.length
    }

    /// Returns the bit at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{Bit, BitVector};
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// bv.append(true).unwrap();
    /// bv.append(false).unwrap();
    /// assert_eq!(bv.get(0), Ok(Bit::One));
    /// assert_eq!(bv.get(1), Ok(Bit::Zero));
    /// assert!(bv.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<Bit, Error> {
        self.check_index(index, "get")?;
        Ok(Bit::from(self.read(index)))
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn is_set(&self, index: usize) -> Result<bool, Error> {
        self.get(index).map(Bit::is_set)
    }

    /// Overwrites the bit at `index`, leaving every other bit untouched.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{Bit, BitVector};
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// bv.append(false).unwrap();
    /// bv.set(0, true).unwrap();
    /// assert_eq!(bv.get(0), Ok(Bit::One));
    /// bv.set(0, Bit::Zero).unwrap();
    /// assert_eq!(bv.get(0), Ok(Bit::Zero));
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: impl Into<Bit>) -> Result<(), Error> {
        self.check_index(index, "set")?;
        self.write(index, value.into().is_set());
        Ok(())
    }

    /// Appends a bit after the last valid one.
    ///
    /// Either the length grows by one and the new last bit holds `value`, or
    /// the vector is left unchanged.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if the vector is full. The capacity never
    /// grows.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{BitVector, Error};
    ///
    /// let mut bv = BitVector::new(2).unwrap();
    /// bv.append(true).unwrap();
    /// bv.append(false).unwrap();
    /// assert_eq!(bv.append(true), Err(Error::CapacityExceeded { capacity: 2 }));
    /// assert_eq!(bv.len(), 2);
    /// ```
    pub fn append(&mut self, value: impl Into<Bit>) -> Result<(), Error> {
        if self.is_full() {
            debug!(capacity = self.capacity, "append to full bit vector");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.length += 1;
        if let Err(err) = self.set(self.length - 1, value) {
            self.length -= 1;
            return Err(err);
        }
        Ok(())
    }

    /// Removes the bit at `index`, shifting every later bit one position
    /// down.
    ///
    /// Runs in O(len - index): each trailing bit is moved individually.
    ///
    /// # Errors
    /// [`Error::OutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(4).unwrap();
    /// for bit in [true, false, true, true] {
    ///     bv.append(bit).unwrap();
    /// }
    /// bv.remove(1).unwrap();
    /// assert_eq!(bv.iter().collect::<Vec<_>>(), [true, true, true]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index, "remove")?;

        // ascending, so bit `i` is read before anything overwrites it
        for i in index + 1..self.length {
            let bit = self.read(i);
            self.write(i - 1, bit);
        }
        self.length -= 1;
        Ok(())
    }

    /// Removes the last bit and returns it, or `None` if the vector is empty.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::{Bit, BitVector};
    ///
    /// let mut bv = BitVector::new(4).unwrap();
    /// bv.append(true).unwrap();
    /// assert_eq!(bv.pop(), Some(Bit::One));
    /// assert_eq!(bv.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<Bit> {
        let last = self.length.checked_sub(1)?;
        let bit = Bit::from(self.read(last));
        self.length = last;
        Some(bit)
    }

    /// Drops every bit, keeping the capacity. The buffer is not zeroed; later
    /// appends overwrite it.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(4).unwrap();
    /// bv.append(true).unwrap();
    /// bv.clear();
    /// assert!(bv.is_empty());
    /// assert_eq!(bv.capacity(), 4);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.length = 0;
    }

    /// Returns the number of set bits among the valid ones.
    pub fn count_ones(&self) -> usize {
        let (full_bytes, rest) = Self::idxs(self.length);
        let mut ones: usize = self.buffer[..full_bytes]
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum();
        if rest != 0 {
            ones += (self.buffer[full_bytes] & low_mask(rest)).count_ones() as usize;
        }
        ones
    }

    /// Returns an iterator over the valid bits as `bool`, from index 0 up.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(16).unwrap();
    /// for bit in [true, false, true] {
    ///     bv.append(bit).unwrap();
    /// }
    /// let bits: Vec<bool> = bv.iter().collect();
    /// assert_eq!(bits, [true, false, true]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bytes: &self.buffer,
            byte_idx: 0,
            bit_idx: 0,
            remaining: self.length,
        }
    }

    /// Returns a [`Display`] rendering of the vector: its length, capacity
    /// and the valid bits as `0`/`1`.
    ///
    /// # Examples
    /// ```
    /// use bounded_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// for bit in [true, false, true] {
    ///     bv.append(bit).unwrap();
    /// }
    /// assert_eq!(
    ///     bv.display().to_string(),
    ///     "Bitvector length: 3, capacity: 8, bits:\n101"
    /// );
    /// ```
    pub fn display(&self) -> Dump<'_> {
        Dump(self)
    }

    /// Emits [`display`] as a `debug` event.
    ///
    /// [`display`]: BitVector::display
    pub fn dump(&self) {
        debug!("{}", self.display());
    }

    fn check_index(&self, index: usize, op: &'static str) -> Result<(), Error> {
        if index >= self.length {
            debug!(op, index, length = self.length, "index out of bounds");
            return Err(Error::OutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(())
    }

    #[inline]
    fn read(&self, index: usize) -> bool {
        let (byte_idx, bit_idx) = Self::idxs(index);
        self.buffer[byte_idx] & 1 << bit_idx != 0
    }

    #[inline]
    fn write(&mut self, index: usize, value: bool) {
        let (byte_idx, bit_idx) = Self::idxs(index);
        if value {
            self.buffer[byte_idx] |= 1 << bit_idx;
        } else {
            self.buffer[byte_idx] &= !(1 << bit_idx);
        }
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }
}

impl Drop for BitVector {
    fn drop(&mut self) {
        if self.length > 0 {
            warn!(
                length = self.length,
                capacity = self.capacity,
                "dropping bit vector that still holds bits"
            );
        }
    }
}

/// Two vectors are equal when they have the same capacity and the same valid
/// bits. Stale bits past the length are ignored.
impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity
            && self.length == other.length
            && self.iter().eq(other.iter())
    }
}

impl Eq for BitVector {}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.length.hash(state);
        for bit in self.iter() {
            bit.hash(state);
        }
    }
}

impl<'bitvec> IntoIterator for &'bitvec BitVector {
    type Item = bool;
    type IntoIter = Iter<'bitvec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector({}/{}) LSB -> ", self.length, self.capacity)?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % 8 == 7 && i + 1 < self.length {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")
    }
}

/// Diagnostic rendering of a [`BitVector`].
///
/// Returned by [`BitVector::display()`].
pub struct Dump<'bitvec>(&'bitvec BitVector);

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bitvector length: {}, capacity: {}, bits:",
            self.0.length, self.0.capacity
        )?;
        for bit in self.0 {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Iterator over the valid bits of a vector as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from index 0.
///
/// Returned by [`BitVector::iter()`].
#[derive(Clone)]
pub struct Iter<'bitvec> {
    bytes: &'bitvec [u8],
    byte_idx: usize,
    bit_idx: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.bytes[self.byte_idx] & 1 << self.bit_idx;
        self.remaining -= 1;
        self.bit_idx += 1;
        if self.bit_idx == 8 {
            self.bit_idx = 0;
            self.byte_idx += 1;
        }
        Some(bit != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
