use crate::Error;
use core::fmt::{self, Display, Formatter};

/// A single bit value.
///
/// Operations that store a bit take `impl Into<Bit>`, so a plain `bool` works
/// too. Integers go through [`TryFrom<u8>`], which rejects anything but 0 and
/// 1.
///
/// # Examples
/// ```
/// use bounded_bitvec::{Bit, Error};
///
/// assert_eq!(Bit::try_from(1u8), Ok(Bit::One));
/// assert_eq!(Bit::from(false), Bit::Zero);
/// assert!(matches!(Bit::try_from(2u8), Err(Error::InvalidArgument(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Bit {
    /// Unset.
    #[default]
    Zero = 0,
    /// Set.
    One = 1,
}

impl Bit {
    /// Returns `true` for [`Bit::One`].
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(Error::InvalidArgument("bit value must be 0 or 1")),
        }
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
