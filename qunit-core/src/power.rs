//! A base unit raised to a rational exponent.

use crate::error::{const_try, UnitError};
use crate::ratio::Rational;
use core::fmt;

/// `base^exponent`, the building block of a unit's dimension.
///
/// A zero exponent is a valid `Power`; canonicalization removes it from units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Power {
    base: u32,
    exponent: Rational,
}

impl Power {
    /// Marker stored in the unused slots of a [`UnitDef`](crate::UnitDef).
    pub(crate) const EMPTY: Power = Power {
        base: u32::MAX,
        exponent: Rational::ZERO,
    };

    /// Creates `base^exponent`.
    pub const fn new(base: u32, exponent: Rational) -> Self {
        Self { base, exponent }
    }

    /// Index of the base unit.
    #[inline]
    pub const fn base(self) -> u32 {
        self.base
    }

    /// Exponent, always in lowest terms.
    #[inline]
    pub const fn exponent(self) -> Rational {
        self.exponent
    }

    /// `b^x · b^y = b^(x+y)`. Powers over different bases cannot be multiplied directly.
    pub const fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        if self.base != rhs.base {
            return Err(UnitError::BaseMismatch {
                left: self.base,
                right: rhs.base,
            });
        }
        let exponent = const_try!(self.exponent.checked_add(rhs.exponent), UnitError::Ratio);
        Ok(Self::new(self.base, exponent))
    }

    /// `(b^x)^y = b^(x·y)`.
    pub const fn checked_pow(self, exp: Rational) -> Result<Self, UnitError> {
        let exponent = const_try!(self.exponent.checked_mul(exp), UnitError::Ratio);
        Ok(Self::new(self.base, exponent))
    }

    /// Folds [`checked_mul`](Self::checked_mul) left to right over `first` and `rest`.
    pub const fn checked_product(first: Self, rest: &[Self]) -> Result<Self, UnitError> {
        let mut acc = first;
        let mut i = 0;
        while i < rest.len() {
            acc = const_try!(acc.checked_mul(rest[i]));
            i += 1;
        }
        Ok(acc)
    }

    /// Panicking form of [`checked_mul`](Self::checked_mul).
    pub const fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Ok(p) => p,
            Err(err) => err.panic(),
        }
    }

    /// Panicking form of [`checked_pow`](Self::checked_pow).
    pub const fn pow(self, exp: Rational) -> Self {
        match self.checked_pow(exp) {
            Ok(p) => p,
            Err(err) => err.panic(),
        }
    }

    /// Panicking form of [`checked_product`](Self::checked_product).
    pub const fn product(first: Self, rest: &[Self]) -> Self {
        match Self::checked_product(first, rest) {
            Ok(p) => p,
            Err(err) => err.panic(),
        }
    }

    /// Structural equality usable in const context.
    #[inline]
    pub const fn equals(self, other: Self) -> bool {
        self.base == other.base && self.exponent.equals(other.exponent)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}^{}", self.base, self.exponent)
    }
}
