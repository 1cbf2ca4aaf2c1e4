//! Error types for the fallible (`checked_*` / `try_*`) side of the unit algebra.
//!
//! Every fallible operation also has an infallible `const` twin that panics with the same message. When that twin
//! runs inside a constant (a unit's [`DEF`](crate::Unit::DEF), for instance) the panic surfaces as a compile error.

/// Failure of an exact rational computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RatioError {
    /// A ratio was built (or inverted) with a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// An intermediate value left the `i128` range.
    #[error("rational arithmetic overflowed the 128-bit integer range")]
    Overflow,
}

impl RatioError {
    pub(crate) const fn panic(self) -> ! {
        match self {
            RatioError::ZeroDenominator => panic!("zero denominator"),
            RatioError::Overflow => {
                panic!("rational arithmetic overflowed the 128-bit integer range")
            }
        }
    }
}

/// Failure while combining powers or units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// The scale factor or an exponent could not be computed exactly.
    #[error(transparent)]
    Ratio(#[from] RatioError),

    /// Two powers over different bases were multiplied directly.
    #[error("cannot multiply powers of different bases ({left} and {right})")]
    BaseMismatch {
        /// Base index of the left operand.
        left: u32,
        /// Base index of the right operand.
        right: u32,
    },

    /// A compound unit was raised to a non-integral exponent.
    #[error("Fractional powers of units are not allowed")]
    FractionalPower,

    /// More distinct base units than a [`UnitDef`](crate::UnitDef) can hold.
    #[error("too many distinct base units in one unit (the limit is 16)")]
    TooManyBases,
}

impl UnitError {
    pub(crate) const fn panic(self) -> ! {
        match self {
            UnitError::Ratio(err) => err.panic(),
            UnitError::BaseMismatch { .. } => panic!("cannot multiply powers of different bases"),
            UnitError::FractionalPower => panic!("Fractional powers of units are not allowed"),
            UnitError::TooManyBases => {
                panic!("too many distinct base units in one unit (the limit is 16)")
            }
        }
    }
}

/// `?` for `const fn`: unwraps `Ok`, otherwise returns the (optionally wrapped) error.
macro_rules! const_try {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(err) => return Err(err),
        }
    };
    ($e:expr, $wrap:path) => {
        match $e {
            Ok(value) => value,
            Err(err) => return Err($wrap(err)),
        }
    };
}

pub(crate) use const_try;
