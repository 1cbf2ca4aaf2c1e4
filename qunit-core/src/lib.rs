//! Core type system for compile-time checked physical quantities.
//!
//! `qunit-core` provides the unit algebra and the quantity type:
//!
//! - A *unit* is an exact rational scale factor times a canonical product of base-unit powers ([`UnitDef`]).
//! - A unit *type* is a zero-sized marker implementing [`Unit`]; its definition is a constant computed by the
//!   compiler, so `Prod<Newton, Meter>` and `Joule` are recognised as the same unit.
//! - A value tagged with a unit is a [`Quantity<U, V>`], backed by a single `V` (`f64` by default).
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`], with an exact conversion factor.
//!
//! Most users should depend on `qunit` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimension errors (length plus time does not build).
//! - Exact conversion factors: scales are ratios of 128-bit integers, never accumulated floats.
//! - Arbitrary derived units through `Prod`, `Per`, `Pow` and `Scaled`, including rational exponents of base units.
//! - Zero runtime overhead for unit tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Affine units (temperature offsets).
//! - Parsing unit strings at runtime.
//! - Trigonometric or transcendental functions of quantities.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use qunit_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert_eq!(m.value(), 1250.0);
//! ```
//!
//! Compose derived units with `*` and `/`:
//!
//! ```rust
//! use qunit_core::length::{Meter, Meters};
//! use qunit_core::time::{Second, Seconds};
//! use qunit_core::velocity::Velocity;
//!
//! let d = Meters::new(100.0);
//! let t = Seconds::new(20.0);
//! let v: Velocity<Meter, Second> = d / t;
//! assert_eq!(v.value(), 5.0);
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```rust,compile_fail
//! use qunit_core::length::Meters;
//! use qunit_core::time::Seconds;
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qunit-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qunit-core = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the symbol registry is unavailable (composite units print their base indices) and floating-point
//! math comes from `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables the [`registry`] and `std` float math.
//!
//! # Panics and errors
//!
//! The `checked_*` / `try_*` functions return [`RatioError`] or [`UnitError`]. Their infallible `const` twins panic
//! with the same message; inside a constant (every [`Unit::DEF`]) that panic is a compile error. Quantity arithmetic
//! follows the value type: floats propagate NaN and infinities, integer conversions panic on overflow.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod canonical;
mod error;
mod macros;
mod power;
mod quantity;
mod ratio;
mod scalar;
mod unit;

#[cfg(feature = "std")]
pub mod registry;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use canonical::canonicalize;
pub use error::{RatioError, UnitError};
pub use power::Power;
pub use quantity::Quantity;
pub use ratio::{gcd, gcd_all, prefixes, Rational};
pub use scalar::{Real, Scalar};
pub use unit::{
    base_unit, make_unit, prefix, try_make_unit, unit_from_powers, Cubed, Factor, Inverse, InverseSquared, Per,
    Pow, Prod, Scaled, Sqrt, Squared, Unit, UnitDef, Unitless, DIMENSIONLESS, MAX_BASES, UNKNOWN_SYMBOL,
};

/// Derive macro for unit marker types: `#[derive(Unit)] #[unit(symbol = "m", base = 0)]`.
pub use qunit_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qunit-core` so they can implement conversion traits without running into Rust's orphan
/// rules.
pub mod units;

pub use units::angular;
pub use units::base;
pub use units::derived;
pub use units::length;
pub use units::mass;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{Joule, Newton, Pascal};
    use crate::length::{Centimeter, Foot, Meter, Meters};
    use crate::time::Second;
    use approx::assert_abs_diff_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit algebra end to end
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_matches_make_unit() {
        assert_eq!(<Prod<Meter, Second>>::DEF, make_unit![Meter, Second]);
        assert_eq!(<Prod<Second, Meter>>::DEF, make_unit![Second, Meter]);
    }

    #[test]
    fn pow_matches_product() {
        assert_eq!(<Pow<Meter, 2>>::DEF, <Prod<Meter, Meter>>::DEF);
        assert_eq!(<Squared<Meter>>::DEF, make_unit![pow(Meter, 2)]);
    }

    #[test]
    fn force_per_area_is_pressure() {
        assert!(<Per<Newton, Squared<Meter>>>::DEF.is_compatible(&Pascal::DEF));
        assert!(!<Per<Newton, Meter>>::DEF.is_compatible(&Pascal::DEF));
        assert!(<Prod<Newton, Meter>>::DEF.is_identical(&Joule::DEF));
    }

    #[test]
    fn conversions() {
        assert_eq!(Meters::new(1.0).to::<Centimeter>().value(), 100.0);
        assert_abs_diff_eq!(Quantity::<Foot>::new(1.0).to::<Meter>().value(), 0.3048, epsilon = 1e-9);
    }

    #[test]
    fn try_make_unit_reports_errors() {
        assert_eq!(
            try_make_unit![pow(Newton, 1, 2)],
            Err(UnitError::FractionalPower)
        );
        assert!(try_make_unit![Meter, pow(Second, -1)].is_ok());
    }

    #[test]
    fn base_units_accept_rational_exponents() {
        let def = make_unit![pow(Meter, 3, 2), pow(Second, -1, 2)];
        assert_eq!(
            def.powers(),
            &[
                Power::new(0, Rational::new(3, 2)),
                Power::new(1, Rational::new(-1, 2))
            ]
        );
    }
}
