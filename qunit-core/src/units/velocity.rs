//! Velocity and acceleration aliases (`Length / Time`).
//!
//! Velocities are *pure type aliases* over [`Per`] using length and time units already defined elsewhere in the
//! crate: the unit algebra derives their definitions, so no separate table of velocity units is needed. The one
//! named unit is the [`Knot`], which has no exact spelling as a quotient of catalog units.
//!
//! ## Examples
//!
//! ```rust
//! use qunit_core::length::{Kilometer, Kilometers};
//! use qunit_core::time::{Second, Seconds};
//! use qunit_core::velocity::Velocity;
//!
//! let d = Kilometers::new(42.0);
//! let t = Seconds::new(2.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.value() - 21.0).abs() < 1e-12);
//! ```
//!
//! ```rust
//! use qunit_core::length::{Meter, Meters};
//! use qunit_core::time::{Hour, Hours};
//! use qunit_core::velocity::Velocity;
//!
//! let v: Velocity<Meter, Hour> = Meters::new(3_600.0) / Hours::new(1.0);
//! assert!((v.value() - 3_600.0).abs() < 1e-12);
//! ```

use crate::length::{Kilometer, Meter, Mile};
use crate::macros::register_units;
use crate::time::{Hour, Second};
use crate::{make_unit, Per, Quantity, Squared, Unit};

/// A velocity quantity parameterized by length and time units.
///
/// ```rust
/// use qunit_core::length::{Kilometer, Meter};
/// use qunit_core::time::{Hour, Second};
/// use qunit_core::velocity::Velocity;
///
/// let v1: Velocity<Meter, Second> = Velocity::new(10.0);
/// let v2: Velocity<Kilometer, Hour> = Velocity::new(36.0);
/// assert_eq!(v1, v2);
/// ```
pub type Velocity<N, D> = Quantity<Per<N, D>>;

/// An acceleration quantity: length per time squared.
pub type Acceleration<N, D> = Quantity<Per<N, Squared<D>>>;

/// Metres per second.
pub type MetersPerSecond = Velocity<Meter, Second>;
/// Kilometres per hour.
pub type KilometersPerHour = Velocity<Kilometer, Hour>;
/// Miles per hour.
pub type MilesPerHour = Velocity<Mile, Hour>;
/// Metres per second squared.
pub type MetersPerSecondSquared = Acceleration<Meter, Second>;

/// Knot: one nautical mile (`1852 m`) per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kn", def = make_unit![ratio(1852), Meter, pow(Hour, -1)])]
pub struct Knot;
/// A quantity measured in knots.
pub type Knots = Quantity<Knot>;
/// One knot.
pub const KN: Knots = Knots::new(1.0);

register_units!(Knot);
