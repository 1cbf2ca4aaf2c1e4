//! Strongly typed physical quantities with exact unit conversions.
//!
//! `qunit` is the user-facing crate in this workspace. It re-exports the full API from `qunit-core` plus the
//! predefined unit catalog (lengths, times, masses, angles and the SI derived units).
//!
//! The core idea is: a value is always a `Quantity<U, V>`, where `U` is a zero-sized type describing the unit and `V`
//! the number type (`f64` unless stated). The unit's definition, an exact ratio times a product of base-unit powers,
//! is a constant evaluated by the compiler, so all unit checking happens at compile time and the runtime cost of a
//! quantity is that of a bare `V`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), with exact rational factors.
//! - Derives new units from old ones by algebra: `Prod<Newton, Meter>` is the joule, `Per<Meter, Second>` a speed.
//!
//! # What this crate does not try to solve
//!
//! - Affine units (degrees Celsius, gauge pressure).
//! - Parsing units from strings at runtime.
//! - Trigonometric or other transcendental functions of quantities.
//!
//! # Quick start
//!
//! Convert between units of one dimension:
//!
//! ```rust
//! use qunit::{Feet, Meter};
//!
//! let height = Feet::new(6.0);
//! let m = height.to::<Meter>();
//! assert!((m.value() - 1.8288).abs() < 1e-12);
//! ```
//!
//! Compose derived units (velocity = length / time) and let the registry name them:
//!
//! ```rust
//! use qunit::{Kilometer, Kilometers, Meters, Newtons, Second, Seconds};
//! use qunit::velocity::Velocity;
//!
//! let d = Kilometers::new(1_000.0);
//! let t = Seconds::new(100.0);
//! let v: Velocity<Kilometer, Second> = d / t;
//! assert!((v.value() - 10.0).abs() < 1e-12);
//!
//! let work = Newtons::new(3.0) * Meters::new(2.0);
//! assert_eq!(work.to_string(), "6 J");
//! ```
//!
//! Literal shorthands build quantities from plain numbers:
//!
//! ```rust
//! use qunit::{Meters, M, SEC};
//!
//! let d: Meters = 3.0 * M;
//! let v = d / (2.0 * SEC);
//! assert_eq!(v.value(), 1.5);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qunit::{Meters, Seconds};
//!
//! let d = Meters::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `qunit::base` (base indices; ampere, kelvin, mole, candela, steradian)
//! - `qunit::length` (metres with every SI prefix, imperial lengths)
//! - `qunit::time` (seconds with every SI prefix, minutes, hours, days, years)
//! - `qunit::mass` (kilogram, grams with every SI prefix, avoirdupois units)
//! - `qunit::angular` (radians, degrees, arc units, wrapping helpers)
//! - `qunit::derived` (hertz, newton, pascal, joule, watt, … katal)
//! - `qunit::velocity` (`Length / Time` aliases)
//!
//! # Defining your own units
//!
//! Outside `qunit-core`, point the derive at this crate with `path = qunit`:
//!
//! ```rust
//! use qunit::{make_unit, Meter, Quantity, Unit};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Unit)]
//! #[unit(symbol = "smoot", def = make_unit![ratio(17_018, 10_000), Meter], path = qunit)]
//! pub struct Smoot;
//!
//! let bridge = Quantity::<Smoot>::new(364.4);
//! assert!((bridge.to::<Meter>().value() - 620.136).abs() < 1e-3);
//! assert_eq!(bridge.to_string(), "364.4 smoot");
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qunit-core`, including the symbol registry.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qunit = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Invalid unit definitions (a zero denominator, an overflowing scale, a fractional power of a compound unit) fail
//! while the compiler evaluates the unit's constant. The `try_*` / `checked_*` functions report the same conditions
//! as [`UnitError`] at run time. Quantity arithmetic follows the value type: floats propagate NaN and infinities,
//! integer conversions panic on overflow.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qunit_core::*;

/// Derive macro for unit marker types.
///
/// By default the expansion refers to `crate::Unit`, which only resolves inside `qunit-core`. Other crates add
/// `path = qunit` to the `#[unit(...)]` attribute.
pub use qunit_derive::Unit;

pub use qunit_core::units::angular::*;
pub use qunit_core::units::base::*;
pub use qunit_core::units::derived::*;
pub use qunit_core::units::length::*;
pub use qunit_core::units::mass::*;
pub use qunit_core::units::time::*;
pub use qunit_core::units::velocity::*;
