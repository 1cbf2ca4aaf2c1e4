//! Predefined unit modules grouped by dimension.
//!
//! `qunit-core` ships its catalog of named units so that conversions and formatting work out of the box without
//! downstream crates having to fight Rust’s orphan rules. Every unit is declared with the same construction primitives
//! available to users: [`base_unit`](crate::base_unit) and [`make_unit!`](crate::make_unit!).
//!
//! ## Modules
//!
//! - [`base`]: base-unit indices, plus the base units without a module of their own (ampere, kelvin, …).
//! - [`length`]: metre (base), prefix ladder and imperial lengths.
//! - [`time`]: second (base), prefix ladder, minute, hour, day and year.
//! - [`mass`]: kilogram (base), gram ladder, tonne and avoirdupois units.
//! - [`angular`]: radian (base), π-based angles and wrapping helpers.
//! - [`derived`]: the SI derived units with special names (hertz … katal) and common multiples.
//! - [`velocity`]: velocity aliases (`Length / Time`) and the knot.

pub mod angular;
pub mod base;
pub mod derived;
pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;

/// Registers every catalog unit with `builder`.
///
/// Modules holding base units go first so that each base index is named by its base unit. Within a module, the first
/// unit registered for a definition keeps the symbol.
#[cfg(feature = "std")]
pub fn register_catalog(builder: &mut crate::registry::SymbolRegistryBuilder) {
    length::register(builder);
    time::register(builder);
    mass::register(builder);
    base::register(builder);
    angular::register(builder);
    derived::register(builder);
    velocity::register(builder);
}
