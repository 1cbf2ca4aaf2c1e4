//! Mass units.
//!
//! The base unit of this dimension is [`Kilogram`] (base index [`MASS`](crate::base::MASS)), as in the SI. The gram
//! and its prefix ladder are defined from it, so `Gram::DEF` carries the scale `1/1000`.
//!
//! - **SI grams**: full prefix ladder (yocto … yotta), with the kilogram in its place.
//! - **Defined non-SI**: tonne, carat, grain and the avoirdupois units, all exact.
//!
//! ```rust
//! use qunit_core::mass::{Gram, Kilograms, Pound};
//!
//! let m = Kilograms::new(2.5);
//! assert_eq!(m.to::<Gram>().value(), 2500.0);
//! assert!(m.to::<Pound>().value() > 5.5);
//! ```

use crate::base::MASS;
use crate::macros::register_units;
use crate::prefixes;
use crate::{make_unit, Quantity, Unit};

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", base = MASS)]
pub struct Kilogram;
/// Shorthand type alias for [`Kilogram`].
pub type Kg = Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kg>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Gram: `1 g = 1/1000 kg`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", def = make_unit![ratio(1, 1000), Kilogram])]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Helper macro to declare a gram-based SI mass unit.
///
/// Each invocation of this macro defines, for a given prefix on grams:
/// - a unit struct `$name` (e.g. `Milligram`),
/// - a shorthand type alias `$alias` (e.g. `Mg`),
/// - a quantity type `$qty` (e.g. `Milligrams`), and
/// - a constant `$one` equal to `1.0` of that quantity.
///
/// `$prefix` is the exact factor relative to the gram, taken from [`prefixes`].
macro_rules! si_gram {
    ($name:ident, $sym:literal, $prefix:ident, $alias:ident, $qty:ident, $one:ident) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` with gram-based prefix (symbol `", $sym, "`).")]
        #[doc = concat!("By definition, `1 ", $sym, " = ", stringify!($prefix), " g`.")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, def = Gram::DEF.scaled(prefixes::$prefix))]
        pub struct $name;

        #[doc = concat!("Shorthand alias for [`", stringify!($name), "`].")]
        pub type $alias = $name;

        #[doc = concat!("Quantity measured in ", stringify!($name), " (", $sym, ").")]
        pub type $qty = Quantity<$alias>;

        #[doc = concat!("Constant equal to one ", stringify!($name), " (1 ", $sym, ").")]
        pub const $one: $qty = $qty::new(1.0);
    };
}

si_gram!(Yoctogram, "yg", YOCTO, Yg, Yoctograms, YG);
si_gram!(Zeptogram, "zg", ZEPTO, Zg, Zeptograms, ZG);
si_gram!(Attogram, "ag", ATTO, Ag, Attograms, AG);
si_gram!(Femtogram, "fg", FEMTO, Fg, Femtograms, FG);
si_gram!(Picogram, "pg", PICO, Pg, Picograms, PG);
si_gram!(Nanogram, "ng", NANO, Ng, Nanograms, NG);
si_gram!(Microgram, "µg", MICRO, Ug, Micrograms, UG);
si_gram!(Milligram, "mg", MILLI, Mg, Milligrams, MG);
si_gram!(Centigram, "cg", CENTI, Cg, Centigrams, CG);
si_gram!(Decigram, "dg", DECI, Dg, Decigrams, DG);

si_gram!(Decagram, "dag", DECA, Dag, Decagrams, DAG);
si_gram!(Hectogram, "hg", HECTO, Hg, Hectograms, HG);
si_gram!(Megagram, "Mg", MEGA, MgG, Megagrams, MEGAGRAM);
si_gram!(Gigagram, "Gg", GIGA, Gg, Gigagrams, GG);
si_gram!(Teragram, "Tg", TERA, Tg, Teragrams, TG);
si_gram!(Petagram, "Pg", PETA, PgG, Petagrams, PETAGRAM);
si_gram!(Exagram, "Eg", EXA, Eg, Exagrams, EG);
si_gram!(Zettagram, "Zg", ZETTA, ZgG, Zettagrams, ZETTAGRAM);
si_gram!(Yottagram, "Yg", YOTTA, YgG, Yottagrams, YOTTAGRAM);

/// Tonne (metric ton): `1 t = 1000 kg` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", def = make_unit![ratio(1000), Kilogram])]
pub struct Tonne;
/// Quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;
/// One metric tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

/// Carat: `1 ct = 1/5 g` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ct", def = make_unit![ratio(1, 5), Gram])]
pub struct Carat;
/// Quantity measured in carats.
pub type Carats = Quantity<Carat>;
/// One carat.
pub const CT: Carats = Carats::new(1.0);

/// Grain: `1 gr = 64.79891 mg` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gr", def = make_unit![ratio(6_479_891, 100_000), Milligram])]
pub struct Grain;
/// Quantity measured in grains.
pub type Grains = Quantity<Grain>;
/// One grain.
pub const GR: Grains = Grains::new(1.0);

/// Avoirdupois pound: `1 lb = 0.45359237 kg` (exact), i.e. `7000 gr`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", def = make_unit![ratio(45_359_237, 100_000_000), Kilogram])]
pub struct Pound;
/// Shorthand type alias for [`Pound`].
pub type Lb = Pound;
/// Quantity measured in pounds.
pub type Pounds = Quantity<Lb>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

/// Avoirdupois ounce: `1 oz = 1/16 lb` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", def = make_unit![ratio(1, 16), Pound])]
pub struct Ounce;
/// Quantity measured in ounces.
pub type Ounces = Quantity<Ounce>;
/// One ounce.
pub const OZ: Ounces = Ounces::new(1.0);

/// Avoirdupois stone: `1 st = 14 lb` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "st", def = make_unit![ratio(14), Pound])]
pub struct Stone;
/// Quantity measured in stones.
pub type Stones = Quantity<Stone>;
/// One stone.
pub const ST: Stones = Stones::new(1.0);

/// Short ton (US customary): `2000 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ton_us", def = make_unit![ratio(2000), Pound])]
pub struct ShortTon;
/// Quantity measured in short tons (US).
pub type ShortTons = Quantity<ShortTon>;
/// One short ton (US).
pub const TON_US: ShortTons = ShortTons::new(1.0);

/// Long ton (Imperial): `2240 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ton_uk", def = make_unit![ratio(2240), Pound])]
pub struct LongTon;
/// Quantity measured in long tons (UK).
pub type LongTons = Quantity<LongTon>;
/// One long ton (UK).
pub const TON_UK: LongTons = LongTons::new(1.0);

// Generate all bidirectional From implementations between mass units
crate::impl_unit_conversions!(
    Kilogram, Gram, Yoctogram, Zeptogram, Attogram, Femtogram, Picogram, Nanogram, Microgram, Milligram, Centigram,
    Decigram, Decagram, Hectogram, Megagram, Gigagram, Teragram, Petagram, Exagram, Zettagram, Yottagram, Tonne, Carat,
    Grain, Pound, Ounce, Stone, ShortTon, LongTon
);

// Tonne before Megagram: both name `1000 kg`, the first registration keeps its symbol.
register_units!(
    Kilogram, Gram, Yoctogram, Zeptogram, Attogram, Femtogram, Picogram, Nanogram, Microgram, Milligram, Centigram,
    Decigram, Decagram, Hectogram, Tonne, Megagram, Gigagram, Teragram, Petagram, Exagram, Zettagram, Yottagram, Carat,
    Grain, Pound, Ounce, Stone, ShortTon, LongTon
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rational;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Definitions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gram_is_a_thousandth_of_the_base() {
        assert_eq!(Gram::DEF.scale(), Rational::new(1, 1000));
        assert!(Kilogram::DEF.is_base());
        assert_eq!(Megagram::DEF, Tonne::DEF);
    }

    #[test]
    fn pound_is_7000_grains() {
        assert_eq!(Pound::DEF.conversion_factor(&Grain::DEF), Rational::integer(7000));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gram_to_kilogram() {
        let g = Grams::new(1000.0);
        let kg = g.to::<Kilogram>();
        assert_abs_diff_eq!(kg.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kilogram_to_gram() {
        assert_eq!(KG.to::<Gram>().value(), 1000.0);
        assert_eq!(Quantity::<Kilogram, i32>::new(3).to::<Milligram>().value(), 3_000_000);
    }

    #[test]
    fn avoirdupois_ladder() {
        assert_eq!(ST.to::<Pound>().value(), 14.0);
        assert_eq!(LB.to::<Ounce>().value(), 16.0);
        assert_eq!(Quantity::<LongTon, u32>::new(1).to::<Pound>().value(), 2240);
        assert_relative_eq!(LB.to::<Kilogram>().value(), 0.45359237, max_relative = 1e-15);
    }

    #[test]
    fn carats_and_grains() {
        assert_eq!(Carats::new(5.0).to::<Gram>().value(), 1.0);
        assert_relative_eq!(GR.to::<Milligram>().value(), 64.79891, max_relative = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Micrograms::new(4.0).to_string(), "4 µg");
        assert_eq!(TONNE.to_string(), "1 t");
        assert_eq!(MEGAGRAM.to_string(), "1 Mg");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_g_kg(g in 1e-6..1e6f64) {
            let original = Grams::new(g);
            let back = original.to::<Kilogram>().to::<Gram>();
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * g.abs().max(1.0));
        }

        #[test]
        fn prop_integer_kilograms_to_grams(kg in -1_000_000i64..1_000_000) {
            let grams = Quantity::<Kilogram, i64>::new(kg).to::<Gram>();
            prop_assert_eq!(grams.value(), kg * 1000);
        }
    }
}
