//! Macros for defining units and conversions.

/// Builds a [`UnitDef`](crate::UnitDef) from a mixed list of factors, at compile time when used in a constant.
///
/// Each argument is one of:
///
/// - `ratio(n, d)` or `ratio(n)`: an exact factor multiplied into the scale;
/// - `base(i)`: the base unit with index `i`, exponent one;
/// - `pow(U, n, d)` or `pow(U, n)`: the unit type `U` raised to `n/d`;
/// - `U`: any unit type, contributing its scale and powers.
///
/// Argument order does not matter. An empty list is the dimensionless unit.
///
/// ```rust
/// use qunit_core::length::{Foot, Meter};
/// use qunit_core::time::Second;
/// use qunit_core::{make_unit, Rational, Unit, UnitDef};
///
/// const FOOT_PER_SQUARE_SECOND: UnitDef = make_unit![ratio(3048, 10000), Meter, pow(Second, -2)];
/// assert_eq!(FOOT_PER_SQUARE_SECOND, make_unit![pow(Second, -2), Foot]);
/// assert_eq!(FOOT_PER_SQUARE_SECOND.scale(), Rational::new(381, 1250));
/// assert_eq!(make_unit![Meter, Second, Meter], make_unit![Meter, Meter, Second]);
/// assert_eq!(make_unit![], UnitDef::DIMENSIONLESS);
/// ```
///
/// A fractional power of a compound unit is rejected while the constant is evaluated:
///
/// ```rust,compile_fail
/// use qunit_core::derived::Newton;
/// use qunit_core::{make_unit, UnitDef};
///
/// const ROOT_NEWTON: UnitDef = make_unit![pow(Newton, 1, 2)];
/// ```
#[macro_export]
macro_rules! make_unit {
    ($($factors:tt)*) => {
        $crate::make_unit(&$crate::__unit_factors!([] $($factors)*))
    };
}

/// Same as [`make_unit!`] but returns `Result<UnitDef, UnitError>` instead of panicking.
#[macro_export]
macro_rules! try_make_unit {
    ($($factors:tt)*) => {
        $crate::try_make_unit(&$crate::__unit_factors!([] $($factors)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit_factors {
    ([$($out:expr,)*]) => {
        [$($out),*]
    };
    ([$($out:expr,)*] ratio($n:expr, $d:expr) $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!(
            [$($out,)* $crate::Factor::Ratio($crate::Rational::new($n, $d)),] $($($rest)*)?
        )
    };
    ([$($out:expr,)*] ratio($n:expr) $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!(
            [$($out,)* $crate::Factor::Ratio($crate::Rational::integer($n)),] $($($rest)*)?
        )
    };
    ([$($out:expr,)*] base($index:expr) $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!([$($out,)* $crate::Factor::Base($index),] $($($rest)*)?)
    };
    ([$($out:expr,)*] pow($u:ty, $n:expr, $d:expr) $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!(
            [$($out,)* $crate::Factor::Pow(<$u as $crate::Unit>::DEF, $crate::Rational::new($n, $d)),]
            $($($rest)*)?
        )
    };
    ([$($out:expr,)*] pow($u:ty, $n:expr) $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!(
            [$($out,)* $crate::Factor::Pow(<$u as $crate::Unit>::DEF, $crate::Rational::integer($n)),]
            $($($rest)*)?
        )
    };
    ([$($out:expr,)*] $u:ty $(, $($rest:tt)*)?) => {
        $crate::__unit_factors!([$($out,)* $crate::Factor::Unit(<$u as $crate::Unit>::DEF),] $($($rest)*)?)
    };
}

/// Generates `From` trait implementations for all pairs of units within a family.
///
/// Every conversion goes through [`Quantity::to`](crate::Quantity::to), so the pairs must be compatible; for integer
/// value types only integral factors build.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<V: $crate::Scalar> From<$crate::Quantity<$first, V>> for $crate::Quantity<$rest, V> {
                fn from(value: $crate::Quantity<$first, V>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<V: $crate::Scalar> From<$crate::Quantity<$rest, V>> for $crate::Quantity<$first, V> {
                fn from(value: $crate::Quantity<$rest, V>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Emits a catalog module's `register` function, adding each listed unit to a symbol registry builder.
macro_rules! register_units {
    ($($unit:ty),+ $(,)?) => {
        /// Adds every named unit of this module to `builder`.
        #[cfg(feature = "std")]
        pub(crate) fn register(builder: &mut $crate::registry::SymbolRegistryBuilder) {
            $(builder.register::<$unit>();)+
        }
    };
}

pub(crate) use register_units;
