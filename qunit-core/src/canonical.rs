//! Canonical form of a unit: merged, pruned and sorted powers.
//!
//! Two units that mean the same thing must be *represented* the same way so that compatibility and identity can be
//! decided by plain structural comparison. [`canonicalize`] is the only way a [`UnitDef`] is produced:
//!
//! 1. entries sharing a base are multiplied together (exponents add);
//! 2. entries whose exponent became zero are dropped;
//! 3. the survivors are sorted by ascending base index.
//!
//! Everything here is `const fn`, so a unit's canonical form is computed once, at compile time.

use crate::error::{const_try, UnitError};
use crate::power::Power;
use crate::ratio::Rational;
use crate::unit::{UnitDef, MAX_BASES};

/// Capacity of the scratch buffer used while a unit is being assembled.
pub(crate) const RAW_CAPACITY: usize = 64;

/// Builds the canonical unit `scale · Π powers`.
///
/// The input may list the same base several times, in any order, with zero exponents. The output is the same for any
/// permutation of `powers`, and canonicalizing the powers of a canonical unit gives that unit back.
///
/// # Errors
///
/// [`UnitError::TooManyBases`] when more than [`MAX_BASES`] distinct bases survive pruning (or more than the scratch
/// capacity before merging), and [`UnitError::Ratio`] if adding exponents overflows.
///
/// ```rust
/// use qunit_core::{canonicalize, Power, Rational};
///
/// let one = Rational::ONE;
/// let unit = canonicalize(
///     Rational::new(1, 2),
///     &[Power::new(3, one), Power::new(0, one), Power::new(3, Rational::integer(-1))],
/// )
/// .unwrap();
/// assert_eq!(unit.powers(), &[Power::new(0, one)]);
/// assert_eq!(unit.scale(), Rational::new(1, 2));
/// ```
pub const fn canonicalize(scale: Rational, powers: &[Power]) -> Result<UnitDef, UnitError> {
    let mut merged = [Power::EMPTY; RAW_CAPACITY];
    let mut merged_len = 0;

    let mut i = 0;
    while i < powers.len() {
        let power = powers[i];
        let mut j = 0;
        let mut found = false;
        while j < merged_len {
            if merged[j].base() == power.base() {
                merged[j] = const_try!(merged[j].checked_mul(power));
                found = true;
                break;
            }
            j += 1;
        }
        if !found {
            if merged_len == RAW_CAPACITY {
                return Err(UnitError::TooManyBases);
            }
            merged[merged_len] = power;
            merged_len += 1;
        }
        i += 1;
    }

    // Prune and insertion-sort in one pass.
    let mut sorted = [Power::EMPTY; MAX_BASES];
    let mut len = 0;
    let mut i = 0;
    while i < merged_len {
        let power = merged[i];
        if !power.exponent().is_zero() {
            if len == MAX_BASES {
                return Err(UnitError::TooManyBases);
            }
            let mut k = len;
            while k > 0 && sorted[k - 1].base() > power.base() {
                sorted[k] = sorted[k - 1];
                k -= 1;
            }
            sorted[k] = power;
            len += 1;
        }
        i += 1;
    }

    Ok(UnitDef::from_parts(scale, sorted, len))
}

/// Growable-until-full list of raw powers, compacted by canonicalization when it runs out of room.
pub(crate) struct PowerBuffer {
    items: [Power; RAW_CAPACITY],
    len: usize,
}

impl PowerBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            items: [Power::EMPTY; RAW_CAPACITY],
            len: 0,
        }
    }

    pub(crate) const fn as_slice(&self) -> &[Power] {
        self.items.as_slice().split_at(self.len).0
    }

    pub(crate) const fn push(&mut self, power: Power) -> Result<(), UnitError> {
        if self.len == RAW_CAPACITY {
            const_try!(self.compact());
        }
        self.items[self.len] = power;
        self.len += 1;
        Ok(())
    }

    pub(crate) const fn extend(&mut self, powers: &[Power]) -> Result<(), UnitError> {
        let mut i = 0;
        while i < powers.len() {
            const_try!(self.push(powers[i]));
            i += 1;
        }
        Ok(())
    }

    pub(crate) const fn finish(&self, scale: Rational) -> Result<UnitDef, UnitError> {
        canonicalize(scale, self.as_slice())
    }

    const fn compact(&mut self) -> Result<(), UnitError> {
        let merged = const_try!(canonicalize(Rational::ONE, self.as_slice()));
        let powers = merged.powers();
        let mut i = 0;
        while i < powers.len() {
            self.items[i] = powers[i];
            i += 1;
        }
        self.len = powers.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(base: u32, num: i128, den: i128) -> Power {
        Power::new(base, Rational::new(num, den))
    }

    #[test]
    fn merges_prunes_and_sorts() {
        let unit = canonicalize(
            Rational::ONE,
            &[p(2, 1, 1), p(0, 1, 1), p(1, -2, 1), p(0, 1, 1), p(2, -1, 1)],
        )
        .unwrap();
        assert_eq!(unit.powers(), &[p(0, 2, 1), p(1, -2, 1)]);
    }

    #[test]
    fn empty_input_is_dimensionless() {
        let unit = canonicalize(Rational::ONE, &[]).unwrap();
        assert_eq!(unit, UnitDef::DIMENSIONLESS);
        let cancelled = canonicalize(Rational::integer(3), &[p(5, 1, 2), p(5, -1, 2)]).unwrap();
        assert!(cancelled.is_dimensionless());
        assert_eq!(cancelled.scale(), Rational::integer(3));
    }

    #[test]
    fn fractional_exponents_merge_exactly() {
        let unit = canonicalize(Rational::ONE, &[p(4, 1, 3), p(4, 1, 6)]).unwrap();
        assert_eq!(unit.powers(), &[p(4, 1, 2)]);
    }

    #[test]
    fn too_many_bases() {
        let powers: Vec<Power> = (0..=MAX_BASES as u32).map(|b| p(b, 1, 1)).collect();
        assert_eq!(
            canonicalize(Rational::ONE, &powers),
            Err(UnitError::TooManyBases)
        );
        // Seventeen bases that mostly cancel are fine.
        let mut cancelling = powers.clone();
        cancelling.push(p(0, -1, 1));
        assert_eq!(canonicalize(Rational::ONE, &cancelling).unwrap().powers().len(), MAX_BASES);
    }

    #[test]
    fn buffer_compacts_when_full() {
        let mut buffer = PowerBuffer::new();
        for i in 0..200u32 {
            buffer.push(p(i % 3, 1, 1)).unwrap();
        }
        let unit = buffer.finish(Rational::ONE).unwrap();
        assert_eq!(unit.powers(), &[p(0, 67, 1), p(1, 67, 1), p(2, 66, 1)]);
    }

    fn power_strategy() -> impl Strategy<Value = Power> {
        (0u32..6, -4i128..=4, 1i128..=3).prop_map(|(b, n, d)| p(b, n, d))
    }

    proptest! {
        #[test]
        fn prop_idempotent(powers in prop::collection::vec(power_strategy(), 0..20)) {
            let once = canonicalize(Rational::new(3, 7), &powers).unwrap();
            let twice = canonicalize(once.scale(), once.powers()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_order_independent(
            powers in prop::collection::vec(power_strategy(), 0..20),
            rotation in 0usize..20,
        ) {
            let forward = canonicalize(Rational::ONE, &powers).unwrap();

            let mut reversed = powers.clone();
            reversed.reverse();
            prop_assert_eq!(forward, canonicalize(Rational::ONE, &reversed).unwrap());

            let mut rotated = powers.clone();
            if !rotated.is_empty() {
                let len = rotated.len();
                rotated.rotate_left(rotation % len);
            }
            prop_assert_eq!(forward, canonicalize(Rational::ONE, &rotated).unwrap());
        }

        #[test]
        fn prop_sorted_without_zero_exponents(powers in prop::collection::vec(power_strategy(), 0..20)) {
            let unit = canonicalize(Rational::ONE, &powers).unwrap();
            for pair in unit.powers().windows(2) {
                prop_assert!(pair[0].base() < pair[1].base());
            }
            prop_assert!(unit.powers().iter().all(|p| !p.exponent().is_zero()));
        }
    }
}
