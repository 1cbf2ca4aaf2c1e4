//! Symbol registry: names for canonical units.
//!
//! Composite unit types (`Prod<Newton, Meter>`, `Per<Meter, Second>`) have no symbol of their own. When a quantity
//! of such a type is displayed, its canonical [`UnitDef`] is looked up here: a unit registered under a name prints
//! with that name (`N·m` prints as `J`), anything else is composed from the symbols of its base units (`m·s^-2`).
//!
//! The catalog registry is built once, on first use, and never changes afterwards.
//!
//! ```rust
//! use qunit_core::derived::{Joule, Newton};
//! use qunit_core::length::Meter;
//! use qunit_core::{registry, Prod, Unit};
//!
//! let symbols = registry::global();
//! assert_eq!(symbols.lookup(&Joule::DEF), Some("J"));
//! assert_eq!(symbols.symbol_of::<Prod<Newton, Meter>>(), "J");
//! ```

use crate::unit::{Unit, UnitDef, UNKNOWN_SYMBOL};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Immutable map from canonical units (and base indices) to symbols.
#[derive(Debug, Default, Clone)]
pub struct SymbolRegistry {
    bases: HashMap<u32, &'static str>,
    units: HashMap<UnitDef, &'static str>,
}

impl SymbolRegistry {
    /// Starts an empty registry.
    pub fn builder() -> SymbolRegistryBuilder {
        SymbolRegistryBuilder::default()
    }

    /// Symbol registered for exactly this unit (scale included).
    pub fn lookup(&self, def: &UnitDef) -> Option<&'static str> {
        self.units.get(def).copied()
    }

    /// Symbol of the base unit with this index.
    pub fn base_symbol(&self, index: u32) -> Option<&'static str> {
        self.bases.get(&index).copied()
    }

    /// Writes the registered symbol of `def`, or composes one from base symbols.
    pub fn write_def<W: fmt::Write>(&self, def: &UnitDef, out: &mut W) -> fmt::Result {
        match self.lookup(def) {
            Some(symbol) => out.write_str(symbol),
            None => def.write_with(out, |index| self.base_symbol(index)),
        }
    }

    /// `Display` adapter over [`write_def`](Self::write_def).
    pub fn display<'a>(&'a self, def: &'a UnitDef) -> DisplayDef<'a> {
        DisplayDef { registry: self, def }
    }

    /// Owned form of [`write_def`](Self::write_def).
    pub fn render(&self, def: &UnitDef) -> String {
        self.display(def).to_string()
    }

    /// Display symbol of a unit type: its own [`Unit::SYMBOL`] when it has one, else [`render`](Self::render).
    pub fn symbol_of<U: Unit>(&self) -> String {
        if U::SYMBOL != UNKNOWN_SYMBOL {
            U::SYMBOL.to_owned()
        } else {
            self.render(&U::DEF)
        }
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` if no unit is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Unit symbol as resolved by a [`SymbolRegistry`]; see [`SymbolRegistry::display`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayDef<'a> {
    registry: &'a SymbolRegistry,
    def: &'a UnitDef,
}

impl fmt::Display for DisplayDef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.registry.write_def(self.def, f)
    }
}

/// Collects symbols before freezing them into a [`SymbolRegistry`].
#[derive(Debug, Default)]
pub struct SymbolRegistryBuilder {
    inner: SymbolRegistry,
}

impl SymbolRegistryBuilder {
    /// Registers a unit type under its [`Unit::SYMBOL`]. Unnamed units are skipped.
    pub fn register<U: Unit>(&mut self) -> &mut Self {
        if U::SYMBOL != UNKNOWN_SYMBOL {
            self.register_def(U::DEF, U::SYMBOL);
        }
        self
    }

    /// Registers `symbol` for `def`. The first symbol registered for a unit wins.
    ///
    /// Base units also name their base index, so composites can be rendered from them.
    pub fn register_def(&mut self, def: UnitDef, symbol: &'static str) -> &mut Self {
        if def.is_trivial() {
            return self;
        }
        if def.is_base() {
            let index = def.powers()[0].base();
            self.inner.bases.entry(index).or_insert(symbol);
        }
        match self.inner.units.get(&def) {
            Some(existing) => {
                log::trace!("unit {def} already registered as `{existing}`, keeping it over `{symbol}`");
            }
            None => {
                self.inner.units.insert(def, symbol);
            }
        }
        self
    }

    /// Freezes the registry.
    pub fn build(&mut self) -> SymbolRegistry {
        let registry = std::mem::take(&mut self.inner);
        log::debug!(
            "symbol registry built with {} units over {} bases",
            registry.units.len(),
            registry.bases.len()
        );
        registry
    }
}

static GLOBAL: Lazy<SymbolRegistry> = Lazy::new(|| {
    let mut builder = SymbolRegistry::builder();
    crate::units::register_catalog(&mut builder);
    builder.build()
});

/// The registry of every unit in the built-in catalog.
pub fn global() -> &'static SymbolRegistry {
    &GLOBAL
}
