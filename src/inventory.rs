//! Ingredient stock ledger.

use std::fmt;

use crate::model::{Ingredient, Recipe};
use crate::quantity::{InvalidQuantity, Units, parse_units};

/// Units of every ingredient a freshly built machine holds.
pub const DEFAULT_STOCK: Units = 15;

/// Stock counters for the four ingredients.
///
/// Counters are signed: [`Inventory::set`] may store any value, including a
/// negative one. Purchases never drive a counter below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    stock: [i64; Ingredient::COUNT],
}

impl Inventory {
    /// Inventory holding [`DEFAULT_STOCK`] of every ingredient.
    pub fn new() -> Self {
        Self::with_stock(DEFAULT_STOCK)
    }

    /// Inventory holding `units` of every ingredient.
    pub fn with_stock(units: Units) -> Self {
        Self {
            stock: [i64::from(units); Ingredient::COUNT],
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> i64 {
        self.stock[ingredient as usize]
    }

    /// Force a counter to `units` without validation.
    pub fn set(&mut self, ingredient: Ingredient, units: i64) {
        self.stock[ingredient as usize] = units;
    }

    /// Add textual amounts to the stock.
    ///
    /// Fields are checked coffee, milk, sugar, chocolate; the first invalid one
    /// is returned and no counter changes.
    pub fn restock(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InvalidQuantity> {
        let amounts = [
            parse_units(Ingredient::Coffee, coffee)?,
            parse_units(Ingredient::Milk, milk)?,
            parse_units(Ingredient::Sugar, sugar)?,
            parse_units(Ingredient::Chocolate, chocolate)?,
        ];
        for (ingredient, units) in Ingredient::ALL.into_iter().zip(amounts) {
            self.stock[ingredient as usize] += i64::from(units);
        }
        Ok(())
    }

    /// Whether every ingredient `recipe` needs is covered by current stock.
    pub fn has_sufficient_stock(&self, recipe: &Recipe) -> bool {
        Ingredient::ALL
            .into_iter()
            .all(|ingredient| i64::from(recipe.amount(ingredient)) <= self.get(ingredient))
    }

    /// Remove the ingredients of `recipe` from stock.
    ///
    /// No bounds check: callers confirm [`has_sufficient_stock`](Self::has_sufficient_stock) first.
    pub(crate) fn deduct(&mut self, recipe: &Recipe) {
        for ingredient in Ingredient::ALL {
            self.stock[ingredient as usize] -= i64::from(recipe.amount(ingredient));
        }
    }

    /// Four-line stock report, e.g. `"Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n"`.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in Ingredient::ALL {
            writeln!(f, "{}: {}", ingredient.label(), self.get(ingredient))?;
        }
        Ok(())
    }
}
