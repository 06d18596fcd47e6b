//! Validation of textual unit amounts.
//!
//! Inventory restocks and recipe fields arrive as text. A valid quantity is a
//! base-10 integer without a fractional part and not below zero.

use std::fmt;
use thiserror::Error;

use crate::model::Ingredient;

/// Whole units of an ingredient or of money.
pub type Units = u32;

/// What a textual quantity was meant to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Ingredient(Ingredient),
    Price,
}

impl QuantityKind {
    /// Subject of the validation message, e.g. "Units of milk".
    fn subject(&self) -> String {
        match self {
            QuantityKind::Ingredient(ingredient) => format!("Units of {ingredient}"),
            QuantityKind::Price => "Price".to_string(),
        }
    }
}

impl From<Ingredient> for QuantityKind {
    fn from(ingredient: Ingredient) -> Self {
        QuantityKind::Ingredient(ingredient)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKind::Ingredient(ingredient) => write!(f, "{ingredient}"),
            QuantityKind::Price => f.write_str("price"),
        }
    }
}

/// A textual quantity that is not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} must be a positive integer", .kind.subject())]
pub struct InvalidQuantity {
    pub kind: QuantityKind,
    pub raw: String,
}

/// Parse `text` as a whole, non-negative number of units.
///
/// Zero is accepted. Decimal, negative, non-numeric and out of range text is
/// rejected with an [`InvalidQuantity`] naming `kind`.
pub fn parse_units(kind: impl Into<QuantityKind>, text: &str) -> Result<Units, InvalidQuantity> {
    let kind = kind.into();
    text.parse::<i64>()
        .ok()
        .and_then(|value| Units::try_from(value).ok())
        .ok_or_else(|| InvalidQuantity {
            kind,
            raw: text.to_string(),
        })
}
