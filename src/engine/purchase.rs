//! Single beverage purchase.
//!
//! A purchase borrows the recipe book for reading and the inventory for
//! writing for the duration of one call. Stock is deducted only when the slot
//! holds a recipe, the payment covers its price and every ingredient is in
//! stock; any other outcome refunds the full payment.

use std::fmt;

use crate::book::RecipeBook;
use crate::inventory::Inventory;
use crate::model::{Money, SlotId};

/// Why a purchase did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptySlot,
    InsufficientFunds { price: Money },
    InsufficientStock,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptySlot => f.write_str("no recipe in slot"),
            RejectReason::InsufficientFunds { price } => {
                write!(f, "insufficient funds, price is {price}")
            }
            RejectReason::InsufficientStock => f.write_str("insufficient stock"),
        }
    }
}

/// Result of one purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    Sold { recipe: String, change: Money },
    Rejected { reason: RejectReason, change: Money },
}

impl Purchase {
    /// Amount handed back to the payer.
    pub fn change(&self) -> Money {
        match self {
            Purchase::Sold { change, .. } | Purchase::Rejected { change, .. } => *change,
        }
    }

    pub fn is_sold(&self) -> bool {
        matches!(self, Purchase::Sold { .. })
    }
}

/// Buy the beverage in `slot` with `paid` units, returning the change.
pub fn purchase(book: &RecipeBook, inventory: &mut Inventory, slot: SlotId, paid: Money) -> Money {
    purchase_detailed(book, inventory, slot, paid).change()
}

/// Like [`purchase`], but reports whether the sale happened and why not.
pub fn purchase_detailed(
    book: &RecipeBook,
    inventory: &mut Inventory,
    slot: SlotId,
    paid: Money,
) -> Purchase {
    let Some(recipe) = book.get(slot) else {
        return Purchase::Rejected {
            reason: RejectReason::EmptySlot,
            change: paid,
        };
    };

    if paid < recipe.price() {
        return Purchase::Rejected {
            reason: RejectReason::InsufficientFunds {
                price: recipe.price(),
            },
            change: paid,
        };
    }

    if !inventory.has_sufficient_stock(recipe) {
        return Purchase::Rejected {
            reason: RejectReason::InsufficientStock,
            change: paid,
        };
    }

    inventory.deduct(recipe);

    Purchase::Sold {
        recipe: recipe.name().to_string(),
        change: paid - recipe.price(),
    }
}
