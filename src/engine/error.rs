//! Error types for command processing.

use thiserror::Error;

use super::RejectReason;
use crate::model::{Money, SlotId};
use crate::quantity::InvalidQuantity;

/// Top-level error returned by [`CoffeeMaker::apply`](super::CoffeeMaker::apply).
///
/// Only the command interface reports rejections as errors; the direct
/// methods on `CoffeeMaker` answer with `false`, `None` or a full refund.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("restock failed: {0}")]
    Restock(#[from] InvalidQuantity),

    #[error("recipe '{0}' not added: book is full or name is taken")]
    RecipeNotAdded(String),

    #[error("slot {0} is empty")]
    SlotEmpty(SlotId),

    #[error("purchase from slot {slot} rejected ({reason}), returned {change}")]
    PurchaseRejected {
        slot: SlotId,
        reason: RejectReason,
        change: Money,
    },
}
