//! Coffee maker engine.
//!
//! The engine owns the recipe book and the inventory and exposes the
//! operations a front end needs: recipe management, restocking, inventory
//! reports and purchases. Also supports an async stream of commands.

use std::fmt::Display;

use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::book::{DEFAULT_CAPACITY, RecipeBook};
use crate::inventory::{DEFAULT_STOCK, Inventory};
use crate::model::{Command, Money, Recipe, SlotId};
use crate::quantity::{InvalidQuantity, Units};

mod error;
pub use error::MachineError;

mod purchase;
pub use purchase::{Purchase, RejectReason, purchase, purchase_detailed};

/// Construction parameters of a [`CoffeeMaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Number of recipe slots.
    pub capacity: usize,
    /// Starting units of every ingredient.
    pub initial_stock: Units,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial_stock: DEFAULT_STOCK,
        }
    }
}

/// A beverage dispenser: one recipe book and one inventory.
#[derive(Debug, Clone)]
pub struct CoffeeMaker {
    book: RecipeBook,
    inventory: Inventory,
}

/// Public API
impl CoffeeMaker {
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            book: RecipeBook::new(config.capacity),
            inventory: Inventory::with_stock(config.initial_stock),
        }
    }

    /// Store `recipe` in the first free slot. `false` if full or the name is taken.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.book.add(recipe)
    }

    /// Free `slot`, returning the removed recipe's name.
    pub fn delete_recipe(&mut self, slot: SlotId) -> Option<String> {
        self.book.delete(slot)
    }

    /// Update the recipe in `slot`, keeping its name, which is returned.
    pub fn edit_recipe(&mut self, slot: SlotId, recipe: Recipe) -> Option<String> {
        self.book.edit(slot, recipe)
    }

    /// Every slot of the recipe book, `None` where empty.
    pub fn recipes(&self) -> Vec<Option<&Recipe>> {
        self.book.list()
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    /// Restock from textual amounts; nothing changes if any of them is invalid.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InvalidQuantity> {
        self.inventory.restock(coffee, milk, sugar, chocolate)
    }

    /// The inventory report, one `"<Ingredient>: <units>"` line per ingredient.
    pub fn check_inventory(&self) -> String {
        self.inventory.report()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Direct access to the stock counters, for reset and diagnostic tooling.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Buy the beverage in `slot`, returning the change.
    ///
    /// Any rejected purchase returns the full payment.
    pub fn make_coffee(&mut self, slot: SlotId, paid: Money) -> Money {
        purchase(&self.book, &mut self.inventory, slot, paid)
    }

    /// Run the engine with the given command stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Command> + Unpin) {
        while let Some(command) = stream.next().await {
            // a failed command must not stop the machine
            let _ = self.apply(command);
        }
    }

    /// Apply a single command on top of the current machine state
    pub fn apply(&mut self, command: Command) -> Result<(), MachineError> {
        match command {
            Command::AddRecipe(recipe) => {
                let name = recipe.name().to_string();
                let result = if self.add_recipe(recipe) {
                    Ok(())
                } else {
                    Err(MachineError::RecipeNotAdded(name.clone()))
                };
                Self::log_result("add", &name, &result);
                result
            }
            Command::EditRecipe { slot, recipe } => {
                let result = self
                    .edit_recipe(slot, recipe)
                    .map(drop)
                    .ok_or(MachineError::SlotEmpty(slot));
                Self::log_result("edit", &slot, &result);
                result
            }
            Command::DeleteRecipe { slot } => {
                let result = self
                    .delete_recipe(slot)
                    .map(drop)
                    .ok_or(MachineError::SlotEmpty(slot));
                Self::log_result("delete", &slot, &result);
                result
            }
            Command::Restock {
                coffee,
                milk,
                sugar,
                chocolate,
            } => {
                let result = self
                    .add_inventory(&coffee, &milk, &sugar, &chocolate)
                    .map_err(MachineError::from);
                Self::log_result("restock", &"inventory", &result);
                result
            }
            Command::Purchase { slot, paid } => self.apply_purchase(slot, paid),
        }
    }
}

/// Private API
impl CoffeeMaker {
    /// Small helper to log `apply` results
    fn log_result(op: &str, subject: &dyn Display, result: &Result<(), MachineError>) {
        match result {
            Ok(()) => info!(subject = %subject, "{op} applied"),
            Err(e) => info!(subject = %subject, reason = %e, "{op} skipped"),
        }
    }

    fn apply_purchase(&mut self, slot: SlotId, paid: Money) -> Result<(), MachineError> {
        match purchase_detailed(&self.book, &mut self.inventory, slot, paid) {
            Purchase::Sold { recipe, change } => {
                info!(slot, paid, change, recipe = %recipe, "purchase applied");
                Ok(())
            }
            Purchase::Rejected { reason, change } => {
                info!(slot, paid, change, reason = %reason, "purchase skipped");
                Err(MachineError::PurchaseRejected {
                    slot,
                    reason,
                    change,
                })
            }
        }
    }
}

impl Default for CoffeeMaker {
    fn default() -> Self {
        Self::new()
    }
}
