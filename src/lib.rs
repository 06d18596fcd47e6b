pub mod book;
pub mod csv;
pub mod engine;
pub mod inventory;
pub mod model;
pub mod quantity;

pub use book::{RecipeBook, Slot};
pub use engine::{CoffeeMaker, MachineConfig};
pub use inventory::Inventory;
pub use model::{Command, Ingredient, Ingredients, Money, Recipe, RecipeError, SlotId};
pub use quantity::{InvalidQuantity, QuantityKind, Units};
