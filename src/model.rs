//! Core domain types for the coffee maker.

use std::fmt;
use thiserror::Error;

use crate::quantity::{InvalidQuantity, QuantityKind, Units, parse_units};

/// Money amounts, in whole units.
pub type Money = Units;

/// Position of a recipe in the recipe book.
pub type SlotId = usize;

/// An ingredient tracked by the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    pub const COUNT: usize = 4;

    /// Every ingredient, in inventory report order.
    pub const ALL: [Ingredient; Self::COUNT] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    /// Capitalized label used in inventory reports.
    pub fn label(self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Milk => "Milk",
            Ingredient::Sugar => "Sugar",
            Ingredient::Chocolate => "Chocolate",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Chocolate => "chocolate",
        };
        f.write_str(name)
    }
}

/// Units of each ingredient needed for one beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ingredients {
    pub coffee: Units,
    pub milk: Units,
    pub sugar: Units,
    pub chocolate: Units,
}

impl Ingredients {
    pub const fn new(coffee: Units, milk: Units, sugar: Units, chocolate: Units) -> Self {
        Self {
            coffee,
            milk,
            sugar,
            chocolate,
        }
    }

    pub fn get(&self, ingredient: Ingredient) -> Units {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }
}

/// Error building a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    #[error("recipe name must not be empty")]
    EmptyName,

    #[error("{0}")]
    InvalidQuantity(#[from] InvalidQuantity),
}

/// A named beverage with its price and ingredient requirements.
///
/// A `Recipe` only exists once every field has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    price: Money,
    ingredients: Ingredients,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        price: Money,
        ingredients: Ingredients,
    ) -> Result<Self, RecipeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecipeError::EmptyName);
        }
        Ok(Self {
            name,
            price,
            ingredients,
        })
    }

    /// Build a recipe from raw text fields.
    ///
    /// Fields are validated in argument order; the first invalid one is reported.
    pub fn from_text(
        name: &str,
        chocolate: &str,
        coffee: &str,
        milk: &str,
        sugar: &str,
        price: &str,
    ) -> Result<Self, RecipeError> {
        if name.is_empty() {
            return Err(RecipeError::EmptyName);
        }
        let chocolate = parse_units(Ingredient::Chocolate, chocolate)?;
        let coffee = parse_units(Ingredient::Coffee, coffee)?;
        let milk = parse_units(Ingredient::Milk, milk)?;
        let sugar = parse_units(Ingredient::Sugar, sugar)?;
        let price = parse_units(QuantityKind::Price, price)?;
        Self::new(name, price, Ingredients::new(coffee, milk, sugar, chocolate))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn ingredients(&self) -> Ingredients {
        self.ingredients
    }

    pub fn amount(&self, ingredient: Ingredient) -> Units {
        self.ingredients.get(ingredient)
    }

    pub(crate) fn into_name(self) -> String {
        self.name
    }

    /// Take price and ingredients from `other`, keeping this recipe's name.
    pub(crate) fn update_from(&mut self, other: Recipe) {
        self.price = other.price;
        self.ingredients = other.ingredients;
    }
}

/// An operation requested from the machine by a caller.
#[derive(Debug, Clone)]
pub enum Command {
    /// Store a recipe in the first free slot.
    AddRecipe(Recipe),
    /// Replace price and ingredients of the recipe in `slot`.
    EditRecipe { slot: SlotId, recipe: Recipe },
    /// Free `slot`.
    DeleteRecipe { slot: SlotId },
    /// Add the given textual amounts to the inventory.
    Restock {
        coffee: String,
        milk: String,
        sugar: String,
        chocolate: String,
    },
    /// Buy the beverage in `slot`.
    Purchase { slot: SlotId, paid: Money },
}
