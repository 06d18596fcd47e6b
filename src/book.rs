//! Fixed-capacity recipe storage.
//!
//! The book holds a fixed number of slots. Indices are stable: deleting a
//! recipe frees its slot without shifting the others, and the next add fills
//! the lowest free slot.

use crate::model::{Recipe, SlotId};

/// Number of slots in a default recipe book.
pub const DEFAULT_CAPACITY: usize = 3;

/// A single position in the [`RecipeBook`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Recipe),
}

impl Slot {
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            Slot::Occupied(recipe) => Some(recipe),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Ordered, fixed-size collection of recipes with unique names.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    slots: Box<[Slot]>,
}

impl RecipeBook {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `recipe` in the first free slot.
    ///
    /// Returns `false` when the book is full or a stored recipe already has
    /// the same name (case-sensitive).
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(recipe.name()) {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_empty()) {
            Some(slot) => {
                *slot = Slot::Occupied(recipe);
                true
            }
            None => false,
        }
    }

    /// Free `slot`, returning the name of the recipe it held.
    pub fn delete(&mut self, slot: SlotId) -> Option<String> {
        let slot = self.slots.get_mut(slot)?;
        match std::mem::take(slot) {
            Slot::Occupied(recipe) => Some(recipe.into_name()),
            Slot::Empty => None,
        }
    }

    /// Overwrite price and ingredients of the recipe in `slot`.
    ///
    /// The stored name is kept whatever `recipe` is called, and returned.
    pub fn edit(&mut self, slot: SlotId, recipe: Recipe) -> Option<String> {
        match self.slots.get_mut(slot)? {
            Slot::Occupied(current) => {
                current.update_from(recipe);
                Some(current.name().to_string())
            }
            Slot::Empty => None,
        }
    }

    pub fn get(&self, slot: SlotId) -> Option<&Recipe> {
        self.slots.get(slot).and_then(Slot::recipe)
    }

    /// Snapshot of every slot in index order, `None` for empty ones.
    pub fn list(&self) -> Vec<Option<&Recipe>> {
        self.slots.iter().map(Slot::recipe).collect()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn contains(&self, name: &str) -> bool {
        self.slots
            .iter()
            .filter_map(Slot::recipe)
            .any(|recipe| recipe.name() == name)
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredients;

    fn recipe(name: &str, price: u32) -> Recipe {
        Recipe::new(name, price, Ingredients::new(3, 1, 1, 0)).unwrap()
    }

    fn names(book: &RecipeBook) -> Vec<Option<&str>> {
        book.list()
            .into_iter()
            .map(|slot| slot.map(Recipe::name))
            .collect()
    }

    #[test]
    fn new_book_is_empty() {
        let book = RecipeBook::default();
        assert_eq!(book.capacity(), DEFAULT_CAPACITY);
        assert_eq!(names(&book), [None, None, None]);
        assert!(book.slots().iter().all(Slot::is_empty));
    }

    #[test]
    fn add_fills_slots_in_order() {
        let mut book = RecipeBook::default();
        assert!(book.add(recipe("Coffee", 50)));
        assert!(book.add(recipe("Mocha", 75)));
        assert!(book.add(recipe("Latte", 100)));
        assert_eq!(names(&book), [Some("Coffee"), Some("Mocha"), Some("Latte")]);
    }

    #[test]
    fn add_fails_when_full() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.add(recipe("Mocha", 75));
        book.add(recipe("Latte", 100));

        assert!(!book.add(recipe("Hot Chocolate", 65)));
        assert_eq!(book.list().len(), 3);
    }

    #[test]
    fn add_rejects_duplicate_name() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));

        let copy = Recipe::new("Coffee", 10, Ingredients::new(1, 2, 2, 1)).unwrap();
        assert!(!book.add(copy));
        assert_eq!(names(&book), [Some("Coffee"), None, None]);
        assert_eq!(book.get(0).unwrap().price(), 50);
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        assert!(book.add(recipe("coffee", 50)));
    }

    #[test]
    fn delete_returns_name_and_frees_slot() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.add(recipe("Mocha", 75));
        book.add(recipe("Latte", 100));

        assert_eq!(book.delete(0), Some("Coffee".to_string()));
        assert_eq!(names(&book), [None, Some("Mocha"), Some("Latte")]);
    }

    #[test]
    fn delete_empty_slot_is_noop() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));

        assert_eq!(book.delete(1), None);
        assert_eq!(book.delete(0), Some("Coffee".to_string()));
        assert_eq!(book.delete(0), None);
        assert_eq!(book.delete(99), None);
    }

    #[test]
    fn freed_slot_is_reused_first() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.add(recipe("Mocha", 75));
        book.add(recipe("Latte", 100));
        book.delete(1);

        assert!(book.add(recipe("Hot Chocolate", 65)));
        assert_eq!(
            names(&book),
            [Some("Coffee"), Some("Hot Chocolate"), Some("Latte")]
        );
    }

    #[test]
    fn deleted_name_can_be_added_again() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.delete(0);
        assert!(book.add(recipe("Coffee", 60)));
    }

    #[test]
    fn edit_keeps_name_and_updates_fields() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.add(recipe("Mocha", 75));
        book.add(recipe("Latte", 100));

        let update = Recipe::new("New Latte", 500, Ingredients::new(30, 10, 10, 20)).unwrap();
        assert_eq!(book.edit(2, update), Some("Latte".to_string()));

        let edited = book.get(2).unwrap();
        assert_eq!(edited.name(), "Latte");
        assert_eq!(edited.price(), 500);
        assert_eq!(edited.ingredients(), Ingredients::new(30, 10, 10, 20));
    }

    #[test]
    fn edit_empty_slot_is_noop() {
        let mut book = RecipeBook::default();
        book.add(recipe("Coffee", 50));
        book.delete(0);

        assert_eq!(book.edit(0, recipe("Latte", 100)), None);
        assert_eq!(book.edit(7, recipe("Latte", 100)), None);
        assert_eq!(names(&book), [None, None, None]);
    }

    #[test]
    fn custom_capacity() {
        let mut book = RecipeBook::new(1);
        assert!(book.add(recipe("Coffee", 50)));
        assert!(!book.add(recipe("Mocha", 75)));
        assert_eq!(book.list().len(), 1);
    }
}
