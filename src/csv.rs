use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Inventory;
use crate::model::{Command, Ingredient, Money, Recipe, RecipeError, SlotId};

/// Errors that can occur when parsing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open command file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation '{op}'")]
    UnrecognizedOp { line: usize, op: String },

    #[error("line {line}: {op} missing {field}")]
    MissingField {
        line: usize,
        op: String,
        field: &'static str,
    },

    #[error("line {line}: invalid recipe: {source}")]
    Recipe { line: usize, source: RecipeError },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    op: String,
    slot: Option<SlotId>,
    name: Option<String>,
    coffee: Option<String>,
    milk: Option<String>,
    sugar: Option<String>,
    chocolate: Option<String>,
    price: Option<String>,
    paid: Option<Money>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    ingredient: &'static str,
    units: i64,
}

impl InputRow {
    fn into_command(self, line: usize) -> Result<Command, CsvError> {
        match self.op.as_str() {
            "add" => Ok(Command::AddRecipe(self.recipe(line)?)),
            "edit" => Ok(Command::EditRecipe {
                slot: self.required(line, "slot", self.slot)?,
                recipe: self.recipe(line)?,
            }),
            "delete" => Ok(Command::DeleteRecipe {
                slot: self.required(line, "slot", self.slot)?,
            }),
            "restock" => Ok(Command::Restock {
                coffee: self.text(line, "coffee", &self.coffee)?.to_string(),
                milk: self.text(line, "milk", &self.milk)?.to_string(),
                sugar: self.text(line, "sugar", &self.sugar)?.to_string(),
                chocolate: self.text(line, "chocolate", &self.chocolate)?.to_string(),
            }),
            "purchase" => Ok(Command::Purchase {
                slot: self.required(line, "slot", self.slot)?,
                paid: self.required(line, "paid", self.paid)?,
            }),
            other => Err(CsvError::UnrecognizedOp {
                line,
                op: other.to_string(),
            }),
        }
    }

    fn recipe(&self, line: usize) -> Result<Recipe, CsvError> {
        Recipe::from_text(
            self.text(line, "name", &self.name)?,
            self.text(line, "chocolate", &self.chocolate)?,
            self.text(line, "coffee", &self.coffee)?,
            self.text(line, "milk", &self.milk)?,
            self.text(line, "sugar", &self.sugar)?,
            self.text(line, "price", &self.price)?,
        )
        .map_err(|source| CsvError::Recipe { line, source })
    }

    fn required<T>(
        &self,
        line: usize,
        field: &'static str,
        value: Option<T>,
    ) -> Result<T, CsvError> {
        value.ok_or_else(|| CsvError::MissingField {
            line,
            op: self.op.clone(),
            field,
        })
    }

    fn text<'a>(
        &self,
        line: usize,
        field: &'static str,
        value: &'a Option<String>,
    ) -> Result<&'a str, CsvError> {
        self.required(line, field, value.as_deref())
    }
}

/// Read machine commands from a csv file
///
/// Expected header: `op,slot,name,coffee,milk,sugar,chocolate,price,paid`.
pub fn read_commands(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Command, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            row.into_command(line)
        }))
}

/// Write the inventory to stdout in csv format
pub fn write_inventory(inventory: &Inventory) -> Result<(), csv::Error> {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for ingredient in Ingredient::ALL {
        writer.serialize(OutputRow {
            ingredient: ingredient.label(),
            units: inventory.get(ingredient),
        })?;
    }

    writer.flush()?;
    Ok(())
}
