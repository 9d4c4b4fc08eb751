use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CellRef, Scalar};

/// Index of a worksheet within its workbook.
pub type SheetId = usize;

/// A worksheet: a sparse grid of already-typed cell values.
///
/// Cells are stored post-interpretation: a `Scalar` goes in and the same
/// `Scalar` comes out. Type inference on raw user input (deciding whether
/// `"5"` was meant as text or number) belongs to the host application, not to
/// this model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub name: String,
    #[serde(with = "cells_as_pairs", default)]
    cells: HashMap<CellRef, Scalar>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    pub fn set_value(&mut self, addr: CellRef, value: impl Into<Scalar>) {
        self.cells.insert(addr, value.into());
    }

    /// Read a cell. Unset cells read as `0`, matching how blank cells
    /// participate in arithmetic.
    pub fn value(&self, addr: CellRef) -> Scalar {
        self.cells
            .get(&addr)
            .cloned()
            .unwrap_or(Scalar::Number(0.0))
    }
}

/// A workbook: an ordered collection of name-addressed worksheets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worksheet, or return the id of an existing one with this name.
    pub fn add_sheet(&mut self, name: &str) -> SheetId {
        if let Some(id) = self.sheet_id(name) {
            return id;
        }
        self.sheets.push(Worksheet::new(name));
        self.sheets.len() - 1
    }

    pub fn sheet_id(&self, name: &str) -> Option<SheetId> {
        self.sheets.iter().position(|sheet| sheet.name == name)
    }

    pub fn sheet(&self, id: SheetId) -> Option<&Worksheet> {
        self.sheets.get(id)
    }

    pub fn sheet_mut(&mut self, id: SheetId) -> Option<&mut Worksheet> {
        self.sheets.get_mut(id)
    }
}

/// Serialize the cell map as a sequence of `(address, value)` pairs.
///
/// JSON maps require string keys, so a `HashMap<CellRef, Scalar>` cannot be
/// serialized directly; the pair form also keeps output deterministic by
/// sorting on the address.
mod cells_as_pairs {
    use std::collections::HashMap;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{CellRef, Scalar};

    pub fn serialize<S>(cells: &HashMap<CellRef, Scalar>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut entries: Vec<(&CellRef, &Scalar)> = cells.iter().collect();
        entries.sort_by_key(|(addr, _)| **addr);
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for entry in entries {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<CellRef, Scalar>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(CellRef, Scalar)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
