use super::cell_value::CellValue;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    /// The view reads column 0 as X and column 1 as Y
    #[error("A dataset needs at least 2 columns, got {0}")]
    TooFewColumns(usize),

    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// An immutable table of named columns sharing an implicit 0-based row index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, DatasetError> {
        if columns.len() < 2 {
            return Err(DatasetError::TooFewColumns(columns.len()));
        }
        let row_count = columns[0].values.len();
        if let Some(column) = columns.iter().find(|c| c.values.len() != row_count) {
            return Err(DatasetError::RaggedColumn {
                column: column.name.clone(),
                expected: row_count,
                actual: column.values.len(),
            });
        }
        Ok(Self { columns, row_count })
    }

    /// Build a dataset from a header row and row-major cells.
    ///
    /// Header names are normalised with [`normalize_column_names`]. Short rows
    /// are padded with empty cells, extra cells are dropped.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, DatasetError> {
        let names = normalize_column_names(header);
        let width = names.len();
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut().take(width) {
                column.values.push(cells.next().unwrap_or(CellValue::Empty));
            }
        }

        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Column 0, used as the X axis.
    pub fn x_column(&self) -> &Column {
        &self.columns[0]
    }

    /// Column 1, used as the Y axis and as the histogram subject.
    pub fn y_column(&self) -> &Column {
        &self.columns[1]
    }

    /// One JSON object per row, mapping column name to cell value.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        (0..self.row_count)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| {
                        let value = serde_json::to_value(&column.values[row])
                            .unwrap_or(Value::Null);
                        (column.name.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Name blank headers `Unnamed: <index>` and suffix duplicates with `.1`, `.2`...
///
/// A suffixed name that collides again is suffixed in turn, so `a, a.1, a`
/// becomes `a, a.1, a.1.1`.
pub fn normalize_column_names(header: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header.len());

    for (index, raw) in header.into_iter().enumerate() {
        let mut name = if raw.trim().is_empty() {
            format!("Unnamed: {}", index)
        } else {
            raw
        };

        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{}.{}", name, count);
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }

    names
}
