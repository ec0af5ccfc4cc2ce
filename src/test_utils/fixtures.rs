use crate::datamodel::{CellValue, Column, Dataset, DatasetKey};
use crate::registry::DatasetRegistry;

fn strings(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|v| CellValue::String(v.to_string()))
        .collect()
}

fn floats(values: &[f64]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::Float(*v)).collect()
}

/// Monthly import volumes per product.
pub fn imports_dataset() -> Dataset {
    Dataset::new(vec![
        Column::new("Mes", strings(&["2023-01", "2023-02", "2023-03", "2023-04"])),
        Column::new("Gasolinas", floats(&[612.4, 598.1, 640.9, 655.3])),
        Column::new("Diesel", floats(&[240.2, 251.7, 238.8, 262.0])),
    ])
    .expect("valid imports fixture")
}

pub fn consumption_dataset() -> Dataset {
    Dataset::new(vec![
        Column::new("Año", vec![CellValue::Integer(2021), CellValue::Integer(2022)]),
        Column::new("Consumo", floats(&[1201.5, 1288.0])),
    ])
    .expect("valid consumption fixture")
}

pub fn prices_dataset() -> Dataset {
    Dataset::new(vec![
        Column::new("Fecha", strings(&["2023-05-01", "2023-05-02", "2023-05-03"])),
        Column::new("Regular", floats(&[22.08, 22.11, 22.09])),
        Column::new("Premium", floats(&[24.21, 24.25, 24.30])),
        Column::new("Diesel", vec![CellValue::Float(23.6), CellValue::Empty, CellValue::Float(23.7)]),
    ])
    .expect("valid prices fixture")
}

/// A registry with all three datasets.
pub fn sample_registry() -> DatasetRegistry {
    DatasetRegistry::new([
        (DatasetKey::Importaciones, imports_dataset()),
        (DatasetKey::Consumo, consumption_dataset()),
        (DatasetKey::Precios, prices_dataset()),
    ])
}
