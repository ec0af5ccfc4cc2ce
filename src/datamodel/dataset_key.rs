use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// The datasets the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKey {
    #[default]
    Importaciones,
    Consumo,
    Precios,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 3] = [
        DatasetKey::Importaciones,
        DatasetKey::Consumo,
        DatasetKey::Precios,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Importaciones => "importaciones",
            DatasetKey::Consumo => "consumo",
            DatasetKey::Precios => "precios",
        }
    }

    /// Label shown in the dataset selector.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKey::Importaciones => "Importaciones",
            DatasetKey::Consumo => "Consumo",
            DatasetKey::Precios => "Precios",
        }
    }

    /// One-line description shown under the chart.
    pub fn description(&self) -> &'static str {
        match self {
            DatasetKey::Importaciones => "Imports data",
            DatasetKey::Consumo => "Consumption data",
            DatasetKey::Precios => "Prices data",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "importaciones" => Ok(DatasetKey::Importaciones),
            "consumo" => Ok(DatasetKey::Consumo),
            "precios" => Ok(DatasetKey::Precios),
            _ => Err(format!("Unknown dataset: {}", s)),
        }
    }
}
