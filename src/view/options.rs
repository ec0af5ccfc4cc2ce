use super::palette::PALETTE;
use crate::datamodel::{ChartType, DatasetKey, TableStyle};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Defaults {
    pub dataset_key: DatasetKey,
    pub chart_type: ChartType,
    pub color_index: u8,
    pub table_style: TableStyle,
}

/// What the shell needs to render its controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ControlOptions {
    pub title: String,
    pub datasets: Vec<SelectOption>,
    pub chart_types: Vec<SelectOption>,
    pub palette: Vec<String>,
    pub defaults: Defaults,
}

pub fn control_options(title: &str) -> ControlOptions {
    ControlOptions {
        title: title.to_string(),
        datasets: DatasetKey::ALL
            .iter()
            .map(|key| SelectOption {
                label: key.label().to_string(),
                value: key.as_str().to_string(),
            })
            .collect(),
        chart_types: ChartType::ALL
            .iter()
            .map(|chart| SelectOption {
                label: chart.label().to_string(),
                value: chart.as_str().to_string(),
            })
            .collect(),
        palette: PALETTE.iter().map(|c| c.to_string()).collect(),
        defaults: Defaults {
            dataset_key: DatasetKey::default(),
            chart_type: ChartType::default(),
            color_index: 0,
            table_style: TableStyle::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_options() {
        let options = control_options("Visualizacion Interactiva");
        assert_eq!(options.title, "Visualizacion Interactiva");
        assert_eq!(
            options
                .datasets
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>(),
            vec!["importaciones", "consumo", "precios"]
        );
        assert_eq!(
            options
                .chart_types
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>(),
            vec!["scatter", "bar", "line", "histogram"]
        );
        assert_eq!(options.palette.len(), 5);
        assert_eq!(options.defaults.dataset_key, DatasetKey::Importaciones);
        assert_eq!(options.defaults.chart_type, ChartType::Scatter);
        assert!(options.defaults.table_style.is_hidden());
    }
}
