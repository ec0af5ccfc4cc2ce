use super::figure::{Axis, FigureSpec, Layout, MarkerColor, Trace, TraceMode, TraceType};
use super::palette::{COLOR_SCALE, palette_color};
use crate::datamodel::{ChartType, ColorIndex, Dataset};
use crate::registry::DatasetRegistry;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;

/// Table column descriptor, the column name being both label and id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TableColumn {
    pub name: String,
    pub id: String,
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ViewState {
    #[schema(value_type = Object)]
    pub figure: FigureSpec,
    pub description: String,
    pub columns: Vec<TableColumn>,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Map<String, Value>>,
}

impl ViewState {
    /// Shown when the dataset key does not resolve.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Recompute the chart, description and table for the current selection.
///
/// An unknown dataset key yields [`ViewState::empty`]. Nothing is cached.
pub fn compute_view(
    registry: &DatasetRegistry,
    dataset_key: &str,
    chart_type: ChartType,
    color_index: ColorIndex,
) -> ViewState {
    let Some((key, dataset)) = registry.resolve(dataset_key) else {
        debug!("Dataset '{}' not found, returning an empty view", dataset_key);
        return ViewState::empty();
    };

    let mut figure = build_figure(dataset, chart_type);

    // Applied to every chart type. On scatter charts this replaces the
    // per-row colour scale set by build_figure.
    figure.update_marker_color(MarkerColor::Flat(palette_color(color_index).to_string()));

    ViewState {
        figure,
        description: key.description().to_string(),
        columns: table_columns(dataset),
        data: dataset.records(),
    }
}

pub fn build_figure(dataset: &Dataset, chart_type: ChartType) -> FigureSpec {
    let x = dataset.x_column();
    let y = dataset.y_column();
    let xy_layout = || Layout {
        xaxis: Axis::titled(x.name.clone()),
        yaxis: Axis::titled(y.name.clone()),
    };

    match chart_type {
        ChartType::Scatter => {
            let mut trace = Trace::new(TraceType::Scatter)
                .with_mode(TraceMode::Markers)
                .with_x(&x.values)
                .with_y(&y.values);
            trace.marker.color = Some(MarkerColor::PerPoint(
                (0..dataset.row_count()).map(|row| row as f64).collect(),
            ));
            trace.marker.colorscale = Some(COLOR_SCALE.to_string());
            FigureSpec::new(trace, xy_layout())
        }
        ChartType::Bar => FigureSpec::new(
            Trace::new(TraceType::Bar).with_x(&x.values).with_y(&y.values),
            xy_layout(),
        ),
        ChartType::Line => FigureSpec::new(
            Trace::new(TraceType::Scatter)
                .with_mode(TraceMode::Lines)
                .with_x(&x.values)
                .with_y(&y.values),
            xy_layout(),
        ),
        ChartType::Histogram => FigureSpec::new(
            Trace::new(TraceType::Histogram).with_x(&y.values),
            Layout {
                xaxis: Axis::titled(y.name.clone()),
                yaxis: Axis::titled("count"),
            },
        ),
    }
}

fn table_columns(dataset: &Dataset) -> Vec<TableColumn> {
    dataset
        .column_names()
        .map(|name| TableColumn {
            name: name.to_string(),
            id: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::{CellValue, Column, DatasetKey};
    use crate::view::palette::PALETTE;

    fn imports() -> Dataset {
        Dataset::new(vec![
            Column::new(
                "Mes",
                vec![
                    CellValue::String("Enero".to_string()),
                    CellValue::String("Febrero".to_string()),
                    CellValue::String("Marzo".to_string()),
                ],
            ),
            Column::new(
                "Volumen",
                vec![
                    CellValue::Float(10.0),
                    CellValue::Float(12.5),
                    CellValue::Empty,
                ],
            ),
            Column::new(
                "Producto",
                vec![
                    CellValue::String("Gasolina".to_string()),
                    CellValue::String("Diesel".to_string()),
                    CellValue::String("Turbosina".to_string()),
                ],
            ),
        ])
        .unwrap()
    }

    fn registry() -> DatasetRegistry {
        DatasetRegistry::new([(DatasetKey::Importaciones, imports())])
    }

    fn color(index: u8) -> ColorIndex {
        ColorIndex::new(index).unwrap()
    }

    #[test]
    fn test_unknown_dataset_returns_empty_view() {
        let view = compute_view(&registry(), "ventas", ChartType::Bar, color(1));
        assert_eq!(view, ViewState::empty());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"figure": {}, "description": "", "columns": [], "data": []})
        );
    }

    #[test]
    fn test_known_dataset() {
        let view = compute_view(&registry(), "importaciones", ChartType::Bar, color(0));

        assert_eq!(view.description, "Imports data");
        assert_eq!(
            view.columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["Mes", "Volumen", "Producto"]
        );
        assert!(view.columns.iter().all(|c| c.name == c.id));
        assert_eq!(view.data.len(), 3);
        assert_eq!(view.data[1]["Volumen"], serde_json::json!(12.5));
        assert_eq!(view.data[2]["Volumen"], Value::Null);
    }

    #[test]
    fn test_bar_and_line_use_first_two_columns() {
        let dataset = imports();
        for (chart_type, trace_type, mode) in [
            (ChartType::Bar, TraceType::Bar, None),
            (ChartType::Line, TraceType::Scatter, Some(TraceMode::Lines)),
        ] {
            let view = compute_view(&registry(), "importaciones", chart_type, color(3));
            let trace = &view.figure.data[0];
            assert_eq!(trace.trace_type, trace_type);
            assert_eq!(trace.mode, mode);
            assert_eq!(trace.x.as_ref(), Some(&dataset.columns()[0].values));
            assert_eq!(trace.y.as_ref(), Some(&dataset.columns()[1].values));
            assert_eq!(
                trace.marker.color,
                Some(MarkerColor::Flat("#457b9d".to_string()))
            );
        }
    }

    #[test]
    fn test_histogram_only_uses_second_column() {
        let dataset = imports();
        let view = compute_view(&registry(), "importaciones", ChartType::Histogram, color(0));

        let trace = &view.figure.data[0];
        assert_eq!(trace.trace_type, TraceType::Histogram);
        assert_eq!(trace.x.as_ref(), Some(&dataset.columns()[1].values));
        assert!(trace.y.is_none());

        let layout = view.figure.layout.as_ref().unwrap();
        assert_eq!(layout.xaxis.title.text, "Volumen");

        let figure_json = serde_json::to_string(&view.figure).unwrap();
        assert!(!figure_json.contains("Mes"));
        assert!(!figure_json.contains("Enero"));
    }

    #[test]
    fn test_scatter_color_override() {
        let view = compute_view(&registry(), "importaciones", ChartType::Scatter, color(2));

        let trace = &view.figure.data[0];
        assert_eq!(trace.mode, Some(TraceMode::Markers));
        assert_eq!(
            trace.marker.color,
            Some(MarkerColor::Flat(PALETTE[2].to_string()))
        );
        let json = serde_json::to_value(&view.figure).unwrap();
        assert_eq!(json["data"][0]["marker"]["color"], "#a8dadc");
    }

    #[test]
    fn test_scatter_figure_before_override_uses_row_index() {
        let figure = build_figure(&imports(), ChartType::Scatter);
        assert_eq!(
            figure.data[0].marker.color,
            Some(MarkerColor::PerPoint(vec![0.0, 1.0, 2.0]))
        );
        assert_eq!(figure.data[0].marker.colorscale.as_deref(), Some("Viridis"));
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let registry = registry();
        for chart_type in ChartType::ALL {
            let first = compute_view(&registry, "importaciones", chart_type, color(4));
            let second = compute_view(&registry, "importaciones", chart_type, color(4));
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
