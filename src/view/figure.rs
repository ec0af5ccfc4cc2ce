//! Declarative chart description, serialised in the plotly.js figure format.

use crate::datamodel::CellValue;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Scatter,
    Bar,
    Histogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceMode {
    Markers,
    Lines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    /// One colour for the whole trace
    Flat(String),
    /// One value per point, mapped through the marker colour scale
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TraceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<CellValue>>,
    pub marker: Marker,
}

impl Trace {
    pub fn new(trace_type: TraceType) -> Self {
        Self {
            trace_type,
            mode: None,
            x: None,
            y: None,
            marker: Marker::default(),
        }
    }

    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_x(mut self, values: &[CellValue]) -> Self {
        self.x = Some(values.to_vec());
        self
    }

    pub fn with_y(mut self, values: &[CellValue]) -> Self {
        self.y = Some(values.to_vec());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: AxisTitle { text: text.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// A figure. The default one is empty and serialises to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FigureSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl FigureSpec {
    pub fn new(trace: Trace, layout: Layout) -> Self {
        Self {
            data: vec![trace],
            layout: Some(layout),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.layout.is_none()
    }

    /// Merge a marker colour into every trace, leaving other marker attributes.
    pub fn update_marker_color(&mut self, color: MarkerColor) {
        for trace in &mut self.data {
            trace.marker.color = Some(color.clone());
        }
    }
}
