pub mod cell_value;
pub mod chart_type;
pub mod color_index;
pub mod dataset;
pub mod dataset_key;
pub mod table_style;

pub use cell_value::CellValue;
pub use chart_type::ChartType;
pub use color_index::ColorIndex;
pub use dataset::{Column, Dataset, DatasetError};
pub use dataset_key::DatasetKey;
pub use table_style::{DisplayMode, TableStyle};
