use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Scatter,
    Bar,
    Line,
    Histogram,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Scatter,
        ChartType::Bar,
        ChartType::Line,
        ChartType::Histogram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Scatter => "scatter",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Histogram => "histogram",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Scatter => "Scatter",
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Histogram => "Histogram",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scatter" => Ok(ChartType::Scatter),
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "histogram" => Ok(ChartType::Histogram),
            _ => Err(format!("Unknown chart type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("scatter".parse::<ChartType>().unwrap(), ChartType::Scatter);
        assert_eq!("Bar".parse::<ChartType>().unwrap(), ChartType::Bar);
        assert_eq!("line".parse::<ChartType>().unwrap(), ChartType::Line);
        assert_eq!(
            "histogram".parse::<ChartType>().unwrap(),
            ChartType::Histogram
        );
        assert!("pie".parse::<ChartType>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let chart: ChartType = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(chart, ChartType::Line);
        assert!(serde_json::from_str::<ChartType>("\"pie\"").is_err());
    }
}
