use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    None,
    Block,
}

/// Style record of the table container. Only `display` matters.
///
/// A record without `display` is treated as visible, like a browser would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TableStyle {
    #[serde(default = "visible_by_default")]
    pub display: DisplayMode,
}

fn visible_by_default() -> DisplayMode {
    DisplayMode::Block
}

impl TableStyle {
    pub fn hidden() -> Self {
        Self {
            display: DisplayMode::None,
        }
    }

    pub fn visible() -> Self {
        Self {
            display: DisplayMode::Block,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == DisplayMode::None
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        assert!(TableStyle::default().is_hidden());
        assert!(!TableStyle::visible().is_hidden());
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&TableStyle::hidden()).unwrap(),
            r#"{"display":"none"}"#
        );
        let style: TableStyle = serde_json::from_str(r#"{"display":"block"}"#).unwrap();
        assert_eq!(style, TableStyle::visible());
        let style: TableStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, TableStyle::visible());
    }
}
