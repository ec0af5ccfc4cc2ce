use serde::{Deserialize, Serialize};
use std::fmt;

/// Position on the colour slider, always within the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorIndex(u8);

impl ColorIndex {
    pub const MAX: u8 = 4;

    pub fn new(index: u8) -> Result<Self, String> {
        if index > Self::MAX {
            return Err(format!(
                "Color index {} is out of range [0, {}]",
                index,
                Self::MAX
            ));
        }
        Ok(Self(index))
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorIndex> for u8 {
    fn from(value: ColorIndex) -> Self {
        value.0
    }
}

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        for i in 0..=ColorIndex::MAX {
            assert_eq!(ColorIndex::new(i).unwrap().get(), i as usize);
        }
        assert!(ColorIndex::new(5).is_err());
        assert_eq!(ColorIndex::default().get(), 0);
    }

    #[test]
    fn test_deserialize() {
        let index: ColorIndex = serde_json::from_str("3").unwrap();
        assert_eq!(index.get(), 3);
        assert!(serde_json::from_str::<ColorIndex>("5").is_err());
        assert!(serde_json::from_str::<ColorIndex>("-1").is_err());
        assert_eq!(serde_json::to_string(&index).unwrap(), "3");
    }
}
