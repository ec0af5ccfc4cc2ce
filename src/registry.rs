use crate::datamodel::{Dataset, DatasetKey};
use crate::importers::{DataSource, ImportError, load_dataset};
use std::collections::BTreeMap;

/// The datasets served by the dashboard, loaded once at startup.
///
/// The registry has no interior mutability; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRegistry {
    datasets: BTreeMap<DatasetKey, Dataset>,
}

impl DatasetRegistry {
    pub fn new(datasets: impl IntoIterator<Item = (DatasetKey, Dataset)>) -> Self {
        Self {
            datasets: datasets.into_iter().collect(),
        }
    }

    /// Load every source, failing on the first one that cannot be read.
    pub async fn load(sources: &[DataSource]) -> Result<Self, ImportError> {
        let mut datasets = BTreeMap::new();
        for source in sources {
            let dataset = load_dataset(source).await?;
            datasets.insert(source.key, dataset);
        }
        Ok(Self { datasets })
    }

    pub fn get(&self, key: DatasetKey) -> Option<&Dataset> {
        self.datasets.get(&key)
    }

    /// Resolve a raw key coming from the UI.
    pub fn resolve(&self, raw_key: &str) -> Option<(DatasetKey, &Dataset)> {
        let key = raw_key.parse::<DatasetKey>().ok()?;
        self.get(key).map(|dataset| (key, dataset))
    }

    pub fn keys(&self) -> impl Iterator<Item = DatasetKey> + '_ {
        self.datasets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
