use super::app_error::AppError;
use super::state::HttpServerState;
use crate::datamodel::{Dataset, DatasetKey};
use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DatasetSummary {
    pub key: DatasetKey,
    pub description: String,
    pub rows: usize,
    pub columns: Vec<String>,
}

impl DatasetSummary {
    fn new(key: DatasetKey, dataset: &Dataset) -> Self {
        Self {
            key,
            description: key.description().to_string(),
            rows: dataset.row_count(),
            columns: dataset.column_names().map(str::to_string).collect(),
        }
    }
}

/// List the loaded datasets.
#[utoipa::path(
    get,
    path = "/api/datasets",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Loaded datasets", body = Vec<DatasetSummary>)
    )
)]
pub async fn list_datasets(State(state): State<HttpServerState>) -> Json<Vec<DatasetSummary>> {
    let summaries = state
        .registry
        .keys()
        .filter_map(|key| {
            state
                .registry
                .get(key)
                .map(|dataset| DatasetSummary::new(key, dataset))
        })
        .collect();
    Json(summaries)
}

/// Describe one dataset.
#[utoipa::path(
    get,
    path = "/api/datasets/{dataset_key}",
    tag = "Dashboard",
    params(
        ("dataset_key" = String, Path, description = "importaciones, consumo or precios")
    ),
    responses(
        (status = 200, description = "Dataset summary", body = DatasetSummary),
        (status = 400, description = "Unknown dataset key", body = AppError),
        (status = 404, description = "Dataset not loaded", body = AppError),
    )
)]
pub async fn get_dataset(
    State(state): State<HttpServerState>,
    Path(dataset_key): Path<String>,
) -> Result<Json<DatasetSummary>, AppError> {
    let key = dataset_key
        .parse::<DatasetKey>()
        .map_err(|err| AppError::bad_request(anyhow!(err)))?;
    let dataset = state
        .registry
        .get(key)
        .ok_or_else(|| AppError::not_found(anyhow!("Dataset not loaded: {}", key)))?;
    Ok(Json(DatasetSummary::new(key, dataset)))
}
