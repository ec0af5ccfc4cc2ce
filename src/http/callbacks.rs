use super::state::HttpServerState;
use crate::datamodel::{ChartType, ColorIndex, TableStyle};
use crate::view::options::{ControlOptions, control_options};
use crate::view::{ViewState, compute_view, toggle_table};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ViewRequest {
    /// Kept as a string: an unknown dataset gives an empty view, not an error
    pub dataset_key: String,
    pub chart_type: ChartType,
    #[schema(value_type = u8)]
    pub color_index: ColorIndex,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ToggleRequest {
    #[serde(default)]
    pub n_clicks: Option<u64>,
    #[serde(default)]
    pub current_style: TableStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ToggleResponse {
    pub style: TableStyle,
    pub label: String,
}

/// Options and defaults of the dashboard controls.
#[utoipa::path(
    get,
    path = "/api/options",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Control options", body = ControlOptions)
    )
)]
pub async fn options(State(state): State<HttpServerState>) -> Json<ControlOptions> {
    Json(control_options(&state.name))
}

/// Recompute chart, description and table from the current selection.
#[utoipa::path(
    post,
    path = "/api/callbacks/view",
    tag = "Dashboard",
    request_body = ViewRequest,
    responses(
        (status = 200, description = "View state", body = ViewState),
        (status = 422, description = "Unknown chart type or color index out of range"),
    )
)]
pub async fn update_view(
    State(state): State<HttpServerState>,
    Json(request): Json<ViewRequest>,
) -> Json<ViewState> {
    debug!(
        "Computing view for dataset={} chart={} color={}",
        request.dataset_key, request.chart_type, request.color_index
    );
    Json(compute_view(
        &state.registry,
        &request.dataset_key,
        request.chart_type,
        request.color_index,
    ))
}

/// Show or hide the data table.
#[utoipa::path(
    post,
    path = "/api/callbacks/toggle",
    tag = "Dashboard",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Next table style and button label", body = ToggleResponse)
    )
)]
pub async fn toggle(Json(request): Json<ToggleRequest>) -> Json<ToggleResponse> {
    let (style, label) = toggle_table(request.n_clicks, &request.current_style);
    Json(ToggleResponse {
        style,
        label: label.to_string(),
    })
}
