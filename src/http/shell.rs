use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Dashboard page.
#[utoipa::path(
    get,
    path = "/",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard page", content_type = "text/html", body = String)
    )
)]
pub async fn frontpage() -> Html<&'static str> {
    Html(INDEX_HTML)
}
