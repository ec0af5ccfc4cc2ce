use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{Value, json};
use sheetdash::datamodel::DatasetKey;
use sheetdash::importers::DataSource;
use sheetdash::registry::DatasetRegistry;
use sheetdash::test_utils::fixtures::sample_registry;
use sheetdash::test_utils::http::TestApp;
use std::io::Write;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

#[tokio::test]
async fn test_list_datasets() -> Result<()> {
    let app = TestApp::new(sample_registry());

    let response = app.get("/api/datasets").await?;
    response.assert_status(StatusCode::OK);

    let datasets: Value = response.json()?;
    let keys: Vec<&str> = datasets
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["importaciones", "consumo", "precios"]);
    assert_eq!(datasets[2]["rows"], 3);

    Ok(())
}

#[tokio::test]
async fn test_get_dataset() -> Result<()> {
    let app = TestApp::new(sample_registry());

    let response = app.get("/api/datasets/consumo").await?;
    response.assert_status(StatusCode::OK);
    let dataset: Value = response.json()?;
    assert_eq!(
        dataset,
        json!({
            "key": "consumo",
            "description": "Consumption data",
            "rows": 2,
            "columns": ["Año", "Consumo"],
        })
    );

    let response = app.get("/api/datasets/ventas").await?;
    response.assert_status(StatusCode::BAD_REQUEST);

    let app = TestApp::new(DatasetRegistry::default());
    let response = app.get("/api/datasets/consumo").await?;
    response.assert_status(StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_registry_loaded_from_csv_files_serves_views() -> Result<()> {
    // Given: three CSV sources, one with a preamble above the header
    let dir = tempfile::tempdir()?;
    let imports = write_file(&dir, "importaciones.csv", "Mes,Volumen\nEnero,10\nFebrero,12\n")?;
    let consumption = write_file(&dir, "consumo.csv", "Año,Consumo,Consumo\n2022,5,6\n")?;
    let prices = write_file(
        &dir,
        "precios.csv",
        "Precios promedio\nSemana 18\nFecha,Regular\n2023-05-01,22.08\n",
    )?;

    let mut prices_source = DataSource::new(DatasetKey::Precios, prices);
    prices_source.skip_rows = 2;
    let sources = vec![
        DataSource::new(DatasetKey::Importaciones, imports),
        DataSource::new(DatasetKey::Consumo, consumption),
        prices_source,
    ];

    // When: the registry is loaded and served
    let registry = DatasetRegistry::load(&sources).await?;
    let app = TestApp::new(registry);

    // Then: each dataset is reachable through the view callback
    let response = app
        .post_json(
            "/api/callbacks/view",
            r#"{"dataset_key":"consumo","chart_type":"bar","color_index":0}"#,
        )
        .await?;
    let view: Value = response.json()?;
    assert_eq!(
        view["columns"],
        json!([
            {"name": "Año", "id": "Año"},
            {"name": "Consumo", "id": "Consumo"},
            {"name": "Consumo.1", "id": "Consumo.1"},
        ])
    );
    assert_eq!(
        view["data"],
        json!([{"Año": 2022, "Consumo": 5, "Consumo.1": 6}])
    );

    let response = app
        .post_json(
            "/api/callbacks/view",
            r#"{"dataset_key":"precios","chart_type":"line","color_index":0}"#,
        )
        .await?;
    let view: Value = response.json()?;
    assert_eq!(view["figure"]["data"][0]["x"], json!(["2023-05-01"]));
    assert_eq!(view["figure"]["data"][0]["y"], json!([22.08]));

    Ok(())
}
