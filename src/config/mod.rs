use crate::datamodel::DatasetKey;
use crate::importers::DataSource;
use anyhow::Error;
use confique::Config;
use std::{
    net::IpAddr,
    path::PathBuf,
    sync::{Arc, OnceLock},
};

#[derive(Debug, Config)]
pub struct SheetDashConfig {
    #[config(env = "SHEETDASH_PORT", default = 8050)]
    pub port: u16,
    #[config(env = "SHEETDASH_ENDPOINT", default = "127.0.0.1")]
    pub endpoint: IpAddr,

    #[config(env = "SHEETDASH_DEBUG", default = false)]
    pub debug: bool,

    #[config(env = "SHEETDASH_HTTP_BODY_LIMIT", default = "1mb")]
    pub http_body_limit: String,

    #[config(env = "SHEETDASH_HTTP_SERVER_TIMEOUT_SECONDS", default = 30)]
    pub http_server_timeout_seconds: u64,

    #[config(env = "SHEETDASH_DATA_DIR", default = "dataClean")]
    pub data_dir: PathBuf,

    #[config(env = "SHEETDASH_IMPORTS_FILE", default = "importaciones.xlsx")]
    pub imports_file: String,

    #[config(env = "SHEETDASH_CONSUMPTION_FILE", default = "consumo.xlsx")]
    pub consumption_file: String,

    #[config(env = "SHEETDASH_PRICES_FILE", default = "precios.xlsx")]
    pub prices_file: String,

    /// Sheet read from every workbook, the first one when unset
    #[config(env = "SHEETDASH_SHEET")]
    pub sheet: Option<String>,

    #[config(env = "SHEETDASH_SKIP_ROWS", default = 0)]
    pub skip_rows: usize,

    /// Per-dataset overrides of `sheet` and `skip_rows`
    #[config(env = "SHEETDASH_IMPORTS_SHEET")]
    pub imports_sheet: Option<String>,
    #[config(env = "SHEETDASH_IMPORTS_SKIP_ROWS")]
    pub imports_skip_rows: Option<usize>,

    #[config(env = "SHEETDASH_CONSUMPTION_SHEET")]
    pub consumption_sheet: Option<String>,
    #[config(env = "SHEETDASH_CONSUMPTION_SKIP_ROWS")]
    pub consumption_skip_rows: Option<usize>,

    #[config(env = "SHEETDASH_PRICES_SHEET")]
    pub prices_sheet: Option<String>,
    #[config(env = "SHEETDASH_PRICES_SKIP_ROWS")]
    pub prices_skip_rows: Option<usize>,

    #[config(env = "SHEETDASH_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

impl SheetDashConfig {
    pub fn load() -> Result<SheetDashConfig, Error> {
        let c = SheetDashConfig::builder()
            .env()
            .file("settings.toml")
            .load()?;

        Ok(c)
    }

    pub fn parse_http_body_limit(&self) -> Result<usize, Error> {
        let size = byte_unit::Byte::parse_str(self.http_body_limit.clone(), true)?.as_u64();
        if size > 1024 * 1024 * 1024 {
            anyhow::bail!("Body size is too big: > 1GB");
        }
        Ok(size as usize)
    }

    pub fn data_sources(&self) -> Vec<DataSource> {
        DatasetKey::ALL
            .iter()
            .map(|key| {
                let (file, sheet, skip_rows) = match key {
                    DatasetKey::Importaciones => {
                        (&self.imports_file, &self.imports_sheet, self.imports_skip_rows)
                    }
                    DatasetKey::Consumo => (
                        &self.consumption_file,
                        &self.consumption_sheet,
                        self.consumption_skip_rows,
                    ),
                    DatasetKey::Precios => {
                        (&self.prices_file, &self.prices_sheet, self.prices_skip_rows)
                    }
                };
                DataSource {
                    key: *key,
                    path: self.data_dir.join(file),
                    sheet: sheet.clone().or_else(|| self.sheet.clone()),
                    skip_rows: skip_rows.unwrap_or(self.skip_rows),
                }
            })
            .collect()
    }
}

static SHEETDASH_CONFIG: OnceLock<Arc<SheetDashConfig>> = OnceLock::new();

pub fn get() -> Result<Arc<SheetDashConfig>, Error> {
    SHEETDASH_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if SHEETDASH_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = SheetDashConfig::load()?;
    SHEETDASH_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}
