use super::CliError;
use anyhow::Context;
use meshcalc_core::common::catalog::catalog_product;
use meshcalc_core::common::constants::CalculationConstants;
use meshcalc_core::domain::{MeshError, MeshResult, ScreenInput, ScreenResult};
use meshcalc_core::report::format::RESULT_DECIMALS;
use meshcalc_core::report::{DEFAULT_SHARE_BASE_URL, ExportSettings, format_currency, format_number};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub(super) const CONFIG_FILE_NAME: &str = "meshcalc.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(super) struct CliConfig {
    pub(super) brand_name: String,
    pub(super) share_base_url: String,
    pub(super) upload_base_url: String,
    pub(super) upload_enabled: bool,
    pub(super) export_dir: PathBuf,
    pub(super) strict_parsing: bool,
    pub(super) show_constants: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            brand_name: "Telaço".to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            upload_base_url: "https://uploads.example.invalid/mesh-screen-reports".to_string(),
            upload_enabled: true,
            export_dir: PathBuf::from("reports"),
            strict_parsing: false,
            show_constants: false,
        }
    }
}

impl CliConfig {
    pub(super) fn export_settings(&self, output_dir: Option<PathBuf>) -> ExportSettings {
        ExportSettings {
            brand: self.brand_name.clone(),
            share_base_url: self.share_base_url.clone(),
            output_dir: output_dir.unwrap_or_else(|| self.export_dir.clone()),
        }
    }
}

pub(super) fn current_working_dir() -> MeshResult<PathBuf> {
    std::env::current_dir().map_err(|source| {
        MeshError::io_system(
            "IO.CLI_CURRENT_DIR",
            format!("failed to read current working directory: {}", source),
        )
    })
}

pub(super) fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|candidate| candidate.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Explicit path first, then the nearest `meshcalc.json`, then defaults.
pub(super) fn load_config(explicit: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let working_dir = current_working_dir()?;
    match find_config_file(&working_dir) {
        Some(path) => read_config(&path),
        None => {
            debug!("no {} found; using default configuration", CONFIG_FILE_NAME);
            Ok(CliConfig::default())
        }
    }
}

pub(super) fn read_config(path: &Path) -> Result<CliConfig, CliError> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration '{}'", path.display()))?;
    let config = serde_json::from_str::<CliConfig>(&content)
        .with_context(|| format!("failed to parse configuration '{}'", path.display()))?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

pub(super) fn load_input_file(path: &Path) -> Result<ScreenInput, CliError> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;
    Ok(ScreenInput::from_json_str(&content)?)
}

/// Labels outside the catalog are accepted but logged.
pub(super) fn warn_unknown_product(input: &ScreenInput) {
    let label = input.product_type.trim();
    if !label.is_empty() && catalog_product(label).is_none() {
        warn!(product = label, "product type is not in the catalog");
    }
}

pub(super) fn render_results(input: &ScreenInput, result: &ScreenResult) -> String {
    let mut lines = vec![format!("Produto: {}", input.product_type.trim())];
    let finish = input.finish_note.trim();
    if !finish.is_empty() {
        lines.push(format!("Acabamento/Tipo: {}", finish));
    }

    for (label, value) in [
        (
            "Peso do Fio (kg/m)",
            format_number(result.wire_weight_per_meter, RESULT_DECIMALS),
        ),
        (
            "Peso da Tela (kg/m²)",
            format_number(result.screen_weight_per_square_meter, RESULT_DECIMALS),
        ),
        (
            "Área total (m²)",
            format_number(result.total_area_square_meters, RESULT_DECIMALS),
        ),
        (
            "Peso Total (kg)",
            format_number(result.total_weight_kg, RESULT_DECIMALS),
        ),
        (
            "Preço m² (R$)",
            format_currency(result.price_per_square_meter),
        ),
        ("Preço Total (R$)", format_currency(result.total_price)),
    ] {
        lines.push(format!("{:<22}{}", format!("{}:", label), value));
    }
    lines.join("\n")
}

pub(super) fn render_constants(constants: &CalculationConstants) -> String {
    constants
        .rows()
        .iter()
        .map(|(label, value)| format!("{:<28}{}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n")
}
