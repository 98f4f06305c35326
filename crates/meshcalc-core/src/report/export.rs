//! Plain-text calculation report with upload-or-local fallback.

use super::artifact::write_text_artifact;
use super::format::{RESULT_DECIMALS, format_currency, format_number};
use super::share::SharePayload;
use super::upload::DocumentUploader;
use crate::domain::{InputField, MeshResult, ScreenInput, ScreenResult};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{debug, warn};

const RULE: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub brand: String,
    pub share_base_url: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub local_path: PathBuf,
    pub reference: Option<String>,
    pub share: SharePayload,
}

impl ExportOutcome {
    pub fn uploaded(&self) -> bool {
        self.reference.is_some()
    }
}

pub fn document_file_name(generated_at: &DateTime<Local>) -> String {
    format!("calculo_tela_{}.txt", generated_at.timestamp_millis())
}

pub fn render_document(
    input: &ScreenInput,
    result: &ScreenResult,
    brand: &str,
    generated_at: &DateTime<Local>,
) -> String {
    let mut lines = vec![
        "Calculadora de Peso de Tela".to_string(),
        format!("{} - Ferramenta de Cálculo Profissional", brand),
        RULE.to_string(),
        "ENTRADAS".to_string(),
    ];

    for field in InputField::ALL {
        let value = input.field(field).trim();
        if field == InputField::FinishNote && value.is_empty() {
            continue;
        }
        lines.push(format!("{}: {}", field.label(), value));
    }

    lines.push(RULE.to_string());
    lines.push("RESULTADOS".to_string());
    lines.push(format!(
        "Peso do Fio: {} kg/m",
        format_number(result.wire_weight_per_meter, RESULT_DECIMALS)
    ));
    lines.push(format!(
        "Peso da Tela: {} kg/m²",
        format_number(result.screen_weight_per_square_meter, RESULT_DECIMALS)
    ));
    lines.push(format!(
        "Área total: {} m²",
        format_number(result.total_area_square_meters, RESULT_DECIMALS)
    ));
    lines.push(format!(
        "Peso Total: {} kg",
        format_number(result.total_weight_kg, RESULT_DECIMALS)
    ));
    lines.push(format!(
        "Preço m²: {}",
        format_currency(result.price_per_square_meter)
    ));
    lines.push(format!(
        "Preço Total: {}",
        format_currency(result.total_price)
    ));
    lines.push(RULE.to_string());
    lines.push(format!("© {} – Ferramenta interna", brand));
    lines.push(format!(
        "Gerado em: {}",
        generated_at.format("%d/%m/%Y às %H:%M:%S")
    ));

    lines.join("\n")
}

/// Message sent alongside an exported document; the reference is omitted on fallback.
pub fn export_share_message(brand: &str, reference: Option<&str>, result: &ScreenResult) -> String {
    let totals = format!(
        "Peso Total: {} kg\nPreço Total: {}",
        format_number(result.total_weight_kg, RESULT_DECIMALS),
        format_currency(result.total_price)
    );
    match reference {
        Some(reference) => format!(
            "Segue o cálculo de peso de tela gerado pela Calculadora {}:\n\n{}\n\n{}",
            brand, reference, totals
        ),
        None => format!(
            "Segue o cálculo de peso de tela gerado pela Calculadora {}.\n\n{}",
            brand, totals
        ),
    }
}

/// Renders the report, tries the uploader, and always writes the local copy.
///
/// Upload failures only change the share message; a failed local write is an error.
pub fn export_document(
    input: &ScreenInput,
    result: &ScreenResult,
    settings: &ExportSettings,
    generated_at: DateTime<Local>,
    uploader: Option<&dyn DocumentUploader>,
) -> MeshResult<ExportOutcome> {
    let document = render_document(input, result, &settings.brand, &generated_at);
    let file_name = document_file_name(&generated_at);

    let reference = uploader.and_then(|uploader| {
        match uploader.upload(&file_name, document.as_bytes()) {
            Ok(reference) => {
                debug!(%reference, "report uploaded");
                Some(reference)
            }
            Err(error) => {
                warn!(
                    error = %error,
                    "report upload failed; keeping local copy only"
                );
                None
            }
        }
    });

    let local_path = settings.output_dir.join(&file_name);
    write_text_artifact(&local_path, &document)?;
    debug!(path = %local_path.display(), "report written");

    let message = export_share_message(&settings.brand, reference.as_deref(), result);
    Ok(ExportOutcome {
        local_path,
        reference,
        share: SharePayload::new(&settings.share_base_url, message),
    })
}

#[cfg(test)]
mod tests {
    use super::{ExportSettings, document_file_name, export_document, render_document};
    use crate::domain::{MeshError, MeshResult, ScreenInput};
    use crate::engine::compute;
    use crate::report::upload::{DocumentUploader, StubUploader};
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::TempDir;

    struct FailingUploader;

    impl DocumentUploader for FailingUploader {
        fn upload(&self, _file_name: &str, _payload: &[u8]) -> MeshResult<String> {
            Err(MeshError::computation("RUN.UPLOAD", "storage unavailable"))
        }
    }

    fn sample_input() -> ScreenInput {
        ScreenInput {
            product_type: "PENEIRA INOX AISI 304".to_string(),
            mesh_aperture: "19,05".to_string(),
            wire_diameter: "9".to_string(),
            length: "2500".to_string(),
            loss_margin: "100".to_string(),
            width: "1980".to_string(),
            hook_allowance: "80".to_string(),
            price_per_kg: "12,50".to_string(),
            quantity: "1".to_string(),
            finish_note: "SEM GANCHO".to_string(),
        }
    }

    fn settings(output_dir: &std::path::Path) -> ExportSettings {
        ExportSettings {
            brand: "Telaço".to_string(),
            share_base_url: "https://wa.me/".to_string(),
            output_dir: output_dir.to_path_buf(),
        }
    }

    #[test]
    fn document_contains_inputs_results_and_timestamp() {
        let input = sample_input();
        let result = compute(&input);
        let generated_at = Local
            .with_ymd_and_hms(2026, 3, 4, 5, 6, 7)
            .single()
            .expect("unambiguous local time");

        let document = render_document(&input, &result, "Telaço", &generated_at);
        assert!(document.starts_with("Calculadora de Peso de Tela\nTelaço - "));
        assert!(document.contains("Tipo de Produto: PENEIRA INOX AISI 304"));
        assert!(document.contains("Acabamento/Tipo: SEM GANCHO"));
        assert!(document.contains("Malha (mm): 19,05"));
        assert!(document.contains("Peso do Fio: 0,499 kg/m"));
        assert!(document.contains("Área total: 5,356 m²"));
        assert!(document.contains("Preço Total: R$\u{a0}2.622,16"));
        assert!(document.ends_with("Gerado em: 04/03/2026 às 05:06:07"));
    }

    #[test]
    fn blank_finish_note_is_left_out_of_document() {
        let mut input = sample_input();
        input.finish_note.clear();
        let result = compute(&input);
        let document = render_document(&input, &result, "Telaço", &Local::now());
        assert!(!document.contains("Acabamento/Tipo"));
    }

    #[test]
    fn successful_upload_links_reference_and_keeps_local_copy() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = sample_input();
        let result = compute(&input);
        let uploader = StubUploader::new("https://storage.example.test/reports");
        let generated_at = Local::now();

        let outcome = export_document(
            &input,
            &result,
            &settings(&temp.path().join("reports")),
            generated_at,
            Some(&uploader),
        )
        .expect("export should succeed");

        let file_name = document_file_name(&generated_at);
        assert!(outcome.uploaded());
        assert_eq!(
            outcome.reference.as_deref(),
            Some(format!("https://storage.example.test/reports/{file_name}").as_str())
        );
        assert_eq!(outcome.local_path, temp.path().join("reports").join(&file_name));
        assert!(outcome.local_path.is_file());
        assert!(outcome.share.message.contains("Calculadora Telaço:\n\nhttps://"));
        assert!(outcome.share.link.starts_with("https://wa.me/?text=Segue"));
    }

    #[test]
    fn failed_upload_falls_back_to_local_artifact() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = sample_input();
        let result = compute(&input);

        let outcome = export_document(
            &input,
            &result,
            &settings(temp.path()),
            Local::now(),
            Some(&FailingUploader),
        )
        .expect("upload failure must not fail the export");

        assert!(!outcome.uploaded());
        let written = fs::read_to_string(&outcome.local_path).expect("local copy should exist");
        assert!(written.contains("RESULTADOS"));
        assert!(written.ends_with('\n'));
        assert_eq!(
            outcome.share.message,
            "Segue o cálculo de peso de tela gerado pela Calculadora Telaço.\n\nPeso Total: 209,772 kg\nPreço Total: R$\u{a0}2.622,16"
        );
    }

    #[test]
    fn export_without_uploader_is_local_only() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = sample_input();
        let result = compute(&input);

        let outcome = export_document(&input, &result, &settings(temp.path()), Local::now(), None)
            .expect("export should succeed");
        assert!(outcome.reference.is_none());
        assert!(outcome.local_path.is_file());
    }
}
