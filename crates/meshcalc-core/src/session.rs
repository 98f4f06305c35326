//! Single-form calculator state: one input record and at most one result batch.

use crate::domain::{InputField, MeshError, MeshResult, ParseMode, ScreenInput, ScreenResult};
use crate::engine::calculate;
use crate::report::{
    DocumentUploader, ExportOutcome, ExportSettings, SharePayload, export_document, share_message,
};
use chrono::Local;

/// The input snapshot a result was computed from, kept together with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub input: ScreenInput,
    pub result: ScreenResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculatorSession {
    input: ScreenInput,
    calculation: Option<Calculation>,
    mode: ParseMode,
}

impl CalculatorSession {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_input(input: ScreenInput, mode: ParseMode) -> Self {
        Self {
            input,
            calculation: None,
            mode,
        }
    }

    pub fn input(&self) -> &ScreenInput {
        &self.input
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn result(&self) -> Option<&ScreenResult> {
        self.calculation
            .as_ref()
            .map(|calculation| &calculation.result)
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        self.calculation.as_ref()
    }

    /// Finish notes are stored upper-case.
    pub fn set_field(&mut self, field: InputField, value: &str) {
        let value = if field == InputField::FinishNote {
            value.to_uppercase()
        } else {
            value.to_string()
        };
        self.input.set(field, value);
    }

    /// Replaces the previous result only when the current input validates.
    pub fn calculate(&mut self) -> MeshResult<ScreenResult> {
        let snapshot = self.input.clone();
        let result = calculate(&snapshot, self.mode)?;
        self.calculation = Some(Calculation {
            input: snapshot,
            result,
        });
        Ok(result)
    }

    pub fn reset(&mut self) {
        self.input = ScreenInput::default();
        self.calculation = None;
    }

    pub fn share(&self, base_url: &str) -> MeshResult<SharePayload> {
        let calculation = self.require_calculation()?;
        let message = share_message(&calculation.input, &calculation.result);
        Ok(SharePayload::new(base_url, message))
    }

    pub fn export(
        &self,
        settings: &ExportSettings,
        uploader: Option<&dyn DocumentUploader>,
    ) -> MeshResult<ExportOutcome> {
        let calculation = self.require_calculation()?;
        export_document(
            &calculation.input,
            &calculation.result,
            settings,
            Local::now(),
            uploader,
        )
    }

    fn require_calculation(&self) -> MeshResult<&Calculation> {
        self.calculation.as_ref().ok_or_else(|| {
            MeshError::input_validation(
                "INPUT.NOT_CALCULATED",
                "calculate the values first before sharing or exporting",
            )
        })
    }
}
