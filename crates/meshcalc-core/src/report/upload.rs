use crate::domain::{MeshError, MeshResult};

/// Publishes a rendered document and returns a shareable reference.
pub trait DocumentUploader {
    fn upload(&self, file_name: &str, payload: &[u8]) -> MeshResult<String>;
}

/// Mock storage endpoint: accepts any non-empty document and returns a URL
/// under `base_url` built from the file name. Nothing is transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubUploader {
    base_url: String,
}

impl StubUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl DocumentUploader for StubUploader {
    fn upload(&self, file_name: &str, payload: &[u8]) -> MeshResult<String> {
        if payload.is_empty() || file_name.trim().is_empty() {
            return Err(MeshError::input_validation(
                "INPUT.UPLOAD_EMPTY",
                "no file sent",
            ));
        }

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            file_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentUploader, StubUploader};

    #[test]
    fn stub_reference_is_derived_from_file_name() {
        let uploader = StubUploader::new("https://storage.example.test/reports/");
        let reference = uploader
            .upload("calculo_tela_1.txt", b"document")
            .expect("upload should succeed");
        assert_eq!(
            reference,
            "https://storage.example.test/reports/calculo_tela_1.txt"
        );
    }

    #[test]
    fn empty_payload_is_rejected() {
        let uploader = StubUploader::new("https://storage.example.test");
        let error = uploader
            .upload("calculo_tela_1.txt", b"")
            .expect_err("empty payload should fail");
        assert_eq!(error.placeholder(), "INPUT.UPLOAD_EMPTY");
        assert_eq!(error.message(), "no file sent");
    }
}
