use crate::domain::{MeshError, MeshResult};
use std::fs;
use std::path::Path;

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

/// Writes `content` with canonical line endings, creating parent directories.
pub fn write_text_artifact(path: &Path, content: &str) -> MeshResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            MeshError::io_system(
                "IO.EXPORT_DIR",
                format!(
                    "failed to create output directory '{}': {}",
                    parent.display(),
                    source
                ),
            )
        })?;
    }

    fs::write(path, normalize_text_artifact(content)).map_err(|source| {
        MeshError::io_system(
            "IO.EXPORT_WRITE",
            format!("failed to write '{}': {}", path.display(), source),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{normalize_text_artifact, write_text_artifact};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
        assert_eq!(normalize_text_artifact(""), "");
    }

    #[test]
    fn repeated_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("nested/reports/report.txt");
        let input = "line 1\r\nline 2\rline 3";

        write_text_artifact(&path, input).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");

        write_text_artifact(&path, input).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"line 1\nline 2\nline 3\n");
    }

    #[test]
    fn write_into_a_file_path_reports_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").expect("blocker should be written");

        let error = write_text_artifact(&blocker.join("report.txt"), "content")
            .expect_err("parent is a regular file");
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.placeholder(), "IO.EXPORT_DIR");
    }
}
