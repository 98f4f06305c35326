pub mod artifact;
pub mod export;
pub mod format;
pub mod share;
pub mod upload;

pub use export::{
    ExportOutcome, ExportSettings, document_file_name, export_document, export_share_message,
    render_document,
};
pub use format::{format_currency, format_fixed_comma, format_number};
pub use share::{
    DEFAULT_SHARE_BASE_URL, SharePayload, encode_uri_component, share_link, share_message,
};
pub use upload::{DocumentUploader, StubUploader};
