//! Short summary text and messaging deep link for a calculated screen.

use super::format::{format_fixed_comma, format_number};
use crate::domain::{ScreenInput, ScreenResult};
use crate::engine::normalize;

pub const DEFAULT_SHARE_BASE_URL: &str = "https://wa.me/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub message: String,
    pub link: String,
}

impl SharePayload {
    pub fn new(base_url: &str, message: String) -> Self {
        let link = share_link(base_url, &message);
        Self { message, link }
    }
}

/// `{product} - AB {mesh} MM - FIO {wire} MM - {length} X {width} MM[ - {finish}]`
/// followed by the gross weight line.
pub fn share_message(input: &ScreenInput, result: &ScreenResult) -> String {
    let mut message = format!(
        "{} - AB {} MM - FIO {} MM - {:.0} X {:.0} MM",
        input.product_type.trim(),
        format_fixed_comma(normalize(&input.mesh_aperture), 2),
        format_fixed_comma(normalize(&input.wire_diameter), 2),
        normalize(&input.length).trunc(),
        normalize(&input.width).trunc(),
    );

    let finish = input.finish_note.trim();
    if !finish.is_empty() {
        message.push_str(" - ");
        message.push_str(finish);
    }

    message.push_str("\n\nPeso Bruto: ");
    message.push_str(&format_number(result.total_weight_kg, 2));
    message.push_str(" Kg");
    message
}

pub fn share_link(base_url: &str, message: &str) -> String {
    format!("{}?text={}", base_url, encode_uri_component(message))
}

/// Percent-encodes everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
        {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(byte >> 4) as usize] as char);
            encoded.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    encoded
}
