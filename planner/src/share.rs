//! Share sink helpers
//!
//! The formatter produces plain text; handing it to WhatsApp is a URL, and
//! handing it to a clipboard is host-specific. The sink is a trait with a
//! boolean outcome so a failed copy is reported, never thrown.

/// Build a wa.me share link carrying the message as the prefilled text
pub fn whatsapp_share_url(message: &str) -> String {
    format!("https://wa.me/?text={}", encode_uri_component(message))
}

/// Percent-encode with `encodeURIComponent`'s unreserved set, the alphabet
/// wa.me links are built against
fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for byte in s.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(*byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Destination for a rendered message (system clipboard, share sheet, …)
pub trait ShareSink {
    /// Hand the text over; `false` means the sink was unavailable and the
    /// caller should tell the user
    fn copy_text(&mut self, text: &str) -> bool;
}

/// Sink for hosts without a clipboard; always reports failure
#[derive(Debug, Default)]
pub struct NullSink;

impl ShareSink for NullSink {
    fn copy_text(&mut self, _text: &str) -> bool {
        false
    }
}
