//! Public Key Formatting
//!
//! Public keys arrive through a single environment variable with their
//! line breaks stripped. This rebuilds canonical PEM from that form.

pub const PEM_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
pub const PEM_FOOTER: &str = "-----END PUBLIC KEY-----";

/// Body characters per PEM line.
pub const PEM_LINE_WIDTH: usize = 64;

// == Format Key ==
/// Rebuilds a PEM public key from its condensed form.
///
/// The first header, footer and newline occurrences are stripped, then
/// the body is wrapped at 64 characters. The final body line always
/// ends in a newline, however short it is. Malformed input is not
/// rejected here; it fails later when the PEM is parsed.
pub fn format_key(condensed: &str) -> String {
    let body = condensed
        .replacen(PEM_HEADER, "", 1)
        .replacen(PEM_FOOTER, "", 1)
        .replacen('\n', "", 1);

    let mut pem = String::with_capacity(body.len() + body.len() / PEM_LINE_WIDTH + 64);
    pem.push_str(PEM_HEADER);
    pem.push('\n');

    let total = body.chars().count();
    for (i, c) in body.chars().enumerate() {
        pem.push(c);
        let position = i + 1;
        if position % PEM_LINE_WIDTH == 0 || position == total {
            pem.push('\n');
        }
    }

    pem.push_str(PEM_FOOTER);
    pem.push('\n');
    pem
}
