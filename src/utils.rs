// For signature verification
use hex::decode as hex_decode;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_PREFIX: &str = "sha256=";

/// Helper function for verifying GitHub webhook signature.
///
/// `signature_header` is the raw `X-Hub-Signature-256` value; callers pass an
/// empty string when the header is absent. Any malformed value (wrong prefix,
/// non-hex, wrong length) is a rejection, never an error.
pub fn verify_github_signature(secret: &str, payload: &[u8], signature_header: &str) -> bool {
    let Some(git_signature) = signature_header.strip_prefix(SIGNATURE_PREFIX) else {
        debug!("Signature header missing '{}' prefix", SIGNATURE_PREFIX);
        return false;
    };

    let Ok(git_signature_bytes) = hex_decode(git_signature) else {
        debug!("Signature header is not valid hex");
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);

    // Constant-time comparison; a length mismatch is just a failed verify
    mac.verify_slice(&git_signature_bytes).is_ok()
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
pub(crate) fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(payload);
    format!("{}{}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes()))
}
