//! `data:` URL encoding for locally picked images.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Value for the file picker's `accept` attribute.
pub const ACCEPTED_IMAGE_TYPES: &str = ".jpg, .png, .svg, .jpeg";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encode `bytes` as `data:<mime>;base64,<payload>`.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime.trim()
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guess an image MIME type from a file name's extension.
pub fn mime_for_file_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_header() {
        let url = encode("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn empty_mime_falls_back() {
        assert_eq!(encode(" ", b"hi"), "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(mime_for_file_name("me.JPG"), "image/jpeg");
        assert_eq!(mime_for_file_name("photo.final.jpeg"), "image/jpeg");
        assert_eq!(mime_for_file_name("logo.svg"), "image/svg+xml");
        assert_eq!(mime_for_file_name("README"), FALLBACK_MIME);
    }
}
