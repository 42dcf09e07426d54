//! Loading user-selected files into data URIs.

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;

use crate::error::{PostResult, ValidationError};

/// Reads `path` fully and encodes it as a `data:` URI.
///
/// The media type is guessed from the file extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn data_uri(path: &Path) -> anyhow::Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(encode_data_uri(mime.essence_str(), &bytes))
}

/// Like [`data_uri`], but only accepts files whose extension names an image
/// type.
///
/// The type is checked before the file is read.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] for non-image files and
/// [`crate::error::PostError::Other`] when the file cannot be read.
pub fn image_data_uri(path: &Path) -> PostResult<String> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(ValidationError::field(
            "image",
            format!("{} is not an image ({})", path.display(), mime.essence_str()),
        )
        .into());
    }
    tracing::debug!(path = %path.display(), mime = %mime, "loading image");
    Ok(data_uri(path)?)
}

/// Builds a base64 `data:` URI from raw bytes.
#[must_use]
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostError;
    use tempfile::TempDir;

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(
            encode_data_uri("image/png", b"hi"),
            "data:image/png;base64,aGk="
        );
    }

    #[test]
    fn test_image_data_uri_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("avatar.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        let uri = image_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_image_data_uri_rejects_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let err = image_data_uri(&path).unwrap_err();
        assert!(matches!(err, PostError::Validation(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = image_data_uri(&dir.path().join("gone.jpg")).unwrap_err();
        assert!(matches!(err, PostError::Other(_)));
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.zzz");
        fs::write(&path, [1u8, 2, 3]).unwrap();
        assert!(data_uri(&path)
            .unwrap()
            .starts_with("data:application/octet-stream;base64,"));
    }
}
