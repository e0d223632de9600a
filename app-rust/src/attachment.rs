//! Loading image and PDF files as inline attachments.

use crate::{types::Attachment, ScholarError, ScholarResult};
use cognipath_sdk::InlineDataPart;
use std::{fs, path::Path};

/// Whether the model can read a file of this MIME type.
#[must_use]
pub fn is_supported(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || mime_type == "application/pdf"
}

impl Attachment {
    /// Encode in-memory bytes.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> ScholarResult<Self> {
        let mime_type = mime_type.into();
        if !is_supported(&mime_type) {
            return Err(ScholarError::InvalidInput(format!(
                "unsupported attachment type '{mime_type}', expected an image or a PDF"
            )));
        }
        let InlineDataPart { data, mime_type } = InlineDataPart::from_bytes(bytes, mime_type);
        Ok(Self {
            name: name.into(),
            mime_type,
            data,
        })
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> ScholarResult<Self> {
        let path = path.as_ref();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");
        let bytes = fs::read(path).map_err(|source| ScholarError::Attachment {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        tracing::debug!(%name, mime_type, bytes = bytes.len(), "loaded attachment");
        Self::from_bytes(name, mime_type, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_images_as_base64() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.png");
        fs::write(&path, b"hello").unwrap();

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.name, "paper.png");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.data, "aGVsbG8=");
    }

    #[test]
    fn rejects_unsupported_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"x").unwrap();

        let err = Attachment::from_path(&path).unwrap_err();
        assert!(matches!(err, ScholarError::InvalidInput(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Attachment::from_path("/nonexistent/q.pdf").unwrap_err();
        assert!(matches!(err, ScholarError::Attachment { .. }));
    }
}
