//! Client-side constraints on doubt attachments.
//!
//! The server enforces the same limits, but an oversized or unsupported file
//! is rejected here before any request is built: at most 16 MB, and only
//! JPEG, PNG, GIF, or PDF.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAX_ATTACHMENT_BYTES: u64 = 16 * 1024 * 1024;

/// A validated attachment, ready to become a multipart file part.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("attachment not found: {0}")]
    NotFound(String),
    #[error("file size must be less than 16MB")]
    TooLarge,
    #[error("please upload only JPG, PNG, GIF, or PDF files")]
    UnsupportedType,
}

/// Map a file extension to the MIME types the server accepts.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

pub fn validate_attachment(path: &Path) -> Result<Attachment, AttachmentError> {
    let meta = std::fs::metadata(path)
        .map_err(|_| AttachmentError::NotFound(path.display().to_string()))?;
    if meta.len() > MAX_ATTACHMENT_BYTES {
        return Err(AttachmentError::TooLarge);
    }

    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .ok_or(AttachmentError::UnsupportedType)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();

    Ok(Attachment {
        path: path.to_path_buf(),
        file_name,
        mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("studyhall_test_{}", name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("gif"), Some("image/gif"));
        assert_eq!(mime_for_extension("pdf"), Some("application/pdf"));
        assert_eq!(mime_for_extension("exe"), None);
        assert_eq!(mime_for_extension("txt"), None);
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = validate_attachment(Path::new("/no/such/file.png")).unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let path = temp_file("notes.txt", b"plain text");
        let err = validate_attachment(&path).unwrap_err();
        assert_eq!(err, AttachmentError::UnsupportedType);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_oversized_file_rejected() {
        let path = temp_file("big.png", b"");
        let f = std::fs::OpenOptions::new().write(true).open(&path).unwrap();
        f.set_len(MAX_ATTACHMENT_BYTES + 1).unwrap();
        let err = validate_attachment(&path).unwrap_err();
        assert_eq!(err, AttachmentError::TooLarge);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_valid_attachment_accepted() {
        let path = temp_file("sketch.png", b"\x89PNG");
        let att = validate_attachment(&path).unwrap();
        assert_eq!(att.mime, "image/png");
        assert_eq!(att.file_name, "studyhall_test_sketch.png");
        let _ = std::fs::remove_file(&path);
    }
}
