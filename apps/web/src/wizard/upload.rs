//! Drop-zone filter for CV uploads.
//!
//! A drop is accepted only when it carries exactly one file whose MIME type or
//! extension is in the accept map. Anything else is refused silently; the
//! caller just sees `None`.

use bytes::Bytes;
use serde::Serialize;

/// (MIME type, extension) pairs the drop zone accepts.
pub const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("application/pdf", ".pdf"),
    ("application/msword", ".doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
];

pub const MAX_FILES: usize = 1;

/// A file offered to the drop zone, before filtering.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub mime: Option<String>,
    pub contents: Bytes,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, contents: Bytes) -> Self {
        Self {
            name: name.into(),
            mime,
            contents,
        }
    }
}

/// A file that passed the drop-zone filter. Only [`accept_drop`] builds one.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    mime: String,
    contents: Bytes,
}

impl UploadedFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn size(&self) -> usize {
        self.contents.len()
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            name: self.name.clone(),
            mime: self.mime.clone(),
            size_bytes: self.size(),
        }
    }
}

/// Serializable view of an uploaded file, without its contents.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub mime: String,
    pub size_bytes: usize,
}

/// Applies the accept map and the single-file limit to a drop.
pub fn accept_drop(mut candidates: Vec<CandidateFile>) -> Option<UploadedFile> {
    if candidates.len() != MAX_FILES {
        return None;
    }
    let candidate = candidates.pop()?;
    let mime = resolve_accepted_mime(&candidate)?;
    Some(UploadedFile {
        name: candidate.name,
        mime: mime.to_string(),
        contents: candidate.contents,
    })
}

/// Returns the canonical MIME type when the candidate matches the accept map,
/// by declared type first and by file extension second.
fn resolve_accepted_mime(candidate: &CandidateFile) -> Option<&'static str> {
    let declared = candidate
        .mime
        .as_deref()
        .map(|m| m.split(';').next().unwrap_or(m).trim().to_ascii_lowercase());

    if let Some(declared) = declared.as_deref() {
        if let Some((mime, _)) = ACCEPTED_TYPES.iter().find(|(mime, _)| *mime == declared) {
            return Some(*mime);
        }
    }

    let name = candidate.name.to_ascii_lowercase();
    ACCEPTED_TYPES
        .iter()
        .find(|(_, ext)| name.ends_with(ext))
        .map(|(mime, _)| *mime)
}

/// `accept` attribute value for the upload input.
pub fn accept_attribute() -> String {
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(mime, ext)| [*ext, *mime])
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, mime: Option<&str>) -> CandidateFile {
        CandidateFile::new(name, mime.map(String::from), Bytes::from_static(b"%PDF-1.4"))
    }

    #[test]
    fn test_accepts_pdf_by_mime() {
        let file = accept_drop(vec![candidate("cv.bin", Some("application/pdf"))]).unwrap();
        assert_eq!(file.name(), "cv.bin");
        assert_eq!(file.mime(), "application/pdf");
        assert_eq!(file.size(), 8);
    }

    #[test]
    fn test_accepts_docx_by_extension_when_mime_is_generic() {
        let file = accept_drop(vec![candidate(
            "Resume.DOCX",
            Some("application/octet-stream"),
        )])
        .unwrap();
        assert_eq!(
            file.mime(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_accepts_doc_without_declared_mime() {
        let file = accept_drop(vec![candidate("old-cv.doc", None)]).unwrap();
        assert_eq!(file.mime(), "application/msword");
    }

    #[test]
    fn test_mime_parameters_are_ignored() {
        let file = accept_drop(vec![candidate("cv", Some("Application/PDF; charset=binary"))]);
        assert!(file.is_some());
    }

    #[test]
    fn test_rejects_unlisted_type() {
        assert!(accept_drop(vec![candidate("photo.png", Some("image/png"))]).is_none());
        assert!(accept_drop(vec![candidate("notes.txt", None)]).is_none());
    }

    #[test]
    fn test_rejects_empty_and_multi_file_drops() {
        assert!(accept_drop(vec![]).is_none());
        assert!(accept_drop(vec![
            candidate("a.pdf", Some("application/pdf")),
            candidate("b.pdf", Some("application/pdf")),
        ])
        .is_none());
    }

    #[test]
    fn test_size_is_not_checked() {
        let big = CandidateFile::new(
            "big.pdf",
            Some("application/pdf".to_string()),
            Bytes::from(vec![0u8; 6 * 1024 * 1024]),
        );
        assert!(accept_drop(vec![big]).is_some());
    }

    #[test]
    fn test_accept_attribute_lists_every_extension() {
        let attr = accept_attribute();
        assert!(attr.contains(".pdf"));
        assert!(attr.contains(".doc,"));
        assert!(attr.contains(".docx"));
    }
}
