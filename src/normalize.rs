//! Document Normalizer: converts user input (pasted text or an uploaded
//! PDF/DOCX/TXT/MD file) into the single canonical form the generation
//! client accepts.
//!
//! PDFs are not text-extracted locally — the raw bytes are base64-encoded
//! and forwarded to the generation backend as inline binary data. DOCX
//! files are reduced to the plain text of their `<w:t>` runs (styling and
//! images ignored). Everything else is read as UTF-8 text.

use std::io::Read;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::PipelineError;

pub const MIME_PDF: &str = "application/pdf";

/// Maximum decompressed bytes read from a single ZIP entry (zip-bomb
/// protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Canonical input form handed to the generation client.
///
/// Exactly one variant per request; constructed per request and discarded
/// after the generation call returns.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedInput {
    /// Plain UTF-8 content.
    Text { content: String },
    /// Base64-encoded binary content tagged with its media type.
    Binary { data: String, mime_type: String },
}

impl NormalizedInput {
    /// True when the input carries no usable content. Callers must reject
    /// empty input before invoking generation.
    pub fn is_empty(&self) -> bool {
        match self {
            NormalizedInput::Text { content } => content.trim().is_empty(),
            NormalizedInput::Binary { data, .. } => data.is_empty(),
        }
    }
}

/// Normalizes pasted text. Identity — empty strings are passed through and
/// rejected later by the generation preconditions.
pub fn normalize_text(text: &str) -> NormalizedInput {
    NormalizedInput::Text {
        content: text.to_string(),
    }
}

/// Normalizes an uploaded file by its name suffix.
///
/// - `.pdf` → base64-encoded bytes, `application/pdf`
/// - `.docx` → extracted plain text
/// - anything else → UTF-8 text
pub fn normalize_file(path: &Path) -> Result<NormalizedInput, PipelineError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => {
            let bytes = std::fs::read(path).map_err(|e| ingestion(&file_name, e))?;
            Ok(NormalizedInput::Binary {
                data: BASE64.encode(&bytes),
                mime_type: MIME_PDF.to_string(),
            })
        }
        "docx" => {
            let bytes = std::fs::read(path).map_err(|e| ingestion(&file_name, e))?;
            let text = extract_docx(&bytes, &file_name)?;
            Ok(NormalizedInput::Text { content: text })
        }
        _ => {
            let text = std::fs::read_to_string(path).map_err(|e| ingestion(&file_name, e))?;
            Ok(NormalizedInput::Text { content: text })
        }
    }
}

fn ingestion(file: &str, err: impl std::fmt::Display) -> PipelineError {
    PipelineError::Ingestion {
        file: file.to_string(),
        reason: err.to_string(),
    }
}

/// Extracts the plain text of a DOCX document from its `word/document.xml`
/// text runs.
pub fn extract_docx(bytes: &[u8], file_name: &str) -> Result<String, PipelineError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| ingestion(file_name, e))?;

    let mut doc_xml = Vec::new();
    {
        let entry = archive
            .by_name("word/document.xml")
            .map_err(|_| ingestion(file_name, "word/document.xml not found"))?;
        entry
            .take(MAX_XML_ENTRY_BYTES)
            .read_to_end(&mut doc_xml)
            .map_err(|e| ingestion(file_name, e))?;
    }
    if doc_xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err(ingestion(file_name, "word/document.xml exceeds size limit"));
    }

    extract_w_t_elements(&doc_xml, file_name)
}

/// Concatenates the text content of all `<w:t>` elements, separating runs
/// with spaces so words from adjacent paragraphs don't fuse.
fn extract_w_t_elements(xml: &[u8], file_name: &str) -> Result<String, PipelineError> {
    let mut out = String::new();
    let mut reader = quick_xml::Reader::from_reader(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    if let Ok(quick_xml::events::Event::Text(te)) = reader.read_event_into(&mut buf)
                    {
                        if !out.is_empty() {
                            out.push(' ');
                        }
                        out.push_str(te.unescape().unwrap_or_default().as_ref());
                    }
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(ingestion(file_name, e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fake_docx(document_xml: &str) -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn pasted_text_is_identity() {
        let input = normalize_text("How to brew pour-over coffee");
        assert_eq!(
            input,
            NormalizedInput::Text {
                content: "How to brew pour-over coffee".to_string()
            }
        );
    }

    #[test]
    fn empty_text_is_valid_but_flagged_empty() {
        let input = normalize_text("");
        assert!(input.is_empty());
    }

    #[test]
    fn docx_text_runs_are_extracted() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Hello</w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let text = extract_docx(&fake_docx(xml), "note.docx").unwrap();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn docx_without_document_xml_fails_with_file_name() {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("other.xml", options).unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }
        let err = extract_docx(&cursor.into_inner(), "broken.docx").unwrap_err();
        assert!(err.to_string().contains("broken.docx"));
    }

    #[test]
    fn corrupt_docx_is_an_ingestion_error() {
        let err = extract_docx(b"not a zip archive", "corrupt.docx").unwrap_err();
        assert!(matches!(err, PipelineError::Ingestion { .. }));
    }

    #[test]
    fn pdf_file_is_base64_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

        match normalize_file(&path).unwrap() {
            NormalizedInput::Binary { data, mime_type } => {
                assert_eq!(mime_type, MIME_PDF);
                assert_eq!(BASE64.decode(&data).unwrap(), b"%PDF-1.4 fake");
            }
            other => panic!("expected binary input, got {:?}", other),
        }
    }

    #[test]
    fn markdown_file_is_read_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "# Title\n\nBody.").unwrap();

        assert_eq!(
            normalize_file(&path).unwrap(),
            NormalizedInput::Text {
                content: "# Title\n\nBody.".to_string()
            }
        );
    }

    #[test]
    fn non_utf8_text_file_is_an_ingestion_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0xffu8, 0xfe, 0x41]).unwrap();

        let err = normalize_file(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Ingestion { .. }));
        assert!(err.to_string().contains("latin1.txt"));
    }
}
