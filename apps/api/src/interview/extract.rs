//! Text Extractor — best-effort résumé text from an uploaded file.
//!
//! Never fails. A PDF the parser rejects (or panics on) yields empty text;
//! undecodable bytes in plain files are dropped.

use axum::body::Bytes;
use tracing::{debug, warn};

/// Extracts text from an uploaded file, choosing the decoder by extension.
pub async fn extract_text(bytes: Bytes, filename: &str) -> String {
    if !is_pdf(filename) {
        return decode_plain_text(&bytes);
    }

    let name = filename.to_string();
    // pdf-extract is CPU-bound and may panic on malformed input; a panic
    // surfaces here as a JoinError.
    match tokio::task::spawn_blocking(move || extract_pdf_text(&bytes)).await {
        Ok(text) => text,
        Err(e) => {
            warn!(filename = %name, "PDF parser aborted: {e}");
            String::new()
        }
    }
}

pub fn is_pdf(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

/// UTF-8 decode that silently drops invalid byte sequences.
pub fn decode_plain_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Concatenated text of every page. Pages without text contribute nothing.
pub fn extract_pdf_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) => {
            debug!(pages = pages.len(), "PDF text extracted");
            pages.concat()
        }
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAGE_RESUME: &[u8] = include_bytes!("../../tests/fixtures/two_page_resume.pdf");

    fn squash(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_is_pdf_by_extension() {
        assert!(is_pdf("resume.pdf"));
        assert!(is_pdf("Resume.PDF"));
        assert!(!is_pdf("resume.txt"));
        assert!(!is_pdf("pdf"));
        assert!(!is_pdf("resume.pdf.txt"));
    }

    #[test]
    fn test_plain_text_round_trips() {
        assert_eq!(decode_plain_text("Python and SQL".as_bytes()), "Python and SQL");
        assert_eq!(decode_plain_text("Zoë — café".as_bytes()), "Zoë — café");
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"Py\xffthon \xc3\x28SQL";
        assert_eq!(decode_plain_text(bytes), "Python (SQL");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_plain_text(b""), "");
    }

    #[test]
    fn test_garbage_pdf_yields_empty_text() {
        assert_eq!(extract_pdf_text(b"definitely not a pdf"), "");
    }

    #[test]
    fn test_pdf_pages_are_concatenated_in_order() {
        let text = squash(&extract_pdf_text(TWO_PAGE_RESUME));
        let first = text.find("Python and React").expect("page 1 text");
        let second = text
            .find("SQL and Machine Learning")
            .expect("page 2 text");
        assert!(text.starts_with("Jane Doe"), "got {text:?}");
        assert!(first < second);
        assert!(text.ends_with("References on request"), "got {text:?}");
    }

    #[tokio::test]
    async fn test_extract_text_parses_pdf_off_thread() {
        let text = extract_text(Bytes::from_static(TWO_PAGE_RESUME), "Resume.PDF").await;
        assert!(squash(&text).contains("Machine Learning"), "got {text:?}");
    }

    #[tokio::test]
    async fn test_extract_text_dispatches_on_extension() {
        let text = extract_text(Bytes::from_static(b"Java developer"), "cv.txt").await;
        assert_eq!(text, "Java developer");

        let text = extract_text(Bytes::from_static(b"Java developer"), "cv.pdf").await;
        assert_eq!(text, "");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let text = "é".repeat(600);
        let p = preview(&text, 500);
        assert_eq!(p.chars().count(), 500);
        assert_eq!(preview("short", 500), "short");
    }
}
