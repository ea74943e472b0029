//! Per-page PDF text extraction backed by lopdf.

use std::path::Path;

use finbrief_core::config::IngestConfig;
use finbrief_core::constants::PAGE_SEPARATOR;
use finbrief_core::errors::{ExtractionError, FinbriefResult};
use finbrief_observability::events;
use lopdf::Document;
use tracing::{debug, warn};

/// Extracted text plus the number of pages that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub pages: usize,
}

/// Reads a PDF page by page and concatenates the text in page order.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    skip_blank_pages: bool,
}

impl PdfExtractor {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            skip_blank_pages: config.skip_blank_pages,
        }
    }

    /// Extract the text of every page of the document at `path`.
    pub fn extract(&self, path: impl AsRef<Path>) -> FinbriefResult<ExtractedDocument> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(ExtractionError::FileNotFound { path: shown }.into());
        }

        let document = Document::load(path).map_err(|e| ExtractionError::ReadFailed {
            path: shown.clone(),
            reason: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(ExtractionError::NoPages { path: shown }.into());
        }
        debug!(path = %shown, pages = page_numbers.len(), "extracting pages");

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page in page_numbers {
            match document.extract_text(&[page]) {
                Ok(text) => pages.push((page, text)),
                Err(e) if self.skip_blank_pages => {
                    warn!(page, error = %e, "skipping unreadable page");
                }
                Err(e) => {
                    return Err(ExtractionError::PageUnreadable {
                        page,
                        reason: e.to_string(),
                    }
                    .into());
                }
            }
        }

        let extracted = assemble_pages(pages, self.skip_blank_pages)?;
        events::text_extracted(&shown, extracted.pages, extracted.text.chars().count());
        Ok(extracted)
    }
}

/// Join page texts in the given order, each followed by a blank line, then trim.
///
/// A page with only whitespace is an error unless `skip_blank_pages` is set.
pub fn assemble_pages(
    pages: Vec<(u32, String)>,
    skip_blank_pages: bool,
) -> FinbriefResult<ExtractedDocument> {
    let mut text = String::new();
    let mut used = 0;

    for (page, page_text) in pages {
        if page_text.trim().is_empty() {
            if skip_blank_pages {
                warn!(page, "skipping page with no text");
                continue;
            }
            return Err(ExtractionError::EmptyPage { page }.into());
        }
        text.push_str(&page_text);
        text.push_str(PAGE_SEPARATOR);
        used += 1;
    }

    Ok(ExtractedDocument {
        text: text.trim().to_string(),
        pages: used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use finbrief_core::FinbriefError;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write a PDF with one page per entry, each showing its text in Courier.
    fn write_pdf(page_texts: &[&str]) -> NamedTempFile {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let file = NamedTempFile::new().unwrap();
        doc.save(file.path()).unwrap();
        file
    }

    #[test]
    fn pages_are_joined_with_blank_lines_in_order() {
        let pages = vec![
            (1, "First page text".to_string()),
            (2, "Second page text".to_string()),
        ];
        let doc = assemble_pages(pages, false).unwrap();
        assert_eq!(doc.text, "First page text\n\nSecond page text");
        assert_eq!(doc.pages, 2);
    }

    #[test]
    fn blank_page_fails_by_default() {
        let pages = vec![(1, "Cover".to_string()), (2, "  \n ".to_string())];
        let err = assemble_pages(pages, false).unwrap_err();
        assert!(matches!(
            err,
            FinbriefError::ExtractionError(ExtractionError::EmptyPage { page: 2 })
        ));
    }

    #[test]
    fn blank_page_is_skipped_when_configured() {
        let pages = vec![(1, String::new()), (2, "Body".to_string())];
        let doc = assemble_pages(pages, true).unwrap();
        assert_eq!(doc.text, "Body");
        assert_eq!(doc.pages, 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = PdfExtractor::default()
            .extract("/nonexistent/path/to/report.pdf")
            .unwrap_err();
        assert!(matches!(
            err,
            FinbriefError::ExtractionError(ExtractionError::FileNotFound { .. })
        ));
    }

    #[test]
    fn invalid_file_is_a_read_failure() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"This is not a valid PDF").unwrap();
        temp_file.flush().unwrap();

        let err = PdfExtractor::default().extract(temp_file.path()).unwrap_err();
        assert!(matches!(
            err,
            FinbriefError::ExtractionError(ExtractionError::ReadFailed { .. })
        ));
    }

    #[test]
    fn pdf_pages_are_extracted_in_order() {
        let file = write_pdf(&["Revenue grew strongly in 2024", "Operating margin improved"]);
        let doc = PdfExtractor::default().extract(file.path()).unwrap();

        assert_eq!(doc.pages, 2);
        assert!(doc.text.starts_with("Revenue grew strongly in 2024"));
        assert!(doc.text.ends_with("Operating margin improved"));
        let between = &doc.text["Revenue grew strongly in 2024".len()
            ..doc.text.len() - "Operating margin improved".len()];
        assert!(between.contains("\n\n"));
        assert!(between.trim().is_empty());
    }

    #[test]
    fn pdf_with_blank_page_fails_by_default() {
        let file = write_pdf(&["Net income improved to 824 million", "   "]);
        let err = PdfExtractor::default().extract(file.path()).unwrap_err();
        assert!(matches!(
            err,
            FinbriefError::ExtractionError(ExtractionError::EmptyPage { page: 2 })
        ));
    }

    #[test]
    fn pdf_blank_page_is_skipped_when_configured() {
        let file = write_pdf(&["   ", "Net income improved to 824 million"]);
        let config = IngestConfig {
            skip_blank_pages: true,
            ..IngestConfig::default()
        };
        let doc = PdfExtractor::new(&config).extract(file.path()).unwrap();
        assert_eq!(doc.pages, 1);
        assert_eq!(doc.text, "Net income improved to 824 million");
    }
}
