//! PDF to text line extraction.
//!
//! Text is pulled page by page with `lopdf`, split into lines, trimmed, and
//! written one non-empty line per output line.

use std::io::Write;
use std::path::Path;

use log::{error, info};
use lopdf::Document;

use crate::utils::io_utils::{bytes_from_file, create_writer};
use crate::Result;

/// Counts reported by a successful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractSummary {
    pub pages: usize,
    pub lines: usize,
}

/// Writes the trimmed, non-empty lines of every page text and returns the line count.
pub fn write_page_lines<I, S, W>(pages: I, writer: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut count = 0;
    for page in pages {
        for line in page.as_ref().lines().map(str::trim).filter(|line| !line.is_empty()) {
            writeln!(writer, "{}", line)?;
            count += 1;
        }
    }
    Ok(count)
}

/// Extracts the text of `pdf_path` into `output_path`, propagating any failure.
///
/// The whole document is read before the output file is created, so a PDF
/// that cannot be opened or decoded leaves no output behind.
pub fn try_extract_pdf_to_text<P: AsRef<Path>, Q: AsRef<Path>>(pdf_path: P, output_path: Q) -> Result<ExtractSummary> {
    let data = bytes_from_file(pdf_path.as_ref())?;
    let document = Document::load_mem(&data)?;

    let pages = document.get_pages();
    let mut texts = Vec::with_capacity(pages.len());
    for &page_no in pages.keys() {
        texts.push(document.extract_text(&[page_no])?);
    }

    let mut writer = create_writer(output_path.as_ref())?;
    let lines = write_page_lines(&texts, &mut writer)?;
    writer.flush()?;

    let summary = ExtractSummary { pages: texts.len(), lines };
    info!(
        "Extracted {} lines from {} pages of {}",
        summary.lines,
        summary.pages,
        pdf_path.as_ref().display()
    );
    Ok(summary)
}

/// Best-effort extraction: reports the outcome on the console and never fails.
///
/// Returns `None` when anything went wrong; the error has already been
/// logged and printed.
pub fn extract_pdf_to_text<P: AsRef<Path>, Q: AsRef<Path>>(pdf_path: P, output_path: Q) -> Option<ExtractSummary> {
    match try_extract_pdf_to_text(pdf_path.as_ref(), output_path.as_ref()) {
        Ok(summary) => {
            println!("Text successfully extracted to {}", output_path.as_ref().display());
            Some(summary)
        }
        Err(e) => {
            error!("PDF extraction from {} failed: {}", pdf_path.as_ref().display(), e);
            println!("An error occurred: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Writes a PDF with one page per entry of `texts`, each showing its text on one line.
    fn write_pdf(path: &Path, texts: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::from(page_id));
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
        doc.save(path).unwrap();
    }

    #[test]
    fn test_pages_are_extracted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("words.pdf");
        let output = dir.path().join("words.txt");
        write_pdf(&pdf, &["apple", "zebra"]);

        let summary = extract_pdf_to_text(&pdf, &output);
        assert_eq!(summary, Some(ExtractSummary { pages: 2, lines: 2 }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "apple\nzebra\n");
    }

    #[test]
    fn test_page_lines_are_trimmed_and_blank_lines_dropped() {
        let pages = ["  apple (n)  \n\n   \nrun (v)\r\n", "", "\tzebra (n)"];
        let mut out = Vec::new();
        let count = write_page_lines(pages, &mut out).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "apple (n)\nrun (v)\nzebra (n)\n");
    }

    #[test]
    fn test_missing_pdf_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        assert_eq!(extract_pdf_to_text(dir.path().join("missing.pdf"), &output), None);
        assert!(!output.exists());
    }

    #[test]
    fn test_corrupt_pdf_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("broken.pdf");
        std::fs::write(&pdf, b"this is not a pdf").unwrap();
        let output = dir.path().join("out.txt");
        let err = try_extract_pdf_to_text(&pdf, &output).unwrap_err();
        assert!(matches!(err, crate::WordSetError::Pdf { .. }));
        assert!(!output.exists());
    }
}
