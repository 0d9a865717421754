//! PDF text extraction using lopdf and pdf-extract.

use lopdf::{Document, Object};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            min_text_length: 50,
        }
    }

    /// Text shorter than this does not count as a text layer.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Whether any object in the document is an image XObject.
    ///
    /// Only the stream dictionaries are inspected; image data is never
    /// decoded.
    pub fn has_images(&self) -> bool {
        let Some(doc) = self.document.as_ref() else {
            return false;
        };

        let count = doc
            .objects
            .values()
            .filter(|object| is_image_object(object))
            .count();

        trace!("Found {} image objects", count);
        count > 0
    }
}

fn is_image_object(object: &Object) -> bool {
    let Object::Stream(stream) = object else {
        return false;
    };

    stream
        .dict
        .get(b"Subtype")
        .and_then(|subtype| subtype.as_name())
        .map(|name| name == b"Image")
        .unwrap_or(false)
}

/// Decide the PDF type from its text length and image presence.
fn classify(text_len: usize, has_images: bool, min_text_length: usize) -> PdfType {
    match (text_len >= min_text_length && text_len > 0, has_images) {
        (true, _) => PdfType::Text,
        (false, true) => PdfType::Image,
        (false, false) => PdfType::Empty,
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf_extract reads the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        let text_len = self
            .extract_text()
            .map(|text| text.trim().len())
            .unwrap_or(0);
        let has_images = self.has_images();

        let pdf_type = classify(text_len, has_images, self.min_text_length);
        debug!(
            "PDF analysis: {} chars text, has_images={} -> {:?}",
            text_len, has_images, pdf_type
        );
        pdf_type
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Stream};

    fn build_pdf(pages: usize, with_image: bool) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                })
                .into()
            })
            .collect();

        if with_image {
            doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => 1,
                    "Height" => 1,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                },
                vec![0u8],
            ));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
                "MediaBox" => vec![0.into(), 0.into(), 226.into(), 600.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(!extractor.has_images());
        assert!(extractor.extract_text().is_err());
    }

    #[test]
    fn test_load_counts_pages() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(2, false)).unwrap();

        assert_eq!(extractor.page_count(), 2);
        assert!(!extractor.has_images());
    }

    #[test]
    fn test_image_scan() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(1, true)).unwrap();

        assert!(extractor.has_images());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"%PDF-nope"), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(120, false, 50), PdfType::Text);
        assert_eq!(classify(120, true, 50), PdfType::Text);
        assert_eq!(classify(10, true, 50), PdfType::Image);
        assert_eq!(classify(10, false, 50), PdfType::Empty);
        assert_eq!(classify(0, false, 0), PdfType::Empty);
    }
}
