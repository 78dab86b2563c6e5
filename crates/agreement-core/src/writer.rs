//! Low-level PDF assembly on top of lopdf.
//!
//! The writer keeps a top-down cursor convention: callers position text
//! by baseline distance from the top edge of the page and the writer
//! flips into PDF's bottom-up coordinate space when emitting operators.
//! Content streams are written uncompressed and the trailer carries no
//! timestamps, so identical drawing sequences produce byte-identical
//! files.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::assets::Letterhead;
use crate::error::RenderError;
use crate::metrics::Font;

/// Fixed page geometry for the rendered document.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageGeometry {
    /// US Letter portrait in points, with a uniform 51pt (18mm) margin.
    pub const LETTER: PageGeometry = PageGeometry {
        width: 612.0,
        height: 792.0,
        margin: 51.0,
    };

    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Lowest baseline (measured from the top edge) a line may occupy.
    pub fn bottom_limit(&self) -> f64 {
        self.height - self.margin
    }
}

/// Accumulates drawing operations page by page and assembles the final
/// document on `finish`.
pub struct DocumentWriter {
    geometry: PageGeometry,
    completed: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    letterhead: Option<Stream>,
}

impl DocumentWriter {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            completed: Vec::new(),
            current: Vec::new(),
            letterhead: None,
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// Pages emitted so far, counting the page in progress.
    pub fn page_count(&self) -> usize {
        self.completed.len() + 1
    }

    /// Close the page in progress and start a fresh one.
    pub fn start_new_page(&mut self) {
        let ops = std::mem::take(&mut self.current);
        self.completed.push(ops);
    }

    /// Draw `text` with its baseline `y` points below the top edge.
    pub fn text(&mut self, x: f64, y: f64, font: Font, size: f64, text: &str) {
        let baseline = self.geometry.height - y;
        self.current.push(Operation::new("BT", vec![]));
        self.current.push(Operation::new(
            "Tf",
            vec![
                Object::Name(font.resource_name().into()),
                Object::Real(size as f32),
            ],
        ));
        self.current.push(Operation::new(
            "Td",
            vec![Object::Real(x as f32), Object::Real(baseline as f32)],
        ));
        self.current.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_winansi(text),
                StringFormat::Literal,
            )],
        ));
        self.current.push(Operation::new("ET", vec![]));
    }

    /// Stroke a horizontal rule from `x1` to `x2`, `y` points below the
    /// top edge, in the given stroke colour.
    pub fn rule(&mut self, x1: f64, x2: f64, y: f64, line_width: f64, rgb: (f64, f64, f64)) {
        let py = self.geometry.height - y;
        self.current.push(Operation::new("q", vec![]));
        self.current.push(Operation::new(
            "RG",
            vec![
                Object::Real(rgb.0 as f32),
                Object::Real(rgb.1 as f32),
                Object::Real(rgb.2 as f32),
            ],
        ));
        self.current
            .push(Operation::new("w", vec![Object::Real(line_width as f32)]));
        self.current.push(Operation::new(
            "m",
            vec![Object::Real(x1 as f32), Object::Real(py as f32)],
        ));
        self.current.push(Operation::new(
            "l",
            vec![Object::Real(x2 as f32), Object::Real(py as f32)],
        ));
        self.current.push(Operation::new("S", vec![]));
        self.current.push(Operation::new("Q", vec![]));
    }

    /// Register the letterhead image for this document. Must be called
    /// before `draw_letterhead`.
    pub fn set_letterhead(&mut self, image: &Letterhead) -> Result<(), RenderError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(6));
        encoder
            .write_all(&image.rgb)
            .and_then(|_| encoder.finish())
            .map(|compressed| {
                self.letterhead = Some(Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => image.width as i64,
                        "Height" => image.height as i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                        "Filter" => "FlateDecode",
                    },
                    compressed,
                ));
            })
            .map_err(|e| RenderError::Document(e.to_string()))
    }

    /// Place the registered letterhead with its top-left corner at
    /// (`x`, `y` points below the top edge), scaled to `w` x `h`.
    pub fn draw_letterhead(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let bottom = self.geometry.height - y - h;
        self.current.push(Operation::new("q", vec![]));
        self.current.push(Operation::new(
            "cm",
            vec![
                Object::Real(w as f32),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(h as f32),
                Object::Real(x as f32),
                Object::Real(bottom as f32),
            ],
        ));
        self.current
            .push(Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]));
        self.current.push(Operation::new("Q", vec![]));
    }

    /// Assemble the page tree and serialize the document.
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.completed.push(self.current);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_regular = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Font::Helvetica.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Font::HelveticaBold.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });

        let mut resources = dictionary! {
            "Font" => dictionary! {
                "F1" => Object::Reference(font_regular),
                "F2" => Object::Reference(font_bold),
            },
        };
        if let Some(stream) = self.letterhead.take() {
            let image_id = doc.add_object(stream);
            let mut xobjects = Dictionary::new();
            xobjects.set("Im1", Object::Reference(image_id));
            resources.set("XObject", Object::Dictionary(xobjects));
        }
        let resources_id = doc.add_object(resources);

        let mut kids = Vec::new();
        for operations in self.completed.drain(..) {
            let content = Content { operations };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Document(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(self.geometry.width as f32),
                    Object::Real(self.geometry.height as f32),
                ],
                "Contents" => Object::Reference(content_id),
                "Resources" => Object::Reference(resources_id),
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Document(e.to_string()))?;
        Ok(bytes)
    }
}

/// Map text to WinAnsi bytes. ASCII passes through, the common
/// typographic punctuation gets its WinAnsi slot, anything else becomes
/// `?`.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_document_loads_back() {
        let mut writer = DocumentWriter::new(PageGeometry::LETTER);
        writer.text(51.0, 42.0, Font::Helvetica, 8.5, "Hello");
        let bytes = writer.finish().unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn page_breaks_produce_multiple_pages() {
        let mut writer = DocumentWriter::new(PageGeometry::LETTER);
        writer.text(51.0, 42.0, Font::Helvetica, 8.5, "page one");
        writer.start_new_page();
        writer.text(51.0, 42.0, Font::Helvetica, 8.5, "page two");
        assert_eq!(writer.page_count(), 2);

        let bytes = writer.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn content_streams_are_plain_text() {
        let mut writer = DocumentWriter::new(PageGeometry::LETTER);
        writer.text(51.0, 42.0, Font::HelveticaBold, 13.0, "Agreement");
        let bytes = writer.finish().unwrap();

        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("(Agreement)"));
        assert!(raw.contains("/F2"));
    }

    #[test]
    fn identical_drawing_is_byte_identical() {
        let render = || {
            let mut writer = DocumentWriter::new(PageGeometry::LETTER);
            writer.text(51.0, 42.0, Font::Helvetica, 8.5, "same");
            writer.rule(51.0, 561.0, 60.0, 1.7, (1.0, 0.8, 0.0));
            writer.finish().unwrap()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn letterhead_registers_an_xobject() {
        let banner = Letterhead::bundled().unwrap();
        let mut writer = DocumentWriter::new(PageGeometry::LETTER);
        writer.set_letterhead(&banner).unwrap();
        writer.draw_letterhead(51.0, 42.0, 396.0, 396.0 * banner.aspect());
        let bytes = writer.finish().unwrap();

        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("/Im1"));
        assert!(raw.contains("/XObject"));
    }

    #[test]
    fn winansi_passthrough_and_fallback() {
        assert_eq!(encode_winansi("Rent: $1650"), b"Rent: $1650".to_vec());
        assert_eq!(encode_winansi("\u{2019}"), vec![0x92]);
        assert_eq!(encode_winansi("\u{4E00}"), vec![b'?']);
    }
}
