//! Declarative layout for printable documents.
//!
//! A document template is a table of named slots (field -> page position),
//! the renderer walks the table and places whatever values the caller
//! resolved. Layout stays data, the bookkeeping code never sees a
//! coordinate.

use anyhow::{anyhow, Result};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference,
};
use std::collections::HashMap;
use std::io::BufWriter;

/// A4 portrait
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_X_MM: f32 = 18.0;

#[derive(Clone, Copy)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// position (mm from the bottom left corner) and size of one piece of text
#[derive(Clone, Copy)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: FontStyle,
}

impl Slot {
    pub const fn new(x: f32, y: f32, size: f32) -> Slot {
        Slot {
            x,
            y,
            size,
            style: FontStyle::Regular,
        }
    }

    pub const fn bold(x: f32, y: f32, size: f32) -> Slot {
        Slot {
            x,
            y,
            size,
            style: FontStyle::Bold,
        }
    }
}

/// a labeled value slot, the field is skipped entirely when the caller
/// resolved no value for its key
pub struct Field {
    pub key: &'static str,
    pub label: Option<(&'static str, Slot)>,
    pub value: Slot,
}

/// static layout of a printable document
pub struct DocTemplate {
    pub title: &'static str,
    /// fixed text independent of the record being printed
    pub headings: &'static [(&'static str, Slot)],
    pub fields: &'static [Field],
    /// horizontal rules as (x1, x2, y) triples
    pub rules: &'static [(f32, f32, f32)],
}

pub struct Renderer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Renderer {
    pub fn new(title: &str) -> Result<Renderer> {
        let (doc, page, layer) = printpdf::PdfDocument::new(
            title,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );

        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("failed to load builtin font: {}", e))?;

        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("failed to load builtin font: {}", e))?;

        Ok(Renderer {
            doc,
            layer,
            regular,
            bold,
        })
    }

    /// draws a bitmap stretched over the whole page, must be called before
    /// any text so the letterhead stays behind it
    pub fn background_image(&self, bytes: &[u8]) -> Result<()> {
        const DPI: f32 = 300.0;
        const MM_PER_INCH: f32 = 25.4;

        let decoded = printpdf::image_crate::load_from_memory(bytes)?;
        let image = printpdf::Image::from_dynamic_image(&decoded);

        let natural_width_mm = image.image.width.0 as f32 / DPI * MM_PER_INCH;
        let natural_height_mm = image.image.height.0 as f32 / DPI * MM_PER_INCH;

        image.add_to_layer(
            self.layer.clone(),
            printpdf::ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(0.0)),
                rotate: None,
                scale_x: Some(PAGE_WIDTH_MM / natural_width_mm.max(0.01)),
                scale_y: Some(PAGE_HEIGHT_MM / natural_height_mm.max(0.01)),
                dpi: Some(DPI),
            },
        );

        Ok(())
    }

    pub fn text(&self, slot: &Slot, text: &str) {
        let font = match slot.style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        };

        self.layer
            .use_text(text, slot.size, Mm(slot.x), Mm(slot.y), font);
    }

    pub fn rule(&self, x1: f32, x2: f32, y: f32) {
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(printpdf::Line {
            points: vec![
                (printpdf::Point::new(Mm(x1), Mm(y)), false),
                (printpdf::Point::new(Mm(x2), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    /// places a template and the resolved values of its fields
    pub fn render(&self, template: &DocTemplate, values: &HashMap<&'static str, String>) {
        for (text, slot) in template.headings {
            self.text(slot, text);
        }

        for field in template.fields {
            let Some(value) = values.get(field.key) else {
                continue;
            };

            if let Some((label, label_slot)) = &field.label {
                self.text(label_slot, label);
            }

            self.text(&field.value, value);
        }

        for (x1, x2, y) in template.rules {
            self.rule(*x1, *x2, *y);
        }
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        let mut writer = BufWriter::new(Vec::<u8>::new());

        self.doc
            .save(&mut writer)
            .map_err(|e| anyhow!("failed to save pdf: {}", e))?;

        Ok(writer
            .into_inner()
            .map_err(|e| anyhow!("failed to flush pdf writer: {}", e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_TEMPLATE: DocTemplate = DocTemplate {
        title: "Test",
        headings: &[("TEST DOCUMENT", Slot::bold(80.0, 270.0, 16.0))],
        fields: &[
            Field {
                key: "present",
                label: Some(("Present:", Slot::new(18.0, 250.0, 10.0))),
                value: Slot::new(60.0, 250.0, 10.0),
            },
            Field {
                key: "absent",
                label: Some(("Absent:", Slot::new(18.0, 240.0, 10.0))),
                value: Slot::new(60.0, 240.0, 10.0),
            },
        ],
        rules: &[(18.0, 192.0, 235.0)],
    };

    #[test]
    fn renders_a_pdf_with_the_resolved_fields() {
        let renderer = Renderer::new("Test").unwrap();

        let mut values = HashMap::new();
        values.insert("present", String::from("value"));

        renderer.render(&TEST_TEMPLATE, &values);

        let bytes = renderer.finish().unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(!bytes.is_empty());
    }
}
