//! Minimal OOXML wordprocessing writer.
//!
//! Produces the handful of constructs a report needs — a bordered
//! two-column table, bold headings, forced page breaks, and centered
//! inline JPEG pictures — as a `word/document.xml` plus media parts inside
//! a zip container.

use std::io::{Seek, Write};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::AssembleError;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="jpeg" ContentType="image/jpeg"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><w:body>"#;

// A4 page with one-inch margins.
const DOCUMENT_CLOSE: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440"/></w:sectPr></w:body></w:document>"#;

fn xml_err(e: std::io::Error) -> AssembleError {
    AssembleError::DocxWrite(e.to_string())
}

fn zip_err(e: zip::result::ZipError) -> AssembleError {
    AssembleError::DocxWrite(format!("Failed to write package: {}", e))
}

/// Builder for one report document. Body content is accumulated as XML
/// events; [`DocxBuilder::write_into`] packages everything.
pub struct DocxBuilder {
    body: Writer<Vec<u8>>,
    media: Vec<Vec<u8>>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: Writer::new(Vec::new()),
            media: Vec::new(),
        }
    }

    fn start(&mut self, name: &str) -> Result<(), AssembleError> {
        self.body
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_err)
    }

    fn start_with(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), AssembleError> {
        let mut el = BytesStart::new(name);
        for &(key, value) in attrs {
            el.push_attribute((key, value));
        }
        self.body.write_event(Event::Start(el)).map_err(xml_err)
    }

    fn end(&mut self, name: &str) -> Result<(), AssembleError> {
        self.body
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), AssembleError> {
        let mut el = BytesStart::new(name);
        for &(key, value) in attrs {
            el.push_attribute((key, value));
        }
        self.body.write_event(Event::Empty(el)).map_err(xml_err)
    }

    fn text(&mut self, text: &str) -> Result<(), AssembleError> {
        self.start_with("w:t", &[("xml:space", "preserve")])?;
        self.body
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)?;
        self.end("w:t")
    }

    /// Full-width two-column table; every cell bottom-bordered, one row per
    /// `(label, value)` pair.
    pub fn add_header_table(&mut self, rows: &[(&str, &str)]) -> Result<(), AssembleError> {
        self.start("w:tbl")?;
        self.start("w:tblPr")?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        self.end("w:tblPr")?;

        for &(label, value) in rows {
            self.start("w:tr")?;
            for cell_text in [label, value] {
                self.start("w:tc")?;
                self.start("w:tcPr")?;
                self.start("w:tcBorders")?;
                self.empty("w:bottom", &[("w:val", "single"), ("w:sz", "4")])?;
                self.end("w:tcBorders")?;
                self.end("w:tcPr")?;
                self.start("w:p")?;
                self.start("w:r")?;
                self.text(cell_text)?;
                self.end("w:r")?;
                self.end("w:p")?;
                self.end("w:tc")?;
            }
            self.end("w:tr")?;
        }

        self.end("w:tbl")
    }

    /// Forces a page break.
    pub fn add_page_break(&mut self) -> Result<(), AssembleError> {
        self.start("w:p")?;
        self.start("w:r")?;
        self.empty("w:br", &[("w:type", "page")])?;
        self.end("w:r")?;
        self.end("w:p")
    }

    /// Left-aligned bold heading at 14 pt.
    pub fn add_heading(&mut self, text: &str) -> Result<(), AssembleError> {
        self.start("w:p")?;
        self.start("w:r")?;
        self.start("w:rPr")?;
        self.empty("w:b", &[])?;
        self.empty("w:sz", &[("w:val", "28")])?;
        self.end("w:rPr")?;
        self.text(text)?;
        self.end("w:r")?;
        self.end("w:p")
    }

    /// Centered inline picture at the given EMU extent. The JPEG bytes
    /// become `word/media/imageN.jpeg` with a matching relationship.
    pub fn add_image(&mut self, jpeg: Vec<u8>, emu_width: i64, emu_height: i64) -> Result<(), AssembleError> {
        self.media.push(jpeg);
        let number = self.media.len();
        let rel_id = format!("rId{}", number);
        let doc_pr_id = number.to_string();
        let name = format!("step_image_{}.jpg", number);
        let cx = emu_width.to_string();
        let cy = emu_height.to_string();

        self.start("w:p")?;
        self.start("w:pPr")?;
        self.empty("w:jc", &[("w:val", "center")])?;
        self.end("w:pPr")?;
        self.start("w:r")?;
        self.start("w:drawing")?;
        self.start_with(
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        self.empty("wp:extent", &[("cx", &cx), ("cy", &cy)])?;
        self.empty("wp:docPr", &[("id", &doc_pr_id), ("name", &name)])?;
        self.start("a:graphic")?;
        self.start_with(
            "a:graphicData",
            &[(
                "uri",
                "http://schemas.openxmlformats.org/drawingml/2006/picture",
            )],
        )?;
        self.start("pic:pic")?;
        self.start("pic:nvPicPr")?;
        self.empty("pic:cNvPr", &[("id", &doc_pr_id), ("name", &name)])?;
        self.empty("pic:cNvPicPr", &[])?;
        self.end("pic:nvPicPr")?;
        self.start("pic:blipFill")?;
        self.empty("a:blip", &[("r:embed", &rel_id)])?;
        self.start("a:stretch")?;
        self.empty("a:fillRect", &[])?;
        self.end("a:stretch")?;
        self.end("pic:blipFill")?;
        self.start("pic:spPr")?;
        self.start("a:xfrm")?;
        self.empty("a:off", &[("x", "0"), ("y", "0")])?;
        self.empty("a:ext", &[("cx", &cx), ("cy", &cy)])?;
        self.end("a:xfrm")?;
        self.start_with("a:prstGeom", &[("prst", "rect")])?;
        self.empty("a:avLst", &[])?;
        self.end("a:prstGeom")?;
        self.end("pic:spPr")?;
        self.end("pic:pic")?;
        self.end("a:graphicData")?;
        self.end("a:graphic")?;
        self.end("wp:inline")?;
        self.end("w:drawing")?;
        self.end("w:r")?;
        self.end("w:p")
    }

    pub fn image_count(&self) -> usize {
        self.media.len()
    }

    fn document_rels_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for n in 1..=self.media.len() {
            xml.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image{n}.jpeg"/>"#
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }

    /// Writes the complete `.docx` package.
    pub fn write_into<W: Write + Seek>(self, writer: W) -> Result<(), AssembleError> {
        let rels = self.document_rels_xml();

        let mut document = Vec::with_capacity(DOCUMENT_OPEN.len() + DOCUMENT_CLOSE.len());
        document.extend_from_slice(DOCUMENT_OPEN.as_bytes());
        document.extend_from_slice(&self.body.into_inner());
        document.extend_from_slice(DOCUMENT_CLOSE.as_bytes());

        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).map_err(zip_err)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes()).map_err(xml_err)?;

        zip.start_file("_rels/.rels", options).map_err(zip_err)?;
        zip.write_all(ROOT_RELS_XML.as_bytes()).map_err(xml_err)?;

        zip.start_file("word/document.xml", options).map_err(zip_err)?;
        zip.write_all(&document).map_err(xml_err)?;

        zip.start_file("word/_rels/document.xml.rels", options)
            .map_err(zip_err)?;
        zip.write_all(rels.as_bytes()).map_err(xml_err)?;

        for (i, jpeg) in self.media.iter().enumerate() {
            zip.start_file(format!("word/media/image{}.jpeg", i + 1), options)
                .map_err(zip_err)?;
            zip.write_all(jpeg).map_err(xml_err)?;
        }

        zip.finish().map_err(zip_err)?;
        Ok(())
    }
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}
