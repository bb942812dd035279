//! Note export: renders a note into a single A4 document with base-14 fonts.
//!
//! Text is drawn in WinAnsi encoding. Characters outside it (emoji, CJK) are dropped,
//! so the same note renders identically in every viewer without embedding fonts.

use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::errors::AppError;
use crate::export::font_metrics::{get_metrics, FontFace};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN_X: f32 = 60.0;
const TOP_Y: f32 = 770.0;
const BOTTOM_Y: f32 = 72.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;

const TITLE_SIZE: f32 = 36.0;
const SUBTITLE_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 14.0;
/// Body line height as a multiple of the body font size.
const BODY_LEADING: f32 = 1.7;
const SIGNOFF_SIZE: f32 = 13.0;
const FOOTER_SIZE: f32 = 9.0;

/// Gray levels (0 = black, 1 = white).
const INK: f32 = 0.1;
const MUTED: f32 = 0.4;
const RULE: f32 = 0.88;

/// Maps a note to text drawable with WinAnsi-encoded base-14 fonts.
///
/// Typographic quotes and dashes become ASCII; other characters above U+00FF are dropped.
pub fn to_drawable_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\t' => out.push(' '),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c if (c as u32) < 0x7F || (0xA1..=0xFF).contains(&(c as u32)) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Encodes drawable text as WinAnsi bytes (Latin-1 for the range we keep).
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| u8::try_from(c as u32).ok())
        .collect()
}

/// Accumulates drawing operations and starts a new page when the cursor runs out of room.
struct PageBuilder {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: TOP_Y,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.y = TOP_Y;
    }

    /// Moves the cursor down, breaking the page if the next line would not fit.
    fn advance(&mut self, dy: f32) {
        if self.y - dy < BOTTOM_Y {
            self.new_page();
        } else {
            self.y -= dy;
        }
    }

    fn text_at(&mut self, face: FontFace, size: f32, x: f32, gray: f32, text: &str) {
        self.ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![face.resource_name().into(), size.into()]),
            Operation::new("g", vec![gray.into()]),
            Operation::new("Td", vec![x.into(), self.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn centered(&mut self, face: FontFace, size: f32, gray: f32, text: &str) {
        let width = get_metrics(face).measure_pt(text, size);
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN_X);
        self.text_at(face, size, x, gray, text);
    }

    fn rule(&mut self) {
        self.ops.extend([
            Operation::new("G", vec![RULE.into()]),
            Operation::new("w", vec![2.0_f32.into()]),
            Operation::new("m", vec![MARGIN_X.into(), self.y.into()]),
            Operation::new("l", vec![(PAGE_WIDTH - MARGIN_X).into(), self.y.into()]),
            Operation::new("S", vec![]),
        ]);
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Lays out the note and returns one operation list per page.
fn layout(username: &str, note: &str, generated_on: NaiveDate) -> Vec<Vec<Operation>> {
    let mut page = PageBuilder::new();

    page.centered(FontFace::Bold, TITLE_SIZE, INK, "Cheerify");
    page.advance(28.0);
    let subtitle = to_drawable_text(&format!("A personalized note for @{username}"));
    page.centered(FontFace::Regular, SUBTITLE_SIZE, MUTED, &subtitle);
    page.advance(30.0);
    page.rule();
    page.advance(40.0);

    let body_leading = BODY_SIZE * BODY_LEADING;
    let lines = get_metrics(FontFace::Regular).wrap_lines(
        &to_drawable_text(note),
        BODY_SIZE,
        TEXT_WIDTH,
    );
    for line in &lines {
        if !line.is_empty() {
            page.text_at(FontFace::Regular, BODY_SIZE, MARGIN_X, INK, line);
        }
        page.advance(body_leading);
    }

    page.advance(10.0);
    page.rule();
    page.advance(40.0);
    page.centered(FontFace::Oblique, SIGNOFF_SIZE, MUTED, "With Love");
    page.advance(24.0);
    let footer = format!("Generated on {}", generated_on.format("%B %-d, %Y"));
    page.centered(FontFace::Regular, FOOTER_SIZE, MUTED, &footer);

    page.finish()
}

/// Renders a note into PDF bytes.
pub fn render_note_pdf(
    username: &str,
    note: &str,
    generated_on: NaiveDate,
) -> Result<Vec<u8>, AppError> {
    let pages = layout(username, note, generated_on);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for face in [FontFace::Regular, FontFace::Bold, FontFace::Oblique] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| AppError::Pdf(format!("Failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(lopdf::Dictionary::new(), encoded));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            PAGE_WIDTH.into(),
            PAGE_HEIGHT.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(&to_drawable_text(
            &format!("Cheerify note for @{username}"),
        ))),
        "Producer" => Object::string_literal("Cheerify"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| AppError::Pdf(format!("Failed to write PDF: {e}")))?;
    Ok(bytes)
}
