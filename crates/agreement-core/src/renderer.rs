//! Sublease agreement document renderer.
//!
//! Lays the agreement out onto fixed-size pages: optional letterhead,
//! centered title, intro paragraph, numbered amount lines, the clause
//! list with its lettered sub-clauses, and two signature blocks. Every
//! paragraph goes through the selective-bold word wrapper and every line
//! is checked against the page-bottom threshold before it is drawn, so
//! overlong content flows onto additional pages instead of running off
//! the sheet.

use std::path::PathBuf;

use crate::assets::Letterhead;
use crate::clauses;
use crate::dates;
use crate::error::RenderError;
use crate::layout::{self, NameMatcher};
use crate::metrics::{self, Font};
use crate::record::AgreementRecord;
use crate::writer::{DocumentWriter, PageGeometry};

// Spacing constants, in points. Cosmetic tuning parameters, not layout
// semantics; the line height is the body leading shared by all wrapped
// paragraphs.
const TOP_START: f64 = 42.0;
const LINE_HEIGHT: f64 = 9.0;
const BODY_SIZE: f64 = 8.5;
const TITLE_SIZE: f64 = 13.0;
const SIGNATURE_SIZE: f64 = 9.0;
const BANNER_WIDTH: f64 = 396.0;
const RULE_WIDTH: f64 = 1.7;
const CLAUSE_INDENT: f64 = 6.0;
const SUB_CLAUSE_INDENT: f64 = 23.0;
const SIGNATURE_BLOCK_HEIGHT: f64 = 60.0;

/// Divider rule under the letterhead, in RGB.
const ACCENT: (f64, f64, f64) = (1.0, 0.8, 0.0);

/// Per-render switches supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub include_branding: bool,
}

/// A finished document plus its download metadata.
#[derive(Debug, Clone)]
pub struct RenderedAgreement {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Renders agreement records into paginated PDF documents.
#[derive(Debug, Clone, Default)]
pub struct AgreementRenderer {
    letterhead_path: Option<PathBuf>,
}

impl AgreementRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a letterhead PNG from disk instead of the bundled banner.
    pub fn with_letterhead_path(path: impl Into<PathBuf>) -> Self {
        Self {
            letterhead_path: Some(path.into()),
        }
    }

    /// Render `record` into a downloadable document.
    ///
    /// The record is trusted to be validated; the only awaited step is
    /// the letterhead load when branding is requested, and an asset
    /// failure aborts the render with no partial output.
    pub async fn render(
        &self,
        record: &AgreementRecord,
        options: RenderOptions,
    ) -> Result<RenderedAgreement, RenderError> {
        let letterhead = if options.include_branding {
            Some(self.load_letterhead().await?)
        } else {
            None
        };

        let geometry = PageGeometry::LETTER;
        let mut writer = DocumentWriter::new(geometry);
        let margin = geometry.margin;
        let content_width = geometry.content_width();
        let matcher = NameMatcher::new(&[
            &record.tenant_name,
            &record.sublessor_name,
            &record.property_address,
        ]);

        let mut y = TOP_START;

        if let Some(banner) = &letterhead {
            let height = BANNER_WIDTH * banner.aspect();
            writer.set_letterhead(banner)?;
            writer.draw_letterhead(margin, y, BANNER_WIDTH, height);
            y += height + 6.0;
            writer.rule(margin, geometry.width - margin, y, RULE_WIDTH, ACCENT);
            y += 14.0;
        }

        let title_width = metrics::text_width(clauses::TITLE, Font::HelveticaBold, TITLE_SIZE);
        writer.text(
            (geometry.width - title_width) / 2.0,
            y,
            Font::HelveticaBold,
            TITLE_SIZE,
            clauses::TITLE,
        );
        y += 17.0;

        y = draw_paragraph(
            &mut writer,
            y,
            &clauses::intro(record),
            margin,
            content_width,
            &matcher,
        );
        y += 6.0;

        for line in clauses::preamble(record) {
            y = ensure_room(&mut writer, y);
            writer.text(margin + CLAUSE_INDENT, y, Font::Helvetica, BODY_SIZE, &line);
            y += 10.0;
        }
        y += 4.0;

        y = ensure_room(&mut writer, y);
        writer.text(margin, y, Font::Helvetica, BODY_SIZE, clauses::PARTIES_AGREE);
        y += 11.0;

        let clause_x = margin + CLAUSE_INDENT;
        let clause_width = content_width - 2.0 * CLAUSE_INDENT;
        let sub_x = margin + SUB_CLAUSE_INDENT;
        let sub_width = content_width - SUB_CLAUSE_INDENT - CLAUSE_INDENT;

        for (i, clause) in clauses::primary(record).iter().enumerate() {
            let text = format!("{}. {}", i + 1, clause);
            y = draw_paragraph(&mut writer, y, &text, clause_x, clause_width, &matcher);

            // Lettered sub-clauses nest under clause 3 only.
            if i == 2 {
                for (j, sub) in clauses::nested(record).iter().enumerate() {
                    let label = (b'a' + j as u8) as char;
                    let text = format!("{}. {}", label, sub);
                    y = draw_paragraph(&mut writer, y, &text, sub_x, sub_width, &matcher);
                }
            }
        }

        for (i, clause) in clauses::remaining(record).iter().enumerate() {
            let text = format!("{}. {}", i + 4, clause);
            y = draw_paragraph(&mut writer, y, &text, clause_x, clause_width, &matcher);
        }

        y += 7.0;
        if y + SIGNATURE_BLOCK_HEIGHT > geometry.bottom_limit() {
            writer.start_new_page();
            y = TOP_START;
        }

        y = draw_signature_block(
            &mut writer,
            y,
            "Sublessor: ",
            &record.sublessor_name,
            &format!("{} ______________", record.sublessor_name),
            &format!(
                "________{}___________",
                dates::short_form(record.agreement_date)
            ),
        );
        draw_signature_block(
            &mut writer,
            y,
            "Sublessee: ",
            &record.tenant_name,
            "__________________________",
            "________________________",
        );

        let page_count = writer.page_count();
        let bytes = writer.finish()?;
        let rendered = RenderedAgreement {
            file_name: record.file_name(),
            bytes,
            page_count,
        };
        tracing::debug!(
            pages = rendered.page_count,
            branded = options.include_branding,
            "Rendered agreement"
        );
        Ok(rendered)
    }

    async fn load_letterhead(&self) -> Result<Letterhead, RenderError> {
        match &self.letterhead_path {
            Some(path) => Letterhead::load(path).await,
            None => Letterhead::bundled(),
        }
    }
}

/// Draw one wrapped paragraph word by word, breaking to a new page
/// before any line that would cross the bottom threshold. Returns the
/// cursor position below the paragraph.
fn draw_paragraph(
    writer: &mut DocumentWriter,
    mut y: f64,
    text: &str,
    x: f64,
    max_width: f64,
    matcher: &NameMatcher,
) -> f64 {
    for line in layout::wrap(text, max_width, BODY_SIZE, matcher) {
        y = ensure_room(writer, y);
        let mut cursor = x;
        for word in &line {
            writer.text(cursor, y, word.font(), BODY_SIZE, &word.text);
            cursor += word.advance(BODY_SIZE);
        }
        y += LINE_HEIGHT;
    }
    y
}

/// Start a new page when the baseline would fall below the threshold.
fn ensure_room(writer: &mut DocumentWriter, y: f64) -> f64 {
    if y > writer.geometry().bottom_limit() {
        writer.start_new_page();
        TOP_START
    } else {
        y
    }
}

/// One signature block: label with the party's name in bold directly
/// after it, a right-aligned "Date" label, then the signature rule and
/// date field on the following line.
fn draw_signature_block(
    writer: &mut DocumentWriter,
    mut y: f64,
    label: &str,
    name: &str,
    signature_line: &str,
    date_line: &str,
) -> f64 {
    let geometry = writer.geometry();
    let margin = geometry.margin;

    writer.text(margin, y, Font::Helvetica, SIGNATURE_SIZE, label);
    let label_width = metrics::text_width(label, Font::Helvetica, SIGNATURE_SIZE);
    writer.text(
        margin + label_width,
        y,
        Font::HelveticaBold,
        SIGNATURE_SIZE,
        name,
    );
    writer.text(
        geometry.width - margin - 71.0,
        y,
        Font::Helvetica,
        SIGNATURE_SIZE,
        "Date",
    );
    y += 14.0;

    writer.text(margin, y, Font::Helvetica, SIGNATURE_SIZE, signature_line);
    writer.text(
        geometry.width - margin - 128.0,
        y,
        Font::Helvetica,
        SIGNATURE_SIZE,
        date_line,
    );
    y + 23.0
}
