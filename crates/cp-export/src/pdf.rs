//! PDF backend (feature `pdf`).
//!
//! Renders a [`ScheduleDocument`] to US Letter pages with `lopdf`, using the
//! built-in Helvetica font.  Table pages draw one filled row per block; grid
//! pages draw month calendars with parent-coloured day cells.

use std::io::Write;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use cp_schedule::CustodyBlock;

use crate::calendar::{MonthGrid, weekday_label};
use crate::layout::{DocumentStyle, Layout, PageBody, Rgb, ScheduleDocument, StyledRow};
use crate::writer::ScheduleWriter;
use crate::{DocumentWriter, ExportContext, ExportError, ExportResult};

const PAGE_W: f32 = 612.0;
const PAGE_H: f32 = 792.0;
const MARGIN: f32 = 54.0;
const ROW_H: f32 = 20.0;
/// Space reserved at the top for title, subtitle, and legend.
const HEADER_H: f32 = 72.0;

// ── Writer ────────────────────────────────────────────────────────────────────

/// Lays out blocks and writes the rendered PDF to `out` on `finish`.
pub struct PdfWriter<W: Write> {
    out:      Option<W>,
    document: DocumentWriter,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(out: W, layout: Layout, style: DocumentStyle) -> Self {
        Self { out: Some(out), document: DocumentWriter::new(layout, style) }
    }
}

impl<W: Write> ScheduleWriter for PdfWriter<W> {
    fn write_block(&mut self, block: &CustodyBlock, ctx: &ExportContext) -> ExportResult<()> {
        self.document.write_block(block, ctx)
    }

    fn finish(&mut self, ctx: &ExportContext) -> ExportResult<()> {
        let Some(mut out) = self.out.take() else { return Ok(()) };
        self.document.finish(ctx)?;
        let document = self
            .document
            .document()
            .ok_or_else(|| ExportError::Layout("document not laid out".into()))?;
        out.write_all(&render_pdf(document)?)?;
        out.flush()?;
        Ok(())
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render a laid-out document to PDF bytes.
pub fn render_pdf(document: &ScheduleDocument) -> ExportResult<Vec<u8>> {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();
    let font_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let total = document.page_count();
    let mut kids: Vec<Object> = Vec::with_capacity(total);
    for page in &document.pages {
        let mut ops = Ops::default();
        draw_header(&mut ops, document);
        match &page.body {
            PageBody::Table(rows) => draw_table(&mut ops, rows),
            PageBody::Grid(months) => draw_grids(&mut ops, months, &document.style),
        }
        ops.text(MARGIN, MARGIN / 2.0, 8.0, &document.footer);
        ops.text(PAGE_W - MARGIN - 60.0, MARGIN / 2.0, 8.0, &format!("Page {} of {total}", page.number));

        let content = Content { operations: ops.0 };
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => total as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), (PAGE_W as i64).into(), (PAGE_H as i64).into()],
    };
    pdf.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

fn draw_header(ops: &mut Ops, document: &ScheduleDocument) {
    let top = PAGE_H - MARGIN;
    ops.text(MARGIN, top - 16.0, 16.0, &document.title);
    ops.text(MARGIN, top - 32.0, 9.0, &document.subtitle);

    let mut x = MARGIN;
    for (label, fill) in &document.legend {
        ops.fill_rect(x, top - 52.0, 10.0, 10.0, *fill);
        ops.text(x + 14.0, top - 51.0, 9.0, label);
        x += 160.0;
    }
}

fn draw_table(ops: &mut Ops, rows: &[StyledRow]) {
    let columns = [("From", 0.0), ("To", 100.0), ("Days", 200.0), ("Parent", 260.0)];
    let mut y = PAGE_H - MARGIN - HEADER_H;
    for (label, dx) in columns {
        ops.text(MARGIN + 4.0 + dx, y + 6.0, 10.0, label);
    }
    for styled in rows {
        y -= ROW_H;
        ops.fill_rect(MARGIN, y, PAGE_W - 2.0 * MARGIN, ROW_H, styled.fill);
        let row = &styled.row;
        let cells = [
            row.start.format("%a %b %d, %Y").to_string(),
            row.end.format("%a %b %d, %Y").to_string(),
            row.days.to_string(),
            row.parent_name.clone(),
        ];
        for ((_, dx), cell) in columns.iter().zip(&cells) {
            ops.text(MARGIN + 4.0 + dx, y + 6.0, 10.0, cell);
        }
    }
}

fn draw_grids(ops: &mut Ops, months: &[MonthGrid], style: &DocumentStyle) {
    if months.is_empty() {
        return;
    }
    let width = PAGE_W - 2.0 * MARGIN;
    let slot_h = (PAGE_H - 2.0 * MARGIN - HEADER_H) / months.len() as f32;
    let cell_w = width / 7.0;
    let cell_h = ((slot_h - 40.0) / 6.0).min(ROW_H * 3.0);

    for (i, grid) in months.iter().enumerate() {
        let top = PAGE_H - MARGIN - HEADER_H - i as f32 * slot_h;
        ops.text(MARGIN, top - 14.0, 12.0, &grid.title());
        for (col, day) in grid.weekday_headers().iter().enumerate() {
            ops.text(MARGIN + col as f32 * cell_w + 4.0, top - 30.0, 8.0, weekday_label(*day));
        }
        for (row, week) in grid.weeks.iter().enumerate() {
            let y = top - 36.0 - (row as f32 + 1.0) * cell_h;
            for (col, cell) in week.iter().enumerate() {
                let x = MARGIN + col as f32 * cell_w;
                if cell.in_month {
                    let fill = cell
                        .parent
                        .map_or(style.uncovered, |p| style.for_parent(p).fill);
                    ops.fill_rect(x, y, cell_w, cell_h, fill);
                    let label = if cell.is_exchange {
                        format!("{} *", cell.date.format("%-d"))
                    } else {
                        cell.date.format("%-d").to_string()
                    };
                    ops.text(x + 3.0, y + cell_h - 10.0, 8.0, &label);
                }
                ops.stroke_rect(x, y, cell_w, cell_h);
            }
        }
    }
}

// ── Content stream helper ─────────────────────────────────────────────────────

#[derive(Default)]
struct Ops(Vec<Operation>);

impl Ops {
    fn text(&mut self, x: f32, y: f32, size: f32, text: &str) {
        self.0.push(Operation::new("BT", vec![]));
        self.0.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
        self.0.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.0.push(Operation::new("Tj", vec![Object::string_literal(to_win_ansi(text))]));
        self.0.push(Operation::new("ET", vec![]));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let [r, g, b] = color.unit();
        self.0.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.0.push(Operation::new("re", vec![x.into(), y.into(), w.into(), h.into()]));
        self.0.push(Operation::new("f", vec![]));
        self.0.push(Operation::new("rg", vec![0_i64.into(), 0_i64.into(), 0_i64.into()]));
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.0.push(Operation::new("w", vec![0.5_f32.into()]));
        self.0.push(Operation::new("re", vec![x.into(), y.into(), w.into(), h.into()]));
        self.0.push(Operation::new("S", vec![]));
    }
}

/// Helvetica with WinAnsi covers printable ASCII; anything else becomes `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c as u8 } else { b'?' })
        .collect()
}
