//! Paginated document layout for printed / court-ready schedules.
//!
//! Two layouts are supported:
//!
//! | Layout  | Page content                                        |
//! |---------|-----------------------------------------------------|
//! | `Table` | one row per custody block, `rows_per_page` per page |
//! | `Grid`  | month calendars, `months_per_page` per page         |
//!
//! Layout only arranges blocks and colours them by parent; it never changes
//! which parent a day belongs to.  Rendering to bytes is the job of a
//! backend such as the `pdf` feature's `PdfWriter`.

use chrono::Weekday;
use cp_core::Parent;
use cp_schedule::CustodyBlock;
use tracing::debug;

use crate::calendar::{MonthGrid, months_between};
use crate::row::BlockRow;
use crate::writer::ScheduleWriter;
use crate::{ExportContext, ExportError, ExportResult};

// ── Styling ───────────────────────────────────────────────────────────────────

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Components scaled to `0.0..=1.0`.
    pub fn unit(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }
}

/// Colours used for one parent's days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentStyle {
    pub fill: Rgb,
    pub text: Rgb,
}

/// Parent-coded colours for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStyle {
    pub a:         ParentStyle,
    pub b:         ParentStyle,
    /// Fill for days no block covers.
    pub uncovered: Rgb,
}

impl DocumentStyle {
    pub fn for_parent(&self, parent: Parent) -> &ParentStyle {
        match parent {
            Parent::A => &self.a,
            Parent::B => &self.b,
        }
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            a:         ParentStyle { fill: Rgb::new(0xCF, 0xE2, 0xF3), text: Rgb::BLACK },
            b:         ParentStyle { fill: Rgb::new(0xFC, 0xE5, 0xCD), text: Rgb::BLACK },
            uncovered: Rgb::WHITE,
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Requested page arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table { rows_per_page: usize },
    Grid { months_per_page: usize, week_start: Weekday },
}

impl Layout {
    /// Table layout sized for US Letter at the default row height.
    pub fn table() -> Self {
        Layout::Table { rows_per_page: 30 }
    }

    /// Two Sunday-first month grids per page.
    pub fn grid() -> Self {
        Layout::Grid { months_per_page: 2, week_start: Weekday::Sun }
    }
}

// ── Document model ────────────────────────────────────────────────────────────

/// A block row with its parent's fill colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRow {
    pub row:  BlockRow,
    pub fill: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Table(Vec<StyledRow>),
    Grid(Vec<MonthGrid>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub body:   PageBody,
}

/// A laid-out schedule ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDocument {
    pub title:    String,
    pub subtitle: String,
    pub footer:   String,
    /// `(label, fill)` for each parent, in display order.
    pub legend:   Vec<(String, Rgb)>,
    pub style:    DocumentStyle,
    pub pages:    Vec<Page>,
}

impl ScheduleDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Arrange `blocks` into pages.
///
/// Zero blocks produce a single page with an empty table or no months, so
/// the header and legend still render.
pub fn layout_document(
    blocks: &[CustodyBlock],
    ctx: &ExportContext,
    layout: Layout,
    style: &DocumentStyle,
) -> ExportResult<ScheduleDocument> {
    let bodies: Vec<PageBody> = match layout {
        Layout::Table { rows_per_page: 0 } | Layout::Grid { months_per_page: 0, .. } => {
            return Err(ExportError::Layout("page capacity must be at least 1".into()));
        }
        Layout::Table { rows_per_page } => {
            let rows: Vec<StyledRow> = blocks
                .iter()
                .map(|block| StyledRow {
                    row:  BlockRow::new(block, &ctx.names),
                    fill: style.for_parent(block.parent).fill,
                })
                .collect();
            rows.chunks(rows_per_page).map(|chunk| PageBody::Table(chunk.to_vec())).collect()
        }
        Layout::Grid { months_per_page, week_start } => {
            let months = match (blocks.first(), blocks.last()) {
                (Some(first), Some(last)) => months_between(first.start, last.end),
                _ => Vec::new(),
            };
            let grids = months
                .into_iter()
                .map(|(y, m)| MonthGrid::from_blocks(y, m, week_start, blocks, None))
                .collect::<ExportResult<Vec<_>>>()?;
            grids.chunks(months_per_page).map(|chunk| PageBody::Grid(chunk.to_vec())).collect()
        }
    };

    let bodies = if bodies.is_empty() {
        vec![match layout {
            Layout::Table { .. } => PageBody::Table(Vec::new()),
            Layout::Grid { .. } => PageBody::Grid(Vec::new()),
        }]
    } else {
        bodies
    };

    let pages: Vec<Page> = bodies
        .into_iter()
        .enumerate()
        .map(|(i, body)| Page { number: i + 1, body })
        .collect();
    debug!(pages = pages.len(), blocks = blocks.len(), "laid out schedule document");

    Ok(ScheduleDocument {
        title: ctx.title.clone(),
        subtitle: subtitle(blocks, ctx),
        footer: format!("Generated {}", ctx.generated_at.format("%Y-%m-%d %H:%M")),
        legend: Parent::BOTH
            .iter()
            .map(|p| (ctx.names.name(*p).to_owned(), style.for_parent(*p).fill))
            .collect(),
        style: *style,
        pages,
    })
}

fn subtitle(blocks: &[CustodyBlock], ctx: &ExportContext) -> String {
    let mut parts = vec![format!("Pattern: {}", ctx.pattern)];
    if let (Some(first), Some(last)) = (blocks.first(), blocks.last()) {
        parts.push(format!("{} to {}", first.start, last.end));
    }
    if let Some(exchange) = ctx.exchange_description() {
        parts.push(exchange);
    }
    parts.join(" | ")
}

// ── DocumentWriter ────────────────────────────────────────────────────────────

/// Collects blocks and lays them out when finished.
pub struct DocumentWriter {
    layout:   Layout,
    style:    DocumentStyle,
    blocks:   Vec<CustodyBlock>,
    document: Option<ScheduleDocument>,
}

impl DocumentWriter {
    pub fn new(layout: Layout, style: DocumentStyle) -> Self {
        Self { layout, style, blocks: Vec::new(), document: None }
    }

    /// The laid-out document, available after `finish`.
    pub fn document(&self) -> Option<&ScheduleDocument> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<ScheduleDocument> {
        self.document
    }
}

impl ScheduleWriter for DocumentWriter {
    fn write_block(&mut self, block: &CustodyBlock, _ctx: &ExportContext) -> ExportResult<()> {
        if self.document.is_some() {
            return Err(ExportError::Layout("write after finish".into()));
        }
        self.blocks.push(*block);
        Ok(())
    }

    fn finish(&mut self, ctx: &ExportContext) -> ExportResult<()> {
        if self.document.is_none() {
            self.document = Some(layout_document(&self.blocks, ctx, self.layout, &self.style)?);
        }
        Ok(())
    }
}
