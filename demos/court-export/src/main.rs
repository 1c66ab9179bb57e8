//! court-export: render a custody schedule for sharing with both parents
//! and the court.
//!
//! ```text
//! court-export [CONFIG.toml] [OUT_DIR] [MONTHS]
//! ```
//!
//! Segments `MONTHS` months (default 12) from the config's `start_date` and
//! writes `custody.ics`, `custody.csv`, `custody-table.pdf`,
//! `custody-calendar.pdf`, and `summary.json` into `OUT_DIR`.  Without a
//! config path the embedded sample schedule is used.  Log verbosity follows
//! `RUST_LOG` (default `info`).

mod holidays;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Months, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cp_core::{DateRange, Parent};
use cp_export::{
    CsvWriter, CustodySummary, DocumentStyle, ExportContext, IcsWriter, Layout, PdfWriter,
    export_blocks,
};
use cp_schedule::{CustodyBlock, CustodyResolver, PatternTable, load_config_toml, parse_config_toml};

use holidays::us_calendar;

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_OUT_DIR: &str = "output/court-export";
const DEFAULT_MONTHS:  u32   = 12;

const SAMPLE_CONFIG: &str = r#"
pattern = "alternating-weeks"
start_date = "2024-01-01"
starting_parent = "A"
exchange_time = "18:00"
exchange_location = "School"

[[holidays]]
name = "Thanksgiving"
rule = "alternate-by-year"

[[holidays]]
name = "Christmas Day"
rule = "split"
cutoff = "14:00:00"
"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Config.
    let config = match args.next() {
        Some(path) => load_config_toml(Path::new(&path)).with_context(|| format!("loading {path}"))?,
        None => parse_config_toml(SAMPLE_CONFIG).context("parsing sample config")?,
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUT_DIR.to_owned()));
    let months = match args.next() {
        Some(raw) => raw.parse::<u32>().with_context(|| format!("invalid month count {raw:?}"))?,
        None => DEFAULT_MONTHS,
    };

    // 2. Range.
    let start = config.start_date;
    let end = start
        .checked_add_months(Months::new(months.max(1)))
        .and_then(|d| d.pred_opt())
        .context("export range ends outside the supported calendar")?;
    let range = DateRange::new(start, end)?;

    // 3. Resolve.
    let patterns = PatternTable::builtin();
    let calendar = us_calendar(start.year()..=end.year());
    let resolver = CustodyResolver::new(&patterns).with_calendar(&calendar);
    let blocks: Vec<CustodyBlock> = resolver.segment_range(range, &config)?.collect();
    info!(pattern = config.pattern.label(), %range, blocks = blocks.len(), "schedule resolved");

    // 4. Export.
    let ctx = ExportContext::from_config(&config, Utc::now());
    std::fs::create_dir_all(&out_dir)?;

    let mut ics = IcsWriter::new(BufWriter::new(File::create(out_dir.join("custody.ics"))?));
    export_blocks(blocks.iter().copied(), &ctx, &mut ics)?;

    let mut csv = CsvWriter::create(&out_dir.join("custody.csv"))?;
    export_blocks(blocks.iter().copied(), &ctx, &mut csv)?;

    let style = DocumentStyle::default();
    let mut table_pdf =
        PdfWriter::new(File::create(out_dir.join("custody-table.pdf"))?, Layout::table(), style);
    export_blocks(blocks.iter().copied(), &ctx, &mut table_pdf)?;

    let mut grid_pdf =
        PdfWriter::new(File::create(out_dir.join("custody-calendar.pdf"))?, Layout::grid(), style);
    export_blocks(blocks.iter().copied(), &ctx, &mut grid_pdf)?;

    let summary = CustodySummary::from_blocks(&blocks);
    std::fs::write(out_dir.join("summary.json"), serde_json::to_string_pretty(&summary)?)?;

    // 5. Report.
    println!("Custody schedule: {} ({range})", config.pattern.label());
    println!("{:<12} {:>6} {:>8}", "Parent", "Days", "Share");
    println!("{}", "-".repeat(28));
    for parent in Parent::BOTH {
        println!(
            "{:<12} {:>6} {:>7.1}%",
            ctx.names.name(parent),
            summary.days(parent),
            summary.share(parent),
        );
    }
    println!("Exchanges: {}", summary.exchanges.len());
    println!("Output written to {}", out_dir.display());

    Ok(())
}
