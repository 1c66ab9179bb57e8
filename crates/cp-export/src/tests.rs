//! Integration tests for cp-export.

use chrono::{DateTime, NaiveDate, TimeZone, Utc, Weekday};
use cp_core::{DateRange, Parent, ParentNames};
use cp_schedule::{CustodyBlock, CustodyResolver, PatternTable, ScheduleConfig};

use crate::ExportContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn stamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn alternating() -> ScheduleConfig {
    ScheduleConfig::named("alternating-weeks", d(2024, 1, 1), Parent::A)
}

fn ctx(config: &ScheduleConfig) -> ExportContext {
    ExportContext::from_config(config, stamp()).with_names(ParentNames::new("Alex", "Blair"))
}

/// Alternating-weeks blocks over `[start, end]`.
fn blocks(start: NaiveDate, end: NaiveDate) -> Vec<CustodyBlock> {
    let table = PatternTable::builtin();
    let config = alternating();
    CustodyResolver::new(&table).segment(start, end, &config).unwrap().collect()
}

// ── ICS ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ics_tests {
    use super::*;
    use crate::{
        ExportError, IcsWriter, ScheduleWriter, escape_text, export_blocks, fold_line,
        read_events, unescape_text,
    };

    fn feed(blocks: Vec<CustodyBlock>, ctx: &ExportContext, token: u64) -> String {
        let mut w = IcsWriter::with_run_token(Vec::new(), token);
        export_blocks(blocks, ctx, &mut w).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn dtend_is_exclusive() {
        let config = alternating();
        let text = feed(blocks(d(2024, 1, 1), d(2024, 1, 15)), &ctx(&config), 7);
        assert!(text.contains("DTSTART;VALUE=DATE:20240101\r\n"));
        assert!(text.contains("DTEND;VALUE=DATE:20240108\r\n"));
        assert!(text.contains("DTSTART;VALUE=DATE:20240115\r\n"));
        assert!(text.contains("DTEND;VALUE=DATE:20240116\r\n"));
    }

    #[test]
    fn read_back_recovers_blocks() {
        let config = alternating();
        let source = blocks(d(2024, 1, 1), d(2024, 1, 21));
        let text = feed(source.clone(), &ctx(&config), 7);

        let events = read_events(&text).unwrap();
        assert_eq!(events.len(), source.len());
        for (event, block) in events.iter().zip(&source) {
            assert_eq!(event.start, block.start);
            assert_eq!(event.last_day(), block.end);
        }
        assert_eq!(events[0].summary, "Alex");
        assert_eq!(events[1].summary, "Blair");
    }

    #[test]
    fn every_line_ends_with_crlf() {
        let config = alternating();
        let text = feed(blocks(d(2024, 1, 1), d(2024, 2, 1)), &ctx(&config), 7);
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn empty_feed_is_well_formed() {
        let config = alternating();
        let text = feed(Vec::new(), &ctx(&config), 7);
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(!text.contains("VEVENT"));
        assert!(read_events(&text).unwrap().is_empty());
    }

    #[test]
    fn fixed_token_is_reproducible() {
        let config = alternating();
        let a = feed(blocks(d(2024, 1, 1), d(2024, 1, 31)), &ctx(&config), 42);
        let b = feed(blocks(d(2024, 1, 1), d(2024, 1, 31)), &ctx(&config), 42);
        assert_eq!(a, b);
        assert!(a.contains("UID:000000000000002a-0001@custody-schedule"));
    }

    #[test]
    fn uids_unique_within_run() {
        let config = alternating();
        let text = feed(blocks(d(2024, 1, 1), d(2024, 6, 30)), &ctx(&config), 42);
        let events = read_events(&text).unwrap();
        let mut uids: Vec<_> = events.iter().filter_map(|e| e.uid.clone()).collect();
        let n = uids.len();
        uids.sort();
        uids.dedup();
        assert_eq!(uids.len(), n);
        assert_eq!(n, events.len());
    }

    #[test]
    fn exchange_details_escaped_and_recovered() {
        let config = alternating().with_exchange("18:00", "School; Main St, Door 2");
        let text = feed(blocks(d(2024, 1, 1), d(2024, 1, 7)), &ctx(&config), 1);
        assert!(text.contains("LOCATION:School\\; Main St\\, Door 2\r\n"));

        let events = read_events(&text).unwrap();
        assert_eq!(events[0].location.as_deref(), Some("School; Main St, Door 2"));
        assert_eq!(
            events[0].description.as_deref(),
            Some("Exchange at 18:00, School; Main St, Door 2")
        );
    }

    #[test]
    fn write_after_finish_fails() {
        let config = alternating();
        let c = ctx(&config);
        let mut w = IcsWriter::with_run_token(Vec::new(), 1);
        w.finish(&c).unwrap();
        w.finish(&c).unwrap();
        let block = CustodyBlock::new(d(2024, 1, 1), d(2024, 1, 7), Parent::A);
        assert!(matches!(w.write_block(&block, &c), Err(ExportError::Ics(_))));
    }

    #[test]
    fn escape_and_unescape() {
        let raw = "a,b;c\\d\ne";
        let escaped = escape_text(raw);
        assert_eq!(escaped, "a\\,b\\;c\\\\d\\ne");
        assert_eq!(unescape_text(&escaped), raw);
        assert_eq!(escape_text("x\r\ny"), "x\\ny");
    }

    #[test]
    fn long_lines_fold_at_75_octets() {
        let content = format!("DESCRIPTION:{}", "x".repeat(200));
        let folded = fold_line(&content);
        let physical: Vec<&str> = folded.trim_end_matches("\r\n").split("\r\n").collect();
        assert!(physical.len() > 1);
        assert!(physical.iter().all(|line| line.len() <= 75));
        assert!(physical[1..].iter().all(|line| line.starts_with(' ')));

        let unfolded: String = physical
            .iter()
            .enumerate()
            .map(|(i, line)| if i == 0 { *line } else { &line[1..] })
            .collect();
        assert_eq!(unfolded, content);
    }

    #[test]
    fn folding_keeps_multibyte_chars_whole() {
        let content = format!("SUMMARY:{}", "é".repeat(80));
        let folded = fold_line(&content);
        for line in folded.trim_end_matches("\r\n").split("\r\n") {
            assert!(line.len() <= 75);
        }
    }

    #[test]
    fn long_parent_name_survives_folding() {
        let config = alternating();
        let long = "A".repeat(120);
        let c = ExportContext::from_config(&config, stamp())
            .with_names(ParentNames::new(long.clone(), "B"));
        let text = feed(blocks(d(2024, 1, 1), d(2024, 1, 3)), &c, 1);
        assert_eq!(read_events(&text).unwrap()[0].summary, long);
    }

    #[test]
    fn missing_dtend_means_one_day() {
        let text = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nDTSTART;VALUE=DATE:20240301\r\n\
                    SUMMARY:Alex\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
        let events = read_events(text).unwrap();
        assert_eq!(events[0].end, d(2024, 3, 2));
        assert_eq!(events[0].last_day(), d(2024, 3, 1));
    }

    #[test]
    fn dtstamp_is_utc() {
        let config = alternating();
        let text = feed(blocks(d(2024, 1, 1), d(2024, 1, 3)), &ctx(&config), 7);
        assert!(text.contains("DTSTAMP:20240101T120000Z\r\n"));
    }

    #[test]
    fn property_parameters_are_not_part_of_the_value() {
        let text = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\n\
                    DTSTART;VALUE=DATE:20240301\r\nDTEND;VALUE=DATE:20240308\r\n\
                    SUMMARY;LANGUAGE=en:Alex\r\n\
                    DESCRIPTION;ALTREP=\"http://example.com/x\":Exchange at 18:00\r\n\
                    END:VEVENT\r\nEND:VCALENDAR\r\n";
        let events = read_events(text).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Alex");
        assert_eq!(events[0].description.as_deref(), Some("Exchange at 18:00"));
        assert_eq!(events[0].last_day(), d(2024, 3, 7));
    }

    #[test]
    fn block_on_last_representable_day_is_rejected() {
        let config = alternating();
        let c = ctx(&config);
        let mut w = IcsWriter::with_run_token(Vec::new(), 1);
        let block = CustodyBlock::new(NaiveDate::MAX, NaiveDate::MAX, Parent::A);
        assert!(matches!(w.write_block(&block, &c), Err(ExportError::Schedule(_))));
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn unterminated_event_is_an_error() {
        let text = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nDTSTART;VALUE=DATE:20240301\r\n";
        assert!(matches!(read_events(text), Err(ExportError::Ics(_))));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{BlockRow, CsvWriter, ScheduleWriter, export_blocks};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn headers_and_rows() {
        let config = alternating();
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        let n = export_blocks(blocks(d(2024, 1, 1), d(2024, 1, 15)), &ctx(&config), &mut w).unwrap();
        assert_eq!(n, 3);

        let bytes = w.into_inner().unwrap();
        let mut rdr = ::csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, BlockRow::HEADERS);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "2024-01-01");
        assert_eq!(&rows[0][1], "2024-01-07");
        assert_eq!(&rows[0][2], "7");
        assert_eq!(&rows[0][3], "A");
        assert_eq!(&rows[0][4], "Alex");
        assert_eq!(&rows[1][4], "Blair");
        assert_eq!(&rows[2][2], "1");
    }

    #[test]
    fn empty_table_has_header_only() {
        let config = alternating();
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        export_blocks(Vec::new(), &ctx(&config), &mut w).unwrap();
        let text = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(text, "start,end,days,parent,parent_name\n");
    }

    #[test]
    fn writes_to_file() {
        let dir = tmp();
        let path = dir.path().join("custody.csv");
        let config = alternating();
        let mut w = CsvWriter::create(&path).unwrap();
        export_blocks(blocks(d(2024, 1, 1), d(2024, 1, 31)), &ctx(&config), &mut w).unwrap();
        drop(w);

        let mut rdr = ::csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }

    #[test]
    fn finish_idempotent() {
        let config = alternating();
        let c = ctx(&config);
        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        w.finish(&c).unwrap();
        w.finish(&c).unwrap();
    }
}

// ── Export drivers ────────────────────────────────────────────────────────────

#[cfg(test)]
mod export_tests {
    use super::*;
    use crate::{CsvWriter, ExportError, IcsWriter, export_range, read_events};
    use cp_schedule::{FixedDateCalendar, Holiday, HolidayRule, ScheduleError};

    #[test]
    fn exchange_description_variants() {
        let base = ExportContext::from_config(&alternating(), stamp());
        assert_eq!(base.exchange_description(), None);

        let both = ExportContext::from_config(&alternating().with_exchange("18:00", "School"), stamp());
        assert_eq!(both.exchange_description().as_deref(), Some("Exchange at 18:00, School"));

        let mut time_only = base.clone();
        time_only.exchange_time = Some("09:00".into());
        assert_eq!(time_only.exchange_description().as_deref(), Some("Exchange at 09:00"));

        let mut place_only = base;
        place_only.exchange_location = Some("Library".into());
        assert_eq!(place_only.exchange_description().as_deref(), Some("Exchange location: Library"));
    }

    #[test]
    fn export_range_end_to_end() {
        let table = PatternTable::builtin();
        let resolver = CustodyResolver::new(&table);
        let config = alternating();
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 15)).unwrap();

        let mut w = CsvWriter::from_writer(Vec::new()).unwrap();
        let n = export_range(&resolver, &config, range, &ctx(&config), &mut w).unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn holiday_shows_up_in_feed() {
        let table = PatternTable::builtin();
        let calendar = FixedDateCalendar::new().with_date("Teacher Day", d(2024, 1, 10));
        let resolver = CustodyResolver::new(&table).with_calendar(&calendar);
        let config = alternating().with_holiday(Holiday::new("Teacher Day", HolidayRule::FixedA));
        let range = DateRange::new(d(2024, 1, 8), d(2024, 1, 14)).unwrap();

        let mut w = IcsWriter::with_run_token(Vec::new(), 3);
        export_range(&resolver, &config, range, &ctx(&config), &mut w).unwrap();
        let events = read_events(&String::from_utf8(w.into_inner()).unwrap()).unwrap();

        let spans: Vec<_> = events.iter().map(|e| (e.start, e.last_day(), e.summary.as_str())).collect();
        assert_eq!(
            spans,
            [
                (d(2024, 1, 8), d(2024, 1, 9), "Blair"),
                (d(2024, 1, 10), d(2024, 1, 10), "Alex"),
                (d(2024, 1, 11), d(2024, 1, 14), "Blair"),
            ]
        );
    }

    #[test]
    fn unknown_pattern_writes_nothing() {
        let table = PatternTable::builtin();
        let resolver = CustodyResolver::new(&table);
        let config = ScheduleConfig::named("fortnightly", d(2024, 1, 1), Parent::A);
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 15)).unwrap();

        let mut w = IcsWriter::with_run_token(Vec::new(), 3);
        let err = export_range(&resolver, &config, range, &ctx(&config), &mut w).unwrap_err();
        assert!(matches!(err, ExportError::Schedule(ScheduleError::UnknownPattern(_))));
        assert!(w.into_inner().is_empty());
    }
}

// ── Month grid ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod calendar_tests {
    use super::*;
    use crate::{MonthGrid, weekday_label};

    #[test]
    fn visible_range_pads_to_whole_weeks() {
        let monday = MonthGrid::visible_range(2024, 1, Weekday::Mon).unwrap();
        assert_eq!((monday.start(), monday.end()), (d(2024, 1, 1), d(2024, 2, 4)));

        let sunday = MonthGrid::visible_range(2024, 1, Weekday::Sun).unwrap();
        assert_eq!((sunday.start(), sunday.end()), (d(2023, 12, 31), d(2024, 2, 3)));
    }

    #[test]
    fn invalid_month_rejected() {
        assert!(MonthGrid::visible_range(2024, 13, Weekday::Mon).is_err());
    }

    #[test]
    fn grid_from_schedule() {
        let table = PatternTable::builtin();
        let config = alternating();
        let bound = CustodyResolver::new(&table).bind(&config).unwrap();
        let grid = MonthGrid::for_schedule(&bound, 2024, 1, Weekday::Mon, Some(d(2024, 1, 15))).unwrap();

        assert_eq!(grid.title(), "January 2024");
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.month_days().count(), 31);

        let jan1 = grid.cell(d(2024, 1, 1)).unwrap();
        assert_eq!(jan1.parent, Some(Parent::A));
        assert!(!jan1.is_exchange);

        let jan8 = grid.cell(d(2024, 1, 8)).unwrap();
        assert_eq!(jan8.parent, Some(Parent::B));
        assert!(jan8.is_exchange);

        assert!(grid.cell(d(2024, 1, 15)).unwrap().is_today);
        assert_eq!(grid.weeks.iter().flatten().filter(|c| c.is_today).count(), 1);

        let feb1 = grid.cell(d(2024, 2, 1)).unwrap();
        assert!(!feb1.in_month);
        assert_eq!(feb1.parent, Some(Parent::A));
    }

    #[test]
    fn uncovered_days_have_no_parent() {
        let source = blocks(d(2024, 2, 10), d(2024, 2, 20));
        let grid = MonthGrid::from_blocks(2024, 2, Weekday::Sun, &source, None).unwrap();
        assert_eq!(grid.month_days().count(), 29);
        assert_eq!(grid.cell(d(2024, 2, 1)).unwrap().parent, None);
        assert!(grid.cell(d(2024, 2, 10)).unwrap().parent.is_some());
        assert!(!grid.cell(d(2024, 2, 10)).unwrap().is_exchange);
    }

    #[test]
    fn weekday_headers_follow_week_start() {
        let source = blocks(d(2024, 1, 1), d(2024, 1, 31));
        let grid = MonthGrid::from_blocks(2024, 1, Weekday::Sun, &source, None).unwrap();
        let headers = grid.weekday_headers();
        assert_eq!(headers[0], Weekday::Sun);
        assert_eq!(headers[6], Weekday::Sat);
        assert_eq!(weekday_label(headers[1]), "Mon");
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use super::*;
    use crate::{CustodySummary, Exchange};

    #[test]
    fn four_weeks_of_alternating() {
        let summary = CustodySummary::from_blocks(&blocks(d(2024, 1, 1), d(2024, 1, 28)));
        assert_eq!((summary.days_a, summary.days_b), (14, 14));
        assert_eq!(summary.total_days(), 28);
        assert_eq!(summary.share(Parent::A), 50.0);
        assert_eq!(summary.range, Some(DateRange::new(d(2024, 1, 1), d(2024, 1, 28)).unwrap()));
        assert_eq!(
            summary.exchanges,
            [
                Exchange { date: d(2024, 1, 8), from: Parent::A, to: Parent::B },
                Exchange { date: d(2024, 1, 15), from: Parent::B, to: Parent::A },
                Exchange { date: d(2024, 1, 22), from: Parent::A, to: Parent::B },
            ]
        );
    }

    #[test]
    fn empty_summary() {
        let summary = CustodySummary::from_blocks(&[]);
        assert_eq!(summary.range, None);
        assert_eq!(summary.total_days(), 0);
        assert_eq!(summary.share(Parent::B), 0.0);
        assert!(summary.exchanges.is_empty());
    }
}

// ── Document layout ───────────────────────────────────────────────────────────

#[cfg(test)]
mod layout_tests {
    use super::*;
    use crate::{
        DocumentStyle, DocumentWriter, ExportError, Layout, PageBody, export_blocks,
        layout_document,
    };

    #[test]
    fn table_paginates() {
        let config = alternating();
        let style = DocumentStyle::default();
        let source = blocks(d(2024, 1, 1), d(2024, 1, 31));
        let doc = layout_document(&source, &ctx(&config), Layout::Table { rows_per_page: 2 }, &style)
            .unwrap();

        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.pages.iter().map(|p| p.number).collect::<Vec<_>>(), [1, 2, 3]);
        let PageBody::Table(rows) = &doc.pages[0].body else { panic!("expected table page") };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fill, style.a.fill);
        assert_eq!(rows[1].fill, style.b.fill);
        assert_eq!(rows[1].row.parent_name, "Blair");
    }

    #[test]
    fn header_and_legend() {
        let config = alternating().with_exchange("18:00", "School");
        let doc = layout_document(
            &blocks(d(2024, 1, 1), d(2024, 1, 14)),
            &ctx(&config),
            Layout::table(),
            &DocumentStyle::default(),
        )
        .unwrap();
        assert_eq!(doc.title, "Custody Schedule");
        assert_eq!(
            doc.subtitle,
            "Pattern: alternating-weeks | 2024-01-01 to 2024-01-14 | Exchange at 18:00, School"
        );
        assert_eq!(doc.footer, "Generated 2024-01-01 12:00");
        assert_eq!(doc.legend.len(), 2);
        assert_eq!(doc.legend[0].0, "Alex");
    }

    #[test]
    fn grid_one_month_per_page() {
        let config = alternating();
        let source = blocks(d(2024, 1, 15), d(2024, 3, 2));
        let layout = Layout::Grid { months_per_page: 1, week_start: Weekday::Mon };
        let doc = layout_document(&source, &ctx(&config), layout, &DocumentStyle::default()).unwrap();
        assert_eq!(doc.page_count(), 3);
        let PageBody::Grid(months) = &doc.pages[2].body else { panic!("expected grid page") };
        assert_eq!(months[0].title(), "March 2024");
    }

    #[test]
    fn empty_input_gives_one_page() {
        let config = alternating();
        let doc = layout_document(&[], &ctx(&config), Layout::grid(), &DocumentStyle::default()).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].body, PageBody::Grid(Vec::new()));
        assert_eq!(doc.subtitle, "Pattern: alternating-weeks");
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = alternating();
        let err = layout_document(
            &[],
            &ctx(&config),
            Layout::Table { rows_per_page: 0 },
            &DocumentStyle::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::Layout(_)));
    }

    #[test]
    fn document_writer_lays_out_on_finish() {
        let config = alternating();
        let mut w = DocumentWriter::new(Layout::table(), DocumentStyle::default());
        assert!(w.document().is_none());
        export_blocks(blocks(d(2024, 1, 1), d(2024, 3, 31)), &ctx(&config), &mut w).unwrap();
        let doc = w.into_document().unwrap();
        assert_eq!(doc.page_count(), 1);
    }
}

// ── PDF ───────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "pdf"))]
mod pdf_tests {
    use super::*;
    use crate::{DocumentStyle, Layout, PdfWriter, export_blocks, layout_document, render_pdf};

    #[test]
    fn renders_one_pdf_page_per_document_page() {
        let config = alternating();
        let doc = layout_document(
            &blocks(d(2024, 1, 1), d(2024, 4, 30)),
            &ctx(&config),
            Layout::Grid { months_per_page: 2, week_start: Weekday::Sun },
            &DocumentStyle::default(),
        )
        .unwrap();
        let bytes = render_pdf(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), doc.page_count());
    }

    #[test]
    fn pdf_writer_writes_on_finish() {
        let config = alternating();
        let mut out = Vec::new();
        {
            let mut w = PdfWriter::new(&mut out, Layout::table(), DocumentStyle::default());
            export_blocks(blocks(d(2024, 1, 1), d(2024, 2, 29)), &ctx(&config), &mut w).unwrap();
        }
        assert!(out.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_schedule_still_renders() {
        let config = alternating();
        let mut out = Vec::new();
        {
            let mut w = PdfWriter::new(&mut out, Layout::table(), DocumentStyle::default());
            export_blocks(Vec::new(), &ctx(&config), &mut w).unwrap();
        }
        let parsed = lopdf::Document::load_mem(&out).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }
}
