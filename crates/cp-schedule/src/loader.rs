//! Config and pattern loaders.
//!
//! # Schedule config (TOML)
//!
//! ```toml
//! pattern = "2-2-3"
//! start_date = "2024-01-01"
//! starting_parent = "A"
//! exchange_time = "18:00"
//! exchange_location = "School pickup"
//!
//! [[holidays]]
//! name = "Thanksgiving"
//! rule = "alternate-by-year"
//!
//! [[holidays]]
//! name = "Christmas Day"
//! rule = "split"
//! cutoff = "14:00:00"
//! ```
//!
//! # Extra patterns (CSV)
//!
//! One row per pattern; `cycle` is a string of 0/1 digits.
//!
//! ```csv
//! pattern_id,cycle
//! 5-2,00000110000011
//! week-on-week-off,00000001111111
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::{ScheduleConfig, ScheduleConfigFile};
use crate::pattern::{Cycle, PatternTable};
use crate::{ScheduleError, ScheduleResult};

// ── Schedule config ───────────────────────────────────────────────────────────

/// Load and validate a [`ScheduleConfig`] from a TOML file.
pub fn load_config_toml(path: &Path) -> ScheduleResult<ScheduleConfig> {
    let text = std::fs::read_to_string(path).map_err(ScheduleError::Io)?;
    let config = parse_config_toml(&text)?;
    debug!(path = %path.display(), pattern = config.pattern.label(), "loaded schedule config");
    Ok(config)
}

/// Like [`load_config_toml`] but parses TOML text directly.
///
/// Validation errors keep their typed variant (e.g. `InvalidCycle`) rather
/// than being flattened into a parse error.
pub fn parse_config_toml(text: &str) -> ScheduleResult<ScheduleConfig> {
    let file: ScheduleConfigFile =
        toml::from_str(text).map_err(|e| ScheduleError::Parse(e.to_string()))?;
    ScheduleConfig::try_from(file)
}

/// Serialize a config back to TOML in the same wire format.
pub fn config_to_toml(config: &ScheduleConfig) -> ScheduleResult<String> {
    toml::to_string(&ScheduleConfigFile::from(config.clone()))
        .map_err(|e| ScheduleError::Parse(e.to_string()))
}

// ── Pattern CSV ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PatternRecord {
    pattern_id: String,
    cycle:      String,
}

/// Register every pattern in a CSV file into `table`.
///
/// Returns the number of patterns registered.  Later rows replace earlier
/// ones with the same id.
pub fn load_patterns_csv(path: &Path, table: &mut PatternTable) -> ScheduleResult<usize> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_patterns_reader(file, table)
}

/// Like [`load_patterns_csv`] but accepts any `Read` source.
pub fn load_patterns_reader<R: Read>(reader: R, table: &mut PatternTable) -> ScheduleResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut count = 0;

    for result in csv_reader.deserialize::<PatternRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let cycle = Cycle::from_digits(&row.cycle)?;
        debug!(pattern = %row.pattern_id, cycle_len = cycle.len(), "registered pattern");
        table.insert(row.pattern_id.trim(), cycle)?;
        count += 1;
    }

    Ok(count)
}
