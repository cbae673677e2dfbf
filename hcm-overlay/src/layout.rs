//! Values the table needs from outside a single row: column counts for colspans and the run
//! time totals. The tracker normally sends them along, these are used when it doesn't.

use crate::format::count_true;
use hcm_common::snapshot::{CounterPurpose, Snapshot, Split};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ColumnLayout {
    /// Number of columns of a full split row
    pub max_cols: usize,
    /// Columns between the split name and the time columns
    pub hit_cols: usize,
}

impl ColumnLayout {
    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        let display = &snapshot.display;
        match snapshot.purpose {
            CounterPurpose::SplitCounter
            | CounterPurpose::NoDeath
            | CounterPurpose::ResetCounter => {
                let hit_cols = display.hit_columns.count()
                    + count_true(&[display.shows_diff_column(), display.show_pb]);
                let time_cols = count_true(&[
                    display.show_time,
                    display.show_time_diff,
                    display.show_time_pb,
                    display.show_session_progress,
                ]);
                Self {
                    max_cols: 1 + hit_cols + time_cols,
                    hit_cols,
                }
            }
            CounterPurpose::Checklist => Self {
                max_cols: 2,
                hit_cols: 1,
            },
            CounterPurpose::DeathCounter | CounterPurpose::Unsupported(_) => Self {
                max_cols: 1,
                hit_cols: 0,
            },
        }
    }
}

/// Run-wide times in milliseconds.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct RunTimes {
    pub current: f64,
    pub pb: f64,
}

impl RunTimes {
    /// Sums up the split durations of the current run. History entries and negative
    /// placeholders are left out.
    pub fn from_splits(splits: &[Split]) -> Self {
        let positive = |ms: f64| if ms > 0.0 { ms } else { 0.0 };
        splits
            .iter()
            .filter(|split| !split.is_history())
            .fold(Self::default(), |times, split| Self {
                current: times.current + positive(split.duration),
                pb: times.pb + positive(split.duration_pb),
            })
    }
}
