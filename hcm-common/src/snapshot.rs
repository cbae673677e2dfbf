use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// The display mode the counter is running in.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(from = "i64", into = "i64")]
pub enum CounterPurpose {
    #[derivative(Default)]
    SplitCounter,
    DeathCounter,
    Checklist,
    NoDeath,
    ResetCounter,
    /// A mode this renderer doesn't know about. Nothing is drawn for it.
    Unsupported(i64),
}

impl CounterPurpose {
    /// The purposes that draw one row per split with hit and time columns.
    pub fn is_counter(self) -> bool {
        matches!(
            self,
            Self::SplitCounter | Self::NoDeath | Self::ResetCounter
        )
    }
}

impl From<i64> for CounterPurpose {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::SplitCounter,
            1 => Self::DeathCounter,
            2 => Self::Checklist,
            3 => Self::NoDeath,
            4 => Self::ResetCounter,
            n => Self::Unsupported(n),
        }
    }
}

impl From<CounterPurpose> for i64 {
    fn from(purpose: CounterPurpose) -> Self {
        match purpose {
            CounterPurpose::SplitCounter => 0,
            CounterPurpose::DeathCounter => 1,
            CounterPurpose::Checklist => 2,
            CounterPurpose::NoDeath => 3,
            CounterPurpose::ResetCounter => 4,
            CounterPurpose::Unsupported(n) => n,
        }
    }
}

impl core::fmt::Display for CounterPurpose {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::SplitCounter => write!(f, "Split Counter"),
            Self::DeathCounter => write!(f, "Death Counter"),
            Self::Checklist => write!(f, "Checklist"),
            Self::NoDeath => write!(f, "No Death"),
            Self::ResetCounter => write!(f, "Reset Counter"),
            Self::Unsupported(n) => write!(f, "Unsupported Purpose ({n})"),
        }
    }
}

/// Policy the tracker uses to decide which hits get the critical styling.
///
/// The styling itself arrives precomputed in the split classes, the renderer only carries this
/// along.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(from = "i64", into = "i64")]
pub enum SeverityType {
    /// Any hit, boss or way, is critical
    #[derivative(Default)]
    AnyHitsCritical,
    /// Only boss hits are critical
    BossHitCritical,
    /// Only hits exceeding the PB are critical
    ComparePB,
    Unsupported(i64),
}

impl From<i64> for SeverityType {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::AnyHitsCritical,
            1 => Self::BossHitCritical,
            2 => Self::ComparePB,
            n => Self::Unsupported(n),
        }
    }
}

impl From<SeverityType> for i64 {
    fn from(severity: SeverityType) -> Self {
        match severity {
            SeverityType::AnyHitsCritical => 0,
            SeverityType::BossHitCritical => 1,
            SeverityType::ComparePB => 2,
            SeverityType::Unsupported(n) => n,
        }
    }
}

impl core::fmt::Display for SeverityType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::AnyHitsCritical => write!(f, "Any Hits Critical"),
            Self::BossHitCritical => write!(f, "Boss Hit Critical"),
            Self::ComparePB => write!(f, "Compare PB"),
            Self::Unsupported(n) => write!(f, "Unsupported Severity ({n})"),
        }
    }
}

/// Which hit count columns are shown.
#[derive(Derivative)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum HitColumns {
    #[derivative(Default)]
    Hidden,
    /// A single column with boss and way hits summed up
    Combined,
    /// Separate boss and way columns
    BossAndWay,
}

impl HitColumns {
    pub fn from_flags(show_hits: bool, combined: bool) -> Self {
        match (show_hits, combined) {
            (false, _) => Self::Hidden,
            (true, true) => Self::Combined,
            (true, false) => Self::BossAndWay,
        }
    }

    pub fn is_shown(self) -> bool {
        self != Self::Hidden
    }

    pub fn count(self) -> usize {
        match self {
            Self::Hidden => 0,
            Self::Combined => 1,
            Self::BossAndWay => 2,
        }
    }
}

/// How the cumulative PB hit count is attached to the PB column.
#[derive(Derivative)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PbTotals {
    #[derivative(Default)]
    Hidden,
    /// `3(12)`
    Inline,
    /// `3` with `(12)` as subscript
    Subscript,
}

impl PbTotals {
    pub fn from_flags(show_totals: bool, subscript: bool) -> Self {
        match (show_totals, subscript) {
            (false, _) => Self::Hidden,
            (true, false) => Self::Inline,
            (true, true) => Self::Subscript,
        }
    }
}

/// Every optional row and column of the overlay.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DisplayToggles {
    pub hit_columns: HitColumns,
    /// Numbers instead of cross/check icons
    pub show_numbers: bool,
    pub show_diff: bool,
    pub show_pb: bool,
    pub pb_totals: PbTotals,
    pub show_time: bool,
    pub show_time_diff: bool,
    pub show_time_pb: bool,
    pub show_session_progress: bool,
    pub show_footer: bool,
    pub show_time_footer: bool,
    pub show_progress_bar: bool,
    pub progress_bar_colored: bool,
    pub show_attempts: bool,
    pub show_headline: bool,
    pub high_contrast: bool,
    pub high_contrast_names: bool,
    pub highlight_active_split: bool,
    pub use_roman: bool,
}

impl DisplayToggles {
    /// The diff column only exists in numeric mode.
    pub fn shows_diff_column(&self) -> bool {
        self.show_numbers && self.show_diff
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct RunProgress {
    /// `None` when the tracker reported no active split
    pub split_active: Option<usize>,
    pub split_first: usize,
    pub split_last: usize,
    pub attempts: u32,
    pub best_progress: Option<usize>,
    pub session_progress: Option<usize>,
}

impl RunProgress {
    pub fn is_active(&self, index: usize) -> bool {
        self.split_active == Some(index)
    }
}

/// Values meant for the page shell around the table. The row renderer doesn't read them.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct PageHints {
    pub width: u32,
    pub height: u32,
    pub timer_paused: bool,
    pub run_active: bool,
    pub font_name: String,
    pub font_url: String,
    pub css_url: String,
    pub update_time: Option<f64>,
}

/// Everything the tracker knows about the run at one tick, apart from the splits themselves.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Snapshot {
    pub purpose: CounterPurpose,
    pub severity: SeverityType,
    pub display: DisplayToggles,
    pub progress: RunProgress,
    pub page: PageHints,
}

impl Snapshot {
    /// Class used by all header and footer cells
    pub fn major_class(&self) -> &'static str {
        if self.display.high_contrast {
            "major dark"
        } else {
            "major"
        }
    }
}

/// One segment of the run. Times are in milliseconds.
#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct Split {
    pub name: String,
    pub combined_hits: u32,
    pub boss_hits: u32,
    pub way_hits: u32,
    pub pb_hits: u32,
    /// 0 marks a history entry that isn't part of the current run
    pub run_id: u32,
    /// Time spent in this split. Negative when not applicable.
    pub duration: f64,
    pub duration_pb: f64,
    pub duration_gold: f64,
    #[serde(rename = "comulativePb")]
    pub cumulative_pb: u32,
    #[serde(rename = "comulativeTime")]
    pub cumulative_time: f64,
    #[serde(rename = "comulativeTimePb")]
    pub cumulative_time_pb: f64,
    pub is_hitless: bool,
    pub is_hitless_pb: bool,
    pub is_reached: bool,
    #[derivative(Default(value = "true"))]
    pub do_display: bool,
    pub class_color: String,
    pub class_name: String,
    pub class_hits: String,
    pub class_time: String,
}

impl Split {
    /// Boss and way hits relative to the PB of this split
    pub fn hit_diff(&self) -> i64 {
        i64::from(self.combined_hits) - i64::from(self.pb_hits)
    }

    pub fn is_history(&self) -> bool {
        self.run_id == 0
    }
}

/// Run-wide hit totals, summed up by the tracker.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalHits {
    pub combined: u32,
    pub way: u32,
    pub pb: u32,
    pub class: String,
}

impl TotalHits {
    pub fn boss(&self) -> i64 {
        i64::from(self.combined) - i64::from(self.way)
    }

    pub fn diff(&self) -> i64 {
        i64::from(self.combined) - i64::from(self.pb)
    }
}
