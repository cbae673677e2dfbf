//! The JSON layout the hit tracker writes on every update.
//!
//! The tracker sends a flat bag of toggles. These raw types mirror it one to one and get
//! converted into the grouped types from [`crate::snapshot`] before rendering.

use crate::snapshot::{
    CounterPurpose, DisplayToggles, HitColumns, PageHints, PbTotals, RunProgress, SeverityType,
    Snapshot, Split, TotalHits,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Unprocessed version of [`Snapshot`], as found under the `data` key of a frame
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HcmDataRaw {
    pub purpose: CounterPurpose,
    pub severity: SeverityType,
    pub timer_paused: bool,
    pub run_active: i64,
    pub show_hits: bool,
    pub show_hitscombined: bool,
    pub show_numbers: bool,
    pub show_diff: bool,
    pub show_pb: bool,
    pub show_time: bool,
    pub show_time_diff: bool,
    pub show_session_progress: bool,
    pub show_time_pb: bool,
    pub show_footer: bool,
    pub show_attempts: bool,
    pub show_headline: bool,
    pub show_time_footer: bool,
    pub show_progress_bar: bool,
    pub progress_bar_colored: bool,
    pub high_contrast: bool,
    pub high_contrast_names: bool,
    pub highlight_active_split: bool,
    pub use_roman: bool,
    #[serde(rename = "supPB")]
    pub sup_pb: bool,
    pub show_pb_totals: bool,
    pub split_first: i64,
    pub split_last: i64,
    pub split_active: i64,
    pub attempts: u32,
    pub best_progress: i64,
    pub session_progress: i64,
    pub font_name: String,
    pub font_url: String,
    pub css_url: String,
    pub update_time: Option<f64>,
    pub width: u32,
    pub height: u32,
}

/// Negative indices are how the tracker says "none"
fn index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

impl From<HcmDataRaw> for Snapshot {
    fn from(raw: HcmDataRaw) -> Self {
        if raw.split_first < 0 || raw.split_last < 0 {
            debug!(
                "Clamping negative split range {}..={} to zero",
                raw.split_first, raw.split_last
            );
        }
        Self {
            purpose: raw.purpose,
            severity: raw.severity,
            display: DisplayToggles {
                hit_columns: HitColumns::from_flags(raw.show_hits, raw.show_hitscombined),
                show_numbers: raw.show_numbers,
                show_diff: raw.show_diff,
                show_pb: raw.show_pb,
                pb_totals: PbTotals::from_flags(raw.show_pb_totals, raw.sup_pb),
                show_time: raw.show_time,
                show_time_diff: raw.show_time_diff,
                show_time_pb: raw.show_time_pb,
                show_session_progress: raw.show_session_progress,
                show_footer: raw.show_footer,
                show_time_footer: raw.show_time_footer,
                show_progress_bar: raw.show_progress_bar,
                progress_bar_colored: raw.progress_bar_colored,
                show_attempts: raw.show_attempts,
                show_headline: raw.show_headline,
                high_contrast: raw.high_contrast,
                high_contrast_names: raw.high_contrast_names,
                highlight_active_split: raw.highlight_active_split,
                use_roman: raw.use_roman,
            },
            progress: RunProgress {
                split_active: index(raw.split_active),
                split_first: index(raw.split_first).unwrap_or_default(),
                split_last: index(raw.split_last).unwrap_or_default(),
                attempts: raw.attempts,
                best_progress: index(raw.best_progress),
                session_progress: index(raw.session_progress),
            },
            page: PageHints {
                width: raw.width,
                height: raw.height,
                timer_paused: raw.timer_paused,
                run_active: raw.run_active != 0,
                font_name: raw.font_name,
                font_url: raw.font_url,
                css_url: raw.css_url,
                update_time: raw.update_time,
            },
        }
    }
}

/// Unprocessed version of [`crate::frame::Frame`]
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameRaw {
    pub data: HcmDataRaw,
    pub splits: Vec<Split>,
    pub total_hits: TotalHits,
    pub max_cols: Option<usize>,
    pub hit_cols: Option<usize>,
    pub total_time_current: Option<f64>,
    pub total_time_pb: Option<f64>,
}

#[cfg(test)]
mod test {
    use super::*;
    use indoc::indoc;

    const DATA_STRING: &str = indoc!(
        r#"{
            "purpose": 3,
            "severity": 2,
            "show_hits": true,
            "show_hitscombined": false,
            "show_numbers": true,
            "show_diff": true,
            "show_pb": true,
            "show_pb_totals": true,
            "supPB": true,
            "show_time": true,
            "high_contrast": true,
            "split_first": 0,
            "split_last": 12,
            "split_active": 4,
            "attempts": 57,
            "best_progress": 6,
            "session_progress": -1,
            "run_active": 1,
            "css_url": "stylesheet.css",
            "width": 400,
            "height": 600
        }"#
    );

    #[test]
    fn test_deser_data() {
        let raw: HcmDataRaw = serde_json::from_str(DATA_STRING).unwrap();
        assert_eq!(raw.purpose, CounterPurpose::NoDeath);
        assert_eq!(raw.severity, SeverityType::ComparePB);
        assert!(raw.sup_pb);
        assert_eq!(raw.session_progress, -1);
        assert_eq!(raw.update_time, None);
    }

    #[test]
    fn test_data_into_snapshot() {
        let raw: HcmDataRaw = serde_json::from_str(DATA_STRING).unwrap();
        let snapshot = Snapshot::from(raw);

        assert_eq!(snapshot.purpose, CounterPurpose::NoDeath);
        assert_eq!(snapshot.display.hit_columns, HitColumns::BossAndWay);
        assert_eq!(snapshot.display.pb_totals, PbTotals::Subscript);
        assert!(snapshot.display.shows_diff_column());
        assert!(snapshot.display.high_contrast);
        assert!(!snapshot.display.show_footer);
        assert_eq!(
            snapshot.progress,
            RunProgress {
                split_active: Some(4),
                split_first: 0,
                split_last: 12,
                attempts: 57,
                best_progress: Some(6),
                session_progress: None,
            }
        );
        assert!(snapshot.page.run_active);
        assert_eq!(snapshot.page.css_url, "stylesheet.css");
        assert_eq!(snapshot.page.width, 400);
    }

    #[test]
    fn test_unknown_purpose_is_kept() {
        let raw: HcmDataRaw = serde_json::from_str(r#"{ "purpose": 42 }"#).unwrap();
        assert_eq!(Snapshot::from(raw).purpose, CounterPurpose::Unsupported(42));
    }

    #[test]
    fn test_out_of_range_modes_are_kept() {
        let raw: HcmDataRaw =
            serde_json::from_str(r#"{ "purpose": -1, "severity": 256 }"#).unwrap();
        let snapshot = Snapshot::from(raw);
        assert_eq!(snapshot.purpose, CounterPurpose::Unsupported(-1));
        assert_eq!(snapshot.severity, SeverityType::Unsupported(256));

        let frame: FrameRaw =
            serde_json::from_str(r#"{ "data": { "purpose": 300 } }"#).unwrap();
        assert_eq!(frame.data.purpose, CounterPurpose::Unsupported(300));
    }

    #[test]
    fn test_negative_range_is_clamped() {
        let raw = HcmDataRaw {
            split_first: -3,
            split_last: -1,
            split_active: -1,
            ..Default::default()
        };
        let progress = Snapshot::from(raw).progress;
        assert_eq!(progress.split_first, 0);
        assert_eq!(progress.split_last, 0);
        assert_eq!(progress.split_active, None);
    }

    #[test]
    fn test_ser_frame() {
        let frame = FrameRaw {
            splits: vec![Split {
                name: "Vordt".to_string(),
                ..Default::default()
            }],
            max_cols: Some(4),
            ..Default::default()
        };
        let serialized = serde_json::to_string(&frame).unwrap();
        assert!(serialized.contains(r#""totalHits""#));
        assert!(serialized.contains(r#""maxCols":4"#));
        assert!(serialized.contains(r#""supPB":false"#));
        let deser: FrameRaw = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deser, frame);
    }
}
