use super::{cell, class_list};
use crate::format::{Icon, format_count, format_duration, format_time_diff, span};
use hcm_common::snapshot::{
    CounterPurpose, DisplayToggles, HitColumns, PbTotals, Snapshot, Split,
};

/// The cells of one counter row. `highlight` and `bottom` are either empty or the class of
/// the same name.
pub(super) struct SplitCells<'a> {
    pub snapshot: &'a Snapshot,
    pub split: &'a Split,
    pub index: usize,
    pub is_current: bool,
    /// Hit values of splits that aren't settled yet are replaced by the blank marker
    pub show_blank: bool,
    pub highlight: &'static str,
    pub bottom: &'static str,
}

impl SplitCells<'_> {
    fn display(&self) -> &DisplayToggles {
        &self.snapshot.display
    }

    fn blank(&self) -> String {
        if self.display().show_numbers {
            "-".to_string()
        } else {
            Icon::Bar.to_string()
        }
    }

    fn hit_classes(&self) -> String {
        class_list(&[&self.split.class_hits, self.highlight, self.bottom])
    }

    fn count(&self, n: i64, force_signed: bool) -> String {
        format_count(n, force_signed, self.display().use_roman)
    }

    /// Icon for `count`, or a cross in no death mode when the run wasn't hitless.
    fn icon(&self, count: i64, is_hitless: bool) -> String {
        if self.snapshot.purpose == CounterPurpose::NoDeath && !is_hitless {
            Icon::Cross.to_string()
        } else {
            Icon::for_count(count).to_string()
        }
    }

    fn untouched(&self) -> bool {
        !self.split.is_reached && self.split.duration == 0.0
    }

    pub fn hits(&self) -> String {
        let hit_cell = |hits: u32| {
            let content = if self.show_blank {
                self.blank()
            } else if self.display().show_numbers {
                self.count(hits.into(), false)
            } else {
                self.icon(hits.into(), self.split.is_hitless)
            };
            cell(&self.hit_classes(), &content)
        };

        match self.display().hit_columns {
            HitColumns::Hidden => String::new(),
            HitColumns::Combined => hit_cell(self.split.combined_hits),
            HitColumns::BossAndWay => {
                hit_cell(self.split.boss_hits) + &hit_cell(self.split.way_hits)
            }
        }
    }

    pub fn diff(&self) -> String {
        if !self.display().shows_diff_column() {
            return String::new();
        }

        let diff = self.split.hit_diff();
        let content = if !self.split.is_reached || (self.show_blank && diff == 0) {
            self.blank()
        } else {
            self.count(diff, true)
        };
        cell(&self.hit_classes(), &content)
    }

    pub fn pb(&self) -> String {
        let display = self.display();
        if !display.show_pb {
            return String::new();
        }

        let content = if display.show_numbers {
            let pb = self.count(self.split.pb_hits.into(), false);
            let cumulative = self.count(self.split.cumulative_pb.into(), false);
            let cumulative = format!("({cumulative})");
            match display.pb_totals {
                PbTotals::Hidden => format!("&nbsp;{pb}"),
                PbTotals::Inline => format!("&nbsp;{pb}{cumulative}"),
                PbTotals::Subscript => format!("&nbsp;{pb}<sub>&nbsp;{cumulative}</sub>"),
            }
        } else {
            self.icon(self.split.pb_hits.into(), self.split.is_hitless_pb)
        };
        cell(&self.hit_classes(), &content)
    }

    pub fn time(&self) -> String {
        if !self.display().show_time {
            return String::new();
        }

        // Splits ahead of the run show how long they have been running so far
        let value = if self.split.is_reached {
            format_duration(self.split.cumulative_time, false)
        } else {
            format_time_diff(self.split.duration, false)
        };

        let content = if self.is_current {
            span("time_split_current", "", &value)
        } else if self.untouched() {
            self.blank()
        } else {
            value
        };
        cell(
            &class_list(&[self.highlight, self.bottom, "timestamp", "right"]),
            &content,
        )
    }

    pub fn time_diff(&self) -> String {
        if !self.display().show_time_diff {
            return String::new();
        }

        let split = self.split;
        let content = if split.duration_pb <= 0.0 {
            self.blank()
        } else {
            let diff = if split.is_reached {
                split.cumulative_time - split.cumulative_time_pb
            } else {
                split.duration - split.duration_pb
            };
            let value = format_time_diff(diff, true);

            if self.is_current {
                span("time_split_diff", &split.class_time, &value)
            } else if self.untouched() {
                self.blank()
            } else {
                value
            }
        };
        cell(
            &class_list(&[&split.class_time, self.highlight, self.bottom, "right"]),
            &content,
        )
    }

    pub fn pb_time(&self) -> String {
        if !self.display().show_time_pb {
            return String::new();
        }

        let content = if self.split.duration_pb <= 0.0 {
            self.blank()
        } else {
            format_duration(self.split.cumulative_time_pb, false)
        };
        cell(
            &class_list(&[self.highlight, self.bottom, "timestamp", "right"]),
            &content,
        )
    }

    /// A star marks the furthest split reached in any run and in this session.
    pub fn session_progress(&self) -> String {
        if !self.display().show_session_progress {
            return String::new();
        }

        let progress = &self.snapshot.progress;
        let content = if progress.best_progress == Some(self.index)
            || progress.session_progress == Some(self.index)
        {
            Icon::Star.to_string()
        } else {
            "&nbsp;".to_string()
        };
        cell(&class_list(&[self.highlight, self.bottom]), &content)
    }
}
