use super::{RowBuilder, cell, class_list, row};
use crate::format::{format_count, format_duration, format_time_diff, span};
use crate::layout::ColumnLayout;
use hcm_common::snapshot::{CounterPurpose, HitColumns};
use log::trace;

impl RowBuilder<'_> {
    /// Run totals below the split rows. Only drawn for the counter purposes.
    pub fn footer(&self) -> String {
        let display = &self.snapshot.display;
        if !display.show_footer || !self.snapshot.purpose.is_counter() {
            return String::new();
        }

        let major = self.major_class;
        let mut cells = if display.show_numbers {
            self.total_hits_cells()
        } else {
            let name = self
                .snapshot
                .progress
                .split_active
                .and_then(|index| self.splits.get(index))
                .map_or("&nbsp;", |split| split.name.as_str());
            format!(
                r#"<td colspan="{}" class="{major} bottom right">{name}</td>"#,
                1 + self.layout.hit_cols
            )
        };

        let time_cell = |content: &str| {
            format!(r#"<td class="{major} bottom timestamp right">{content}</td>"#)
        };
        if display.show_time {
            cells += &time_cell(&span(
                "time_total_current",
                "",
                &format_duration(self.times.current, true),
            ));
        }
        if display.show_time_diff {
            let class_time = self.splits.last().map_or("", |split| split.class_time.as_str());
            cells += &time_cell(&span(
                "time_total_diff",
                class_time,
                &format_time_diff(self.times.current - self.times.pb, true),
            ));
        }
        if display.show_time_pb {
            cells += &time_cell(&format_duration(self.times.pb, true));
        }
        if display.show_session_progress {
            cells += &format!(r#"<td class="{major} bottom">&nbsp;</td>"#);
        }

        row("", &cells)
    }

    fn total_hits_cells(&self) -> String {
        let display = &self.snapshot.display;
        let totals = self.total_hits;
        let total_class = class_list(&[self.major_class, &totals.class, "bottom"]);
        let count = |n: i64, force_signed: bool| format_count(n, force_signed, display.use_roman);

        let mut cells = cell(&class_list(&[&total_class, "right"]), "Total:");
        match display.hit_columns {
            HitColumns::Hidden => {}
            HitColumns::Combined => {
                cells += &cell(&total_class, &count(totals.combined.into(), false));
            }
            HitColumns::BossAndWay => {
                cells += &cell(&total_class, &count(totals.boss(), false));
                cells += &cell(&total_class, &count(totals.way.into(), false));
            }
        }
        if display.shows_diff_column() {
            cells += &cell(&total_class, &count(totals.diff(), true));
        }
        if display.show_pb {
            cells += &cell(&total_class, &count(totals.pb.into(), false));
        }
        cells
    }

    /// The run time on a row of its own.
    pub fn footer_time(&self) -> String {
        if !self.snapshot.display.show_time_footer {
            return String::new();
        }

        let major = self.major_class;
        let total = span(
            "time_total_footer",
            "",
            &format_duration(self.times.current, true),
        );
        let ColumnLayout { max_cols, hit_cols } = self.layout;

        match self.snapshot.purpose {
            CounterPurpose::SplitCounter
            | CounterPurpose::NoDeath
            | CounterPurpose::ResetCounter => {
                let filler = max_cols.saturating_sub(1 + hit_cols);
                let mut cells = format!(r#"<td class="{major} bottom left">Time:</td>"#);
                cells += &format!(
                    r#"<td colspan="{hit_cols}" class="{major} bottom timestamp">{total}</td>"#
                );
                cells += &format!(r#"<td colspan="{filler}" class="{major} bottom">&nbsp;</td>"#);
                row("", &cells)
            }
            CounterPurpose::Checklist | CounterPurpose::DeathCounter => row(
                self.summary_row_class(),
                &format!(
                    r#"<td colspan="{max_cols}" class="bottom timestamp left">Time: {total}</td>"#
                ),
            ),
            CounterPurpose::Unsupported(n) => {
                trace!("No time footer for unsupported purpose {n}");
                String::new()
            }
        }
    }
}
