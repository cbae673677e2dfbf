use super::cells::SplitCells;
use super::{RowBuilder, cell, class_list, row};
use hcm_common::snapshot::CounterPurpose;
use log::trace;

impl RowBuilder<'_> {
    /// One row per displayed split with its hit and time columns.
    ///
    /// Without a footer the active split closes the table, so it and every row after it get the
    /// `bottom` class.
    pub(super) fn counter_rows(&self) -> String {
        let display = &self.snapshot.display;
        let progress = &self.snapshot.progress;
        let mut bottom = "";
        let mut rows = String::new();

        for index in self.visible_range() {
            let split = &self.splits[index];
            if !split.do_display {
                trace!("Skipping hidden split {index}");
                continue;
            }

            let is_current = progress.is_active(index);
            let show_blank = self.snapshot.purpose != CounterPurpose::ResetCounter
                && (!split.is_reached || (is_current && split.combined_hits == 0));
            let highlight = if display.highlight_active_split && is_current {
                "highlight"
            } else {
                ""
            };
            if !display.show_footer && is_current {
                bottom = "bottom";
            }

            let cells = SplitCells {
                snapshot: self.snapshot,
                split,
                index,
                is_current,
                show_blank,
                highlight,
                bottom,
            };
            let name = cell(
                &class_list(&[&split.class_name, highlight, bottom, "left"]),
                &split.name,
            );

            rows += &row(
                self.row_class(index),
                &[
                    name,
                    cells.hits(),
                    cells.diff(),
                    cells.pb(),
                    cells.time(),
                    cells.time_diff(),
                    cells.pb_time(),
                    cells.session_progress(),
                ]
                .concat(),
            );
        }
        rows
    }
}
