use crate::layout::{ColumnLayout, RunTimes};
use hcm_common::snapshot::{Snapshot, Split, TotalHits};
use log::warn;
use std::ops::Range;

mod attempts;
mod cells;
mod counter;
mod footer;
mod headline;
mod progress_bar;
mod splits;

/// Builds the individual table rows for one snapshot. Every builder returns an empty string
/// when its row is switched off.
pub struct RowBuilder<'a> {
    pub snapshot: &'a Snapshot,
    pub splits: &'a [Split],
    pub total_hits: &'a TotalHits,
    pub layout: ColumnLayout,
    pub times: RunTimes,
    /// Class of every header and footer cell
    pub major_class: &'static str,
}

impl<'a> RowBuilder<'a> {
    pub fn new(
        snapshot: &'a Snapshot,
        splits: &'a [Split],
        total_hits: &'a TotalHits,
        layout: ColumnLayout,
        times: RunTimes,
    ) -> Self {
        Self {
            snapshot,
            splits,
            total_hits,
            layout,
            times,
            major_class: snapshot.major_class(),
        }
    }

    /// Indices of the splits that get a row, clamped to the available splits.
    fn visible_range(&self) -> Range<usize> {
        let progress = &self.snapshot.progress;
        if progress.split_first > progress.split_last {
            warn!(
                "Split range is inverted ({} > {}), no split rows are drawn",
                progress.split_first, progress.split_last
            );
            return 0..0;
        }
        let end = progress
            .split_last
            .saturating_add(1)
            .min(self.splits.len());
        progress.split_first.min(end)..end
    }

    /// `current` for the active split, alternating `even`/`odd` under high contrast
    fn row_class(&self, index: usize) -> &'static str {
        if self.snapshot.progress.is_active(index) {
            "current"
        } else if !self.snapshot.display.high_contrast {
            ""
        } else if index % 2 == 0 {
            "even"
        } else {
            "odd"
        }
    }

    /// Stripe used by the single row layouts
    fn summary_row_class(&self) -> &'static str {
        if self.snapshot.display.high_contrast {
            "even"
        } else {
            ""
        }
    }
}

/// Joins CSS classes, skipping empty ones.
pub(crate) fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn row(class: &str, cells: &str) -> String {
    if class.is_empty() {
        format!("<tr>{cells}</tr>")
    } else {
        format!(r#"<tr class="{class}">{cells}</tr>"#)
    }
}

pub(crate) fn cell(class: &str, content: &str) -> String {
    if class.is_empty() {
        format!("<td>{content}</td>")
    } else {
        format!(r#"<td class="{class}">{content}</td>"#)
    }
}


#[cfg(test)]
mod test {
    use super::fixtures::*;
    use super::*;
    use hcm_common::snapshot::{CounterPurpose, DisplayToggles, RunProgress};

    fn visible(first: usize, last: usize, count: usize) -> Range<usize> {
        let snapshot = snapshot(
            CounterPurpose::SplitCounter,
            DisplayToggles::default(),
            RunProgress {
                split_first: first,
                split_last: last,
                ..Default::default()
            },
        );
        let splits = vec![Split::default(); count];
        let totals = TotalHits::default();
        RowBuilder::new(
            &snapshot,
            &splits,
            &totals,
            ColumnLayout::default(),
            RunTimes::default(),
        )
        .visible_range()
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible(0, 3, 4), 0..4);
        assert_eq!(visible(1, 2, 4), 1..3);
        assert_eq!(visible(0, 10, 4), 0..4);
        assert_eq!(visible(2, usize::MAX, 4), 2..4);
        assert_eq!(visible(6, 8, 4), 4..4);
        assert_eq!(visible(3, 1, 4), 0..0);
        assert_eq!(visible(0, 0, 0), 0..0);
    }

    #[test]
    fn test_row_class() {
        let mut snapshot = snapshot(
            CounterPurpose::SplitCounter,
            DisplayToggles::default(),
            RunProgress {
                split_active: Some(1),
                ..Default::default()
            },
        );
        let classes = |snapshot: &Snapshot| {
            let totals = TotalHits::default();
            let rows = RowBuilder::new(
                snapshot,
                &[],
                &totals,
                ColumnLayout::default(),
                RunTimes::default(),
            );
            (0..4).map(|i| rows.row_class(i)).collect::<Vec<_>>().join(",")
        };

        assert_eq!(classes(&snapshot), ",current,,");
        snapshot.display.high_contrast = true;
        assert_eq!(classes(&snapshot), "even,current,even,odd");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list(&["name", "", "bottom", "left"]), "name bottom left");
        assert_eq!(class_list(&["", ""]), "");
        assert_eq!(class_list(&[]), "");
    }

    #[test]
    fn test_row_and_cell() {
        assert_eq!(row("", "<td>a</td>"), "<tr><td>a</td></tr>");
        assert_eq!(row("odd", ""), r#"<tr class="odd"></tr>"#);
        assert_eq!(cell("", "x"), "<td>x</td>");
        assert_eq!(cell("left", "x"), r#"<td class="left">x</td>"#);
    }
}
