use super::{RowBuilder, row};
use hcm_common::snapshot::{CounterPurpose, HitColumns};
use log::trace;

impl RowBuilder<'_> {
    pub fn headline(&self) -> String {
        let display = &self.snapshot.display;
        if !display.show_headline {
            return String::new();
        }

        let major = self.major_class;
        match self.snapshot.purpose {
            CounterPurpose::SplitCounter
            | CounterPurpose::NoDeath
            | CounterPurpose::ResetCounter => {}
            CounterPurpose::Checklist => {
                return format!(
                    r#"<tr><td class="{major} left">Boss</td><td class="{major}" width="30px">Done</td></tr>"#
                );
            }
            purpose @ (CounterPurpose::DeathCounter | CounterPurpose::Unsupported(_)) => {
                trace!("No headline for {purpose}");
                return String::new();
            }
        }

        let narrow = |text: &str| format!(r#"<td class="{major}" width="30px">{text}</td>"#);
        let time = |text: &str, width: u32| {
            format!(r#"<td class="{major} right" width="{width}px">{text}</td>"#)
        };

        let active = self
            .snapshot
            .progress
            .split_active
            .map_or_else(|| "-".to_string(), |index| index.to_string());
        let mut cells = format!(
            r#"<td class="{major} left">Split ({active} / {})</td>"#,
            self.splits.len()
        );

        match display.hit_columns {
            HitColumns::Hidden => {}
            HitColumns::Combined => {
                cells += &narrow(if self.snapshot.purpose == CounterPurpose::ResetCounter {
                    "Resets"
                } else {
                    "Now"
                })
            }
            HitColumns::BossAndWay => {
                cells += &narrow("Boss");
                cells += &narrow("Way");
            }
        }
        if display.shows_diff_column() {
            cells += &narrow("Diff");
        }
        if display.show_pb {
            cells += &format!(r#"<td class="{major}">PB</td>"#);
        }
        if display.show_time {
            cells += &time("Time", 110);
        }
        if display.show_time_diff {
            cells += &time("Delta", 90);
        }
        if display.show_time_pb {
            cells += &time("PB", 110);
        }
        if display.show_session_progress {
            cells += &format!(r#"<td class="{major}" width="22px">&nbsp;</td>"#);
        }

        row("", &cells)
    }
}

#[cfg(test)]
mod test {
    use super::super::fixtures::*;
    use hcm_common::snapshot::{
        CounterPurpose, DisplayToggles, HitColumns, RunProgress, Split, TotalHits,
    };
    use indoc::indoc;

    fn headline(purpose: CounterPurpose, display: DisplayToggles, splits: &[Split]) -> String {
        let snapshot = snapshot(
            purpose,
            display,
            RunProgress {
                split_active: Some(1),
                ..Default::default()
            },
        );
        render_with(&snapshot, splits, &TotalHits::default(), |rows| {
            rows.headline()
        })
    }

    #[test]
    fn test_headline_off() {
        for purpose in [
            CounterPurpose::SplitCounter,
            CounterPurpose::Checklist,
            CounterPurpose::DeathCounter,
            CounterPurpose::NoDeath,
            CounterPurpose::ResetCounter,
        ] {
            let display = DisplayToggles {
                show_headline: false,
                hit_columns: HitColumns::Combined,
                show_time: true,
                ..Default::default()
            };
            assert_eq!(headline(purpose, display, &[]), "", "{purpose}");
        }
    }

    #[test]
    fn test_headline_all_columns() {
        let display = DisplayToggles {
            show_headline: true,
            hit_columns: HitColumns::BossAndWay,
            show_numbers: true,
            show_diff: true,
            show_pb: true,
            show_time: true,
            show_time_diff: true,
            show_time_pb: true,
            show_session_progress: true,
            ..Default::default()
        };
        let splits = vec![Split::default(); 3];
        let expected = indoc!(
            r#"
            <tr><td class="major left">Split (1 / 3)</td>
            <td class="major" width="30px">Boss</td>
            <td class="major" width="30px">Way</td>
            <td class="major" width="30px">Diff</td>
            <td class="major">PB</td>
            <td class="major right" width="110px">Time</td>
            <td class="major right" width="90px">Delta</td>
            <td class="major right" width="110px">PB</td>
            <td class="major" width="22px">&nbsp;</td></tr>"#
        )
        .replace('\n', "");
        assert_eq!(
            headline(CounterPurpose::SplitCounter, display, &splits),
            expected
        );
    }

    #[test]
    fn test_headline_combined_hits() {
        let display = DisplayToggles {
            show_headline: true,
            hit_columns: HitColumns::Combined,
            show_diff: true,
            ..Default::default()
        };
        assert_eq!(
            headline(CounterPurpose::ResetCounter, display, &[]),
            r#"<tr><td class="major left">Split (1 / 0)</td><td class="major" width="30px">Resets</td></tr>"#
        );
        assert_eq!(
            headline(CounterPurpose::NoDeath, display, &[]),
            r#"<tr><td class="major left">Split (1 / 0)</td><td class="major" width="30px">Now</td></tr>"#
        );
    }

    #[test]
    fn test_headline_other_purposes() {
        let display = DisplayToggles {
            show_headline: true,
            high_contrast: true,
            ..Default::default()
        };
        assert_eq!(
            headline(CounterPurpose::Checklist, display, &[]),
            r#"<tr><td class="major dark left">Boss</td><td class="major dark" width="30px">Done</td></tr>"#
        );
        assert_eq!(headline(CounterPurpose::DeathCounter, display, &[]), "");
        assert_eq!(headline(CounterPurpose::Unsupported(9), display, &[]), "");
    }

    #[test]
    fn test_headline_without_active_split() {
        let snapshot = snapshot(
            CounterPurpose::SplitCounter,
            DisplayToggles {
                show_headline: true,
                ..Default::default()
            },
            RunProgress::default(),
        );
        assert_eq!(
            render_with(&snapshot, &[], &TotalHits::default(), |rows| rows.headline()),
            r#"<tr><td class="major left">Split (- / 0)</td></tr>"#
        );
    }
}
