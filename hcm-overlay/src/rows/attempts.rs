use super::RowBuilder;

impl RowBuilder<'_> {
    pub fn attempts(&self) -> String {
        if !self.snapshot.display.show_attempts {
            return String::new();
        }

        format!(
            r#"<tr><td class="{} top" colspan="{}">Run # {}</td></tr>"#,
            self.major_class, self.layout.max_cols, self.snapshot.progress.attempts
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::fixtures::*;
    use hcm_common::snapshot::{CounterPurpose, DisplayToggles, RunProgress, TotalHits};

    #[test]
    fn test_attempts_row() {
        let mut snapshot = snapshot(
            CounterPurpose::SplitCounter,
            DisplayToggles {
                show_attempts: true,
                show_time: true,
                ..Default::default()
            },
            RunProgress {
                attempts: 42,
                ..Default::default()
            },
        );
        let totals = TotalHits::default();

        assert_eq!(
            render_with(&snapshot, &[], &totals, |rows| rows.attempts()),
            r#"<tr><td class="major top" colspan="2">Run # 42</td></tr>"#
        );

        snapshot.display.high_contrast = true;
        assert_eq!(
            render_with(&snapshot, &[], &totals, |rows| rows.attempts()),
            r#"<tr><td class="major dark top" colspan="2">Run # 42</td></tr>"#
        );

        snapshot.display.show_attempts = false;
        assert_eq!(
            render_with(&snapshot, &[], &totals, |rows| rows.attempts()),
            ""
        );
    }
}
