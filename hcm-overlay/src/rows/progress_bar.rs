use super::RowBuilder;
use log::trace;

impl RowBuilder<'_> {
    /// One segment per finished split of the current run, followed by a spacer and the open
    /// remainder once the first unreached split comes up.
    pub fn progress_bar(&self) -> String {
        let display = &self.snapshot.display;
        if !display.show_progress_bar {
            return String::new();
        }

        let count = self.splits.len();
        let percentage = if count > 0 { 100.0 / count as f64 } else { 0.0 };

        let mut segments = String::new();
        for split in self.splits {
            if !split.is_reached {
                segments += r#"<td class="progress_spacer"> </td><td class="progress_open"> </td>"#;
                break;
            }
            if split.is_history() {
                continue;
            }

            let color = if display.progress_bar_colored {
                split.class_color.as_str()
            } else {
                "better"
            };
            segments += &format!(
                r#"<td class="progress_{color}" style="width: {percentage}%; width: calc(100% / {count});"></td>"#
            );
        }
        trace!("Progress bar at {percentage}% per split");

        format!(
            r#"<tr><td class="{} progress_cell" colspan="{}"><table class="progress"><tr>{segments}</tr></table></td></tr>"#,
            self.major_class, self.layout.max_cols
        )
    }
}
