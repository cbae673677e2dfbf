use super::{RowBuilder, row};
use crate::format::Icon;
use hcm_common::snapshot::CounterPurpose;
use log::debug;

impl RowBuilder<'_> {
    /// The rows in between header and footer, depending on the purpose.
    pub fn splits(&self) -> String {
        match self.snapshot.purpose {
            CounterPurpose::SplitCounter
            | CounterPurpose::NoDeath
            | CounterPurpose::ResetCounter => self.counter_rows(),
            CounterPurpose::Checklist => self.checklist_rows(),
            CounterPurpose::DeathCounter => self.death_counter_row(),
            CounterPurpose::Unsupported(n) => {
                debug!("Purpose {n} is not supported, no split rows are drawn");
                String::new()
            }
        }
    }

    /// A split counts as done once it has any hits.
    fn checklist_rows(&self) -> String {
        self.visible_range()
            .map(|index| {
                let split = &self.splits[index];
                let icon = if split.combined_hits > 0 {
                    Icon::Check
                } else {
                    Icon::Cross
                };
                row(
                    self.row_class(index),
                    &format!(r#"<td class="left">{}</td><td>{icon}</td>"#, split.name),
                )
            })
            .collect()
    }

    fn death_counter_row(&self) -> String {
        row(
            self.summary_row_class(),
            &format!(
                r#"<td class="bottom left">Deaths: {}</td>"#,
                self.total_hits.combined
            ),
        )
    }
}
