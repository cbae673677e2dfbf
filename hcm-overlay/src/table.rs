//! Assembly of the complete table body.

use crate::layout::{ColumnLayout, RunTimes};
use crate::rows::RowBuilder;
use hcm_common::frame::Frame;
use hcm_common::snapshot::{Snapshot, Split, TotalHits};
use log::debug;

/// Renders all rows of the overlay table in display order: attempts, headline, progress bar,
/// split rows, footer and time footer.
///
/// `layout` and `times` are used as given, the colspans are not derived from the snapshot here.
pub fn render(
    snapshot: &Snapshot,
    splits: &[Split],
    total_hits: &TotalHits,
    layout: ColumnLayout,
    times: RunTimes,
) -> String {
    let rows = RowBuilder::new(snapshot, splits, total_hits, layout, times);

    let table = [
        rows.attempts(),
        rows.headline(),
        rows.progress_bar(),
        rows.splits(),
        rows.footer(),
        rows.footer_time(),
    ]
    .concat();

    debug!(
        "Rendered {} for {} splits into {} bytes",
        snapshot.purpose,
        splits.len(),
        table.len()
    );
    table
}

/// Renders a frame, filling in the layout and times the tracker didn't send.
pub fn render_frame(frame: &Frame) -> String {
    let computed = ColumnLayout::for_snapshot(&frame.snapshot);
    let layout = ColumnLayout {
        max_cols: frame.max_cols.unwrap_or(computed.max_cols),
        hit_cols: frame.hit_cols.unwrap_or(computed.hit_cols),
    };
    if layout != computed {
        debug!("Using the sent layout {layout:?} instead of {computed:?}");
    }

    let summed = RunTimes::from_splits(&frame.splits);
    let times = RunTimes {
        current: frame.total_time_current.unwrap_or(summed.current),
        pb: frame.total_time_pb.unwrap_or(summed.pb),
    };

    render(
        &frame.snapshot,
        &frame.splits,
        &frame.total_hits,
        layout,
        times,
    )
}
