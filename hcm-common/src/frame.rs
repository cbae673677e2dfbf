use crate::snapshot::{Snapshot, Split, TotalHits};
use crate::wire::FrameRaw;
use log::{debug, error};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Failed to read frame file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse frame: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One update tick as delivered by the tracker: the snapshot, its splits and the run totals.
///
/// The layout and time totals are optional, when missing the renderer derives them itself.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub splits: Vec<Split>,
    pub total_hits: TotalHits,
    pub max_cols: Option<usize>,
    pub hit_cols: Option<usize>,
    pub total_time_current: Option<f64>,
    pub total_time_pb: Option<f64>,
}

impl From<FrameRaw> for Frame {
    fn from(raw: FrameRaw) -> Self {
        Self {
            snapshot: raw.data.into(),
            splits: raw.splits,
            total_hits: raw.total_hits,
            max_cols: raw.max_cols,
            hit_cols: raw.hit_cols,
            total_time_current: raw.total_time_current,
            total_time_pb: raw.total_time_pb,
        }
    }
}

impl Frame {
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let raw: FrameRaw = serde_json::from_str(json)?;
        debug!(
            "Parsed frame with {} splits for {}",
            raw.splits.len(),
            raw.data.purpose
        );
        Ok(raw.into())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FrameError> {
        let path = path.as_ref();
        let json = read_to_string(path).map_err(|source| {
            error!("Failed to read frame file: {}", source);
            FrameError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::from_json(&json).inspect_err(|e| error!("{e}"))
    }
}
