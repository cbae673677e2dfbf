use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame written by the tracker, used when no input is given on the command line
    pub frame_path: PathBuf,
    /// Where the rendered rows go when no output is given, stdout if unset
    pub output_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_path: PathBuf::from("hcm-frame.json"),
            output_path: None,
        }
    }
}
