use crate::error::{CliError, Result};
use protparam::engine::error::AnalysisError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const STDIN_PATH: &str = "-";

/// Reads input text from a file, or from stdin when the path is `-`.
///
/// Bytes that are not valid UTF-8 are reported as an invalid input format
/// rather than decoded lossily.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == STDIN_PATH {
        debug!("Reading input from stdin.");
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else {
        debug!("Reading input from {:?}", path);
        std::fs::read(path)?
    };
    decode(bytes, path)
}

fn decode(bytes: Vec<u8>, origin: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        CliError::Analysis(AnalysisError::InvalidInputFormat(format!(
            "'{}' is not UTF-8 text: {}",
            origin.display(),
            e.utf8_error()
        )))
    })
}
