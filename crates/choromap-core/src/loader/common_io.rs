// crates/choromap-core/src/loader/common_io.rs
use crate::error::{ChoroError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a local file, buffers it, and transparently unwraps a `.gz` suffix.
/// Returns a generic reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ChoroError::NotFound(format!("Input not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(ChoroError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
