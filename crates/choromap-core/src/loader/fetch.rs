// crates/choromap-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::Result;
use std::io::Read;
use tracing::debug;

/// Blocking GET returning the response body as a reader.
///
/// No retry and no explicit timeout; client defaults apply and any transport
/// or status failure propagates as [`crate::ChoroError::Http`].
pub fn open_url(url: &str) -> Result<Box<dyn Read>> {
    debug!(url, "fetching remote input");
    let resp = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(Box::new(resp))
}
