/// Passage lookup: build the request, send it, decode, print.
use std::io::Write;

use tracing::debug;

use crate::cli::output::{DebugTimer, write_passage};
use crate::config::Config;
use crate::esv::response::check;
use crate::esv::{EsvError, PassageRequest, Transport};

/// Fetch `reference` through `transport` and write the passage block to `out`.
///
/// # Errors
///
/// Returns `EsvError` for transport failures, non-200 statuses, empty or
/// malformed bodies, and references the API could not match.
pub fn run<T, W>(reference: &str, config: &Config, transport: &T, out: &mut W) -> Result<(), EsvError>
where
    T: Transport + ?Sized,
    W: Write,
{
    let request =
        PassageRequest::build(&config.base_url, reference, &config.options, &config.api_key);
    debug!(url = %request.url, "requesting passage");

    let t_send = DebugTimer::start("send");
    let raw = transport.send(&request)?;
    drop(t_send);

    let t_decode = DebugTimer::start("decode");
    let response = check(raw)?;
    drop(t_decode);

    let passage = response.into_passage(reference)?;
    debug!(canonical = %passage.canonical, "passage found");

    write_passage(out, &passage)?;
    Ok(())
}
