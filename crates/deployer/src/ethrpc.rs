//! RPC plumbing for the deployment. A single HTTP connection is all the
//! sequence needs, so there is no batching or instrumentation layered on top
//! of the transport.

use anyhow::{Context as _, Result};
use ethcontract::{
    dyns::{DynTransport, DynWeb3},
    web3::transports::Http,
};
use url::Url;

pub type Web3 = DynWeb3;

/// Creates a `Web3` instance over an HTTP transport to the given node.
pub fn web3(url: &Url) -> Result<Web3> {
    let http = Http::new(url.as_str())
        .with_context(|| format!("failed to create HTTP transport for {url}"))?;
    Ok(Web3::new(DynTransport::new(http)))
}
