//! `gitto query`: print the assembled page metadata as JSON.

use crate::site::Site;
use anyhow::Result;
use std::io::{Write, stdout};

/// Write [`crate::seo::PageMetadata`] to stdout.
pub fn run_query(site: &Site<'_>, pretty: bool) -> Result<()> {
    let json = to_json(site, pretty)?;
    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

fn to_json(site: &Site<'_>, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(&site.metadata)?
    } else {
        serde_json::to_string(&site.metadata)?
    };
    Ok(json)
}
