//! Local preview server over the built output directory.

mod lifecycle;
mod path;
mod response;

pub use lifecycle::setup_shutdown_handler;

use crate::{
    cli::build::build_site,
    config::{BaseUrl, SiteConfig},
    debug, log,
    site::Site,
};
use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Request, Server};

/// Worker threads answering requests
const SERVE_THREADS: usize = 4;

/// Bind, build the site, then serve it until Ctrl+C.
///
/// Binding comes first so links pointing at the local server use the port
/// actually bound.
pub fn serve_site(site: &Site) -> Result<()> {
    let config = site.config;

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;

    match moved_config(site, addr.port()) {
        Some(moved) => {
            let base_url = BaseUrl::resolve(&moved)?;
            debug!("serve"; "links now point at {}", base_url);
            build_site(&Site::with_posts(&moved, base_url, site.posts.clone(), site.year))?;
        }
        None => build_site(site)?,
    }

    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    run_request_loop(&server, config.build.output.clone())
}

/// Config re-pointed at `port` when the bind moved off the configured port
/// and the site links to the local server.
fn moved_config(site: &Site<'_>, port: u16) -> Option<SiteConfig> {
    let config = site.config;
    if port == config.serve.port {
        return None;
    }
    let local = BaseUrl::parse(&config.serve.local_url()).ok()?;
    if site.base_url != local {
        return None;
    }

    let mut moved = config.clone();
    moved.serve.port = port;
    moved.site.info.url = Some(moved.serve.local_url());
    Some(moved)
}

fn run_request_loop(server: &Server, output: PathBuf) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(SERVE_THREADS)
        .build()
        .context("failed to create thread pool")?;

    let output = Arc::new(output);
    for request in server.incoming_requests() {
        let output = Arc::clone(&output);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &output) {
                log!("serve"; "request error: {e}");
            }
        });
    }

    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, output: &Path) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !response::is_readable_method(&request) {
        return response::respond_method_not_allowed(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match path::resolve_path(request.url(), output) {
        Some(path) => response::respond_file(request, &path),
        None => response::respond_not_found(request, output),
    }
}
