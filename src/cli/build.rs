//! Site building.
//!
//! Build phases:
//! - **Init** - Clean (with `--clean`) and create the output directory
//! - **Render** - Every page through the root layout
//! - **Write** - Pages in parallel, with a progress line
//! - **Sitemap** - `sitemap.xml` when enabled

use crate::{
    generator::sitemap::write_sitemap,
    log,
    logger::ProgressLine,
    page::{RenderedPage, render_not_found, render_pages},
    site::Site,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Build the whole site into `build.output`.
pub fn build_site(site: &Site<'_>) -> Result<()> {
    let config = site.config;
    let output = &config.build.output;

    init_output(output, config.build.clean)?;

    let pages = render_pages(site);
    write_pages(&pages, output)?;

    let not_found = render_not_found(site);
    write_file(&output.join("404.html"), &not_found)?;

    if config.build.sitemap.enable {
        write_sitemap(
            &pages,
            &site.base_url,
            &output.join(&config.build.sitemap.path),
        )?;
    }

    log!("build"; "done, {} pages in {}", pages.len(), output.display());
    Ok(())
}

/// Ensure the output directory exists, emptying it first when `clean` is set.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn write_pages(pages: &[RenderedPage], output: &Path) -> Result<()> {
    let posts = pages.len().saturating_sub(2);
    let progress = ProgressLine::new(&[("pages", pages.len() - posts), ("posts", posts)]);

    pages.par_iter().enumerate().try_for_each(|(idx, page)| {
        write_file(&output.join(page.output_path()), &page.html)?;
        progress.inc(if idx < 2 { "pages" } else { "posts" });
        Ok::<_, anyhow::Error>(())
    })?;

    progress.finish();
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
