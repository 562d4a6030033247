//! Auxiliary files generated next to the rendered pages.

pub mod sitemap;
