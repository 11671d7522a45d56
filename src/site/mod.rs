//! Static site materialization
//!
//! Routing here is closed-world: one gallery page, one pre-written detail
//! page per catalog slug and a single not-found page. Nothing is generated
//! on demand, so a request for an unknown slug can only ever land on
//! 404.html.

pub mod pages;

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::profile::SampleProfile;

/// Errors raised while writing the site to disk
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn write(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the complete site under `out_dir`.
///
/// Produces `index.html` (the unfiltered gallery), `templates/<slug>/
/// index.html` for every catalog entry, `404.html` and
/// `assets/style.css`. Existing files are overwritten; the directory
/// structure is created as needed.
pub fn write_site(
    catalog: &Catalog,
    profile: &SampleProfile,
    out_dir: &Path,
) -> Result<(), SiteError> {
    let gallery = pages::gallery_page(catalog, profile, &FilterState::default());
    write(&out_dir.join("index.html"), &gallery)?;

    for template in catalog.templates() {
        let page = pages::detail_page(template, profile);
        let path = out_dir
            .join("templates")
            .join(&template.slug)
            .join("index.html");
        write(&path, &page)?;
    }

    write(&out_dir.join("404.html"), &pages::not_found_page())?;
    write(
        &out_dir.join("assets").join("style.css"),
        pages::STYLESHEET,
    )?;
    Ok(())
}
