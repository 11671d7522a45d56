//! CV Forge CLI
//!
//! Usage:
//!   cv-forge [OPTIONS]
//!
//! Options:
//!   -o, --out <DIR>        Write the static site to a directory
//!   -s, --slug <SLUG>      Print the HTML preview for one template
//!   -l, --list             List catalog templates
//!   -c, --category <NAME>  Filter the listing by category label
//!   -q, --query <TEXT>     Filter the listing by free-text query
//!   --compact              Render previews at compact density
//!   -d, --debug            Print catalog diagnostics to stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;

use cv_forge::{
    catalog, filter, profile, render_preview, write_site, Category, CategoryFilter, Density,
};

#[derive(Parser)]
#[command(name = "cv-forge")]
#[command(about = "Curated CV template catalog with live HTML previews")]
struct Cli {
    /// Write the static site (gallery, detail pages, 404, stylesheet)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the HTML preview for one template
    #[arg(short, long)]
    slug: Option<String>,

    /// List catalog templates (slug, name, category, layout)
    #[arg(short, long)]
    list: bool,

    /// Restrict the listing to one category label, e.g. "Tecnología"
    #[arg(short, long)]
    category: Option<String>,

    /// Restrict the listing with a free-text query
    #[arg(short, long)]
    query: Option<String>,

    /// Render previews at compact density
    #[arg(long)]
    compact: bool,

    /// Print catalog diagnostics to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let catalog = catalog::builtin();
    let profile = profile::builtin();

    if cli.debug {
        eprintln!("=== Catalog Debug ===");
        for template in catalog.templates() {
            eprintln!(
                "[{}] layout={} category={} dark={}",
                template.slug, template.layout, template.category, template.theme.dark
            );
        }
        eprintln!("=====================");
    }

    let density = if cli.compact {
        Density::Compact
    } else {
        Density::Full
    };

    if let Some(dir) = &cli.out {
        if let Err(e) = write_site(catalog, profile, dir) {
            eprintln!("Error writing site: {}", e);
            std::process::exit(1);
        }
        println!(
            "Wrote {} template pages to {}",
            catalog.len(),
            dir.display()
        );
        return;
    }

    if let Some(slug) = &cli.slug {
        match catalog.get_by_slug(slug) {
            Some(template) => {
                println!("{}", render_preview(template, profile, density));
            }
            None => {
                eprintln!("Error: no template with slug '{}'", slug);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.list || cli.category.is_some() || cli.query.is_some() {
        let category = match &cli.category {
            Some(label) => match Category::from_label(label) {
                Some(category) => CategoryFilter::Only(category),
                None => {
                    eprintln!("Error: unknown category '{}'", label);
                    std::process::exit(1);
                }
            },
            None => CategoryFilter::All,
        };
        let query = cli.query.as_deref().unwrap_or("");

        let matches = filter(catalog.templates(), category, query);
        if matches.is_empty() {
            println!("No templates match.");
            return;
        }
        for template in matches {
            println!(
                "{:<18} {:<16} {:<12} {}",
                template.slug, template.name, template.category, template.layout
            );
        }
        return;
    }

    print_intro();
}

fn print_intro() {
    println!(
        r#"CV Forge - curated CV template catalog with live HTML previews

USAGE:
    cv-forge [OPTIONS]

OPTIONS:
    -o, --out <DIR>        Write the static site to a directory
    -s, --slug <SLUG>      Print the HTML preview for one template
    -l, --list             List catalog templates
    -c, --category <NAME>  Filter the listing by category label
    -q, --query <TEXT>     Filter the listing by free-text query
    --compact              Render previews at compact density
    -d, --debug            Print catalog diagnostics to stderr
    -h, --help             Print help

QUICK START:
    cv-forge --list
    cv-forge --slug aurora-exec > preview.html
    cv-forge --out ./site

The built-in catalog ships {count} templates across eight layouts."#,
        count = cv_forge::catalog::builtin().len()
    );
}
