//! choromap-cli
//! ============
//!
//! Command-line interface for the `choromap-core` choropleth pipeline.
//!
//! This crate primarily provides a binary (`choromap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install choromap-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! choromap --help
//! choromap world
//! choromap neighborhoods --year 2015 --field min_income
//! choromap export neighborhoods --out merged.geojson
//! ```
//!
//! For programmatic access to the loaders, merges and renderer, use the
//! [`choromap-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/choromap-rs>
//! - Core crate: <https://docs.rs/choromap-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
