//! Output generation for scrape results.
//!
//! One writer for now: [`json`], which produces the listing consumed by the
//! web player.

pub mod json;
