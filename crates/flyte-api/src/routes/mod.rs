//! # API Route Modules
//!
//! - `packs`: pack registration: create, list, get and delete, with HATEOAS
//!   link enrichment on every representation.

pub mod packs;
