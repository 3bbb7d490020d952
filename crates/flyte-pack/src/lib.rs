#![deny(missing_docs)]

//! # flyte-pack: The Pack Resource
//!
//! A pack is an integration registered with Flyte: the commands it can execute
//! and the events it can emit. This crate holds everything about packs that
//! does not depend on the HTTP layer:
//!
//! - [`model`]: [`Pack`], [`Command`], [`Event`] and [`Link`], plus the
//!   identifier derivation rule ([`Pack::generate_id`]).
//! - [`links`]: pure HATEOAS link building for the collection and single
//!   pack representations.
//! - [`repository`]: the [`PackRepository`] capability consumed by the API,
//!   with [`RepositoryError::NotFound`] as the sentinel for absent packs.
//! - [`memory`]: an in-process [`PackRepository`] used when no database is
//!   configured and as the default in tests.
//!
//! ## Link Ordering
//!
//! Link order is part of the wire contract. Everything that lands in an
//! ordered output is built from ordered inputs (`Vec`s, or the sorted
//! `BTreeMap` used for labels), so identical inputs always produce identical
//! representations.

pub mod links;
pub mod memory;
pub mod model;
pub mod repository;

pub use links::{BaseUrl, DocAnchor, PackCollection, PackSummary};
pub use memory::MemoryPackRepository;
pub use model::{Command, Event, Link, Pack};
pub use repository::{PackRepository, RepositoryError};
