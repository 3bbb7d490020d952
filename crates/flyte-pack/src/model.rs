//! # Pack Model
//!
//! The pack entity and its immutable sub-objects. A pack's identity is derived
//! from its name exactly once, at creation time, by [`Pack::generate_id`].
//!
//! Generated navigational links are attached only to copies handed back to
//! clients (see [`crate::links`]); the stored pack carries only the links its
//! owner supplied, such as a `help` link to the pack's README.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A navigational link: an absolute `href` and the relation it represents.
///
/// `rel` is either a short standard relation (`self`, `up`, `help`) or a
/// fully-qualified documentation anchor URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    /// Absolute URL of the linked resource.
    pub href: String,
    /// Relation of the linked resource to the current one.
    pub rel: String,
}

impl Link {
    /// Create a link from an href and a relation.
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
        }
    }
}

/// A command a pack can execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Command {
    /// Command name, unique within its pack.
    pub name: String,
    /// Names of the events this command may emit, in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
    /// Generated links. Never supplied by clients and never persisted.
    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// An event a pack can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Event name.
    pub name: String,
}

/// A pack: an integration with the commands it executes and the events it
/// emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pack {
    /// Pack identifier. Equal to `name` once [`Pack::generate_id`] has run.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Pack name, the source of its identity.
    pub name: String,
    /// Free-form labels. Omitted from JSON when empty.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub labels: BTreeMap<String, String>,
    /// Commands in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<Command>,
    /// Events in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<Event>,
    /// Links supplied by the pack owner (e.g. `help`), followed by generated
    /// links on representations returned to clients.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<Link>,
}

impl Pack {
    /// Derive the pack identifier from its name.
    ///
    /// The name is used verbatim: no case folding, no trimming. Identifiers
    /// are therefore case-sensitive.
    pub fn generate_id(&mut self) {
        self.id = self.name.clone();
    }

    /// Render labels for log lines: a sorted map literal such as `{}` or
    /// `{"env": "dev"}`.
    pub fn labels_display(&self) -> String {
        format!("{:?}", self.labels)
    }
}
