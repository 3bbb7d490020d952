//! # HATEOAS Link Building
//!
//! Pure functions that attach navigational links to pack representations.
//! Every href is absolute, prefixed with the [`BaseUrl`] of the request being
//! served, so the same server produces correct links under any externally
//! visible host name.
//!
//! ## Representations
//!
//! | Shape      | Top-level links                         | Per-item links          |
//! |------------|-----------------------------------------|-------------------------|
//! | Collection | `self`, `up`, `help`                    | `self` per pack         |
//! | Single     | supplied links, `self`, `up`, action, event | take-action per command |
//!
//! Documentation relations point at anchors in the API documentation served
//! under `{base}/swagger` (see [`DocAnchor`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use utoipa::ToSchema;

use crate::model::{Link, Pack};

/// Standard relation: the resource itself.
pub const REL_SELF: &str = "self";
/// Standard relation: the parent resource.
pub const REL_UP: &str = "up";
/// Standard relation: human-readable documentation.
pub const REL_HELP: &str = "help";

/// Scheme and host of the incoming request, e.g. `http://example.com`.
///
/// Never ends with a slash; paths are appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Build a base URL from a scheme (`http`, `https`) and a host, which may
    /// carry a port.
    pub fn new(scheme: &str, host: &str) -> Self {
        Self(format!("{scheme}://{}", host.trim_end_matches('/')))
    }

    /// The base URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append an absolute path (starting with `/`) to the base.
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anchors in the API documentation used as fully-qualified link relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocAnchor {
    /// The pack resource type.
    Pack,
    /// The take-action operation.
    TakeAction,
    /// The event resource type.
    Event,
}

impl DocAnchor {
    fn fragment(self) -> &'static str {
        match self {
            Self::Pack => "/pack",
            Self::TakeAction => "!/action/takeAction",
            Self::Event => "/event",
        }
    }

    /// The relation URL for this anchor under the given base.
    pub fn rel(self, base: &BaseUrl) -> String {
        base.join(&format!("/swagger#{}", self.fragment()))
    }
}

/// A pack as it appears inside the collection representation: identity,
/// labels and a single `self` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PackSummary {
    /// Pack identifier.
    pub id: String,
    /// Pack name.
    pub name: String,
    /// Labels, omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Exactly one `self` link.
    pub links: Vec<Link>,
}

/// The collection representation returned by `GET /v1/packs`.
///
/// `packs` is always serialized, as `[]` when no packs exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PackCollection {
    /// `self`, `up` and `help`, in that order.
    pub links: Vec<Link>,
    /// One summary per pack, in repository order.
    pub packs: Vec<PackSummary>,
}

/// `{base}/v1`
pub fn api_root_url(base: &BaseUrl) -> String {
    base.join("/v1")
}

/// `{base}/v1/packs`
pub fn packs_url(base: &BaseUrl) -> String {
    base.join("/v1/packs")
}

/// `{base}/v1/packs/{id}`
pub fn pack_url(base: &BaseUrl, id: &str) -> String {
    format!("{}/{id}", packs_url(base))
}

fn take_action_url(base: &BaseUrl, id: &str) -> String {
    format!("{}/actions/take", pack_url(base, id))
}

fn events_url(base: &BaseUrl, id: &str) -> String {
    format!("{}/events", pack_url(base, id))
}

/// `{base}/v1/packs/{id}/actions/take?commandName={command}`, with the
/// command name form-urlencoded.
pub fn command_action_url(base: &BaseUrl, id: &str, command: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("commandName", command)
        .finish();
    format!("{}?{query}", take_action_url(base, id))
}

/// Build the collection representation for a list of packs.
pub fn collection(base: &BaseUrl, packs: Vec<Pack>) -> PackCollection {
    let links = vec![
        Link::new(packs_url(base), REL_SELF),
        Link::new(api_root_url(base), REL_UP),
        Link::new(DocAnchor::Pack.rel(base), REL_HELP),
    ];

    let packs = packs
        .into_iter()
        .map(|pack| PackSummary {
            links: vec![Link::new(pack_url(base, &pack.id), REL_SELF)],
            id: pack.id,
            name: pack.name,
            labels: pack.labels,
        })
        .collect();

    PackCollection { links, packs }
}

/// Enrich a stored pack into the single pack representation.
///
/// Links already on the pack are kept first, in their original order. The
/// generated `self`, `up`, take-action and event links follow. Every command
/// gets exactly one take-action link; events get none.
pub fn single(base: &BaseUrl, mut pack: Pack) -> Pack {
    let action_rel = DocAnchor::TakeAction.rel(base);

    pack.links.extend([
        Link::new(pack_url(base, &pack.id), REL_SELF),
        Link::new(packs_url(base), REL_UP),
        Link::new(take_action_url(base, &pack.id), action_rel.clone()),
        Link::new(events_url(base, &pack.id), DocAnchor::Event.rel(base)),
    ]);

    for command in &mut pack.commands {
        command.links = vec![Link::new(
            command_action_url(base, &pack.id, &command.name),
            action_rel.clone(),
        )];
    }

    pack
}
