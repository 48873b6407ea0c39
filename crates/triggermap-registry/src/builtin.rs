//! Compiled-in registries for the two trigger sources.
//!
//! The `protocols` source carries a `protocol_id` on every event; the
//! `weaver` source carries none.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use triggermap_core::schema::{EnvelopeLayout, EventSchema, FieldKind, FieldSpec};

use crate::memory::MemoryRegistry;

/// The trigger sources this crate ships a registry for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Protocols,
    Weaver,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Protocols, Source::Weaver];

    /// Build this source's registry.
    pub fn registry(self) -> MemoryRegistry {
        match self {
            Source::Protocols => protocols(),
            Source::Weaver => weaver(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Protocols => write!(f, "protocols"),
            Source::Weaver => write!(f, "weaver"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protocols" => Ok(Source::Protocols),
            "weaver" => Ok(Source::Weaver),
            other => Err(format!("unknown source '{other}' (expected protocols|weaver)")),
        }
    }
}

fn protocols_schemas() -> Vec<EventSchema> {
    vec![
        EventSchema::new(
            "CampaignRegistered",
            vec![
                FieldSpec::required("protocol_owner", "owner", FieldKind::Str),
                FieldSpec::required("protocol_nft_address", "nftAddress", FieldKind::Str),
            ],
        ),
        EventSchema::new(
            "CampaignJoined",
            vec![
                FieldSpec::required("caller", "caller", FieldKind::Str),
                FieldSpec::required("token_id", "tokenId", FieldKind::Int),
                FieldSpec::required("user", "user", FieldKind::Str),
            ],
        ),
        EventSchema::new(
            "NftDeployed",
            vec![FieldSpec::required("protocol_nft", "nftAddress", FieldKind::Str)],
        ),
        EventSchema::new(
            "ProtocolStatusChanged",
            vec![
                FieldSpec::required("protocol_owner", "owner", FieldKind::Str),
                FieldSpec::required("event_type", "statusKind", FieldKind::Str)
                    .one_of(["Register", "Verify"]),
            ],
        ),
    ]
}

fn weaver_schemas() -> Vec<EventSchema> {
    vec![
        EventSchema::new(
            "ImplementationUpgraded",
            vec![FieldSpec::required("implementation", "implementation", FieldKind::Str)],
        ),
        EventSchema::new(
            "UserRegistered",
            vec![
                FieldSpec::required("user_id", "userId", FieldKind::Int),
                FieldSpec::required("user", "user", FieldKind::Str),
                FieldSpec::required("event_type", "statusKind", FieldKind::Str)
                    .one_of(["Register"]),
            ],
        ),
    ]
}

/// Registry for the protocols contract.
pub fn protocols() -> MemoryRegistry {
    build(
        "protocols",
        EnvelopeLayout::standard().with_domain_id("protocol_id"),
        protocols_schemas(),
    )
}

/// Registry for the weaver contract.
pub fn weaver() -> MemoryRegistry {
    build("weaver", EnvelopeLayout::standard(), weaver_schemas())
}

fn build(name: &str, layout: EnvelopeLayout, schemas: Vec<EventSchema>) -> MemoryRegistry {
    let mut registry = MemoryRegistry::new(name, layout);
    for schema in schemas {
        // Compiled-in tables are constant data; a rejected schema is a bug.
        if let Err(e) = registry.add(schema) {
            panic!("invalid compiled-in schema in registry '{name}': {e}");
        }
    }
    registry
}
