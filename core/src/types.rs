//! Domain records for the superhero API.
//!
//! # Design
//! These types mirror the JSON served at `all.json` field for field. Every
//! non-optional field is required: a payload missing one fails to decode as a
//! whole. `publisher` and `race` are the only fields the source sends as
//! `null`, so they are the only `Option`s; an empty string stays an empty
//! string.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The full ordered set of heroes from one successful fetch.
///
/// Shared behind an `Arc` so state snapshots can be cloned cheaply.
pub type Collection = Arc<[Superhero]>;

/// A single superhero profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Superhero {
    pub id: u64,
    pub name: String,
    pub powerstats: PowerStats,
    pub appearance: Appearance,
    pub biography: Biography,
    pub work: Work,
    pub connections: Connections,
    pub images: Images,
}

/// Six power attributes, nominally in `0..=100`. Values are taken as sent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PowerStats {
    pub intelligence: i32,
    pub strength: i32,
    pub speed: i32,
    pub durability: i32,
    pub power: i32,
    pub combat: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub gender: String,
    pub race: Option<String>,
    /// Imperial and metric renderings, e.g. `["6'2", "188 cm"]`.
    pub height: Vec<String>,
    pub weight: Vec<String>,
    pub eye_color: String,
    pub hair_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    pub full_name: String,
    pub alter_egos: String,
    pub aliases: Vec<String>,
    pub place_of_birth: String,
    pub first_appearance: String,
    pub publisher: Option<String>,
    pub alignment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Work {
    pub occupation: String,
    pub base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connections {
    pub group_affiliation: String,
    pub relatives: String,
}

/// Portrait URLs, smallest to largest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Images {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
}
