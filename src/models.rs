//! Wire types for the PokeAPI `/pokemon/{name-or-id}` resource and the
//! domain records extracted from it.

use crate::utils::format_display_id;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw JSON resource, limited to the fields the widget reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

/// A successfully resolved Pokémon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub artwork_url: Option<String>,
    pub sprite_url: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
}

impl Pokemon {
    /// Large image for the results panel: official artwork, else the default sprite.
    pub fn display_image(&self) -> Option<&str> {
        self.artwork_url.as_deref().or(self.sprite_url.as_deref())
    }

    /// Small image for history and recommendation cards.
    pub fn thumbnail(&self) -> Option<&str> {
        self.sprite_url.as_deref().or(self.artwork_url.as_deref())
    }

    pub fn display_id(&self) -> String {
        format_display_id(self.id)
    }
}

impl From<PokemonResource> for Pokemon {
    fn from(resource: PokemonResource) -> Self {
        let mut types = resource.types;
        types.sort_by_key(|t| t.slot);

        Pokemon {
            id: resource.id,
            name: resource.name,
            artwork_url: resource
                .sprites
                .other
                .official_artwork
                .and_then(|a| a.front_default),
            sprite_url: resource.sprites.front_default,
            types: types.into_iter().map(|t| t.kind.name).collect(),
            stats: resource
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base_value: s.base_stat,
                })
                .collect(),
        }
    }
}

/// One persisted search-history record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u32,
    pub name: String,
    #[serde(alias = "image", default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(alias = "formattedId", default, deserialize_with = "null_as_empty")]
    pub display_id: String,
}

/// Older records stored a missing sprite as `null`.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&Pokemon> for HistoryEntry {
    fn from(pokemon: &Pokemon) -> Self {
        HistoryEntry {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image_url: pokemon.thumbnail().unwrap_or_default().to_string(),
            display_id: pokemon.display_id(),
        }
    }
}
