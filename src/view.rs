//! Browser-independent view models.
//!
//! Components in the binary only turn these into markup; everything that
//! decides what the user sees (labels, colors, ids, fallbacks) lives here.

use crate::config::DEFAULT_TYPE_COLOR;
use crate::models::{HistoryEntry, Pokemon};
use std::rc::Rc;

/// Badge colors for the 18 elemental types.
const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#EE99AC"),
];

pub fn type_color(type_name: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

/// Short label for a stat key; unknown keys are returned unchanged.
pub fn format_stat_name(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SP.ATK",
        "special-defense" => "SP.DEF",
        "speed" => "SPD",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeBadge {
    pub name: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: String,
    pub value: u32,
}

/// Full result card.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonView {
    pub name: String,
    pub display_id: String,
    pub image_url: Option<String>,
    pub types: Vec<TypeBadge>,
    pub stats: Vec<StatRow>,
}

impl From<&Pokemon> for PokemonView {
    fn from(p: &Pokemon) -> Self {
        PokemonView {
            name: p.name.clone(),
            display_id: p.display_id(),
            image_url: p.display_image().map(str::to_string),
            types: p
                .types
                .iter()
                .map(|t| TypeBadge {
                    name: t.clone(),
                    color: type_color(t),
                })
                .collect(),
            stats: p
                .stats
                .iter()
                .map(|s| StatRow {
                    label: format_stat_name(&s.name).to_string(),
                    value: s.base_value,
                })
                .collect(),
        }
    }
}

/// Small clickable tile used by the history and recommendation panels.
/// `query` is what gets searched when the tile is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub display_id: String,
    pub image_url: Option<String>,
    pub query: String,
}

impl From<&HistoryEntry> for CardView {
    fn from(e: &HistoryEntry) -> Self {
        CardView {
            name: e.name.clone(),
            display_id: e.display_id.clone(),
            image_url: (!e.image_url.is_empty()).then(|| e.image_url.clone()),
            query: e.name.clone(),
        }
    }
}

impl From<&Pokemon> for CardView {
    fn from(p: &Pokemon) -> Self {
        CardView {
            name: p.name.clone(),
            display_id: p.display_id(),
            image_url: p.thumbnail().map(str::to_string),
            query: p.name.clone(),
        }
    }
}

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultView {
    #[default]
    Idle,
    Loading,
    Found(Rc<PokemonView>),
    Failed(String),
}

/// What the recommendations panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationsView {
    Loading,
    Ready(Rc<Vec<CardView>>),
    Failed(String),
}

pub fn history_cards(entries: &[HistoryEntry]) -> Vec<CardView> {
    entries.iter().map(CardView::from).collect()
}

pub fn recommendation_cards(found: &[Pokemon]) -> Vec<CardView> {
    found.iter().map(CardView::from).collect()
}
