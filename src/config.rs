//! Application-level configuration constants.

// Upstream API
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const TOTAL_POKEMON: u32 = 1025;

// History
pub const HISTORY_STORAGE_KEY: &str = "pokemonHistory";
pub const HISTORY_LIMIT: usize = 10;

// Recommendations
pub const RECOMMENDATION_COUNT: usize = 5;

// UI constants
pub const DEFAULT_TYPE_COLOR: &str = "#999";
pub const CLEAR_HISTORY_PROMPT: &str = "Do you really want to clear the search history?";
pub const EMPTY_HISTORY_MESSAGE: &str = "No Pokémon searched yet";
pub const RECOMMENDATIONS_FAILED_MESSAGE: &str = "Failed to load recommendations";
pub const LOADING_MESSAGE: &str = "Loading";

/// Base URL of the Pokémon API, overridable at build time with `POKEAPI_BASE_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("POKEAPI_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
