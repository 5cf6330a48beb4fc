//! Thread-local cache of resolved Pokémon for the current session.
//!
//! Every successful lookup is stored under both its lowercase name and its
//! numeric id, so a later search by either form is answered without a request.
//! Nothing here is persisted.

use crate::models::Pokemon;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    /// Lives for the whole page session; WASM is single-threaded.
    static LOOKUP_CACHE: RefCell<HashMap<String, Pokemon>> = RefCell::new(HashMap::new());
}

/// Cached Pokémon for a normalized query, if any.
pub fn get(query: &str) -> Option<Pokemon> {
    LOOKUP_CACHE.with(|c| c.borrow().get(query).cloned())
}

pub fn insert(pokemon: &Pokemon) {
    LOOKUP_CACHE.with(|c| {
        let mut map = c.borrow_mut();
        map.insert(pokemon.id.to_string(), pokemon.clone());
        map.insert(pokemon.name.to_lowercase(), pokemon.clone());
    });
}

/// Number of cache keys; each Pokémon occupies two (name and id).
pub fn len() -> usize {
    LOOKUP_CACHE.with(|c| c.borrow().len())
}

pub fn clear() {
    LOOKUP_CACHE.with(|c| c.borrow_mut().clear());
}
