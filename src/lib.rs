//! Core of the Pokémon lookup widget: PokeAPI client, persisted search
//! history, recommendation sampling and the view models the UI renders.
//!
//! Nothing in this crate touches the DOM; the Yew components live in the
//! binary and only consume the types exported here.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod sampler;
pub mod storage;
pub mod utils;
pub mod view;

pub use api::{fetch_recommendations, PokeApiClient};
pub use error::{LookupError, SampleError, StorageError};
pub use history::HistoryManager;
pub use models::{HistoryEntry, Pokemon};
pub use sampler::{sample_ids, sample_recommendation_ids};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStore};
