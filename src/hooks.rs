use log::{info, warn};
use poke_lookup::{
    config::CLEAR_HISTORY_PROMPT,
    config::RECOMMENDATIONS_FAILED_MESSAGE,
    fetch_recommendations, sample_recommendation_ids,
    utils::normalize_query,
    view::{
        history_cards, recommendation_cards, CardView, PokemonView, RecommendationsView,
        ResultView,
    },
    BrowserStorage, HistoryEntry, HistoryManager, KeyValueStore, MemoryStore, PokeApiClient,
};
use std::rc::Rc;
use yew::prelude::*;

type SessionHistory = HistoryManager<Box<dyn KeyValueStore>>;

/// History cards plus the callbacks that mutate the underlying list.
#[derive(Clone)]
pub struct HistoryHandle {
    pub cards: Rc<Vec<CardView>>,
    /// Record a successful lookup.
    pub record: Callback<HistoryEntry>,
    /// Ask for confirmation, then wipe history and its persisted copy.
    pub clear: Callback<()>,
}

fn open_store() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("{}; history will only last for this session", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn confirm_clear() -> bool {
    gloo_utils::window()
        .confirm_with_message(CLEAR_HISTORY_PROMPT)
        .unwrap_or(false)
}

#[hook]
pub fn use_history() -> HistoryHandle {
    let manager = use_mut_ref(|| SessionHistory::load(open_store()));
    let cards = use_state(|| Rc::new(history_cards(manager.borrow().entries())));

    let record = {
        let manager = manager.clone();
        let cards = cards.clone();
        Callback::from(move |entry: HistoryEntry| {
            let mut history = manager.borrow_mut();
            if let Err(e) = history.record(entry) {
                warn!("History not saved: {}", e);
            }
            cards.set(Rc::new(history_cards(history.entries())));
        })
    };

    let clear = {
        let manager = manager.clone();
        let cards = cards.clone();
        Callback::from(move |_: ()| {
            let mut history = manager.borrow_mut();
            match history.clear(confirm_clear) {
                Ok(true) => info!("Search history cleared"),
                Ok(false) => {}
                Err(e) => warn!("Failed to remove stored history: {}", e),
            }
            cards.set(Rc::new(history_cards(history.entries())));
        })
    };

    HistoryHandle {
        cards: (*cards).clone(),
        record,
        clear,
    }
}

/// Current result panel state and the callback that starts a search.
pub struct LookupHandle {
    pub result: ResultView,
    pub search: Callback<String>,
}

/// Searches run independently; whichever response resolves last is shown.
#[hook]
pub fn use_lookup(client: PokeApiClient, on_found: Callback<HistoryEntry>) -> LookupHandle {
    let result = use_state(ResultView::default);

    let search = {
        let result = result.clone();
        Callback::from(move |input: String| {
            let Some(query) = normalize_query(&input) else {
                return;
            };
            result.set(ResultView::Loading);

            let client = client.clone();
            let result = result.clone();
            let on_found = on_found.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.lookup(&query).await {
                    Ok(pokemon) => {
                        result.set(ResultView::Found(Rc::new(PokemonView::from(&pokemon))));
                        on_found.emit(HistoryEntry::from(&pokemon));
                    }
                    Err(e) => {
                        warn!("Lookup of '{}' failed: {}", query, e);
                        result.set(ResultView::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    LookupHandle {
        result: (*result).clone(),
        search,
    }
}

pub struct RecommendationsHandle {
    pub view: RecommendationsView,
    pub refresh: Callback<()>,
}

/// Loads a batch on mount and again whenever `refresh` fires.
#[hook]
pub fn use_recommendations(client: PokeApiClient) -> RecommendationsHandle {
    let view = use_state(|| RecommendationsView::Loading);

    let refresh = {
        let view = view.clone();
        Callback::from(move |_: ()| {
            view.set(RecommendationsView::Loading);

            let ids = match sample_recommendation_ids() {
                Ok(ids) => ids,
                Err(e) => {
                    warn!("Could not pick recommendations: {}", e);
                    view.set(RecommendationsView::Failed(
                        RECOMMENDATIONS_FAILED_MESSAGE.to_string(),
                    ));
                    return;
                }
            };

            let client = client.clone();
            let view = view.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let found = fetch_recommendations(&client, &ids).await;
                info!("Loaded {}/{} recommendations", found.len(), ids.len());
                view.set(RecommendationsView::Ready(Rc::new(recommendation_cards(&found))));
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    RecommendationsHandle {
        view: (*view).clone(),
        refresh,
    }
}
