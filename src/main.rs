//! Main module for the Pokémon lookup widget using Yew.
//! Wires the search bar, result panel, history and recommendations together.

use poke_lookup::PokeApiClient;
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_result, HistoryPanel, RecommendationsPanel, SearchBar};
use hooks::{use_history, use_lookup, use_recommendations};

/// Primary application component wiring state, effects, and UI elements.
#[function_component]
pub fn App() -> Html {
    let client = use_state(PokeApiClient::default);

    let history = use_history();
    let lookup = use_lookup((*client).clone(), history.record.clone());
    let recommendations = use_recommendations((*client).clone());

    html! {
        <div class="pokedex">
            <SearchBar on_search={lookup.search.clone()} />

            <div id="main-screen" class="main-screen">
                { render_result(&lookup.result) }
            </div>

            <div class="side-panels">
                <HistoryPanel
                    cards={history.cards.clone()}
                    on_select={lookup.search.clone()}
                    on_clear={history.clear.clone()}
                />
                <RecommendationsPanel
                    view={recommendations.view.clone()}
                    on_select={lookup.search.clone()}
                    on_refresh={recommendations.refresh.clone()}
                />
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
