//! Pure Yew view components for the lookup widget.
//!
//! Components render view models from `poke_lookup::view` and report clicks
//! through callbacks; they hold no state of their own except the search text.

use poke_lookup::config::{EMPTY_HISTORY_MESSAGE, LOADING_MESSAGE};
use poke_lookup::view::{CardView, PokemonView, RecommendationsView, ResultView};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn render_loading() -> Html {
    html! { <div class="loading">{ LOADING_MESSAGE }</div> }
}

/// Renders the results panel for any state of the current search.
pub fn render_result(result: &ResultView) -> Html {
    match result {
        ResultView::Idle => html! {
            <p class="empty-state">{ "Search for a Pokémon by name or number" }</p>
        },
        ResultView::Loading => render_loading(),
        ResultView::Found(view) => render_pokemon(view),
        ResultView::Failed(message) => html! {
            <div class="error-message">{ format!("⚠️ {}", message) }</div>
        },
    }
}

fn render_pokemon(p: &PokemonView) -> Html {
    html! {
        <div class="pokemon-display">
            <div class="pokemon-header">
                <h2>{ &p.name }</h2>
                <span class="pokemon-id">{ format!("#{}", p.display_id) }</span>
            </div>

            <div class="pokemon-image">
                if let Some(src) = &p.image_url {
                    <img src={src.clone()} alt={p.name.clone()} />
                }
            </div>

            <div class="pokemon-types">
                { p.types.iter().map(|t| html! {
                    <span class="type-badge" style={format!("color: {}", t.color)}>
                        { &t.name }
                    </span>
                }).collect::<Html>() }
            </div>

            <div class="pokemon-stats">
                { p.stats.iter().map(|s| html! {
                    <div class="stat-row">
                        <span class="stat-name">{ &s.label }</span>
                        <span class="stat-value">{ s.value }</span>
                    </div>
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Clickable tile shared by history and recommendations; `prefix` picks the
/// CSS class family (`history-*` or `recommendation-*`).
fn render_card(card: &CardView, prefix: &'static str, on_select: &Callback<String>) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let query = card.query.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(query.clone()))
    };

    html! {
        <div class={format!("{}-item", prefix)} {onclick}>
            if let Some(src) = &card.image_url {
                <img src={src.clone()} alt={card.name.clone()} />
            }
            <div class={format!("{}-info", prefix)}>
                <div class={format!("{}-name", prefix)}>{ &card.name }</div>
                <div class={format!("{}-id", prefix)}>{ format!("#{}", card.display_id) }</div>
            </div>
        </div>
    }
}

/// Text input plus search button; Enter also submits.
#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let text = use_state(String::new);

    let oninput = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text.set(input.value());
        })
    };

    let onclick = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit((*text).clone()))
    };

    let onkeypress = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_search.emit((*text).clone());
            }
        })
    };

    html! {
        <div class="search-bar">
            <input id="pokemon-input"
                type="text"
                placeholder="Name or number"
                value={(*text).clone()}
                {oninput}
                {onkeypress}
            />
            <button id="search-btn" {onclick}>{ "Search" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub cards: Rc<Vec<CardView>>,
    pub on_select: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_clear = props.on_clear.reform(|_: MouseEvent| ());

    html! {
        <div class="history-panel">
            <div class="panel-header">
                <h3>{ "History" }</h3>
                <button id="clear-history" onclick={on_clear}>{ "Clear" }</button>
            </div>
            <div id="history">
                if props.cards.is_empty() {
                    <p class="empty-state">{ EMPTY_HISTORY_MESSAGE }</p>
                } else {
                    { props.cards.iter()
                        .map(|card| render_card(card, "history", &props.on_select))
                        .collect::<Html>() }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsPanelProps {
    pub view: RecommendationsView,
    pub on_select: Callback<String>,
    pub on_refresh: Callback<()>,
}

#[function_component(RecommendationsPanel)]
pub fn recommendations_panel(props: &RecommendationsPanelProps) -> Html {
    let on_refresh = props.on_refresh.reform(|_: MouseEvent| ());

    let body = match &props.view {
        RecommendationsView::Loading => render_loading(),
        RecommendationsView::Ready(cards) => cards
            .iter()
            .map(|card| render_card(card, "recommendation", &props.on_select))
            .collect::<Html>(),
        RecommendationsView::Failed(message) => html! {
            <p class="empty-state">{ message }</p>
        },
    };

    html! {
        <div class="recommendations-panel">
            <div class="panel-header">
                <h3>{ "Recommended" }</h3>
                <button id="refresh-recommendations" onclick={on_refresh}>{ "Refresh" }</button>
            </div>
            <div id="recommendations">{ body }</div>
        </div>
    }
}
