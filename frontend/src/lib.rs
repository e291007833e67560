mod api;
pub mod config;
mod geolocation;
pub mod state;
mod view;

use seed::prelude::*;
use shared::{Coordinates, RankingFilter, SearchError, SearchRequest, SearchResponse};
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};

use crate::geolocation::GeolocationError;
use crate::state::{ClickTarget, SearchTicket, UiState};

pub struct Model {
    query: String,
    ui: UiState,
}

pub enum Msg {
    QueryChanged(String),
    OpenFilters,
    CloseFilters,
    DocumentClicked(ClickTarget),
    Search(Option<RankingFilter>),
    Retry,
    PositionResolved {
        seq: u64,
        result: Result<Coordinates, GeolocationError>,
    },
    SearchFetched {
        seq: u64,
        result: Result<SearchResponse, SearchError>,
    },
    SelectDestination(Coordinates),
    RevealDestination {
        token: u64,
        target: Coordinates,
    },
    ConfirmNavigation,
    CancelNavigation,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::document_event(Ev::Click, |event| {
        Msg::DocumentClicked(click_target(&event))
    }));

    Model {
        query: String::new(),
        ui: UiState::default(),
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::QueryChanged(val) => model.query = val,
        Msg::OpenFilters => model.ui.open_filters(),
        Msg::CloseFilters => model.ui.close_filters(),
        Msg::DocumentClicked(target) => model.ui.dismiss_filters_on_click(target),
        Msg::Search(filter) => {
            if let Some(ticket) = model.ui.begin_search(&model.query, filter) {
                dispatch_search(&ticket, orders);
            }
        }
        Msg::Retry => {
            if let Some(ticket) = model.ui.retry() {
                dispatch_search(&ticket, orders);
            }
        }
        Msg::PositionResolved { seq, result } => match result {
            Ok(origin) => {
                let Some(ticket) = model.ui.current_search(seq) else {
                    web_sys::console::debug_1(
                        &format!("[frontend] dropping position for stale search #{seq}").into(),
                    );
                    return;
                };
                web_sys::console::debug_1(
                    &format!(
                        "[frontend] search #{seq} located lat={:.5} lng={:.5}",
                        origin.lat, origin.lng
                    )
                    .into(),
                );
                let payload = SearchRequest::new(ticket.query.clone(), origin);
                orders.perform_cmd(send_search_request(seq, payload));
            }
            Err(err) => {
                web_sys::console::error_1(&format!("[frontend] search #{seq}: {err}").into());
                model.ui.location_failed(seq);
            }
        },
        Msg::SearchFetched { seq, result } => {
            match &result {
                Ok(response) => web_sys::console::debug_1(
                    &format!(
                        "[frontend] search #{seq} returned {} items",
                        response.items.len()
                    )
                    .into(),
                ),
                Err(err) => {
                    web_sys::console::error_1(&format!("[frontend] search #{seq}: {err}").into());
                }
            }
            if !model.ui.search_finished(seq, result) {
                web_sys::console::debug_1(
                    &format!("[frontend] dropping stale response for search #{seq}").into(),
                );
            }
        }
        Msg::SelectDestination(target) => {
            let token = model.ui.select_destination();
            orders.perform_cmd(cmds::timeout(config::REVEAL_DELAY_MS, move || {
                Msg::RevealDestination { token, target }
            }));
        }
        Msg::RevealDestination { token, target } => {
            model.ui.reveal_destination(token, target);
        }
        Msg::ConfirmNavigation => {
            if let Some(url) = model.ui.confirm_navigation() {
                open_in_new_tab(&url);
            }
        }
        Msg::CancelNavigation => model.ui.cancel_navigation(),
    }
}

fn dispatch_search(ticket: &SearchTicket, orders: &mut impl Orders<Msg>) {
    web_sys::console::debug_1(
        &format!(
            "[frontend] search #{} query={:?} filter={:?}",
            ticket.seq, ticket.query, ticket.filter
        )
        .into(),
    );
    let seq = ticket.seq;
    orders.perform_cmd(async move {
        Msg::PositionResolved {
            seq,
            result: geolocation::current_position().await,
        }
    });
}

async fn send_search_request(seq: u64, payload: SearchRequest) -> Msg {
    let result = api::fetch_restaurants(&payload).await;
    Msg::SearchFetched { seq, result }
}

/// Classifies a document click against the filters overlay and its toggle.
fn click_target(event: &web_sys::Event) -> ClickTarget {
    let element = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());

    ClickTarget::classify(|selector| {
        element
            .as_ref()
            .and_then(|el| el.closest(selector).ok().flatten())
            .is_some()
    })
}

fn open_in_new_tab(url: &str) {
    web_sys::console::debug_1(&format!("[frontend] opening directions {url}").into());
    if let Err(err) = seed::window().open_with_url_and_target(url, "_blank") {
        web_sys::console::error_1(&format!("[frontend] failed to open {url}: {err:?}").into());
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view::view);
}
