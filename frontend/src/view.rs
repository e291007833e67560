use seed::{prelude::*, *};
use shared::{RankingFilter, RestaurantItem, SearchError};

use crate::config::PLACEHOLDER_PHOTO;
use crate::state::{ResultArea, ResultSet};
use crate::{Model, Msg};

pub const PROMPT_TEXT: &str = "Digite o que você quer comer.";
pub const LOADING_TEXT: &str = "Buscando restaurantes...";
pub const LOCATION_TEXT: &str = "Permita acesso à localização.";
pub const NOT_FOUND_TEXT: &str = "Nenhum restaurante encontrado.";

pub fn view(model: &Model) -> Node<Msg> {
    div![
        C!["app-container"],
        view_header(),
        view_search_bar(&model.query),
        div![
            attrs! { At::Id => "resultado" },
            view_results(&model.ui.results)
        ],
        view_filters_popup(model.ui.filters_open),
        view_confirm_popup(model.ui.confirm_open),
    ]
}

fn view_header() -> Node<Msg> {
    header![
        C!["top-bar"],
        span![
            attrs! { At::Id => "menuIcon" },
            C!["menu-icon"],
            "☰",
            ev(Ev::Click, |_| Msg::OpenFilters),
        ],
        h1!["Restaurante Perto"],
    ]
}

fn view_search_bar(query: &str) -> Node<Msg> {
    div![
        C!["search-bar"],
        input![
            attrs! {
                At::Id => "query",
                At::Value => query,
                At::Placeholder => "Pizza, sushi, hambúrguer...",
                At::AutoComplete => "off",
            },
            input_ev(Ev::Input, Msg::QueryChanged),
            keyboard_ev(Ev::KeyDown, |event| {
                (event.key() == "Enter").then_some(Msg::Search(None))
            }),
        ],
        button![
            "Buscar",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::Search(None)
            }),
        ],
    ]
}

fn view_results(results: &ResultArea) -> Vec<Node<Msg>> {
    match results {
        ResultArea::Idle => vec![],
        ResultArea::Prompt => vec![plain![PROMPT_TEXT]],
        ResultArea::Loading => vec![div![
            C!["loading-container"],
            div![C!["spinner"]],
            div![C!["loading-text"], LOADING_TEXT],
        ]],
        ResultArea::LocationDenied => vec![plain![LOCATION_TEXT]],
        ResultArea::Empty => vec![plain![NOT_FOUND_TEXT]],
        ResultArea::Failed(err) => vec![div![
            C!["error"],
            p![error_text(err)],
            button![
                "Tentar novamente",
                ev(Ev::Click, |event| {
                    event.prevent_default();
                    Msg::Retry
                }),
            ],
        ]],
        ResultArea::Rendered(set) => {
            let mut nodes: Vec<Node<Msg>> = summary_text(set)
                .map(|summary| small![C!["summary"], summary])
                .into_iter()
                .collect();
            nodes.extend(set.items.iter().map(view_card));
            nodes
        }
    }
}

fn view_card(item: &RestaurantItem) -> Node<Msg> {
    let target = item.coordinates();
    let price = item
        .price_signs
        .as_deref()
        .filter(|signs| !signs.is_empty())
        .map(|signs| span![C!["price"], signs]);
    let badge = item.open_now.map(|open| {
        if open {
            span![C!["badge", "open"], "Aberto agora"]
        } else {
            span![C!["badge", "closed"], "Fechado"]
        }
    });

    div![
        C!["card", IF!(target.is_none() => "no-route")],
        target.map(|target| ev(Ev::Click, move |_| Msg::SelectDestination(target))),
        div![
            C!["card-img"],
            img![attrs! {
                At::Src => photo_src(item),
                At::Alt => item.name.as_str(),
            }],
        ],
        h3![item.name.as_str()],
        p![item.address.as_deref().unwrap_or_default()],
        price,
        badge,
        p![rating_line(item)],
        p![distance_line(item)],
    ]
}

fn view_filters_popup(open: bool) -> Node<Msg> {
    let filter_button = |label: &str, filter: RankingFilter| {
        button![
            label,
            ev(Ev::Click, move |event| {
                event.prevent_default();
                Msg::Search(Some(filter))
            }),
        ]
    };

    div![
        attrs! { At::Id => "popupFiltros" },
        C!["popup", IF!(open => "show")],
        div![
            C!["popup-content"],
            h3!["Filtros"],
            filter_button("⭐ Melhor avaliados", RankingFilter::Rating),
            filter_button("🔥 Mais populares", RankingFilter::Reviews),
            button![
                C!["close"],
                "Fechar",
                ev(Ev::Click, |_| Msg::CloseFilters),
            ],
        ],
    ]
}

fn view_confirm_popup(open: bool) -> Node<Msg> {
    div![
        attrs! { At::Id => "popupConfirmar" },
        C!["popup", IF!(open => "show")],
        div![
            C!["popup-content"],
            p!["Deseja abrir a rota no Google Maps?"],
            button![
                attrs! { At::Id => "btnSim" },
                "Sim",
                ev(Ev::Click, |_| Msg::ConfirmNavigation),
            ],
            button![
                attrs! { At::Id => "btnNao" },
                "Não",
                ev(Ev::Click, |_| Msg::CancelNavigation),
            ],
        ],
    ]
}

fn photo_src(item: &RestaurantItem) -> &str {
    item.photo_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_PHOTO)
}

fn rating_line(item: &RestaurantItem) -> String {
    let rating = item
        .rating
        .map_or_else(|| "?".to_string(), |rating| rating.to_string());
    format!("⭐ {rating} ({} avaliações)", item.reviews.unwrap_or(0))
}

fn distance_line(item: &RestaurantItem) -> String {
    let distance = item
        .distance_km
        .map_or_else(|| "?".to_string(), |km| km.to_string());
    format!("{distance} km de distância")
}

fn summary_text(set: &ResultSet) -> Option<String> {
    match (set.returned, set.total_found) {
        (Some(returned), Some(total)) if total > returned => {
            Some(format!("Mostrando {returned} de {total} restaurantes"))
        }
        _ => None,
    }
}

fn error_text(err: &SearchError) -> String {
    if let Some(message) = err.service_message() {
        return message.to_string();
    }
    match err {
        SearchError::Timeout => "A busca demorou demais. Tente novamente.".to_string(),
        _ => "Não foi possível buscar restaurantes. Tente novamente.".to_string(),
    }
}
