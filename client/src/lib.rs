#![allow(clippy::wildcard_imports)]

use seed::{prelude::*, *};
use wasm_bindgen::JsCast;
use shared::search::{Outcome, SearchState};
use shared::{texts, Envelope, WeatherQuery};

const WEATHER_URL: &str = "/api/weather";

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
    Model {
        search: SearchState::default(),
    }
}

struct Model {
    search: SearchState,
}

enum Msg {
    CityChanged(String),
    Submit,
    Fetched(u64, Outcome),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::CityChanged(city) => model.search.set_city(city),
        Msg::Submit => {
            let (seq, query) = model.search.submit();
            orders.perform_cmd(async move { Msg::Fetched(seq, fetch_weather(query).await) });
        }
        Msg::Fetched(seq, outcome) => {
            if !model.search.resolve(seq, outcome) {
                log!("Dropped stale weather response", seq);
            }
        }
    }
}

async fn fetch_weather(query: WeatherQuery) -> Outcome {
    match send_query(&query).await {
        Ok(envelope) => Outcome::Received(envelope),
        Err(e) => {
            let message = failure_message(&e);
            error!("Weather request failed:", e);
            Outcome::Failed(message)
        }
    }
}

/// Readable text of a failed fetch, when the browser gave one.
fn failure_message(error: &fetch::FetchError) -> Option<String> {
    match error {
        fetch::FetchError::NetworkError(value)
        | fetch::FetchError::PromiseError(value)
        | fetch::FetchError::RequestError(value) => value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string()),
        fetch::FetchError::SerdeError(e) => Some(e.to_string()),
        _ => None,
    }
}

// The proxy answers failures with a 500 and an envelope, so the status is
// not checked: the body says what happened.
async fn send_query(query: &WeatherQuery) -> fetch::Result<Envelope> {
    Request::new(WEATHER_URL)
        .method(Method::Post)
        .json(query)?
        .fetch()
        .await?
        .json()
        .await
}

fn view(model: &Model) -> Node<Msg> {
    let search = &model.search;

    div![
        C!["weather-search"],
        div![
            C!["weather-icons"],
            weather_icon("sun", "☀"),
            weather_icon("cloud", "☁"),
            weather_icon("cloud-rain", "🌧"),
            weather_icon("cloud-drizzle", "🌦"),
            weather_icon("cloud-lightning", "🌩"),
            weather_icon("cloud-fog", "🌫"),
        ],
        form![
            C!["search-form"],
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::Submit
            }),
            input![
                attrs! {
                    At::Type => "text",
                    At::Value => search.city.as_str(),
                    At::Placeholder => texts::CITY_PLACEHOLDER,
                    At::Disabled => search.loading.as_at_value(),
                },
                input_ev(Ev::Input, Msg::CityChanged),
            ],
            button![
                C!["search-button"],
                attrs! {
                    At::Type => "submit",
                    At::from("aria-label") => "Ara",
                    At::Disabled => search.loading.as_at_value(),
                },
                span![C!["icon", "icon-search"], "🔍"],
            ],
        ],
        IF!(search.loading => div![C!["loading"], texts::LOADING]),
        search.error.as_ref().map(|error| div![C!["error"], error.as_str()]),
        search.result.as_ref().map(|weather| div![
            C!["result"],
            h2![weather.heading()],
            p![weather.temperature_line()],
            p![weather.condition_line()],
        ]),
    ]
}

fn weather_icon(name: &str, glyph: &str) -> Node<Msg> {
    span![C!["icon", format!("icon-{}", name)], glyph]
}

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn element(node: &Node<Msg>) -> &El<Msg> {
        match node {
            Node::Element(el) => el,
            _ => panic!("expected an element"),
        }
    }

    #[wasm_bindgen_test]
    fn test_network_error_keeps_browser_message() {
        let err = fetch::FetchError::NetworkError(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(failure_message(&err).as_deref(), Some("Failed to fetch"));
    }

    #[wasm_bindgen_test]
    fn test_opaque_network_error_has_no_message() {
        let err = fetch::FetchError::NetworkError(JsValue::NULL);
        assert_eq!(failure_message(&err), None);
    }

    #[wasm_bindgen_test]
    fn test_view_starts_with_icon_row() {
        let model = Model {
            search: SearchState::default(),
        };
        let node = view(&model);
        let root = element(&node);
        let icons = element(&root.children[0]);

        assert_eq!(icons.children.len(), 6);
    }
}

