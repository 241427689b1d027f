mod api;
mod components;
mod disease_map;
mod home;
mod xray;

use components::header::render_navbar;
use disease_map::MapPage;
use gloo_events::EventListener;
use home::HomePage;
use xray::XrayPage;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Home,
    Map,
    Xray,
}

impl Page {
    /// Unknown routes fall back to the home page.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_end_matches('/') {
            "/map" => Page::Map,
            "/xray" => Page::Xray,
            _ => Page::Home,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::Map => "#/map",
            Page::Xray => "#/xray",
        }
    }
}

fn current_page() -> Page {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}

enum Msg {
    HashChanged,
}

struct App {
    page: Page,
    _hash_listener: Option<EventListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let hash_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "hashchange", move |_| {
                link.send_message(Msg::HashChanged);
            })
        });

        Self {
            page: current_page(),
            _hash_listener: hash_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HashChanged => {
                let page = current_page();
                if page == self.page {
                    return false;
                }
                log::debug!("Navigating to {:?}", page);
                self.page = page;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                { render_navbar(self.page) }
                {
                    match self.page {
                        Page::Home => html! { <HomePage /> },
                        Page::Map => html! { <MapPage /> },
                        Page::Xray => html! { <XrayPage /> },
                    }
                }
            </>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Aarogya AI starting, API at {}", api::API_BASE);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn hashes_map_to_pages() {
        assert_eq!(Page::from_hash("#/map"), Page::Map);
        assert_eq!(Page::from_hash("#/xray/"), Page::Xray);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/risk"), Page::Home);
    }

    #[test]
    fn hrefs_round_trip() {
        for page in [Page::Home, Page::Map, Page::Xray] {
            assert_eq!(Page::from_hash(page.href()), page);
        }
    }
}
