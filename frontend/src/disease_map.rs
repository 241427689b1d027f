use crate::api::fetch_hotspots;
use gloo_console::error;
use shared::{CircleOverlay, HotspotLoad, MapView, Tile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const CIRCLE_COLOR: &str = "red";

#[function_component(DiseaseMap)]
pub fn disease_map() -> Html {
    let load = use_state(HotspotLoad::default);

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            let mut state = (*load).clone();
            if state.start() {
                load.set(state.clone());
                spawn_local(async move {
                    let outcome = fetch_hotspots().await;
                    if let Err(err) = &outcome {
                        error!(format!("Could not fetch map data: {}", err));
                    }
                    state.finish(outcome);
                    load.set(state);
                });
            }
            || ()
        });
    }

    let view = MapView::OUTBREAK;
    let tiles = view.tiles();
    let overlays = load.overlays();

    html! {
        <div
            class="disease-map"
            style={format!("width: {}px; height: {}px;", view.width, view.height)}
        >
            { for tiles.iter().map(render_tile) }
            <svg
                class="map-overlay"
                width={view.width.to_string()}
                height={view.height.to_string()}
            >
                {
                    for overlays
                        .iter()
                        .filter(|overlay| overlay.is_drawable())
                        .map(|overlay| render_circle(&view, overlay))
                }
            </svg>
            {
                if load.is_loading() {
                    html! { <div class="map-status">{"Loading outbreak data..."}</div> }
                } else {
                    html! {}
                }
            }
            <div class="map-attribution">{"© OpenStreetMap contributors"}</div>
        </div>
    }
}

fn render_tile(tile: &Tile) -> Html {
    html! {
        <img
            class="map-tile"
            src={tile.url()}
            alt=""
            style={format!("left: {:.0}px; top: {:.0}px;", tile.left, tile.top)}
        />
    }
}

fn render_circle(view: &MapView, overlay: &CircleOverlay) -> Html {
    let (cx, cy) = view.to_screen(overlay.center);
    let radius = view.meters_to_pixels(overlay.radius_m, overlay.center.lat);

    html! {
        <circle
            cx={format!("{:.1}", cx)}
            cy={format!("{:.1}", cy)}
            r={format!("{:.1}", radius)}
            stroke={CIRCLE_COLOR}
            stroke-width="3"
            fill={CIRCLE_COLOR}
            fill-opacity="0.2"
        />
    }
}

/// Outbreak surveillance page wrapping the map.
#[function_component(MapPage)]
pub fn map_page() -> Html {
    html! {
        <div class="page-container">
            <h2 style="margin-bottom: 20px;">{"Live Disease Outbreak Surveillance"}</h2>
            <p style="margin-bottom: 20px; color: #94a3b8;">
                {"This map shows real-time data of communicable diseases like Bird Flu and Influenza."}
            </p>
            <div class="map-frame">
                <DiseaseMap />
            </div>
        </div>
    }
}
