use crate::api::{self, ApiError};
use crate::components::utils::notify;
use crate::xray::{Msg, XrayPage};
use gloo_file::File as GlooFile;
use shared::{BodyArea, PredictionResult};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_select_area(model: &mut XrayPage, area: BodyArea) -> bool {
    if model.selection.area() == Some(area) {
        return false;
    }
    model.selection.select_area(area);
    true
}

pub fn handle_file_chosen(model: &mut XrayPage, file: GlooFile) -> bool {
    log::info!("Selected {} ({} bytes)", file.name(), file.size());
    model.selection.select_file(file);
    true
}

pub fn handle_scan(model: &mut XrayPage, ctx: &Context<XrayPage>) -> bool {
    let Some((area, file)) = model.selection.begin() else {
        return false;
    };

    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::predict_xray(area, &file).await;
            link.send_message(Msg::ScanCompleted(outcome));
        }
    });

    true
}

pub fn handle_scan_completed(
    model: &mut XrayPage,
    outcome: Result<PredictionResult, ApiError>,
) -> bool {
    match &outcome {
        Ok(result) => log::info!("Prediction confidence {:.3}", result.confidence),
        Err(e) => log::error!("Prediction failed: {}", e),
    }

    if let Some(notice) = model.selection.finish(outcome) {
        notify(notice);
    }
    true
}
