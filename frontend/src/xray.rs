use crate::api::ApiError;
use crate::components::handlers;
use crate::components::results::render_results;
use crate::components::upload_section::render_upload_section;
use gloo_file::File as GlooFile;
use shared::{BodyArea, PredictionResult, UploadSelection};
use yew::prelude::*;

pub enum Msg {
    SelectArea(BodyArea),
    FileChosen(GlooFile),
    Scan,
    ScanCompleted(Result<PredictionResult, ApiError>),
}

/// X-ray upload page. State lives only as long as the page is shown.
pub struct XrayPage {
    pub selection: UploadSelection<GlooFile>,
}

impl Component for XrayPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selection: UploadSelection::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectArea(area) => handlers::handle_select_area(self, area),
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::Scan => handlers::handle_scan(self, ctx),
            Msg::ScanCompleted(outcome) => handlers::handle_scan_completed(self, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page-container">
                <h2>{"X-Ray Upload"}</h2>
                { render_upload_section(self, ctx) }
                { render_results(self) }
            </div>
        }
    }
}
