use crate::components::utils::{click_element, debounce};
use crate::xray::{Msg, XrayPage};
use gloo_file::File as GlooFile;
use shared::BodyArea;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const FILE_INPUT_ID: &str = "xray-file-input";

pub fn render_upload_section(model: &XrayPage, ctx: &Context<XrayPage>) -> Html {
    html! {
        <div class="upload-section">
            { render_area_buttons(model, ctx) }
            { render_file_input(model, ctx) }
        </div>
    }
}

fn render_area_buttons(model: &XrayPage, ctx: &Context<XrayPage>) -> Html {
    let link = ctx.link();
    let selected = model.selection.area();

    html! {
        <div class="area-buttons">
            { for BodyArea::iter().map(|area| html! {
                <button
                    key={area.to_string()}
                    class={classes!("btn", (selected == Some(area)).then_some("btn-active"))}
                    onclick={link.callback(move |_| Msg::SelectArea(area))}
                >
                    { area.to_string() }
                </button>
            })}
        </div>
    }
}

fn render_file_input(model: &XrayPage, ctx: &Context<XrayPage>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.item(0))
            .map(|file| Msg::FileChosen(GlooFile::from(file)))
    });

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <button class="btn" onclick={debounce(300, || click_element(FILE_INPUT_ID))}>
                {"Select Image"}
            </button>

            {
                if let Some(file) = model.selection.file() {
                    html! { <p class="selected-file">{ file.name() }</p> }
                } else {
                    html! {}
                }
            }

            <button
                class="btn"
                onclick={link.callback(|_| Msg::Scan)}
                disabled={!model.selection.can_scan()}
            >
                { if model.selection.is_busy() { "Scanning..." } else { "Scan" } }
            </button>
        </>
    }
}
