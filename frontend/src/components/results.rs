use crate::xray::XrayPage;
use yew::prelude::*;

pub fn render_results(model: &XrayPage) -> Html {
    let Some(result) = model.selection.result() else {
        return html! {};
    };

    let assessment = result.assessment;
    html! {
        <div class="results-container" style="margin-top: 20px;">
            <p style={format!("color: {};", assessment.color())}>{ assessment.label() }</p>
            <p class="confidence">{ format!("Confidence: {:.1}%", result.confidence * 100.0) }</p>
        </div>
    }
}
