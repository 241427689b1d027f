use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🩻",
        "X-Ray Analysis",
        "Upload a kidney, lung or bone X-ray and get an instant screening assessment.",
    ),
    (
        "🗺️",
        "Outbreak Map",
        "See where communicable disease cases are clustering around you.",
    ),
    (
        "🎧",
        "AI Voice Companion",
        "Judgment-free, round-the-clock conversations for emotional support.",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="hero">
            <h1>{"Aarogya AI"}</h1>
            <p class="project-desc">
                {"AI-assisted health screening and outbreak awareness, in one place."}
            </p>
            <div class="features info-cards">
                { for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="feature-card">
                        <span class="feature-icon">{ *icon }</span>
                        <h3>{ *title }</h3>
                        <p>{ *description }</p>
                    </div>
                })}
            </div>
        </section>
    }
}
