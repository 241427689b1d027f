use crate::Page;
use yew::prelude::*;

const NAV_LINKS: [(Page, &str); 3] = [
    (Page::Home, "Home"),
    (Page::Map, "Outbreak Map"),
    (Page::Xray, "X-Ray"),
];

/// Renders the top navigation bar, highlighting the active page
pub fn render_navbar(active: Page) -> Html {
    html! {
        <nav class="navbar">
            <a href={Page::Home.href()} class="nav-logo">{"Aarogya AI"}</a>
            <div class="nav-links">
                { for NAV_LINKS.iter().map(|(page, label)| html! {
                    <a href={page.href()} class={classes!((*page == active).then_some("active"))}>
                        { *label }
                    </a>
                })}
            </div>
        </nav>
    }
}
