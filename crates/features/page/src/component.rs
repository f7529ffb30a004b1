use dioxus::prelude::*;
use skalable_domain::config::PageConfig;

/// The page body: a single logo, sized by the global stylesheet.
#[component]
pub fn App() -> Element {
    let page = use_context::<PageConfig>();

    rsx! {
        Logo { alt: page.logo.alt.clone(), src: page.logo.src.clone() }
    }
}

/// An `<img>` with no inline styling.
#[component]
pub fn Logo(alt: String, src: String) -> Element {
    rsx! {
        img { alt: "{alt}", src: "{src}" }
    }
}

/// Renders [`App`] for `page` to an HTML fragment.
#[must_use]
pub fn render_to_string(page: &PageConfig) -> String {
    let mut dom = VirtualDom::new(App).with_root_context(page.clone());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
