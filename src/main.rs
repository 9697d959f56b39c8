use dioxus::prelude::*;

use views::{Dashboard, Navigation, NotFound, Tips};

mod components;
mod home;
mod views;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Every page sits under the [`Navigation`] layout, so the bottom bar is always present.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navigation)]
        #[route("/")]
        Dashboard {},
        #[route("/tips")]
        Tips {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("failed to initialise logger: {e}");
    }

    tracing::info!("starting Thermal Detective");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
