use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_hook(|| tracing::warn!(path = %path, "no route matched"));

    rsx! {
        div { class: "container mx-auto p-4 text-center",
            h1 { class: "text-4xl font-bold mb-4", "Page not found" }
            p { class: "text-lg text-muted-foreground mb-6", "Nothing lives at /{path}." }
            Link { class: "text-primary underline", to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
