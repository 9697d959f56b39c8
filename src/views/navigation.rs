use crate::Route;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    pub fn path(&self) -> String {
        self.route.to_string()
    }

    /// Exact path match only, so `/tips/extra` does not light up the Tips entry.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path()
    }
}

pub fn nav_items() -> [NavItem; 2] {
    [
        NavItem {
            route: Route::Dashboard {},
            label: "Dashboard",
            icon: "🏠",
        },
        NavItem {
            route: Route::Tips {},
            label: "Tips",
            icon: "📖",
        },
    ]
}

/// The layout wrapping every route: page content via the [`Outlet`] and a fixed bottom bar.
#[component]
pub fn Navigation() -> Element {
    let current_path = use_route::<Route>().to_string();
    let navigator = use_navigator();

    rsx! {
        div { class: "pb-20 md:pb-0",
            Outlet::<Route> {}
        }

        nav { class: "fixed bottom-0 left-0 right-0 border-t border-border bg-card md:hidden",
            div { class: "flex items-center justify-around py-2",
                for item in nav_items() {
                    {
                        let state_class = if item.is_active(&current_path) {
                            "text-primary"
                        } else {
                            "text-muted-foreground"
                        };
                        let route = item.route.clone();
                        rsx! {
                            button {
                                key: "{item.label}",
                                class: "flex flex-col items-center gap-1 h-auto py-2 px-4 rounded-md hover:bg-muted {state_class}",
                                onclick: move |_| {
                                    tracing::debug!(to = %route, "navigating");
                                    navigator.push(route.clone());
                                },
                                span { class: "text-xl", "{item.icon}" }
                                span { class: "text-xs", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(path: &str) -> Vec<&'static str> {
        nav_items()
            .into_iter()
            .filter(|item| item.is_active(path))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn paths_follow_routes() {
        let paths: Vec<_> = nav_items().iter().map(NavItem::path).collect();
        assert_eq!(paths, ["/", "/tips"]);
    }

    #[test]
    fn exactly_one_entry_active_per_route() {
        assert_eq!(active_labels(&Route::Dashboard {}.to_string()), ["Dashboard"]);
        assert_eq!(active_labels(&Route::Tips {}.to_string()), ["Tips"]);
    }

    #[test]
    fn no_prefix_matching() {
        assert!(active_labels("/tips/").is_empty());
        assert!(active_labels("/tip").is_empty());
        assert!(active_labels("").is_empty());
    }

    #[test]
    fn unknown_route_activates_nothing() {
        let missing = Route::NotFound {
            segments: vec!["nowhere".to_string()],
        };
        assert!(active_labels(&missing.to_string()).is_empty());
    }
}
