use dioxus::prelude::*;

/// Animated loading indicator. No props, no state; the rotation lives in
/// `assets/main.css`.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "loader" }
    }
}
