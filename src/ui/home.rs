use dioxus::prelude::*;

use crate::ui::{icon::Icon, story_view::StoryView};

const DEMO_STORY: Asset = asset!("/assets/story.yaml");

/// Demo page embedding one of each component.
#[component]
pub fn Home() -> Element {
    rsx! {
        h1 {
            Icon { name: "check" }
            " User stories"
        }
        StoryView { path: DEMO_STORY.to_string() }
    }
}
