//! The story display component.
//!
//! One fetch per instance, driving a three-state render: spinner while the
//! fetch is in flight, an error panel if it fails, the story once it
//! resolves. A failure is terminal; reloading means recreating the
//! component.

use dioxus::{
    logger::tracing::{info, warn},
    prelude::*,
};

use crate::{
    fetch::fetch_document,
    story::{Task, UserStory},
    ui::spinner::Spinner,
};

/// Default for the `path` prop. Fetching it fails, which surfaces the
/// missing configuration in the error panel instead of silently rendering
/// nothing.
pub const PATH_UNDEFINED: &str = "<path undefined>";

#[component]
pub fn StoryView(#[props(default = PATH_UNDEFINED.to_string())] path: String) -> Element {
    let mut story: Signal<Option<UserStory>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // The fetch runs once on mount. If the component is dropped first the
    // future is dropped with it, so a late response cannot touch the
    // signals of a detached instance.
    let _ = use_resource(move || {
        let path = path.clone();
        async move {
            match fetch_document(&path).await {
                Ok(s) => {
                    info!("got story: {s:?}");
                    story.set(Some(s));
                }
                Err(e) => {
                    warn!("story fetch failed: {e}");
                    error.set(Some(format!("Unable to fetch story: {e}")));
                }
            }
        }
    });

    if let Some(message) = error() {
        return rsx! {
            span { class: "error", "{message}" }
        };
    }
    let Some(st) = story() else {
        return rsx! {
            Spinner {}
        };
    };
    rsx! {
        div { class: "story",
            h3 { "{st.name}" }
            ul { class: "tags",
                for tag in st.tags.iter() {
                    li { "{tag}" }
                }
            }
            pre {
                class: "description",
                contenteditable: "true",
                oninput: move |e: Event<FormData>| {
                    if let Some(s) = story.write().as_mut() {
                        s.set_description(e.value());
                    }
                },
                {st.description.clone().unwrap_or_default()}
            }
            h4 { "Tasks" }
            ul { class: "tasks",
                for task in st.tasks.iter() {
                    TaskItem { task: task.clone(), story }
                }
            }
        }
    }
}

#[component]
fn TaskItem(task: Task, mut story: Signal<Option<UserStory>>) -> Element {
    let name = task.name.clone();
    rsx! {
        li { class: "task",
            h4 { "{task.name}" }
            p {
                contenteditable: "true",
                id: "{task.name}-description",
                oninput: move |e: Event<FormData>| {
                    if let Some(s) = story.write().as_mut() {
                        s.set_task_description(&name, e.value());
                    }
                },
                {task.description.clone().unwrap_or_default()}
            }
            span { "{task.status}" }
        }
    }
}
