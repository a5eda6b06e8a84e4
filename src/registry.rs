//! Tag-to-component registry.
//!
//! A process-wide map from the tag names a host page uses (`svg-icon`,
//! `load-spinner`, `user-story`) to constructors that build the matching
//! component from an attribute map. Populated once, lazily; repeated lookups
//! see the same map, so registration is idempotent.

use std::collections::HashMap;
use std::sync::OnceLock;

use dioxus::prelude::*;

use crate::ui::{
    icon::Icon,
    spinner::Spinner,
    story_view::{PATH_UNDEFINED, StoryView},
};

/// Element-level configuration, as attribute name/value pairs.
pub type Attributes = HashMap<String, String>;

type Constructor = fn(&Attributes) -> Element;

static REGISTRY: OnceLock<HashMap<&'static str, Constructor>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Constructor> {
    REGISTRY.get_or_init(|| {
        let mut tags: HashMap<&'static str, Constructor> = HashMap::new();
        tags.insert("svg-icon", |attrs| {
            let name = attrs.get("name").cloned().unwrap_or_else(|| "n/a".into());
            rsx! {
                Icon { name }
            }
        });
        tags.insert("load-spinner", |_attrs| {
            rsx! {
                Spinner {}
            }
        });
        tags.insert("user-story", |attrs| {
            let path = attrs
                .get("path")
                .cloned()
                .unwrap_or_else(|| PATH_UNDEFINED.into());
            rsx! {
                StoryView { path }
            }
        });
        tags
    })
}

/// Builds the component registered under `tag`, applying attribute
/// defaults. Unknown tags return `None`.
pub fn mount(tag: &str, attrs: &Attributes) -> Option<Element> {
    registry().get(tag).map(|ctor| ctor(attrs))
}

/// The tag names the registry knows, sorted.
pub fn registered_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = registry().keys().copied().collect();
    tags.sort_unstable();
    tags
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registers_all_three_tags_once() {
        let first = registered_tags();
        let second = registered_tags();
        assert_eq!(first, vec!["load-spinner", "svg-icon", "user-story"]);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_tag_is_not_mounted() {
        assert!(mount("bogus-tag", &Attributes::new()).is_none());
    }

    #[test]
    fn known_tags_mount_with_defaulted_attributes() {
        let attrs = Attributes::new();
        for tag in registered_tags() {
            assert!(mount(tag, &attrs).is_some(), "no constructor for {tag}");
        }
    }
}
