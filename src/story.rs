//! The user story data model.
//!
//! A story and its tasks are built in full from one fetched document; after
//! that the only mutation is editing `description` text in memory. Edits are
//! never re-serialized or sent anywhere.

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

/// A unit of work within a story.
///
/// `name` doubles as an element id in the rendered view, so it is assumed
/// unique within a story. Nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
}

/// The top-level document entity: name, tags, and an ordered task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl UserStory {
    /// Replaces the story's own description with the edited text.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    /// Replaces the description of the task called `name`.
    ///
    /// Unknown names are ignored; the edit came from an element whose id was
    /// derived from a task name, so a miss means the story changed under us.
    pub fn set_task_description(&mut self, name: &str, text: impl Into<String>) {
        match self.tasks.iter_mut().find(|t| t.name == name) {
            Some(task) => task.description = Some(text.into()),
            None => warn!("edit for unknown task {name:?} dropped"),
        }
    }
}
