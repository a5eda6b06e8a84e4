//! User interface components.
//!
//! Three presentational units, composed by page inclusion rather than by
//! calling each other: the icon renderer, the loading spinner, and the
//! story view.

pub mod home; // demo page (public for routing)
pub mod icon; // name -> svg fragment renderer
pub mod spinner; // loading indicator
pub mod story_view; // fetch/parse/render of one story document
