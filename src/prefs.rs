pub mod prefs_events;
pub mod prefs_render;
mod prefs_state;

pub use prefs_state::{LIMIT_STEP, PrefsField, PrefsState};
