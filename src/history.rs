pub mod history_events;
pub mod history_render;
mod history_state;

pub use history_state::HistoryState;
