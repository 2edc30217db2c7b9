mod app_events;
mod app_render;
mod app_state;
mod help_line;
mod route;


pub use app_state::App;
pub use route::Route;
