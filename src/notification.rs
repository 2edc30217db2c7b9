//! Transient toast messages drawn over the current page

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationKind, NotificationState};
