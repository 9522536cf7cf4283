//! UI Components
//!
//! View components selected by the router, plus shared pieces.

mod create_task_view;
mod home_view;
mod not_found_view;
mod tag_badge;

pub use create_task_view::CreateTaskView;
pub use home_view::HomeView;
pub use not_found_view::NotFoundView;
pub use tag_badge::TagBadge;
