pub mod app;
pub mod drag;
pub mod events;
pub mod notice;
pub mod ui;

pub use app::App;
