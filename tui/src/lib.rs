mod app;
pub use app::{App, AppView, OverlayKind};

pub mod dispatch;
pub mod preferences;
pub mod reveal;
pub mod theme;
pub mod views;
