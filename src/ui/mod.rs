pub mod app;
pub mod components;
pub mod layout;
pub mod navigation;
pub mod text;
pub mod timestamp;

// Re-export commonly used items
pub use app::App;
pub use components::status::{render_status, RenderContext, StatusView, StatusWidget};
pub use layout::draw;
