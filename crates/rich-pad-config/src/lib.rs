pub mod color;
pub mod config;
pub mod store;
pub mod theme;

pub use color::HexColor;
pub use config::AppConfig;
pub use store::{DocumentStore, SavedDocument};
pub use theme::EditorTheme;
