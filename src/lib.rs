pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod screens;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::Screen;
pub use core::catalog::{Catalog, CatalogFile};
pub use core::config::GameConfig;
pub use gameplay::session::{GameSession, Guess};
