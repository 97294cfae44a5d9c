//! App composition: screen states, plugin wiring and session-level helpers.

pub mod auto_close;
pub mod game;
pub mod state;

pub use game::GamePlugin;
pub use state::Screen;
