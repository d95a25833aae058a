pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod falling;
pub mod frame_loop;
pub mod heart;
pub mod layout;
pub mod lifecycle;
pub mod loader;
pub mod scene;
pub mod starfield;
pub mod state;

pub use animation::*;
pub use config::*;
pub use error::SceneError;
pub use falling::*;
pub use frame_loop::*;
pub use heart::*;
pub use layout::*;
pub use lifecycle::Mount;
pub use loader::*;
pub use scene::*;
pub use starfield::Starfield;
pub use state::*;
