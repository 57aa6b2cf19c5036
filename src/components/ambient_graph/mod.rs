mod component;
mod error;
mod field;
mod lanes;
mod mount;
mod proximity;
mod raf;
mod render;
mod sizing;
mod state;
mod types;

pub use component::AmbientGraphCanvas;
pub use error::SurfaceError;
pub use mount::{BackgroundHandle, mount};
pub use raf::{AnimationHandle, LoopState, RafError};
pub use state::AmbientState;
pub use types::{AmbientConfig, DrawCommand, Node, NodeTone, Viewport};
