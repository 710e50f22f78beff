pub mod clock;
pub mod config;
pub mod constants;
pub mod deform;
pub mod error;
pub mod frame;
pub mod interaction;
pub mod mesh;
pub mod noise;
pub mod shade;
pub mod state;
pub mod uniforms;

pub static ORB_WGSL: &str = include_str!("../shaders/orb.wgsl");

pub use clock::Clock;
pub use config::{OrbConfig, SmoothingConfig};
pub use constants::*;
pub use error::OrbError;
pub use frame::{FrameDriver, FrameParameters, FrameStatus, OrbRenderer};
pub use interaction::{InteractionSmoother, PointerEvent, PointerState, TargetRect};
pub use mesh::{icosphere, Mesh};
pub use noise::noise3;
pub use state::*;
pub use uniforms::OrbUniforms;
