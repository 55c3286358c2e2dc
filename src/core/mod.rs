pub mod constants;
pub mod grid;
pub mod pointer;
pub mod reveal;
pub mod trail;
pub mod uniforms;

pub use constants::*;
pub use grid::*;
pub use pointer::*;
pub use reveal::*;
pub use trail::*;
pub use uniforms::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static GRID_WGSL: &str = include_str!("../../shaders/grid.wgsl");
