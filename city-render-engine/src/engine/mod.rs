pub mod assets;
pub mod core;
pub mod scene;
pub mod systems;
