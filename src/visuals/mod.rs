mod controller;
mod driver;
mod scene;
mod state;

pub use controller::{AnimationController, VisualError};
pub use driver::VisualsDriver;
pub use scene::{SceneController, SceneHandle, SceneModel};
pub use state::AnimationState;
