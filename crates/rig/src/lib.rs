//! Camera Rig: first-person movement with collision, push-out, head bob and look control.
//!
//! # Invariants
//! - Velocity decays exponentially toward zero and never reverses sign, whatever `dt` is.
//! - Each horizontal axis is tested on its own; a blocked axis never moves, a free one always does.
//! - Obstacles are borrowed read-only; the rig owns only the camera state.
//! - Pitch stays strictly inside (-90°, 90°).

pub mod camera;
pub mod config;
pub mod look;
pub mod motion;
pub mod obstacles;
pub mod rig;

pub use camera::{BASE_YAW, FirstPersonCamera, PITCH_LIMIT};
pub use config::RigConfig;
pub use look::{CursorLook, LookMode, POINTER_RADIANS_PER_PIXEL, pointer_look};
pub use motion::{HeadBob, SprintTimer};
pub use obstacles::{Obstacles, PointObstacle, push_out};
pub use rig::{CameraRig, MoveAxis, MoveOutcome};
