//! Robot Skeleton
//!
//! The robot is a fixed tree of [`Part`]s. [`Rig::traverse`] walks it with a
//! [`MatrixStack`](crate::scene::MatrixStack), composing each part's frame
//! from its ancestors and emitting one [`DrawCommand`] per part.
//!
//! ```text
//! torso
//! ├─ right shoulder ─ upper arm ─ elbow ─ lower arm ─ hand
//! ├─ left shoulder  ─ upper arm ─ elbow ─ lower arm ─ hand
//! ├─ head
//! ├─ right hip ─ upper leg ─ knee ─ lower leg
//! └─ left hip  ─ upper leg ─ knee ─ lower leg
//! ```

pub mod part;
pub mod rig;

pub use part::{DrawCommand, DrawSink, Part, TransformOp};
pub use rig::Rig;
