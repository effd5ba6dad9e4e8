pub mod dance;

pub use dance::{Beat, DEFAULT_CYCLE, Dance, DanceClock, DanceSettings, Joint, Pose};
