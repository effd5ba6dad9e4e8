//! Procedural Dance
//!
//! The dance is a pure function of the position inside a looping cycle
//! (10 seconds by default). Each frame samples the clock into a [`Beat`],
//! and [`Pose::at`] turns the beat into per-joint rotations.
//!
//! Base angles grow linearly over the cycle (degrees, `p = t / cycle`):
//!
//! | Angle      | Value               |
//! |------------|---------------------|
//! | shoulder   | `20 p`              |
//! | elbow      | `30 p`              |
//! | right hip  | `180 p`             |
//! | right knee | `-right hip`        |
//! | left hip   | `abs(90 - right hip)` |
//! | left knee  | `-left hip`         |
//!
//! The legs take turns: the right leg swings during the first half of the
//! cycle and the left leg during the second. Elbows bend one way in the first
//! half and back the other way in the second.

use std::time::Duration;

use glam::Vec3;

/// Default length of one dance loop.
pub const DEFAULT_CYCLE: Duration = Duration::from_millis(10_000);

/// Joints driven by the dance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Whole-body spin around +Y (off unless enabled).
    Spin,
    Shoulder,
    Elbow,
    RightHip,
    RightKnee,
    LeftHip,
    LeftKnee,
}

impl Joint {
    pub const ALL: [Joint; 7] = [
        Joint::Spin,
        Joint::Shoulder,
        Joint::Elbow,
        Joint::RightHip,
        Joint::RightKnee,
        Joint::LeftHip,
        Joint::LeftKnee,
    ];

    /// Rotation axis in the joint's parent frame.
    #[must_use]
    pub fn axis(self) -> Vec3 {
        match self {
            Joint::Spin | Joint::Elbow => Vec3::Y,
            Joint::Shoulder
            | Joint::RightHip
            | Joint::RightKnee
            | Joint::LeftHip
            | Joint::LeftKnee => Vec3::NEG_X,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Dance configuration.
#[derive(Debug, Clone)]
pub struct DanceSettings {
    /// Length of one loop.
    pub cycle: Duration,
    /// Whether the robot dances as soon as the window opens.
    pub start_dancing: bool,
    /// Spin the whole robot once per cycle while it dances.
    pub spin: bool,
}

impl Default for DanceSettings {
    fn default() -> Self {
        Self {
            cycle: DEFAULT_CYCLE,
            start_dancing: false,
            spin: false,
        }
    }
}

/// One sample of the dance clock: milliseconds into the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub t_ms: u64,
    pub cycle_ms: u64,
}

impl Beat {
    /// `t_ms` must be below `cycle_ms`; it is wrapped otherwise.
    #[must_use]
    pub fn new(t_ms: u64, cycle_ms: u64) -> Self {
        let cycle_ms = cycle_ms.max(1);
        Self {
            t_ms: t_ms % cycle_ms,
            cycle_ms,
        }
    }

    /// Position in the cycle, `[0, 1)`.
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.t_ms as f32 / self.cycle_ms as f32
    }

    #[inline]
    fn first_half(self) -> bool {
        self.t_ms * 2 < self.cycle_ms
    }

    #[inline]
    fn up_to_half(self) -> bool {
        self.t_ms * 2 <= self.cycle_ms
    }
}

/// Wraps elapsed time into the dance loop.
#[derive(Debug, Clone, Copy)]
pub struct DanceClock {
    cycle_ms: u64,
}

impl DanceClock {
    #[must_use]
    pub fn new(cycle: Duration) -> Self {
        let cycle_ms = u64::try_from(cycle.as_millis()).unwrap_or(u64::MAX).max(1);
        Self { cycle_ms }
    }

    #[must_use]
    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
    }

    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> Beat {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Beat::new(elapsed_ms, self.cycle_ms)
    }
}

impl Default for DanceClock {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE)
    }
}

/// Joint rotations (degrees) for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    angles: [f32; Joint::ALL.len()],
}

impl Pose {
    /// Every joint at rest.
    #[must_use]
    pub fn rest() -> Self {
        Self::default()
    }

    /// Computes the pose for `beat`. A robot that is not dancing stands at rest.
    #[must_use]
    pub fn at(beat: Beat, dancing: bool, spin: bool) -> Self {
        let mut pose = Self::rest();
        if !dancing {
            return pose;
        }

        let p = beat.fraction();
        let shoulder = 20.0 * p;
        let elbow = 30.0 * p;
        let right_hip = 180.0 * p;
        let right_knee = -right_hip;
        let left_hip = (90.0 - right_hip).abs();
        let left_knee = -left_hip;

        if spin {
            pose.set(Joint::Spin, 360.0 * p);
        }
        pose.set(Joint::Shoulder, shoulder);
        pose.set(Joint::Elbow, if beat.first_half() { elbow } else { -elbow });

        if beat.up_to_half() {
            pose.set(Joint::RightHip, right_hip);
            pose.set(Joint::RightKnee, right_knee);
        } else {
            pose.set(Joint::LeftHip, left_hip);
            pose.set(Joint::LeftKnee, left_knee);
        }

        pose
    }

    #[inline]
    #[must_use]
    pub fn angle(&self, joint: Joint) -> f32 {
        self.angles[joint.index()]
    }

    #[inline]
    pub fn set(&mut self, joint: Joint, degrees: f32) {
        self.angles[joint.index()] = degrees;
    }

    /// `(degrees, axis)` for `joint`, or `None` when it is at rest.
    #[must_use]
    pub fn rotation(&self, joint: Joint) -> Option<(f32, Vec3)> {
        let degrees = self.angle(joint);
        (degrees != 0.0).then(|| (degrees, joint.axis()))
    }
}

/// Dance state: the on/off switch plus the loop clock.
#[derive(Debug, Clone)]
pub struct Dance {
    clock: DanceClock,
    dancing: bool,
    spin: bool,
}

impl Dance {
    #[must_use]
    pub fn new(settings: &DanceSettings) -> Self {
        Self {
            clock: DanceClock::new(settings.cycle),
            dancing: settings.start_dancing,
            spin: settings.spin,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_dancing(&self) -> bool {
        self.dancing
    }

    /// Flips between dancing and standing still. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.dancing = !self.dancing;
        log::debug!("Dancing: {}", self.dancing);
        self.dancing
    }

    pub fn set_dancing(&mut self, dancing: bool) {
        self.dancing = dancing;
    }

    #[inline]
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spin
    }

    /// Turns the whole-body spin on or off. Returns the new state.
    pub fn toggle_spin(&mut self) -> bool {
        self.spin = !self.spin;
        log::debug!("Spin: {}", self.spin);
        self.spin
    }

    #[must_use]
    pub fn clock(&self) -> DanceClock {
        self.clock
    }

    /// Pose for the given time since startup.
    #[must_use]
    pub fn pose(&self, elapsed: Duration) -> Pose {
        Pose::at(self.clock.sample(elapsed), self.dancing, self.spin)
    }
}

impl Default for Dance {
    fn default() -> Self {
        Self::new(&DanceSettings::default())
    }
}
