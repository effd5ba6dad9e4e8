use glam::Vec3;

use crate::animation::{Joint, Pose};
use crate::errors::{DanceError, Result};
use crate::resources::{Color, Shape};
use crate::robot::part::{DrawCommand, DrawSink, Part};
use crate::scene::MatrixStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Right,
    Left,
}

impl Side {
    /// Mirror factor along X: the right side sits at negative X.
    fn sign(self) -> f32 {
        match self {
            Side::Right => -1.0,
            Side::Left => 1.0,
        }
    }

    fn name(self, right: &'static str, left: &'static str) -> &'static str {
        match self {
            Side::Right => right,
            Side::Left => left,
        }
    }
}

/// The robot skeleton.
#[derive(Debug, Clone)]
pub struct Rig {
    root: Part,
}

impl Rig {
    #[must_use]
    pub fn new(root: Part) -> Self {
        Self { root }
    }

    /// The dancing humanoid: torso, head, two arms and two legs.
    #[must_use]
    pub fn humanoid() -> Self {
        let torso = Part::new("torso", Shape::Cube, Color::RED)
            .joint(Joint::Spin)
            .local_scale(1.0, 1.0, 0.5)
            .child(arm(Side::Right))
            .child(arm(Side::Left))
            .child(
                Part::new("head", Shape::Sphere, Color::GREY)
                    .translate(0.0, 1.6, 0.0)
                    .local_scale(0.8, 0.8, 0.8),
            )
            .child(leg(Side::Right))
            .child(leg(Side::Left));

        Self::new(torso)
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.root.count()
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Part> {
        self.root.find(name)
    }

    /// Walks the skeleton post-order, sending one draw per part to `sink`.
    ///
    /// Each part saves the inherited frame, applies its inherited ops, visits
    /// its children, applies its local ops, draws, then restores the frame.
    pub fn traverse(&self, pose: &Pose, stack: &mut MatrixStack, sink: &mut impl DrawSink) -> Result<()> {
        let depth = stack.depth();
        visit(&self.root, pose, stack, sink)?;

        if stack.depth() != depth {
            return Err(DanceError::UnbalancedStack {
                expected: depth,
                actual: stack.depth(),
            });
        }
        Ok(())
    }

    /// Convenience: traverses from the identity frame and collects the draws.
    pub fn draw_list(&self, pose: &Pose) -> Result<Vec<DrawCommand>> {
        let mut draws = Vec::with_capacity(self.part_count());
        self.traverse(pose, &mut MatrixStack::new(), &mut draws)?;
        Ok(draws)
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::humanoid()
    }
}

fn visit(part: &Part, pose: &Pose, stack: &mut MatrixStack, sink: &mut impl DrawSink) -> Result<()> {
    stack.scoped(|stack| {
        for op in &part.inherited {
            op.apply(stack, pose);
        }
        for child in &part.children {
            visit(child, pose, stack, sink)?;
        }
        for op in &part.local {
            op.apply(stack, pose);
        }
        sink.draw(DrawCommand {
            part: part.name,
            shape: part.shape,
            model: stack.current(),
            color: part.color,
        });
        Ok(())
    })
}

fn arm(side: Side) -> Part {
    let s = side.sign();

    let hand = Part::new(side.name("right_hand", "left_hand"), Shape::Sphere, Color::GREEN)
        .translate(0.0, 0.0, 0.6)
        .local_scale(0.2, 0.2, 0.2);

    let lower_arm = Part::new(side.name("right_lower_arm", "left_lower_arm"), Shape::Cube, Color::BLUE)
        .translate(0.0, 0.0, 0.75)
        .local_scale(0.2, 0.2, 0.6)
        .child(hand);

    let elbow = Part::new(side.name("right_elbow", "left_elbow"), Shape::Sphere, Color::GREEN)
        .translate(0.0, 0.0, 0.6)
        .rotate(90.0, Vec3::X)
        .joint(Joint::Elbow)
        .local_scale(0.2, 0.2, 0.2)
        .child(lower_arm);

    let upper_arm = Part::new(side.name("right_upper_arm", "left_upper_arm"), Shape::Cube, Color::GREY)
        .translate(s * 0.4, 0.0, 1.0)
        .local_scale(0.25, 0.25, 0.6)
        .local_rotate(-s * 30.0, Vec3::Z)
        .child(elbow);

    Part::new(side.name("right_shoulder", "left_shoulder"), Shape::Sphere, Color::GREEN)
        .translate(s * 0.9, 0.5, 0.0)
        .joint(Joint::Shoulder)
        .local_scale(0.5, 0.5, 0.5)
        .child(upper_arm)
}

fn leg(side: Side) -> Part {
    let s = side.sign();
    let (hip_joint, knee_joint) = match side {
        Side::Right => (Joint::RightHip, Joint::RightKnee),
        Side::Left => (Joint::LeftHip, Joint::LeftKnee),
    };

    let lower_leg = Part::new(side.name("right_lower_leg", "left_lower_leg"), Shape::Cube, Color::BLUE)
        .translate(0.0, -0.7, 0.0)
        .local_scale(0.2, 0.6, 0.2);

    let knee = Part::new(side.name("right_knee", "left_knee"), Shape::Sphere, Color::GREEN)
        .translate(0.0, -0.6, 0.0)
        .joint(knee_joint)
        .local_scale(0.2, 0.2, 0.2)
        .child(lower_leg);

    let upper_leg = Part::new(side.name("right_upper_leg", "left_upper_leg"), Shape::Cube, Color::GREY)
        .translate(0.0, -0.6, 0.0)
        .local_scale(0.25, 0.6, 0.25)
        .child(knee);

    Part::new(side.name("right_hip", "left_hip"), Shape::Sphere, Color::GREEN)
        .translate(s * 0.4, -1.2, 0.0)
        .joint(hip_joint)
        .local_scale(0.3, 0.3, 0.3)
        .child(upper_leg)
}
