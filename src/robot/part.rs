use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::animation::{Joint, Pose};
use crate::resources::{Color, Shape};
use crate::scene::MatrixStack;

/// One step applied to the current matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate(Vec3),
    Rotate { degrees: f32, axis: Vec3 },
    Scale(Vec3),
    /// Rotation read from the pose; skipped while the joint is at rest.
    Joint(Joint),
}

impl TransformOp {
    pub fn apply(&self, stack: &mut MatrixStack, pose: &Pose) {
        match *self {
            TransformOp::Translate(offset) => stack.translate(offset),
            TransformOp::Rotate { degrees, axis } => stack.rotate_deg(degrees, axis),
            TransformOp::Scale(factor) => stack.scale(factor),
            TransformOp::Joint(joint) => {
                if let Some((degrees, axis)) = pose.rotation(joint) {
                    stack.rotate_deg(degrees, axis);
                }
            }
        }
    }
}

type Ops = SmallVec<[TransformOp; 3]>;

/// A body part: a node of the fixed skeleton.
///
/// `inherited` ops are applied before the children are visited, so they move
/// the whole subtree. `local` ops only shape this part's own primitive.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: &'static str,
    pub shape: Shape,
    pub color: Color,
    pub inherited: Ops,
    pub local: Ops,
    pub children: Vec<Part>,
}

impl Part {
    #[must_use]
    pub fn new(name: &'static str, shape: Shape, color: Color) -> Self {
        Self {
            name,
            shape,
            color,
            inherited: SmallVec::new(),
            local: SmallVec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.inherited.push(TransformOp::Translate(Vec3::new(x, y, z)));
        self
    }

    #[must_use]
    pub fn rotate(mut self, degrees: f32, axis: Vec3) -> Self {
        self.inherited.push(TransformOp::Rotate { degrees, axis });
        self
    }

    #[must_use]
    pub fn joint(mut self, joint: Joint) -> Self {
        self.inherited.push(TransformOp::Joint(joint));
        self
    }

    #[must_use]
    pub fn local_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.local.push(TransformOp::Scale(Vec3::new(x, y, z)));
        self
    }

    #[must_use]
    pub fn local_rotate(mut self, degrees: f32, axis: Vec3) -> Self {
        self.local.push(TransformOp::Rotate { degrees, axis });
        self
    }

    #[must_use]
    pub fn child(mut self, part: Part) -> Self {
        self.children.push(part);
        self
    }

    /// Number of parts in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Part::count).sum::<usize>()
    }

    /// Depth-first search by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Part> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }
}

/// A single primitive draw produced by the traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub part: &'static str,
    pub shape: Shape,
    pub model: Mat4,
    pub color: Color,
}

/// Receives draws in traversal order.
pub trait DrawSink {
    fn draw(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
