//! Explicit replacement for the fixed-function model-view matrix stack.
//!
//! Every operation post-multiplies onto the current top, so calls read in the
//! same order as the classic `glTranslate` / `glRotate` sequence: the last
//! transform issued is the first one applied to a vertex.

use glam::{Mat4, Quat, Vec3};

/// A stack of 4×4 matrices with an always-present root entry.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Stack holding a single identity matrix.
    pub fn new() -> Self {
        Self::with_root(Mat4::IDENTITY)
    }

    /// Stack whose root entry is `root`.
    pub fn with_root(root: Mat4) -> Self {
        Self { stack: vec![root] }
    }

    /// The current (top) matrix.
    #[inline]
    pub fn top(&self) -> Mat4 {
        // the root entry is never popped
        self.stack[self.stack.len() - 1]
    }

    /// Number of entries, including the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Duplicates the top entry.
    pub fn push(&mut self) {
        let top = self.top();
        self.stack.push(top);
    }

    /// Discards the top entry.  Returns `false` (and leaves the stack intact)
    /// when only the root is left.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Runs `f` between a `push` and a matching `pop`.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.depth();
        self.push();
        let out = f(self);
        self.stack.truncate(depth);
        out
    }

    /// Replaces the top entry with the identity.
    pub fn load_identity(&mut self) {
        self.set_top(Mat4::IDENTITY);
    }

    /// Post-multiplies `m` onto the top entry.
    pub fn mult(&mut self, m: Mat4) {
        let top = self.top();
        self.set_top(top * m);
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.mult(Mat4::from_translation(offset));
    }

    /// Rotates by `degrees` around `axis` (normalised here; a zero axis is a no-op).
    pub fn rotate_degrees(&mut self, degrees: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        self.mult(Mat4::from_quat(Quat::from_axis_angle(
            axis,
            degrees.to_radians(),
        )));
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.mult(Mat4::from_scale(factors));
    }

    fn set_top(&mut self, m: Mat4) {
        let last = self.stack.len() - 1;
        self.stack[last] = m;
    }
}
