use glam::Mat4;

use crate::paint::Color;

use super::{ShaderId, ShapeId};

/// One shape instance resolved by a render traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub shape: ShapeId,
    pub shader: ShaderId,
    /// Accumulated model matrix (local → world).
    pub model: Mat4,
    /// Projection · view · model.
    pub mvp: Mat4,
    pub color: Color,
}

/// Recorded draw stream for a frame, in paint order.
///
/// Items are painted in insertion order: later items land on top. The list
/// keeps its allocation across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, item: DrawItem) {
        self.items.push(item);
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
