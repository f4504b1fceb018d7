use super::{Attribute, NodeId, ShapeId, TransformId};

/// Scene graph node.
///
/// Rendering a node:
/// 1) push and multiply its transform (if any)
/// 2) load its attributes in order
/// 3) draw its shapes
/// 4) render its children in order
/// 5) unload attributes and pop the transform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    transform: Option<TransformId>,
    attributes: Vec<Attribute>,
    shapes: Vec<ShapeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: TransformId) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<Attribute>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_shape(mut self, shape: ShapeId) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn with_child(mut self, child: NodeId) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_transform(&mut self, transform: Option<TransformId>) {
        self.transform = transform;
    }

    pub fn add_attribute(&mut self, attribute: impl Into<Attribute>) {
        self.attributes.push(attribute.into());
    }

    pub fn add_shape(&mut self, shape: ShapeId) {
        self.shapes.push(shape);
    }

    pub fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    #[inline]
    pub fn transform(&self) -> Option<TransformId> {
        self.transform
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline]
    pub fn shapes(&self) -> &[ShapeId] {
        &self.shapes
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
