use crate::paint::Color;

use super::{ShaderId, State};

/// Render-state attribute attached to a node.
///
/// Loaded when the traversal enters the node and unloaded when it leaves,
/// so a node's attributes apply to its own shapes and its whole subtree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Attribute {
    Color(Color),
    Shader(ShaderId),
}

impl Attribute {
    pub fn load(&self, state: &mut State) {
        match *self {
            Attribute::Color(c) => state.push_color(c),
            Attribute::Shader(s) => state.push_shader(s),
        }
    }

    pub fn unload(&self, state: &mut State) {
        match self {
            Attribute::Color(_) => state.pop_color(),
            Attribute::Shader(_) => state.pop_shader(),
        }
    }
}

impl From<Color> for Attribute {
    fn from(c: Color) -> Self {
        Attribute::Color(c)
    }
}

impl From<ShaderId> for Attribute {
    fn from(s: ShaderId) -> Self {
        Attribute::Shader(s)
    }
}
