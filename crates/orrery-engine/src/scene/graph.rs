use std::cell::Cell;
use std::fmt;

use crate::math::{Transform, Viewport};
use crate::shader::Shader;

use super::{
    Attribute, Camera, DrawItem, DrawList, Engine, FnEngine, Node, NodeId, ShaderId, Shape,
    ShapeId, State, TransformId, Transforms,
};

/// Scene graph: node tree, shared resources and per-frame engines.
///
/// ```rust,ignore
/// let mut scene = Scene::new();
/// let spin = scene.add_transform(Transform::identity());
/// let disk = scene.add_shape(Disk::default());
/// let node = scene.add_node(Node::new().with_transform(spin).with_shape(disk));
/// scene.set_root(node);
/// scene.add_engine(RotationEngine::new(spin, 45.0));
///
/// scene.update(dt);
/// scene.render(&camera, viewport, &mut draw_list);
/// ```
pub struct Scene {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    transforms: Transforms,
    shapes: Vec<Box<dyn Shape>>,
    shaders: Vec<Shader>,
    engines: Vec<Box<dyn Engine>>,
    /// Set after the first invalid-handle warning; later ones log at debug.
    warned_invalid: Cell<bool>,
}

impl Scene {
    /// Creates an empty scene with the flat shader registered as
    /// [`ShaderId::DEFAULT`].
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            transforms: Transforms::new(),
            shapes: Vec::new(),
            shaders: vec![Shader::flat()],
            engines: Vec::new(),
            warned_invalid: Cell::new(false),
        }
    }

    // ── resources ─────────────────────────────────────────────────────────

    pub fn add_transform(&mut self, transform: Transform) -> TransformId {
        self.transforms.insert(transform)
    }

    pub fn transform(&self, id: TransformId) -> Option<&Transform> {
        self.transforms.get(id)
    }

    pub fn transform_mut(&mut self, id: TransformId) -> Option<&mut Transform> {
        self.transforms.get_mut(id)
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    pub fn add_shape(&mut self, shape: impl Shape + 'static) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Box::new(shape));
        id
    }

    pub fn shape(&self, id: ShapeId) -> Option<&dyn Shape> {
        self.shapes.get(id.0).map(|s| s.as_ref())
    }

    pub fn add_shader(&mut self, shader: Shader) -> ShaderId {
        let id = ShaderId(self.shaders.len());
        self.shaders.push(shader);
        id
    }

    pub fn shader(&self, id: ShaderId) -> Option<&Shader> {
        self.shaders.get(id.0)
    }

    // ── nodes ─────────────────────────────────────────────────────────────

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn set_root(&mut self, root: NodeId) {
        debug_assert!(root.0 < self.nodes.len(), "root {root:?} is not a node of this scene");
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    // ── engines ───────────────────────────────────────────────────────────

    pub fn add_engine(&mut self, engine: impl Engine + 'static) {
        self.engines.push(Box::new(engine));
    }

    /// Registers a closure as an engine.
    pub fn add_engine_fn<F>(&mut self, f: F)
    where
        F: FnMut(f32, &mut Transforms) + 'static,
    {
        self.add_engine(FnEngine(f));
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Runs every engine once, in registration order.
    pub fn update(&mut self, dt: f32) {
        for engine in &mut self.engines {
            engine.update(dt, &mut self.transforms);
        }
    }

    /// Traverses the tree from the root and records one draw item per shape
    /// into `list` (cleared first).
    pub fn render(&self, camera: &dyn Camera, viewport: Viewport, list: &mut DrawList) {
        list.clear();

        let Some(root) = self.root else { return };

        let mut state = State::new(camera, viewport);
        let mut path = Vec::new();
        self.render_node(root, &mut state, &mut path, list);
    }

    fn render_node(
        &self,
        id: NodeId,
        state: &mut State,
        path: &mut Vec<NodeId>,
        list: &mut DrawList,
    ) {
        let Some(node) = self.node(id) else {
            self.report_invalid(format_args!("skipping unknown node {id:?}"));
            return;
        };
        if path.contains(&id) {
            self.report_invalid(format_args!("skipping cyclic reference to node {id:?}"));
            return;
        }
        path.push(id);

        let transform = node.transform().and_then(|t| {
            let found = self.transforms.get(t);
            if found.is_none() {
                self.report_invalid(format_args!("node {id:?} references unknown transform {t:?}"));
            }
            found
        });

        if let Some(t) = transform {
            state.push_matrix();
            state.mult_matrix(&t.matrix());
        }

        for attribute in node.attributes() {
            if self.attribute_resolves(id, attribute) {
                attribute.load(state);
            }
        }

        if !node.shapes().is_empty() {
            let shader = state.shader().unwrap_or(ShaderId::DEFAULT);
            let (model, mvp, color) = (state.model_matrix(), state.mvp(), state.color());

            for &shape in node.shapes() {
                if self.shape(shape).is_none() {
                    self.report_invalid(format_args!("node {id:?} references unknown shape {shape:?}"));
                    continue;
                }
                list.push(DrawItem { shape, shader, model, mvp, color });
            }
        }

        for &child in node.children() {
            self.render_node(child, state, path, list);
        }

        for attribute in node.attributes().iter().rev() {
            if self.shader_attribute_known(attribute) {
                attribute.unload(state);
            }
        }

        if transform.is_some() {
            state.pop_matrix();
        }

        path.pop();
    }

    /// Like [`Self::shader_attribute_known`], reporting a dangling shader handle.
    fn attribute_resolves(&self, node: NodeId, attribute: &Attribute) -> bool {
        let known = self.shader_attribute_known(attribute);
        if !known {
            self.report_invalid(format_args!("node {node:?} references unknown shader {attribute:?}"));
        }
        known
    }

    /// False only for a shader attribute whose handle is not registered here.
    fn shader_attribute_known(&self, attribute: &Attribute) -> bool {
        match *attribute {
            Attribute::Shader(s) => self.shader(s).is_some(),
            Attribute::Color(_) => true,
        }
    }

    /// Warns about the first invalid handle; repeats every frame go to debug.
    fn report_invalid(&self, msg: fmt::Arguments<'_>) {
        if self.warned_invalid.replace(true) {
            log::debug!("{msg}");
        } else {
            log::warn!("{msg}");
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
