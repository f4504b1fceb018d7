use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};

const FLAT_WGSL: &str = include_str!("flat.wgsl");

/// One programmable stage: WGSL source plus the entry point to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderStage {
    source: Cow<'static, str>,
    entry_point: String,
}

impl ShaderStage {
    pub fn new(source: impl Into<Cow<'static, str>>, entry_point: impl Into<String>) -> Self {
        Self { source: source.into(), entry_point: entry_point.into() }
    }

    /// Reads WGSL source from `path`.
    pub fn from_file(path: impl AsRef<Path>, entry_point: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader source {}", path.display()))?;
        Ok(Self::new(source, entry_point))
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Whether the source declares `fn <entry_point>(`.
    fn defines_entry_point(&self) -> bool {
        self.source.match_indices("fn ").any(|(at, kw)| {
            let preceded_ok = self.source[..at]
                .chars()
                .next_back()
                .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
            let rest = self.source[at + kw.len()..].trim_start();
            preceded_ok
                && rest
                    .strip_prefix(self.entry_point.as_str())
                    .is_some_and(|tail| tail.trim_start().starts_with('('))
        })
    }
}

/// Linked vertex + fragment program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    label: String,
    vertex: ShaderStage,
    fragment: ShaderStage,
}

impl Shader {
    /// Built-in program: MVP transform and a flat fill with the draw color.
    pub fn flat() -> Self {
        Self {
            label: "flat".to_string(),
            vertex: ShaderStage::new(FLAT_WGSL, "vs_main"),
            fragment: ShaderStage::new(FLAT_WGSL, "fs_main"),
        }
    }

    pub fn builder(label: impl Into<String>) -> ShaderBuilder {
        ShaderBuilder {
            label: label.into(),
            vertex: None,
            fragment: None,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn vertex(&self) -> &ShaderStage {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &ShaderStage {
        &self.fragment
    }

    /// Whether both stages come from the same WGSL module.
    pub fn is_single_module(&self) -> bool {
        self.vertex.source == self.fragment.source
    }
}

/// Collects shader stages before linking.
///
/// ```rust,ignore
/// let shader = Shader::builder("solar")
///     .attach_vertex_file("shaders/vertex.wgsl", "vs_main")?
///     .attach_fragment_file("shaders/fragment.wgsl", "fs_main")?
///     .link()?;
/// ```
#[derive(Debug, Clone)]
pub struct ShaderBuilder {
    label: String,
    vertex: Option<ShaderStage>,
    fragment: Option<ShaderStage>,
}

impl ShaderBuilder {
    pub fn attach_vertex(mut self, stage: ShaderStage) -> Self {
        self.vertex = Some(stage);
        self
    }

    pub fn attach_fragment(mut self, stage: ShaderStage) -> Self {
        self.fragment = Some(stage);
        self
    }

    pub fn attach_vertex_source(
        self,
        source: impl Into<Cow<'static, str>>,
        entry_point: impl Into<String>,
    ) -> Self {
        self.attach_vertex(ShaderStage::new(source, entry_point))
    }

    pub fn attach_fragment_source(
        self,
        source: impl Into<Cow<'static, str>>,
        entry_point: impl Into<String>,
    ) -> Self {
        self.attach_fragment(ShaderStage::new(source, entry_point))
    }

    pub fn attach_vertex_file(
        self,
        path: impl AsRef<Path>,
        entry_point: impl Into<String>,
    ) -> Result<Self> {
        Ok(self.attach_vertex(ShaderStage::from_file(path, entry_point)?))
    }

    pub fn attach_fragment_file(
        self,
        path: impl AsRef<Path>,
        entry_point: impl Into<String>,
    ) -> Result<Self> {
        Ok(self.attach_fragment(ShaderStage::from_file(path, entry_point)?))
    }

    /// Checks that both stages are present and define their entry points.
    ///
    /// Full WGSL validation happens when a renderer builds the pipeline.
    pub fn link(self) -> Result<Shader> {
        let label = self.label;
        let vertex = self
            .vertex
            .with_context(|| format!("shader '{label}' has no vertex stage"))?;
        let fragment = self
            .fragment
            .with_context(|| format!("shader '{label}' has no fragment stage"))?;

        for (kind, stage) in [("vertex", &vertex), ("fragment", &fragment)] {
            anyhow::ensure!(
                stage.defines_entry_point(),
                "shader '{label}': {kind} entry point '{}' is not defined",
                stage.entry_point
            );
        }

        Ok(Shader { label, vertex, fragment })
    }
}
