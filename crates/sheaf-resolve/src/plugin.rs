//! Resolver plugin composition
//!
//! Bundling pipelines run several resolvers side by side: one for
//! synthetic virtual modules, one for filesystem paths, maybe one for
//! URL imports. [`ResolverChain`] holds them in registration order and
//! asks each in turn; the first positive answer wins, deferrals fall
//! through, and errors stop the chain immediately.

use std::sync::Arc;

use sheaf_fs::FsResult;

use crate::resolver::FsModuleResolver;

/// One resolver in a pipeline chain.
pub trait ResolverPlugin: Send + Sync {
    /// Short plugin name for diagnostics
    fn name(&self) -> &str;

    /// Map a specifier to a module path, or defer with `Ok(None)`
    fn resolve_id(&self, specifier: &str, importer: Option<&str>) -> FsResult<Option<String>>;

    /// Produce content for a module path, or defer with `Ok(None)`
    fn load(&self, id: &str) -> FsResult<Option<String>>;
}

impl ResolverPlugin for FsModuleResolver {
    fn name(&self) -> &str {
        "fs-read"
    }

    fn resolve_id(&self, specifier: &str, importer: Option<&str>) -> FsResult<Option<String>> {
        FsModuleResolver::resolve_id(self, specifier, importer)
    }

    fn load(&self, id: &str) -> FsResult<Option<String>> {
        // This plugin is only asked about paths it resolved, so it
        // always answers; read faults propagate rather than defer.
        FsModuleResolver::load(self, id).map(Some)
    }
}

/// Ordered chain of resolver plugins.
pub struct ResolverChain {
    plugins: Vec<Arc<dyn ResolverPlugin>>,
}

impl ResolverChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Append a plugin to the chain
    pub fn push(&mut self, plugin: Arc<dyn ResolverPlugin>) {
        self.plugins.push(plugin);
    }

    /// Append a plugin, builder style
    pub fn with_plugin(mut self, plugin: Arc<dyn ResolverPlugin>) -> Self {
        self.push(plugin);
        self
    }

    /// Ask each plugin in order until one claims the specifier.
    pub fn resolve_id(&self, specifier: &str, importer: Option<&str>) -> FsResult<Option<String>> {
        for plugin in &self.plugins {
            if let Some(id) = plugin.resolve_id(specifier, importer)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// Ask each plugin in order until one produces content.
    pub fn load(&self, id: &str) -> FsResult<Option<String>> {
        for plugin in &self.plugins {
            if let Some(content) = plugin.load(id)? {
                return Ok(Some(content));
            }
        }
        Ok(None)
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the chain has no plugins
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}
