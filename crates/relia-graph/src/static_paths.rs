//! A path source over an already-enumerated path list.

use relia_core::models::{ComponentId, Path};
use relia_core::traits::IPathSource;

/// Serves a fixed list of paths. For adapters that enumerate paths themselves.
#[derive(Debug, Clone)]
pub struct StaticPaths {
    source: ComponentId,
    sink: ComponentId,
    paths: Vec<Path>,
}

impl StaticPaths {
    /// Paths between the reserved `source` and `sink` terminals.
    pub fn new(paths: Vec<Path>) -> Self {
        Self::with_terminals(ComponentId::source(), ComponentId::sink(), paths)
    }

    pub fn with_terminals(source: ComponentId, sink: ComponentId, paths: Vec<Path>) -> Self {
        Self { source, sink, paths }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }
}

impl IPathSource for StaticPaths {
    fn source(&self) -> &ComponentId {
        &self.source
    }

    fn sink(&self) -> &ComponentId {
        &self.sink
    }

    fn simple_paths(&self) -> Box<dyn Iterator<Item = Path> + '_> {
        Box::new(self.paths.iter().cloned())
    }
}
