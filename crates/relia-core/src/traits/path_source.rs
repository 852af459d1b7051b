use crate::models::{ComponentId, Path};

/// Graph adapter: exposes source-sink connectivity as simple paths.
pub trait IPathSource {
    /// The distinguished source node.
    fn source(&self) -> &ComponentId;

    /// The distinguished sink node.
    fn sink(&self) -> &ComponentId;

    /// Every simple path from source to sink, terminals included.
    ///
    /// Lazy, so consumers can stop as soon as a size guard trips.
    fn simple_paths(&self) -> Box<dyn Iterator<Item = Path> + '_>;
}
