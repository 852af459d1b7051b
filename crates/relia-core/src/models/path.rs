use serde::{Deserialize, Serialize};

use super::ComponentId;

/// Ordered node sequence from source to sink, terminals included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<ComponentId>);

impl Path {
    pub fn new(nodes: Vec<ComponentId>) -> Self {
        Self(nodes)
    }

    /// Build a path from string ids, e.g. `Path::from_ids(["source", "A", "sink"])`.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentId>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn nodes(&self) -> &[ComponentId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Intermediate components, in path order, with the given terminals stripped.
    pub fn components<'a>(
        &'a self,
        source: &'a ComponentId,
        sink: &'a ComponentId,
    ) -> impl Iterator<Item = &'a ComponentId> + 'a {
        self.0.iter().filter(move |id| *id != source && *id != sink)
    }

    /// True when the path has no intermediate components (a direct source-sink edge).
    pub fn is_direct(&self, source: &ComponentId, sink: &ComponentId) -> bool {
        self.components(source, sink).next().is_none()
    }
}
