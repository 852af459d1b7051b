//! petgraph::StableGraph wrapper holding the system's components between source and sink.

use std::collections::{BTreeMap, HashMap};

use petgraph::algo::all_simple_paths;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use relia_core::errors::{GraphError, ReliaResult};
use relia_core::models::{ComponentId, Path, ProbabilityTable};
use relia_core::traits::IPathSource;

use crate::component::Component;

/// Whether a node is one of the reserved terminals or a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Terminal,
    Component,
}

/// A node in the system graph.
#[derive(Debug, Clone)]
pub struct SystemNode {
    pub id: ComponentId,
    pub kind: NodeKind,
}

/// The underlying directed graph type. Edges carry no weight.
pub type SystemStableGraph = StableGraph<SystemNode, (), Directed>;

/// Directed component graph with one source and one sink.
#[derive(Debug)]
pub struct SystemGraph {
    name: Option<String>,
    graph: SystemStableGraph,
    /// Map from node id → NodeIndex for O(1) lookup.
    node_index: HashMap<ComponentId, NodeIndex>,
    components: BTreeMap<ComponentId, Component>,
    source: ComponentId,
    sink: ComponentId,
}

impl SystemGraph {
    /// An empty system holding only the source and sink terminals.
    pub fn new() -> Self {
        let mut system = Self {
            name: None,
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            components: BTreeMap::new(),
            source: ComponentId::source(),
            sink: ComponentId::sink(),
        };
        for terminal in [system.source.clone(), system.sink.clone()] {
            let idx = system.graph.add_node(SystemNode {
                id: terminal.clone(),
                kind: NodeKind::Terminal,
            });
            system.node_index.insert(terminal, idx);
        }
        system
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a component. Rejects duplicates and the reserved terminal ids.
    pub fn add_component(&mut self, component: Component) -> Result<(), GraphError> {
        if component.id.is_terminal() {
            return Err(GraphError::ReservedIdentifier {
                id: component.id.to_string(),
            });
        }
        if self.components.contains_key(&component.id) {
            return Err(GraphError::DuplicateComponent {
                id: component.id.to_string(),
            });
        }
        let idx = self.graph.add_node(SystemNode {
            id: component.id.clone(),
            kind: NodeKind::Component,
        });
        self.node_index.insert(component.id.clone(), idx);
        self.components.insert(component.id.clone(), component);
        Ok(())
    }

    /// Add a directed connection between two existing nodes (components or terminals).
    /// Repeated connections are stored once.
    pub fn add_connection(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let from_idx = self.get_node(from)?;
        let to_idx = self.get_node(to)?;
        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
        }
        Ok(())
    }

    /// Remove a connection. Returns whether it existed.
    pub fn remove_connection(&mut self, from: &str, to: &str) -> Result<bool, GraphError> {
        let from_idx = self.get_node(from)?;
        let to_idx = self.get_node(to)?;
        Ok(match self.graph.find_edge(from_idx, to_idx) {
            Some(edge) => self.graph.remove_edge(edge).is_some(),
            None => false,
        })
    }

    /// Remove a component and all its connections.
    pub fn remove_component(&mut self, id: &str) -> Option<Component> {
        let component = self.components.remove(id)?;
        if let Some(idx) = self.node_index.remove(id) {
            self.graph.remove_node(idx);
        }
        Some(component)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Components in id order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Directed connections as `(from, to)` id pairs.
    pub fn connections(&self) -> Vec<(&ComponentId, &ComponentId)> {
        let mut edges: Vec<_> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (&self.graph[a].id, &self.graph[b].id))
            .collect();
        edges.sort();
        edges
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// In-degree plus out-degree of a node.
    pub fn connectivity(&self, id: &str) -> Result<usize, GraphError> {
        let idx = self.get_node(id)?;
        let incoming = self.graph.neighbors_directed(idx, Direction::Incoming).count();
        let outgoing = self.graph.neighbors_directed(idx, Direction::Outgoing).count();
        Ok(incoming + outgoing)
    }

    /// True when a connection runs straight from source to sink.
    pub fn has_direct_connection(&self) -> bool {
        match (self.node_index.get(&self.source), self.node_index.get(&self.sink)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// All simple source-sink paths, collected.
    pub fn paths(&self) -> Vec<Path> {
        self.simple_paths().collect()
    }

    /// Failure probability of every component at time `t`.
    /// Every component must carry a distribution.
    pub fn failure_probabilities(&self, t: f64) -> ReliaResult<ProbabilityTable> {
        let mut table = ProbabilityTable::new();
        for component in self.components.values() {
            let p = component.probability_of_failure(t)?;
            table.insert(component.id.clone(), p)?;
        }
        Ok(table)
    }

    fn get_node(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })
    }
}

impl Default for SystemGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl IPathSource for SystemGraph {
    fn source(&self) -> &ComponentId {
        &self.source
    }

    fn sink(&self) -> &ComponentId {
        &self.sink
    }

    fn simple_paths(&self) -> Box<dyn Iterator<Item = Path> + '_> {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(&self.source),
            self.node_index.get(&self.sink),
        ) else {
            return Box::new(std::iter::empty());
        };
        let paths = all_simple_paths::<Vec<NodeIndex>, _>(&self.graph, from, to, 0, None)
            .map(move |nodes| {
                Path::new(nodes.into_iter().map(|idx| self.graph[idx].id.clone()).collect())
            });
        Box::new(paths)
    }
}
