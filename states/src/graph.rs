//! Dependency graph used by [`crate::StateCtx::verify_deps`].
//!
//! Holds the declared compute dependencies as directed edges and checks that
//! they form a DAG. The error carries the offending route so the panic
//! message at startup names the types involved.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Debug, Formatter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<Node>
where
    Node: Debug,
{
    #[error("Cycle detected in dependency graph, from {0:?}")]
    CycleDetected(DepRoute<Node>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<Node>),
}

/// A path through the graph, rendered as `a -> b -> c` in errors.
pub struct DepRoute<Node> {
    route: Vec<Node>,
}

impl<Node: Debug> Debug for DepRoute<Node> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut nodes = self.route.iter();
        match nodes.next() {
            None => write!(f, "[]"),
            Some(first) => {
                write!(f, "{first:?}")?;
                for node in nodes {
                    write!(f, " -> {node:?}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, BTreeSet<Node>>,
    duplicate: Option<(Node, Node)>,
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            duplicate: None,
        }
    }

    /// Record the edge `from -> to`. A repeated edge is remembered and
    /// reported by `topology_sort`; declaring the same dependency twice is
    /// a wiring bug.
    pub fn route_to(&mut self, from: Node, to: Node) {
        if !self.edges.entry(from).or_default().insert(to) {
            self.duplicate.get_or_insert((from, to));
        }
        self.edges.entry(to).or_default();
    }

    /// Kahn's algorithm: peel nodes without unresolved predecessors until
    /// the graph is empty. Whatever remains contains a cycle.
    pub fn topology_sort(&self) -> Result<(), TopologyError<Node>> {
        if let Some((from, to)) = self.duplicate {
            return Err(TopologyError::DuplicateEdge(DepRoute {
                route: vec![from, to],
            }));
        }

        let mut in_degree: BTreeMap<Node, usize> =
            self.edges.keys().map(|&node| (node, 0)).collect();
        for successors in self.edges.values() {
            for to in successors {
                if let Some(degree) = in_degree.get_mut(to) {
                    *degree += 1;
                }
            }
        }

        let mut queue: VecDeque<Node> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| node)
            .collect();

        while let Some(node) = queue.pop_front() {
            in_degree.remove(&node);
            if let Some(successors) = self.edges.get(&node) {
                for to in successors {
                    if let Some(degree) = in_degree.get_mut(to) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(*to);
                        }
                    }
                }
            }
        }

        if in_degree.is_empty() {
            Ok(())
        } else {
            let remaining: BTreeSet<Node> = in_degree.into_keys().collect();
            Err(TopologyError::CycleDetected(DepRoute {
                route: self.trace_cycle(&remaining),
            }))
        }
    }

    /// Walk predecessors within `remaining` until a node repeats. Every
    /// unpeeled node has at least one unpeeled predecessor, so the walk
    /// always closes a loop.
    fn trace_cycle(&self, remaining: &BTreeSet<Node>) -> Vec<Node> {
        let Some(&start) = remaining.iter().next() else {
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut current = start;
        loop {
            if let Some(pos) = path.iter().position(|&node| node == current) {
                let mut cycle: Vec<Node> = path[pos..].to_vec();
                cycle.reverse();
                if let Some(&first) = cycle.first() {
                    cycle.push(first);
                }
                return cycle;
            }
            path.push(current);

            let Some(&previous) = remaining.iter().find(|&from| {
                self.edges
                    .get(from)
                    .is_some_and(|successors| successors.contains(&current))
            }) else {
                path.reverse();
                return path;
            };
            current = previous;
        }
    }
}
