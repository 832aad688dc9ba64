// Structural validation of submitted design graphs.
//
// Only cardinality is inspected: whether the canvas has nodes, and whether a
// multi-node canvas has at least one edge. Edge endpoints, duplicate ids and
// real connectivity are not checked.

use std::fmt;

use crate::models::{GraphPayload, ValidationResult};

pub const EMPTY_CANVAS_MESSAGE: &str = "Canvas is empty. Add a node to start.";
pub const DISCONNECTED_NODES_MESSAGE: &str = "Nodes are disconnected. Please connect them.";
pub const VALID_GRAPH_MESSAGE: &str = "Graph structure is valid.";

/// First structural rule a graph fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralIssue {
    EmptyCanvas,
    DisconnectedNodes,
}

impl StructuralIssue {
    pub fn message(&self) -> &'static str {
        match self {
            StructuralIssue::EmptyCanvas => EMPTY_CANVAS_MESSAGE,
            StructuralIssue::DisconnectedNodes => DISCONNECTED_NODES_MESSAGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralIssue::EmptyCanvas => "empty_canvas",
            StructuralIssue::DisconnectedNodes => "disconnected_nodes",
        }
    }
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless validator shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphValidator;

impl GraphValidator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first rule the graph violates, if any. Rules short-circuit
    /// in order: empty canvas, then disconnected nodes.
    pub fn find_issue(&self, graph: &GraphPayload) -> Option<StructuralIssue> {
        if graph.nodes.is_empty() {
            return Some(StructuralIssue::EmptyCanvas);
        }

        // Two or more nodes need at least one edge
        if graph.nodes.len() > 1 && graph.edges.is_empty() {
            return Some(StructuralIssue::DisconnectedNodes);
        }

        None
    }

    pub fn validate_structure(&self, graph: &GraphPayload) -> ValidationResult {
        Self::verdict_for(self.find_issue(graph))
    }

    pub fn verdict_for(issue: Option<StructuralIssue>) -> ValidationResult {
        match issue {
            Some(issue) => ValidationResult::invalid(issue.message()),
            None => ValidationResult::valid(VALID_GRAPH_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Node};

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id, "server")).collect()
    }

    #[test]
    fn test_empty_canvas() {
        let graph = GraphPayload::default();
        let result = GraphValidator::new().validate_structure(&graph);

        assert_eq!(result, ValidationResult::invalid(EMPTY_CANVAS_MESSAGE));
    }

    #[test]
    fn test_empty_canvas_wins_over_edges() {
        // Edges without nodes still count as an empty canvas
        let graph = GraphPayload::new(vec![], vec![Edge::new("e1", "a", "b")]);

        assert_eq!(
            GraphValidator::new().find_issue(&graph),
            Some(StructuralIssue::EmptyCanvas)
        );
    }

    #[test]
    fn test_single_node_without_edges_is_valid() {
        let graph = GraphPayload::new(nodes(&["a"]), vec![]);
        let result = GraphValidator::new().validate_structure(&graph);

        assert!(result.is_valid);
        assert_eq!(result.message, VALID_GRAPH_MESSAGE);
    }

    #[test]
    fn test_multiple_nodes_without_edges() {
        let validator = GraphValidator::new();
        for count in 2..6 {
            let ids: Vec<String> = (0..count).map(|i| format!("n{}", i)).collect();
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let graph = GraphPayload::new(nodes(&ids), vec![]);

            assert_eq!(
                validator.validate_structure(&graph),
                ValidationResult::invalid(DISCONNECTED_NODES_MESSAGE),
                "{} nodes",
                count
            );
        }
    }

    #[test]
    fn test_connected_pair_is_valid() {
        let graph = GraphPayload::new(nodes(&["a", "b"]), vec![Edge::new("e1", "a", "b")]);

        assert_eq!(
            GraphValidator::new().validate_structure(&graph),
            ValidationResult::valid(VALID_GRAPH_MESSAGE)
        );
    }

    #[test]
    fn test_any_edge_satisfies_connectivity() {
        // Self-loop on "a" leaves "b" and "c" unreached but still passes
        let graph = GraphPayload::new(nodes(&["a", "b", "c"]), vec![Edge::new("e1", "a", "a")]);
        assert!(GraphValidator::new().validate_structure(&graph).is_valid);

        // Dangling endpoints are not checked either
        let graph = GraphPayload::new(nodes(&["a", "b"]), vec![Edge::new("e1", "x", "y")]);
        assert!(GraphValidator::new().validate_structure(&graph).is_valid);
    }

    #[test]
    fn test_duplicate_ids_and_unknown_types_accepted() {
        let graph = GraphPayload::new(
            vec![Node::new("a", "quantum-cache"), Node::new("a", "")],
            vec![Edge::new("e", "a", "a"), Edge::new("e", "a", "a")],
        );

        assert_eq!(GraphValidator::new().find_issue(&graph), None);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = GraphValidator::new();
        let graph = GraphPayload::new(nodes(&["a", "b"]), vec![]);

        let first = validator.validate_structure(&graph);
        let second = validator.validate_structure(&graph);
        assert_eq!(first, second);
    }

    #[test]
    fn test_issue_labels() {
        assert_eq!(StructuralIssue::EmptyCanvas.to_string(), "empty_canvas");
        assert_eq!(StructuralIssue::DisconnectedNodes.as_str(), "disconnected_nodes");
        assert_eq!(StructuralIssue::DisconnectedNodes.message(), DISCONNECTED_NODES_MESSAGE);
    }
}
