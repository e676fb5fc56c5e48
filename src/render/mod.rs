//! Textual diagram rendering of engine state.
//!
//! Pure formatting over already-computed state and history data: the
//! renderer reads what the engine exposes and never touches the engine.
//! Output is deterministic for the same inputs.

use crate::core::State;

/// Target text format for a state diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramFormat {
    /// Mermaid `stateDiagram-v2` notation.
    Mermaid,
    /// Graphviz DOT digraph.
    Dot,
    /// PlantUML state diagram.
    PlantUml,
}

/// Render the visited path and current state as a text diagram.
///
/// With a history the diagram shows every distinct visited state and each
/// distinct traversed edge, in first-seen order. Without one, only the
/// current state appears.
///
/// # Example
///
/// ```rust
/// use gearshift::engine::TransitionEngine;
/// use gearshift::render::{render, DiagramFormat};
/// use gearshift::state_enum;
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// let engine = TransitionEngine::new(Light::Red);
/// let history = engine.history();
/// let diagram = render(engine.current_state(), history.as_deref(), DiagramFormat::Mermaid);
/// assert!(diagram.contains("Red"));
/// ```
pub fn render<S: State>(current: &S, history: Option<&[S]>, format: DiagramFormat) -> String {
    let path: Vec<&str> = match history {
        Some(states) if !states.is_empty() => states.iter().map(State::name).collect(),
        _ => vec![current.name()],
    };

    let mut nodes: Vec<&str> = Vec::new();
    for name in &path {
        if !nodes.contains(name) {
            nodes.push(name);
        }
    }

    let mut edges: Vec<(&str, &str)> = Vec::new();
    for pair in path.windows(2) {
        let edge = (pair[0], pair[1]);
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    match format {
        DiagramFormat::Mermaid => render_mermaid(current.name(), &path, &edges),
        DiagramFormat::Dot => render_dot(current.name(), &nodes, &edges),
        DiagramFormat::PlantUml => render_plantuml(current.name(), &path, &edges),
    }
}

fn render_mermaid(current: &str, path: &[&str], edges: &[(&str, &str)]) -> String {
    let mut out = String::from("stateDiagram-v2\n");
    out.push_str(&format!("    [*] --> {}\n", path[0]));
    for (from, to) in edges {
        out.push_str(&format!("    {} --> {}\n", from, to));
    }
    out.push_str(&format!("    note right of {}\n        current\n    end note\n", current));
    out
}

fn render_dot(current: &str, nodes: &[&str], edges: &[(&str, &str)]) -> String {
    let mut out = String::from("digraph states {\n");
    for node in nodes {
        if *node == current {
            out.push_str(&format!("    \"{}\" [peripheries=2];\n", node));
        } else {
            out.push_str(&format!("    \"{}\";\n", node));
        }
    }
    for (from, to) in edges {
        out.push_str(&format!("    \"{}\" -> \"{}\";\n", from, to));
    }
    out.push_str("}\n");
    out
}

fn render_plantuml(current: &str, path: &[&str], edges: &[(&str, &str)]) -> String {
    let mut out = String::from("@startuml\n");
    out.push_str(&format!("[*] --> {}\n", path[0]));
    for (from, to) in edges {
        out.push_str(&format!("{} --> {}\n", from, to));
    }
    out.push_str(&format!("{} : current\n", current));
    out.push_str("@enduml\n");
    out
}
