//! Traffic Light Transition Engine
//!
//! Demonstrates the full surface on the classic cyclic example:
//! - a guarded transition table (Red -> Green -> Yellow -> Red)
//! - rejection of illegal moves, with the engine left untouched
//! - verbose diagnostics through a custom sink
//! - the bounded history ledger and diagram rendering
//! - serialized access from concurrent tasks
//!
//! Run with: cargo run --example traffic_light

use gearshift::{
    render, state_enum, DiagramFormat, EngineConfig, LogLevel, LogSink, SerialEngine, State,
    Transition, TransitionEngine,
};
use std::sync::Arc;

state_enum! {
    enum Light { Red, Green, Yellow }
}

struct Switch {
    to: Light,
}

impl Transition<Light> for Switch {
    type Effect = String;

    fn target(&self) -> Light {
        self.to.clone()
    }

    fn effect(&self) -> String {
        format!("set lamp to {}", self.to.name())
    }

    fn is_valid(&self, current: &Light) -> bool {
        matches!(
            (current, &self.to),
            (Light::Red, Light::Green)
                | (Light::Green, Light::Yellow)
                | (Light::Yellow, Light::Red)
        )
    }

    fn apply(&self, _current: &Light) -> Vec<String> {
        vec![self.effect()]
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Traffic Light Transition Engine ===\n");

    let sink: LogSink = Arc::new(|line: &str| println!("{line}"));
    let config = EngineConfig::new()
        .category("traffic")
        .level(LogLevel::Verbose)
        .sink(sink);
    let mut engine = TransitionEngine::with_config(Light::Red, config);

    println!("Initial state: {:?}\n", engine.current_state());

    // An illegal request is rejected and nothing changes.
    match engine.process(&Switch { to: Light::Yellow }) {
        Ok(_) => unreachable!("Red -> Yellow is not in the table"),
        Err(err) => println!("Rejected: {err}\n"),
    }

    // Drive one full cycle.
    for to in [Light::Green, Light::Yellow, Light::Red] {
        let effects = engine
            .process(&Switch { to })
            .expect("cycle transitions are always legal");
        println!("Effects: {effects:?}\n");
    }

    println!("History: {:?}\n", engine.history());

    let history = engine.history();
    let diagram = render(
        engine.current_state(),
        history.as_deref(),
        DiagramFormat::Mermaid,
    );
    println!("Mermaid diagram:\n{diagram}");

    // Hand the engine to the serialized wrapper and drive it from two tasks.
    let shared = SerialEngine::spawn(engine);
    let other = shared.clone();
    let ahead = tokio::spawn(async move { other.process(Switch { to: Light::Green }).await });
    ahead.await.unwrap().unwrap();
    shared.process(Switch { to: Light::Yellow }).await.unwrap();

    println!("Final state: {:?}", shared.current_state().await);
    println!("\n=== Example Complete ===");
}
