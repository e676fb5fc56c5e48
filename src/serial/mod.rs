//! Serialized access to a shared engine.
//!
//! [`SerialEngine`] owns one [`TransitionEngine`] inside a dedicated worker
//! task that drains a FIFO request channel. Any number of handles may
//! submit operations concurrently; the worker executes them one at a time,
//! in submission order, and delivers each result back over a oneshot
//! channel. Once a wrapper owns an engine, all access must go through the
//! wrapper; keeping a side channel to the engine would void the guarantee.

use crate::core::{State, Transition};
use crate::engine::{InvalidTransition, TransitionEngine};
use tokio::sync::{mpsc, oneshot};

enum Request<S: State, T: Transition<S>> {
    Process {
        transition: T,
        reply: oneshot::Sender<Result<Vec<T::Effect>, InvalidTransition>>,
    },
    CurrentState {
        reply: oneshot::Sender<S>,
    },
    History {
        reply: oneshot::Sender<Option<Vec<S>>>,
    },
}

/// Cloneable handle to an engine behind a single FIFO worker.
///
/// The wrapper adds a serialization boundary and nothing else: validation,
/// commit, and failure semantics are exactly the engine's. A rejected
/// transition surfaces only to the caller that submitted it; queued
/// operations behind it are unaffected.
///
/// There is no cancellation: once submitted, an operation runs to
/// completion on the worker. A caller may stop awaiting its result, but
/// the mutation still applies.
///
/// The worker task exits when the last handle is dropped.
pub struct SerialEngine<S: State, T: Transition<S>> {
    requests: mpsc::UnboundedSender<Request<S, T>>,
}

impl<S, T> SerialEngine<S, T>
where
    S: State + 'static,
    T: Transition<S> + Send + 'static,
{
    /// Take ownership of `engine` and spawn its worker task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(mut engine: TransitionEngine<S>) -> Self {
        let (requests, mut inbox) = mpsc::unbounded_channel::<Request<S, T>>();
        tokio::spawn(async move {
            while let Some(request) = inbox.recv().await {
                // send failures mean the caller stopped waiting; the
                // operation has already run and its mutation stands.
                match request {
                    Request::Process { transition, reply } => {
                        let _ = reply.send(engine.process(&transition));
                    }
                    Request::CurrentState { reply } => {
                        let _ = reply.send(engine.current_state().clone());
                    }
                    Request::History { reply } => {
                        let _ = reply.send(engine.history());
                    }
                }
            }
        });
        Self { requests }
    }

    /// Submit a transition; resolves once the worker has processed it.
    pub async fn process(&self, transition: T) -> Result<Vec<T::Effect>, InvalidTransition> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::Process { transition, reply })
            .expect("engine worker terminated");
        response.await.expect("engine worker dropped the reply")
    }

    /// The state the engine holds after every previously submitted
    /// operation has completed.
    pub async fn current_state(&self) -> S {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::CurrentState { reply })
            .expect("engine worker terminated");
        response.await.expect("engine worker dropped the reply")
    }

    /// The engine's history ledger contents, or `None` when logging is
    /// disabled.
    pub async fn history(&self) -> Option<Vec<S>> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::History { reply })
            .expect("engine worker terminated");
        response.await.expect("engine worker dropped the reply")
    }
}

impl<S: State, T: Transition<S>> Clone for SerialEngine<S, T> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Green => "Green",
                Self::Yellow => "Yellow",
            }
        }
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
            format!("switch to {}", self.to.name())
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

    #[tokio::test]
    async fn wrapper_relays_engine_semantics() {
        let shared = SerialEngine::spawn(TransitionEngine::new(Light::Red));

        let effects = shared.process(Switch { to: Light::Green }).await.unwrap();
        assert_eq!(effects, vec!["switch to Green".to_string()]);
        assert_eq!(shared.current_state().await, Light::Green);
    }

    #[tokio::test]
    async fn wrapper_relays_rejections_without_new_error_kinds() {
        let shared = SerialEngine::spawn(TransitionEngine::new(Light::Red));

        let err = shared
            .process(Switch { to: Light::Yellow })
            .await
            .unwrap_err();
        assert_eq!(err.from, "Red");
        assert_eq!(err.to, "Yellow");
        assert_eq!(shared.current_state().await, Light::Red);
    }

    #[tokio::test]
    async fn cloned_handles_share_one_engine() {
        let a = SerialEngine::spawn(TransitionEngine::new(Light::Red));
        let b = a.clone();

        a.process(Switch { to: Light::Green }).await.unwrap();
        b.process(Switch { to: Light::Yellow }).await.unwrap();

        assert_eq!(a.current_state().await, Light::Yellow);
        assert_eq!(
            a.history().await,
            Some(vec![Light::Red, Light::Green, Light::Yellow])
        );
    }
}
