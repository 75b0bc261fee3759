//! Dispatcher for re-entering actions into the store
//!
//! Middleware and background tasks never touch state directly. They hand
//! actions to the Dispatcher, which queues them on a channel that the store
//! drains on the UI thread. Every transition therefore runs on one thread,
//! in the order the actions were queued.

use crate::actions::Action;
use std::sync::mpsc::{self, Receiver, Sender};

/// Cloneable handle for queueing actions
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher together with the receiving end of its channel
    pub fn channel() -> (Self, Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel();
        (Self { action_tx }, action_rx)
    }

    /// Queue an action; it re-enters the middleware chain from the beginning
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
