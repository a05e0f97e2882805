// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use ahash::HashMap;
use tracing::trace;

use super::{ActorCode, ActorError, MethodSender, Receipt, VmContext};
use crate::actor_error;
use crate::address::Address;
use crate::message::Message;
use crate::state_tree::{ActorState, StateTree};

/// Executor that moves value between the participants and runs the
/// [`ActorCode`] registered for the receiving address.
#[derive(Default)]
pub struct DefaultExecutor {
    code: HashMap<Address, Box<dyn ActorCode>>,
}

impl DefaultExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the code run for messages sent to `addr`, replacing any
    /// previous registration.
    pub fn register(&mut self, addr: Address, code: impl ActorCode + 'static) {
        self.code.insert(addr, Box::new(code));
    }

    pub fn is_registered(&self, addr: &Address) -> bool {
        self.code.contains_key(addr)
    }
}

impl MethodSender for DefaultExecutor {
    fn send<S: StateTree>(
        &self,
        mut from: ActorState,
        mut to: ActorState,
        msg: &Message,
        state: &mut S,
    ) -> Result<Receipt, ActorError> {
        if !msg.value().is_zero() {
            from.deduct_funds(msg.value())
                .map_err(|e| actor_error!(SysErrInsufficientFunds; "transfer failed: {}", e))?;
            to.deposit_funds(msg.value());
        }
        state
            .set_actor(msg.from(), from)
            .map_err(|e| actor_error!(fatal("failed to write sending actor: {}", e)))?;
        state
            .set_actor(msg.to(), to)
            .map_err(|e| actor_error!(fatal("failed to write receiving actor: {}", e)))?;

        if msg.method().is_empty() {
            return Ok(Receipt::ok(Vec::new()));
        }

        let code = self.code.get(msg.to()).ok_or_else(|| {
            actor_error!(SysErrInvalidMethod; "no code for method {} at {}", msg.method(), msg.to())
        })?;
        trace!(to = %msg.to(), method = msg.method(), "invoking actor code");

        let mut rt = VmContext::new(msg, state, self);
        let ret = code.invoke_method(&mut rt, msg.method(), msg.params())?;
        Ok(Receipt::ok(ret))
    }
}
