// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use byteorder::{BigEndian, WriteBytesExt as _};
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::{ActorError, MethodSender, Receipt, Runtime};
use crate::actor_error;
use crate::address::Address;
use crate::message::Message;
use crate::shim::econ::TokenAmount;
use crate::state_tree::{ActorState, StateTree};

/// Stages a single dispatch moves through. `Persisted` is the only
/// successful end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DispatchStage {
    Init,
    ParamsEncoded,
    TargetResolved,
    Executed,
    Persisted,
    Reverted,
    Faulted,
}

/// The only thing exposed to an actor while executing.
///
/// Holds the message being executed, exclusive access to the state view and
/// the executor used for nested sends. No actor record is cached here: every
/// operation resolves actors from the state view when it runs.
pub struct VmContext<'a, S, E> {
    message: &'a Message,
    state: &'a mut S,
    executor: &'a E,
}

impl<'a, S, E> VmContext<'a, S, E>
where
    S: StateTree,
    E: MethodSender,
{
    pub fn new(message: &'a Message, state: &'a mut S, executor: &'a E) -> Self {
        Self {
            message,
            state,
            executor,
        }
    }

    /// Message retrieves the message associated with this context.
    pub fn message(&self) -> &Message {
        self.message
    }

    pub fn state(&self) -> &S {
        self.state
    }

    /// Sends a message from the executing actor (the receiver of the current
    /// message) to `to`. Parameters are DAG-CBOR encoded first; an encoding
    /// failure reverts.
    pub fn send<P>(
        &mut self,
        to: &Address,
        method: &str,
        value: TokenAmount,
        params: &P,
    ) -> Result<Receipt, ActorError>
    where
        P: Serialize + ?Sized,
    {
        trace!(stage = %DispatchStage::Init, %to, method);
        let params = encode_params(params).inspect_err(|e| {
            debug!(stage = %DispatchStage::Reverted, %to, method, "{e}");
        })?;
        self.send_encoded(to, method, value, params)
    }

    /// Same as [`VmContext::send`] for parameters that are already encoded.
    pub fn send_encoded(
        &mut self,
        to: &Address,
        method: &str,
        value: TokenAmount,
        params: Vec<u8>,
    ) -> Result<Receipt, ActorError> {
        // the sender is the actor currently executing, that is the receiver
        // of the message under execution
        let msg = Message::builder()
            .from(self.message.to().clone())
            .to(to.clone())
            .sequence(0u64)
            .value(value)
            .method(method)
            .params(params)
            .build()
            .map_err(|e| actor_error!(fatal("failed to build message: {}", e)))?;
        trace!(stage = %DispatchStage::ParamsEncoded, from = %msg.from(), to = %msg.to(), method);

        if msg.from() == msg.to() {
            return Err(actor_error!(SysErrForbidden; "unhandled: sending to self ({})", msg.from()));
        }
        if msg.to().is_empty() {
            return Err(actor_error!(SysErrInvalidReceiver; "cannot send to the empty address"));
        }

        self.state
            .snapshot()
            .map_err(|e| actor_error!(fatal("failed to create snapshot: {}", e)))?;

        match self.dispatch(&msg) {
            Ok(receipt) => {
                self.state
                    .clear_snapshot()
                    .map_err(|e| actor_error!(fatal("failed to commit snapshot: {}", e)))?;
                debug!(
                    stage = %DispatchStage::Persisted,
                    from = %msg.from(),
                    to = %msg.to(),
                    method,
                    value = %msg.value(),
                    "inner send complete"
                );
                Ok(receipt)
            }
            Err(e) => {
                if let Err(revert_err) = self.state.revert_to_snapshot() {
                    return Err(actor_error!(fatal("failed to revert snapshot: {}", revert_err)));
                }
                let stage = if e.is_fatal() {
                    DispatchStage::Faulted
                } else {
                    DispatchStage::Reverted
                };
                warn!(%stage, to = %msg.to(), method, "internal send failed: {e}");
                Err(e)
            }
        }
    }

    /// Resolves both participants from the state view and runs the executor.
    /// Writes made by the executor stay in the open snapshot layer.
    fn dispatch(&mut self, msg: &Message) -> Result<Receipt, ActorError> {
        let from_actor = self
            .state
            .get_actor(msg.from())
            .map_err(ActorError::new_fatal)?
            .ok_or_else(|| actor_error!(fatal("sending actor {} does not exist", msg.from())))?;

        let to_actor = self
            .state
            .get_or_create_actor(msg.to(), || Ok(ActorState::new_empty()))
            .map_err(|e| actor_error!(fatal("failed to get or create To actor {}: {}", msg.to(), e)))?;
        trace!(stage = %DispatchStage::TargetResolved, to = %msg.to());

        let receipt = self
            .executor
            .send(from_actor, to_actor, msg, &mut *self.state)?;
        trace!(stage = %DispatchStage::Executed, exit_code = receipt.exit_code.value());
        Ok(receipt)
    }

    /// Address for an actor created by this call, derived from the creator
    /// (sender of the current message) and its current nonce.
    ///
    /// Two creations sharing a nonce yield the same address; keeping nonces
    /// increasing is up to the caller.
    pub fn address_for_new_actor(&self) -> Result<Address, ActorError> {
        let creator = self.message.from();
        let nonce = self
            .state
            .get_actor(creator)
            .map_err(ActorError::new_fatal)?
            .ok_or_else(|| actor_error!(fatal("creator actor {} does not exist", creator)))?
            .sequence;
        compute_actor_address(creator, nonce)
    }

    /// Reads the storage of the executing actor.
    pub fn read_storage(&self) -> Result<Vec<u8>, ActorError> {
        Ok(self.current_actor()?.storage)
    }

    /// Replaces the storage of the executing actor.
    pub fn write_storage(&mut self, memory: Vec<u8>) -> Result<(), ActorError> {
        let mut actor = self.current_actor()?;
        actor.storage = memory;
        self.state
            .set_actor(self.message.to(), actor)
            .map_err(|e| actor_error!(fatal("failed to write storage: {}", e)))
    }

    fn current_actor(&self) -> Result<ActorState, ActorError> {
        self.state
            .get_actor(self.message.to())
            .map_err(ActorError::new_fatal)?
            .ok_or_else(|| actor_error!(SysErrIllegalActor; "actor {} does not exist", self.message.to()))
    }
}

impl<S, E> Runtime for VmContext<'_, S, E>
where
    S: StateTree,
    E: MethodSender,
{
    fn message(&self) -> &Message {
        self.message
    }

    fn read_storage(&self) -> Result<Vec<u8>, ActorError> {
        VmContext::read_storage(self)
    }

    fn write_storage(&mut self, memory: Vec<u8>) -> Result<(), ActorError> {
        VmContext::write_storage(self, memory)
    }

    fn send(
        &mut self,
        to: &Address,
        method: &str,
        value: TokenAmount,
        params: Vec<u8>,
    ) -> Result<Receipt, ActorError> {
        self.send_encoded(to, method, value, params)
    }

    fn address_for_new_actor(&self) -> Result<Address, ActorError> {
        VmContext::address_for_new_actor(self)
    }
}

/// Encodes method parameters to their wire (DAG-CBOR) form.
pub fn encode_params<P>(params: &P) -> Result<Vec<u8>, ActorError>
where
    P: Serialize + ?Sized,
{
    serde_ipld_dagcbor::to_vec(params)
        .map_err(|e| actor_error!(ErrSerialization; "encoding params failed: {}", e))
}

/// `hash(creator ‖ big-endian nonce)` as an Actor address on the creator's
/// network.
pub fn compute_actor_address(creator: &Address, nonce: u64) -> Result<Address, ActorError> {
    let network = creator
        .network()
        .ok_or_else(|| actor_error!(SysErrIllegalArgument; "cannot derive an address from the empty address"))?;
    let mut b = creator.to_bytes().to_vec();
    b.write_u64::<BigEndian>(nonce).map_err(|e| {
        actor_error!(ErrSerialization; "writing nonce into a buffer: {}", e)
    })?;
    Ok(Address::new_actor(network, &b))
}
