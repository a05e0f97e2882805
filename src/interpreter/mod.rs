// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Actor dispatch.
//!
//! A [`VmContext`] executes inter-actor sends against a [`StateTree`]. Each
//! send opens a snapshot, resolves both participants from the state view and
//! hands them to a [`MethodSender`]. The executor writes the participants
//! back into the open snapshot; the context alone decides whether that
//! snapshot is committed or discarded.

mod errors;
mod executor;
mod vm_context;


pub use self::errors::{ActorError, ExitCode};
pub use self::executor::DefaultExecutor;
pub use self::vm_context::{DispatchStage, VmContext, compute_actor_address, encode_params};

use crate::address::Address;
use crate::message::Message;
use crate::shim::econ::TokenAmount;
use crate::state_tree::{ActorState, StateTree};

/// Result of a successful send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub exit_code: ExitCode,
    pub return_data: Vec<u8>,
}

impl Receipt {
    pub fn ok(return_data: Vec<u8>) -> Self {
        Self {
            exit_code: ExitCode::Ok,
            return_data,
        }
    }
}

/// Runtime is the VM's internal runtime object, the only interface actor
/// code gets to the outside world.
pub trait Runtime {
    /// The message being executed.
    fn message(&self) -> &Message;

    /// Storage of the executing actor.
    fn read_storage(&self) -> Result<Vec<u8>, ActorError>;

    fn write_storage(&mut self, memory: Vec<u8>) -> Result<(), ActorError>;

    /// Sends a message with already encoded parameters on behalf of the
    /// executing actor.
    fn send(
        &mut self,
        to: &Address,
        method: &str,
        value: TokenAmount,
        params: Vec<u8>,
    ) -> Result<Receipt, ActorError>;

    /// Address for an actor created by the current call.
    fn address_for_new_actor(&self) -> Result<Address, ActorError>;
}

/// Code run when a method is invoked on an actor.
pub trait ActorCode {
    /// Invokes method with runtime on the actor's code
    fn invoke_method(
        &self,
        rt: &mut dyn Runtime,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, ActorError>;
}

/// Executes a message between two resolved actors.
///
/// Implementations receive working copies of both participants as they are
/// in the state view right now. They must write any participant change back
/// through `state`; the caller commits or reverts those writes as a unit.
pub trait MethodSender {
    fn send<S: StateTree>(
        &self,
        from: ActorState,
        to: ActorState,
        msg: &Message,
        state: &mut S,
    ) -> Result<Receipt, ActorError>;
}
