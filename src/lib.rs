// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Address codec and actor dispatch core.
//!
//! [`address`] turns addresses between their typed, raw byte and string
//! forms. [`interpreter`] executes sends between actors held in a
//! [`state_tree::StateTree`].

pub mod address;
pub mod config;
pub mod interpreter;
pub mod json;
pub mod logger;
pub mod message;
pub mod shim;
pub mod state_tree;
pub mod utils;

pub use address::{Address, Network, Protocol};
pub use config::Config;
pub use interpreter::{ActorError, ExitCode, Receipt, VmContext};
pub use message::Message;
pub use state_tree::{ActorState, MemoryStateTree, StateTree};
