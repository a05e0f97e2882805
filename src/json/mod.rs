// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Human readable (de)serialization helpers.
//!
//! Types without a serde model of their own get one here, as a `with` module
//! plus transparent wrappers. A field opts in with
//! `#[serde(with = "crate::json::address::json")]`, as [`Message`] does.
//!
//! [`Message`]: crate::message::Message

pub mod address;
pub mod token_amount;
