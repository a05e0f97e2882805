// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::shim::econ::TokenAmount;

/// VM message: a value transfer and method invocation from one actor to
/// another. Immutable once built.
///
/// Serializes with addresses in their string form and the value as a decimal
/// attoFIL string.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(name = "MessageBuilder", setter(into))]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    #[serde(with = "crate::json::address::json")]
    from: Address,
    #[serde(with = "crate::json::address::json")]
    to: Address,
    #[builder(default)]
    #[serde(rename = "Nonce")]
    sequence: u64,
    #[builder(default)]
    #[serde(with = "crate::json::token_amount::json")]
    value: TokenAmount,
    /// Empty for a plain value transfer.
    #[builder(default)]
    method: String,
    #[builder(default)]
    #[serde(default)]
    params: Vec<u8>,
}

impl Message {
    pub fn new(
        from: Address,
        to: Address,
        sequence: u64,
        value: TokenAmount,
        method: impl Into<String>,
        params: Vec<u8>,
    ) -> Self {
        Self {
            from,
            to,
            sequence,
            value,
            method: method.into(),
            params,
        }
    }

    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Returns the from address of the message.
    pub fn from(&self) -> &Address {
        &self.from
    }
    /// Returns the destination address of the message.
    pub fn to(&self) -> &Address {
        &self.to
    }
    /// Returns the message sequence or nonce.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
    /// Returns the amount sent in message.
    pub fn value(&self) -> &TokenAmount {
        &self.value
    }
    pub fn method(&self) -> &str {
        &self.method
    }
    /// Returns the encoded parameters for the method call.
    pub fn params(&self) -> &[u8] {
        &self.params
    }
}
