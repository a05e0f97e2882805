// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::{BLS_PUB_LEN, ID_PAYLOAD_LEN, PAYLOAD_HASH_LEN};

/// Protocol (address type) defines the kind of payload an address carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, strum::Display,
)]
#[repr(u8)]
pub enum Protocol {
    /// Hash of a secp256k1 public key.
    #[strum(serialize = "secp256k1")]
    Secp256k1 = 0,
    /// Numeric actor id.
    #[strum(serialize = "id")]
    ID = 1,
    /// Hash of the content an actor was created from.
    #[strum(serialize = "actor")]
    Actor = 2,
    /// Raw BLS public key.
    #[strum(serialize = "bls")]
    BLS = 3,
}

impl Protocol {
    pub fn from_byte(b: u8) -> Option<Protocol> {
        FromPrimitive::from_u8(b)
    }

    /// Exact payload length addresses of this protocol must carry.
    pub fn payload_len(self) -> usize {
        match self {
            Protocol::Secp256k1 | Protocol::Actor => PAYLOAD_HASH_LEN,
            Protocol::ID => ID_PAYLOAD_LEN,
            Protocol::BLS => BLS_PUB_LEN,
        }
    }

    /// ID addresses are the only ones encoded without a checksum.
    pub fn has_checksum(self) -> bool {
        self != Protocol::ID
    }
}
