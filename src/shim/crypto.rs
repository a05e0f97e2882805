// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Key scheme of an account's public key.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Copy,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SignatureType {
    Secp256k1 = 1,
    Bls = 2,
}

impl TryFrom<u8> for SignatureType {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u8(value)
            .ok_or_else(|| anyhow::anyhow!("Invalid signature type byte: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_type_bytes() {
        assert_eq!(SignatureType::try_from(1).unwrap(), SignatureType::Secp256k1);
        assert_eq!(SignatureType::try_from(2).unwrap(), SignatureType::Bls);
        assert!(SignatureType::try_from(3).is_err());
        assert_eq!(SignatureType::Bls.to_string(), "bls");
    }
}
