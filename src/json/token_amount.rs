// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod json {
    use std::str::FromStr;

    use num_bigint::BigUint;
    use serde::{Deserialize, Serialize};

    use crate::shim::econ::TokenAmount;

    /// Serializes `TokenAmount` as its decimal attoFIL string.
    pub fn serialize<S>(token_amount: &TokenAmount, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        String::serialize(&token_amount.atto().to_string(), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TokenAmount, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TokenAmount::from_atto(
            BigUint::from_str(&s).map_err(serde::de::Error::custom)?,
        ))
    }
}
