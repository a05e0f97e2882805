// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{
    fmt,
    ops::{Add, AddAssign},
};

use num_bigint::BigUint;
use num_traits::Zero as _;

/// Amount of attoFIL held or transferred by an actor. Never negative.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::From, derive_more::Into,
)]
pub struct TokenAmount(BigUint);

impl TokenAmount {
    pub fn from_atto(atto: impl Into<BigUint>) -> Self {
        Self(atto.into())
    }

    pub fn atto(&self) -> &BigUint {
        &self.0
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `None` when `other` exceeds `self`.
    pub fn checked_sub(&self, other: &TokenAmount) -> Option<TokenAmount> {
        (self.0 >= other.0).then(|| Self(&self.0 - &other.0))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} attoFIL", self.0)
    }
}

impl From<u64> for TokenAmount {
    fn from(atto: u64) -> Self {
        Self::from_atto(atto)
    }
}

impl Add<&TokenAmount> for &TokenAmount {
    type Output = TokenAmount;

    fn add(self, rhs: &TokenAmount) -> TokenAmount {
        TokenAmount(&self.0 + &rhs.0)
    }
}

impl AddAssign<&TokenAmount> for TokenAmount {
    fn add_assign(&mut self, rhs: &TokenAmount) {
        self.0 += &rhs.0;
    }
}
