// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{Address, Network};

/// Protocol-level singleton actors and the funded test accounts.
///
/// Each address is derived on demand from the seed name as an Actor address on
/// the requested network, so no process-wide state has to be initialized first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum WellKnown {
    Network,
    StorageMarket,
    PaymentBroker,
    TestAccount,
    TestAccount2,
}

impl WellKnown {
    pub fn seed(self) -> &'static [u8] {
        match self {
            WellKnown::Network => b"filecoin",
            WellKnown::StorageMarket => b"storage",
            WellKnown::PaymentBroker => b"payments",
            WellKnown::TestAccount => b"satoshi",
            WellKnown::TestAccount2 => b"nakamoto",
        }
    }

    pub fn address(self, network: Network) -> Address {
        Address::new_actor(network, self.seed())
    }
}
