// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

/// Address error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown address network")]
    UnknownNetwork,
    #[error("unknown address type")]
    UnknownType,
    #[error("invalid address bytes")]
    InvalidBytes,
    #[error("invalid address checksum")]
    InvalidChecksum,
    #[error("cannot serialize an empty address")]
    Empty,
}
