// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Canonical Filecoin-style addresses.
//!
//! An address is either empty or a validated triple of network, protocol and
//! payload. The raw byte form is `network ‖ protocol ‖ payload`; the string
//! form is a two character network prefix followed by the base58 (Bitcoin
//! alphabet) encoding of `protocol ‖ payload ‖ checksum`, where the checksum is
//! omitted for ID addresses.

mod errors;
mod network;
mod protocol;
mod well_known;

#[cfg(test)]
mod tests;

pub use self::errors::Error;
pub use self::network::Network;
pub use self::protocol::Protocol;
pub use self::well_known::WellKnown;

use std::{fmt, str::FromStr};

use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use subtle::ConstantTimeEq as _;

use crate::shim::crypto::SignatureType;
use crate::utils::encoding::{blake2b_variable, sha256};

pub const PAYLOAD_HASH_LEN: usize = 20;
pub const BLS_PUB_LEN: usize = 48;
pub const ID_PAYLOAD_LEN: usize = 8;
pub const CHECKSUM_HASH_LEN: usize = 4;
/// Length of an uncompressed SEC1 secp256k1 public key.
pub const SECP_PUB_LEN: usize = 65;
/// Shortest string that can hold a prefix and an encoded ID address.
pub const MIN_ADDRESS_STR_LEN: usize = 11;
pub const MAINNET_PREFIX: &str = "fc";
pub const TESTNET_PREFIX: &str = "tf";
const PREFIX_LEN: usize = 2;
const UNDEFINED_ADDR_STR: &str = "<empty>";

/// Address is either empty or the validated identifier of an actor.
///
/// Values are only produced by the validating constructors, so a non-empty
/// address always carries a payload of the length its protocol requires.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Option<Inner>);

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Inner {
    network: Network,
    protocol: Protocol,
    payload: Vec<u8>,
    /// `network ‖ protocol ‖ payload`
    bytes: Vec<u8>,
}

impl Address {
    /// Common constructor: validates the payload length for the protocol.
    pub fn new(network: Network, protocol: Protocol, payload: &[u8]) -> Result<Self, Error> {
        if payload.len() != protocol.payload_len() {
            return Err(Error::InvalidBytes);
        }
        Ok(Self::from_valid(network, protocol, payload.to_vec()))
    }

    fn from_valid(network: Network, protocol: Protocol, payload: Vec<u8>) -> Self {
        let mut bytes = Vec::with_capacity(PREFIX_LEN + payload.len());
        bytes.push(network as u8);
        bytes.push(protocol as u8);
        bytes.extend_from_slice(&payload);
        Self(Some(Inner {
            network,
            protocol,
            payload,
            bytes,
        }))
    }

    /// Same as [`Address::new`] for callers holding raw network and type bytes.
    pub fn from_parts(network: u8, protocol: u8, payload: &[u8]) -> Result<Self, Error> {
        let network = Network::from_byte(network).ok_or(Error::UnknownNetwork)?;
        let protocol = Protocol::from_byte(protocol).ok_or(Error::UnknownType)?;
        Self::new(network, protocol, payload)
    }

    /// Address of the account controlled by the given public key.
    ///
    /// secp256k1 keys (65 byte uncompressed SEC1) are hashed; BLS keys are
    /// used as the payload directly.
    pub fn from_public_key(
        network: Network,
        key: &[u8],
        scheme: SignatureType,
    ) -> Result<Self, Error> {
        match scheme {
            SignatureType::Secp256k1 => {
                if key.len() != SECP_PUB_LEN {
                    return Err(Error::InvalidBytes);
                }
                Self::new(network, Protocol::Secp256k1, &address_hash(key))
            }
            SignatureType::Bls => Self::new(network, Protocol::BLS, key),
        }
    }

    pub fn new_secp256k1(network: Network, key: &k256::PublicKey) -> Result<Self, Error> {
        let point = key.to_encoded_point(false);
        Self::from_public_key(network, point.as_bytes(), SignatureType::Secp256k1)
    }

    pub fn new_bls(network: Network, key: &[u8]) -> Result<Self, Error> {
        Self::from_public_key(network, key, SignatureType::Bls)
    }

    /// ID address; the payload is the big-endian actor id.
    pub fn new_id(network: Network, id: u64) -> Self {
        Self::from_valid(network, Protocol::ID, id.to_be_bytes().to_vec())
    }

    /// Actor address; the payload is the hash of `data`.
    pub fn new_actor(network: Network, data: &[u8]) -> Self {
        Self::from_valid(network, Protocol::Actor, address_hash(data))
    }

    /// Parses the raw byte form. An empty slice is the empty address.
    pub fn from_bytes(bz: &[u8]) -> Result<Self, Error> {
        match bz {
            [] => Ok(Self::default()),
            [network, protocol, payload @ ..] => Self::from_parts(*network, *protocol, payload),
            [_] => Err(Error::InvalidBytes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn network(&self) -> Option<Network> {
        self.0.as_ref().map(|i| i.network)
    }

    pub fn protocol(&self) -> Option<Protocol> {
        self.0.as_ref().map(|i| i.protocol)
    }

    /// Payload bytes; empty for the empty address.
    pub fn payload(&self) -> &[u8] {
        self.0.as_ref().map(|i| i.payload.as_slice()).unwrap_or_default()
    }

    /// Raw byte form; empty for the empty address.
    pub fn to_bytes(&self) -> &[u8] {
        self.0.as_ref().map(|i| i.bytes.as_slice()).unwrap_or_default()
    }

    /// Actor id carried by an ID address.
    pub fn id(&self) -> Option<u64> {
        match self.0.as_ref()? {
            Inner {
                protocol: Protocol::ID,
                payload,
                ..
            } => Some(u64::from_be_bytes(payload.as_slice().try_into().ok()?)),
            _ => None,
        }
    }

    /// Encodes the string form. Fails only on the empty address.
    pub fn encode(&self) -> Result<String, Error> {
        let inner = self.0.as_ref().ok_or(Error::Empty)?;
        // everything after the network byte
        let mut ingest = inner.bytes[1..].to_vec();
        if inner.protocol.has_checksum() {
            let cksm = checksum(&ingest);
            ingest.extend_from_slice(&cksm);
        }
        Ok(format!(
            "{}{}",
            inner.network.to_prefix(),
            bs58::encode(ingest).into_string()
        ))
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(addr: &str) -> Result<Self, Self::Err> {
        //     | network | type   | payload    | checksum |
        //     | 2 chars | 1 byte | 8-48 bytes | 4 bytes  |
        // base58 encoded   [                            ]
        // not present for ID addresses         [        ]
        if addr.len() < MIN_ADDRESS_STR_LEN {
            return Err(Error::InvalidBytes);
        }
        let network = addr
            .get(..PREFIX_LEN)
            .ok_or(Error::UnknownNetwork)
            .and_then(Network::from_prefix)?;

        let raw = bs58::decode(&addr[PREFIX_LEN..])
            .into_vec()
            .map_err(|_| Error::InvalidBytes)?;
        let (&typ, rest) = raw.split_first().ok_or(Error::InvalidBytes)?;
        let protocol = Protocol::from_byte(typ).ok_or(Error::UnknownType)?;

        let (payload, cksm) = if protocol.has_checksum() {
            let split = rest
                .len()
                .checked_sub(CHECKSUM_HASH_LEN)
                .ok_or(Error::InvalidBytes)?;
            rest.split_at(split)
        } else {
            (rest, &[][..])
        };

        if payload.len() != protocol.payload_len() {
            return Err(Error::InvalidBytes);
        }

        if protocol.has_checksum() {
            let mut ingest = Vec::with_capacity(1 + payload.len());
            ingest.push(typ);
            ingest.extend_from_slice(payload);
            if !validate_checksum(&ingest, cksm) {
                return Err(Error::InvalidChecksum);
            }
        }

        // rebuild from the validated parts rather than handing back decoded bytes
        Address::new(network, protocol, payload)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str(UNDEFINED_ADDR_STR),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Checksum calculates the 4 byte checksum: the last four bytes of the
/// SHA-256 digest of `protocol ‖ payload`.
pub fn checksum(ingest: &[u8]) -> [u8; CHECKSUM_HASH_LEN] {
    let digest = sha256(ingest);
    let mut cksm = [0; CHECKSUM_HASH_LEN];
    cksm.copy_from_slice(&digest[digest.len() - CHECKSUM_HASH_LEN..]);
    cksm
}

/// Validates the checksum against the ingest data in constant time.
pub fn validate_checksum(ingest: &[u8], expect: &[u8]) -> bool {
    if expect.len() != CHECKSUM_HASH_LEN {
        return false;
    }
    checksum(ingest)[..].ct_eq(expect).into()
}

/// Returns an address hash for given data.
pub fn address_hash(ingest: &[u8]) -> Vec<u8> {
    blake2b_variable(ingest, PAYLOAD_HASH_LEN)
}

#[cfg(test)]
impl quickcheck::Arbitrary for Address {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let network = *g.choose(&[Network::Mainnet, Network::Testnet]).unwrap();
        match u8::arbitrary(g) % 4 {
            0 => Address::new_id(network, u64::arbitrary(g)),
            1 => Address::new_actor(network, &Vec::<u8>::arbitrary(g)),
            2 => {
                let payload: Vec<u8> = (0..PAYLOAD_HASH_LEN).map(|_| u8::arbitrary(g)).collect();
                Address::new(network, Protocol::Secp256k1, &payload).unwrap()
            }
            _ => {
                let key: Vec<u8> = (0..BLS_PUB_LEN).map(|_| u8::arbitrary(g)).collect();
                Address::new_bls(network, &key).unwrap()
            }
        }
    }
}
