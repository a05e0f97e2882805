// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use filcore::address::{Address, Error, Network, Protocol, WellKnown};
use filcore::shim::crypto::SignatureType;
use k256::elliptic_curve::sec1::ToEncodedPoint as _;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn test_key() -> k256::PublicKey {
    k256::SecretKey::from_slice(&[1; 32]).unwrap().public_key()
}

#[test]
fn secp256k1_string_round_trip() {
    let addr = Address::new_secp256k1(Network::Testnet, &test_key()).unwrap();
    let s = addr.encode().unwrap();
    assert!(s.starts_with("tf"));

    let parsed: Address = s.parse().unwrap();
    assert_eq!(parsed.to_bytes(), addr.to_bytes());
    assert_eq!(parsed.network(), Some(Network::Testnet));
    assert_eq!(parsed.protocol(), Some(Protocol::Secp256k1));
}

#[test]
fn corrupted_character_never_parses() {
    let addr = Address::new_secp256k1(Network::Testnet, &test_key()).unwrap();
    let s = addr.encode().unwrap();

    for (i, original) in s.char_indices().skip(2) {
        for replacement in BASE58_ALPHABET.chars().filter(|c| *c != original) {
            let mut corrupted = s.clone();
            corrupted.replace_range(i..i + 1, &replacement.to_string());
            match corrupted.parse::<Address>() {
                Err(Error::InvalidBytes | Error::InvalidChecksum | Error::UnknownType) => {}
                other => panic!("{corrupted} parsed as {other:?}"),
            }
        }
    }
}

#[test]
fn public_key_schemes() {
    let point = test_key().to_encoded_point(false);
    let secp =
        Address::from_public_key(Network::Mainnet, point.as_bytes(), SignatureType::Secp256k1)
            .unwrap();
    assert_eq!(secp.payload().len(), 20);

    let bls = Address::from_public_key(Network::Mainnet, &[9; 48], SignatureType::Bls).unwrap();
    assert_eq!(bls.protocol(), Some(Protocol::BLS));
    assert_eq!(bls.payload(), &[9; 48]);
    assert_eq!(bls.encode().unwrap().parse::<Address>().unwrap(), bls);
}

#[test]
fn id_address_string_form() {
    let addr = Address::new_id(Network::Mainnet, u64::MAX);
    let parsed: Address = addr.to_string().parse().unwrap();
    assert_eq!(parsed.id(), Some(u64::MAX));
}

#[test]
fn well_known_addresses_have_string_forms() {
    for (network, prefix) in [(Network::Mainnet, "fc"), (Network::Testnet, "tf")] {
        let addr = WellKnown::StorageMarket.address(network);
        let s = addr.encode().unwrap();
        assert!(s.starts_with(prefix));
        assert_eq!(s.parse::<Address>().unwrap(), addr);
    }
}
