// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rstest::rstest;

use super::*;

/// Splits a string address into its prefix and decoded base58 body.
fn decode_body(s: &str) -> (&str, Vec<u8>) {
    let (prefix, body) = s.split_at(PREFIX_LEN);
    (prefix, bs58::decode(body).into_vec().unwrap())
}

fn encode_body(prefix: &str, raw: &[u8]) -> String {
    format!("{prefix}{}", bs58::encode(raw).into_string())
}

#[quickcheck]
fn string_round_trip(addr: Address) -> bool {
    addr.encode().unwrap().parse::<Address>() == Ok(addr)
}

#[quickcheck]
fn bytes_round_trip(addr: Address) -> bool {
    Address::from_bytes(addr.to_bytes()) == Ok(addr.clone())
        && Address::from_parts(
            addr.network().unwrap() as u8,
            addr.protocol().unwrap() as u8,
            addr.payload(),
        ) == Ok(addr)
}

#[quickcheck]
fn flipped_checksum_bit_is_rejected(addr: Address, bit: u8) -> TestResult {
    if addr.protocol() == Some(Protocol::ID) {
        return TestResult::discard();
    }
    let s = addr.encode().unwrap();
    let (prefix, mut raw) = decode_body(&s);
    let bit = usize::from(bit) % (CHECKSUM_HASH_LEN * 8);
    let idx = raw.len() - CHECKSUM_HASH_LEN + bit / 8;
    raw[idx] ^= 1 << (bit % 8);
    TestResult::from_bool(
        encode_body(prefix, &raw).parse::<Address>() == Err(Error::InvalidChecksum),
    )
}

#[quickcheck]
fn prefix_selects_network(addr: Address) -> bool {
    let s = addr.encode().unwrap();
    [Network::Mainnet, Network::Testnet].into_iter().all(|n| {
        let swapped = format!("{}{}", n.to_prefix(), &s[PREFIX_LEN..]);
        let parsed: Address = swapped.parse().unwrap();
        parsed.network() == Some(n) && parsed.payload() == addr.payload()
    })
}

#[quickcheck]
fn unknown_prefix_is_rejected(addr: Address, a: u8, b: u8) -> TestResult {
    // any printable ascii pair
    let prefix: String = [a, b].iter().map(|c| char::from(c % 94 + 33)).collect();
    if prefix == MAINNET_PREFIX || prefix == TESTNET_PREFIX {
        return TestResult::discard();
    }
    let s = addr.encode().unwrap();
    let bad = format!("{prefix}{}", &s[PREFIX_LEN..]);
    TestResult::from_bool(bad.parse::<Address>() == Err(Error::UnknownNetwork))
}

#[rstest]
#[case("ff")]
#[case("ft")]
#[case("FC")]
#[case("t1")]
fn near_miss_prefixes_are_rejected(#[case] prefix: &str) {
    let s = Address::new_actor(Network::Testnet, b"prefix").encode().unwrap();
    let bad = format!("{prefix}{}", &s[PREFIX_LEN..]);
    assert_eq!(bad.parse::<Address>(), Err(Error::UnknownNetwork));
}

#[test]
fn multibyte_prefix_is_rejected() {
    let s = Address::new_id(Network::Mainnet, 1).encode().unwrap();
    let bad = format!("é{}", &s[PREFIX_LEN..]);
    assert_eq!(bad.parse::<Address>(), Err(Error::UnknownNetwork));
}

#[rstest]
#[case("")]
#[case("fc")]
#[case("tf1111111")]
fn short_strings_are_rejected(#[case] s: &str) {
    assert_eq!(s.parse::<Address>(), Err(Error::InvalidBytes));
}

#[test]
fn truncated_payload_is_rejected() {
    let addr = Address::new_actor(Network::Mainnet, b"truncate me");
    let s = addr.encode().unwrap();
    let (prefix, raw) = decode_body(&s);

    // drop a payload byte and re-checksum so only the length is wrong
    let mut ingest = raw[..raw.len() - CHECKSUM_HASH_LEN].to_vec();
    ingest.remove(1);
    let cksm = checksum(&ingest);
    ingest.extend_from_slice(&cksm);
    assert_eq!(
        encode_body(prefix, &ingest).parse::<Address>(),
        Err(Error::InvalidBytes)
    );
}

#[test]
fn unknown_type_is_rejected() {
    let mut raw = vec![4u8];
    raw.extend_from_slice(&[7; PAYLOAD_HASH_LEN]);
    let cksm = checksum(&raw);
    raw.extend_from_slice(&cksm);
    assert_eq!(
        encode_body(MAINNET_PREFIX, &raw).parse::<Address>(),
        Err(Error::UnknownType)
    );
}

#[test]
fn invalid_base58_is_rejected() {
    let s = Address::new_id(Network::Testnet, 1024).encode().unwrap();
    // '0' is outside the bitcoin alphabet
    let bad = format!("{}0{}", &s[..PREFIX_LEN], &s[PREFIX_LEN + 1..]);
    assert_eq!(bad.parse::<Address>(), Err(Error::InvalidBytes));
}

#[test]
fn id_addresses_carry_no_checksum() {
    let addr = Address::new_id(Network::Testnet, 1234);
    let s = addr.encode().unwrap();
    assert!(s.starts_with(TESTNET_PREFIX));
    let (_, raw) = decode_body(&s);
    assert_eq!(raw.len(), 1 + ID_PAYLOAD_LEN);
    assert_eq!(raw[0], Protocol::ID as u8);
    assert_eq!(addr.id(), Some(1234));
    assert_eq!(Address::new_actor(Network::Testnet, b"x").id(), None);
}

#[test]
fn raw_byte_form() {
    let addr = Address::new_id(Network::Mainnet, 1);
    assert_eq!(addr.to_bytes(), &[0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(addr.payload(), &1u64.to_be_bytes());

    assert_eq!(Address::from_bytes(&[]), Ok(Address::default()));
    assert_eq!(Address::from_bytes(&[1]), Err(Error::InvalidBytes));
    assert_eq!(Address::from_bytes(&[2, 1, 0]), Err(Error::UnknownNetwork));
    assert_eq!(Address::from_bytes(&[1, 9, 0]), Err(Error::UnknownType));
    assert_eq!(
        Address::from_bytes(&[1, 1, 0, 0, 0, 0, 0, 0, 0]),
        Err(Error::InvalidBytes)
    );
}

#[test]
fn empty_address() {
    let addr = Address::default();
    assert!(addr.is_empty());
    assert_eq!(addr.encode(), Err(Error::Empty));
    assert_eq!(addr.to_string(), "<empty>");
    assert_eq!(addr.network(), None);
    assert_eq!(addr.protocol(), None);
    assert!(addr.to_bytes().is_empty());
    assert!(addr.payload().is_empty());
}

#[rstest]
#[case(Protocol::Secp256k1, PAYLOAD_HASH_LEN)]
#[case(Protocol::ID, ID_PAYLOAD_LEN)]
#[case(Protocol::Actor, PAYLOAD_HASH_LEN)]
#[case(Protocol::BLS, BLS_PUB_LEN)]
fn payload_length_is_enforced(#[case] protocol: Protocol, #[case] len: usize) {
    assert!(Address::new(Network::Testnet, protocol, &vec![1; len]).is_ok());
    assert_eq!(
        Address::new(Network::Testnet, protocol, &vec![1; len + 1]),
        Err(Error::InvalidBytes)
    );
    assert_eq!(
        Address::new(Network::Testnet, protocol, &vec![1; len - 1]),
        Err(Error::InvalidBytes)
    );
}

#[test]
fn public_key_lengths() {
    assert_eq!(
        Address::new_bls(Network::Mainnet, &[0; BLS_PUB_LEN - 1]),
        Err(Error::InvalidBytes)
    );
    assert_eq!(
        Address::from_public_key(Network::Mainnet, &[4; 64], SignatureType::Secp256k1),
        Err(Error::InvalidBytes)
    );
    let bls = Address::new_bls(Network::Mainnet, &[3; BLS_PUB_LEN]).unwrap();
    assert_eq!(bls.payload(), &[3; BLS_PUB_LEN]);
}

#[test]
fn secp256k1_from_key() {
    let secret = k256::SecretKey::from_slice(&[1; 32]).unwrap();
    let public = secret.public_key();
    let addr = Address::new_secp256k1(Network::Testnet, &public).unwrap();
    let uncompressed = public.to_encoded_point(false);
    assert_eq!(
        addr,
        Address::from_public_key(
            Network::Testnet,
            uncompressed.as_bytes(),
            SignatureType::Secp256k1
        )
        .unwrap()
    );
    assert_eq!(addr.payload(), address_hash(uncompressed.as_bytes()));
    assert_eq!(addr.protocol(), Some(Protocol::Secp256k1));
}

#[test]
fn checksum_is_sha256_tail() {
    assert_eq!(checksum(b"abc").to_vec(), hex::decode("f20015ad").unwrap());
    assert!(validate_checksum(b"abc", &hex::decode("f20015ad").unwrap()));
    assert!(!validate_checksum(b"abc", &hex::decode("ba7816bf").unwrap()));
    assert!(!validate_checksum(b"abc", &hex::decode("f20015").unwrap()));
}

#[quickcheck]
fn checksum_validation_needs_every_byte(ingest: Vec<u8>, idx: usize, flip: u8) -> TestResult {
    if flip == 0 {
        return TestResult::discard();
    }
    let cksm = checksum(&ingest);
    let mut tampered = cksm;
    tampered[idx % CHECKSUM_HASH_LEN] ^= flip;
    let mut longer = cksm.to_vec();
    longer.push(flip);
    TestResult::from_bool(
        validate_checksum(&ingest, &cksm)
            && !validate_checksum(&ingest, &tampered)
            && !validate_checksum(&ingest, &longer)
            && !validate_checksum(&ingest, &cksm[1..]),
    )
}

#[test]
fn display_matches_encode() {
    let addr = Address::new_actor(Network::Mainnet, b"display");
    assert_eq!(addr.to_string(), addr.encode().unwrap());
    assert_eq!(format!("{addr:?}"), format!("Address({addr})"));
}

#[test]
fn truncated_id_payload_fails_on_length() {
    let s = Address::new_id(Network::Mainnet, 77).encode().unwrap();
    let (prefix, mut raw) = decode_body(&s);
    raw.pop();
    assert_eq!(
        encode_body(prefix, &raw).parse::<Address>(),
        Err(Error::InvalidBytes)
    );
}
