//! EME-OAEP encoding tests.

#![cfg(feature = "sha1")]

use hex_literal::hex;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rand_core::{CryptoRng, RngCore};
use rsa_eme::{digest::Digest, hazmat, traits::EncodingScheme, Error, Oaep, Sha1Oaep};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::Sha3_256;

/// RNG that replays a fixed byte string.
struct FixedRng<'a>(&'a [u8]);

impl RngCore for FixedRng<'_> {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let (head, tail) = self.0.split_at(dest.len());
        dest.copy_from_slice(head);
        self.0 = tail;
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng<'_> {}

const SEED: [u8; 20] = hex!("aafd12f659cae63489b479e5076ddec2f06cb58f");

#[test]
fn sha1_1024_test_message() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let oaep = Sha1Oaep::new();
    assert_eq!(oaep.hash_len(), 20);

    let em = oaep.encode(&mut rng, b"test", 1024).unwrap();
    assert_eq!(em.len(), 127);
    assert_eq!(oaep.decode_with_label(&em, b"").unwrap(), b"test");
}

#[test]
fn encode_is_randomized() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let oaep = Sha1Oaep::new();

    let first = oaep.encode(&mut rng, b"test", 1024).unwrap();
    let second = oaep.encode(&mut rng, b"test", 1024).unwrap();
    assert_ne!(first, second);
    assert_eq!(oaep.decode(&first).unwrap(), b"test");
    assert_eq!(oaep.decode(&second).unwrap(), b"test");
}

#[test]
fn encode_with_fixed_seed() {
    let oaep = Sha1Oaep::new();
    let msg = hex!("d436e99569fd32a7c8a05bbc90d32c49");

    let em = oaep.encode(&mut FixedRng(&SEED), &msg, 1024).unwrap();
    let again = oaep.encode(&mut FixedRng(&SEED), &msg, 1024).unwrap();
    assert_eq!(em, again);

    // maskedSeed unmasks to the seed the RNG handed out
    let (masked_seed, masked_db) = em.split_at(20);
    let seed_mask = hazmat::mgf1::<Sha1>(masked_db, 20).unwrap();
    assert_eq!(hazmat::xor(masked_seed, &seed_mask).unwrap(), SEED);

    // DB = SHA1("") || 00..00 || 01 || M
    let db_mask = hazmat::mgf1::<Sha1>(&SEED, 107).unwrap();
    let db = hazmat::xor(masked_db, &db_mask).unwrap();
    assert_eq!(db[..20], hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
    assert!(db[20..90].iter().all(|b| *b == 0));
    assert_eq!(db[90], 1);
    assert_eq!(db[91..], msg);
}

#[test]
fn roundtrip_digests() {
    fn roundtrip<D: Digest, MGD: Digest>(key_bits: usize) {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let oaep = Oaep::<D, MGD>::new_with_label("label");
        let max = oaep.max_message_len(key_bits).unwrap();

        for len in [0, 1, max / 2, max] {
            let msg = vec![0x5au8; len];
            let em = oaep.encode(&mut rng, &msg, key_bits).unwrap();
            assert_eq!(em.len(), key_bits / 8 - 1);
            assert_eq!(oaep.decode_for_key(&em, key_bits).unwrap(), msg);
        }

        assert!(oaep
            .encode(&mut rng, &vec![0x5au8; max + 1], key_bits)
            .unwrap_err()
            .is_encoding());
    }

    roundtrip::<Sha1, Sha1>(1024);
    roundtrip::<Sha224, Sha224>(1024);
    roundtrip::<Sha256, Sha256>(2048);
    roundtrip::<Sha384, Sha384>(2048);
    roundtrip::<Sha512, Sha512>(3072);
    roundtrip::<Sha3_256, Sha3_256>(2048);
    roundtrip::<Sha256, Sha1>(2048);
    roundtrip::<Sha1, Sha256>(1536);
}

#[test]
fn single_bit_flips_are_rejected() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let oaep = Sha1Oaep::new();
    let em = oaep.encode(&mut rng, b"attack at dawn", 1024).unwrap();

    for i in 0..em.len() {
        for bit in 0..8 {
            let mut tampered = em.to_vec();
            tampered[i] ^= 1 << bit;
            assert_eq!(oaep.decode(&tampered), Err(Error::Decoding));
        }
    }
}

#[test]
fn wrong_length_is_rejected() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let oaep = Sha1Oaep::new();
    let em = oaep.encode(&mut rng, b"test", 1024).unwrap();

    assert_eq!(oaep.decode_for_key(&em, 1024).unwrap(), b"test");
    assert_eq!(oaep.decode_for_key(&em, 2048), Err(Error::Decoding));
    assert_eq!(oaep.decode_for_key(&em[1..], 1024), Err(Error::Decoding));
    assert_eq!(oaep.decode(&em[..40]), Err(Error::Decoding));
}

#[test]
fn decode_errors_are_indistinguishable() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let oaep = Sha1Oaep::new_with_label("label");
    let em = oaep.encode(&mut rng, b"test", 1024).unwrap();

    let too_short = oaep.decode(&em[..40]).unwrap_err();
    let wrong_label = oaep.decode_with_label(&em, b"other").unwrap_err();
    let mut tampered = em.to_vec();
    tampered[0] ^= 0x80;
    let corrupted = oaep.decode(&tampered).unwrap_err();

    assert_eq!(too_short, wrong_label);
    assert_eq!(wrong_label, corrupted);
    assert_eq!(corrupted.to_string(), "decoding error");
}

#[test]
fn codec_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sha1Oaep>();
    assert_send_sync::<Oaep<Sha256, Sha1>>();

    let oaep = Sha1Oaep::new();
    let em = std::thread::scope(|s| {
        s.spawn(|| {
            let mut rng = ChaCha8Rng::from_seed([1; 32]);
            oaep.encode(&mut rng, b"threaded", 1024).unwrap()
        })
        .join()
        .unwrap()
    });
    assert_eq!(oaep.decode(&em).unwrap(), b"threaded");
}
