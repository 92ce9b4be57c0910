//! Randomized round-trip tests for the hex codec and UTF conversions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stringkit::{encoding, hex};

#[test]
fn hex_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let len = rng.gen_range(0..256);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        let encoded = hex::encode_upper(&data);
        assert_eq!(encoded.len(), data.len() * 2);
        assert!(encoded
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(&c)));
        assert_eq!(hex::decode(&encoded).unwrap(), data);
    }
}

#[test]
fn hex_decode_accepts_lowercase_of_encoded() {
    let mut rng = StdRng::seed_from_u64(0x5EED + 1);
    for _ in 0..50 {
        let data: Vec<u8> = (0..rng.gen_range(0..64)).map(|_| rng.gen()).collect();
        let lowered = hex::encode_upper(&data).to_ascii_lowercase();
        assert_eq!(hex::decode(&lowered).unwrap(), data);
    }
}

#[test]
fn utf_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(0xC0DE);
    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let s: String = (0..len).map(|_| rng.gen::<char>()).collect();

        let units = encoding::utf8_to_utf16(s.as_bytes());
        assert_eq!(encoding::utf16_to_utf8(&units), s.as_bytes());
    }
}
