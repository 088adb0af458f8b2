use crate::standard::StandardCodecs;
use crate::traits::CodecDelegate;
use tg_core::{CompressionAlgorithm, TgError};

const ALGORITHMS: [CompressionAlgorithm; 5] = [
    CompressionAlgorithm::FastBlock,
    CompressionAlgorithm::GeneralPurpose,
    CompressionAlgorithm::Structured,
    CompressionAlgorithm::Organic,
    CompressionAlgorithm::RobustAdaptive,
];

fn log_like_input() -> Vec<u8> {
    let mut buf = String::new();
    for i in 0..2000 {
        buf.push_str(&format!("2026-01-30T10:00:{:02}Z INFO worker accepted job {}\n", i % 60, i));
    }
    buf.into_bytes()
}

// ========== Store Identity ==========

#[test]
fn test_store_is_identity() {
    let codecs = StandardCodecs::new();
    let data = b"untouched bytes".to_vec();
    let out = codecs.encode(CompressionAlgorithm::Store, &data).unwrap();
    assert_eq!(out, data);
    let back = codecs.decode(CompressionAlgorithm::Store, &out).unwrap();
    assert_eq!(back, data);
}

// ========== Round Trips ==========

#[test]
fn test_roundtrip_all_families() {
    let codecs = StandardCodecs::new();
    let data = log_like_input();
    for algorithm in ALGORITHMS {
        let encoded = codecs.encode(algorithm, &data).unwrap();
        let decoded = codecs.decode(algorithm, &encoded).unwrap();
        assert_eq!(decoded, data, "{algorithm} did not round-trip");
    }
}

#[test]
fn test_repetitive_input_shrinks() {
    let codecs = StandardCodecs::new();
    let data = log_like_input();
    for algorithm in ALGORITHMS {
        let encoded = codecs.encode(algorithm, &data).unwrap();
        assert!(
            encoded.len() < data.len(),
            "{algorithm} grew repetitive input: {} -> {}",
            data.len(),
            encoded.len()
        );
    }
}

#[test]
fn test_empty_input() {
    let codecs = StandardCodecs::new();
    for algorithm in ALGORITHMS {
        let encoded = codecs.encode(algorithm, &[]).unwrap();
        let decoded = codecs.decode(algorithm, &encoded).unwrap();
        assert!(decoded.is_empty(), "{algorithm} empty round-trip");
    }
}

// ========== Failure Surface ==========

#[test]
fn test_garbage_decode_fails() {
    let codecs = StandardCodecs::new();
    let garbage = b"definitely not a valid stream";
    for algorithm in [
        CompressionAlgorithm::GeneralPurpose,
        CompressionAlgorithm::Organic,
        CompressionAlgorithm::RobustAdaptive,
    ] {
        let err = codecs.decode(algorithm, garbage).unwrap_err();
        match err {
            TgError::Codec { algorithm: name, .. } => assert_eq!(name, algorithm.to_string()),
            other => panic!("expected codec error, got {other:?}"),
        }
    }
}

// ========== Tuning Knobs ==========

#[test]
fn test_zstd_level_override() {
    let data = log_like_input();
    let fast = StandardCodecs::new().with_zstd_level(1);
    let tight = StandardCodecs::new().with_zstd_level(19);
    let a = fast.encode(CompressionAlgorithm::RobustAdaptive, &data).unwrap();
    let b = tight.encode(CompressionAlgorithm::RobustAdaptive, &data).unwrap();
    assert!(b.len() <= a.len());
    assert_eq!(tight.decode(CompressionAlgorithm::RobustAdaptive, &b).unwrap(), data);
}

#[test]
fn test_gzip_level_override() {
    let data = log_like_input();
    let codecs = StandardCodecs::new().with_gzip_level(1);
    let encoded = codecs.encode(CompressionAlgorithm::GeneralPurpose, &data).unwrap();
    assert_eq!(codecs.decode(CompressionAlgorithm::GeneralPurpose, &encoded).unwrap(), data);
}
