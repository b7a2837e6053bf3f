//! Timing harness for asymmetric crypto primitives.
//!
//! The crate ships no cryptography. Callers plug a backend in through
//! [`CryptoBenchmark`]; [`benchmark_primitives`] runs it over a list of
//! `(algorithm, key size)` pairs and collects one timing row per pair.

use crate::error::BenchmarkError;
use std::fmt;
use std::time::Duration;

/// Asymmetric algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAlgorithm {
    Rsa,
    Ecc,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa => f.write_str("RSA"),
            KeyAlgorithm::Ecc => f.write_str("ECC"),
        }
    }
}

/// A backend that can time key generation and an encrypt/decrypt round trip.
pub trait CryptoBenchmark {
    /// Time to generate one key pair.
    fn generate_key_pair(
        &self,
        algorithm: KeyAlgorithm,
        bits: u32,
    ) -> Result<Duration, BenchmarkError>;

    /// Encryption and decryption time for `message` under a fresh key.
    fn encrypt_decrypt(
        &self,
        algorithm: KeyAlgorithm,
        bits: u32,
        message: &[u8],
    ) -> Result<(Duration, Duration), BenchmarkError>;
}

/// One row of the timing table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CryptoTiming {
    pub algorithm: KeyAlgorithm,
    pub bits: u32,
    pub key_generation: Duration,
    pub encryption: Duration,
    pub decryption: Duration,
}

impl fmt::Display for CryptoTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}: keygen={:.3}ms encrypt={:.3}ms decrypt={:.3}ms",
            self.algorithm,
            self.bits,
            self.key_generation.as_secs_f64() * 1e3,
            self.encryption.as_secs_f64() * 1e3,
            self.decryption.as_secs_f64() * 1e3,
        )
    }
}

/// Times every `(algorithm, bits)` pair with `backend`.
///
/// A failing primitive is logged and skipped; the remaining rows are still
/// produced.
pub fn benchmark_primitives<B: CryptoBenchmark + ?Sized>(
    backend: &B,
    primitives: &[(KeyAlgorithm, u32)],
    message: &[u8],
) -> Vec<CryptoTiming> {
    primitives
        .iter()
        .filter_map(|&(algorithm, bits)| {
            let timing = backend.generate_key_pair(algorithm, bits).and_then(|keygen| {
                let (encryption, decryption) = backend.encrypt_decrypt(algorithm, bits, message)?;
                Ok(CryptoTiming {
                    algorithm,
                    bits,
                    key_generation: keygen,
                    encryption,
                    decryption,
                })
            });
            match timing {
                Ok(row) => Some(row),
                Err(err) => {
                    tracing::warn!(%algorithm, bits, err = %err, "Skipping crypto primitive");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed timings proportional to key size; rejects RSA below 2048 bits.
    struct FakeBackend;

    impl CryptoBenchmark for FakeBackend {
        fn generate_key_pair(
            &self,
            algorithm: KeyAlgorithm,
            bits: u32,
        ) -> Result<Duration, BenchmarkError> {
            if algorithm == KeyAlgorithm::Rsa && bits < 2048 {
                return Err(BenchmarkError::Unsupported {
                    algorithm: algorithm.to_string(),
                    bits,
                });
            }
            Ok(Duration::from_micros(u64::from(bits)))
        }

        fn encrypt_decrypt(
            &self,
            _algorithm: KeyAlgorithm,
            bits: u32,
            message: &[u8],
        ) -> Result<(Duration, Duration), BenchmarkError> {
            let n = message.len() as u64;
            Ok((
                Duration::from_micros(u64::from(bits) + n),
                Duration::from_micros(2 * u64::from(bits) + n),
            ))
        }
    }

    #[test]
    fn test_collects_rows_in_order() {
        let rows = benchmark_primitives(
            &FakeBackend,
            &[(KeyAlgorithm::Rsa, 2048), (KeyAlgorithm::Ecc, 256)],
            b"record",
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].algorithm, KeyAlgorithm::Rsa);
        assert_eq!(rows[0].key_generation, Duration::from_micros(2048));
        assert_eq!(rows[1].bits, 256);
        assert_eq!(rows[1].encryption, Duration::from_micros(262));
        assert_eq!(rows[1].decryption, Duration::from_micros(518));
    }

    #[test]
    fn test_failing_primitive_is_skipped() {
        let rows = benchmark_primitives(
            &FakeBackend,
            &[(KeyAlgorithm::Rsa, 1024), (KeyAlgorithm::Ecc, 256)],
            b"",
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].algorithm, KeyAlgorithm::Ecc);
    }

    #[test]
    fn test_display() {
        let row = CryptoTiming {
            algorithm: KeyAlgorithm::Ecc,
            bits: 256,
            key_generation: Duration::from_micros(1500),
            encryption: Duration::from_micros(250),
            decryption: Duration::from_millis(1),
        };
        assert_eq!(
            row.to_string(),
            "ECC-256: keygen=1.500ms encrypt=0.250ms decrypt=1.000ms"
        );
    }
}
