//! Hash/verify pipeline: echo parameters, hash, report, self-check

use std::io::Write;
use std::time::Instant;

use tracing::debug;

use pwforge_core::{HashEngine, HashParams, Password, Result};

/// Run the full pipeline against an engine.
///
/// The resolved parameters are echoed before hashing so they are visible
/// even when the engine rejects them. After reporting the digest and the
/// credential string, the credential is verified against the same password;
/// a failure there means the hash and verify paths disagree with each other,
/// not that the input was wrong.
pub fn run<E: HashEngine, W: Write>(
    engine: &E,
    params: &HashParams,
    password: &Password,
    salt: &[u8],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Type:\t\t{}", params.variant)?;
    writeln!(out, "Iterations:\t{}", params.time_cost)?;
    writeln!(out, "Memory:\t\t{} KiB", params.memory_kib)?;
    writeln!(out, "Parallelism:\t{}", params.parallelism)?;

    let started = Instant::now();
    let output = engine.hash(params, password.as_bytes(), salt)?;
    let elapsed = started.elapsed();

    writeln!(out, "Hash:\t\t{}", output.digest_hex())?;
    writeln!(out, "Encoded:\t{}", output.encoded)?;
    writeln!(out, "{:.3} seconds", elapsed.as_secs_f64())?;

    engine.verify(&output.encoded, password.as_bytes(), params.variant)?;
    writeln!(out, "Verification ok")?;

    debug!("pipeline finished in {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use pwforge_core::{Argon2Engine, ForgeError, HashOutput, Variant};

    struct FakeEngine {
        fail_hash: bool,
        fail_verify: bool,
    }

    impl HashEngine for FakeEngine {
        fn hash(&self, params: &HashParams, _password: &[u8], _salt: &[u8]) -> Result<HashOutput> {
            if self.fail_hash {
                return Err(ForgeError::Hash("engine exploded".to_string()));
            }
            Ok(HashOutput {
                digest: vec![0xab; params.output_len as usize],
                encoded: format!(
                    "$argon2i$v=19$m={},t={},p={}$c2FsdA$aGFzaA",
                    params.memory_kib, params.time_cost, params.parallelism
                ),
            })
        }

        fn verify(&self, _encoded: &str, _password: &[u8], _variant: Variant) -> Result<()> {
            if self.fail_verify {
                return Err(ForgeError::Verify("digest mismatch".to_string()));
            }
            Ok(())
        }
    }

    fn test_password() -> Password {
        let mut input = Cursor::new(b"password\n".to_vec());
        Password::read_from(&mut input).unwrap()
    }

    #[test]
    fn test_success_path_output() {
        let engine = FakeEngine {
            fail_hash: false,
            fail_verify: false,
        };
        let params = HashParams::default();
        let mut out = Vec::new();

        run(&engine, &params, &test_password(), b"somesalt", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Type:\t\tArgon2i"));
        assert!(text.contains("Iterations:\t3"));
        assert!(text.contains("Memory:\t\t4096 KiB"));
        assert!(text.contains("Parallelism:\t1"));
        assert!(text.contains(&format!("Hash:\t\t{}", "ab".repeat(32))));
        assert!(text.contains("Encoded:\t$argon2i$v=19$m=4096,t=3,p=1$"));
        assert!(text.contains(" seconds"));
        assert!(text.ends_with("Verification ok\n"));
    }

    #[test]
    fn test_hash_failure_stops_pipeline() {
        let engine = FakeEngine {
            fail_hash: true,
            fail_verify: false,
        };
        let mut out = Vec::new();

        let err = run(
            &engine,
            &HashParams::default(),
            &test_password(),
            b"somesalt",
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, ForgeError::Hash(_)));
        let text = String::from_utf8(out).unwrap();
        // parameters were already echoed, nothing else was printed
        assert!(text.contains("Parallelism:"));
        assert!(!text.contains("Hash:"));
        assert!(!text.contains("Verification ok"));
    }

    #[test]
    fn test_self_verify_failure_is_distinct() {
        let engine = FakeEngine {
            fail_hash: false,
            fail_verify: true,
        };
        let mut out = Vec::new();

        let err = run(
            &engine,
            &HashParams::default(),
            &test_password(),
            b"somesalt",
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, ForgeError::Verify(_)));
        let text = String::from_utf8(out).unwrap();
        // digest and credential were reported before the self-check tripped
        assert!(text.contains("Hash:"));
        assert!(text.contains("Encoded:"));
        assert!(!text.contains("Verification ok"));
    }

    #[test]
    fn test_end_to_end_with_real_engine() {
        let engine = Argon2Engine;
        let params = HashParams::default();
        let mut out = Vec::new();

        run(&engine, &params, &test_password(), b"somesalt", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let hash_line = text
            .lines()
            .find(|l| l.starts_with("Hash:"))
            .expect("hash line present");
        let digest = hash_line.split_whitespace().nth(1).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));

        let encoded_line = text
            .lines()
            .find(|l| l.starts_with("Encoded:"))
            .expect("encoded line present");
        assert!(encoded_line.contains("$argon2i$"));
        assert!(encoded_line.contains("m=4096,t=3,p=1"));

        assert!(text.lines().any(|l| l.ends_with(" seconds")));
        assert!(text.ends_with("Verification ok\n"));
    }
}
