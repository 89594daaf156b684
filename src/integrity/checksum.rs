use crate::core::{LockError, LockResult};
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Hash functions artifacts can be checksummed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha256,
    Sha512,
}

impl ChecksumAlgorithm {
    /// Canonical name as written to lockfiles
    pub fn name(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => "SHA-256",
            ChecksumAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Lowercase hex digest of a file
    pub fn compute_file(&self, path: &Path) -> LockResult<String> {
        let reader = BufReader::new(File::open(path)?);
        match self {
            ChecksumAlgorithm::Sha256 => digest_reader::<Sha256>(reader),
            ChecksumAlgorithm::Sha512 => digest_reader::<Sha512>(reader),
        }
    }

    /// Lowercase hex digest of in-memory data
    pub fn compute_bytes(&self, data: &[u8]) -> String {
        match self {
            ChecksumAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
            ChecksumAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
        }
    }
}

fn digest_reader<D: Digest>(mut reader: impl Read) -> LockResult<String> {
    let mut hasher = D::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

impl FromStr for ChecksumAlgorithm {
    type Err = LockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "SHA256" => Ok(ChecksumAlgorithm::Sha256),
            "SHA512" => Ok(ChecksumAlgorithm::Sha512),
            _ => Err(LockError::Checksum(format!(
                "Unsupported checksum algorithm: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
