//! Hex digests for `hash`, `md5`, and `sha512`.

use super::{require_args, require_str_arg, Builtin};
use crate::errors::EvalResult;
use crate::value::Value;
use md5::Md5;
use sha2::{Digest, Sha512};
use std::fmt;
use std::str::FromStr;

/// Algorithm used by the `hash` builtin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    #[default]
    Sha512,
}

impl DigestAlgorithm {
    /// Lowercase hex digest of `data`.
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            DigestAlgorithm::Md5 => format!("{:x}", Md5::digest(data)),
            DigestAlgorithm::Sha512 => format!("{:x}", Sha512::digest(data)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            other => Err(format!("unknown digest algorithm '{other}' (expected md5 or sha512)")),
        }
    }
}

pub(super) fn hash(builtin: Builtin, algorithm: DigestAlgorithm, args: &[Value]) -> EvalResult {
    require_args(builtin, 1, args)?;
    let text = require_str_arg(builtin, args, 0)?;
    Ok(Value::from(algorithm.hex_digest(text.as_bytes())))
}
