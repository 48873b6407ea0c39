//! Batch encodings accepted on the command line and by [`decoder_for`](crate::decoder_for).

use std::fmt;
use std::str::FromStr;

/// On-disk batch encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchFormat {
    #[default]
    Proto,
    JsonLines,
}

impl fmt::Display for BatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchFormat::Proto => write!(f, "proto"),
            BatchFormat::JsonLines => write!(f, "jsonl"),
        }
    }
}

impl FromStr for BatchFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proto" | "protobuf" => Ok(BatchFormat::Proto),
            "jsonl" | "json-lines" => Ok(BatchFormat::JsonLines),
            other => Err(format!(
                "unknown batch format '{other}' (expected proto|jsonl)"
            )),
        }
    }
}
