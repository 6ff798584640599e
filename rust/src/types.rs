use crate::errors::{SequenceError, SequenceResult};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

pub(crate) const SMOOTHING: f64 = 0.5;
pub(crate) const PARALLEL_ESTIMATE_THRESHOLD: usize = 500;

pub type TokenId = u32;
pub type Count = u64;

/// Padding / boundary marker. Never part of a candidate sequence.
pub const SENTINEL: TokenId = 0;

/// A document window or candidate n-gram. Hashes and compares as its token slice.
pub type Ngram = SmallVec<[TokenId; 4]>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum EstimationMethod {
    /// Reduced model: only the empty, singleton and full-match cells.
    #[default]
    Unigram,
    /// Full model over every subtuple cell.
    AllSubtuples,
}

impl EstimationMethod {
    pub fn parse(value: &str) -> SequenceResult<Self> {
        match value {
            "unigram" => Ok(Self::Unigram),
            "all_subtuples" => Ok(Self::AllSubtuples),
            _ => Err(SequenceError::UnknownMethod(value.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unigram => "unigram",
            Self::AllSubtuples => "all_subtuples",
        }
    }
}

impl FromStr for EstimationMethod {
    type Err = SequenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Parallelism {
    Sequential,
    /// Run on rayon's global pool.
    #[default]
    Global,
    /// Run on a dedicated pool with this many workers.
    Threads(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct Estimate {
    pub lambda: f64,
    pub sigma: f64,
}

impl Estimate {
    pub fn z(&self) -> f64 {
        self.lambda / self.sigma
    }
}
