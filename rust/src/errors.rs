use crate::types::TokenId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("len_min must be greater than or equal to 1.")]
    LenMinZero,

    #[error("len_min ({len_min}) must not exceed len_max ({len_max}).")]
    LenRange { len_min: usize, len_max: usize },

    #[error("Invalid method {0:?}. Expected one of: 'unigram', 'all_subtuples'.")]
    UnknownMethod(String),

    #[error("thread count must be greater than or equal to 1.")]
    ZeroThreads,

    #[error("cannot allocate a subtuple histogram for a sequence of length {length}")]
    HistogramTooLarge { length: usize },

    #[error("token id {0} has no entry in the vocabulary")]
    UnknownToken(TokenId),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SequenceResult<T> = Result<T, SequenceError>;
