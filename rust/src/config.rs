use crate::errors::{SequenceError, SequenceResult};
use crate::types::{Count, EstimationMethod, Parallelism};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Parameters for one extraction + estimation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceOptions {
    /// Candidates seen fewer times than this are counted but left unscored.
    pub count_min: Count,
    pub len_min: usize,
    pub len_max: usize,
    pub method: EstimationMethod,
    /// Try every start position inside a run instead of jumping past consumed windows.
    pub nested: bool,
    pub parallelism: Parallelism,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            count_min: 2,
            len_min: 2,
            len_max: 4,
            method: EstimationMethod::Unigram,
            nested: true,
            parallelism: Parallelism::Global,
        }
    }
}

impl SequenceOptions {
    pub fn validate(&self) -> SequenceResult<()> {
        if self.len_min == 0 {
            return Err(SequenceError::LenMinZero);
        }
        if self.len_min > self.len_max {
            return Err(SequenceError::LenRange {
                len_min: self.len_min,
                len_max: self.len_max,
            });
        }
        if self.parallelism == Parallelism::Threads(0) {
            return Err(SequenceError::ZeroThreads);
        }
        Ok(())
    }

    pub(crate) fn is_sequential(&self) -> bool {
        matches!(
            self.parallelism,
            Parallelism::Sequential | Parallelism::Threads(1)
        )
    }

    /// A dedicated pool, only when one was requested.
    pub(crate) fn build_pool(&self) -> SequenceResult<Option<ThreadPool>> {
        match self.parallelism {
            Parallelism::Threads(n) if n > 1 => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|ix| format!("collocate-{ix}"))
                    .build()?;
                Ok(Some(pool))
            }
            _ => Ok(None),
        }
    }
}
