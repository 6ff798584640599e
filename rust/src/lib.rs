//! Discovery of multi-word sequences in tokenized corpora, scored with the
//! Blaheta & Johnson subtuple association estimate.
//!
//! Documents are slices of token ids where `0` marks padding or a removed
//! token. [`find_sequences`] counts every sentinel-free window within the
//! configured length bounds, then scores each distinct window against all
//! others:
//!
//! ```
//! use collocate::{find_sequences, Parallelism, SequenceOptions};
//!
//! let corpus = vec![vec![1, 2, 3, 0, 1, 2], vec![1, 2, 4]];
//! let options = SequenceOptions {
//!     count_min: 1,
//!     len_max: 2,
//!     parallelism: Parallelism::Sequential,
//!     ..SequenceOptions::default()
//! };
//! let table = find_sequences(&corpus, &options).unwrap();
//! let pair = table.get(&[1, 2]).unwrap();
//! assert_eq!(pair.count, 3);
//! assert!(pair.lambda.is_some());
//! ```

mod bits;
mod config;
mod counting;
mod engine;
mod errors;
mod estimation;
#[cfg(feature = "python")]
mod py_bindings;
mod table;
mod types;
mod vocabulary;

pub use bits::{match_bits, subtuple_cells};
pub use config::SequenceOptions;
pub use counting::{extract_and_count, merge_counts, CountMap};
pub use engine::{count_sequences, estimate_sequences, find_sequences};
pub use errors::{SequenceError, SequenceResult};
pub use estimation::{
    estimate_all_subtuples, estimate_candidate, estimate_unigram, subtuple_histogram,
    Estimator,
};
pub use table::{CandidateTable, Collocation, SequenceRow};
pub use types::{Count, Estimate, EstimationMethod, Ngram, Parallelism, TokenId, SENTINEL};
pub use vocabulary::Vocabulary;
