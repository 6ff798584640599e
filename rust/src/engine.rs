use crate::config::SequenceOptions;
use crate::counting::{count_corpus_parallel, count_corpus_sequential, CountMap};
use crate::errors::SequenceResult;
use crate::estimation::estimate_candidate;
use crate::table::CandidateTable;
use crate::types::{Estimate, TokenId, PARALLEL_ESTIMATE_THRESHOLD};
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, debug_span};

fn run_in<T: Send>(pool: Option<&ThreadPool>, job: impl FnOnce() -> T + Send) -> T {
    match pool {
        Some(pool) => pool.install(job),
        None => job(),
    }
}

/// Count every candidate window in `corpus` (phase one).
pub fn count_sequences(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
) -> SequenceResult<CountMap> {
    options.validate()?;
    let pool = options.build_pool()?;
    Ok(count_with(corpus, options, pool.as_ref()))
}

fn count_with(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
    pool: Option<&ThreadPool>,
) -> CountMap {
    let _span = debug_span!("count_sequences", documents = corpus.len()).entered();
    let sequential = options.is_sequential();
    let counts = if sequential {
        count_corpus_sequential(corpus, options)
    } else {
        run_in(pool, || count_corpus_parallel(corpus, options))
    };
    debug!(
        candidates = counts.len(),
        sequential,
        nested = options.nested,
        "counted sequences"
    );
    counts
}

/// Score every row of a frozen table in place (phase two).
pub fn estimate_sequences(
    table: &mut CandidateTable,
    options: &SequenceOptions,
) -> SequenceResult<()> {
    options.validate()?;
    let pool = options.build_pool()?;
    estimate_with(table, options, pool.as_ref())
}

fn estimate_with(
    table: &mut CandidateTable,
    options: &SequenceOptions,
    pool: Option<&ThreadPool>,
) -> SequenceResult<()> {
    let _span = debug_span!(
        "estimate_sequences",
        candidates = table.len(),
        method = options.method.as_str()
    )
    .entered();

    let estimator = options.method.estimator();
    let count_min = options.count_min;
    let entries = table.entries.as_slice();
    let estimate = |ix: usize| estimate_candidate(ix, entries, count_min, estimator);

    let estimates: Vec<Option<Estimate>> =
        if options.is_sequential() || entries.len() < PARALLEL_ESTIMATE_THRESHOLD {
            (0..entries.len()).map(estimate).collect::<SequenceResult<_>>()?
        } else {
            run_in(pool, || {
                (0..entries.len())
                    .into_par_iter()
                    .map(estimate)
                    .collect::<SequenceResult<_>>()
            })?
        };

    for (entry, estimate) in table.entries.iter_mut().zip(estimates) {
        entry.lambda = estimate.map(|e| e.lambda);
        entry.sigma = estimate.map(|e| e.sigma);
    }

    debug!(
        scored = table.scored(),
        skipped = table.len() - table.scored(),
        "estimated sequences"
    );
    Ok(())
}

/// Extract, count and score all multi-word sequences in `corpus`.
///
/// Counting finishes and its map is consumed into a [`CandidateTable`]
/// before any candidate is scored. Parameter errors are returned before any
/// document is read.
pub fn find_sequences(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
) -> SequenceResult<CandidateTable> {
    options.validate()?;
    let pool = options.build_pool()?;

    let counts = count_with(corpus, options, pool.as_ref());
    let mut table = CandidateTable::from_counts(counts);
    estimate_with(&mut table, options, pool.as_ref())?;
    Ok(table)
}
