use crate::config::SequenceOptions;
use crate::types::{Count, Ngram, TokenId, SENTINEL};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

pub type CountMap = FxHashMap<Ngram, Count>;

fn increment(counts: &mut CountMap, window: &Ngram) {
    if let Some(count) = counts.get_mut(window.as_slice()) {
        *count += 1;
    } else {
        counts.insert(window.clone(), 1);
    }
}

/// Scan one document and add every sentinel-free window of
/// `len_min..=len_max` tokens to `counts`.
///
/// The document is read as if a sentinel followed its last token, so a run
/// touching the end is still closed. With `nested` every start position is
/// tried; otherwise scanning resumes one past the position that stopped the
/// window.
pub fn extract_and_count(
    document: &[TokenId],
    counts: &mut CountMap,
    len_min: usize,
    len_max: usize,
    nested: bool,
) {
    if document.is_empty() {
        return;
    }

    let padded_len = document.len() + 1;
    let token_at = |j: usize| document.get(j).copied().unwrap_or(SENTINEL);
    let mut window = Ngram::new();
    let mut start = 0;

    while start < padded_len {
        let mut end = start;
        loop {
            let token = token_at(end);
            if token == SENTINEL || end - start >= len_max {
                break;
            }
            window.push(token);
            end += 1;
        }

        if window.len() >= len_min {
            increment(counts, &window);
        }
        window.clear();

        start = if nested { start + 1 } else { end + 1 };
    }
}

/// Sum `other` into `target`, folding the smaller map into the larger.
pub fn merge_counts(mut target: CountMap, mut other: CountMap) -> CountMap {
    if target.len() < other.len() {
        std::mem::swap(&mut target, &mut other);
    }
    for (ngram, count) in other {
        *target.entry(ngram).or_insert(0) += count;
    }
    target
}

pub(crate) fn count_corpus_sequential(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
) -> CountMap {
    let mut counts = CountMap::default();
    for document in corpus {
        extract_and_count(
            document,
            &mut counts,
            options.len_min,
            options.len_max,
            options.nested,
        );
    }
    counts
}

/// Each worker fills a private map over its share of documents; the maps
/// are summed once every worker is done.
#[cfg(not(feature = "concurrent-map"))]
pub(crate) fn count_corpus_parallel(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
) -> CountMap {
    corpus
        .par_iter()
        .fold(CountMap::default, |mut counts, document| {
            extract_and_count(
                document,
                &mut counts,
                options.len_min,
                options.len_max,
                options.nested,
            );
            counts
        })
        .reduce(CountMap::default, merge_counts)
}

/// All workers increment one shared sharded map.
#[cfg(feature = "concurrent-map")]
pub(crate) fn count_corpus_parallel(
    corpus: &[Vec<TokenId>],
    options: &SequenceOptions,
) -> CountMap {
    use dashmap::DashMap;
    use rustc_hash::FxBuildHasher;

    let shared: DashMap<Ngram, Count, FxBuildHasher> = DashMap::with_hasher(FxBuildHasher);
    corpus.par_iter().for_each(|document| {
        let mut local = CountMap::default();
        extract_and_count(
            document,
            &mut local,
            options.len_min,
            options.len_max,
            options.nested,
        );
        for (ngram, count) in local {
            *shared.entry(ngram).or_insert(0) += count;
        }
    });
    shared.into_iter().collect()
}
