use crate::counting::CountMap;
use crate::errors::SequenceResult;
use crate::types::{Count, Estimate, Ngram, TokenId};
use crate::vocabulary::Vocabulary;

#[derive(Clone, Debug, PartialEq)]
pub struct Collocation {
    pub tokens: Ngram,
    pub count: Count,
    pub length: usize,
    pub lambda: Option<f64>,
    pub sigma: Option<f64>,
}

impl Collocation {
    fn new(tokens: Ngram, count: Count) -> Self {
        let length = tokens.len();
        Self {
            tokens,
            count,
            length,
            lambda: None,
            sigma: None,
        }
    }

    pub fn estimate(&self) -> Option<Estimate> {
        Some(Estimate {
            lambda: self.lambda?,
            sigma: self.sigma?,
        })
    }

    pub fn z(&self) -> Option<f64> {
        self.estimate().map(|estimate| estimate.z())
    }
}

/// One output row with the sequence rendered through a [`Vocabulary`].
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRow {
    pub collocation: String,
    pub tokens: Vec<TokenId>,
    pub count: Count,
    pub length: usize,
    pub lambda: Option<f64>,
    pub sigma: Option<f64>,
}

/// Every distinct extracted sequence with its corpus count. A row's index is
/// its identity during estimation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateTable {
    pub(crate) entries: Vec<Collocation>,
}

impl CandidateTable {
    /// Freeze a finished count map. Rows are sorted by token sequence so the
    /// table does not depend on how counting was scheduled.
    pub fn from_counts(counts: CountMap) -> Self {
        let mut entries = counts
            .into_iter()
            .map(|(tokens, count)| Collocation::new(tokens, count))
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.tokens.cmp(&b.tokens));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Collocation] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Collocation> {
        self.entries.iter()
    }

    pub fn get(&self, tokens: &[TokenId]) -> Option<&Collocation> {
        self.entries
            .binary_search_by(|entry| entry.tokens.as_slice().cmp(tokens))
            .ok()
            .map(|ix| &self.entries[ix])
    }

    pub fn scored(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.lambda.is_some())
            .count()
    }

    pub fn render(&self, vocabulary: &Vocabulary) -> SequenceResult<Vec<SequenceRow>> {
        self.entries
            .iter()
            .map(|entry| {
                Ok(SequenceRow {
                    collocation: vocabulary.join(&entry.tokens, " ")?,
                    tokens: entry.tokens.to_vec(),
                    count: entry.count,
                    length: entry.length,
                    lambda: entry.lambda,
                    sigma: entry.sigma,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CandidateTable {
    type Item = &'a Collocation;
    type IntoIter = std::slice::Iter<'a, Collocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
