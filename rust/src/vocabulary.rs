use crate::errors::{SequenceError, SequenceResult};
use crate::types::{TokenId, SENTINEL};

/// Display strings for token ids. Id `k >= 1` names `types[k - 1]`; the
/// sentinel has no string.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    id_to_str: Vec<String>,
}

impl Vocabulary {
    pub fn new(types: Vec<String>) -> Self {
        Self { id_to_str: types }
    }

    pub fn len(&self) -> usize {
        self.id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_str.is_empty()
    }

    pub fn resolve(&self, id: TokenId) -> SequenceResult<&str> {
        if id == SENTINEL {
            return Err(SequenceError::UnknownToken(id));
        }
        self.id_to_str
            .get(id as usize - 1)
            .map(String::as_str)
            .ok_or(SequenceError::UnknownToken(id))
    }

    pub fn ids_to_strings(&self, ids: &[TokenId]) -> SequenceResult<Vec<&str>> {
        ids.iter().map(|id| self.resolve(*id)).collect()
    }

    pub fn join(&self, ids: &[TokenId], separator: &str) -> SequenceResult<String> {
        Ok(self.ids_to_strings(ids)?.join(separator))
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
