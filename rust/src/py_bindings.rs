use crate::config::SequenceOptions;
use crate::engine::find_sequences;
use crate::errors::SequenceError;
use crate::types::{Count, EstimationMethod, Parallelism, TokenId};
use crate::vocabulary::Vocabulary;
use pyo3::exceptions::{PyMemoryError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Column vectors: collocation, count, length, lambda, sigma, tokens.
pub(crate) type SequenceColumns = (
    Vec<String>,
    Vec<Count>,
    Vec<usize>,
    Vec<Option<f64>>,
    Vec<Option<f64>>,
    Vec<Vec<TokenId>>,
);

impl From<SequenceError> for PyErr {
    fn from(err: SequenceError) -> PyErr {
        match err {
            SequenceError::HistogramTooLarge { .. } => PyMemoryError::new_err(err.to_string()),
            SequenceError::ThreadPool(_) => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pyfunction]
#[pyo3(signature = (
    texts,
    types,
    count_min=2,
    len_min=2,
    len_max=4,
    method="unigram",
    nested=true,
))]
fn sequences(
    py: Python<'_>,
    texts: Vec<Vec<TokenId>>,
    types: Vec<String>,
    count_min: Count,
    len_min: usize,
    len_max: usize,
    method: &str,
    nested: bool,
) -> PyResult<SequenceColumns> {
    let options = SequenceOptions {
        count_min,
        len_min,
        len_max,
        method: EstimationMethod::parse(method)?,
        nested,
        parallelism: Parallelism::Global,
    };
    let vocabulary = Vocabulary::new(types);

    let rows = py.allow_threads(|| {
        find_sequences(&texts, &options).and_then(|table| table.render(&vocabulary))
    })?;

    let mut columns: SequenceColumns = Default::default();
    for row in rows {
        columns.0.push(row.collocation);
        columns.1.push(row.count);
        columns.2.push(row.length);
        columns.3.push(row.lambda);
        columns.4.push(row.sigma);
        columns.5.push(row.tokens);
    }
    Ok(columns)
}

#[pymodule(gil_used = true)]
fn _core(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(sequences, module)?)?;
    Ok(())
}
