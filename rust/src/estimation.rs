use crate::bits::{match_bits, subtuple_cells};
use crate::errors::{SequenceError, SequenceResult};
use crate::table::Collocation;
use crate::types::{Count, EstimationMethod, Estimate, SMOOTHING};

/// Closed-form `(histogram, length) -> estimate` for one method.
pub type Estimator = fn(&[f64], usize) -> Estimate;

impl EstimationMethod {
    pub fn estimator(self) -> Estimator {
        match self {
            Self::Unigram => estimate_unigram,
            Self::AllSubtuples => estimate_all_subtuples,
        }
    }
}

/// Co-occurrence histogram of candidate `ix` against every other candidate.
///
/// Cell `b` holds the summed counts of candidates whose tokens agree with
/// `ix` exactly on the positions set in `b`, on top of the smoothing
/// constant. The full-match cell also receives `count - 1` for the other
/// occurrences of the candidate itself.
pub fn subtuple_histogram(ix: usize, entries: &[Collocation]) -> SequenceResult<Vec<f64>> {
    let target = &entries[ix];
    let length = target.tokens.len();
    let cells = subtuple_cells(length)?;

    let mut histogram = Vec::new();
    histogram
        .try_reserve_exact(cells)
        .map_err(|_| SequenceError::HistogramTooLarge { length })?;
    histogram.resize(cells, SMOOTHING);

    for (other_ix, other) in entries.iter().enumerate() {
        if other_ix == ix {
            continue;
        }
        let bits = match_bits(&target.tokens, &other.tokens);
        histogram[bits] += other.count as f64;
    }
    histogram[cells - 1] += target.count.saturating_sub(1) as f64;

    Ok(histogram)
}

pub fn estimate_unigram(histogram: &[f64], length: usize) -> Estimate {
    let full = histogram.len() - 1;
    let degree = length.saturating_sub(1) as f64;

    let mut lambda = degree * histogram[0].ln();
    let mut variance = degree * degree / histogram[0];
    for b in 0..length {
        let cell = histogram[1 << b];
        lambda -= cell.ln();
        variance += 1.0 / cell;
    }
    lambda += histogram[full].ln();
    variance += 1.0 / histogram[full];

    Estimate {
        lambda,
        sigma: variance.sqrt(),
    }
}

pub fn estimate_all_subtuples(histogram: &[f64], length: usize) -> Estimate {
    let mut lambda = 0.0;
    let mut variance = 0.0;
    for (b, cell) in histogram.iter().enumerate() {
        let unmatched = length - b.count_ones() as usize;
        if unmatched % 2 == 0 {
            lambda += cell.ln();
        } else {
            lambda -= cell.ln();
        }
        variance += 1.0 / cell;
    }

    Estimate {
        lambda,
        sigma: variance.sqrt(),
    }
}

/// Score candidate `ix`, or `None` when it is a single token or rarer than
/// `count_min`.
pub fn estimate_candidate(
    ix: usize,
    entries: &[Collocation],
    count_min: Count,
    estimator: Estimator,
) -> SequenceResult<Option<Estimate>> {
    let target = &entries[ix];
    let length = target.tokens.len();
    if length == 1 || target.count < count_min {
        return Ok(None);
    }

    let histogram = subtuple_histogram(ix, entries)?;
    Ok(Some(estimator(&histogram, length)))
}
