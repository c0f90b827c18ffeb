//! Equality check between the result files of both toolkits.
//!
//! Both files are binary OpenFST vector FSTs over the tropical semiring.
//! They are compared structurally, the same way `fstequal` does: same number
//! of states, same start state, and for every state the same final weight and
//! the same ordered list of transitions. Weights are compared within a
//! tolerance.

use std::path::Path;

use rustfst::fst_impls::VectorFst;
use rustfst::fst_traits::{CoreFst, ExpandedFst, SerializableFst, StateIterator};
use rustfst::semirings::{Semiring, TropicalWeight};
use rustfst::{StateId, Trs, KDELTA};
use tracing::debug;

use crate::error::{BenchError, Result};

/// Check that two result files hold the same FST, using the OpenFST default
/// weight tolerance.
///
/// # Errors
///
/// Returns [`BenchError::FstRead`] if either file cannot be parsed and
/// [`BenchError::FstMismatch`] if the FSTs differ.
pub fn check_fst_equals(path_a: impl AsRef<Path>, path_b: impl AsRef<Path>) -> Result<()> {
    check_fst_equals_with_delta(path_a, path_b, KDELTA)
}

/// Same as [`check_fst_equals`] with an explicit weight tolerance.
///
/// # Errors
///
/// See [`check_fst_equals`].
pub fn check_fst_equals_with_delta(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    delta: f32,
) -> Result<()> {
    let path_a = path_a.as_ref();
    let path_b = path_b.as_ref();

    let fst_a = read_fst(path_a)?;
    let fst_b = read_fst(path_b)?;

    debug!(
        left = %path_a.display(),
        right = %path_b.display(),
        states = fst_a.num_states(),
        "comparing FST results"
    );

    first_difference(&fst_a, &fst_b, delta).map_or(Ok(()), |reason| {
        Err(BenchError::FstMismatch {
            left: path_a.to_path_buf(),
            right: path_b.to_path_buf(),
            reason,
        })
    })
}

fn read_fst(path: &Path) -> Result<VectorFst<TropicalWeight>> {
    VectorFst::<TropicalWeight>::read(path).map_err(|e| BenchError::FstRead {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    })
}

/// Describe the first structural difference, or `None` if the FSTs agree.
fn first_difference(
    a: &VectorFst<TropicalWeight>,
    b: &VectorFst<TropicalWeight>,
    delta: f32,
) -> Option<String> {
    if a.num_states() != b.num_states() {
        return Some(format!(
            "state count {} vs {}",
            a.num_states(),
            b.num_states()
        ));
    }
    if a.start() != b.start() {
        return Some(format!("start state {:?} vs {:?}", a.start(), b.start()));
    }

    for state in a.states_iter() {
        if let Some(reason) = state_difference(a, b, state, delta) {
            return Some(format!("state {state}: {reason}"));
        }
    }
    None
}

fn state_difference(
    a: &VectorFst<TropicalWeight>,
    b: &VectorFst<TropicalWeight>,
    state: StateId,
    delta: f32,
) -> Option<String> {
    let (final_a, final_b) = match (a.final_weight(state), b.final_weight(state)) {
        (Ok(fa), Ok(fb)) => (fa, fb),
        (Err(e), _) | (_, Err(e)) => return Some(format!("{e:#}")),
    };
    match (&final_a, &final_b) {
        (None, None) => {}
        (Some(wa), Some(wb)) if weights_close(wa, wb, delta) => {}
        _ => return Some(format!("final weight {final_a:?} vs {final_b:?}")),
    }

    let (trs_a, trs_b) = match (a.get_trs(state), b.get_trs(state)) {
        (Ok(ta), Ok(tb)) => (ta, tb),
        (Err(e), _) | (_, Err(e)) => return Some(format!("{e:#}")),
    };
    let (trs_a, trs_b) = (trs_a.trs(), trs_b.trs());
    if trs_a.len() != trs_b.len() {
        return Some(format!(
            "{} transitions vs {}",
            trs_a.len(),
            trs_b.len()
        ));
    }

    trs_a
        .iter()
        .zip(trs_b)
        .position(|(ta, tb)| {
            ta.ilabel != tb.ilabel
                || ta.olabel != tb.olabel
                || ta.nextstate != tb.nextstate
                || !weights_close(&ta.weight, &tb.weight, delta)
        })
        .map(|idx| format!("transition {idx}: {:?} vs {:?}", trs_a[idx], trs_b[idx]))
}

fn weights_close(a: &TropicalWeight, b: &TropicalWeight, delta: f32) -> bool {
    let (a, b) = (*a.value(), *b.value());
    // Semiring zero is +inf on both sides, and inf - inf is NaN.
    #[allow(clippy::float_cmp)]
    let identical = a == b;
    identical || (a - b).abs() <= delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfst::fst_traits::MutableFst;
    use rustfst::Tr;
    use tempfile::TempDir;

    fn linear_fst(weight: f32) -> anyhow::Result<VectorFst<TropicalWeight>> {
        let mut fst = VectorFst::<TropicalWeight>::new();
        let s0 = fst.add_state();
        let s1 = fst.add_state();
        let s2 = fst.add_state();
        fst.set_start(s0)?;
        fst.add_tr(s0, Tr::new(1, 2, TropicalWeight::new(weight), s1))?;
        fst.add_tr(s1, Tr::new(3, 3, TropicalWeight::one(), s2))?;
        fst.set_final(s2, TropicalWeight::new(0.5))?;
        Ok(fst)
    }

    #[test]
    fn test_equal_fsts_pass() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("openfst.fst");
        let path_b = dir.path().join("rustfst.fst");
        linear_fst(1.0)?.write(&path_a)?;
        linear_fst(1.0)?.write(&path_b)?;

        check_fst_equals(&path_a, &path_b)?;
        Ok(())
    }

    #[test]
    fn test_weights_within_tolerance_pass() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("a.fst");
        let path_b = dir.path().join("b.fst");
        linear_fst(1.0)?.write(&path_a)?;
        linear_fst(1.0 + KDELTA / 4.0)?.write(&path_b)?;

        check_fst_equals(&path_a, &path_b)?;
        Ok(())
    }

    #[test]
    fn test_different_weights_fail() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("a.fst");
        let path_b = dir.path().join("b.fst");
        linear_fst(1.0)?.write(&path_a)?;
        linear_fst(2.0)?.write(&path_b)?;

        let err = check_fst_equals(&path_a, &path_b).unwrap_err();
        assert!(matches!(err, BenchError::FstMismatch { .. }));
        assert!(err.to_string().contains("transition 0"));
        Ok(())
    }

    #[test]
    fn test_different_structure_fails() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("a.fst");
        let path_b = dir.path().join("b.fst");
        linear_fst(1.0)?.write(&path_a)?;

        let mut shorter = linear_fst(1.0)?;
        let extra = shorter.add_state();
        shorter.add_tr(0, Tr::new(0, 0, TropicalWeight::one(), extra))?;
        shorter.write(&path_b)?;

        let err = check_fst_equals(&path_a, &path_b).unwrap_err();
        assert!(matches!(err, BenchError::FstMismatch { .. }));
        Ok(())
    }

    #[test]
    fn test_missing_file_fails_with_read_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("a.fst");
        linear_fst(1.0)?.write(&path_a)?;

        let missing = dir.path().join("missing.fst");
        let err = check_fst_equals(&path_a, &missing).unwrap_err();
        assert!(matches!(err, BenchError::FstRead { ref path, .. } if *path == missing));
        Ok(())
    }

    #[test]
    fn test_malformed_file_fails_with_read_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path_a = dir.path().join("a.fst");
        let garbage = dir.path().join("garbage.fst");
        linear_fst(1.0)?.write(&path_a)?;
        std::fs::write(&garbage, b"not an fst")?;

        let err = check_fst_equals(&garbage, &path_a).unwrap_err();
        assert!(matches!(err, BenchError::FstRead { .. }));
        Ok(())
    }

    #[test]
    fn test_weights_close_handles_infinity() {
        let zero = TropicalWeight::zero();
        assert!(weights_close(&zero, &zero, KDELTA));
        assert!(!weights_close(&zero, &TropicalWeight::one(), KDELTA));
    }
}
