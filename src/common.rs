use std::{collections::HashMap, hash::Hash};

pub fn norm_1<K: Eq + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// Largest per-node absolute change between two rank vectors.
pub fn max_change(before: &[f64], after: &[f64]) -> f64 {
    debug_assert_eq!(before.len(), after.len());
    before
        .iter()
        .zip(after.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

pub(crate) fn check_damping(damping: f64) -> crate::Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(crate::Error::InvalidDamping(damping))
    }
}
