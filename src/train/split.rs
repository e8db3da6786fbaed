//! Stratified train/test splitting.
//!
//! The split is stratified by label so the holdout set preserves the class
//! balance of the corpus, and seeded so the same corpus, ratio, and seed
//! always produce the same partition.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{Result, SentiraError};

/// Index partition produced by [`stratified_split`].
#[derive(Debug, Clone)]
pub struct SplitIndices {
    /// Indices of training records.
    pub train: Vec<usize>,
    /// Indices of held-out test records.
    pub test: Vec<usize>,
}

/// Split record indices into train and test sets, stratified by label.
///
/// Each class is shuffled with its own slice of the seeded generator and
/// contributes `floor(class_size * test_ratio)` records to the test set.
/// A `test_ratio` of 0.0 yields an empty test set.
pub fn stratified_split(labels: &[u8], test_ratio: f64, seed: u64) -> Result<SplitIndices> {
    if !(0.0..1.0).contains(&test_ratio) {
        return Err(SentiraError::invalid_argument(format!(
            "test_ratio must be in [0.0, 1.0), got {test_ratio}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    // Classes are processed in a fixed order so the partition only depends
    // on the labels, ratio, and seed.
    for class in [0u8, 1u8] {
        let mut class_indices: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == class)
            .map(|(index, _)| index)
            .collect();

        class_indices.shuffle(&mut rng);

        let test_count = (class_indices.len() as f64 * test_ratio).floor() as usize;
        test.extend_from_slice(&class_indices[..test_count]);
        train.extend_from_slice(&class_indices[test_count..]);
    }

    // Record order within each set is deterministic too.
    train.sort_unstable();
    test.sort_unstable();

    Ok(SplitIndices { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced_labels(per_class: usize) -> Vec<u8> {
        let mut labels = vec![0u8; per_class];
        labels.extend(vec![1u8; per_class]);
        labels
    }

    #[test]
    fn test_split_is_deterministic() {
        let labels = balanced_labels(50);

        let a = stratified_split(&labels, 0.2, 42).unwrap();
        let b = stratified_split(&labels, 0.2, 42).unwrap();

        assert_eq!(a.train, b.train);
        assert_eq!(a.test, b.test);
    }

    #[test]
    fn test_different_seeds_differ() {
        let labels = balanced_labels(50);

        let a = stratified_split(&labels, 0.2, 1).unwrap();
        let b = stratified_split(&labels, 0.2, 2).unwrap();

        assert_ne!(a.test, b.test);
    }

    #[test]
    fn test_split_is_stratified() {
        let labels = balanced_labels(100);
        let split = stratified_split(&labels, 0.2, 7).unwrap();

        assert_eq!(split.test.len(), 40);
        assert_eq!(split.train.len(), 160);

        let test_positives = split.test.iter().filter(|&&i| labels[i] == 1).count();
        assert_eq!(test_positives, 20);
    }

    #[test]
    fn test_split_partitions_all_indices() {
        let labels = balanced_labels(25);
        let split = stratified_split(&labels, 0.2, 3).unwrap();

        let mut all: Vec<usize> = split.train.iter().chain(split.test.iter()).copied().collect();
        all.sort_unstable();
        let expected: Vec<usize> = (0..labels.len()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_zero_ratio_keeps_everything_in_train() {
        let labels = balanced_labels(10);
        let split = stratified_split(&labels, 0.0, 9).unwrap();

        assert!(split.test.is_empty());
        assert_eq!(split.train.len(), labels.len());
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let labels = balanced_labels(10);

        assert!(stratified_split(&labels, 1.0, 0).is_err());
        assert!(stratified_split(&labels, -0.1, 0).is_err());
    }
}
