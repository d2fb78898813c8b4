use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::DatasetConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit<T> {
    pub train: Vec<T>,
    pub test: Vec<T>,
    /// Leading train items, as many as the test set, for evaluating on seen data.
    pub train_for_evaluate: Vec<T>,
}

impl DatasetConfig {
    /// Shuffle `items` with `seed` and hold out the first `num_test` as the test set.
    pub fn split<T: Clone>(&self, mut items: Vec<T>) -> DatasetSplit<T> {
        items.shuffle(&mut StdRng::seed_from_u64(self.seed));

        let num_test = self.num_test.min(items.len());
        let train = items.split_off(num_test);
        let train_for_evaluate = train.iter().take(num_test).cloned().collect();

        DatasetSplit {
            train,
            test: items,
            train_for_evaluate,
        }
    }

    /// Pair input and target files one to one, then split the pairs.
    ///
    /// Both lists must already be sorted so that the n-th input matches the
    /// n-th target.
    pub fn split_pairs<T: Clone>(
        &self,
        inputs: Vec<T>,
        targets: Vec<T>,
    ) -> Result<DatasetSplit<(T, T)>> {
        if inputs.len() != targets.len() {
            return Err(ConfigError::UnpairedDataset {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }

        let pairs = inputs.into_iter().zip(targets).collect::<Vec<_>>();
        Ok(self.split(pairs))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::param::Param;

    use super::*;

    fn dataset_config(seed: u64, num_test: usize) -> DatasetConfig {
        DatasetConfig {
            param: Param::default(),
            input_glob: "in/*.npy".to_string(),
            target_glob: "out/*.npy".to_string(),
            input_mean_path: PathBuf::from("in_mean.npy"),
            input_var_path: PathBuf::from("in_var.npy"),
            target_mean_path: PathBuf::from("out_mean.npy"),
            target_var_path: PathBuf::from("out_var.npy"),
            seed,
            num_test,
        }
    }

    #[test]
    fn test_split_sizes() {
        let split = dataset_config(0, 3).split((0..10).collect::<Vec<_>>());

        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 7);
        assert_eq!(split.train_for_evaluate, split.train[..3].to_vec());

        let mut all = split.train.iter().chain(&split.test).copied().collect::<Vec<_>>();
        all.sort();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_is_deterministic_per_seed() {
        let items = (0..100).collect::<Vec<_>>();

        let a = dataset_config(42, 10).split(items.clone());
        let b = dataset_config(42, 10).split(items.clone());
        let c = dataset_config(43, 10).split(items);
        assert_eq!(a, b);
        assert_ne!(a.test, c.test);
    }

    #[test]
    fn test_num_test_larger_than_dataset() {
        let split = dataset_config(0, 5).split(vec!["a", "b"]);

        assert_eq!(split.test.len(), 2);
        assert!(split.train.is_empty());
        assert!(split.train_for_evaluate.is_empty());
    }

    #[test]
    fn test_split_pairs() {
        let config = dataset_config(1, 1);
        let split = config
            .split_pairs(vec!["a1", "a2", "a3"], vec!["b1", "b2", "b3"])
            .unwrap();
        for (input, target) in split.train.iter().chain(&split.test) {
            assert_eq!(input[1..], target[1..]);
        }

        let err = config.split_pairs(vec!["a1"], vec![]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnpairedDataset {
                inputs: 1,
                targets: 0
            }
        ));
    }
}
