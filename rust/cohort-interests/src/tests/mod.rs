mod dataset_tests;

use crate::{Dataset, GroupingOptions};

/// Header plus rows. `user5` duplicates `user1`; `bats` duplicates `animals`
/// once `user5` is gone; `rare` has a single follower.
pub(crate) const SAMPLE: &str = "person\tinterest
user1\tanimals
user1\tbats
user1\tcats
user2\tcats
user2\tdogs
user3\tcats
user3\tdogs
user3\tanimals
user3\tbats
user4\tdogs
user4\trare
user5\tanimals
user5\tbats
user5\tcats
";

pub(crate) fn sample_dataset(options: GroupingOptions) -> Dataset {
    let mut dataset = Dataset::new(options);
    crate::tsv::load_tsv(&mut dataset, SAMPLE.as_bytes()).unwrap();
    dataset
}
