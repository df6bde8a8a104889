use cohort_common::error::ErrorKind;
use itertools::Itertools;

use super::sample_dataset;
use crate::{Dataset, GroupingOptions, InterestSet, dataset::InterestId};
use cohort_bitfield::BitField;

#[test]
fn test_options_validation() {
    assert!(GroupingOptions::new(0, 1, 0).is_ok());
    assert!(GroupingOptions::new(2, 5, 2).is_ok());

    let err = GroupingOptions::new(3, 5, 2).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidArgument { name, .. } if name == "min_interest_people"
    ));
    let err = GroupingOptions::new(1, 5, 5).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidArgument { name, .. } if name == "min_set_people"
    ));

    let defaults = GroupingOptions::default();
    assert_eq!(defaults.min_interest_people(), 10);
    assert_eq!(defaults.max_interest_people(), 50);
    assert_eq!(defaults.min_set_people(), 25);
    assert!(defaults.accepts_interest(10));
    assert!(defaults.accepts_interest(49));
    assert!(!defaults.accepts_interest(50));
    assert!(!defaults.accepts_interest(9));
}

#[test]
fn test_add_row_assigns_dense_ids() {
    let mut dataset = Dataset::new(GroupingOptions::default());
    dataset.add_row("ann", "chess");
    dataset.add_row("bob", "go");
    dataset.add_row("ann", "go");

    assert_eq!(dataset.num_people(), 2);
    assert_eq!(dataset.num_interests(), 2);
    assert_eq!(dataset.num_rows(), 3);
    assert_eq!(dataset.person_id("bob").map(|id| id.0), Some(1));
    assert_eq!(dataset.interest_id("go"), Some(InterestId(1)));
    assert_eq!(dataset.interest_name(InterestId(0)), Some("chess"));
    assert_eq!(dataset.interest_name(InterestId(5)), None);
}

#[test]
fn test_ignore_people() {
    let mut dataset = sample_dataset(GroupingOptions::new(2, 5, 2).unwrap());
    assert_eq!(dataset.ignore_people(), 1);
    let user5 = dataset.person_id("user5").unwrap();
    assert!(dataset.is_person_ignored(user5));
    let user1 = dataset.person_id("user1").unwrap();
    assert!(!dataset.is_person_ignored(user1));
}

#[test]
fn test_ignore_interests() {
    let mut dataset = sample_dataset(GroupingOptions::new(2, 5, 2).unwrap());
    dataset.ignore_people();
    let kept = dataset.ignore_interests();

    let kept_names = kept
        .iter()
        .map(|(id, _)| dataset.interest_name(*id).unwrap())
        .collect_vec();
    assert_eq!(kept_names, vec!["animals", "cats", "dogs"]);
    for name in ["bats", "rare"] {
        let id = dataset.interest_id(name).unwrap();
        assert!(dataset.is_interest_ignored(id), "{name} should be ignored");
    }

    let (_, cats) = &kept[1];
    assert_eq!(cats.iter_ones().collect_vec(), vec![0, 1, 2]);
}

#[test]
fn test_generate() {
    let mut dataset = sample_dataset(GroupingOptions::new(2, 5, 2).unwrap());
    assert_eq!(dataset.generate(), 2);

    let first = dataset.result(0).unwrap();
    assert_eq!(first.num_people, 2);
    assert_eq!(first.interests, vec!["animals", "cats"]);
    let second = dataset.result(1).unwrap();
    assert_eq!(second.num_people, 2);
    assert_eq!(second.interests, vec!["cats", "dogs"]);

    let err = dataset.result(2).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::OutOfRange { index: 2, len: 2, .. }
    ));

    let stats = dataset.stats();
    assert_eq!(stats.people, 5);
    assert_eq!(stats.interests, 5);
    assert_eq!(stats.rows, 14);
    assert_eq!(stats.ignored_people, 1);
    assert_eq!(stats.ignored_interests, 2);
    assert_eq!(stats.results, 2);

    // Running again gives the same answer.
    assert_eq!(dataset.generate(), 2);
}

#[test]
fn test_generate_permissive() {
    let mut dataset = sample_dataset(GroupingOptions::new(0, 50, 1).unwrap());
    assert_eq!(dataset.generate(), 3);

    let results = (0..dataset.results().len())
        .map(|i| dataset.result(i).unwrap())
        .map(|r| (r.num_people, r.interests.join(",")))
        .collect_vec();
    assert_eq!(
        results,
        vec![
            (1, "animals,cats,dogs".to_string()),
            (2, "cats,dogs".to_string()),
            (1, "dogs,rare".to_string()),
        ]
    );
}

#[test]
fn test_generate_empty() {
    let mut dataset = Dataset::new(GroupingOptions::default());
    assert_eq!(dataset.generate(), 0);
    assert!(dataset.results().is_empty());
    assert_eq!(dataset.stats(), Default::default());
}

#[test]
fn test_interest_set_add() {
    let mut set = InterestSet::new(6, 2);
    assert!(set.is_empty());
    assert!(!set.add(InterestId(0), &BitField::with_positions(6, [1])));
    assert!(set.add(InterestId(1), &BitField::with_positions(6, [1, 2, 3])));
    assert!(set.add(InterestId(2), &BitField::with_positions(6, [2, 3, 4])));
    assert!(!set.add(InterestId(3), &BitField::with_positions(6, [3, 4, 5])));
    assert!(set.add(InterestId(4), &BitField::with_positions(6, [1, 2, 3, 4, 5])));

    assert_eq!(set.len(), 3);
    assert_eq!(
        set.interests(),
        &[InterestId(1), InterestId(2), InterestId(4)]
    );
    assert_eq!(set.people().iter_ones().collect_vec(), vec![2, 3]);
    assert_eq!(set.num_people(), 2);
}
