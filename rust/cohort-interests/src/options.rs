use cohort_common::{Result, verify_arg};

/// Thresholds that decide which interests and interest sets are reported.
///
/// Must satisfy `min_interest_people <= min_set_people < max_interest_people`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingOptions {
    min_interest_people: usize,
    max_interest_people: usize,
    min_set_people: usize,
}

impl GroupingOptions {
    /// Validates and creates the options.
    ///
    /// # Arguments
    ///
    /// * `min_interest_people` - Interests with fewer people are dropped as too rare.
    /// * `max_interest_people` - Interests with this many people or more are dropped
    ///   as too generic.
    /// * `min_set_people` - An interest set must be shared by at least this many people.
    pub fn new(
        min_interest_people: usize,
        max_interest_people: usize,
        min_set_people: usize,
    ) -> Result<GroupingOptions> {
        verify_arg!(
            min_interest_people,
            min_interest_people <= min_set_people
        );
        verify_arg!(min_set_people, min_set_people < max_interest_people);
        Ok(GroupingOptions {
            min_interest_people,
            max_interest_people,
            min_set_people,
        })
    }

    pub fn min_interest_people(&self) -> usize {
        self.min_interest_people
    }

    pub fn max_interest_people(&self) -> usize {
        self.max_interest_people
    }

    pub fn min_set_people(&self) -> usize {
        self.min_set_people
    }

    /// Returns `true` if an interest shared by `count` people is neither too rare
    /// nor too generic.
    pub fn accepts_interest(&self, count: usize) -> bool {
        count >= self.min_interest_people && count < self.max_interest_people
    }
}

impl Default for GroupingOptions {
    fn default() -> Self {
        GroupingOptions {
            min_interest_people: 10,
            max_interest_people: 50,
            min_set_people: 25,
        }
    }
}
