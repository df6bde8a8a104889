use cohort_bitfield::BitField;

use crate::dataset::InterestId;

/// A growing set of interests together with the people who share all of them.
#[derive(Debug, Clone)]
pub struct InterestSet {
    interests: Vec<InterestId>,
    people: BitField,
    min_people: usize,
}

impl InterestSet {
    pub fn new(num_people: usize, min_people: usize) -> InterestSet {
        InterestSet {
            interests: Vec::new(),
            people: BitField::new(num_people as isize),
            min_people,
        }
    }

    /// Tries to add an interest whose followers are `people`.
    ///
    /// The interest is accepted only if the people common to the whole set stay
    /// at or above the minimum; otherwise the set is left unchanged.
    pub fn add(&mut self, interest: InterestId, people: &BitField) -> bool {
        if people.ones_count() < self.min_people {
            return false;
        }
        if self.interests.is_empty() {
            self.interests.push(interest);
            self.people = people.clone();
            return true;
        }
        let mut shared = self.people.clone();
        if shared.and(people).ones_count() < self.min_people {
            return false;
        }
        self.interests.push(interest);
        self.people = shared;
        true
    }

    pub fn interests(&self) -> &[InterestId] {
        &self.interests
    }

    /// People following every interest in the set.
    pub fn people(&self) -> &BitField {
        &self.people
    }

    pub fn num_people(&self) -> usize {
        self.people.ones_count()
    }

    pub fn len(&self) -> usize {
        self.interests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
    }
}
