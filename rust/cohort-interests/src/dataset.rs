//! The person/interest dataset and the grouping pipeline.

use ahash::{AHashMap, AHashSet};
use cohort_bitfield::BitField;
use cohort_common::{Result, error::Error};

use crate::{interest_set::InterestSet, options::GroupingOptions};

/// Dense id of a person, assigned in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub usize);

/// Dense id of an interest, assigned in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterestId(pub usize);

/// A person/interest dataset.
///
/// Rows are added with [`add_row`](Self::add_row). Once loaded,
/// [`generate`](Self::generate) runs the grouping in three phases:
///
/// 1. People with exactly the same interests as an earlier person are ignored.
/// 2. Interests that are too rare, too generic, or followed by exactly the same
///    people as an earlier interest are ignored.
/// 3. The remaining interests are greedily grouped into sets shared by at least
///    [`GroupingOptions::min_set_people`] people. Single-interest sets are dropped.
pub struct Dataset {
    options: GroupingOptions,
    person_ids: AHashMap<String, PersonId>,
    interest_ids: AHashMap<String, InterestId>,
    interest_names: Vec<String>,
    rows: Vec<(PersonId, InterestId)>,
    ignored_people: AHashSet<PersonId>,
    ignored_interests: AHashSet<InterestId>,
    results: Vec<InterestSet>,
}

/// A single interest set as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult<'a> {
    pub num_people: usize,
    pub interests: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub people: usize,
    pub interests: usize,
    pub rows: usize,
    pub ignored_people: usize,
    pub ignored_interests: usize,
    pub results: usize,
}

impl Dataset {
    pub fn new(options: GroupingOptions) -> Dataset {
        Dataset {
            options,
            person_ids: AHashMap::new(),
            interest_ids: AHashMap::new(),
            interest_names: Vec::new(),
            rows: Vec::new(),
            ignored_people: AHashSet::new(),
            ignored_interests: AHashSet::new(),
            results: Vec::new(),
        }
    }

    pub fn options(&self) -> &GroupingOptions {
        &self.options
    }

    /// Records that `person` follows `interest`.
    pub fn add_row(&mut self, person: &str, interest: &str) {
        let next_person = PersonId(self.person_ids.len());
        let person_id = *self
            .person_ids
            .entry(person.to_string())
            .or_insert(next_person);

        let interest_id = match self.interest_ids.get(interest) {
            Some(&id) => id,
            None => {
                let id = InterestId(self.interest_names.len());
                self.interest_ids.insert(interest.to_string(), id);
                self.interest_names.push(interest.to_string());
                id
            }
        };
        self.rows.push((person_id, interest_id));
    }

    pub fn num_people(&self) -> usize {
        self.person_ids.len()
    }

    pub fn num_interests(&self) -> usize {
        self.interest_names.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn person_id(&self, person: &str) -> Option<PersonId> {
        self.person_ids.get(person).copied()
    }

    pub fn interest_id(&self, interest: &str) -> Option<InterestId> {
        self.interest_ids.get(interest).copied()
    }

    pub fn interest_name(&self, id: InterestId) -> Option<&str> {
        self.interest_names.get(id.0).map(String::as_str)
    }

    pub fn is_person_ignored(&self, id: PersonId) -> bool {
        self.ignored_people.contains(&id)
    }

    pub fn is_interest_ignored(&self, id: InterestId) -> bool {
        self.ignored_interests.contains(&id)
    }

    /// Runs all grouping phases and returns the number of interest sets found.
    ///
    /// Calling it again recomputes the results from the loaded rows.
    pub fn generate(&mut self) -> usize {
        self.ignored_people.clear();
        self.ignored_interests.clear();
        self.results.clear();

        let ignored_people = self.ignore_people();
        log::debug!("ignored {ignored_people} duplicate people");

        let kept = self.ignore_interests();
        log::debug!(
            "kept {} of {} interests",
            kept.len(),
            self.num_interests()
        );

        let found = self.group_interests(&kept);
        log::info!("found {found} interest sets");
        found
    }

    /// Marks every person whose interests duplicate those of an earlier person.
    pub(crate) fn ignore_people(&mut self) -> usize {
        let num_interests = self.num_interests() as isize;
        let mut people = vec![BitField::new(num_interests); self.num_people()];
        for &(person, interest) in &self.rows {
            people[person.0].set(interest.0 as isize);
        }

        let mut scratch = BitField::new(num_interests);
        for (i, person) in people.iter().enumerate() {
            for (j, other) in people.iter().enumerate().skip(i + 1) {
                person.bit_copy(&mut scratch);
                if scratch.xor(other).ones_count() == 0 {
                    self.ignored_people.insert(PersonId(j));
                }
            }
        }
        self.ignored_people.len()
    }

    /// Marks interests that are out of the accepted popularity range or that
    /// duplicate an earlier interest. Returns the kept interests with their
    /// followers.
    pub(crate) fn ignore_interests(&mut self) -> Vec<(InterestId, BitField)> {
        let num_people = self.num_people() as isize;
        let mut followers = vec![BitField::new(num_people); self.num_interests()];
        for &(person, interest) in &self.rows {
            if !self.ignored_people.contains(&person) {
                followers[interest.0].set(person.0 as isize);
            }
        }

        let mut scratch = BitField::new(num_people);
        for (i, interest) in followers.iter().enumerate() {
            if !self.options.accepts_interest(interest.ones_count()) {
                self.ignored_interests.insert(InterestId(i));
                continue;
            }
            for (j, other) in followers.iter().enumerate().skip(i + 1) {
                interest.bit_copy(&mut scratch);
                if scratch.xor(other).ones_count() == 0 {
                    self.ignored_interests.insert(InterestId(j));
                }
            }
        }

        followers
            .into_iter()
            .enumerate()
            .map(|(i, people)| (InterestId(i), people))
            .filter(|(id, _)| !self.ignored_interests.contains(id))
            .collect()
    }

    pub(crate) fn group_interests(&mut self, kept: &[(InterestId, BitField)]) -> usize {
        let min_people = self.options.min_set_people();
        for (i, (id, people)) in kept.iter().enumerate() {
            let mut set = InterestSet::new(self.num_people(), min_people);
            if !set.add(*id, people) {
                continue;
            }
            for (other_id, other_people) in &kept[i + 1..] {
                set.add(*other_id, other_people);
            }
            if set.len() > 1 {
                self.results.push(set);
            }
        }
        self.results.len()
    }

    pub fn results(&self) -> &[InterestSet] {
        &self.results
    }

    /// Returns the result at `pos`, with interest ids resolved to names.
    pub fn result(&self, pos: usize) -> Result<GroupResult<'_>> {
        let set = self
            .results
            .get(pos)
            .ok_or_else(|| Error::out_of_range("result", pos, self.results.len()))?;
        Ok(GroupResult {
            num_people: set.num_people(),
            interests: set
                .interests()
                .iter()
                .map(|&id| self.interest_names[id.0].as_str())
                .collect(),
        })
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            people: self.num_people(),
            interests: self.num_interests(),
            rows: self.num_rows(),
            ignored_people: self.ignored_people.len(),
            ignored_interests: self.ignored_interests.len(),
            results: self.results.len(),
        }
    }
}
