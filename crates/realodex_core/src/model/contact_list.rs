//! In-memory contact list plus the filtered view shown to the user.
//!
//! # Responsibility
//! - Own every contact for the lifetime of one session.
//! - Translate displayed (filtered) positions into storage positions.
//!
//! # Invariants
//! - No two contacts share a name ignoring case.
//! - The displayed list is the stored list, in order, restricted by the
//!   active predicate.

use super::{Index, Name, Person, PersonPredicate};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct ContactList {
    persons: Vec<Person>,
    filter: Option<PersonPredicate>,
}

impl ContactList {
    /// Builds a list from loaded contacts. Later duplicates are dropped.
    pub fn new(persons: Vec<Person>) -> Self {
        let mut list = Self::default();
        for person in persons {
            if !list.has_person(&person) {
                list.persons.push(person);
            }
        }
        list
    }

    /// All contacts in storage order, ignoring the filter.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn displayed(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| self.is_displayed(person))
            .collect()
    }

    pub fn filter(&self) -> Option<&PersonPredicate> {
        self.filter.as_ref()
    }

    pub fn set_filter(&mut self, predicate: PersonPredicate) {
        self.filter = Some(predicate);
    }

    pub fn show_all(&mut self) {
        self.filter = None;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|existing| existing.is_same_person(person))
    }

    /// Appends a contact. Returns `false` and leaves the list unchanged when
    /// a contact with the same name exists.
    pub fn add(&mut self, person: Person) -> bool {
        if self.has_person(&person) {
            return false;
        }
        self.persons.push(person);
        true
    }

    /// Maps a displayed position to its storage position.
    pub fn storage_position(&self, index: Index) -> Option<usize> {
        self.persons
            .iter()
            .enumerate()
            .filter(|(_, person)| self.is_displayed(person))
            .nth(index.zero_based())
            .map(|(position, _)| position)
    }

    /// Storage position of the displayed contact named `name`, ignoring case.
    pub fn position_of_displayed_name(&self, name: &Name) -> Option<usize> {
        self.persons
            .iter()
            .position(|person| self.is_displayed(person) && person.name.matches_ignore_case(name))
    }

    pub fn get(&self, position: usize) -> Option<&Person> {
        self.persons.get(position)
    }

    pub fn remove(&mut self, position: usize) -> Option<Person> {
        (position < self.persons.len()).then(|| self.persons.remove(position))
    }

    /// Replaces the contact at `position`. Returns `false` when `edited`
    /// would collide with a different existing contact.
    pub fn replace(&mut self, position: usize, edited: Person) -> bool {
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(other, person)| other != position && person.is_same_person(&edited));
        match self.persons.get_mut(position) {
            Some(slot) if !collides => {
                *slot = edited;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.persons.clear();
        self.filter = None;
    }

    /// Stable sort by days until next birthday; unspecified birthdays last.
    pub fn sort_by_upcoming_birthday(&mut self, today: NaiveDate) {
        self.persons
            .sort_by_key(|person| person.birthday.days_until_birthday(today).unwrap_or(i64::MAX));
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn is_displayed(&self, person: &Person) -> bool {
        self.filter
            .as_ref()
            .map_or(true, |predicate| predicate.test(person))
    }
}
