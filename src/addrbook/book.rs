//! # Address Book
//!
//! [`AddressBook`] is the in-memory store: records keyed by their name, kept in insertion
//! order so listings and birthday reports come out in the order contacts were first added.
//!
//! It knows nothing about files. Loading and saving live behind
//! [`BookStore`](crate::store::BookStore).

use crate::model::{Record, BIRTHDAY_FORMAT};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::fmt;

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// A contact whose birthday falls inside the look-ahead window, with the date on which to
/// congratulate them (weekends moved to Monday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Inserts `record`, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Upcoming birthdays over the default seven-day window, relative to the local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_UPCOMING_DAYS)
    }

    /// Contacts whose birthday this year lies between `today` and `today + days`, both
    /// inclusive. Dates landing on a weekend are moved to the following Monday.
    ///
    /// Birthdays that already passed this year are not reported, even when their next
    /// occurrence would fall inside the window (e.g. late December looking into January).
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let this_year = occurrence_in_year(birthday.date(), today.year());
            if this_year < today {
                let next = occurrence_in_year(birthday.date(), today.year() + 1);
                tracing::trace!(name = %record.name(), %next, "birthday already passed this year");
                continue;
            }

            let ahead = (this_year - today).num_days();
            if ahead > days {
                continue;
            }

            let congratulation_date = match this_year.weekday() {
                Weekday::Sat | Weekday::Sun => next_weekday(this_year, Weekday::Mon),
                _ => this_year,
            };
            upcoming.push(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date,
            });
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// The first date strictly after `date` that falls on `weekday`.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead =
        weekday.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

/// `date` moved to `year`. A 29 February birthday is celebrated on 1 March in common years.
fn occurrence_in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}
