//! Sort specifications for author queries

use crate::{Author, AuthorRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Author field that can be used as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorField {
    FirstName,
    FamilyName,
    DateOfBirth,
    DateOfDeath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One `(field, direction)` entry of a sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: AuthorField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(field: AuthorField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: AuthorField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Compare two authors on this key only
    pub fn compare(&self, a: &Author, b: &Author) -> Ordering {
        let ordering = match self.field {
            AuthorField::FirstName => a.first_name.cmp(&b.first_name),
            AuthorField::FamilyName => a.family_name.cmp(&b.family_name),
            AuthorField::DateOfBirth => a.date_of_birth.cmp(&b.date_of_birth),
            AuthorField::DateOfDeath => a.date_of_death.cmp(&b.date_of_death),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for AuthorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthorField::FirstName => "first_name",
            AuthorField::FamilyName => "family_name",
            AuthorField::DateOfBirth => "date_of_birth",
            AuthorField::DateOfDeath => "date_of_death",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[\"{}\", \"{}\"]", self.field, self.direction)
    }
}

/// Render a sort specification as `[["field", "direction"], ...]`
pub fn describe_sort(sort: &[SortKey]) -> String {
    let keys: Vec<String> = sort.iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(", "))
}

/// Order records by `sort`. Stable, so full ties keep their incoming order.
pub fn sort_records(records: &mut [AuthorRecord], sort: &[SortKey]) {
    if sort.is_empty() {
        return;
    }

    records.sort_by(|a, b| {
        sort.iter()
            .map(|key| key.compare(&a.author, &b.author))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: u64, first: &str, family: &str, born: i32) -> AuthorRecord {
        AuthorRecord {
            id,
            author: Author::new(first, family, date(born, 1, 1), date(born + 50, 1, 1)),
        }
    }

    #[test]
    fn test_sort_by_family_name_ascending() {
        let mut records = vec![
            record(1, "Rabindranath", "Tagore", 1861),
            record(2, "Jane", "Austen", 1775),
            record(3, "Amitav", "Ghosh", 1956),
        ];

        sort_records(&mut records, &[SortKey::ascending(AuthorField::FamilyName)]);

        let names: Vec<_> = records.iter().map(|r| r.author.family_name.as_str()).collect();
        assert_eq!(names, vec!["Austen", "Ghosh", "Tagore"]);
    }

    #[test]
    fn test_sort_second_key_breaks_ties() {
        let mut records = vec![
            record(1, "Anne", "Bronte", 1820),
            record(2, "Charlotte", "Bronte", 1816),
            record(3, "Emily", "Bronte", 1818),
        ];

        sort_records(
            &mut records,
            &[
                SortKey::ascending(AuthorField::FamilyName),
                SortKey::descending(AuthorField::DateOfBirth),
            ],
        );

        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_full_ties() {
        let mut records = vec![
            record(7, "Anne", "Bronte", 1820),
            record(3, "Anne", "Bronte", 1820),
        ];

        sort_records(&mut records, &[SortKey::ascending(AuthorField::FamilyName)]);

        assert_eq!(records[0].id, 7);
        assert_eq!(records[1].id, 3);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        // byte order, same as a document store's default collation
        let mut records = vec![record(1, "", "de Camp", 1907), record(2, "", "Dickens", 1812)];

        sort_records(&mut records, &[SortKey::ascending(AuthorField::FamilyName)]);

        assert_eq!(records[0].author.family_name, "Dickens");
    }

    #[test]
    fn test_empty_sort_keeps_order() {
        let mut records = vec![record(2, "", "Zola", 1840), record(1, "", "Austen", 1775)];

        sort_records(&mut records, &[]);

        assert_eq!(records[0].id, 2);
    }

    #[test]
    fn test_sort_key_serialization() {
        let key = SortKey::ascending(AuthorField::FamilyName);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"field":"family_name","direction":"ascending"}"#);
        assert_eq!(key.to_string(), r#"["family_name", "ascending"]"#);
    }

    #[test]
    fn test_describe_sort() {
        let sort = [
            SortKey::ascending(AuthorField::FamilyName),
            SortKey::descending(AuthorField::DateOfDeath),
        ];
        assert_eq!(
            describe_sort(&sort),
            r#"[["family_name", "ascending"], ["date_of_death", "descending"]]"#
        );
        assert_eq!(describe_sort(&[]), "[]");
    }
}
