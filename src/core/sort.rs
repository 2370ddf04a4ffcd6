//! Multi-criteria sorting of record sequences
//!
//! Records are ordered by comparing them criterion by criterion: the first
//! criterion whose field values differ decides, equal values fall through to
//! the next criterion, and records that compare equal on every criterion keep
//! their original relative order.
//!
//! Sortable fields are an explicit enumeration per record type, such as
//! [`BookField`] for books. Criteria arriving from the outside world
//! as free-form strings are resolved against that enumeration with
//! [`resolve_criteria`]; names outside it are dropped, which has the same
//! effect as a criterion that always compares equal.
//!
//! # Example
//!
//! ```rust,ignore
//! let criteria = resolve_criteria::<BookField>(&[
//!     RawSortCriterion::new("authorId", "ASC"),
//!     RawSortCriterion::new("name", "DESC"),
//! ]);
//! let sorted = sort_records(&books, &criteria);
//! ```

use super::entity::Book;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a single sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction leniently: `DESC` in any case is descending, anything
    /// else (including an absent value) is ascending.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    /// Orient a natural-order comparison according to this direction
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// A field name that is not sortable for the record type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}'")]
pub struct UnknownSortField(pub String);

/// A record type that can be ordered by a closed set of named fields
pub trait Sortable: Clone {
    /// The enumeration of sortable fields for this record type
    type Field: Copy + fmt::Debug + FromStr<Err = UnknownSortField>;

    /// Compare two records on a single field, in natural (ascending) order
    fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// A typed sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F> SortCriterion<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }
}

/// A sort criterion as received at the boundary, before field resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSortCriterion {
    pub field: Option<String>,
    pub order: Option<String>,
}

impl RawSortCriterion {
    pub fn new(field: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            order: Some(order.into()),
        }
    }
}

/// Resolve boundary criteria into typed criteria for `F`.
///
/// Criteria with a missing or unknown field are skipped; their relative
/// position among the remaining criteria is preserved.
pub fn resolve_criteria<F>(raw: &[RawSortCriterion]) -> Vec<SortCriterion<F>>
where
    F: FromStr<Err = UnknownSortField>,
{
    raw.iter()
        .filter_map(|criterion| {
            let name = criterion.field.as_deref()?;
            match name.parse::<F>() {
                Ok(field) => Some(SortCriterion {
                    field,
                    order: SortOrder::parse_lenient(criterion.order.as_deref()),
                }),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring sort criterion");
                    None
                }
            }
        })
        .collect()
}

/// Compare two records across all criteria in order
pub fn compare_records<T: Sortable>(
    a: &T,
    b: &T,
    criteria: &[SortCriterion<T::Field>],
) -> Ordering {
    criteria.iter().fold(Ordering::Equal, |acc, criterion| {
        acc.then_with(|| criterion.order.apply(a.compare_by(b, criterion.field)))
    })
}

/// Return a sorted copy of `records`.
///
/// The input slice is left untouched. With no criteria the copy is in input
/// order. Ties on every criterion keep their input order.
pub fn sort_records<T: Sortable>(
    records: &[T],
    criteria: &[SortCriterion<T::Field>],
) -> Vec<T> {
    let mut sorted = records.to_vec();
    if !criteria.is_empty() {
        sorted.sort_by(|a, b| compare_records(a, b, criteria));
    }
    sorted
}

/// Sortable fields of [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Id,
    Name,
    AuthorId,
}

impl FromStr for BookField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(BookField::Id),
            "name" => Ok(BookField::Name),
            "authorId" | "author_id" => Ok(BookField::AuthorId),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

impl Sortable for Book {
    type Field = BookField;

    fn compare_by(&self, other: &Self, field: BookField) -> Ordering {
        match field {
            BookField::Id => self.id.cmp(&other.id),
            BookField::Name => self.name.cmp(&other.name),
            BookField::AuthorId => self.author_id.cmp(&other.author_id),
        }
    }
}
