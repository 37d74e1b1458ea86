//! Find-first-match-and-remove over labeled collections.
//!
//! Each call takes the collection by value and hands back what is left, so a
//! caller can peel off one category after another from the same list:
//!
//! ```rust
//! use rolodex_core::contact::Phone;
//! use rolodex_service::export::extract::{Labeled, extract};
//!
//! let phones = vec![Phone::new("Home", "555-2000"), Phone::new("work", "555-1000")];
//! let (work, phones) = extract(&["work"], phones, Phone::LABEL_MATCH);
//! let (home, phones) = extract(&["home"], phones, Phone::LABEL_MATCH);
//!
//! assert_eq!(work.map(|p| p.display()).as_deref(), Some("555-1000"));
//! assert_eq!(home.map(|p| p.display()).as_deref(), Some("555-2000"));
//! assert!(phones.is_empty());
//! ```

use rolodex_core::contact::{Address, Note, Phone};

/// How item labels are compared with the wanted labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    CaseSensitive,
    /// ASCII case-insensitive.
    CaseInsensitive,
}

impl LabelMatch {
    /// Returns whether `label` is one of `labels` under this policy.
    #[must_use]
    pub fn matches(self, label: &str, labels: &[&str]) -> bool {
        match self {
            Self::CaseSensitive => labels.iter().any(|l| *l == label),
            Self::CaseInsensitive => labels.iter().any(|l| l.eq_ignore_ascii_case(label)),
        }
    }
}

/// An item carrying a label, with the matching policy of its collection.
pub trait Labeled {
    /// Policy used for collections of this item type.
    const LABEL_MATCH: LabelMatch;

    fn label(&self) -> &str;
}

impl Labeled for Phone {
    const LABEL_MATCH: LabelMatch = LabelMatch::CaseInsensitive;

    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for Address {
    const LABEL_MATCH: LabelMatch = LabelMatch::CaseInsensitive;

    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for Note {
    const LABEL_MATCH: LabelMatch = LabelMatch::CaseSensitive;

    fn label(&self) -> &str {
        &self.label
    }
}

/// Removes the first item whose label is in `labels`.
///
/// Returns the item and the remaining items in their original order, or
/// `None` and `items` untouched when nothing matches.
#[must_use]
pub fn extract<T: Labeled>(
    labels: &[&str],
    mut items: Vec<T>,
    matching: LabelMatch,
) -> (Option<T>, Vec<T>) {
    match items
        .iter()
        .position(|item| matching.matches(item.label(), labels))
    {
        Some(index) => {
            let found = items.remove(index);
            tracing::trace!(label = found.label(), index, "Extracted item");
            (Some(found), items)
        }
        None => (None, items),
    }
}

/// Like [`extract`], using the item type's own matching policy and mapping
/// the found item through `project`.
#[must_use]
pub fn extract_with<T: Labeled, U>(
    labels: &[&str],
    items: Vec<T>,
    project: impl FnOnce(T) -> U,
) -> (Option<U>, Vec<T>) {
    let (found, rest) = extract(labels, items, T::LABEL_MATCH);
    (found.map(project), rest)
}
