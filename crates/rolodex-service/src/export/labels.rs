//! Label sets recognized in source records, and the relabeling of notes
//! that end up in the description.
//!
//! Phone and address labels are compared without regard to case. Note labels
//! are compared exactly, so each set lists the spellings seen in the wild.

use rolodex_rfc::rfc::ldif::schema;

/// Phone attributes in extraction order, with the labels each one claims.
pub const PHONE_ATTRIBUTES: [(&str, &[&str]); 5] = [
    (schema::WORK_PHONE, &["work", "office"]),
    (schema::HOME_PHONE, &["home"]),
    (schema::FAX, &["fax"]),
    (schema::PAGER, &["pager"]),
    (schema::MOBILE, &["mobile", "cell"]),
];

pub const HOME_ADDRESS: &[&str] = &["home"];
pub const WORK_ADDRESS: &[&str] = &["work", "office"];

/// Note-backed attributes in extraction order.
pub const NOTE_ATTRIBUTES: [(&str, &[&str]); 4] = [
    (schema::AIM_ID, &["aim", "AIM", "Aim", "aim-id", "AIM-ID"]),
    (schema::TITLE, &["title", "Title", "TITLE", "job-title"]),
    (
        schema::DEPARTMENT,
        &["department", "Department", "dept", "Dept", "group", "Group"],
    ),
    (
        schema::HOME_URL,
        &[
            "www", "WWW", "web", "Web", "url", "URL", "homepage", "Homepage", "HomePage",
            "home-page",
        ],
    ),
];

/// Display labels for leftover notes. `None` hides the note.
const NOTE_RENAMES: &[(&str, Option<&str>)] = &[
    ("notes", Some("Notes")),
    ("mail-alias", Some("Mail Alias")),
    ("birthday", Some("Birthday")),
    ("anniversary", Some("Anniversary")),
    ("nick", Some("Nickname")),
    ("creation-date", None),
    ("timestamp", None),
];

/// Returns the label a leftover note is shown under, or `None` when the note
/// is bookkeeping that should not be exported.
#[must_use]
pub fn note_display_label(label: &str) -> Option<&str> {
    match NOTE_RENAMES.iter().find(|(from, _)| *from == label) {
        Some((_, renamed)) => *renamed,
        None => Some(label),
    }
}
