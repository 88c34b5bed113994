//! Column names of a contact export.

pub const FIRST_NAME: &str = "First Name";
pub const MIDDLE_NAME: &str = "Middle Name";
pub const LAST_NAME: &str = "Last Name";
pub const PHONETIC_FIRST_NAME: &str = "Phonetic First Name";
pub const PHONETIC_MIDDLE_NAME: &str = "Phonetic Middle Name";
pub const PHONETIC_LAST_NAME: &str = "Phonetic Last Name";
pub const NAME_PREFIX: &str = "Name Prefix";
pub const NAME_SUFFIX: &str = "Name Suffix";
pub const NICKNAME: &str = "Nickname";
pub const FILE_AS: &str = "File As";
pub const ORGANIZATION_NAME: &str = "Organization Name";
pub const ORGANIZATION_TITLE: &str = "Organization Title";

/// Candidate fields in selection priority order.
pub const CANDIDATE_FIELDS: &[&str] = &[
    FIRST_NAME, MIDDLE_NAME, LAST_NAME, NICKNAME, FILE_AS,
    PHONETIC_FIRST_NAME, PHONETIC_MIDDLE_NAME, PHONETIC_LAST_NAME,
    NAME_PREFIX, NAME_SUFFIX, ORGANIZATION_NAME, ORGANIZATION_TITLE,
];

/// Fields joined together when no candidate yields a name.
pub const FALLBACK_FIELDS: &[&str] = &[
    FIRST_NAME, MIDDLE_NAME, LAST_NAME,
    PHONETIC_FIRST_NAME, PHONETIC_MIDDLE_NAME, PHONETIC_LAST_NAME,
    NAME_PREFIX, NAME_SUFFIX, NICKNAME, FILE_AS,
];

/// Fields blanked once the primary field holds the identifier.
pub const SUBSIDIARY_FIELDS: &[&str] = &[
    MIDDLE_NAME, LAST_NAME,
    PHONETIC_FIRST_NAME, PHONETIC_MIDDLE_NAME, PHONETIC_LAST_NAME,
    NAME_PREFIX, NAME_SUFFIX, NICKNAME, FILE_AS,
];
