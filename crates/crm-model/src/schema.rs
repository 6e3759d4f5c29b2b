//! The fixed contact-column vocabulary.
//!
//! Column names follow the Dataverse contact entity attribute names as they
//! appear in exported CSV files. Canonicalized columns get a paired Boolean
//! indicator column; the pairing is fixed and part of the output contract:
//!
//! | column                | indicator                     |
//! |-----------------------|-------------------------------|
//! | internalemailaddress  | email_invalid                 |
//! | mobilephone           | mobilephone_invalid           |
//! | address1_telephone1   | address1_telephone1_invalid   |
//! | address1_postalcode   | postal_invalid                |
//!
//! Date columns are retyped in place and carry no indicator.

/// Contact email address column.
pub const EMAIL_COLUMN: &str = "internalemailaddress";

/// Phone columns canonicalized to Japanese domestic format.
pub const PHONE_COLUMNS: [&str; 2] = ["mobilephone", "address1_telephone1"];

/// Japanese postal code column.
pub const POSTAL_COLUMN: &str = "address1_postalcode";

/// Date columns retyped to a typed date (null when unparseable).
pub const DATE_COLUMNS: [&str; 2] = ["birthdate", "modifiedon"];

/// Suffix shared by every invalidity-indicator column.
pub const INVALID_SUFFIX: &str = "_invalid";

/// Indicator column paired with [`EMAIL_COLUMN`].
pub const EMAIL_INVALID_COLUMN: &str = "email_invalid";

/// Indicator column paired with [`POSTAL_COLUMN`].
pub const POSTAL_INVALID_COLUMN: &str = "postal_invalid";

/// Default duplicate-detection key: the Dataverse contact primary key.
pub const DEFAULT_DUP_KEY: &str = "contactid";

/// The canonicalization rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Lower-cased, pattern-validated email address.
    Email,
    /// Japanese phone number, `XXX-XXX-XXXX` / `XXX-XXXX-XXXX`.
    PhoneJp,
    /// Japanese postal code, `XXX-XXXX`.
    PostalJp,
    /// Multi-format date, retyped in place.
    Date,
}

impl FieldKind {
    /// Short human-readable rule name for listings.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::PhoneJp => "phone (JP)",
            FieldKind::PostalJp => "postal code (JP)",
            FieldKind::Date => "date",
        }
    }
}

/// A column in the canonicalization set.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Source column name in the contact export.
    pub column: &'static str,
    /// Which canonicalizer applies.
    pub kind: FieldKind,
    /// Paired indicator column, if the rule validates.
    pub invalid_column: Option<&'static str>,
}

/// Every canonicalized column, in application order.
pub const CANONICAL_FIELDS: [FieldSpec; 6] = [
    FieldSpec {
        column: "internalemailaddress",
        kind: FieldKind::Email,
        invalid_column: Some("email_invalid"),
    },
    FieldSpec {
        column: "mobilephone",
        kind: FieldKind::PhoneJp,
        invalid_column: Some("mobilephone_invalid"),
    },
    FieldSpec {
        column: "address1_telephone1",
        kind: FieldKind::PhoneJp,
        invalid_column: Some("address1_telephone1_invalid"),
    },
    FieldSpec {
        column: "address1_postalcode",
        kind: FieldKind::PostalJp,
        invalid_column: Some("postal_invalid"),
    },
    FieldSpec {
        column: "birthdate",
        kind: FieldKind::Date,
        invalid_column: None,
    },
    FieldSpec {
        column: "modifiedon",
        kind: FieldKind::Date,
        invalid_column: None,
    },
];
