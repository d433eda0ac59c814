//! Student records, their editable fields, and request-body validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, StudentId, ValidationError};

/// One of the three editable fields of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Surname,
    Email,
}

impl Field {
    /// All editable fields, in wire order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Surname, Field::Email];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editable part of a student: every field present and non-empty.
///
/// Create and update both replace all three fields at once, so this is the
/// unit the store writes and the client sends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl StudentFields {
    /// Builds a validated field set. Empty strings are rejected; no trimming
    /// is applied.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let fields = Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        };
        let missing = fields.empty_fields();
        if missing.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::Email => &self.email,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Surname => self.surname = value,
            Field::Email => self.email = value,
        }
    }

    /// Copy with leading/trailing whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// Fields whose value is the empty string.
    #[must_use]
    pub fn empty_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl StudentRecord {
    /// Joins a store-assigned id with its fields.
    #[must_use]
    pub fn from_parts(id: StudentId, fields: StudentFields) -> Self {
        Self {
            id,
            name: fields.name,
            surname: fields.surname,
            email: fields.email,
        }
    }

    /// The editable fields of this record.
    #[must_use]
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
        }
    }
}

/// Raw create/update body as it arrives over the wire.
///
/// Every field is optional here so that a missing field is reported as a
/// validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StudentPayload {
    /// Decodes and validates a JSON request body.
    ///
    /// Anything other than a JSON object whose known fields are strings (or
    /// absent/null) is `Malformed`.
    pub fn from_json(body: &[u8]) -> Result<StudentFields> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ValidationError::Malformed(
                "expected a JSON object with name, surname and email".to_string(),
            ));
        }
        let payload: StudentPayload = serde_json::from_value(value)
            .map_err(|e| ValidationError::Malformed(e.to_string()))?;
        payload.validate()
    }

    /// Checks that all three fields are present and non-empty.
    pub fn validate(self) -> Result<StudentFields> {
        let mut missing = Vec::new();
        let mut take = |field: Field, value: Option<String>| match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(field);
                String::new()
            }
        };
        let name = take(Field::Name, self.name);
        let surname = take(Field::Surname, self.surname);
        let email = take(Field::Email, self.email);

        if missing.is_empty() {
            Ok(StudentFields { name, surname, email })
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn complete_payload_validates() {
        let fields =
            StudentPayload::from_json(br#"{"name":"John","surname":"Doe","email":"john@example.com"}"#)
                .unwrap();
        assert_eq!(fields, StudentFields::new("John", "Doe", "john@example.com").unwrap());
    }

    #[test]
    fn missing_and_empty_fields_are_reported() {
        let err = StudentPayload::from_json(br#"{"name":"","email":"a@b.c"}"#).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![Field::Name, Field::Surname])
        );
    }

    #[test]
    fn null_field_is_missing() {
        let err = StudentPayload::from_json(br#"{"name":"A","surname":null,"email":"a@b.c"}"#)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec![Field::Surname]));
    }

    #[test]
    fn whitespace_is_not_trimmed_by_validation() {
        let fields = StudentPayload::from_json(br#"{"name":" ","surname":"B","email":"c"}"#).unwrap();
        assert_eq!(fields.name, " ");
    }

    #[test]
    fn mistyped_field_is_malformed() {
        let err = StudentPayload::from_json(br#"{"name":1,"surname":"B","email":"c"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
    }

    #[test]
    fn non_object_bodies_are_malformed() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"42",
            b"null",
            b"\"john\"",
            b"not json",
            b"[\"a\",\"b\",\"c\"]",
            b"[]",
        ];
        for body in bodies {
            let err = StudentPayload::from_json(body).unwrap_err();
            assert!(matches!(err, ValidationError::Malformed(_)), "body {body:?}");
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let fields = StudentPayload::from_json(
            br#"{"id":9,"name":"A","surname":"B","email":"c","extra":true}"#,
        )
        .unwrap();
        assert_eq!(fields.email, "c");
    }

    #[test]
    fn trimmed_strips_every_field() {
        let fields = StudentFields {
            name: "  Jon ".into(),
            surname: "\tDoe".into(),
            email: "jon@example.com\n".into(),
        };
        assert_eq!(
            fields.trimmed(),
            StudentFields::new("Jon", "Doe", "jon@example.com").unwrap()
        );
    }

    #[test]
    fn set_and_get_by_field() {
        let mut fields = StudentFields::new("A", "B", "C").unwrap();
        fields.set(Field::Surname, "Z");
        assert_eq!(fields.get(Field::Surname), "Z");
        assert_eq!(fields.get(Field::Name), "A");
    }

    #[test]
    fn record_splits_into_fields() {
        let fields = StudentFields::new("A", "B", "C").unwrap();
        let record = StudentRecord::from_parts(StudentId::new(4), fields.clone());
        assert_eq!(record.id.get(), 4);
        assert_eq!(record.fields(), fields);
    }

    proptest! {
        #[test]
        fn non_empty_triples_always_validate(
            name in ".+", surname in ".+", email in ".+"
        ) {
            let payload = StudentPayload {
                name: Some(name.clone()),
                surname: Some(surname.clone()),
                email: Some(email.clone()),
            };
            let fields = payload.validate().unwrap();
            prop_assert_eq!(fields, StudentFields { name, surname, email });
        }

        #[test]
        fn any_empty_field_is_rejected(
            name in ".*", surname in ".*", email in ".*", blank in 0usize..3
        ) {
            let mut values = [name, surname, email];
            values[blank].clear();
            let [name, surname, email] = values;
            let result = StudentFields::new(name, surname, email);
            prop_assert!(result.is_err());
        }
    }
}
