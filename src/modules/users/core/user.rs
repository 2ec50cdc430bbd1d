use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A registry entry. `id` is supplied by the caller and doubles as the store key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lenient decoder for request bodies.
///
/// Keys match case-insensitively, unknown keys are skipped, and a missing or
/// `null` field leaves the value empty. A top-level `null` is an empty user.
/// Non-string field values and anything other than an object are rejected.
impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Option::<UserFields>::deserialize(deserializer)?;
        Ok(fields.map(|f| f.0).unwrap_or_default())
    }
}

struct UserFields(User);

impl<'de> Deserialize<'de> for UserFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UserFieldsVisitor)
    }
}

struct UserFieldsVisitor;

impl<'de> Visitor<'de> for UserFieldsVisitor {
    type Value = UserFields;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut user = User::default();
        while let Some(key) = map.next_key::<String>()? {
            // Later keys win when the same field appears twice.
            let slot = if key.eq_ignore_ascii_case("id") {
                &mut user.id
            } else if key.eq_ignore_ascii_case("name") {
                &mut user.name
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }
        Ok(UserFields(user))
    }
}
