use serde::{Deserialize, Serialize};

/// User entity as persisted in the flat-file collection
///
/// # Invariants
/// - `id` is unique across the stored collection
/// - `id` never changes once assigned
/// - `created_at` is set at creation and never touched by update or patch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub age: i64,
    pub height: f64,
    pub active: bool,
    pub created_at: String,
}

/// Mutable user data supplied on creation and full replacement
#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub age: i64,
    pub height: f64,
    pub active: bool,
}

/// Partial update payload
///
/// Only fields that are `Some` overwrite the stored entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub lastname: Option<String>,
    pub age: Option<i64>,
}

impl User {
    /// Builds a new user from its identity and mutable fields
    pub fn new(id: u64, created_at: impl Into<String>, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            lastname: fields.lastname,
            email: fields.email,
            age: fields.age,
            height: fields.height,
            active: fields.active,
            created_at: created_at.into(),
        }
    }

    /// Replaces every mutable field, keeping `id` and `created_at`
    pub fn replace_fields(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.lastname = fields.lastname;
        self.email = fields.email;
        self.age = fields.age;
        self.height = fields.height;
        self.active = fields.active;
    }

    /// Applies the fields present in `patch`
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(lastname) = patch.lastname {
            self.lastname = lastname;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

impl UserPatch {
    /// Returns true when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.lastname.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> UserFields {
        UserFields {
            name: name.to_string(),
            lastname: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            age: 28,
            height: 1.7,
            active: true,
        }
    }

    #[test]
    fn replace_fields_keeps_identity() {
        let mut user = User::new(7, "2019-02-01 00:00:00", fields("Before"));

        user.replace_fields(UserFields {
            active: false,
            ..fields("After")
        });

        assert_eq!(user.id, 7);
        assert_eq!(user.created_at, "2019-02-01 00:00:00");
        assert_eq!(user.name, "After");
        assert!(!user.active);
    }

    #[test]
    fn apply_patch_only_touches_present_fields() {
        let mut user = User::new(1, "2019-02-01 00:00:00", fields("Jane"));

        user.apply_patch(UserPatch {
            lastname: Some("X".to_string()),
            age: None,
        });

        assert_eq!(user.lastname, "X");
        assert_eq!(user.age, 28);
        assert_eq!(user.name, "Jane");
    }

    #[test]
    fn apply_patch_can_set_empty_and_zero() {
        let mut user = User::new(1, "2019-02-01 00:00:00", fields("Jane"));

        user.apply_patch(UserPatch {
            lastname: Some(String::new()),
            age: Some(0),
        });

        assert_eq!(user.lastname, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn empty_patch() {
        assert!(UserPatch::default().is_empty());
        assert!(!UserPatch {
            lastname: None,
            age: Some(3)
        }
        .is_empty());
    }

    #[test]
    fn user_json_field_names() {
        let user = User::new(2, "2024-04-12 11:04:19", fields("Gabriel"));
        let value = serde_json::to_value(&user).unwrap();

        for key in [
            "id", "name", "lastname", "email", "age", "height", "active", "created_at",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
