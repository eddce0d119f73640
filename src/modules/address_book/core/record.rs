use serde::{Deserialize, Serialize};

pub const SENTINEL_KEY: u64 = 0;
pub const SENTINEL_FIRST_NAME: &str = "-first-";
const SENTINEL_LAST_NAME: &str = "-last-";
const SENTINEL_EMAIL: &str = "-email-";
const SENTINEL_PHONE: &str = "-phone-";

/// A person in the address book. Empty fields are left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, alias = "uniq_id", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, alias = "email_addr", skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, alias = "phone_numb", skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

impl Record {
    /// The reserved record kept at key 0. Its id carries the last assigned identifier.
    pub fn sentinel(last_id: u64) -> Self {
        Self {
            id: last_id.to_string(),
            first_name: SENTINEL_FIRST_NAME.to_string(),
            last_name: SENTINEL_LAST_NAME.to_string(),
            email: SENTINEL_EMAIL.to_string(),
            phone: SENTINEL_PHONE.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.first_name == SENTINEL_FIRST_NAME
    }

    /// Copies the candidate's fields under a freshly assigned identifier.
    pub fn stamped(candidate: Record, id: u64) -> Self {
        Self {
            id: id.to_string(),
            ..candidate
        }
    }

    /// Replaces every field the patch supplies with a non-empty value. The id never changes.
    pub fn apply_patch(&mut self, patch: Record) {
        overwrite_if_present(&mut self.first_name, patch.first_name);
        overwrite_if_present(&mut self.last_name, patch.last_name);
        overwrite_if_present(&mut self.email, patch.email);
        overwrite_if_present(&mut self.phone, patch.phone);
    }
}

fn overwrite_if_present(field: &mut String, value: String) {
    if !value.is_empty() {
        *field = value;
    }
}
