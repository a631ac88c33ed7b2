use std::collections::HashMap;

use super::identity::{Role, UserIdentity, normalize_email};

/// One employee row as read from the roster file, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub email: String,
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub display_name: String,
    pub role: Role,
}

/// Normalized allow-list keyed by lowercase email.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: HashMap<String, RosterEntry>,
}

impl Roster {
    /// Normalize rows into a roster.
    ///
    /// Rows with a blank email are skipped. Two rows that normalize to the same
    /// email are rejected, since there is no sound way to pick one.
    pub fn from_rows(rows: impl IntoIterator<Item = RosterRow>) -> Result<Self, String> {
        let mut entries = HashMap::new();

        for row in rows {
            let email = normalize_email(&row.email);
            if email.is_empty() {
                continue;
            }

            let entry = RosterEntry {
                display_name: row.name.trim().to_string(),
                role: Role::from_user_id(&row.user_id),
            };

            if entries.insert(email.clone(), entry).is_some() {
                return Err(format!("duplicate roster entry for {}", email));
            }
        }

        Ok(Self { entries })
    }

    /// Look up an already-normalized email.
    pub fn lookup(&self, email: &str) -> Option<UserIdentity> {
        self.entries.get(email).map(|entry| UserIdentity {
            email: email.to_string(),
            display_name: if entry.display_name.is_empty() {
                email.to_string()
            } else {
                entry.display_name.clone()
            },
            role: entry.role,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
