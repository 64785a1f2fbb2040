use crate::accounts::enums::role::Role;
use crate::accounts::structs::identity::Identity;

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrator
    }

    /// One row of the flat user table, stats trailing.
    pub fn to_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.username,
            self.password_hash,
            self.downloads.to_csv(),
            self.uploads.to_csv()
        )
    }
}
