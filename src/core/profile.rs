use crate::models::profile::{ProfilePatch, UserProfile};

impl UserProfile {
    /// Merge-patch: fields present in `patch` replace the current ones.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}
