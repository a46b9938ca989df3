use serde::{Deserialize, Serialize};

/// The three form fields every submission strategy fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
}

/// Applicant data injected into application forms. An explicit orchestrator
/// input — never read from module-level constants at fill time.
///
/// The defaults are placeholder values, not a real candidate's data; override
/// them via the `APPLICANT_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl ApplicantProfile {
    pub fn value_of(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
        }
    }
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "1234567890".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_placeholder_data() {
        let profile = ApplicantProfile::default();
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.email, "john.doe@example.com");
        assert_eq!(profile.phone, "1234567890");
    }

    #[test]
    fn test_value_of_maps_every_field() {
        let profile = ApplicantProfile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234".to_string(),
        };
        assert_eq!(profile.value_of(ProfileField::FullName), "Ada Lovelace");
        assert_eq!(profile.value_of(ProfileField::Email), "ada@example.com");
        assert_eq!(profile.value_of(ProfileField::Phone), "5551234");
    }
}
