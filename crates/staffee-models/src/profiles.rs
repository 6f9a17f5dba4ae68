//! Candidate and employer profiles.
//!
//! Profiles live in the backend. The gateway only scores how complete a
//! profile is so dashboards can nudge users to fill it in.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 150))]
    pub headline: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[validate(url(message = "Resume must be a URL"))]
    pub resume_url: Option<String>,
    /// Image host id of the profile photo.
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(max = 150))]
    pub company_name: Option<String>,
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(url(message = "Website must be a URL"))]
    pub website: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    /// Image host id of the company logo.
    pub logo: Option<String>,
}

/// Profile of either role, as returned on `/api/profile`. Incoming updates
/// are decoded by the session's role instead, since every field is optional.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Profile {
    Candidate(CandidateProfile),
    Employer(EmployerProfile),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileCompletion {
    /// 0..=100, rounded down.
    pub percentage: u8,
    pub missing: Vec<String>,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn score(fields: &[(&str, bool)]) -> ProfileCompletion {
    let total = fields.len();
    let done = fields.iter().filter(|(_, ok)| *ok).count();
    let missing = fields
        .iter()
        .filter(|(_, ok)| !*ok)
        .map(|(name, _)| name.to_string())
        .collect();

    let percentage = if total == 0 { 100 } else { (done * 100 / total) as u8 };

    ProfileCompletion { percentage, missing }
}

impl CandidateProfile {
    pub fn completion(&self) -> ProfileCompletion {
        score(&[
            ("name", filled(&self.name)),
            ("email", filled(&self.email)),
            ("phone", filled(&self.phone)),
            ("location", filled(&self.location)),
            ("headline", filled(&self.headline)),
            ("bio", filled(&self.bio)),
            ("skills", !self.skills.is_empty()),
            ("experience", !self.experience.is_empty()),
            ("education", !self.education.is_empty()),
            ("resumeUrl", filled(&self.resume_url)),
            ("photo", filled(&self.photo)),
        ])
    }
}

impl EmployerProfile {
    pub fn completion(&self) -> ProfileCompletion {
        score(&[
            ("companyName", filled(&self.company_name)),
            ("email", filled(&self.email)),
            ("phone", filled(&self.phone)),
            ("website", filled(&self.website)),
            ("industry", filled(&self.industry)),
            ("companySize", filled(&self.company_size)),
            ("location", filled(&self.location)),
            ("description", filled(&self.description)),
            ("logo", filled(&self.logo)),
        ])
    }
}

impl Profile {
    pub fn completion(&self) -> ProfileCompletion {
        match self {
            Profile::Candidate(profile) => profile.completion(),
            Profile::Employer(profile) => profile.completion(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_empty_candidate_profile_is_zero() {
        let completion = CandidateProfile::default().completion();
        assert_eq!(completion.percentage, 0);
        assert_eq!(completion.missing.len(), 11);
    }

    #[test]
    fn test_full_candidate_profile_is_hundred() {
        let profile = CandidateProfile {
            id: some("c1"),
            name: some("Jane Doe"),
            email: some("jane@example.com"),
            phone: some("+2348000000000"),
            location: some("Lagos"),
            headline: some("Backend engineer"),
            bio: some("I build APIs."),
            skills: vec!["rust".to_string()],
            experience: vec![Experience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }],
            education: vec![Education {
                institution: "Unilag".to_string(),
                ..Default::default()
            }],
            certifications: vec![],
            resume_url: some("https://example.com/cv.pdf"),
            photo: some("avatars/jane"),
        };

        let completion = profile.completion();
        assert_eq!(completion.percentage, 100);
        assert!(completion.missing.is_empty());
    }

    #[test]
    fn test_blank_strings_do_not_count() {
        let profile = CandidateProfile {
            name: some("   "),
            email: some("jane@example.com"),
            ..Default::default()
        };

        let completion = profile.completion();
        // 1 of 11 fields, rounded down.
        assert_eq!(completion.percentage, 9);
        assert!(completion.missing.contains(&"name".to_string()));
        assert!(!completion.missing.contains(&"email".to_string()));
    }

    #[test]
    fn test_employer_partial_completion() {
        let profile = EmployerProfile {
            company_name: some("Acme"),
            email: some("hr@acme.com"),
            website: some("https://acme.com"),
            ..Default::default()
        };

        let completion = profile.completion();
        assert_eq!(completion.percentage, 33);
        assert_eq!(completion.missing.len(), 6);
    }

    #[test]
    fn test_profile_enum_dispatches() {
        let profile = Profile::Employer(EmployerProfile {
            company_name: some("Acme"),
            ..Default::default()
        });
        assert_eq!(profile.completion().percentage, 11);
    }
}
