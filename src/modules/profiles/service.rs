use tracing::instrument;

use staffee_auth::Role;
use staffee_config::MediaConfig;
use staffee_core::AppError;
use staffee_models::profiles::{CandidateProfile, EmployerProfile, Profile, ProfileCompletion};

use crate::middleware::auth::SessionUser;
use crate::state::AppState;
use crate::utils::backend::upstream;
use crate::validator::parse_validated;

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(state))]
    pub async fn get_profile(state: &AppState, user: &SessionUser) -> Result<Profile, AppError> {
        let profile = match user.role() {
            Role::Candidate => Profile::Candidate(
                state
                    .backend
                    .candidate_profile(user.user_id())
                    .await
                    .map_err(upstream)?,
            ),
            Role::Employer => Profile::Employer(
                state
                    .backend
                    .employer_profile(user.user_id())
                    .await
                    .map_err(upstream)?,
            ),
        };

        Ok(Self::with_media_urls(profile, &state.media_config))
    }

    /// The body's shape is chosen by the session role.
    #[instrument(skip(state, body))]
    pub async fn update_profile(
        state: &AppState,
        user: &SessionUser,
        body: &[u8],
    ) -> Result<Profile, AppError> {
        let profile = match user.role() {
            Role::Candidate => {
                let dto: CandidateProfile = parse_validated(body)?;
                Profile::Candidate(
                    state
                        .backend
                        .update_candidate_profile(user.user_id(), &dto)
                        .await
                        .map_err(upstream)?,
                )
            }
            Role::Employer => {
                let dto: EmployerProfile = parse_validated(body)?;
                Profile::Employer(
                    state
                        .backend
                        .update_employer_profile(user.user_id(), &dto)
                        .await
                        .map_err(upstream)?,
                )
            }
        };

        Ok(Self::with_media_urls(profile, &state.media_config))
    }

    pub async fn completion(
        state: &AppState,
        user: &SessionUser,
    ) -> Result<ProfileCompletion, AppError> {
        Ok(Self::get_profile(state, user).await?.completion())
    }

    /// Replaces stored image ids with delivery URLs.
    pub fn with_media_urls(profile: Profile, media: &MediaConfig) -> Profile {
        let to_url = |id: Option<String>| {
            id.filter(|id| !id.trim().is_empty())
                .map(|id| media.image_url(&id))
        };

        match profile {
            Profile::Candidate(mut candidate) => {
                candidate.photo = to_url(candidate.photo.take());
                Profile::Candidate(candidate)
            }
            Profile::Employer(mut employer) => {
                employer.logo = to_url(employer.logo.take());
                Profile::Employer(employer)
            }
        }
    }
}
