use auth::AuthorizationGuard;
use tonic::metadata::MetadataMap;
use tonic::Status;

use crate::domain::user::ports::UserServicePort;
use crate::proto::GetUserInfoResponse;

/// Resolve the caller from its own token, then re-read the stored record.
pub async fn get_user_info<S: UserServicePort>(
    service: &S,
    guard: &AuthorizationGuard,
    metadata: &MetadataMap,
) -> Result<GetUserInfoResponse, Status> {
    let caller = guard.authorize(metadata)?;
    let user = service.fresh_identity(&caller).await?;

    Ok(GetUserInfoResponse {
        user_id: user.id.0,
        email: user.email.to_string(),
        role: user.role.to_string(),
        date_registered: user.created_at.to_rfc3339(),
    })
}
