use tonic::Status;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;
use crate::user::errors::UserError;

pub async fn is_admin<S: UserServicePort>(
    service: &S,
    request: IsAdminRequest,
) -> Result<IsAdminResponse, Status> {
    if request.user_id == 0 {
        return Err(Status::invalid_argument("user_id is required"));
    }

    let user_id = UserId::new(request.user_id).map_err(UserError::from)?;
    let is_admin = service.is_admin(user_id).await?;

    Ok(IsAdminResponse { is_admin })
}
