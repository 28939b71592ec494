use tonic::Status;

use crate::domain::user::models::Credentials;
use crate::domain::user::ports::UserServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S: UserServicePort>(
    service: &S,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }
    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }

    let credentials = Credentials::new(request.email, request.password)?;
    let user_id = service.register(credentials).await?;

    Ok(RegisterResponse { user_id: user_id.0 })
}
