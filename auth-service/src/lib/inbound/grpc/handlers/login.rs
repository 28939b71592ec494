use tonic::Status;

use crate::domain::user::models::Credentials;
use crate::domain::user::ports::UserServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S: UserServicePort>(
    service: &S,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    if request.email.is_empty() {
        return Err(Status::invalid_argument("email is required"));
    }
    if request.password.is_empty() {
        return Err(Status::invalid_argument("password is required"));
    }

    let credentials = Credentials::new(request.email, request.password)?;
    let token = service.login(credentials, request.app_id).await?;

    Ok(LoginResponse { token })
}
