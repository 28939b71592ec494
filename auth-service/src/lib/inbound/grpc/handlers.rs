use tonic::Status;

use crate::user::errors::UserError;

pub mod get_user_info;
pub mod is_admin;
pub mod login;
pub mod register;

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_) | UserError::InvalidEmail(_) | UserError::EmptyPassword => {
                Status::invalid_argument(err.to_string())
            }
            UserError::InvalidCredentials => Status::unauthenticated("invalid credentials"),
            UserError::UserAlreadyExists(_) => Status::already_exists("user already exists"),
            UserError::UserNotFound(_) => Status::not_found("user not found"),
            UserError::Token(e) => e.into(),
            UserError::Password(_) | UserError::Database { .. } | UserError::Unknown(_) => {
                tracing::error!(error = %err, "Request failed");
                Status::internal("internal error")
            }
        }
    }
}
