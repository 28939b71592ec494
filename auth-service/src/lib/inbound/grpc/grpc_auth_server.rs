use std::sync::Arc;

use auth::AuthorizationGuard;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::get_user_info;
use super::handlers::is_admin;
use super::handlers::login;
use super::handlers::register;
use crate::domain::user::ports::UserServicePort;
use crate::proto::auth_server::Auth;
use crate::proto::GetUserInfoRequest;
use crate::proto::GetUserInfoResponse;
use crate::proto::IsAdminRequest;
use crate::proto::IsAdminResponse;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

/// `auth.Auth` endpoint.
///
/// Login, Register and IsAdmin are open; GetUserInfo authorizes the caller
/// itself because the rest of the service must stay reachable without a token.
pub struct AuthGrpcService<S: UserServicePort> {
    service: Arc<S>,
    guard: AuthorizationGuard,
}

impl<S: UserServicePort> AuthGrpcService<S> {
    pub fn new(service: Arc<S>, guard: AuthorizationGuard) -> Self {
        Self { service, guard }
    }
}

#[tonic::async_trait]
impl<S: UserServicePort> Auth for AuthGrpcService<S> {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login::login(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response = register::register(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let response = is_admin::is_admin(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn get_user_info(
        &self,
        request: Request<GetUserInfoRequest>,
    ) -> Result<Response<GetUserInfoResponse>, Status> {
        let response =
            get_user_info::get_user_info(self.service.as_ref(), &self.guard, request.metadata())
                .await?;
        Ok(Response::new(response))
    }
}
