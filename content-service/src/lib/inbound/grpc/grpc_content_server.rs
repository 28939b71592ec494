use std::sync::Arc;

use auth::ClaimsIdentityExt;
use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::articles;
use super::handlers::hello_user;
use super::handlers::widgets;
use crate::domain::content::ports::ContentServicePort;
use crate::proto::content_server::Content;
use crate::proto::AddArticleForUserRequest;
use crate::proto::AddArticleForUserResponse;
use crate::proto::AddWidgetForUserRequest;
use crate::proto::AddWidgetForUserResponse;
use crate::proto::CreateWidgetRequest;
use crate::proto::CreateWidgetResponse;
use crate::proto::DeleteArticleForUserRequest;
use crate::proto::DeleteArticleForUserResponse;
use crate::proto::DeleteWidgetForUserRequest;
use crate::proto::DeleteWidgetForUserResponse;
use crate::proto::GetArticlesRequest;
use crate::proto::GetArticlesResponse;
use crate::proto::GetWidgetsRequest;
use crate::proto::GetWidgetsResponse;
use crate::proto::HelloUserRequest;
use crate::proto::HelloUserResponse;

/// `content.Content` endpoint.
///
/// Mounted behind the authorization guard interceptor, so every call
/// carries the caller's identity in its extensions.
pub struct ContentGrpcService<S: ContentServicePort> {
    service: Arc<S>,
}

impl<S: ContentServicePort> ContentGrpcService<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl<S: ContentServicePort> Content for ContentGrpcService<S> {
    async fn hello_user(
        &self,
        request: Request<HelloUserRequest>,
    ) -> Result<Response<HelloUserResponse>, Status> {
        let caller = request.claims_identity()?;
        Ok(Response::new(hello_user::hello_user(
            self.service.as_ref(),
            caller,
        )))
    }

    async fn get_all_widgets(
        &self,
        request: Request<GetWidgetsRequest>,
    ) -> Result<Response<GetWidgetsResponse>, Status> {
        request.claims_identity()?;
        let response = widgets::get_all_widgets(self.service.as_ref()).await?;
        Ok(Response::new(response))
    }

    async fn get_user_widgets(
        &self,
        request: Request<GetWidgetsRequest>,
    ) -> Result<Response<GetWidgetsResponse>, Status> {
        let caller = request.claims_identity()?;
        let response = widgets::get_user_widgets(self.service.as_ref(), caller).await?;
        Ok(Response::new(response))
    }

    async fn create_widget(
        &self,
        request: Request<CreateWidgetRequest>,
    ) -> Result<Response<CreateWidgetResponse>, Status> {
        let caller = request.claims_identity()?.clone();
        let response =
            widgets::create_widget(self.service.as_ref(), &caller, request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn add_widget_for_user(
        &self,
        request: Request<AddWidgetForUserRequest>,
    ) -> Result<Response<AddWidgetForUserResponse>, Status> {
        let caller = request.claims_identity()?.clone();
        let response =
            widgets::add_widget_for_user(self.service.as_ref(), &caller, request.into_inner())
                .await?;
        Ok(Response::new(response))
    }

    async fn delete_widget_for_user(
        &self,
        request: Request<DeleteWidgetForUserRequest>,
    ) -> Result<Response<DeleteWidgetForUserResponse>, Status> {
        let caller = request.claims_identity()?.clone();
        let response =
            widgets::delete_widget_for_user(self.service.as_ref(), &caller, request.into_inner())
                .await?;
        Ok(Response::new(response))
    }

    async fn get_all_articles(
        &self,
        request: Request<GetArticlesRequest>,
    ) -> Result<Response<GetArticlesResponse>, Status> {
        request.claims_identity()?;
        let response = articles::get_all_articles(self.service.as_ref()).await?;
        Ok(Response::new(response))
    }

    async fn get_users_articles(
        &self,
        request: Request<GetArticlesRequest>,
    ) -> Result<Response<GetArticlesResponse>, Status> {
        let caller = request.claims_identity()?;
        let response = articles::get_users_articles(self.service.as_ref(), caller).await?;
        Ok(Response::new(response))
    }

    async fn add_article_for_user(
        &self,
        request: Request<AddArticleForUserRequest>,
    ) -> Result<Response<AddArticleForUserResponse>, Status> {
        let caller = request.claims_identity()?.clone();
        let response =
            articles::add_article_for_user(self.service.as_ref(), &caller, request.into_inner())
                .await?;
        Ok(Response::new(response))
    }

    async fn delete_article_for_user(
        &self,
        request: Request<DeleteArticleForUserRequest>,
    ) -> Result<Response<DeleteArticleForUserResponse>, Status> {
        let caller = request.claims_identity()?.clone();
        let response = articles::delete_article_for_user(
            self.service.as_ref(),
            &caller,
            request.into_inner(),
        )
        .await?;
        Ok(Response::new(response))
    }
}
