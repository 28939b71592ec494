use std::sync::Arc;

use async_trait::async_trait;
use auth::ClaimsIdentity;

use super::errors::ContentError;
use super::models::Article;
use super::models::ArticleId;
use super::models::Widget;
use super::models::WidgetDescription;
use super::models::WidgetId;
use super::ports::ArticleRepository;
use super::ports::ContentServicePort;
use super::ports::WidgetRepository;

/// Concrete implementation of ContentServicePort.
///
/// Authorization decisions use the role carried in the caller's token.
/// Generic over repositories for testability.
pub struct ContentService<WR, AR>
where
    WR: WidgetRepository,
    AR: ArticleRepository,
{
    widget_repository: Arc<WR>,
    article_repository: Arc<AR>,
}

impl<WR, AR> ContentService<WR, AR>
where
    WR: WidgetRepository,
    AR: ArticleRepository,
{
    pub fn new(widget_repository: Arc<WR>, article_repository: Arc<AR>) -> Self {
        Self {
            widget_repository,
            article_repository,
        }
    }
}

#[async_trait]
impl<WR, AR> ContentServicePort for ContentService<WR, AR>
where
    WR: WidgetRepository,
    AR: ArticleRepository,
{
    fn hello(&self, caller: &ClaimsIdentity) -> String {
        format!(
            "Hello {} ({})! I am the content service. You have role {}",
            caller.email, caller.id, caller.role
        )
    }

    async fn all_widgets(&self) -> Result<Vec<Widget>, ContentError> {
        self.widget_repository.list_all().await
    }

    async fn user_widgets(&self, caller: &ClaimsIdentity) -> Result<Vec<Widget>, ContentError> {
        self.widget_repository.list_for_user(caller.id).await
    }

    async fn create_widget(
        &self,
        caller: &ClaimsIdentity,
        description: WidgetDescription,
    ) -> Result<Widget, ContentError> {
        if !caller.role.is_admin() {
            tracing::warn!(user_id = caller.id, role = %caller.role, "Widget creation denied");
            return Err(ContentError::Forbidden {
                user_id: caller.id,
                action: "create widgets",
            });
        }

        let widget = self.widget_repository.create(description).await?;
        tracing::info!(widget_id = %widget.id, user_id = caller.id, "Widget created");

        Ok(widget)
    }

    async fn add_widget_for_user(
        &self,
        caller: &ClaimsIdentity,
        widget_id: WidgetId,
    ) -> Result<(), ContentError> {
        self.widget_repository
            .attach_to_user(caller.id, widget_id)
            .await
    }

    async fn remove_widget_for_user(
        &self,
        caller: &ClaimsIdentity,
        widget_id: WidgetId,
    ) -> Result<(), ContentError> {
        if self
            .widget_repository
            .detach_from_user(caller.id, widget_id)
            .await?
        {
            Ok(())
        } else {
            Err(ContentError::NotAttached {
                user_id: caller.id,
                item: format!("Widget {}", widget_id),
            })
        }
    }

    async fn all_articles(&self) -> Result<Vec<Article>, ContentError> {
        self.article_repository.list_all().await
    }

    async fn user_articles(&self, caller: &ClaimsIdentity) -> Result<Vec<Article>, ContentError> {
        self.article_repository.list_for_user(caller.id).await
    }

    async fn add_article_for_user(
        &self,
        caller: &ClaimsIdentity,
        article_id: ArticleId,
    ) -> Result<(), ContentError> {
        self.article_repository
            .attach_to_user(caller.id, article_id)
            .await
    }

    async fn remove_article_for_user(
        &self,
        caller: &ClaimsIdentity,
        article_id: ArticleId,
    ) -> Result<(), ContentError> {
        if self
            .article_repository
            .detach_from_user(caller.id, article_id)
            .await?
        {
            Ok(())
        } else {
            Err(ContentError::NotAttached {
                user_id: caller.id,
                item: format!("Article {}", article_id),
            })
        }
    }
}
