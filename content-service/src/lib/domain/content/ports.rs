use async_trait::async_trait;
use auth::ClaimsIdentity;

use super::errors::ContentError;
use super::models::Article;
use super::models::ArticleId;
use super::models::Widget;
use super::models::WidgetDescription;
use super::models::WidgetId;

/// Port for content domain service operations.
///
/// The caller is always the claims-only identity resolved by the
/// authorization guard.
#[async_trait]
pub trait ContentServicePort: Send + Sync + 'static {
    /// Greeting naming the caller's email, id and role.
    fn hello(&self, caller: &ClaimsIdentity) -> String;

    /// List the whole widget catalogue.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn all_widgets(&self) -> Result<Vec<Widget>, ContentError>;

    /// List widgets attached to the caller.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn user_widgets(&self, caller: &ClaimsIdentity) -> Result<Vec<Widget>, ContentError>;

    /// Add a widget to the catalogue.
    ///
    /// # Errors
    /// * `Forbidden` - Caller's token does not carry the admin role
    /// * `Database` - Database operation failed
    async fn create_widget(
        &self,
        caller: &ClaimsIdentity,
        description: WidgetDescription,
    ) -> Result<Widget, ContentError>;

    /// Attach a catalogue widget to the caller. Attaching twice is a no-op.
    ///
    /// # Errors
    /// * `WidgetNotFound` - No widget with this id
    /// * `Database` - Database operation failed
    async fn add_widget_for_user(
        &self,
        caller: &ClaimsIdentity,
        widget_id: WidgetId,
    ) -> Result<(), ContentError>;

    /// Detach a widget from the caller.
    ///
    /// # Errors
    /// * `NotAttached` - Widget was not attached to the caller
    /// * `Database` - Database operation failed
    async fn remove_widget_for_user(
        &self,
        caller: &ClaimsIdentity,
        widget_id: WidgetId,
    ) -> Result<(), ContentError>;

    /// List the whole article catalogue.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn all_articles(&self) -> Result<Vec<Article>, ContentError>;

    /// List articles attached to the caller.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn user_articles(&self, caller: &ClaimsIdentity) -> Result<Vec<Article>, ContentError>;

    /// Attach a catalogue article to the caller. Attaching twice is a no-op.
    ///
    /// # Errors
    /// * `ArticleNotFound` - No article with this id
    /// * `Database` - Database operation failed
    async fn add_article_for_user(
        &self,
        caller: &ClaimsIdentity,
        article_id: ArticleId,
    ) -> Result<(), ContentError>;

    /// Detach an article from the caller.
    ///
    /// # Errors
    /// * `NotAttached` - Article was not attached to the caller
    /// * `Database` - Database operation failed
    async fn remove_article_for_user(
        &self,
        caller: &ClaimsIdentity,
        article_id: ArticleId,
    ) -> Result<(), ContentError>;
}

/// Persistence operations for widgets and their user attachments.
#[async_trait]
pub trait WidgetRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Widget>, ContentError>;

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Widget>, ContentError>;

    /// Insert a widget; the store assigns the id.
    async fn create(&self, description: WidgetDescription) -> Result<Widget, ContentError>;

    /// Link a widget to a user.
    ///
    /// # Errors
    /// * `WidgetNotFound` - No widget with this id
    /// * `Database` - Database operation failed
    async fn attach_to_user(&self, user_id: i64, widget_id: WidgetId)
        -> Result<(), ContentError>;

    /// Remove a link.
    ///
    /// # Returns
    /// Whether a link existed
    async fn detach_from_user(
        &self,
        user_id: i64,
        widget_id: WidgetId,
    ) -> Result<bool, ContentError>;
}

/// Persistence operations for articles and their user attachments.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Article>, ContentError>;

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Article>, ContentError>;

    /// Link an article to a user.
    ///
    /// # Errors
    /// * `ArticleNotFound` - No article with this id
    /// * `Database` - Database operation failed
    async fn attach_to_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<(), ContentError>;

    /// Remove a link.
    ///
    /// # Returns
    /// Whether a link existed
    async fn detach_from_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<bool, ContentError>;
}
