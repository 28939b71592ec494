use tonic::Status;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Article;
use crate::domain::content::models::Widget;

pub mod articles;
pub mod hello_user;
pub mod widgets;

impl From<Widget> for crate::proto::Widget {
    fn from(widget: Widget) -> Self {
        Self {
            id: widget.id.0,
            description: widget.description,
        }
    }
}

impl From<Article> for crate::proto::Article {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.0,
            header: article.header,
        }
    }
}

impl From<ContentError> for Status {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::InvalidId(_) | ContentError::InvalidDescription(_) => {
                Status::invalid_argument(err.to_string())
            }
            ContentError::Forbidden { .. } => Status::permission_denied(err.to_string()),
            ContentError::WidgetNotFound(_) | ContentError::ArticleNotFound(_) => {
                Status::not_found(err.to_string())
            }
            ContentError::NotAttached { .. } => Status::failed_precondition(err.to_string()),
            ContentError::Database { .. } => {
                tracing::error!(error = %err, "Request failed");
                Status::internal("internal error")
            }
        }
    }
}
