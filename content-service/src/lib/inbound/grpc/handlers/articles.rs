use auth::ClaimsIdentity;
use tonic::Status;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::ArticleId;
use crate::domain::content::ports::ContentServicePort;
use crate::proto::AddArticleForUserRequest;
use crate::proto::AddArticleForUserResponse;
use crate::proto::DeleteArticleForUserRequest;
use crate::proto::DeleteArticleForUserResponse;
use crate::proto::GetArticlesResponse;

pub async fn get_all_articles<S: ContentServicePort>(
    service: &S,
) -> Result<GetArticlesResponse, Status> {
    let articles = service.all_articles().await?;

    Ok(GetArticlesResponse {
        articles: articles.into_iter().map(Into::into).collect(),
    })
}

pub async fn get_users_articles<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
) -> Result<GetArticlesResponse, Status> {
    let articles = service.user_articles(caller).await?;

    Ok(GetArticlesResponse {
        articles: articles.into_iter().map(Into::into).collect(),
    })
}

pub async fn add_article_for_user<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
    request: AddArticleForUserRequest,
) -> Result<AddArticleForUserResponse, Status> {
    let article_id = ArticleId::new(request.article_id).map_err(ContentError::from)?;
    service.add_article_for_user(caller, article_id).await?;

    Ok(AddArticleForUserResponse {
        response: format!(
            "Successfully added article ({}) for user ({})",
            article_id, caller.id
        ),
    })
}

pub async fn delete_article_for_user<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
    request: DeleteArticleForUserRequest,
) -> Result<DeleteArticleForUserResponse, Status> {
    let article_id = ArticleId::new(request.article_id).map_err(ContentError::from)?;
    service.remove_article_for_user(caller, article_id).await?;

    Ok(DeleteArticleForUserResponse {
        response: format!(
            "Successfully removed article ({}) for user ({})",
            article_id, caller.id
        ),
    })
}
