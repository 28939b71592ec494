use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::is_foreign_key_violation;
use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Article;
use crate::domain::content::models::ArticleId;
use crate::domain::content::ports::ArticleRepository;

/// PostgreSQL implementation of ArticleRepository.
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ArticleRow {
    id: i64,
    header: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: ArticleId(row.id),
            header: row.header,
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn list_all(&self) -> Result<Vec<Article>, ContentError> {
        let rows: Vec<ArticleRow> = sqlx::query_as(
            r#"
            SELECT id, header
            FROM articles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContentError::database("list_articles", e))?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Article>, ContentError> {
        let rows: Vec<ArticleRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.header
            FROM articles a
            JOIN user_articles ua ON ua.article_id = a.id
            WHERE ua.user_id = $1
            ORDER BY a.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContentError::database("list_user_articles", e))?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn attach_to_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<(), ContentError> {
        sqlx::query(
            r#"
            INSERT INTO user_articles (user_id, article_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(article_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return ContentError::ArticleNotFound(article_id);
            }
            ContentError::database("attach_article", e)
        })?;

        Ok(())
    }

    async fn detach_from_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<bool, ContentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_articles
            WHERE user_id = $1 AND article_id = $2
            "#,
        )
        .bind(user_id)
        .bind(article_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ContentError::database("detach_article", e))?;

        Ok(result.rows_affected() > 0)
    }
}
