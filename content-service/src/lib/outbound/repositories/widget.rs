use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::is_foreign_key_violation;
use crate::domain::content::errors::ContentError;
use crate::domain::content::models::Widget;
use crate::domain::content::models::WidgetDescription;
use crate::domain::content::models::WidgetId;
use crate::domain::content::ports::WidgetRepository;

/// PostgreSQL implementation of WidgetRepository.
pub struct PostgresWidgetRepository {
    pool: PgPool,
}

impl PostgresWidgetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct WidgetRow {
    id: i64,
    description: String,
}

impl From<WidgetRow> for Widget {
    fn from(row: WidgetRow) -> Self {
        Widget {
            id: WidgetId(row.id),
            description: row.description,
        }
    }
}

#[async_trait]
impl WidgetRepository for PostgresWidgetRepository {
    async fn list_all(&self) -> Result<Vec<Widget>, ContentError> {
        let rows: Vec<WidgetRow> = sqlx::query_as(
            r#"
            SELECT id, description
            FROM widgets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContentError::database("list_widgets", e))?;

        Ok(rows.into_iter().map(Widget::from).collect())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Widget>, ContentError> {
        let rows: Vec<WidgetRow> = sqlx::query_as(
            r#"
            SELECT w.id, w.description
            FROM widgets w
            JOIN user_widgets uw ON uw.widget_id = w.id
            WHERE uw.user_id = $1
            ORDER BY w.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContentError::database("list_user_widgets", e))?;

        Ok(rows.into_iter().map(Widget::from).collect())
    }

    async fn create(&self, description: WidgetDescription) -> Result<Widget, ContentError> {
        let row: WidgetRow = sqlx::query_as(
            r#"
            INSERT INTO widgets (description)
            VALUES ($1)
            RETURNING id, description
            "#,
        )
        .bind(description.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ContentError::database("create_widget", e))?;

        Ok(row.into())
    }

    async fn attach_to_user(
        &self,
        user_id: i64,
        widget_id: WidgetId,
    ) -> Result<(), ContentError> {
        sqlx::query(
            r#"
            INSERT INTO user_widgets (user_id, widget_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(widget_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                return ContentError::WidgetNotFound(widget_id);
            }
            ContentError::database("attach_widget", e)
        })?;

        Ok(())
    }

    async fn detach_from_user(
        &self,
        user_id: i64,
        widget_id: WidgetId,
    ) -> Result<bool, ContentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_widgets
            WHERE user_id = $1 AND widget_id = $2
            "#,
        )
        .bind(user_id)
        .bind(widget_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ContentError::database("detach_widget", e))?;

        Ok(result.rows_affected() > 0)
    }
}
