pub mod article;
pub mod widget;

pub use article::PostgresArticleRepository;
pub use widget::PostgresWidgetRepository;

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
