use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::AuthorizationGuard;
use auth::ClaimsIdentity;
use auth::Role;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::Duration;
use content_service::content::errors::ContentError;
use content_service::domain::content::models::Article;
use content_service::domain::content::models::ArticleId;
use content_service::domain::content::models::Widget;
use content_service::domain::content::models::WidgetDescription;
use content_service::domain::content::models::WidgetId;
use content_service::domain::content::ports::ArticleRepository;
use content_service::domain::content::ports::WidgetRepository;
use content_service::domain::content::service::ContentService;
use content_service::inbound::grpc::ContentGrpcService;
use content_service::proto::content_client::ContentClient;
use content_service::proto::content_server::ContentServer;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;

pub const PRIVATE_KEY: &[u8] = include_bytes!("../../../keys/test_private.pem");
pub const PUBLIC_KEY: &[u8] = include_bytes!("../../../keys/test_public.pem");
pub const FOREIGN_PRIVATE_KEY: &[u8] = include_bytes!("../../../keys/test_foreign_private.pem");

/// Widget catalogue and attachments kept in memory.
#[derive(Default)]
pub struct InMemoryWidgetRepository {
    widgets: Mutex<Vec<Widget>>,
    attachments: Mutex<BTreeSet<(i64, i64)>>,
}

#[async_trait]
impl WidgetRepository for InMemoryWidgetRepository {
    async fn list_all(&self) -> Result<Vec<Widget>, ContentError> {
        Ok(self.widgets.lock().unwrap().clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Widget>, ContentError> {
        let attachments = self.attachments.lock().unwrap();
        Ok(self
            .widgets
            .lock()
            .unwrap()
            .iter()
            .filter(|w| attachments.contains(&(user_id, w.id.0)))
            .cloned()
            .collect())
    }

    async fn create(&self, description: WidgetDescription) -> Result<Widget, ContentError> {
        let mut widgets = self.widgets.lock().unwrap();
        let widget = Widget {
            id: WidgetId(widgets.len() as i64 + 1),
            description: description.as_str().to_string(),
        };
        widgets.push(widget.clone());
        Ok(widget)
    }

    async fn attach_to_user(&self, user_id: i64, widget_id: WidgetId) -> Result<(), ContentError> {
        if !self.widgets.lock().unwrap().iter().any(|w| w.id == widget_id) {
            return Err(ContentError::WidgetNotFound(widget_id));
        }
        self.attachments
            .lock()
            .unwrap()
            .insert((user_id, widget_id.0));
        Ok(())
    }

    async fn detach_from_user(
        &self,
        user_id: i64,
        widget_id: WidgetId,
    ) -> Result<bool, ContentError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .remove(&(user_id, widget_id.0)))
    }
}

/// Article catalogue seeded up front, as articles have no create operation.
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
    attachments: Mutex<BTreeSet<(i64, i64)>>,
}

impl InMemoryArticleRepository {
    pub fn seeded(headers: &[&str]) -> Self {
        Self {
            articles: headers
                .iter()
                .enumerate()
                .map(|(i, header)| Article {
                    id: ArticleId(i as i64 + 1),
                    header: header.to_string(),
                })
                .collect(),
            attachments: Mutex::new(BTreeSet::new()),
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn list_all(&self) -> Result<Vec<Article>, ContentError> {
        Ok(self.articles.clone())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Article>, ContentError> {
        let attachments = self.attachments.lock().unwrap();
        Ok(self
            .articles
            .iter()
            .filter(|a| attachments.contains(&(user_id, a.id.0)))
            .cloned()
            .collect())
    }

    async fn attach_to_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<(), ContentError> {
        if !self.articles.iter().any(|a| a.id == article_id) {
            return Err(ContentError::ArticleNotFound(article_id));
        }
        self.attachments
            .lock()
            .unwrap()
            .insert((user_id, article_id.0));
        Ok(())
    }

    async fn detach_from_user(
        &self,
        user_id: i64,
        article_id: ArticleId,
    ) -> Result<bool, ContentError> {
        Ok(self
            .attachments
            .lock()
            .unwrap()
            .remove(&(user_id, article_id.0)))
    }
}

/// Test application that spawns a real gRPC server behind the guard
pub struct TestApp {
    pub client: ContentClient<Channel>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = listener.local_addr().unwrap();

        let guard =
            AuthorizationGuard::new(Arc::new(TokenValidator::from_pem(PUBLIC_KEY).unwrap()));

        let widget_repository = Arc::new(InMemoryWidgetRepository::default());
        let article_repository = Arc::new(InMemoryArticleRepository::seeded(&[
            "Rust in production",
            "Ownership explained",
        ]));
        let content_service = Arc::new(ContentService::new(widget_repository, article_repository));

        tokio::spawn(async move {
            Server::builder()
                .add_service(ContentServer::with_interceptor(
                    ContentGrpcService::new(content_service),
                    guard,
                ))
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
                .expect("Server error");
        });

        let client = ContentClient::connect(format!("http://{}", address))
            .await
            .expect("Failed to connect to test server");

        Self { client }
    }
}

pub fn user_token() -> String {
    mint_token(
        PRIVATE_KEY,
        &ClaimsIdentity::new(7, "user@example.com", Role::User),
        Duration::minutes(5),
    )
}

pub fn admin_token() -> String {
    mint_token(
        PRIVATE_KEY,
        &ClaimsIdentity::new(1, "root@example.com", Role::Admin),
        Duration::minutes(5),
    )
}

/// Attach a token the way clients do.
pub fn with_token<T>(message: T, token: &str) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    request.metadata_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}

pub fn mint_token(key: &[u8], identity: &ClaimsIdentity, ttl: Duration) -> String {
    TokenIssuer::from_pem(key)
        .unwrap()
        .issue(identity, ttl)
        .unwrap()
}
