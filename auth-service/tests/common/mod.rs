use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::ClaimsIdentity;
use auth::Role;
use auth::TokenIssuer;
use auth::TokenValidator;
use auth_service::domain::user::models::NewUser;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::ports::UserRepository;
use auth_service::domain::user::service::UserService;
use auth_service::inbound::grpc::AuthGrpcService;
use auth_service::proto::auth_client::AuthClient;
use auth_service::proto::auth_server::AuthServer;
use auth_service::proto::LoginRequest;
use auth_service::proto::RegisterRequest;
use auth_service::user::errors::UserError;
use chrono::Duration;
use chrono::Utc;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;

pub const PRIVATE_KEY: &[u8] = include_bytes!("../../../keys/test_private.pem");
pub const PUBLIC_KEY: &[u8] = include_bytes!("../../../keys/test_public.pem");
pub const FOREIGN_PRIVATE_KEY: &[u8] = include_bytes!("../../../keys/test_foreign_private.pem");

/// Identity store kept in memory, enforcing email uniqueness like the real table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Change a stored role behind the service's back.
    pub fn set_role(&self, id: i64, role: Role) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id.0 == id) {
            user.role = role;
        }
    }

    pub fn remove(&self, id: i64) {
        self.users.lock().unwrap().retain(|u| u.id.0 != id);
    }

    pub fn stored_hash(&self, id: i64) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id.0 == id)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserId, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::UserAlreadyExists(user.email.to_string()));
        }

        let id = UserId(users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1);
        users.push(User {
            id,
            email: user.email,
            role: user.role,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        });

        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

/// Test application that spawns a real gRPC server
pub struct TestApp {
    pub client: AuthClient<Channel>,
    pub repository: Arc<InMemoryUserRepository>,
    pub validator: TokenValidator,
}

impl TestApp {
    /// Spawn the service on a random port and connect a client to it
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = listener.local_addr().unwrap();

        let authenticator = Arc::new(Authenticator::new(
            TokenIssuer::from_pem(PRIVATE_KEY).unwrap(),
            Arc::new(TokenValidator::from_pem(PUBLIC_KEY).unwrap()),
            Duration::minutes(15),
        ));
        let guard = authenticator.guard();

        let repository = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(Arc::clone(&repository), authenticator));

        tokio::spawn(async move {
            Server::builder()
                .add_service(AuthServer::new(AuthGrpcService::new(user_service, guard)))
                .serve_with_incoming(TcpListenerStream::new(listener))
                .await
                .expect("Server error");
        });

        let client = AuthClient::connect(format!("http://{}", address))
            .await
            .expect("Failed to connect to test server");

        Self {
            client,
            repository,
            validator: TokenValidator::from_pem(PUBLIC_KEY).unwrap(),
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<i64, tonic::Status> {
        self.client
            .clone()
            .register(RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .map(|response| response.into_inner().user_id)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, tonic::Status> {
        self.client
            .clone()
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
                app_id: None,
            })
            .await
            .map(|response| response.into_inner().token)
    }
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

/// Mint a token outside the service, e.g. already expired or signed by another key.
pub fn mint_token(key: &[u8], identity: &ClaimsIdentity, ttl: Duration) -> String {
    TokenIssuer::from_pem(key)
        .unwrap()
        .issue(identity, ttl)
        .unwrap()
}
