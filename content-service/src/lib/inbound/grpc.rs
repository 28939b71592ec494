pub mod grpc_content_server;
pub mod handlers;

pub use grpc_content_server::ContentGrpcService;
