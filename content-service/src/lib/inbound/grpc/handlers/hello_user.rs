use auth::ClaimsIdentity;

use crate::domain::content::ports::ContentServicePort;
use crate::proto::HelloUserResponse;

pub fn hello_user<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
) -> HelloUserResponse {
    HelloUserResponse {
        message: service.hello(caller),
    }
}
