use crate::error::Result;
use crate::models::{Login, UserToken};

use super::{Resource, ResourceHandle, ResourceName};

/// Token login (v2).
#[derive(Debug, Clone)]
pub struct Auth {
    handle: ResourceHandle,
}

impl Resource for Auth {
    const NAME: ResourceName = ResourceName::Auth;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Auth {
    /// Request a user token via login.
    ///
    /// The response is returned as-is; an empty token is not an error here.
    /// [`Trakt::set_login`](crate::Trakt::set_login) performs the check.
    #[tracing::instrument(skip(self, login), fields(login = %login.login))]
    pub async fn login(&self, login: &Login) -> Result<UserToken> {
        self.handle.post_json("login", login).await
    }
}
