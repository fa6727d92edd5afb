//! User sub-client.

use crate::client::StratzClient;
use crate::domain::player::SteamAccount;
use crate::domain::user::User;
use crate::error::StratzError;
use crate::http::Resolved;

pub struct Users<'a> {
    pub(crate) client: &'a StratzClient,
}

impl<'a> Users<'a> {
    /// The STRATZ user behind the token.
    pub async fn get(&self) -> Result<Resolved<User>, StratzError> {
        self.client.http.get("/User", None).await
    }

    /// Steam account linked to the token's user.
    pub async fn steam(&self) -> Result<Resolved<SteamAccount>, StratzError> {
        self.client.http.get("/User/steam", None).await
    }
}
