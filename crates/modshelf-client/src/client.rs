use std::sync::{Arc, RwLock};

use reqwest::{RequestBuilder, Response, StatusCode};
use tokio::sync::watch;
use uuid::Uuid;

use crate::error::ClientError;
use crate::types::{
    AddModRequest, AuthPayload, CheckModPayload, CreateModListRequest, ErrorBody, LoginRequest,
    Mod, ModList, ProfilePayload, RegisterRequest, RemoveModRequest, UpdateModListPayload,
    UpdateModListRequest, User,
};

/// Client for the modshelf API.
///
/// Cheap to clone; clones share the token store and the logout signal. A 401
/// from any request clears the held token and notifies every
/// [`ApiClient::logout_signal`] subscriber, mirroring the server's
/// single-condition token rejection.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    logout: watch::Sender<()>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let (logout, _) = watch::channel(());
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: Arc::new(RwLock::new(None)),
            logout,
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn clear_token(&self) {
        self.token.write().unwrap().take();
    }

    pub fn has_token(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Subscribe to forced-logout notifications. The channel fires whenever
    /// any request comes back 401.
    pub fn logout_signal(&self) -> watch::Receiver<()> {
        self.logout.subscribe()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the bearer token, send, and normalize failures. `context` seeds
    /// the fallback message when an error response has no parseable body.
    async fn send(&self, req: RequestBuilder, context: &str) -> Result<Response, ClientError> {
        let token = self.token.read().unwrap().clone();
        let req = match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            self.clear_token();
            let _ = self.logout.send(());
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let status = status.as_u16();
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("HTTP {status}: {context}"),
            };
            return Err(ClientError::Api { status, message });
        }
        Ok(resp)
    }

    // ── Auth ─────────────────────────────────────────────────────────────────

    /// Register a new account. The returned token is stored for subsequent
    /// requests.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ClientError> {
        let req = self.http.post(self.url("/api/auth/register")).json(&RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        });
        let payload: AuthPayload = self.send(req, "Failed to register").await?.json().await?;
        self.set_token(&payload.token);
        Ok(payload)
    }

    /// Log in. The returned token is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ClientError> {
        let req = self.http.post(self.url("/api/auth/login")).json(&LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        });
        let payload: AuthPayload = self.send(req, "Failed to log in").await?.json().await?;
        self.set_token(&payload.token);
        Ok(payload)
    }

    /// Log out. The held token is dropped whether or not the server call
    /// succeeds; tokens are not revocable server-side.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let req = self.http.post(self.url("/api/auth/logout"));
        let result = self.send(req, "Failed to log out").await;
        self.clear_token();
        match result {
            Ok(_) | Err(ClientError::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub async fn profile(&self) -> Result<User, ClientError> {
        let req = self.http.get(self.url("/api/auth/profile"));
        let payload: ProfilePayload = self
            .send(req, "Failed to fetch profile")
            .await?
            .json()
            .await?;
        Ok(payload.user)
    }

    // ── Mod lists ────────────────────────────────────────────────────────────

    pub async fn create_mod_list(
        &self,
        data: CreateModListRequest,
    ) -> Result<ModList, ClientError> {
        let req = self.http.post(self.url("/api/modlists")).json(&data);
        Ok(self
            .send(req, "Failed to create mod list")
            .await?
            .json()
            .await?)
    }

    pub async fn get_mod_lists(&self) -> Result<Vec<ModList>, ClientError> {
        let req = self.http.get(self.url("/api/modlists"));
        Ok(self
            .send(req, "Failed to fetch mod lists")
            .await?
            .json()
            .await?)
    }

    pub async fn get_mod_list(&self, id: Uuid) -> Result<ModList, ClientError> {
        let req = self.http.get(self.url(&format!("/api/modlists/{id}")));
        Ok(self
            .send(req, "Failed to fetch mod list")
            .await?
            .json()
            .await?)
    }

    pub async fn update_mod_list(
        &self,
        id: Uuid,
        data: UpdateModListRequest,
    ) -> Result<ModList, ClientError> {
        let req = self
            .http
            .put(self.url(&format!("/api/modlists/{id}")))
            .json(&data);
        let payload: UpdateModListPayload = self
            .send(req, "Failed to update mod list")
            .await?
            .json()
            .await?;
        Ok(payload.mod_list)
    }

    pub async fn delete_mod_list(&self, id: Uuid) -> Result<(), ClientError> {
        let req = self.http.delete(self.url(&format!("/api/modlists/{id}")));
        self.send(req, "Failed to delete mod list").await?;
        Ok(())
    }

    pub async fn get_public_mod_lists(&self) -> Result<Vec<ModList>, ClientError> {
        let req = self.http.get(self.url("/api/modlists/public"));
        Ok(self
            .send(req, "Failed to fetch public mod lists")
            .await?
            .json()
            .await?)
    }

    /// Copy a public list into the caller's account. The copy comes back
    /// private, named `"<source> (Copy)"`.
    pub async fn copy_public_mod_list(&self, id: Uuid) -> Result<ModList, ClientError> {
        let req = self
            .http
            .post(self.url(&format!("/api/modlists/public/{id}/copy")));
        Ok(self
            .send(req, "Failed to copy public mod list")
            .await?
            .json()
            .await?)
    }

    // ── Mods within a list ───────────────────────────────────────────────────

    pub async fn add_mod_to_mod_list(
        &self,
        mod_list_id: Uuid,
        data: AddModRequest,
    ) -> Result<Mod, ClientError> {
        let req = self
            .http
            .post(self.url(&format!("/api/modlists/{mod_list_id}/mods")))
            .json(&data);
        Ok(self
            .send(req, "Failed to add mod to mod list")
            .await?
            .json()
            .await?)
    }

    pub async fn remove_mod_from_mod_list(
        &self,
        mod_list_id: Uuid,
        mod_slug: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .http
            .delete(self.url(&format!("/api/modlists/{mod_list_id}/mods")))
            .json(&RemoveModRequest {
                mod_slug: mod_slug.to_owned(),
            });
        self.send(req, "Failed to remove mod from mod list").await?;
        Ok(())
    }

    pub async fn is_mod_in_mod_list(
        &self,
        mod_list_id: Uuid,
        mod_slug: &str,
    ) -> Result<bool, ClientError> {
        let req = self
            .http
            .get(self.url(&format!("/api/modlists/{mod_list_id}/mods/check")))
            .query(&[("modSlug", mod_slug)]);
        let payload: CheckModPayload = self
            .send(req, "Failed to check mod in mod list")
            .await?
            .json()
            .await?;
        Ok(payload.is_in_mod_list)
    }

    pub async fn get_mod_lists_containing_mod(
        &self,
        mod_slug: &str,
    ) -> Result<Vec<ModList>, ClientError> {
        let req = self
            .http
            .get(self.url("/api/modlists/mods/containing"))
            .query(&[("modSlug", mod_slug)]);
        Ok(self
            .send(req, "Failed to fetch mod lists containing mod")
            .await?
            .json()
            .await?)
    }
}
