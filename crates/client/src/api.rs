use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    ApiConfig, AppError, AuthResponse, Child, ChildCreate, DeleteResult, Donation, DonationCreate,
    DonationReceipt, LoginRequest, Orphanage, OrphanageAnalytics, OrphanageCreate, OrphanageQuery,
    OrphanageUpdate, PlatformAnalytics, RegisterRequest, Staff, StaffCreate, User,
    VerificationStatus, VerifyResult,
};

use crate::token_store::SharedTokenStore;

/// The authentication endpoints the session lifecycle depends on.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// `POST /auth/login`.
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, AppError>;
    /// `POST /auth/register`.
    async fn create_account(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError>;
    /// `GET /auth/me` with an explicit token.
    async fn fetch_user(&self, token: &str) -> Result<User, AppError>;
}

/// Typed client for the OrphanCare REST API.
///
/// Every request carries the bearer token currently held by the shared
/// token store, if any.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
    tokens: SharedTokenStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: SharedTokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: config.api_root(),
            tokens,
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn tokens(&self) -> &SharedTokenStore {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(method = method.as_str(), path, "API request");
        let builder = self.http.request(method, format!("{}{}", self.api_root, path));
        match self.tokens.load() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        send(self.request(Method::PUT, path).json(body)).await
    }

    // --- Auth ---

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        self.post("/auth/register", request).await
    }

    /// The user behind the stored token.
    pub async fn me(&self) -> Result<User, AppError> {
        self.get("/auth/me").await
    }

    // --- Orphanages ---

    pub async fn list_orphanages(&self, query: &OrphanageQuery) -> Result<Vec<Orphanage>, AppError> {
        send(self.request(Method::GET, "/orphanages").query(&query.to_pairs())).await
    }

    pub async fn get_orphanage(&self, slug: &str) -> Result<Orphanage, AppError> {
        self.get(&format!("/orphanages/{}", urlencoding::encode(slug))).await
    }

    /// Look an orphanage up by id. The backend only serves single
    /// orphanages by slug, so this scans the unfiltered listing.
    pub async fn find_orphanage(&self, orphanage_id: &str) -> Result<Orphanage, AppError> {
        self.list_orphanages(&OrphanageQuery::default())
            .await?
            .into_iter()
            .find(|o| o.id == orphanage_id)
            .ok_or_else(|| AppError::not_found("Orphanage not found"))
    }

    pub async fn create_orphanage(&self, payload: &OrphanageCreate) -> Result<Orphanage, AppError> {
        self.post("/orphanages", payload).await
    }

    pub async fn update_orphanage(
        &self,
        orphanage_id: &str,
        update: &OrphanageUpdate,
    ) -> Result<Orphanage, AppError> {
        self.put(&format!("/orphanages/{}", urlencoding::encode(orphanage_id)), update)
            .await
    }

    pub async fn list_children(&self, orphanage_id: &str) -> Result<Vec<Child>, AppError> {
        self.get(&format!("/orphanages/{}/children", urlencoding::encode(orphanage_id)))
            .await
    }

    pub async fn add_child(&self, orphanage_id: &str, child: &ChildCreate) -> Result<Child, AppError> {
        self.post(
            &format!("/orphanages/{}/children", urlencoding::encode(orphanage_id)),
            child,
        )
        .await
    }

    pub async fn delete_child(&self, orphanage_id: &str, child_id: &str) -> Result<DeleteResult, AppError> {
        let path = format!(
            "/orphanages/{}/children/{}",
            urlencoding::encode(orphanage_id),
            urlencoding::encode(child_id)
        );
        send(self.request(Method::DELETE, &path)).await
    }

    pub async fn list_staff(&self, orphanage_id: &str) -> Result<Vec<Staff>, AppError> {
        self.get(&format!("/orphanages/{}/staff", urlencoding::encode(orphanage_id)))
            .await
    }

    pub async fn add_staff(&self, orphanage_id: &str, staff: &StaffCreate) -> Result<Staff, AppError> {
        self.post(
            &format!("/orphanages/{}/staff", urlencoding::encode(orphanage_id)),
            staff,
        )
        .await
    }

    pub async fn orphanage_donations(&self, orphanage_id: &str) -> Result<Vec<Donation>, AppError> {
        self.get(&format!("/orphanages/{}/donations", urlencoding::encode(orphanage_id)))
            .await
    }

    // --- Donations ---

    pub async fn create_donation(&self, donation: &DonationCreate) -> Result<Donation, AppError> {
        self.post("/donations/create", donation).await
    }

    pub async fn my_donations(&self) -> Result<Vec<Donation>, AppError> {
        self.get("/donations/my").await
    }

    pub async fn donation_receipt(&self, donation_id: &str) -> Result<DonationReceipt, AppError> {
        self.get(&format!("/donations/{}/receipt", urlencoding::encode(donation_id)))
            .await
    }

    // --- Analytics ---

    pub async fn orphanage_analytics(&self, orphanage_id: &str) -> Result<OrphanageAnalytics, AppError> {
        self.get(&format!("/analytics/orphanage/{}", urlencoding::encode(orphanage_id)))
            .await
    }

    pub async fn platform_analytics(&self) -> Result<PlatformAnalytics, AppError> {
        self.get("/analytics/platform").await
    }

    // --- Super admin ---

    pub async fn admin_orphanages(&self) -> Result<Vec<Orphanage>, AppError> {
        self.get("/admin/orphanages").await
    }

    /// Set an orphanage's verification status.
    pub async fn verify_orphanage(
        &self,
        orphanage_id: &str,
        status: VerificationStatus,
    ) -> Result<VerifyResult, AppError> {
        let path = format!("/admin/orphanages/{}/verify", urlencoding::encode(orphanage_id));
        send(
            self.request(Method::PUT, &path)
                .query(&[("status", status.as_str())]),
        )
        .await
    }

    pub async fn admin_donations(&self) -> Result<Vec<Donation>, AppError> {
        self.get("/admin/donations").await
    }
}

impl AuthBackend for ApiClient {
    async fn authenticate(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.login(request).await
    }

    async fn create_account(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        self.register(request).await
    }

    async fn fetch_user(&self, token: &str) -> Result<User, AppError> {
        let url = format!("{}/auth/me", self.api_root);
        send(self.http.get(url).bearer_auth(token)).await
    }
}

/// Send a request and decode a JSON body, mapping failures to `AppError`.
async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|e| AppError::network(format!("Request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "API error response");
        return Err(AppError::from_response(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::internal(format!("Unexpected response body: {e}")))
}
