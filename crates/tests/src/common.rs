use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use client::{ApiClient, MemoryTokenStore, SessionStore, SharedTokenStore};
use serde::Deserialize;
use serde_json::json;
use shared_types::{
    ApiConfig, AuthResponse, Donation, DonationCreate, LoginRequest, Orphanage, OrphanageType,
    PaymentStatus, PlatformAnalytics, RegisterRequest, Role, User, VerificationStatus,
    VerifyResult,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

pub const DONOR_EMAIL: &str = "donor@example.com";
pub const DONOR_PASSWORD: &str = "donor-pass";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// In-memory stand-in for the OrphanCare REST backend.
#[derive(Default)]
pub struct StubState {
    /// email → (password, user)
    accounts: HashMap<String, (String, User)>,
    /// token → user id
    tokens: HashMap<String, String>,
    pub orphanages: Vec<Orphanage>,
    pub donations: Vec<Donation>,
}

pub type SharedState = Arc<Mutex<StubState>>;

impl StubState {
    fn add_account(&mut self, name: &str, email: &str, password: &str, role: Role) -> User {
        let user = User {
            id: format!("u-{}", uuid::Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            country: "India".to_string(),
            city: None,
            role,
            profile_picture: None,
            orphanage_id: None,
        };
        self.accounts
            .insert(email.to_string(), (password.to_string(), user.clone()));
        user
    }

    fn issue_token(&mut self, user: &User) -> String {
        let token = format!("tok-{}", uuid::Uuid::new_v4());
        self.tokens.insert(token.clone(), user.id.clone());
        token
    }

    fn user_for(&self, headers: &HeaderMap) -> Option<User> {
        let token = headers
            .get("authorization")?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?;
        let user_id = self.tokens.get(token)?;
        self.accounts
            .values()
            .map(|(_, u)| u)
            .find(|u| &u.id == user_id)
            .cloned()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Drop every issued token, as if the backend's signing key rotated.
    pub fn revoke_all_tokens(&mut self) {
        self.tokens.clear();
    }
}

pub fn orphanage(name: &str, city: &str, status: VerificationStatus) -> Orphanage {
    serde_json::from_value(json!({
        "id": format!("o-{}", name.to_lowercase().replace(' ', "-")),
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "description": format!("{name} cares for children in {city}"),
        "registration_number": "REG-001",
        "contact_person": "Priya",
        "email": "home@example.com",
        "phone": "1234567890",
        "address": "1 Main Road",
        "city": city,
        "state": "Maharashtra",
        "type": "MIXED",
        "verification_status": status.as_str(),
        "total_children": 25,
        "monthly_targets": { "MEALS": 40000.0, "EDUCATION": 30000.0 }
    }))
    .expect("valid orphanage fixture")
}

fn seeded_state() -> StubState {
    let mut state = StubState::default();
    state.add_account("Asha Donor", DONOR_EMAIL, DONOR_PASSWORD, Role::Donor);
    state.add_account("Root Admin", ADMIN_EMAIL, ADMIN_PASSWORD, Role::SuperAdmin);
    state.orphanages = vec![
        orphanage("Asha Bhavan", "Mumbai", VerificationStatus::Verified),
        orphanage("Snehalaya", "Pune", VerificationStatus::Pending),
        orphanage("Bal Niketan", "Pune", VerificationStatus::Verified),
    ];
    state
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "Invalid authentication credentials")
}

fn forbidden() -> Response {
    error(StatusCode::FORBIDDEN, "Access denied")
}

async fn login(State(state): State<SharedState>, Json(req): Json<LoginRequest>) -> Response {
    let mut state = state.lock().unwrap();
    let user = match state.accounts.get(&req.email) {
        Some((password, user)) if *password == req.password => user.clone(),
        _ => return error(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    };
    let token = state.issue_token(&user);
    Json(AuthResponse { token, user }).into_response()
}

async fn register(State(state): State<SharedState>, Json(req): Json<RegisterRequest>) -> Response {
    let mut state = state.lock().unwrap();
    if state.accounts.contains_key(&req.email) {
        return error(StatusCode::BAD_REQUEST, "Email already registered");
    }
    let user = state.add_account(&req.name, &req.email, &req.password, req.role);
    let token = state.issue_token(&user);
    Json(AuthResponse { token, user }).into_response()
}

async fn me(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    match state.lock().unwrap().user_for(&headers) {
        Some(user) => Json(user).into_response(),
        None => unauthorized(),
    }
}

#[derive(Deserialize)]
struct OrphanageFilters {
    city: Option<String>,
    #[serde(rename = "type")]
    kind: Option<OrphanageType>,
    verified: Option<bool>,
    search: Option<String>,
}

async fn list_orphanages(
    State(state): State<SharedState>,
    Query(filters): Query<OrphanageFilters>,
) -> Json<Vec<Orphanage>> {
    let state = state.lock().unwrap();
    let list = state
        .orphanages
        .iter()
        .filter(|o| filters.city.as_ref().map_or(true, |c| &o.city == c))
        .filter(|o| filters.kind.map_or(true, |k| o.kind == k))
        .filter(|o| {
            filters.verified.map_or(true, |v| {
                let wanted = if v {
                    VerificationStatus::Verified
                } else {
                    VerificationStatus::Pending
                };
                o.verification_status == wanted
            })
        })
        .filter(|o| {
            filters.search.as_ref().map_or(true, |s| {
                o.name.to_lowercase().contains(&s.to_lowercase())
            })
        })
        .cloned()
        .collect();
    Json(list)
}

async fn get_orphanage(State(state): State<SharedState>, Path(slug): Path<String>) -> Response {
    let state = state.lock().unwrap();
    match state.orphanages.iter().find(|o| o.slug == slug) {
        Some(o) => Json(o.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Orphanage not found"),
    }
}

async fn create_donation(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(req): Json<DonationCreate>,
) -> Response {
    let mut state = state.lock().unwrap();
    let Some(donor) = state.user_for(&headers) else {
        return unauthorized();
    };
    let Some(orphanage) = state.orphanages.iter_mut().find(|o| o.id == req.orphanage_id) else {
        return error(StatusCode::NOT_FOUND, "Orphanage not found");
    };
    orphanage.total_donations += req.amount;
    let orphanage_name = orphanage.name.clone();

    let id = uuid::Uuid::new_v4().to_string();
    let donation = Donation {
        gateway_reference: Some(format!("MOCK_{}", &id[..8])),
        id,
        donor_id: donor.id,
        orphanage_id: req.orphanage_id,
        amount: req.amount,
        breakdown: req.breakdown,
        message: req.message,
        is_anonymous: req.is_anonymous,
        donor_name: (!req.is_anonymous).then(|| donor.name.clone()),
        payment_status: PaymentStatus::Completed,
        created_at: Utc::now(),
        orphanage_name: Some(orphanage_name),
    };
    state.donations.push(donation.clone());
    Json(donation).into_response()
}

async fn my_donations(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    let Some(user) = state.user_for(&headers) else {
        return unauthorized();
    };
    let mine: Vec<Donation> = state
        .donations
        .iter()
        .filter(|d| d.donor_id == user.id)
        .cloned()
        .collect();
    Json(mine).into_response()
}

async fn orphanage_donations(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(orphanage_id): Path<String>,
) -> Response {
    let state = state.lock().unwrap();
    let Some(user) = state.user_for(&headers) else {
        return unauthorized();
    };
    let allowed = match user.role {
        Role::SuperAdmin => true,
        Role::OrphanageAdmin => user.orphanage_id.as_deref() == Some(orphanage_id.as_str()),
        Role::Donor => false,
    };
    if !allowed {
        return forbidden();
    }
    let received: Vec<Donation> = state
        .donations
        .iter()
        .filter(|d| d.orphanage_id == orphanage_id)
        .cloned()
        .collect();
    Json(received).into_response()
}

fn require_super_admin(state: &StubState, headers: &HeaderMap) -> Result<User, Response> {
    match state.user_for(headers) {
        None => Err(unauthorized()),
        Some(u) if u.role == Role::SuperAdmin => Ok(u),
        Some(_) => Err(forbidden()),
    }
}

async fn admin_orphanages(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = require_super_admin(&state, &headers) {
        return resp;
    }
    Json(state.orphanages.clone()).into_response()
}

#[derive(Deserialize)]
struct VerifyParams {
    status: VerificationStatus,
}

async fn verify_orphanage(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<VerifyParams>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = require_super_admin(&state, &headers) {
        return resp;
    }
    match state.orphanages.iter_mut().find(|o| o.id == id) {
        Some(o) => {
            o.verification_status = params.status;
            Json(VerifyResult { success: true }).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Orphanage not found"),
    }
}

async fn admin_donations(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = require_super_admin(&state, &headers) {
        return resp;
    }
    Json(state.donations.clone()).into_response()
}

async fn platform_analytics(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = require_super_admin(&state, &headers) {
        return resp;
    }
    let count = |status: VerificationStatus| {
        state
            .orphanages
            .iter()
            .filter(|o| o.verification_status == status)
            .count() as u64
    };
    let donors: BTreeSet<&str> =
        state.donations.iter().map(|d| d.donor_id.as_str()).collect();
    Json(PlatformAnalytics {
        total_orphanages: state.orphanages.len() as u64,
        verified_orphanages: count(VerificationStatus::Verified),
        pending_orphanages: count(VerificationStatus::Pending),
        total_donations: state.donations.iter().map(|d| d.amount).sum(),
        total_donors: donors.len() as u64,
        total_transactions: state.donations.len() as u64,
    })
    .into_response()
}

fn router(state: SharedState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .route("/orphanages", get(list_orphanages))
        .route("/orphanages/{slug}", get(get_orphanage))
        .route("/orphanages/{slug}/donations", get(orphanage_donations))
        .route("/donations/create", post(create_donation))
        .route("/donations/my", get(my_donations))
        .route("/admin/orphanages", get(admin_orphanages))
        .route("/admin/orphanages/{id}/verify", put(verify_orphanage))
        .route("/admin/donations", get(admin_donations))
        .route("/analytics/platform", get(platform_analytics));
    Router::new().nest("/api", api).with_state(state)
}

/// A running stub backend plus the base URL it listens on.
pub struct TestBackend {
    pub base_url: String,
    pub state: SharedState,
}

impl TestBackend {
    /// Serve a freshly seeded backend on an ephemeral loopback port.
    pub async fn start() -> Self {
        let state: SharedState = Arc::new(Mutex::new(seeded_state()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend");
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// An API client with its own empty token store.
    pub fn client(&self) -> (ApiClient, SharedTokenStore) {
        let tokens: SharedTokenStore = Arc::new(MemoryTokenStore::new());
        (self.client_with(tokens.clone()), tokens)
    }

    /// An API client reading and writing `tokens`, like a page reload that
    /// finds the previous session's storage.
    pub fn client_with(&self, tokens: SharedTokenStore) -> ApiClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
        };
        ApiClient::new(&config, tokens)
    }

    pub fn sessions(&self, tokens: SharedTokenStore) -> SessionStore<ApiClient> {
        SessionStore::new(self.client_with(tokens.clone()), tokens)
    }

    pub fn orphanage_id(&self, name: &str) -> String {
        let state = self.state.lock().unwrap();
        state
            .orphanages
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.id.clone())
            .expect("seeded orphanage")
    }
}

/// Sign in as a seeded account and return the client holding the token.
pub async fn signed_in_client(backend: &TestBackend, email: &str, password: &str) -> ApiClient {
    let (api, tokens) = backend.client();
    let sessions = SessionStore::new(api.clone(), tokens);
    sessions
        .login(email, password)
        .await
        .expect("seeded credentials are valid");
    api
}
