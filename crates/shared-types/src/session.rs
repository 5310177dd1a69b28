use crate::models::User;
use crate::role::{paths, Role};

/// Client-held authentication state.
///
/// `Loading` covers the window between startup and the first answer from
/// the persisted-token check. Once resolved, the user is either known or
/// known to be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Loading,
    Resolved(Option<User>),
}

impl Session {
    pub fn anonymous() -> Self {
        Session::Resolved(None)
    }

    pub fn signed_in(user: User) -> Self {
        Session::Resolved(Some(user))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    /// The current user, or `None` while loading or signed out.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Loading => None,
            Session::Resolved(user) => user.as_ref(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// The session to publish once startup restore answers. Only a session
    /// still `Loading` takes the restored value; one already resolved by a
    /// sign-in, sign-up or logout stays as it is.
    pub fn resolve_startup(&self, restored: Session) -> Option<Session> {
        self.is_loading().then_some(restored)
    }
}

/// Outcome of checking a session against a page's allowed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Auth check still in flight: render a neutral loading state.
    Pending,
    DenyUnauthenticated,
    DenyForbidden,
    Allow,
}

impl AccessDecision {
    /// Where the caller should navigate instead of rendering the page.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            AccessDecision::DenyUnauthenticated => Some(paths::SIGN_IN),
            AccessDecision::DenyForbidden => Some(paths::HOME),
            AccessDecision::Pending | AccessDecision::Allow => None,
        }
    }
}

/// Decide whether a page guarded by `allowed_roles` may render.
///
/// `None` means any authenticated user is allowed. Pure: the caller performs
/// any redirect.
pub fn authorize(session: &Session, allowed_roles: Option<&[Role]>) -> AccessDecision {
    let user = match session {
        Session::Loading => return AccessDecision::Pending,
        Session::Resolved(None) => return AccessDecision::DenyUnauthenticated,
        Session::Resolved(Some(user)) => user,
    };

    match allowed_roles {
        Some(roles) if !roles.contains(&user.role) => AccessDecision::DenyForbidden,
        _ => AccessDecision::Allow,
    }
}
