//! Session state machine and page access rules.

use super::model::{Identity, Role};
use crate::error::{HappyHeadsError, Result};

/// Authentication state of the application.
///
/// Starts in `Loading` until the stored identity has been checked, then
/// moves between `Unauthenticated` and `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }
}

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Auth,
    Dashboard,
    MoodTracker,
    Journal,
    Mindfulness,
    Content,
    Community,
    Therapist,
    Admin,
    Profile,
}

/// What a page demands of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    Public,
    AnyIdentity,
    Role(Role),
}

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// The stored identity has not been checked yet
    Pending,
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Home,
        Route::Auth,
        Route::Dashboard,
        Route::MoodTracker,
        Route::Journal,
        Route::Mindfulness,
        Route::Content,
        Route::Community,
        Route::Therapist,
        Route::Admin,
        Route::Profile,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::Dashboard => "/dashboard",
            Route::MoodTracker => "/mood-tracker",
            Route::Journal => "/journal",
            Route::Mindfulness => "/mindfulness",
            Route::Content => "/content",
            Route::Community => "/community",
            Route::Therapist => "/therapist",
            Route::Admin => "/admin",
            Route::Profile => "/profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn requirement(&self) -> AccessRequirement {
        match self {
            Route::Home | Route::Auth => AccessRequirement::Public,
            Route::Admin => AccessRequirement::Role(Role::Administrator),
            _ => AccessRequirement::AnyIdentity,
        }
    }

    /// Where to send someone who does not meet the requirement.
    pub fn fallback(&self) -> Route {
        match self {
            Route::Admin => Route::Dashboard,
            _ => Route::Auth,
        }
    }

    /// Evaluates this route against a session state.
    pub fn authorize(&self, state: &SessionState) -> AccessDecision {
        let requirement = self.requirement();
        if requirement == AccessRequirement::Public {
            return AccessDecision::Granted;
        }

        match state {
            SessionState::Loading => AccessDecision::Pending,
            SessionState::Unauthenticated => AccessDecision::Redirect(self.fallback()),
            SessionState::Authenticated(identity) => match requirement {
                AccessRequirement::Role(role) if identity.role != role => {
                    AccessDecision::Redirect(self.fallback())
                }
                _ => AccessDecision::Granted,
            },
        }
    }
}

impl Route {
    /// Like [`Route::authorize`], but as a gate.
    ///
    /// # Errors
    ///
    /// Returns `AccessDenied` carrying the redirect path unless access is
    /// granted. A session still loading is sent to the route's fallback.
    pub fn require(&self, state: &SessionState) -> Result<()> {
        match self.authorize(state) {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Pending => Err(HappyHeadsError::access_denied(self.fallback().path())),
            AccessDecision::Redirect(target) => Err(HappyHeadsError::access_denied(target.path())),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".to_string(),
            email: "sam@example.com".to_string(),
            name: "sam".to_string(),
            avatar: None,
            role,
        }
    }

    #[test]
    fn test_default_state_is_loading() {
        assert!(SessionState::default().is_loading());
    }

    #[test]
    fn test_public_routes_always_granted() {
        assert_eq!(
            Route::Home.authorize(&SessionState::Loading),
            AccessDecision::Granted
        );
        assert_eq!(
            Route::Auth.authorize(&SessionState::Unauthenticated),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_protected_route_redirects_to_auth() {
        assert_eq!(
            Route::Journal.authorize(&SessionState::Unauthenticated),
            AccessDecision::Redirect(Route::Auth)
        );
        assert_eq!(
            Route::Journal.authorize(&SessionState::Loading),
            AccessDecision::Pending
        );
    }

    #[test]
    fn test_admin_route_requires_administrator() {
        let standard = SessionState::Authenticated(identity(Role::Standard));
        let admin = SessionState::Authenticated(identity(Role::Administrator));

        assert_eq!(
            Route::Admin.authorize(&standard),
            AccessDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(Route::Admin.authorize(&admin), AccessDecision::Granted);
        assert_eq!(
            Route::Admin.authorize(&SessionState::Unauthenticated),
            AccessDecision::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_require_denies_with_redirect_path() {
        let standard = SessionState::Authenticated(identity(Role::Standard));
        assert!(Route::Journal.require(&standard).is_ok());
        assert!(Route::Home.require(&SessionState::Unauthenticated).is_ok());

        for (route, state, redirect) in [
            (Route::MoodTracker, SessionState::Unauthenticated, "/auth"),
            (Route::Journal, SessionState::Loading, "/auth"),
            (Route::Admin, standard.clone(), "/dashboard"),
        ] {
            match route.require(&state) {
                Err(HappyHeadsError::AccessDenied { redirect: actual }) => {
                    assert_eq!(actual, redirect)
                }
                other => panic!("{route} with {state:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }
}
