//! User session context provider
//!
//! Only carries the signed-in user for descendants; authentication itself
//! happens elsewhere. The sidebar reads nothing from it.

use leptos::prelude::*;

/// Signed-in user as seen by the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub display_name: String,
}

/// User context for the whole view tree
#[derive(Clone, Copy)]
pub struct UserContext {
    user: RwSignal<Option<SessionUser>>,
}

impl UserContext {
    /// Signed-out context
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    /// Set by the authentication layer; `None` signs out
    pub fn set_user(&self, user: Option<SessionUser>) {
        self.user.set(user);
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::new()
    }
}

/// User provider component (wraps the router)
#[component]
pub fn UserProvider(children: Children) -> impl IntoView {
    provide_context(UserContext::new());

    children()
}

/// Hook to access user context
pub fn use_user() -> UserContext {
    expect_context::<UserContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_user() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = UserContext::new();
            assert_eq!(ctx.user(), None);

            ctx.set_user(Some(SessionUser {
                id: "u-1".to_string(),
                display_name: "Ana".to_string(),
            }));
            assert_eq!(ctx.user().unwrap().display_name, "Ana");

            ctx.set_user(None);
            assert_eq!(ctx.user(), None);
        });
    }
}
