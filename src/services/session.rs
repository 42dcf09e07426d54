//! Authentication collaborator.
//!
//! The editor only needs to know whether someone is signed in and which
//! bearer token to send. Providers implement [`AuthProvider`]; the email
//! check and listener bookkeeping live here so every provider behaves the
//! same.

use std::fmt;

use crate::error::{PostResult, ValidationError};

/// A signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Address the sign-in link was sent to.
    pub email: String,
    /// Bearer token for gated calls.
    pub access_token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl Session {
    /// Creates a session.
    pub fn new(email: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            access_token: access_token.into(),
        }
    }
}

/// Callback invoked with the new session (or `None` after sign-out).
pub type SessionListener = Box<dyn FnMut(Option<&Session>)>;

/// Handle returned by [`AuthProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered session listeners.
#[derive(Default)]
pub struct SessionListeners {
    next_id: u64,
    listeners: Vec<(SubscriptionId, SessionListener)>,
}

impl fmt::Debug for SessionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl SessionListeners {
    /// Registers a listener.
    pub fn add(&mut self, listener: SessionListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregisters a listener. Returns false when the id is unknown.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Calls every listener in registration order.
    pub fn notify(&mut self, session: Option<&Session>) {
        for (_, listener) in &mut self.listeners {
            listener(session);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// An authentication service.
pub trait AuthProvider {
    /// The current session, if any.
    fn session(&self) -> Option<Session>;

    /// Sends a sign-in link to an already validated address.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PostError::Network`] when the call fails.
    fn send_sign_in_link(&mut self, email: &str) -> PostResult<()>;

    /// Ends the current session and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PostError::Network`] when the call fails.
    fn sign_out(&mut self) -> PostResult<()>;

    /// Registered listeners.
    fn listeners(&mut self) -> &mut SessionListeners;

    /// Validates `email`, then sends a sign-in link.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed address, without calling
    /// the service, or whatever [`AuthProvider::send_sign_in_link`] returns.
    fn sign_in_with_email_link(&mut self, email: &str) -> PostResult<()> {
        let email = email.trim();
        validate_email(email)?;
        tracing::info!(email = %email, "requesting sign-in link");
        self.send_sign_in_link(email)
    }

    /// Registers a listener for session changes.
    fn subscribe(&mut self, listener: SessionListener) -> SubscriptionId {
        self.listeners().add(listener)
    }

    /// Removes a listener.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners().remove(id)
    }
}

/// Checks that `email` has a non-empty local part and domain around a
/// single `@`, with no whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidField`] on `email`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::field("email", format!("'{email}' is not an email address"));
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeAuth {
        session: Option<Session>,
        sent: Vec<String>,
        listeners: SessionListeners,
    }

    impl AuthProvider for FakeAuth {
        fn session(&self) -> Option<Session> {
            self.session.clone()
        }

        fn send_sign_in_link(&mut self, email: &str) -> PostResult<()> {
            self.sent.push(email.to_string());
            self.session = Some(Session::new(email, "token"));
            let session = self.session.clone();
            self.listeners.notify(session.as_ref());
            Ok(())
        }

        fn sign_out(&mut self) -> PostResult<()> {
            self.session = None;
            self.listeners.notify(None);
            Ok(())
        }

        fn listeners(&mut self) -> &mut SessionListeners {
            &mut self.listeners
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("me@example.com").is_ok());
        assert!(validate_email("me@localhost").is_ok());
        for bad in ["", "me", "@example.com", "me@", "a@b@c", "me @x.io"] {
            assert!(validate_email(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn test_invalid_email_never_reaches_service() {
        let mut auth = FakeAuth::default();
        let err = auth.sign_in_with_email_link("nope").unwrap_err();
        assert!(matches!(err, PostError::Validation(_)));
        assert!(auth.sent.is_empty());
    }

    #[test]
    fn test_listeners_see_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut auth = FakeAuth::default();
        let sink = Rc::clone(&seen);
        let id = auth.subscribe(Box::new(move |session| {
            sink.borrow_mut().push(session.map(|s| s.email.clone()));
        }));

        auth.sign_in_with_email_link("  me@example.com ").unwrap();
        auth.sign_out().unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![Some("me@example.com".to_string()), None]
        );

        assert!(auth.unsubscribe(id));
        assert!(!auth.unsubscribe(id));
        auth.sign_in_with_email_link("me@example.com").unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_redacted_debug() {
        let session = Session::new("me@example.com", "secret");
        assert_eq!(session.access_token, "secret");
        assert!(!format!("{session:?}").contains("secret"));
    }
}
