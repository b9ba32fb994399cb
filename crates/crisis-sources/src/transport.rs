//! Ordered request strategies.
//!
//! Each network source tries its strategies in sequence and keeps the first
//! success. A relay strategy wraps the target URL behind a forwarding prefix.

use std::fmt;
use std::future::Future;

use crate::error::SourceError;

/// How a request reaches an upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Straight to the upstream.
    Direct,
    /// Through the configured relay, target percent-encoded onto its prefix.
    Relay,
}

impl Transport {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Relay => "relay",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `target` behind a relay prefix.
pub fn relay_url(prefix: &str, target: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(target))
}

/// Run `attempt` once per strategy, in order, returning the first success.
///
/// Every failure is logged. When all strategies fail the last error is
/// returned.
///
/// # Errors
///
/// Returns the error of the last strategy tried, or
/// [`SourceError::NoTransport`] if `strategies` is empty.
pub async fn first_success<T, F, Fut>(
    source: &'static str,
    strategies: &[Transport],
    mut attempt: F,
) -> Result<T, SourceError>
where
    F: FnMut(Transport) -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut last_error = None;
    for &transport in strategies {
        match attempt(transport).await {
            Ok(value) => {
                tracing::debug!(source, %transport, "request succeeded");
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!(source, %transport, %e, "request failed");
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or(SourceError::NoTransport(source)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn relay_url_encodes_target() {
        assert_eq!(
            relay_url("https://relay.example/?", "https://api.test/a?b=c&d=e"),
            "https://relay.example/?https%3A%2F%2Fapi.test%2Fa%3Fb%3Dc%26d%3De"
        );
    }

    #[tokio::test]
    async fn first_success_stops_at_direct() {
        let tried = RefCell::new(Vec::new());
        let result = first_success("test", &[Transport::Direct, Transport::Relay], |t| {
            tried.borrow_mut().push(t);
            async move { Ok::<_, SourceError>(t.as_str()) }
        })
        .await;
        assert_eq!(result.unwrap(), "direct");
        assert_eq!(*tried.borrow(), vec![Transport::Direct]);
    }

    #[tokio::test]
    async fn first_success_falls_back_to_relay() {
        let result = first_success("test", &[Transport::Direct, Transport::Relay], |t| async move {
            match t {
                Transport::Direct => Err(SourceError::Api {
                    status: 403,
                    message: "blocked".into(),
                }),
                Transport::Relay => Ok(42),
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn first_success_returns_last_error() {
        let result: Result<(), _> =
            first_success("test", &[Transport::Direct, Transport::Relay], |t| async move {
                Err(SourceError::Parse(t.to_string()))
            })
            .await;
        assert!(matches!(result, Err(SourceError::Parse(ref s)) if s == "relay"));
    }

    #[tokio::test]
    async fn first_success_without_strategies() {
        let result: Result<(), _> =
            first_success("gdacs", &[], |_| async { Ok(()) }).await;
        assert!(matches!(result, Err(SourceError::NoTransport("gdacs"))));
    }
}
