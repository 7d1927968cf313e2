//! Browser Auth Provider
//!
//! Mock provider driven by browser timers instead of tokio.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use carbon_control::auth::{mock_login_session, mock_signup_session};
use carbon_control::config::AuthConfig;
use carbon_control::{AuthProvider, AuthResult, LoginRequest, Session, SignupRequest};

/// Accepts every request after the configured delay
#[derive(Debug, Clone)]
pub struct BrowserAuthProvider {
    login_delay_ms: u32,
    signup_delay_ms: u32,
}

impl BrowserAuthProvider {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            login_delay_ms: clamp_ms(config.login_delay_ms),
            signup_delay_ms: clamp_ms(config.signup_delay_ms),
        }
    }
}

/// Browser timers take a u32 millisecond count
fn clamp_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl AuthProvider for BrowserAuthProvider {
    fn name(&self) -> &str {
        "browser-mock"
    }

    async fn login(&self, request: &LoginRequest) -> AuthResult<Session> {
        TimeoutFuture::new(self.login_delay_ms).await;
        Ok(mock_login_session(request))
    }

    async fn signup(&self, request: &SignupRequest) -> AuthResult<Session> {
        TimeoutFuture::new(self.signup_delay_ms).await;
        Ok(mock_signup_session(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_from_config() {
        let provider = BrowserAuthProvider::from_config(&AuthConfig::default());
        assert_eq!(provider.login_delay_ms, 1000);
        assert_eq!(provider.signup_delay_ms, 1500);
    }

    #[test]
    fn test_clamp_ms() {
        assert_eq!(clamp_ms(5), 5);
        assert_eq!(clamp_ms(u64::MAX), u32::MAX);
    }
}
