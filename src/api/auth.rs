//! Calls against the backend's auth service (GoTrue).

use super::{ApiClient, ApiError, ApiResult};
use crate::models::{Session, User};
use serde::Serialize;

pub(crate) const AUTH_PROVIDER: &str = "linkedin_oidc";
pub(crate) const OAUTH_SCOPES: &str = "openid profile email w_member_social";

#[derive(Serialize, Clone, Debug)]
struct PkceGrantRequest<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

#[derive(Serialize, Clone, Debug)]
struct RefreshGrantRequest<'a> {
    refresh_token: &'a str,
}

impl ApiClient {
    /// Browser URL that starts the provider login; the provider returns to the callback with `?code=`.
    pub fn authorize_url(&self, code_challenge: &str) -> String {
        format!(
            "{}?provider={}&redirect_to={}&scopes={}&code_challenge={}&code_challenge_method=s256",
            self.auth_url("/authorize"),
            AUTH_PROVIDER,
            urlencoding::encode(&self.config.auth_callback_url),
            urlencoding::encode(OAUTH_SCOPES),
            urlencoding::encode(code_challenge),
        )
    }

    pub async fn exchange_code_for_session(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> ApiResult<Session> {
        let req = self
            .backend_request(reqwest::Method::POST, self.auth_url("/token"))
            .query(&[("grant_type", "pkce")])
            .json(&PkceGrantRequest {
                auth_code,
                code_verifier,
            });

        Self::execute(req, "Code exchange failed").await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> ApiResult<Session> {
        let req = self
            .backend_request(reqwest::Method::POST, self.auth_url("/token"))
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshGrantRequest { refresh_token });

        Self::execute(req, "Session refresh failed").await
    }

    /// Requires a client carrying the user's access token.
    pub async fn fetch_user(&self) -> ApiResult<User> {
        if !self.is_authenticated() {
            return Err(ApiError::auth("No access token"));
        }
        let req = self.backend_request(reqwest::Method::GET, self.auth_url("/user"));
        Self::execute(req, "Load user failed").await
    }

    /// Revokes the refresh token server-side. Answers 204.
    pub async fn logout(&self) -> ApiResult<()> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let req = self.backend_request(reqwest::Method::POST, self.auth_url("/logout"));
        Self::execute(req, "Sign out failed").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::test_config;

    #[test]
    fn test_authorize_url_carries_provider_scopes_and_callback() {
        let client = ApiClient::new(test_config());
        let url = client.authorize_url("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
        assert!(url.starts_with("https://abc.supabase.co/auth/v1/authorize?provider=linkedin_oidc&"));
        assert!(url.contains("scopes=openid%20profile%20email%20w_member_social"));
        assert!(url.contains("redirect_to=https%3A%2F%2Fpostgen.example%2Fauth%2Fcallback"));
        assert!(url.contains("code_challenge=E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"));
        assert!(url.ends_with("code_challenge_method=s256"));
    }

    #[test]
    fn test_pkce_grant_body() {
        let v = serde_json::to_value(PkceGrantRequest {
            auth_code: "code-1",
            code_verifier: "verifier-1",
        })
        .expect("should serialize");
        assert_eq!(v["auth_code"], "code-1");
        assert_eq!(v["code_verifier"], "verifier-1");
    }

    #[test]
    fn test_session_response_contract_deserialize() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1790000000,
            "refresh_token": "r1",
            "user": {
                "id": "c0ffee",
                "email": "u@example.com",
                "user_metadata": {"full_name": "U Example"}
            }
        }"#;
        let session: Session = serde_json::from_str(json).expect("session should parse");
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.user.display_name().as_deref(), Some("U Example"));
    }
}
