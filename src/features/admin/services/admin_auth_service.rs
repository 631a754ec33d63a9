use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::AdminTokenDto;
use crate::features::admin::models::AdminSession;
use crate::shared::constants::MSG_ADMIN_WRONG_PASSWORD;

const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates HS256 admin session tokens
pub struct AdminAuthService {
    password: String,
    ttl_secs: u64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AdminAuthService {
    pub fn new(config: &AdminConfig) -> Self {
        let secret = config.session_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.sub = Some(ADMIN_SUBJECT.to_string());

        Self {
            password: config.password.clone(),
            ttl_secs: config.session_ttl.as_secs(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Exchange the shared admin password for a session token
    pub fn login(&self, password: &str) -> Result<AdminTokenDto> {
        if !constant_time_eq(password.as_bytes(), self.password.as_bytes()) {
            warn!("Admin login rejected: wrong password");
            return Err(AppError::Unauthorized(MSG_ADMIN_WRONG_PASSWORD.to_string()));
        }

        let issued_at = Utc::now();
        let expires_at = i64::try_from(self.ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::Internal(format!("Admin session TTL out of range: {}s", self.ttl_secs))
            })?;
        let claims = SessionClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign admin token: {}", e)))?;

        info!("Admin session issued, expires_at={}", expires_at);

        Ok(AdminTokenDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl_secs,
            expires_at,
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminSession> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("Admin token rejected: {}", e);
                AppError::Unauthorized("Invalid or expired admin session".to_string())
            })?;

        let claims = data.claims;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        Ok(AdminSession {
            subject: claims.sub,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::Unauthorized("Invalid admin session timestamps".to_string()))
}

/// Compare SHA-256 digests in constant time, so neither input length leaks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let hash_a = Sha256::digest(a);
    let hash_b = Sha256::digest(b);
    hash_a.ct_eq(&hash_b).into()
}
