use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::session::Session;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Username
    pub sid: String, // Session id
    pub exp: usize,
}

pub fn generate_token(
    session: &Session,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (session.issued_at + Duration::hours(ttl_hours)).timestamp() as usize;

    let claims = Claims {
        sub: session.username.clone(),
        sid: session.id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn token_carries_username_and_session() {
        let session = Session::new("admin");
        let token = generate_token(&session, "secret", 1).unwrap();
        let claims = validate_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.sid, session.id.to_string());
        assert!(claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token(&Session::new("admin"), "secret", 1).unwrap();
        assert!(validate_token(&token, "other").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut session = Session::new("admin");
        session.issued_at = Utc::now() - Duration::hours(3);
        let token = generate_token(&session, "secret", 1).unwrap();
        assert!(validate_token(&token, "secret").is_err());
    }
}
