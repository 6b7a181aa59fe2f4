//! HS256 token mint/verify around the transport-agnostic claims model.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use coinshop_auth::Claims;
use coinshop_core::UserId;

#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl JwtCodec {
    pub fn new(secret: &[u8], lifetime_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            lifetime: Duration::hours(lifetime_hours),
        }
    }

    /// Mint a token for an authenticated account.
    pub fn mint(&self, user_id: UserId, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify signature and decode claims. Claim-window validation is done
    /// separately ([`coinshop_auth::validate_claims`]).
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let codec = JwtCodec::new(b"test-secret", 24);
        let token = codec.mint(UserId::new(7), "alice").unwrap();
        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.sub, UserId::new(7));
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let minted = JwtCodec::new(b"secret-a", 24)
            .mint(UserId::new(7), "alice")
            .unwrap();
        assert!(JwtCodec::new(b"secret-b", 24).decode(&minted).is_err());
    }
}
