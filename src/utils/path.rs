use crate::error::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Integer id taken from a single `{id}` path segment.
///
/// The segment is read as text and parsed here so that a non-numeric id is a
/// plain `BadRequest` naming the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_id(&raw).map(ProductId)
    }
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::bad_request(format!("Invalid id '{}': expected an integer", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_id_rejects_text_and_overflow() {
        for raw in ["abc", "1.5", "", "99999999999", " 1", "1 "] {
            match parse_id(raw) {
                Err(AppError::BadRequest { message }) => assert!(message.contains("expected an integer")),
                other => panic!("Expected BadRequest for {:?}, got {:?}", raw, other),
            }
        }
    }
}
