use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Malformed JSON and wrong content types become `BadRequest`, a payload of the
/// wrong shape becomes `UnprocessableContent`, and failed rules become
/// `ValidationErrors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 10, message = "name must be between 1 and 10 characters"))]
        name: String,
        #[validate(range(min = 0, message = "stock must not be negative"))]
        stock: i32,
    }

    fn json_request(body: &str, content_type: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"name":"bolt","stock":3}"#, "application/json");

        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(body.name, "bolt");
        assert_eq!(body.stock, 3);
    }

    #[tokio::test]
    async fn test_rule_violations_are_reported_per_field() {
        let request = json_request(r#"{"name":"","stock":-1}"#, "application/json");

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::ValidationErrors { errors } => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["name", "stock"]);
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let request = json_request(r#"{"name":"bolt","#, "application/json");

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let request = json_request(r#"{"name":"bolt"}"#, "application/json");

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        match error {
            AppError::UnprocessableContent { message } => assert!(message.contains("stock")),
            other => panic!("Expected UnprocessableContent, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_bad_request() {
        let request = json_request(r#"{"name":"bolt","stock":3}"#, "text/plain");

        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::BadRequest { .. }));
    }
}
