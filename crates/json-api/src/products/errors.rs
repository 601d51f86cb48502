//! Product Errors

use salvo::{
    Depot, Request, Response, Writer, async_trait,
    http::StatusCode,
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use stockroom_app::domain::products::ProductsServiceError;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

/// An error response carrying the API's status and message contract.
///
/// Service error messages are passed through verbatim; storage failures are
/// logged and replaced by a generic message.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match &error {
            ProductsServiceError::NotFound(_) | ProductsServiceError::SkuNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: error.to_string(),
            },
            ProductsServiceError::DuplicateSku(_)
            | ProductsServiceError::InsufficientStock { .. }
            | ProductsServiceError::Validation(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: error.to_string(),
            },
            ProductsServiceError::Sql(source) => {
                error!("storage failure: {source}");

                Self::internal()
            }
        }
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            error: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            "4XX",
            salvo::oapi::Response::new("Request error, body is `{\"error\": \"<message>\"}`"),
        );
        operation.responses.insert(
            "5XX",
            salvo::oapi::Response::new("Server error, body is `{\"error\": \"<message>\"}`"),
        );
    }
}
