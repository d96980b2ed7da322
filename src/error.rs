use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::RecipeId;

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::RecipeNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_not_found_status() {
        let response = ApiError::RecipeNotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(ApiError::RecipeNotFound(9).to_string(), "Recipe not found: 9");
    }
}
