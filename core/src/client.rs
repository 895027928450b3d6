//! Stateless HTTP request builder and response parser for the menu API.
//!
//! # Design
//! `MenuClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation on the `/foods` resource is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Food, NewFood};

/// Synchronous, stateless client for the `/foods` resource.
#[derive(Debug, Clone)]
pub struct MenuClient {
    base_url: String,
}

impl MenuClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_foods(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_food(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_food(&self, input: &NewFood) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_path(), input)
    }

    /// The whole record is sent; the server replaces rather than patches.
    pub fn build_replace_food(&self, food: &Food) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_path(food.id), food)
    }

    pub fn build_delete_food(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_foods(&self, response: HttpResponse) -> Result<Vec<Food>, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    pub fn parse_get_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    pub fn parse_create_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response, &[201, 200])?;
        decode(&response)
    }

    pub fn parse_replace_food(&self, response: HttpResponse) -> Result<Food, ApiError> {
        check_status(&response, &[200])?;
        decode(&response)
    }

    /// Success is signaled by status alone; any body is ignored.
    pub fn parse_delete_food(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[204, 200])?;
        Ok(())
    }

    fn collection_path(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/foods/{id}", self.base_url)
    }
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
