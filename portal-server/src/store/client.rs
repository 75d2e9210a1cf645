//! HTTP client for the upstream invoice store

use std::time::Duration;

use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::models::{PortalSettings, Provider, Rent, Space};

use crate::core::Config;

/// Client for the invoice store REST API
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Filters for listing rents
#[derive(Debug, Default, Clone)]
pub struct RentFilter {
    pub customer_id: Option<String>,
    pub provider_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitProofBody<'a> {
    proof_of_paid: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyPaymentBody<'a> {
    verified_by: &'a str,
    approve: bool,
}

impl StoreClient {
    /// Build a client from the server configuration
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| {
                AppError::with_message(ErrorCode::ConfigError, format!("http client: {}", e))
            })?;
        Ok(Self {
            http,
            base_url: config.store_base_url.trim_end_matches('/').to_string(),
            api_key: config.store_api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Map a transport error to the matching upstream error code
    fn transport_error(err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::new(ErrorCode::UpstreamTimeout)
        } else {
            AppError::with_message(ErrorCode::UpstreamError, err.to_string())
        }
    }

    /// Check the response status, mapping 404 to the given domain code
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        not_found: ErrorCode,
    ) -> Result<T, AppError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::new(not_found));
        }
        if !status.is_success() {
            return Err(AppError::with_message(
                ErrorCode::UpstreamError,
                format!("invoice store returned {}", status),
            ));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::with_message(ErrorCode::UpstreamError, e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        not_found: ErrorCode,
    ) -> Result<T, AppError> {
        let response = self
            .request(self.http.get(self.url(path)).query(query))
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::decode(response, not_found).await
    }

    // ==================== Rents ====================

    /// GET /rents - orders visible to the caller, optionally filtered
    pub async fn list_rents(&self, filter: &RentFilter) -> Result<Vec<Rent>, AppError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(customer_id) = &filter.customer_id {
            query.push(("customerId", customer_id));
        }
        if let Some(provider_id) = &filter.provider_id {
            query.push(("providerId", provider_id));
        }
        self.get("/rents", &query, ErrorCode::RentNotFound).await
    }

    /// GET /rents/{id}
    pub async fn get_rent(&self, id: &str) -> Result<Rent, AppError> {
        self.get(&format!("/rents/{}", id), &[], ErrorCode::RentNotFound)
            .await
    }

    /// POST /rents/{id}/invoices/{invoice_id}/proof - attach a payment proof
    ///
    /// The store owns the status transition (`unpaid`/`rejected` → `paid`).
    pub async fn submit_payment_proof(
        &self,
        rent_id: &str,
        invoice_id: &str,
        proof_of_paid: &str,
    ) -> Result<Rent, AppError> {
        let path = format!("/rents/{}/invoices/{}/proof", rent_id, invoice_id);
        let response = self
            .request(self.http.post(self.url(&path)))
            .json(&SubmitProofBody { proof_of_paid })
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::decode(response, ErrorCode::InvoiceNotFound).await
    }

    /// POST /rents/{id}/invoices/{invoice_id}/verify - record a staff decision
    ///
    /// The store owns the status transition (`paid` → `verified`/`rejected`).
    pub async fn verify_payment(
        &self,
        rent_id: &str,
        invoice_id: &str,
        verified_by: &str,
        approve: bool,
    ) -> Result<Rent, AppError> {
        let path = format!("/rents/{}/invoices/{}/verify", rent_id, invoice_id);
        let response = self
            .request(self.http.post(self.url(&path)))
            .json(&VerifyPaymentBody {
                verified_by,
                approve,
            })
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::decode(response, ErrorCode::InvoiceNotFound).await
    }

    // ==================== Catalog ====================

    /// GET /spaces
    pub async fn list_spaces(&self) -> Result<Vec<Space>, AppError> {
        self.get("/spaces", &[], ErrorCode::SpaceNotFound).await
    }

    /// GET /spaces/{id}
    pub async fn get_space(&self, id: &str) -> Result<Space, AppError> {
        self.get(&format!("/spaces/{}", id), &[], ErrorCode::SpaceNotFound)
            .await
    }

    /// GET /providers
    pub async fn list_providers(&self) -> Result<Vec<Provider>, AppError> {
        self.get("/providers", &[], ErrorCode::ProviderNotFound).await
    }

    /// GET /providers/{id}
    pub async fn get_provider(&self, id: &str) -> Result<Provider, AppError> {
        self.get(
            &format!("/providers/{}", id),
            &[],
            ErrorCode::ProviderNotFound,
        )
        .await
    }

    // ==================== Settings ====================

    /// GET /settings - portal-wide settings (tax rate)
    pub async fn get_settings(&self) -> Result<PortalSettings, AppError> {
        self.get("/settings", &[], ErrorCode::NotFound).await
    }
}
