//! HTTP client for the microCMS content service.

use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::schema::{ExperienceListResponse, ListResponse};

/// Failures raised by the content client.
#[derive(Debug, Error)]
pub enum Error {
	/// A required environment value was absent at build time. Fatal at
	/// initialization: the client refuses to construct without it.
	#[error("missing content service configuration: {0}")]
	MissingConfig(&'static str),
	/// Transport-level failure reaching the service.
	#[error("content request failed: {0}")]
	Http(#[from] reqwest::Error),
	/// The response body did not conform to the declared schema.
	#[error("content response failed validation: {0}")]
	Schema(#[from] serde_json::Error),
}

/// Optional list query parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListQueries {
	pub limit: Option<u32>,
	pub offset: Option<u32>,
	/// Sort expression, e.g. `-start_date`.
	pub orders: Option<&'static str>,
}

/// Client bound to one service domain and API key.
pub struct Client {
	http: reqwest::Client,
	base_url: String,
	api_key: String,
}

impl Client {
	/// Client for `https://{service_domain}.microcms.io/api/v1`.
	pub fn new(service_domain: &str, api_key: &str) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: format!("https://{service_domain}.microcms.io/api/v1"),
			api_key: api_key.to_owned(),
		}
	}

	/// Build the client from compile-time environment configuration
	/// (`MICROCMS_SERVICE_DOMAIN`, `MICROCMS_API_KEY`).
	pub fn from_env() -> Result<Self, Error> {
		let domain = option_env!("MICROCMS_SERVICE_DOMAIN")
			.ok_or(Error::MissingConfig("MICROCMS_SERVICE_DOMAIN"))?;
		let api_key =
			option_env!("MICROCMS_API_KEY").ok_or(Error::MissingConfig("MICROCMS_API_KEY"))?;
		Ok(Self::new(domain, api_key))
	}

	/// Fetch and schema-validate a list endpoint. One shot, no retries;
	/// failures propagate to the caller.
	async fn fetch_list<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		queries: ListQueries,
	) -> Result<ListResponse<T>, Error> {
		let mut request = self
			.http
			.get(format!("{}/{endpoint}", self.base_url))
			.header("X-MICROCMS-API-KEY", &self.api_key);
		if let Some(limit) = queries.limit {
			request = request.query(&[("limit", limit)]);
		}
		if let Some(offset) = queries.offset {
			request = request.query(&[("offset", offset)]);
		}
		if let Some(orders) = queries.orders {
			request = request.query(&[("orders", orders)]);
		}

		let body = request.send().await?.error_for_status()?.text().await?;
		let list: ListResponse<T> = serde_json::from_str(&body)?;
		info!("content: fetched {} of {} from {endpoint}", list.contents.len(), list.total_count);
		Ok(list)
	}

	/// Fetch the experience list.
	pub async fn get_experiences(
		&self,
		queries: ListQueries,
	) -> Result<ExperienceListResponse, Error> {
		self.fetch_list("experiencies", queries).await
	}
}

#[cfg(test)]
mod tests {
	use super::{Client, Error};

	#[test]
	fn missing_config_names_the_variable() {
		let err = Error::MissingConfig("MICROCMS_SERVICE_DOMAIN");
		assert!(err.to_string().contains("MICROCMS_SERVICE_DOMAIN"));
	}

	#[test]
	fn base_url_targets_the_service_domain() {
		let client = Client::new("inenico", "test-key");
		assert_eq!(client.base_url, "https://inenico.microcms.io/api/v1");
	}
}
