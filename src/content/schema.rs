//! Record schemas for the content service.
//!
//! Validation is deserialization: a response that does not conform to
//! these shapes fails with a schema error instead of producing
//! partially-typed data.

use serde::Deserialize;

/// One work-experience record.
///
/// The service manages `id` and the four timestamp fields; `name`,
/// `role`, and the date range are authored content.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Experience {
	pub id: String,
	#[serde(rename = "createdAt")]
	pub created_at: String,
	#[serde(rename = "updatedAt")]
	pub updated_at: String,
	#[serde(rename = "publishedAt")]
	pub published_at: Option<String>,
	#[serde(rename = "revisedAt")]
	pub revised_at: Option<String>,
	pub name: String,
	pub role: String,
	pub start_date: String,
	/// Absent or null while the position is current.
	#[serde(default)]
	pub end_date: Option<String>,
}

/// Paginated list envelope shared by every list endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ListResponse<T> {
	pub contents: Vec<T>,
	#[serde(rename = "totalCount")]
	pub total_count: u32,
	pub offset: u32,
	pub limit: u32,
}

/// The experience list as returned by the service.
pub type ExperienceListResponse = ListResponse<Experience>;

#[cfg(test)]
mod tests {
	use super::{Experience, ExperienceListResponse};

	const CONFORMING: &str = r#"{
		"id": "exp-1",
		"createdAt": "2023-04-01T00:00:00.000Z",
		"updatedAt": "2024-01-15T00:00:00.000Z",
		"publishedAt": "2023-04-01T00:00:00.000Z",
		"name": "YUMEMI Inc.",
		"role": "Frontend Dev Lead",
		"start_date": "2023-04-01",
		"end_date": null
	}"#;

	#[test]
	fn conforming_record_parses_with_typed_role() {
		let experience: Experience = serde_json::from_str(CONFORMING).unwrap();
		assert_eq!(experience.role, "Frontend Dev Lead");
		assert_eq!(experience.end_date, None);
		assert_eq!(experience.revised_at, None);
	}

	#[test]
	fn record_missing_role_fails_validation() {
		let raw = r#"{
			"id": "exp-1",
			"createdAt": "2023-04-01T00:00:00.000Z",
			"updatedAt": "2024-01-15T00:00:00.000Z",
			"name": "YUMEMI Inc.",
			"start_date": "2023-04-01"
		}"#;
		let result = serde_json::from_str::<Experience>(raw);
		assert!(result.is_err());
	}

	#[test]
	fn list_envelope_parses() {
		let raw = format!(
			r#"{{"contents": [{CONFORMING}], "totalCount": 1, "offset": 0, "limit": 10}}"#
		);
		let list: ExperienceListResponse = serde_json::from_str(&raw).unwrap();
		assert_eq!(list.total_count, 1);
		assert_eq!(list.contents.len(), 1);
	}
}
