//! Request/response contract of the external recommendation service.
//!
//! Endpoints and payload checks live here so the browser client only has to move
//! bytes; everything that decides whether a response is usable is testable natively.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::a001_person::aggregate::PersonId;
use crate::domain::a002_purchase_history::aggregate::{PurchaseRecord, PURCHASE_DETAILS_FIELD};
use crate::domain::a003_recommendation::aggregate::{
    RecommendationRecord, TOP_RECOMMENDATIONS_FIELD,
};
use crate::domain::a004_generated_content::aggregate::RECIPE_FIELD;
use crate::domain::common::catalog_item::{CatalogItem, ItemCollection};
use crate::shared::error::CatalogError;

/// Endpoints of the recommendation service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    PurchaseDetails,
    Recommendations,
    GeneratedRecipe,
}

impl CatalogEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::PurchaseDetails => "/api/purchase-details/",
            Self::Recommendations => "/api/data/",
            Self::GeneratedRecipe => "/generate-recipe/",
        }
    }

    /// Top-level field of the JSON body carrying the payload
    pub fn payload_field(&self) -> &'static str {
        match self {
            Self::PurchaseDetails => PURCHASE_DETAILS_FIELD,
            Self::Recommendations => TOP_RECOMMENDATIONS_FIELD,
            Self::GeneratedRecipe => RECIPE_FIELD,
        }
    }

    /// Full request URL. `top_n` is only sent when given.
    pub fn url(&self, api_base: &str, person_id: PersonId, top_n: Option<usize>) -> String {
        let mut url = format!(
            "{}{}?personId={}",
            api_base.trim_end_matches('/'),
            self.path(),
            person_id
        );
        if let Some(n) = top_n {
            url.push_str(&format!("&topN={}", n));
        }
        url
    }
}

/// Any non-success status fails the fetch, whatever the endpoint
pub fn check_status(ok: bool, status: u16, status_text: String) -> Result<(), CatalogError> {
    if ok {
        Ok(())
    } else {
        Err(CatalogError::RemoteService {
            status,
            status_text,
        })
    }
}

/// Response body as JSON; anything unparsable is a malformed response
pub fn parse_json_body(text: &str) -> Result<Value, CatalogError> {
    serde_json::from_str(text).map_err(|e| CatalogError::malformed(e.to_string()))
}

/// Pull the sequence stored under `field` and deserialize each element.
///
/// A missing field, a non-list value or a bad row all fail the whole response:
/// partial data is never shown.
pub fn extract_records<R: DeserializeOwned>(
    body: &Value,
    field: &str,
) -> Result<Vec<R>, CatalogError> {
    let rows = body
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::malformed(format!("expected `{}` to be a list", field)))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            R::deserialize(row).map_err(|e| CatalogError::malformed(format!("row {}: {}", i, e)))
        })
        .collect()
}

/// Records of one endpoint mapped into catalog items, order preserved
pub fn extract_collection<R, F>(
    body: &Value,
    endpoint: CatalogEndpoint,
    map: F,
) -> Result<ItemCollection, CatalogError>
where
    R: DeserializeOwned,
    F: Fn(R) -> CatalogItem,
{
    Ok(extract_records::<R>(body, endpoint.payload_field())?
        .into_iter()
        .map(map)
        .collect())
}

pub fn parse_purchase_details(body: &Value) -> Result<ItemCollection, CatalogError> {
    extract_collection::<PurchaseRecord, _>(body, CatalogEndpoint::PurchaseDetails, CatalogItem::from)
}

pub fn parse_recommendations(body: &Value) -> Result<ItemCollection, CatalogError> {
    extract_collection::<RecommendationRecord, _>(
        body,
        CatalogEndpoint::Recommendations,
        CatalogItem::from,
    )
}

/// Raw markup of a `generate-recipe` response
pub fn parse_recipe_markup(body: &Value) -> Result<String, CatalogError> {
    body.get(RECIPE_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CatalogError::malformed(format!("expected `{}` to be a string", RECIPE_FIELD)))
}
