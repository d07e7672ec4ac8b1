//! Client of the external recommendation service.
//!
//! One client serves every view; each operation only picks the endpoint and the
//! payload parser from `contracts::shared::catalog_api`. Calls are single-shot:
//! nothing is retried and no timeout is applied here.

use contracts::domain::a001_person::aggregate::PersonId;
use contracts::domain::a004_generated_content::aggregate::GeneratedContent;
use contracts::domain::common::catalog_item::ItemCollection;
use contracts::shared::catalog_api::{
    check_status, parse_json_body, parse_purchase_details, parse_recipe_markup,
    parse_recommendations, CatalogEndpoint,
};
use contracts::shared::config::CatalogConfig;
use contracts::shared::error::CatalogError;
use gloo_net::http::Request;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RemoteCatalogClient {
    api_base: String,
}

impl RemoteCatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            api_base: config.api_base.clone(),
        }
    }

    pub async fn fetch_purchase_history(
        &self,
        person_id: PersonId,
    ) -> Result<ItemCollection, CatalogError> {
        let body = self
            .get_json(CatalogEndpoint::PurchaseDetails, person_id, None)
            .await?;
        parse_purchase_details(&body)
    }

    pub async fn fetch_recommendations(
        &self,
        person_id: PersonId,
        top_n: usize,
    ) -> Result<ItemCollection, CatalogError> {
        let body = self
            .get_json(CatalogEndpoint::Recommendations, person_id, Some(top_n))
            .await?;
        parse_recommendations(&body)
    }

    pub async fn fetch_generated_content(
        &self,
        person_id: PersonId,
    ) -> Result<GeneratedContent, CatalogError> {
        let body = self
            .get_json(CatalogEndpoint::GeneratedRecipe, person_id, None)
            .await?;
        let markup = parse_recipe_markup(&body)?;
        Ok(GeneratedContent::new(person_id, &markup))
    }

    async fn get_json(
        &self,
        endpoint: CatalogEndpoint,
        person_id: PersonId,
        top_n: Option<usize>,
    ) -> Result<Value, CatalogError> {
        let url = endpoint.url(&self.api_base, person_id, top_n);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(CatalogError::transport)?;

        check_status(response.ok(), response.status(), response.status_text())?;

        let text = response.text().await.map_err(CatalogError::transport)?;
        parse_json_body(&text)
    }
}
