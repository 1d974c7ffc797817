use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    client::ApiClient,
    types::{ApiError, ListItemsResponse},
};

/// Characters escaped inside the `getbytitle('...')` path segment.
const LIST_TITLE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// OData string literal: single quotes are doubled.
pub fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn list_items_url(site_url: &str, list_title: &str) -> String {
    let title = utf8_percent_encode(&list_title.replace('\'', "''"), LIST_TITLE).to_string();
    format!(
        "{}/_api/web/lists/getbytitle('{}')/items",
        site_url.trim_end_matches('/'),
        title
    )
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    filter: Option<String>,
    select: Vec<&'static str>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_eq(mut self, field: &str, value: &str) -> Self {
        self.filter = Some(format!("{} eq {}", field, odata_literal(value)));
        self
    }

    pub fn select(mut self, fields: &[&'static str]) -> Self {
        self.select = fields.to_vec();
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(filter) = &self.filter {
            params.push(("$filter", filter.clone()));
        }
        if !self.select.is_empty() {
            params.push(("$select", self.select.join(",")));
        }
        params
    }
}

impl ApiClient {
    pub async fn get_list_items<T>(
        &self,
        list_title: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let settings = self.resolved_settings().await;
        let params = query.params();
        let mut request = self
            .http_client()
            .get(list_items_url(&settings.site_url, list_title));
        if !params.is_empty() {
            request = request.query(&params);
        }
        let request = Self::with_store_headers(request, &settings, false);
        let response = self.send(request).await?;
        let envelope: ListItemsResponse<T> = self.map_json_response(response).await?;
        Ok(envelope.value)
    }

    pub async fn add_list_item<T>(&self, list_title: &str, item: &T) -> Result<(), ApiError>
    where
        T: Serialize + ?Sized,
    {
        let settings = self.resolved_settings().await;
        let request = self
            .http_client()
            .post(list_items_url(&settings.site_url, list_title));
        let request = Self::with_store_headers(request, &settings, true).json(item);
        let response = self.send(request).await?;
        self.map_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_skips_missing_parts() {
        assert!(ListQuery::new().params().is_empty());
    }

    #[test]
    fn list_query_builds_filter_and_select() {
        let params = ListQuery::new()
            .filter_eq("EmployeeEmail", "o'neil@example.com")
            .select(&["Title", "Status"])
            .params();
        assert!(params.contains(&(
            "$filter",
            "EmployeeEmail eq 'o''neil@example.com'".to_string()
        )));
        assert!(params.contains(&("$select", "Title,Status".to_string())));
    }

    #[test]
    fn list_items_url_escapes_title() {
        assert_eq!(
            list_items_url("https://tenant.example.com/sites/hr/", "Leave Requests"),
            "https://tenant.example.com/sites/hr/_api/web/lists/getbytitle('Leave%20Requests')/items"
        );
        assert_eq!(
            list_items_url("", "LeaveRequests"),
            "/_api/web/lists/getbytitle('LeaveRequests')/items"
        );
    }
}
