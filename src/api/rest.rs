//! Table access over the backend's PostgREST endpoint.
//!
//! Only the four shapes the dashboard needs: full ordered select, insert (one
//! row or a bulk array), single-field patch by id, delete by id.

use super::{ApiClient, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sort direction for `order=<column>.<dir>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    Asc,
    Desc,
}

pub(crate) fn order_param(column: &str, order: Order) -> String {
    match order {
        Order::Asc => format!("{column}.asc"),
        Order::Desc => format!("{column}.desc"),
    }
}

/// Equality filter value for `id=eq.<id>`.
pub(crate) fn id_filter(id: &str) -> String {
    format!("eq.{id}")
}

impl ApiClient {
    pub(crate) async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        order_by: &str,
        order: Order,
    ) -> ApiResult<Vec<T>> {
        let req = self
            .backend_request(reqwest::Method::GET, self.rest_url(table))
            .query(&[("select", "*".to_string()), ("order", order_param(order_by, order))]);

        // PostgREST answers an empty table with `[]`; `null` only shows up on odd proxies.
        let rows: Option<Vec<T>> = Self::execute(req, &format!("Load {table}")).await?;
        Ok(rows.unwrap_or_default())
    }

    /// `rows` may be a single object or a slice; PostgREST accepts both.
    pub(crate) async fn insert_rows<B: Serialize + ?Sized>(
        &self,
        table: &str,
        rows: &B,
    ) -> ApiResult<()> {
        let req = self
            .backend_request(reqwest::Method::POST, self.rest_url(table))
            .header("Prefer", "return=minimal")
            .json(rows);

        Self::execute(req, &format!("Insert into {table}")).await
    }

    pub(crate) async fn update_by_id<B: Serialize + ?Sized>(
        &self,
        table: &str,
        id: &str,
        patch: &B,
    ) -> ApiResult<()> {
        let req = self
            .backend_request(reqwest::Method::PATCH, self.rest_url(table))
            .query(&[("id", id_filter(id))])
            .header("Prefer", "return=minimal")
            .json(patch);

        Self::execute(req, &format!("Update {table}")).await
    }

    /// Deleting a row that does not exist is not an error.
    pub(crate) async fn delete_by_id(&self, table: &str, id: &str) -> ApiResult<()> {
        let req = self
            .backend_request(reqwest::Method::DELETE, self.rest_url(table))
            .query(&[("id", id_filter(id))]);

        Self::execute(req, &format!("Delete from {table}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_param() {
        assert_eq!(order_param("created_at", Order::Desc), "created_at.desc");
        assert_eq!(order_param("scheduled_date", Order::Asc), "scheduled_date.asc");
    }

    #[test]
    fn test_id_filter() {
        assert_eq!(id_filter("4b1c"), "eq.4b1c");
    }
}
