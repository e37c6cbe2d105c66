//! Query parameters accepted by the inventory list endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Largest page the list endpoints return.
pub const MAX_LIST_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParamsError {
    #[error("limit must be between 1 and {max}, got {value}")]
    LimitOutOfRange { value: u32, max: u32 },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Filters, pagination and ordering for a list call.
///
/// Unset parameters are left out of the query string entirely, so the API
/// applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListQueryParams {
    /// Only items with a negative inventory amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_negative: Option<bool>,
    /// Return complete records instead of the short form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    /// Only items with a positive inventory amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_exists: Option<bool>,
    /// Page size (1-50).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Id of the last item of the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_after: Option<String>,
    /// Field to order by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by_direction: Option<OrderDirection>,
}

impl ListQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_start_after(mut self, id: impl Into<String>) -> Self {
        self.start_after = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_by = Some(field.into());
        self.order_by_direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_inventory_exists(mut self, value: bool) -> Self {
        self.inventory_exists = Some(value);
        self
    }

    #[must_use]
    pub fn with_inventory_negative(mut self, value: bool) -> Self {
        self.inventory_negative = Some(value);
        self
    }

    #[must_use]
    pub fn with_complete(mut self, value: bool) -> Self {
        self.complete = Some(value);
        self
    }

    pub fn validate(&self) -> Result<(), QueryParamsError> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIST_LIMIT {
                return Err(QueryParamsError::LimitOutOfRange {
                    value: limit,
                    max: MAX_LIST_LIMIT,
                });
            }
        }
        if matches!(self.start_after.as_deref(), Some(s) if s.trim().is_empty()) {
            return Err(QueryParamsError::Empty("start_after"));
        }
        if matches!(self.order_by.as_deref(), Some(s) if s.trim().is_empty()) {
            return Err(QueryParamsError::Empty("order_by"));
        }
        Ok(())
    }

    /// Set parameters as `(name, value)` pairs, in a fixed order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.inventory_negative {
            pairs.push(("inventory_negative", v.to_string()));
        }
        if let Some(v) = self.complete {
            pairs.push(("complete", v.to_string()));
        }
        if let Some(v) = self.inventory_exists {
            pairs.push(("inventory_exists", v.to_string()));
        }
        if let Some(v) = self.limit {
            pairs.push(("limit", v.to_string()));
        }
        if let Some(v) = &self.start_after {
            pairs.push(("start_after", v.clone()));
        }
        if let Some(v) = &self.order_by {
            pairs.push(("order_by", v.clone()));
        }
        if let Some(v) = self.order_by_direction {
            pairs.push(("order_by_direction", v.as_str().to_string()));
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Percent-encoded `name=value` pairs joined with `&`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }
}
