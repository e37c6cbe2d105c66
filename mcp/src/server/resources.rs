//! `inventory://` resource addressing.

use brewfather_protocol::InventoryCategory;
use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceTemplate};
use serde_json::json;

use crate::error::{McpError, McpResult};

pub const SCHEME: &str = "inventory://";
const MIME_TYPE: &str = "text/plain";

/// A parsed `inventory://` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryResource {
    /// `inventory://categories`
    Categories,
    /// `inventory://overview`
    Overview,
    /// `inventory://{category}`
    List(InventoryCategory),
    /// `inventory://{category}/{identifier}`
    Item {
        category: InventoryCategory,
        identifier: String,
    },
}

impl InventoryResource {
    pub fn parse(uri: &str) -> McpResult<Self> {
        let not_found = || McpError::ResourceNotFound(uri.to_string());
        let path = uri.strip_prefix(SCHEME).ok_or_else(not_found)?;

        match path.split_once('/') {
            None => match path {
                "categories" => Ok(Self::Categories),
                "overview" => Ok(Self::Overview),
                category => category
                    .parse()
                    .map(Self::List)
                    .map_err(|_| not_found()),
            },
            Some((category, identifier)) => {
                if identifier.is_empty() || identifier.contains('/') {
                    return Err(not_found());
                }
                Ok(Self::Item {
                    category: category.parse().map_err(|_| not_found())?,
                    identifier: identifier.to_string(),
                })
            }
        }
    }

    pub fn uri(&self) -> String {
        match self {
            Self::Categories => format!("{SCHEME}categories"),
            Self::Overview => format!("{SCHEME}overview"),
            Self::List(category) => format!("{SCHEME}{category}"),
            Self::Item {
                category,
                identifier,
            } => format!("{SCHEME}{category}/{identifier}"),
        }
    }
}

fn resource(target: InventoryResource, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(target.uri(), name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some(MIME_TYPE.to_string());
    raw.no_annotation()
}

fn list_description(category: InventoryCategory) -> &'static str {
    match category {
        InventoryCategory::Fermentables => {
            "List all the fermentables (malts, adjuncts, grains, etc) in the inventory."
        }
        InventoryCategory::Hops => "List all the hops in the inventory.",
        InventoryCategory::Yeasts => "List all the yeasts in the inventory.",
    }
}

/// Fixed resources, in listing order.
pub fn resources() -> Vec<Resource> {
    let mut resources = vec![resource(
        InventoryResource::Categories,
        "Inventory Categories",
        "Lists the available inventory categories.",
    )];
    resources.extend(InventoryCategory::ALL.into_iter().map(|category| {
        resource(
            InventoryResource::List(category),
            category.title(),
            list_description(category),
        )
    }));
    resources.push(resource(
        InventoryResource::Overview,
        "Brewfather Inventory Overview",
        "Overview of all the inventory (malts, grains, hops and yeasts). \
         Contains the same data as the PDF/print export from the app.",
    ));
    resources
}

/// One `inventory://{category}/{identifier}` template per category.
pub fn resource_templates() -> Result<Vec<ResourceTemplate>, serde_json::Error> {
    InventoryCategory::ALL
        .into_iter()
        .map(|category| {
            serde_json::from_value(json!({
                "uriTemplate": format!("{SCHEME}{category}/{{identifier}}"),
                "name": format!("{} detail", category.title()),
                "description": format!(
                    "Detailed information of a single item of the {category} inventory."
                ),
                "mimeType": MIME_TYPE,
            }))
        })
        .collect()
}
