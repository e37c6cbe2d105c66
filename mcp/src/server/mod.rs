//! MCP server exposing the Brewfather inventory.
//!
//! Resources, tools and prompts all render plain text. The API client is
//! injected as an [`InventoryApi`] trait object, so the handler never builds
//! one itself.

mod prompts;
mod resources;

use std::sync::Arc;

use brewfather_batch::BatchSize;
use brewfather_client::InventoryApi;
use brewfather_protocol::{InventoryCategory, ListQueryParams};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData, RoleServer, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, error};

pub use prompts::POSSIBLE_BEER_STYLES;
pub use resources::InventoryResource;

use crate::{
    error::{McpError, McpResult},
    format, inventory,
};

pub const SERVER_NAME: &str = "brewfather-mcp";

const INSTRUCTIONS: &str = "Read-only access to a Brewfather inventory of fermentables, hops \
and yeasts. Start with the inventory_overview tool or the inventory://overview resource; use \
list_inventory to filter one category and inventory_item_detail for everything known about a \
single item.";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListInventoryRequest {
    /// Inventory category: fermentables, hops or yeasts
    pub category: InventoryCategory,
    #[serde(flatten)]
    pub query: ListQueryParams,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ItemDetailRequest {
    /// Inventory category: fermentables, hops or yeasts
    pub category: InventoryCategory,
    /// Item identifier, as shown in the inventory lists
    pub identifier: String,
}

#[derive(Clone)]
pub struct BrewfatherServer {
    api: Arc<dyn InventoryApi>,
    batch_size: BatchSize,
    tool_router: ToolRouter<Self>,
}

impl BrewfatherServer {
    pub fn new(api: Arc<dyn InventoryApi>, batch_size: BatchSize) -> Self {
        Self {
            api,
            batch_size,
            tool_router: Self::tool_router(),
        }
    }

    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    pub async fn overview_text(&self) -> McpResult<String> {
        let overview = inventory::inventory_overview(self.api.as_ref(), self.batch_size).await?;
        Ok(format::overview(&overview))
    }

    pub async fn list_text(
        &self,
        category: InventoryCategory,
        params: Option<&ListQueryParams>,
    ) -> McpResult<String> {
        if let Some(params) = params {
            params
                .validate()
                .map_err(|e| McpError::InvalidArguments(e.to_string()))?;
        }
        let items = self.api.list(category, params).await?;
        debug!(category = %category, items = items.len(), "Listed inventory");
        Ok(format::list(&items))
    }

    pub async fn detail_text(&self, category: InventoryCategory, id: &str) -> McpResult<String> {
        let item = self.api.detail(category, id).await?;
        Ok(format::detail(&item))
    }

    /// Text behind an `inventory://` resource.
    pub async fn read(&self, resource: &InventoryResource) -> McpResult<String> {
        match resource {
            InventoryResource::Categories => Ok(format::categories()),
            InventoryResource::Overview => self.overview_text().await,
            InventoryResource::List(category) => self.list_text(*category, None).await,
            InventoryResource::Item {
                category,
                identifier,
            } => self.detail_text(*category, identifier).await,
        }
    }
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

#[tool_router]
impl BrewfatherServer {
    #[tool(
        description = "Overview of all the inventory (malts, grains, hops and yeasts) with lot \
                       numbers, best before dates and stock. Contains the same data as the \
                       PDF/print export from the app.",
        annotations(read_only_hint = true)
    )]
    async fn inventory_overview(&self) -> Result<CallToolResult, ErrorData> {
        let text = self
            .overview_text()
            .await
            .inspect_err(|e| error!(tool = "inventory_overview", error = %e, "Tool call failed"))?;
        Ok(text_result(text))
    }

    #[tool(
        description = "List the items of one inventory category, optionally filtered, paginated \
                       and ordered.",
        annotations(read_only_hint = true)
    )]
    async fn list_inventory(
        &self,
        Parameters(request): Parameters<ListInventoryRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self
            .list_text(request.category, Some(&request.query))
            .await
            .inspect_err(|e| {
                error!(
                    tool = "list_inventory",
                    category = %request.category,
                    error = %e,
                    "Tool call failed"
                )
            })?;
        Ok(text_result(text))
    }

    #[tool(
        description = "Every attribute of a single inventory item.",
        annotations(read_only_hint = true)
    )]
    async fn inventory_item_detail(
        &self,
        Parameters(request): Parameters<ItemDetailRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = self
            .detail_text(request.category, &request.identifier)
            .await
            .inspect_err(|e| {
                error!(
                    tool = "inventory_item_detail",
                    category = %request.category,
                    identifier = %request.identifier,
                    error = %e,
                    "Tool call failed"
                )
            })?;
        Ok(text_result(text))
    }
}

#[tool_handler]
impl ServerHandler for BrewfatherServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_prompts()
            .enable_resources()
            .enable_tools()
            .build();
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let templates = resources::resource_templates().map_err(|e| {
            error!(error = %e, "Failed to build resource templates");
            ErrorData::internal_error(e.to_string(), None)
        })?;
        Ok(ListResourceTemplatesResult::with_all_items(templates))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let result = match InventoryResource::parse(&request.uri) {
            Ok(resource) => self.read(&resource).await,
            Err(e) => Err(e),
        };
        let text =
            result.inspect_err(|e| error!(uri = %request.uri, error = %e, "Resource read failed"))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, request.uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(prompts::prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        Ok(prompts::get_prompt(&request.name)
            .inspect_err(|e| error!(prompt = %request.name, error = %e, "Prompt lookup failed"))?)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::{ErrorCode, RawContent};
    use serde_json::json;

    use super::*;
    use crate::test_support::FakeInventory;

    fn server(api: FakeInventory) -> BrewfatherServer {
        BrewfatherServer::new(Arc::new(api), BatchSize::DEFAULT)
    }

    fn stocked() -> FakeInventory {
        FakeInventory::new()
            .with_fermentable(json!({
                "_id": "f-1",
                "name": "Pilsner Malt",
                "type": "Grain",
                "supplier": "Weyermann",
                "inventory": 25,
                "potentialPercentage": 81
            }))
            .with_hop(json!({ "_id": "h-1", "name": "Saaz", "alpha": 3.5, "inventory": 250 }))
            .with_hop(json!({ "_id": "h-2", "name": "Citra", "alpha": 12.5 }))
            .with_yeast(json!({ "_id": "y-1", "name": "Saflager W-34/70", "form": "Dry" }))
    }

    fn only_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_server_info() {
        let info = server(FakeInventory::new()).get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_registered_tools() {
        let server = server(FakeInventory::new());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["inventory_item_detail", "inventory_overview", "list_inventory"]
        );
    }

    #[tokio::test]
    async fn test_read_categories() {
        let text = server(FakeInventory::new())
            .read(&InventoryResource::Categories)
            .await
            .unwrap();
        assert!(text.contains("inventory://hops"));
    }

    #[tokio::test]
    async fn test_read_list_resource() {
        let text = server(stocked())
            .read(&InventoryResource::List(InventoryCategory::Hops))
            .await
            .unwrap();
        assert!(text.contains("Name: Saaz"));
        assert!(text.contains("\n---\n"));
        assert!(text.contains("Identifier: h-2"));
    }

    #[tokio::test]
    async fn test_read_item_resource() {
        let resource = InventoryResource::parse("inventory://fermentables/f-1").unwrap();
        let text = server(stocked()).read(&resource).await.unwrap();
        assert!(text.starts_with("Name: Pilsner Malt\nIdentifier: f-1"));
        assert!(text.contains("Yield: 81%"));
    }

    #[tokio::test]
    async fn test_read_missing_item_is_not_found() {
        let resource = InventoryResource::Item {
            category: InventoryCategory::Yeasts,
            identifier: "nope".to_string(),
        };
        let err = server(stocked()).read(&resource).await.unwrap_err();
        assert!(matches!(&err, McpError::Client(e) if e.is_not_found()));

        let data: ErrorData = err.into();
        assert_eq!(data.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_overview_tool() {
        let result = server(stocked()).inventory_overview().await.unwrap();
        let text = only_text(&result);
        assert!(text.contains("## Fermentables\nName: Pilsner Malt"));
        assert!(text.contains("Inventory Amount: 250 grams"));
        assert!(text.contains("## Yeasts\nName: Saflager W-34/70\nForm: Dry"));
    }

    #[tokio::test]
    async fn test_list_tool_applies_query() {
        let request: ListInventoryRequest =
            serde_json::from_value(json!({ "category": "hops", "limit": 1 })).unwrap();
        assert_eq!(request.query.limit, Some(1));

        let result = server(stocked())
            .list_inventory(Parameters(request))
            .await
            .unwrap();
        let text = only_text(&result);
        assert!(text.contains("Name: Saaz"));
        assert!(!text.contains("Citra"));
    }

    #[tokio::test]
    async fn test_list_tool_rejects_invalid_limit() {
        let request: ListInventoryRequest =
            serde_json::from_value(json!({ "category": "yeasts", "limit": 0 })).unwrap();

        let err = server(stocked())
            .list_inventory(Parameters(request))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_detail_tool() {
        let request: ItemDetailRequest =
            serde_json::from_value(json!({ "category": "hops", "identifier": "h-2" })).unwrap();

        let result = server(stocked())
            .inventory_item_detail(Parameters(request))
            .await
            .unwrap();
        assert!(only_text(&result).contains("Alpha Acid: 12.5%"));
    }

    #[tokio::test]
    async fn test_overview_tool_propagates_failure() {
        let err = server(stocked().failing("h-2"))
            .inventory_overview()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
