//! Brewfather inventory API data model.
//!
//! Record types mirror the JSON returned by the `/inventory` endpoints of the
//! Brewfather v2 API. Summary types come from the list endpoints; detail
//! types embed the summary fields and add the full attribute set of a single
//! item.

pub mod category;
pub mod fermentable;
pub mod hop;
pub mod inventory;
pub mod query;
pub mod record;
pub mod timestamp;
pub mod yeast;

pub use category::InventoryCategory;
pub use fermentable::{Fermentable, FermentableDetail};
pub use hop::{Hop, HopDetail};
pub use inventory::{InventoryDetail, InventoryList};
pub use query::{ListQueryParams, OrderDirection, QueryParamsError, MAX_LIST_LIMIT};
pub use record::RecordMetadata;
pub use timestamp::{unix_to_iso8601, DateValue, Timestamp};
pub use yeast::{Yeast, YeastDetail};
