use brewfather_batch::{run_batched, BatchSize};
use brewfather_client::InventoryApi;
use brewfather_protocol::{
    Fermentable, FermentableDetail, Hop, HopDetail, InventoryCategory, Yeast, YeastDetail,
};
use tracing::debug;

use super::row::SummaryRow;
use crate::{
    error::{McpError, McpResult},
    format::{date, number, percent, quantity, text, NOT_AVAILABLE},
};

/// Identifier shared by a summary record and the detail fetched for it.
trait RecordId {
    fn record_id(&self) -> &str;
}

macro_rules! record_id {
    ($summary:ty, $detail:ty) => {
        impl RecordId for $summary {
            fn record_id(&self) -> &str {
                &self.id
            }
        }

        impl RecordId for $detail {
            fn record_id(&self) -> &str {
                &self.summary.id
            }
        }
    };
}

record_id!(Fermentable, FermentableDetail);
record_id!(Hop, HopDetail);
record_id!(Yeast, YeastDetail);

/// Pairs every summary with the detail fetched for it.
///
/// The scheduler guarantees `details[i]` answers `summaries[i]`; a length or id
/// mismatch means that guarantee was broken and nothing is projected.
fn align<'a, S, D>(summaries: &'a [S], details: Vec<D>) -> McpResult<Vec<(&'a S, D)>>
where
    S: RecordId,
    D: RecordId,
{
    if summaries.len() != details.len() {
        return Err(McpError::Alignment {
            summaries: summaries.len(),
            details: details.len(),
        });
    }

    summaries
        .iter()
        .zip(details)
        .enumerate()
        .map(|(index, (summary, detail))| {
            if summary.record_id() == detail.record_id() {
                Ok((summary, detail))
            } else {
                Err(McpError::Misaligned {
                    index,
                    summary_id: summary.record_id().to_string(),
                    detail_id: detail.record_id().to_string(),
                })
            }
        })
        .collect()
}

/// Name, Type, Yield, Lot #, Best Before Date and Inventory Amount of every
/// fermentable.
pub async fn fermentables_summary<A>(api: &A, batch_size: BatchSize) -> McpResult<Vec<SummaryRow>>
where
    A: InventoryApi + ?Sized,
{
    let summaries = api.fermentables(None).await?;
    let details = run_batched(
        batch_size,
        summaries.iter().map(Fermentable::record_id),
        |id| api.fermentable(id),
    )
    .await?;
    debug!(
        category = %InventoryCategory::Fermentables,
        items = summaries.len(),
        batch_size = batch_size.get(),
        "Fetched inventory details"
    );

    Ok(align(&summaries, details)?
        .into_iter()
        .map(|(summary, detail)| {
            SummaryRow::new()
                .with("Name", summary.name.as_str())
                .with("Type", text(summary.kind.as_deref()))
                // Extract yield, not friability; Brewfather reports it as potentialPercentage.
                .with("Yield", percent(detail.potential_percentage))
                .with("Lot #", text(detail.lot_number.as_deref()))
                .with("Best Before Date", date(detail.best_before_date.as_ref()))
                .with(
                    "Inventory Amount",
                    quantity(
                        detail.summary.inventory.or(summary.inventory),
                        InventoryCategory::Fermentables,
                    ),
                )
        })
        .collect())
}

/// Name, Year, Alpha Acid, Lot #, Best Before Date and Inventory Amount of
/// every hop.
pub async fn hops_summary<A>(api: &A, batch_size: BatchSize) -> McpResult<Vec<SummaryRow>>
where
    A: InventoryApi + ?Sized,
{
    let summaries = api.hops(None).await?;
    let details = run_batched(
        batch_size,
        summaries.iter().map(Hop::record_id),
        |id| api.hop(id),
    )
    .await?;
    debug!(
        category = %InventoryCategory::Hops,
        items = summaries.len(),
        batch_size = batch_size.get(),
        "Fetched inventory details"
    );

    Ok(align(&summaries, details)?
        .into_iter()
        .map(|(summary, detail)| {
            SummaryRow::new()
                .with("Name", summary.name.as_str())
                .with(
                    "Year",
                    detail
                        .year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                )
                .with("Alpha Acid", percent(summary.alpha))
                .with("Lot #", text(detail.lot_number.as_deref()))
                .with("Best Before Date", date(detail.best_before_date.as_ref()))
                .with(
                    "Inventory Amount",
                    quantity(
                        detail.summary.inventory.or(summary.inventory),
                        InventoryCategory::Hops,
                    ),
                )
        })
        .collect())
}

/// Name, Form, Attenuation, Lot #, Best Before Date and Inventory Amount of
/// every yeast.
pub async fn yeasts_summary<A>(api: &A, batch_size: BatchSize) -> McpResult<Vec<SummaryRow>>
where
    A: InventoryApi + ?Sized,
{
    let summaries = api.yeasts(None).await?;
    let details = run_batched(
        batch_size,
        summaries.iter().map(Yeast::record_id),
        |id| api.yeast(id),
    )
    .await?;
    debug!(
        category = %InventoryCategory::Yeasts,
        items = summaries.len(),
        batch_size = batch_size.get(),
        "Fetched inventory details"
    );

    Ok(align(&summaries, details)?
        .into_iter()
        .map(|(summary, detail)| {
            SummaryRow::new()
                .with("Name", summary.name.as_str())
                .with("Form", text(detail.form.as_deref()))
                .with(
                    "Attenuation",
                    summary
                        .attenuation
                        .map(|a| format!("{}%", number(a)))
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                )
                .with("Lot #", text(detail.lot_number.as_deref()))
                .with("Best Before Date", date(detail.best_before_date.as_ref()))
                .with(
                    "Inventory Amount",
                    quantity(
                        detail.summary.inventory.or(summary.inventory),
                        InventoryCategory::Yeasts,
                    ),
                )
        })
        .collect())
}
