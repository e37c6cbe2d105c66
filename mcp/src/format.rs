//! Plain-text rendering of inventory data for MCP clients.
//!
//! Every rendering is a sequence of `Label: value` lines. Missing values print
//! as [`NOT_AVAILABLE`]; list entries are separated by [`ENTRY_SEPARATOR`].

use std::fmt::Write;

use brewfather_protocol::{
    unix_to_iso8601, DateValue, FermentableDetail, HopDetail, InventoryCategory, InventoryDetail,
    InventoryList, RecordMetadata, Timestamp, YeastDetail,
};

use crate::inventory::{InventoryOverview, SummaryRow};

pub const NOT_AVAILABLE: &str = "N/A";
pub const ENTRY_SEPARATOR: &str = "---";

/// Numbers without a fractional part print without one: `5`, `0.7`, `12.5`.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub fn opt_number(value: Option<f64>) -> String {
    value.map(number).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}%", number(v)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn date(value: Option<&DateValue>) -> String {
    value
        .map(DateValue::to_iso8601)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn timestamp(value: Option<&Timestamp>) -> String {
    value
        .and_then(Timestamp::to_datetime)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Stock quantity with the unit of `category`. Brewfather leaves `inventory`
/// out for items that are not in stock, so a missing amount is zero.
pub fn quantity(value: Option<f64>, category: InventoryCategory) -> String {
    format!(
        "{} {}",
        number(value.unwrap_or(0.0)),
        category.inventory_unit()
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Line-oriented text builder.
#[derive(Debug, Default)]
struct Block(String);

impl Block {
    fn line(&mut self, label: &str, value: impl AsRef<str>) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = writeln!(self.0, "{}: {}", label, value.as_ref());
        self
    }

    fn heading(&mut self, heading: &str) -> &mut Self {
        let _ = writeln!(self.0, "## {heading}");
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.0.push('\n');
        self
    }

    fn separator(&mut self) -> &mut Self {
        let _ = writeln!(self.0, "{ENTRY_SEPARATOR}");
        self
    }

    /// Revision and audit lines shared by every detail record.
    fn metadata(&mut self, metadata: &RecordMetadata) -> &mut Self {
        let updated = match metadata.timestamp.as_ref() {
            Some(ts) => timestamp(Some(ts)),
            None => metadata
                .timestamp_ms
                .and_then(unix_to_iso8601)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        };
        self.line("Created", timestamp(metadata.created.as_ref()))
            .line("Timestamp", updated)
            .line("Version", text(metadata.version.as_deref()))
            .line("Rev", text(metadata.rev.as_deref()))
    }

    fn finish(self) -> String {
        self.0.trim_end().to_string()
    }
}

pub fn categories() -> String {
    let mut block = Block::default();
    for category in InventoryCategory::ALL {
        block.line(
            category.title(),
            format!("inventory://{}", category.as_str()),
        );
    }
    block.finish()
}

/// One entry per item, separated by [`ENTRY_SEPARATOR`].
pub fn list(items: &InventoryList) -> String {
    if items.is_empty() {
        return format!("No {} in the inventory.", items.category().as_str());
    }

    let entries: Vec<String> = match items {
        InventoryList::Fermentables(items) => items
            .iter()
            .map(|f| {
                let mut block = Block::default();
                block
                    .line("Name", &f.name)
                    .line("Type", text(f.kind.as_deref()))
                    .line("Supplier", text(f.supplier.as_deref()))
                    .line(
                        "Quantity",
                        quantity(f.inventory, InventoryCategory::Fermentables),
                    )
                    .line("Identifier", &f.id);
                block.finish()
            })
            .collect(),
        InventoryList::Hops(items) => items
            .iter()
            .map(|h| {
                let mut block = Block::default();
                block
                    .line("Name", &h.name)
                    .line("Type", text(h.kind.as_deref()))
                    .line("Use", text(h.usage_stage.as_deref()))
                    .line("Alpha Acid", percent(h.alpha))
                    .line("Quantity", quantity(h.inventory, InventoryCategory::Hops))
                    .line("Identifier", &h.id);
                block.finish()
            })
            .collect(),
        InventoryList::Yeasts(items) => items
            .iter()
            .map(|y| {
                let mut block = Block::default();
                block
                    .line("Name", &y.name)
                    .line("Type", text(y.kind.as_deref()))
                    .line("Attenuation", percent(y.attenuation))
                    .line("Quantity", quantity(y.inventory, InventoryCategory::Yeasts))
                    .line("Identifier", &y.id);
                block.finish()
            })
            .collect(),
    };

    entries.join(&format!("\n{ENTRY_SEPARATOR}\n"))
}

pub fn detail(item: &InventoryDetail) -> String {
    match item {
        InventoryDetail::Fermentable(d) => fermentable_detail(d),
        InventoryDetail::Hop(d) => hop_detail(d),
        InventoryDetail::Yeast(d) => yeast_detail(d),
    }
}

fn fermentable_detail(d: &FermentableDetail) -> String {
    let mut block = Block::default();
    block
        .line("Name", &d.summary.name)
        .line("Identifier", &d.summary.id)
        .line("Type", text(d.summary.kind.as_deref()))
        .line("Supplier", text(d.summary.supplier.as_deref()))
        .line("Origin", text(d.origin.as_deref()))
        .line("Grain Category", text(d.grain_category.as_deref()))
        .line("Color", opt_number(d.color))
        .line("Potential", opt_number(d.potential))
        .line("Yield", percent(d.potential_percentage))
        .line("Attenuation", percent(d.summary.attenuation))
        .line("Moisture", percent(d.moisture))
        .line("Protein", percent(d.protein))
        .line("Diastatic Power", opt_number(d.diastatic_power))
        .line("Friability", percent(d.friability))
        .line("Coarse/Fine Difference", percent(d.coarse_fine_diff))
        .line("FGDB", percent(d.fgdb))
        .line("CGDB", percent(d.cgdb))
        .line("FAN", opt_number(d.fan))
        .line("Acid", opt_number(d.acid))
        .line("IBU Per Amount", opt_number(d.ibu_per_amount))
        .line("Max In Batch", percent(d.max_in_batch))
        .line("Percentage", percent(d.percentage))
        .line("Amount", opt_number(d.amount))
        .line("Fermentable", yes_no(!d.not_fermentable))
        .line("Excluded", yes_no(d.excluded))
        .line("Hidden", yes_no(d.hidden))
        .line("Cost Per Amount", opt_number(d.cost_per_amount))
        .line("Lot #", text(d.lot_number.as_deref()))
        .line("Best Before Date", date(d.best_before_date.as_ref()))
        .line("Manufacturing Date", date(d.manufacturing_date.as_ref()))
        .line(
            "Inventory Amount",
            quantity(d.summary.inventory, InventoryCategory::Fermentables),
        )
        .line("Notes", text(d.notes.as_deref()))
        .line("User Notes", text(d.user_notes.as_deref()))
        .line("Used In", text(Some(d.used_in.as_str())))
        .line("Substitutes", text(Some(d.substitutes.as_str())))
        .metadata(&d.metadata);
    block.finish()
}

fn hop_detail(d: &HopDetail) -> String {
    let mut block = Block::default();
    block
        .line("Name", &d.summary.name)
        .line("Identifier", &d.summary.id)
        .line("Type", text(d.summary.kind.as_deref()))
        .line("Use", text(d.summary.usage_stage.as_deref()))
        .line("Usage", text(d.usage.as_deref()))
        .line("Origin", text(d.origin.as_deref()))
        .line(
            "Year",
            d.year
                .map(|y| y.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        )
        .line("Alpha Acid", percent(d.summary.alpha))
        .line("Beta Acid", percent(d.beta))
        .line("Time", opt_number(d.time))
        .line("IBU", opt_number(d.ibu))
        .line("Temp", opt_number(d.temp))
        .line("Amount", opt_number(d.amount))
        .line("Cohumulone", percent(d.cohumulone))
        .line("Total Oil", opt_number(d.oil))
        .line("Myrcene", percent(d.myrcene))
        .line("Humulene", percent(d.humulene))
        .line("Caryophyllene", percent(d.caryophyllene))
        .line("Farnesene", percent(d.farnesene))
        .line("HSI", opt_number(d.hsi))
        .line("Hidden", yes_no(d.hidden))
        .line("Lot #", text(d.lot_number.as_deref()))
        .line("Best Before Date", date(d.best_before_date.as_ref()))
        .line("Manufacturing Date", date(d.manufacturing_date.as_ref()))
        .line(
            "Inventory Amount",
            quantity(d.summary.inventory, InventoryCategory::Hops),
        )
        .line("Notes", text(d.notes.as_deref()))
        .line("User Notes", text(d.user_notes.as_deref()))
        .line("Used In", text(Some(d.used_in.as_str())))
        .line("Substitutes", text(Some(d.substitutes.as_str())))
        .metadata(&d.metadata);
    block.finish()
}

fn yeast_detail(d: &YeastDetail) -> String {
    let mut block = Block::default();
    block
        .line("Name", &d.summary.name)
        .line("Identifier", &d.summary.id)
        .line("Type", text(d.summary.kind.as_deref()))
        .line("Laboratory", text(d.laboratory.as_deref()))
        .line("Product ID", text(d.product_id.as_deref()))
        .line("Form", text(d.form.as_deref()))
        .line("Unit", text(d.unit.as_deref()))
        .line("Amount", opt_number(d.amount))
        .line("Attenuation", percent(d.summary.attenuation))
        .line("Min Attenuation", percent(d.min_attenuation))
        .line("Max Attenuation", percent(d.max_attenuation))
        .line("Flocculation", text(d.flocculation.as_deref()))
        .line("Min Temperature", opt_number(d.min_temp))
        .line("Max Temperature", opt_number(d.max_temp))
        .line("Max ABV", percent(d.max_abv))
        .line("Cells Per Package", opt_number(d.cells_per_pkg))
        .line("Age Rate", opt_number(d.age_rate))
        .line("Ferments All Sugars", yes_no(d.ferments_all))
        .line("Hidden", yes_no(d.hidden))
        .line("Lot #", text(d.lot_number.as_deref()))
        .line("Best Before Date", date(d.best_before_date.as_ref()))
        .line("Manufacturing Date", date(d.manufacturing_date.as_ref()))
        .line(
            "Inventory Amount",
            quantity(d.summary.inventory, InventoryCategory::Yeasts),
        )
        .line("Description", text(d.description.as_deref()))
        .line("User Notes", text(d.user_notes.as_deref()))
        .metadata(&d.metadata);
    block.finish()
}

fn rows(block: &mut Block, rows: &[SummaryRow]) {
    if rows.is_empty() {
        block.line("Items", "none");
        return;
    }
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            block.separator();
        }
        for (label, value) in row.iter() {
            block.line(label, value);
        }
    }
}

pub fn overview(overview: &InventoryOverview) -> String {
    let mut block = Block::default();
    for category in InventoryCategory::ALL {
        block.heading(category.title());
        rows(&mut block, overview.section(category));
        block.blank();
    }
    block.finish()
}
