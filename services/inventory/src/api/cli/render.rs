use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use num_format::{Locale, ToFormattedString};

use crate::api::dto::{DashboardDataDto, StockMetricsDto};
use crate::model::{DashboardMetricsModel, StockLevelModelSet, TransactionModel};

fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED).set_header(header);
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    columns.iter().for_each(|idx| {
        if let Some(column) = table.column_mut(*idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    });
}

pub fn render_metrics(metrics: &DashboardMetricsModel) -> Table {
    let mut table = new_table(["Metric", "Value"]);
    table
        .add_row([
            "Total Stock".to_string(),
            metrics.total_stock.to_formatted_string(&Locale::en),
        ])
        .add_row(["Inbound".to_string(), metrics.inbound.to_formatted_string(&Locale::en)])
        .add_row(["Outbound".to_string(), metrics.outbound.to_formatted_string(&Locale::en)])
        .add_row([
            "Unique Products".to_string(),
            metrics.unique_products.to_string(),
        ])
        .add_row(["Pending".to_string(), metrics.pending.to_string()]);
    align_right(&mut table, &[1]);
    table
}

pub fn render_recent(recent: &[TransactionModel]) -> Table {
    let mut table = new_table(["Type", "Product", "SKU / Location", "Quantity", "Date"]);
    recent.iter().for_each(|t| {
        table.add_row([
            t.type_.label().to_string(),
            t.product.clone(),
            format!("{} / {}", t.sku, t.location),
            format!("{} units", t.quantity),
            t.date.to_string(),
        ]);
    });
    align_right(&mut table, &[3]);
    table
}

pub fn render_transactions(txns: &[TransactionModel]) -> Table {
    let mut table = new_table([
        "ID", "Product", "SKU", "Type", "Quantity", "Location", "Date", "Status",
    ]);
    txns.iter().for_each(|t| {
        table.add_row([
            t.id.clone(),
            t.product.clone(),
            t.sku.clone(),
            t.type_.label().to_string(),
            t.quantity.to_string(),
            t.location.clone(),
            t.date.to_string(),
            t.status.label().to_string(),
        ]);
    });
    align_right(&mut table, &[4]);
    table
}

pub fn render_stock(stock: &StockLevelModelSet) -> Table {
    let mut table = new_table(["Product", "SKU", "Location", "Quantity"]);
    stock.entries.iter().for_each(|e| {
        table.add_row([
            e.key.product.clone(),
            e.key.sku.clone(),
            e.location.clone(),
            e.quantity.to_formatted_string(&Locale::en),
        ]);
    });
    align_right(&mut table, &[3]);
    table
}

pub fn render_remote_summary(data: &DashboardDataDto, metrics: &StockMetricsDto) -> Table {
    let mut table = new_table(["Item", "Value"]);
    table
        .add_row(["Inbound transactions".to_string(), data.inbound.len().to_string()])
        .add_row(["Outbound transactions".to_string(), data.outbound.len().to_string()])
        .add_row(["Products".to_string(), data.products.len().to_string()])
        .add_row(["Stock entries".to_string(), data.stock.len().to_string()])
        .add_row([
            "Total Stock".to_string(),
            metrics.total_stock.to_formatted_string(&Locale::en),
        ])
        .add_row([
            "Unique Products".to_string(),
            metrics.unique_products.to_string(),
        ])
        .add_row([
            "Low Stock Items".to_string(),
            metrics.low_stock_items.to_string(),
        ]);
    align_right(&mut table, &[1]);
    table
}
