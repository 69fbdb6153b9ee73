//! Table formatting for vault, market and order lists.

use curator_rs_allocation::VaultOrder;
use curator_rs_api::format::{
    format_compact_currency, format_currency, format_date, format_percentage, truncate_address,
};
use curator_rs_api::{MarketConfigList, Vault};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct VaultRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "APY")]
    apy: String,
    #[tabled(rename = "LTV")]
    ltv: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "TVL (USD)")]
    tvl_usd: String,
    #[tabled(rename = "Position")]
    position: String,
}

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Underlying")]
    underlying: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Lend APR")]
    lend_apr: String,
    #[tabled(rename = "Borrow APR")]
    borrow_apr: String,
    #[tabled(rename = "TVL (USD)")]
    tvl_usd: String,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    order_type: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Allocation")]
    allocation: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "APY")]
    apy: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
}

fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() > max_len {
        let head: String = name.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

fn short_address(addr: &impl std::fmt::Display) -> String {
    truncate_address(&addr.to_string(), 6, 4)
}

fn optional_rate(rate: Option<f64>) -> String {
    rate.map(|r| format_percentage(r, 2))
        .unwrap_or_else(|| "-".to_string())
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
    table.to_string()
}

pub fn format_vaults_table(vaults: &[Vault]) -> String {
    if vaults.is_empty() {
        return "No vaults found.".to_string();
    }

    let rows: Vec<VaultRow> = vaults
        .iter()
        .map(|v| VaultRow {
            name: truncate_name(&v.name, 30),
            symbol: v.symbol.clone(),
            address: short_address(&v.address),
            chain: v.chain.to_string(),
            apy: format_percentage(v.apy, 2),
            ltv: v
                .ltv
                .map(|ltv| format_percentage(ltv * 100.0, 1))
                .unwrap_or_else(|| "-".to_string()),
            maturity: v
                .maturity
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
            tvl_usd: format_compact_currency(v.tvl),
            position: if v.has_position() {
                format_currency(v.user_position)
            } else {
                "-".to_string()
            },
        })
        .collect();

    render(rows)
}

pub fn format_markets_table(config: &MarketConfigList) -> String {
    let summary = format!(
        "{} markets, {} assets, {} gearing tokens",
        config.markets.len(),
        config.asset_configs.len(),
        config.gt_configs.len()
    );
    if config.markets.is_empty() {
        return format!("No markets found.\n{}", summary);
    }

    let rows: Vec<MarketRow> = config
        .markets
        .iter()
        .map(|m| MarketRow {
            name: truncate_name(&m.name, 30),
            address: short_address(&m.address),
            underlying: config
                .asset(m.underlying)
                .map(|a| a.symbol.clone())
                .unwrap_or_else(|| short_address(&m.underlying)),
            maturity: m
                .maturity
                .map(format_date)
                .unwrap_or_else(|| "-".to_string()),
            lend_apr: optional_rate(m.lend_apr),
            borrow_apr: optional_rate(m.borrow_apr),
            tvl_usd: format_compact_currency(m.tvl),
        })
        .collect();

    format!("{}\n{}", render(rows), summary)
}

pub fn format_orders_table(orders: &[VaultOrder]) -> String {
    if orders.is_empty() {
        return "No orders.".to_string();
    }

    let rows: Vec<OrderRow> = orders
        .iter()
        .map(|o| OrderRow {
            id: o.id.clone(),
            order_type: o.order_type.to_string(),
            market: o
                .market_name
                .as_deref()
                .map(|name| truncate_name(name, 30))
                .unwrap_or_else(|| "-".to_string()),
            allocation: format_percentage(o.allocation_percentage, 2),
            amount: format_currency(o.allocated_amount),
            apy: if o.has_unknown_rate() {
                format!("{}*", format_percentage(o.effective_apy(), 2))
            } else {
                format_percentage(o.effective_apy(), 2)
            },
            capacity: format_compact_currency(o.max_capacity),
        })
        .collect();

    render(rows)
}
