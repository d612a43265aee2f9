use super::ui;
use crate::core::{CurrencyCatalog, RateProvider};
use anyhow::{Context, Result};
use comfy_table::Cell;

pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let pb = ui::new_spinner("Fetching currencies".to_string());
    let result = provider.fetch_currencies().await;
    pb.finish_and_clear();

    let catalog = result.context("Failed to fetch currencies")?;
    println!("{}", render(&catalog));
    Ok(())
}

pub fn render(catalog: &CurrencyCatalog) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Currency")]);
    for (code, name) in catalog {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    format!(
        "{}\n{}",
        table,
        ui::style_text(
            &format!("{} currencies available", catalog.len()),
            ui::StyleType::Subtle
        )
    )
}
