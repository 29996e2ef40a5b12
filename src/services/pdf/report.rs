//! Printable report summaries.
//!
//! Reports are row based so they use the renderer directly instead of a
//! static template, a single A4 page with a "and N more" line when the
//! row list does not fit.

use super::template::{Renderer, Slot, MARGIN_X_MM};
use crate::modules::report::dto::{AdvancesReportDto, SalesReportDto, StockReportDto};
use crate::utils::fmt;
use anyhow::Result;
use chrono::Utc;

const HEADER_Y: f32 = 272.0;
const COLUMNS_Y: f32 = 252.0;
const FIRST_ROW_Y: f32 = 245.0;
const ROW_STEP: f32 = 6.5;
const LAST_ROW_Y: f32 = 50.0;
const TOTALS_Y: f32 = 38.0;

struct ReportPage {
    renderer: Renderer,
    y: f32,
    skipped: usize,
}

impl ReportPage {
    fn new(title: &str) -> Result<ReportPage> {
        let renderer = Renderer::new(title)?;

        renderer.text(&Slot::bold(MARGIN_X_MM, HEADER_Y, 16.0), title);
        renderer.text(
            &Slot::new(MARGIN_X_MM, HEADER_Y - 7.0, 9.0),
            &format!("Generated on {}", Utc::now().date_naive().format("%Y-%m-%d")),
        );
        renderer.rule(MARGIN_X_MM, 192.0, HEADER_Y - 11.0);

        Ok(ReportPage {
            renderer,
            y: FIRST_ROW_Y,
            skipped: 0,
        })
    }

    fn columns(&self, columns: &[(&str, f32)]) {
        for (text, x) in columns {
            self.renderer.text(&Slot::bold(*x, COLUMNS_Y, 9.0), text);
        }

        self.renderer.rule(MARGIN_X_MM, 192.0, COLUMNS_Y - 2.5);
    }

    fn row(&mut self, cells: &[(String, f32)]) {
        if self.y < LAST_ROW_Y {
            self.skipped += 1;
            return;
        }

        for (text, x) in cells {
            self.renderer.text(&Slot::new(*x, self.y, 9.0), text);
        }

        self.y -= ROW_STEP;
    }

    fn finish(self, totals: &[String]) -> Result<Vec<u8>> {
        if self.skipped > 0 {
            self.renderer.text(
                &Slot::new(MARGIN_X_MM, self.y, 9.0),
                &format!("... and {} more rows", self.skipped),
            );
        }

        self.renderer.rule(MARGIN_X_MM, 192.0, TOTALS_Y + 6.0);

        let mut y = TOTALS_Y;
        for line in totals {
            self.renderer.text(&Slot::bold(MARGIN_X_MM, y, 10.0), line);
            y -= 6.0;
        }

        self.renderer.finish()
    }
}

pub fn render_stock(report: &StockReportDto) -> Result<Vec<u8>> {
    let mut page = ReportPage::new("STOCK REPORT")?;

    page.columns(&[
        ("Chassis No", MARGIN_X_MM),
        ("Vehicle", 58.0),
        ("Status", 108.0),
        ("Japan Total", 132.0),
        ("Final Total", 164.0),
    ]);

    for row in &report.rows {
        page.row(&[
            (row.chassis_number.clone(), MARGIN_X_MM),
            (format!("{} {}", row.maker, row.model), 58.0),
            (row.status.clone(), 108.0),
            (
                row.japan_total_lkr.map(fmt::money).unwrap_or_default(),
                132.0,
            ),
            (
                row.final_total_lkr.map(fmt::money).unwrap_or_default(),
                164.0,
            ),
        ]);
    }

    page.finish(&[
        format!("Vehicles in stock: {}", report.vehicle_count),
        format!(
            "Total cost of stock: {}",
            fmt::money_with_currency(report.total_cost_lkr, "LKR")
        ),
    ])
}

pub fn render_sales(report: &SalesReportDto) -> Result<Vec<u8>> {
    let mut page = ReportPage::new("SALES REPORT")?;

    page.renderer.text(
        &Slot::new(130.0, HEADER_Y, 9.0),
        &format!("{} to {}", report.from, report.to),
    );

    page.columns(&[
        ("Chassis No", MARGIN_X_MM),
        ("Vehicle", 58.0),
        ("Sold On", 100.0),
        ("Sold Price", 126.0),
        ("Profit", 164.0),
    ]);

    for row in &report.rows {
        page.row(&[
            (row.chassis_number.clone(), MARGIN_X_MM),
            (format!("{} {}", row.maker, row.model), 58.0),
            (row.sold_on.format("%Y-%m-%d").to_string(), 100.0),
            (fmt::money(row.sold_price_lkr), 126.0),
            (fmt::money(row.profit_lkr), 164.0),
        ]);
    }

    page.finish(&[
        format!("Sales: {}", report.sale_count),
        format!(
            "Total sales: {}",
            fmt::money_with_currency(report.total_sales_lkr, "LKR")
        ),
        format!(
            "Total profit: {}",
            fmt::money_with_currency(report.total_profit_lkr, "LKR")
        ),
    ])
}

pub fn render_advances(report: &AdvancesReportDto) -> Result<Vec<u8>> {
    let mut page = ReportPage::new("OUTSTANDING ADVANCES")?;

    page.columns(&[
        ("Chassis No", MARGIN_X_MM),
        ("Customer", 58.0),
        ("Agreed Price", 104.0),
        ("Advance Paid", 134.0),
        ("Remaining", 164.0),
    ]);

    for row in &report.rows {
        page.row(&[
            (row.chassis_number.clone(), MARGIN_X_MM),
            (row.customer_name.clone(), 58.0),
            (fmt::money(row.selling_price_lkr), 104.0),
            (fmt::money(row.total_advance_lkr), 134.0),
            (fmt::money(row.remaining_balance_lkr), 164.0),
        ]);
    }

    page.finish(&[format!(
        "Total outstanding: {}",
        fmt::money_with_currency(report.total_outstanding_lkr, "LKR")
    )])
}
