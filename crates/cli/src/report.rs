//! Plain-text rendering of a plan.

use std::fmt::Write;

use stockcast_inventory::{DayEstimate, format_money};
use stockcast_planner::ReplenishmentPlan;

fn format_days(estimate: &DayEstimate) -> String {
    match estimate {
        DayEstimate::Days(d) => format!("{d:.1} days"),
        DayEstimate::NoDemand => format!("{:.1} days (no demand)", estimate.as_days()),
    }
}

fn week_or_none(week: Option<usize>) -> String {
    match week {
        Some(w) => format!("Week {w}"),
        None => "not within horizon".to_string(),
    }
}

pub fn render(plan: &ReplenishmentPlan) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, plan);
    out
}

fn write_report(out: &mut String, plan: &ReplenishmentPlan) -> std::fmt::Result {
    let overview = &plan.overview;
    let rec = &plan.recommendation;
    let forecast = &plan.forecast;
    let projection = &plan.projection;

    writeln!(out, "== {} ==", plan.product)?;
    writeln!(out, "Unit price:          {}", format_money(overview.unit_price))?;
    writeln!(out, "Avg weekly demand:   {:.0} units", overview.avg_weekly_demand)?;
    writeln!(out, "Forecast accuracy:   {}", overview.demand_accuracy)?;
    writeln!(out, "Lead time:           {:.1} days", overview.lead_time_days)?;
    writeln!(out)?;

    writeln!(out, "-- Forecast --")?;
    writeln!(
        out,
        "History: {} train weeks, {} test weeks",
        forecast.train.len(),
        forecast.test.len()
    )?;
    writeln!(out, "MAPE: {}", forecast.mape)?;
    writeln!(
        out,
        "Predicted demand (next {} weeks):",
        forecast.future_forecast.len()
    )?;
    for point in &forecast.future_forecast {
        writeln!(
            out,
            "  {:<8} {}  {:>6.0} units",
            point.label(),
            point.date.format("%Y-%m-%d"),
            point.quantity
        )?;
    }
    writeln!(out)?;

    writeln!(out, "-- Inventory simulation --")?;
    for (label, level) in projection.week_labels().iter().zip(&projection.levels) {
        writeln!(out, "  {label:<8} {level:>8.0} units")?;
    }
    writeln!(out, "Safety stock:        {:.0} units", projection.safety_stock)?;
    writeln!(out, "Reorder point:       {:.0} units", projection.reorder_point)?;
    writeln!(out, "End of horizon:      {:.0} units", projection.ending_level())?;
    writeln!(
        out,
        "Reaches reorder pt:  {}",
        week_or_none(projection.first_week_at_or_below(projection.reorder_point))
    )?;
    writeln!(out, "Projected stockout:  {}", week_or_none(projection.stockout_week()))?;
    writeln!(out, "Days until reorder:  {:.1} days", rec.days_until_reorder)?;
    writeln!(out, "Days until stockout: {}", format_days(&rec.days_until_stockout))?;
    writeln!(out)?;

    writeln!(out, "-- Order calculation (order-up-to) --")?;
    writeln!(
        out,
        "Target stock: {:.0} units ({:.0}/week x {} weeks + {:.0} safety)",
        rec.target_stock,
        overview.avg_weekly_demand,
        rec.weeks_of_supply,
        projection.safety_stock
    )?;
    writeln!(
        out,
        "Order qty:    {} units (current stock {})",
        rec.order_qty, rec.current_stock
    )?;
    writeln!(out, "Order cost:   {}", format_money(rec.order_cost))?;
    writeln!(out)?;

    writeln!(out, "-- Recommendation: {} --", plan.advice.headline)?;
    for line in &plan.advice.lines {
        writeln!(out, "  {line}")?;
    }

    if !plan.notices.is_empty() {
        writeln!(out)?;
        writeln!(out, "Notes:")?;
        for notice in &plan.notices {
            writeln!(out, "  - {notice}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockcast_demand::DemandSeries;
    use stockcast_forecast::SmoothingForecaster;
    use stockcast_inventory::ProductParameters;
    use stockcast_planner::{PlanControls, build_plan};

    fn deck_plan(current_stock: u32) -> ReplenishmentPlan {
        let series = DemandSeries::from_quantities(
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            [40, 55, 48, 52, 60],
        );
        let params = ProductParameters {
            avg_weekly_demand: 50.0,
            std_weekly_demand: 10.0,
            unit_price: 59.99,
            lead_time_days: 3.5,
            safety_stock: 30.0,
            reorder_point: 55.0,
        };
        build_plan(
            "Deck".parse().unwrap(),
            &series,
            params,
            PlanControls::new(current_stock, 3, 4),
            &SmoothingForecaster::default(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn render_lists_every_projection_week() {
        let text = render(&deck_plan(80));
        assert!(text.starts_with("== Deck =="));
        for week in ["Week 0", "Week 1", "Week 2", "Week 3"] {
            assert!(text.contains(week), "missing {week}");
        }
        assert!(text.contains("Order qty:    150 units"));
        assert!(text.contains("Order cost:   $8,998.50"));
        assert!(text.contains("When you reorder: 150 units ($8,998.50)."));
        assert!(text.contains("Stock level healthy"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn render_reports_projected_threshold_weeks() {
        // Forecast 56, 53.6, 52.16 against 80 on hand.
        let text = render(&deck_plan(80));
        assert!(text.contains("End of horizon:      0 units"));
        assert!(text.contains("Reaches reorder pt:  Week 1"));
        assert!(text.contains("Projected stockout:  Week 2"));

        let text = render(&deck_plan(1000));
        assert!(text.contains("Reaches reorder pt:  not within horizon"));
        assert!(text.contains("Projected stockout:  not within horizon"));
    }
}
