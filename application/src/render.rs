//! Plain-text rendering of the query outputs.

use std::fmt::Write as _;

use itertools::Itertools as _;
use service::{
    domain::Sale,
    query::{dashboard, overview},
    read::sale::{Direction, Field, Page, Series, StatusCounts, Summary},
    view,
};

/// Renders the [`dashboard::Output`] computed for the provided
/// [`view::Parameters`].
#[must_use]
pub fn dashboard(
    parameters: &view::Parameters,
    output: &dashboard::Output,
) -> String {
    let mut out = String::new();

    if parameters.has_active_filters() {
        let filter = parameters.filter();
        _ = writeln!(
            out,
            "Filters: query `{}`, status {}, period {}",
            filter.query,
            filter.status.map_or("any", |s| s.as_str()),
            filter.period,
        );
    }
    out.push_str(&table(&output.page, |field| {
        parameters.sort_direction_of(field)
    }));
    out.push_str(&summary(&output.summary));
    out.push_str(&status_counts(&output.status_counts));
    out.push_str(&series(&output.series));
    out
}

/// Renders the [`overview::Output`].
#[must_use]
pub fn overview(output: &overview::Output) -> String {
    let mut out = summary(&output.summary);
    out.push_str("Most recent sales:\n");
    out.push_str(&table(&output.recent, |field| {
        (field == Field::Date).then_some(Direction::Desc)
    }));
    out
}

/// Renders the [`Page`] of [`Sale`]s as a table, marking the sorted column.
fn table(
    page: &Page,
    direction_of: impl Fn(Field) -> Option<Direction>,
) -> String {
    let header = Field::ALL.iter().format_with(" | ", |&field, f| {
        let mark = match direction_of(field) {
            Some(Direction::Asc) => " ^",
            Some(Direction::Desc) => " v",
            None => "",
        };
        f(&format_args!("{field}{mark}"))
    });

    let mut out = format!("{header}\n");
    for sale in &page.items {
        _ = writeln!(out, "{}", row(sale));
    }
    if page.items.is_empty() {
        out.push_str("(no sales)\n");
    }
    _ = writeln!(
        out,
        "Page {} of {} ({} sales){}{}",
        page.number,
        page.total_pages,
        page.total_count,
        if page.has_previous() { ", has previous" } else { "" },
        if page.has_next() { ", has next" } else { "" },
    );
    out
}

/// Renders a single [`Sale`] as a table row.
fn row(sale: &Sale) -> String {
    let date = sale.date.to_rfc3339();
    format!(
        "{} | {} | {} | {} | {}",
        sale.id,
        sale.client,
        sale.amount,
        sale.status,
        date.get(..10).unwrap_or(&date),
    )
}

/// Renders the [`Summary`].
fn summary(summary: &Summary) -> String {
    format!(
        "Total: {} sales, {} amount, {} average\n",
        summary.total,
        summary.total_amount,
        summary.average_amount.round(),
    )
}

/// Renders the [`StatusCounts`].
fn status_counts(counts: &StatusCounts) -> String {
    format!(
        "By status: {}\n",
        counts.iter().format_with(", ", |(status, n), f| {
            f(&format_args!("{status} {n}"))
        }),
    )
}

/// Renders the [`Series`] as chart data.
fn series(series: &Series) -> String {
    if series.is_empty() {
        return "Monthly: (empty)\n".to_owned();
    }
    format!(
        "Monthly: {}\n",
        series
            .labels()
            .zip(series.values())
            .format_with(", ", |(label, value), f| {
                f(&format_args!("{label}: {value}"))
            }),
    )
}
