//! History table component; the body is replaced wholesale on every load.

use countdash_domain::history::{COLUMNS, HistoryRow, HistoryTable as TableBody};
use leptos::prelude::*;

/// A table of history records, or a single placeholder row when empty.
#[component]
pub fn HistoryTable(
    /// The rendered table body.
    #[prop(into)]
    body: Signal<TableBody>,
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody id="historyTableBody">
                {move || match body.get() {
                    TableBody::Placeholder(text) => view! {
                        <tr>
                            <td colspan="6" style="text-align: center;">{text}</td>
                        </tr>
                    }
                    .into_any(),
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <HistoryTableRow row=row/> })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

/// A single row in the history table.
#[component]
fn HistoryTableRow(row: HistoryRow) -> impl IntoView {
    view! {
        <tr>
            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
        </tr>
    }
}
