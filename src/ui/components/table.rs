use dioxus::prelude::*;

use crate::domain::entities::sort::SortDirection;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub sort: Option<SortDirection>,
    pub align_right: bool,
}

fn cell_style(align_right: bool) -> &'static str {
    if align_right {
        "padding: 6px 10px; border-bottom: 1px solid #eee; text-align: right; white-space: nowrap;"
    } else {
        "padding: 6px 10px; border-bottom: 1px solid #eee; text-align: left; max-width: 420px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
    }
}

/// Plain table of pre-formatted cells. Clicking a header asks the parent to
/// toggle sorting on that column.
#[component]
pub fn DataTable(
    headers: Vec<HeaderCell>,
    rows: Vec<Vec<String>>,
    empty_text: &'static str,
    on_sort: EventHandler<usize>,
) -> Element {
    let column_count = headers.len();
    let alignments: Vec<bool> = headers.iter().map(|header| header.align_right).collect();

    rsx! {
        div {
            style: "overflow-x: auto; border: 1px solid #ddd; border-radius: 8px;",
            table {
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        {headers.iter().enumerate().map(|(idx, header)| {
                            let arrow = header.sort.map(SortDirection::arrow).unwrap_or("");
                            let label = header.label.clone();
                            rsx!(
                                th {
                                    key: "{idx}",
                                    style: "position: sticky; top: 0; background: #f6f6f6; padding: 8px 10px; border-bottom: 1px solid #ddd; cursor: pointer; user-select: none; text-align: left;",
                                    onclick: move |_| on_sort.call(idx),
                                    "{label} {arrow}"
                                }
                            )
                        })}
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 24px; text-align: center; color: #888;",
                                "{empty_text}"
                            }
                        }
                    }
                    {rows.iter().enumerate().map(|(row_idx, row)| {
                        rsx!(
                            tr {
                                key: "{row_idx}",
                                {row.iter().enumerate().map(|(col_idx, cell)| {
                                    let align_right = alignments.get(col_idx).copied().unwrap_or(false);
                                    let style = cell_style(align_right);
                                    rsx!(
                                        td { key: "{col_idx}", style: style, title: "{cell}", "{cell}" }
                                    )
                                })}
                            }
                        )
                    })}
                }
            }
        }
    }
}
