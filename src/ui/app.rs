use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;
use tracing::{error, warn};

use crate::domain::entities::criteria::{DatePreset, DateSelector};
use crate::domain::entities::pagination::PageSize;
use crate::domain::entities::record::Record;
use crate::domain::entities::view::{ViewAction, ViewState};
use crate::infra::config::{default_config_path, default_data_dir, DashboardConfig};
use crate::infra::export::file_sink::DirectorySink;
use crate::infra::import::csv::CsvRecordSource;
use crate::platform::desktop::save_dialog::SaveDialogSink;
use crate::tables::query::{QueryField, QueryRecord, STATUSES};
use crate::ui::components::filter_controls::{
    DatePresetPicker, DateRangeInputs, MultiSelectFilter, NumericRangeInputs, PageSizePicker,
    PaginationBar, SearchBox,
};
use crate::ui::components::table::{DataTable, HeaderCell};
use crate::ui::controls::{
    date_range_from_inputs, numeric_range_from_inputs, options_from, SelectMode,
};
use crate::ui::state::app_state::AppState;
use crate::usecase::pipeline::export::format_value;
use crate::usecase::ports::source::RecordSource;
use crate::usecase::services::table_service::{ExportError, TableService};

const QUERIES_FILE_NAME: &str = "queries.csv";

fn load_config() -> DashboardConfig {
    match default_config_path().and_then(|path| DashboardConfig::load_or_create(&path)) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "falling back to default dashboard config");
            DashboardConfig::default()
        }
    }
}

fn queries_path(config: &DashboardConfig) -> Option<PathBuf> {
    config
        .data
        .queries_csv
        .clone()
        .or_else(|| default_data_dir().ok().map(|dir| dir.join(QUERIES_FILE_NAME)))
}

fn query_service(config: &DashboardConfig) -> Option<TableService<QueryRecord>> {
    let path = queries_path(config)?;
    let source: Arc<dyn RecordSource<QueryRecord>> =
        Arc::new(CsvRecordSource::<QueryRecord>::new(path));
    Some(
        TableService::new(
            source,
            QueryRecord::export_columns(config.export.numeric_precision),
        )
        .with_comparators(QueryRecord::comparators())
        .with_export_prefix("query_history"),
    )
}

fn export_status(result: Result<Option<PathBuf>, ExportError>) -> String {
    match result {
        Ok(Some(path)) => format!("Exported to {}", path.display()),
        Ok(None) => "Export cancelled".to_string(),
        Err(err) => {
            error!(error = %err, "export failed");
            format!("Export failed: {err}")
        }
    }
}

fn is_numeric_column(field: QueryField) -> bool {
    matches!(
        field,
        QueryField::DurationMs | QueryField::CreditsUsed | QueryField::BytesScanned
    )
}

/// Query history view: filters, sortable table, pagination and CSV export.
#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let service = use_hook(|| query_service(&config).map(Rc::new));

    let Some(service) = service else {
        return rsx! {
            div {
                p { "Unable to resolve the data directory for query history." }
            }
        };
    };

    let default_preset = config.table.date_preset;
    let default_page_size = config.table.page_size;
    let initial_service = service.clone();
    let AppState {
        mut records,
        mut view,
        mut credits_min,
        mut credits_max,
        mut date_start,
        mut date_end,
        mut status,
    } = AppState::new(
        move || match initial_service.load() {
            Ok(records) => {
                let status = format!("Loaded {} queries", records.len());
                (records, status)
            }
            Err(err) => {
                error!(error = %err, "failed to load query history");
                (Vec::new(), format!("Failed to load queries: {err}"))
            }
        },
        move || QueryRecord::default_view(default_page_size, default_preset),
    );

    let now = Utc::now();
    let records_snapshot = records.read();
    let output = service.render(&records_snapshot, &view.read(), now);
    let filtered_count = output.filtered_count;
    let current = output.view.clone();
    let total_records = records_snapshot.len();

    let columns = service.columns().to_vec();
    let headers: Vec<HeaderCell> = columns
        .iter()
        .map(|column| HeaderCell {
            label: column.label.clone(),
            sort: current
                .sort
                .filter(|sort| sort.key == column.field)
                .map(|sort| sort.direction),
            align_right: is_numeric_column(column.field),
        })
        .collect();
    let rows: Vec<Vec<String>> = output
        .page
        .items
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| format_value(&record.value(column.field), column.precision))
                .collect()
        })
        .collect();
    let showing = match output.page.item_range(current.pagination.page_size) {
        Some((first, last)) => {
            format!("Showing {first}–{last} of {filtered_count} ({total_records} total)")
        }
        None => "No results".to_string(),
    };
    let current_page = output.page.current_page;
    let total_pages = output.page.total_pages;

    let warehouse_options = options_from(&records_snapshot, QueryField::Warehouse);
    let user_options = options_from(&records_snapshot, QueryField::User);

    let status_options: Vec<String> = STATUSES.iter().map(|value| value.to_string()).collect();
    let selected_statuses = current
        .criteria
        .selected(QueryField::Status)
        .cloned()
        .unwrap_or_default();
    let selected_warehouses = current
        .criteria
        .selected(QueryField::Warehouse)
        .cloned()
        .unwrap_or_default();
    let selected_users = current
        .criteria
        .selected(QueryField::User)
        .cloned()
        .unwrap_or_default();
    let preset = match current.criteria.date_selector(QueryField::StartTime) {
        Some(DateSelector::Preset(preset)) => preset,
        _ => DatePreset::All,
    };
    let search_text = current.criteria.search.query.clone();
    let page_size = current.pagination.page_size;
    let sort_fields: Vec<QueryField> = columns.iter().map(|column| column.field).collect();

    // Reducer input is the clamped state the page was rendered from.
    let mut dispatch = move |action: ViewAction<QueryField>| {
        let next = view.peek().clone().clamp_page(filtered_count).reduce(action);
        view.set(next);
    };

    let export_service = service.clone();
    let reload_service = service.clone();
    let quick_export_service = service.clone();
    let export_directory = config.export.directory.clone();
    // With an export directory configured, exports can skip the dialog.
    let quick_export_dir = config.export.directory.clone();
    let quick_export_title = quick_export_dir
        .as_ref()
        .map(|dir| format!("Write into {}", dir.display()));

    rsx! {
        div {
            style: "font-family: system-ui, sans-serif; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                h2 { style: "margin: 0;", "Query History" }
                span { style: "color: #666;", "{status}" }
            }
            div {
                style: "display: flex; flex-wrap: wrap; align-items: center; gap: 12px;",
                SearchBox {
                    value: search_text,
                    placeholder: "Search query ID or text",
                    on_change: move |text: String| dispatch(ViewAction::SetSearch(text)),
                }
                MultiSelectFilter {
                    label: "Status",
                    options: status_options,
                    selected: selected_statuses,
                    mode: SelectMode::Multiple,
                    on_change: move |selected: BTreeSet<String>| {
                        dispatch(ViewAction::SetCategories { field: QueryField::Status, selected })
                    },
                }
                MultiSelectFilter {
                    label: "Warehouse",
                    options: warehouse_options,
                    selected: selected_warehouses,
                    mode: SelectMode::Single,
                    on_change: move |selected: BTreeSet<String>| {
                        dispatch(ViewAction::SetCategories { field: QueryField::Warehouse, selected })
                    },
                }
                MultiSelectFilter {
                    label: "User",
                    options: user_options,
                    selected: selected_users,
                    mode: SelectMode::Multiple,
                    on_change: move |selected: BTreeSet<String>| {
                        dispatch(ViewAction::SetCategories { field: QueryField::User, selected })
                    },
                }
                NumericRangeInputs {
                    label: "Credits",
                    min: credits_min(),
                    max: credits_max(),
                    on_change: move |(min, max): (String, String)| {
                        let range = numeric_range_from_inputs(&min, &max);
                        credits_min.set(min);
                        credits_max.set(max);
                        dispatch(ViewAction::SetNumericRange { field: QueryField::CreditsUsed, range });
                    },
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; align-items: center; gap: 12px;",
                DatePresetPicker {
                    value: preset,
                    on_change: move |preset: DatePreset| {
                        date_start.set(String::new());
                        date_end.set(String::new());
                        dispatch(ViewAction::SetDate {
                            field: QueryField::StartTime,
                            selector: DateSelector::Preset(preset),
                        });
                    },
                }
                DateRangeInputs {
                    start: date_start(),
                    end: date_end(),
                    on_change: move |(start, end): (String, String)| {
                        let parsed = date_range_from_inputs(&start, &end);
                        date_start.set(start);
                        date_end.set(end);
                        match parsed {
                            Ok(Some(selector)) => dispatch(ViewAction::SetDate {
                                field: QueryField::StartTime,
                                selector,
                            }),
                            Ok(None) => {
                                let selector = view
                                    .peek()
                                    .defaults
                                    .date_selector(QueryField::StartTime)
                                    .unwrap_or(DateSelector::Preset(default_preset));
                                dispatch(ViewAction::SetDate {
                                    field: QueryField::StartTime,
                                    selector,
                                });
                            }
                            Err(err) => status.set(err.to_string()),
                        }
                    },
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        credits_min.set(String::new());
                        credits_max.set(String::new());
                        date_start.set(String::new());
                        date_end.set(String::new());
                        dispatch(ViewAction::ClearFilters);
                    },
                    "Clear filters"
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        match reload_service.load() {
                            Ok(list) => {
                                status.set(format!("Loaded {} queries", list.len()));
                                records.set(list);
                            }
                            Err(err) => {
                                error!(error = %err, "failed to reload query history");
                                status.set(format!("Failed to load queries: {err}"));
                            }
                        }
                    },
                    "Reload"
                }
                button {
                    style: "border: 1px solid #2b6cb0; background: #2b6cb0; color: #fff; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let sink = SaveDialogSink::new(export_directory.clone());
                        let snapshot: ViewState<QueryField> = view.peek().clone();
                        let result =
                            export_service.export(&records.peek(), &snapshot, Utc::now(), &sink);
                        status.set(export_status(result));
                    },
                    "Export CSV"
                }
                if let Some(title) = quick_export_title {
                    button {
                        style: "border: 1px solid #2b6cb0; background: #fff; color: #2b6cb0; padding: 4px 12px; border-radius: 6px; cursor: pointer;",
                        title: "{title}",
                        onclick: move |_| {
                            let Some(dir) = quick_export_dir.clone() else {
                                return;
                            };
                            let sink = DirectorySink::new(dir);
                            let snapshot: ViewState<QueryField> = view.peek().clone();
                            let result = quick_export_service.export(
                                &records.peek(),
                                &snapshot,
                                Utc::now(),
                                &sink,
                            );
                            status.set(export_status(result));
                        },
                        "Export to folder"
                    }
                }
            }
            DataTable {
                headers: headers,
                rows: rows,
                empty_text: "No queries match the current filters",
                on_sort: move |idx: usize| {
                    if let Some(field) = sort_fields.get(idx) {
                        dispatch(ViewAction::ToggleSort(*field));
                    }
                },
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px;",
                span { style: "color: #666;", "{showing}" }
                div {
                    style: "display: inline-flex; align-items: center; gap: 12px;",
                    PageSizePicker {
                        value: page_size,
                        on_change: move |size: PageSize| dispatch(ViewAction::SetPageSize(size)),
                    }
                    PaginationBar {
                        current_page: current_page,
                        total_pages: total_pages,
                        on_page: move |page: usize| dispatch(ViewAction::SetPage(page)),
                    }
                }
            }
        }
    }
}

