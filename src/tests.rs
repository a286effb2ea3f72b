use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::tables::query::{QueryField, QueryRecord};
use crate::tables::ticket::{AssignedQueryTicket, TicketField};
use crate::ui::controls::options_from;
use crate::usecase::pipeline::{self, export, filter, filtered_sorted};
use crate::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

fn query(id: usize, text: &str, warehouse: &str, status: &str, age_days: i64) -> QueryRecord {
    QueryRecord {
        query_id: format!("Q-{id:03}"),
        query_text: text.to_string(),
        user_name: format!("user{}", id % 2),
        warehouse: warehouse.to_string(),
        status: status.to_string(),
        start_time: Some(now() - Duration::days(age_days)),
        duration_ms: Some(1_000.0 + id as f64),
        credits_used: Some(id as f64 * 0.5),
        bytes_scanned: Some(4_096.0),
    }
}

fn queries(count: usize) -> Vec<QueryRecord> {
    (0..count)
        .map(|idx| query(idx, &format!("select {idx}"), "WH_A", "Success", 0))
        .collect()
}

fn ids(records: &[&QueryRecord]) -> Vec<String> {
    records.iter().map(|record| record.query_id.clone()).collect()
}

fn view(page_size: PageSize) -> ViewState<QueryField> {
    ViewState::new(
        FilterCriteria::with_search_fields(QueryRecord::SEARCH_FIELDS),
        page_size,
    )
}

#[test]
fn twenty_three_records_at_ten_per_page_end_with_a_three_item_page() {
    let records = queries(23);
    let state = view(PageSize::Ten).reduce(ViewAction::SetPage(3));

    let output = pipeline::run(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(output.page.total_pages, 3);
    assert_eq!(output.page.current_page, 3);
    assert_eq!(output.page.items.len(), 3);
    assert_eq!(output.page.item_range(PageSize::Ten), Some((21, 23)));
}

#[test]
fn search_for_foo_finds_the_single_matching_record() {
    let records: Vec<QueryRecord> = ["select 1", "SELECT * FROM Foo", "select 2", "bar", "baz"]
        .into_iter()
        .enumerate()
        .map(|(idx, text)| query(idx, text, "WH_A", "Success", 0))
        .collect();
    let state = view(PageSize::Ten).reduce(ViewAction::SetSearch("foo".to_string()));

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-001"]);
}

#[test]
fn search_matches_any_configured_field_case_insensitively() {
    let records = vec![
        query(1, "SELECT * FROM Foo", "WH_A", "Success", 0),
        query(2, "select 1", "WH_A", "Success", 0),
        QueryRecord {
            query_id: "foo-42".to_string(),
            ..query(3, "select 2", "WH_A", "Success", 0)
        },
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetSearch("fOO".to_string()));

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-001", "foo-42"]);
}

#[test]
fn leading_space_in_search_is_part_of_the_match() {
    let records = vec![
        query(1, "select foo", "WH_A", "Success", 0),
        query(2, "select food", "WH_A", "Success", 0),
        query(3, "selectfoo", "WH_A", "Success", 0),
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetSearch(" foo".to_string()));

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-001", "Q-002"]);
}

#[test]
fn whitespace_only_search_matches_everything() {
    let records = queries(4);
    let state = view(PageSize::Ten).reduce(ViewAction::SetSearch("   ".to_string()));

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(matched.len(), 4);
}

#[test]
fn filtering_an_already_filtered_set_changes_nothing() {
    let records = vec![
        query(1, "select a", "WH_A", "Success", 1),
        query(2, "select b", "WH_B", "Failed", 3),
        query(3, "update c", "WH_A", "Success", 40),
        query(4, "select d", "WH_A", "Queued", 2),
    ];
    let criteria = FilterCriteria::with_search_fields(QueryRecord::SEARCH_FIELDS)
        .search("select")
        .category(QueryField::Warehouse, ["WH_A"])
        .date(QueryField::StartTime, DateSelector::Preset(DatePreset::ThirtyDays));

    let once = filter::filter(&records, &criteria, now());
    let twice = filter::filter(once.iter().copied(), &criteria, now());

    assert_eq!(ids(&once), vec!["Q-001", "Q-004"]);
    assert_eq!(once, twice);
}

#[test]
fn empty_category_selection_keeps_every_record() {
    let records = vec![
        query(1, "a", "WH_A", "Success", 0),
        query(2, "b", "WH_B", "Failed", 0),
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetCategories {
        field: QueryField::Status,
        selected: BTreeSet::new(),
    });

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(matched.len(), 2);
}

#[test]
fn category_selection_keeps_only_selected_values() {
    let records = vec![
        query(1, "a", "WH_A", "Success", 0),
        query(2, "b", "WH_B", "Failed", 0),
        query(3, "c", "WH_B", "Queued", 0),
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetCategories {
        field: QueryField::Status,
        selected: ["Failed".to_string(), "Queued".to_string()].into_iter().collect(),
    });

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-002", "Q-003"]);
}

#[test]
fn seven_day_preset_drops_records_older_than_a_week() {
    let records = vec![
        query(1, "old", "WH_A", "Success", 10),
        query(2, "recent", "WH_A", "Success", 2),
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetDate {
        field: QueryField::StartTime,
        selector: DateSelector::Preset(DatePreset::SevenDays),
    });

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-002"]);
}

#[test]
fn clearing_filters_restores_the_configured_date_window() {
    let records = vec![
        query(1, "old", "WH_A", "Success", 10),
        query(2, "recent", "WH_A", "Failed", 2),
    ];
    let comparators = QueryRecord::comparators();
    let opened = QueryRecord::default_view(PageSize::Ten, DatePreset::SevenDays);
    let widened = opened.clone().reduce(ViewAction::SetDate {
        field: QueryField::StartTime,
        selector: DateSelector::Preset(DatePreset::All),
    });
    assert_eq!(filtered_sorted(&records, &widened, &comparators, now()).len(), 2);

    let cleared = widened.reduce(ViewAction::ClearFilters);

    assert_eq!(ids(&filtered_sorted(&records, &cleared, &comparators, now())), vec!["Q-002"]);
    assert_eq!(
        cleared.criteria.date_selector(QueryField::StartTime),
        Some(DateSelector::Preset(DatePreset::SevenDays))
    );
}

#[test]
fn explicit_date_range_includes_the_whole_end_day() {
    let records = vec![
        query(1, "start of range", "WH_A", "Success", 5),
        query(2, "end day evening", "WH_A", "Success", 0),
        query(3, "before range", "WH_A", "Success", 6),
    ];
    let start = (now() - Duration::days(5)).date_naive();
    let end = now().date_naive();
    let state = view(PageSize::Ten).reduce(ViewAction::SetDate {
        field: QueryField::StartTime,
        selector: DateSelector::Range(DateRange::new(end, start)),
    });

    let matched = filtered_sorted(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(ids(&matched), vec!["Q-001", "Q-002"]);
}

#[test]
fn priority_rank_sorts_high_before_medium_before_low_when_descending() {
    let tickets: Vec<AssignedQueryTicket> = ["Medium", "Low", "High"]
        .into_iter()
        .enumerate()
        .map(|(idx, priority)| AssignedQueryTicket {
            ticket_id: format!("T-{idx}"),
            query_id: format!("Q-{idx}"),
            title: "slow scan".to_string(),
            assignee: "dana".to_string(),
            priority: priority.to_string(),
            status: "Open".to_string(),
            created_at: Some(now()),
            estimated_savings: None,
        })
        .collect();
    let state = AssignedQueryTicket::default_view(PageSize::Ten);
    assert_eq!(state.sort, Some(SortConfig::descending(TicketField::Priority)));

    let sorted = filtered_sorted(
        &tickets,
        &state,
        &AssignedQueryTicket::comparators(),
        now(),
    );

    let priorities: Vec<&str> = sorted.iter().map(|ticket| ticket.priority.as_str()).collect();
    assert_eq!(priorities, vec!["High", "Medium", "Low"]);
}

#[test]
fn toggling_sort_on_the_same_column_flips_direction() {
    let records = vec![
        query(3, "c", "WH_A", "Success", 0),
        query(1, "a", "WH_A", "Success", 0),
        query(2, "b", "WH_A", "Success", 0),
    ];
    let comparators = QueryRecord::comparators();
    let ascending = view(PageSize::Ten).reduce(ViewAction::ToggleSort(QueryField::QueryId));
    let descending = ascending.clone().reduce(ViewAction::ToggleSort(QueryField::QueryId));

    assert_eq!(
        ids(&filtered_sorted(&records, &ascending, &comparators, now())),
        vec!["Q-001", "Q-002", "Q-003"]
    );
    assert_eq!(
        ids(&filtered_sorted(&records, &descending, &comparators, now())),
        vec!["Q-003", "Q-002", "Q-001"]
    );
}

#[test]
fn running_the_pipeline_twice_gives_the_same_page() {
    let records = queries(37);
    let state = QueryRecord::default_view(PageSize::Twenty, DatePreset::ThirtyDays)
        .reduce(ViewAction::SetPage(2));
    let comparators = QueryRecord::comparators();

    let first = pipeline::run(&records, &state, &comparators, now());
    let second = pipeline::run(&records, &first.view, &comparators, now());

    assert_eq!(first.page, second.page);
    assert_eq!(first.view, second.view);
}

#[test]
fn filter_change_after_paging_returns_to_first_page() {
    let records = queries(50);
    let comparators = QueryRecord::comparators();
    let state = view(PageSize::Ten).reduce(ViewAction::SetPage(4));
    assert_eq!(
        pipeline::run(&records, &state, &comparators, now()).page.current_page,
        4
    );

    let narrowed = state.reduce(ViewAction::SetSearch("select 1".to_string()));
    let output = pipeline::run(&records, &narrowed, &comparators, now());

    assert_eq!(output.page.current_page, 1);
    assert_eq!(output.filtered_count, 11, "select 1 and select 10 to 19");
}

#[test]
fn page_beyond_filtered_total_clamps_to_last_page() {
    let records = queries(15);
    let state = view(PageSize::Ten).reduce(ViewAction::SetPage(9));

    let output = pipeline::run(&records, &state, &QueryRecord::comparators(), now());

    assert_eq!(output.page.current_page, 2);
    assert_eq!(output.view.pagination.current_page, 2);
    assert_eq!(output.page.items.len(), 5);
}

#[test]
fn no_matches_yields_one_empty_page() {
    let records = queries(5);
    let state = view(PageSize::Ten).reduce(ViewAction::SetSearch("nothing".to_string()));

    let output = pipeline::run(&records, &state, &QueryRecord::comparators(), now());

    assert!(output.page.is_empty());
    assert_eq!(output.page.total_pages, 1);
    assert_eq!(output.page.item_range(PageSize::Ten), None);
}

#[test]
fn exported_csv_reads_back_with_awkward_text_intact() {
    let records = vec![
        query(1, "select \"a\", b\nfrom t", "WH_A", "Success", 0),
        query(2, "select 2", "WH_B", "Failed", 0),
    ];
    let state = view(PageSize::Ten).reduce(ViewAction::SetCategories {
        field: QueryField::Status,
        selected: ["Success".to_string()].into_iter().collect(),
    });

    let csv_text = export(
        &records,
        &state,
        &QueryRecord::comparators(),
        &QueryRecord::export_columns(2),
        now(),
    )
    .expect("export should succeed");

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().expect("export should have headers").clone();
    assert_eq!(headers.get(0), Some("Query ID"));
    assert_eq!(headers.len(), QueryField::ALL.len());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("every exported row should parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(1), Some("select \"a\", b\nfrom t"));
    assert_eq!(rows[0].get(5), Some("2024-06-15T12:00:00Z"));
    assert_eq!(rows[0].get(7), Some("0.50"));
}

#[test]
fn export_without_columns_is_rejected() {
    let records = queries(3);

    let result = export(
        &records,
        &view(PageSize::Ten),
        &QueryRecord::comparators(),
        &[],
        now(),
    );

    assert_eq!(result, Err(PipelineError::NoColumns));
}

#[test]
fn warehouse_options_come_from_loaded_records() {
    let records = vec![
        query(1, "a", "WH_B", "Success", 0),
        query(2, "b", "WH_A", "Success", 0),
        query(3, "c", "WH_B", "Success", 0),
    ];

    let options = options_from(&records, QueryField::Warehouse);

    assert_eq!(options, vec!["WH_B".to_string(), "WH_A".to_string()]);
}
