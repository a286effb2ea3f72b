//! Record types of the dashboard tables.
//!
//! Each table declares its field enum, the fields its search box looks at,
//! the comparators for fields that do not sort alphabetically, its export
//! columns and the state a freshly opened view starts from.

pub mod account;
pub mod activity;
pub mod notification;
pub mod query;
pub mod ticket;
pub mod user;
pub mod warehouse;

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::account::{AccountField, AccountRecord};
    use super::activity::{ActivityField, ActivityLogRecord};
    use super::notification::{NotificationField, NotificationRecord};
    use super::user::UserRecord;
    use super::warehouse::{WarehouseField, WarehouseRecord};
    use crate::domain::entities::criteria::DatePreset;
    use crate::domain::entities::pagination::PageSize;
    use crate::domain::entities::sort::SortConfig;
    use crate::domain::entities::view::ViewAction;
    use crate::usecase::pipeline::{export, filtered_sorted};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn warehouse(name: &str, size: &str) -> WarehouseRecord {
        WarehouseRecord {
            name: name.to_string(),
            size: size.to_string(),
            state: "Started".to_string(),
            credits_used: Some(1.0),
            queued_queries: None,
            auto_suspend_secs: Some(600.0),
            last_resumed_at: Some(now()),
        }
    }

    #[test]
    fn warehouse_sizes_sort_by_capacity_not_alphabet() {
        let records = vec![
            warehouse("etl", "X-Large"),
            warehouse("bi", "Small"),
            warehouse("adhoc", "2X-Large"),
            warehouse("dev", "X-Small"),
        ];
        let view = WarehouseRecord::default_view(PageSize::Ten)
            .reduce(ViewAction::SetSort(Some(SortConfig::ascending(WarehouseField::Size))));

        let sorted = filtered_sorted(&records, &view, &WarehouseRecord::comparators(), now());

        let sizes: Vec<&str> = sorted.iter().map(|record| record.size.as_str()).collect();
        assert_eq!(sizes, vec!["X-Small", "Small", "X-Large", "2X-Large"]);
    }

    #[test]
    fn account_editions_sort_by_tier() {
        let records: Vec<AccountRecord> = ["VPS", "Standard", "Business Critical"]
            .into_iter()
            .enumerate()
            .map(|(idx, edition)| AccountRecord {
                account_id: format!("ACC-{idx}"),
                name: format!("account {idx}"),
                region: "us-east-1".to_string(),
                edition: edition.to_string(),
                monthly_cost: None,
                created_at: None,
            })
            .collect();
        let view = AccountRecord::default_view(PageSize::Ten)
            .reduce(ViewAction::SetSort(Some(SortConfig::descending(AccountField::Edition))));

        let sorted = filtered_sorted(&records, &view, &AccountRecord::comparators(), now());

        let editions: Vec<&str> = sorted.iter().map(|record| record.edition.as_str()).collect();
        assert_eq!(editions, vec!["VPS", "Business Critical", "Standard"]);
    }

    #[test]
    fn unread_notifications_filter_on_derived_read_state() {
        let records: Vec<NotificationRecord> = [("N-1", true), ("N-2", false), ("N-3", false)]
            .into_iter()
            .map(|(id, read)| NotificationRecord {
                id: id.to_string(),
                title: "Credit quota".to_string(),
                message: "Warehouse near its quota".to_string(),
                severity: "Warning".to_string(),
                category: "Billing".to_string(),
                read,
                created_at: Some(now()),
            })
            .collect();
        let view = NotificationRecord::default_view(PageSize::Ten, DatePreset::SevenDays).reduce(
            ViewAction::SetCategories {
                field: NotificationField::ReadState,
                selected: ["Unread".to_string()].into_iter().collect(),
            },
        );

        let matched = filtered_sorted(&records, &view, &NotificationRecord::comparators(), now());

        let ids: Vec<&str> = matched.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["N-2", "N-3"]);
    }

    #[test]
    fn activity_export_leaves_missing_source_ip_blank() {
        let records = vec![ActivityLogRecord {
            id: "A-1".to_string(),
            actor: "dana".to_string(),
            action: "GRANT".to_string(),
            target: "ROLE analyst".to_string(),
            source_ip: None,
            occurred_at: Some(now()),
        }];
        let view = ActivityLogRecord::default_view(PageSize::Ten, DatePreset::All);
        let columns = ActivityLogRecord::export_columns();
        let ip_column = columns
            .iter()
            .position(|column| column.field == ActivityField::SourceIp)
            .expect("source ip should be exported");

        let csv_text = export(
            &records,
            &view,
            &ActivityLogRecord::comparators(),
            &columns,
            now(),
        )
        .expect("export should succeed");

        let row = csv_text.lines().nth(1).expect("export should have one row");
        assert_eq!(row.split(',').nth(ip_column), Some(""));
    }

    #[test]
    fn user_search_covers_email() {
        let records: Vec<UserRecord> = ["dana@example.com", "lee@example.com"]
            .into_iter()
            .enumerate()
            .map(|(idx, email)| UserRecord {
                user_id: format!("U-{idx}"),
                name: format!("user {idx}"),
                email: email.to_string(),
                role: "ANALYST".to_string(),
                status: "Active".to_string(),
                last_login_at: None,
                query_count: Some(3.0),
            })
            .collect();
        let view = UserRecord::default_view(PageSize::Ten)
            .reduce(ViewAction::SetSearch("LEE@".to_string()));

        let matched = filtered_sorted(&records, &view, &UserRecord::comparators(), now());

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].user_id, "U-1");
    }
}
