use crate::record::FileRecord;
use crate::settings::DateMode;
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Key shared by every record when date grouping is off.
pub const UNGROUPED_KEY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    /// Indices into the sorted record slice, in sorted order.
    pub members: Vec<usize>,
}

/// Oldest first. Ties keep enumeration order.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by_key(|record| record.modified);
}

pub fn group_key(modified: &DateTime<Local>, mode: DateMode) -> String {
    match mode {
        DateMode::Off => UNGROUPED_KEY.to_string(),
        DateMode::DayMonth => modified.format("%d-%m").to_string(),
        DateMode::YearDayMonth => modified.format("%Y-%d-%m").to_string(),
    }
}

/// Partitions already sorted records. Groups are returned in first-encounter
/// order.
pub fn group_records(records: &[FileRecord], mode: DateMode) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut by_key = HashMap::<String, usize>::new();

    for (index, record) in records.iter().enumerate() {
        let key = group_key(&record.modified_local, mode);
        match by_key.get(&key) {
            Some(&slot) => groups[slot].members.push(index),
            None => {
                by_key.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    members: vec![index],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn at(y: i32, m: u32, d: u32, h: u32) -> SystemTime {
        let local = Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("unambiguous local time");
        SystemTime::from(local)
    }

    fn record(name: &str, modified: SystemTime) -> FileRecord {
        FileRecord::new(PathBuf::from(name), modified)
    }

    #[test]
    fn sort_is_stable_for_equal_times() {
        let t = at(2024, 3, 5, 12);
        let mut records = vec![
            record("late.mp4", at(2024, 3, 6, 12)),
            record("first.mp4", t),
            record("second.mp4", t),
        ];
        sort_records(&mut records);
        let order: Vec<&str> = records.iter().map(|r| r.original_name.as_str()).collect();
        assert_eq!(order, vec!["first.mp4", "second.mp4", "late.mp4"]);
    }

    #[test]
    fn keys_follow_date_mode() {
        let dt = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .single()
            .expect("local time");
        assert_eq!(group_key(&dt, DateMode::Off), "all");
        assert_eq!(group_key(&dt, DateMode::DayMonth), "05-03");
        assert_eq!(group_key(&dt, DateMode::YearDayMonth), "2024-05-03");
    }

    #[test]
    fn day_month_ignores_year() {
        let records = vec![
            record("a.mp4", at(2023, 3, 5, 12)),
            record("b.mp4", at(2024, 3, 5, 12)),
        ];
        let groups = group_records(&records, DateMode::DayMonth);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, vec![0, 1]);

        let groups = group_records(&records, DateMode::YearDayMonth);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn groups_keep_first_encounter_order() {
        let records = vec![
            record("a.mp4", at(2024, 3, 5, 9)),
            record("b.mp4", at(2024, 3, 6, 9)),
            record("c.mp4", at(2024, 3, 5, 18)),
        ];
        let groups = group_records(&records, DateMode::DayMonth);
        assert_eq!(
            groups,
            vec![
                Group {
                    key: "05-03".to_string(),
                    members: vec![0, 2],
                },
                Group {
                    key: "06-03".to_string(),
                    members: vec![1],
                },
            ]
        );
    }

    #[test]
    fn off_mode_is_a_single_group() {
        let records = vec![
            record("a.mp4", at(2024, 1, 1, 12)),
            record("b.mp4", at(2025, 6, 1, 12)),
        ];
        let groups = group_records(&records, DateMode::Off);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, UNGROUPED_KEY);
    }
}
