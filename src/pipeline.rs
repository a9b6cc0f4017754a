use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortCriterion {
    #[default]
    #[serde(alias = "")]
    None,
    Name,
    Email,
    Id,
    #[serde(alias = "createdDate")]
    Date,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortCriterion,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortCriterion::None,
            page: 1,
        }
    }
}

/// One table row; `serial` is the running row number across pages.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub serial: usize,
    #[serde(flatten)]
    pub employee: Employee,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub rows: Vec<Row>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Number of records that matched the search.
    pub total: usize,
}

pub fn run(mut records: Vec<Employee>, query: &ListQuery, page_size: usize) -> PageView {
    sort(&mut records, query.sort);
    let filtered = filter(records, &query.search);
    paginate(filtered, query.page, page_size)
}

/// Stable sort; `None` leaves the store order alone.
pub fn sort(records: &mut [Employee], criterion: SortCriterion) {
    match criterion {
        SortCriterion::None => {}
        SortCriterion::Name => sort_by_text(records, |e| e.name.as_str()),
        SortCriterion::Email => sort_by_text(records, |e| e.email.as_str()),
        // Hyphenated lowercase hex orders the same way as the raw bytes.
        SortCriterion::Id => records.sort_by(|a, b| a.id.cmp(&b.id)),
        SortCriterion::Date => records.sort_by(|a, b| a.created_date.cmp(&b.created_date)),
    }
}

pub fn filter(records: Vec<Employee>, search: &str) -> Vec<Employee> {
    if search.is_empty() {
        return records;
    }
    let needle = search.to_lowercase();
    records
        .into_iter()
        .filter(|e| matches_search(e, &needle))
        .collect()
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    employee.name.to_lowercase().contains(needle) || employee.email.to_lowercase().contains(needle)
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

pub fn paginate(records: Vec<Employee>, page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let total = records.len();
    let page_count = page_count(total, page_size);
    let page = clamp_page(page, page_count);
    let offset = (page - 1) * page_size;

    let rows = records
        .into_iter()
        .skip(offset)
        .take(page_size)
        .enumerate()
        .map(|(index, employee)| Row {
            serial: offset + index + 1,
            employee,
        })
        .collect();

    PageView {
        rows,
        page,
        page_count,
        page_size,
        total,
    }
}

/// Root-locale collation: accents and case only break ties, lowercase first.
fn sort_by_text(records: &mut [Employee], key: impl Fn(&Employee) -> &str) {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => records.sort_by(|a, b| collator.compare(key(a), key(b))),
        Err(err) => {
            log::warn!("Collation data unavailable, sorting by code point: {}", err);
            records.sort_by(|a, b| key(a).cmp(key(b)));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::models::employee::{seed_employees, Designation, Gender};

    fn employee(name: &str, email: &str, date: (i32, u32, u32)) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            image: "https://via.placeholder.com/50".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            mobile: "555".to_string(),
            designation: Designation::Sales,
            gender: Gender::Other,
            course: "Rust".to_string(),
            created_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn names(records: &[Employee]) -> Vec<&str> {
        records.iter().map(|e| e.name.as_str()).collect()
    }

    fn sample() -> Vec<Employee> {
        vec![
            employee("charlie", "zed@example.com", (2024, 12, 2)),
            employee("Bravo", "alpha@example.com", (2024, 2, 10)),
            employee("alpha", "Mike@example.com", (2024, 11, 30)),
        ]
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut records = sample();
        sort(&mut records, SortCriterion::Name);
        assert_eq!(names(&records), vec!["alpha", "Bravo", "charlie"]);
    }

    #[test]
    fn name_sort_places_accented_letters_with_their_base() {
        let mut records = vec![
            employee("Zoe", "zoe@example.com", (2024, 1, 1)),
            employee("Émile", "emile@example.com", (2024, 1, 1)),
            employee("eve", "eve@example.com", (2024, 1, 1)),
        ];
        sort(&mut records, SortCriterion::Name);
        assert_eq!(names(&records), vec!["Émile", "eve", "Zoe"]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        let mut records = vec![
            employee("Alpha", "a@example.com", (2024, 1, 1)),
            employee("alpha", "b@example.com", (2024, 1, 1)),
        ];
        sort(&mut records, SortCriterion::Name);
        assert_eq!(names(&records), vec!["alpha", "Alpha"]);
    }

    #[test]
    fn date_sort_is_chronological() {
        // "2/10/2024" < "11/30/2024" < "12/2/2024" only as dates.
        let mut records = sample();
        sort(&mut records, SortCriterion::Date);
        assert_eq!(names(&records), vec!["Bravo", "alpha", "charlie"]);
    }

    #[test]
    fn none_keeps_store_order() {
        let mut records = sample();
        sort(&mut records, SortCriterion::None);
        assert_eq!(names(&records), vec!["charlie", "Bravo", "alpha"]);
    }

    #[test]
    fn sort_depends_only_on_criterion() {
        let mut once = sample();
        sort(&mut once, SortCriterion::Name);

        let mut again = sample();
        sort(&mut again, SortCriterion::Name);
        sort(&mut again, SortCriterion::None);
        sort(&mut again, SortCriterion::Email);
        sort(&mut again, SortCriterion::Name);

        assert_eq!(names(&once), names(&again));
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let seed = seed_employees("https://via.placeholder.com/50", NaiveDate::MIN);
        let found = filter(seed.clone(), "jane");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "jane@example.com");

        assert_eq!(filter(seed.clone(), "MIKE").len(), 0);
        assert_eq!(filter(sample(), "MIKE").len(), 1);
        assert_eq!(filter(seed, "").len(), 2);
    }

    #[test]
    fn filter_is_idempotent() {
        let once = filter(sample(), "a");
        let twice = filter(once.clone(), "a");
        assert_eq!(once, twice);
    }

    #[test]
    fn page_count_has_minimum_of_one() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(11, 5), 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        for total in 1..=23 {
            let records: Vec<_> = (0..total)
                .map(|i| employee(&format!("e{}", i), "x@example.com", (2024, 1, 1)))
                .collect();
            let count = page_count(total, 5);
            let last = paginate(records, count, 5);
            let expected = if total % 5 == 0 { 5 } else { total % 5 };
            assert_eq!(last.rows.len(), expected, "total {}", total);
        }
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let view = paginate(sample(), 9, 2);
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].serial, 3);

        let view = paginate(sample(), 0, 2);
        assert_eq!(view.page, 1);

        let view = paginate(Vec::new(), 3, 5);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn run_sorts_before_paging() {
        let query = ListQuery {
            sort: SortCriterion::Name,
            page: 1,
            ..Default::default()
        };
        let view = run(sample(), &query, 2);
        let first: Vec<_> = view.rows.iter().map(|r| r.employee.name.as_str()).collect();
        assert_eq!(first, vec!["alpha", "Bravo"]);
        assert_eq!(view.total, 3);
        assert_eq!(view.page_count, 2);
    }

    #[test]
    fn sort_parses_from_query_values() {
        let query: ListQuery = serde_json::from_str(r#"{"sort": ""}"#).unwrap();
        assert_eq!(query.sort, SortCriterion::None);
        let query: ListQuery = serde_json::from_str(r#"{"sort": "createdDate"}"#).unwrap();
        assert_eq!(query.sort, SortCriterion::Date);
        assert_eq!(query.page, 1);
    }
}
