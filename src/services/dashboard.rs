use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::pipeline::{self, ListQuery, PageView, SortCriterion};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PageStep {
    Previous,
    Next,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DashboardChange {
    pub search: Option<String>,
    pub sort: Option<SortCriterion>,
    pub page: Option<usize>,
    pub step: Option<PageStep>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    query: ListQuery,
}

impl DashboardState {
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Applies a change and renders the resulting page.
    ///
    /// New search terms and sort criteria keep the current page; it is only
    /// pulled down when the matching set no longer reaches it.
    pub fn update(
        &mut self,
        change: DashboardChange,
        mut records: Vec<Employee>,
        page_size: usize,
    ) -> PageView {
        if let Some(search) = change.search {
            self.query.search = search;
        }
        if let Some(sort) = change.sort {
            self.query.sort = sort;
        }

        pipeline::sort(&mut records, self.query.sort);
        let filtered = pipeline::filter(records, &self.query.search);
        let page_count = pipeline::page_count(filtered.len(), page_size);

        if let Some(page) = change.page {
            self.query.page = pipeline::clamp_page(page, page_count);
        }
        match change.step {
            Some(PageStep::Previous) => self.query.page = self.query.page.saturating_sub(1),
            Some(PageStep::Next) => self.query.page = self.query.page.saturating_add(1),
            None => {}
        }
        self.query.page = pipeline::clamp_page(self.query.page, page_count);

        log::debug!(
            "Dashboard page {}/{} (search {:?}, sort {:?})",
            self.query.page,
            page_count,
            self.query.search,
            self.query.sort
        );
        pipeline::paginate(filtered, self.query.page, page_size)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::models::employee::{seed_employees, Designation, Gender};

    fn records(count: usize) -> Vec<Employee> {
        let mut records = seed_employees("https://via.placeholder.com/50", NaiveDate::MIN);
        for i in records.len()..count {
            records.push(Employee {
                id: Uuid::new_v4(),
                image: "https://via.placeholder.com/50".to_string(),
                name: format!("Employee {}", i),
                email: format!("employee{}@corp.test", i),
                mobile: "555".to_string(),
                designation: Designation::Manager,
                gender: Gender::Male,
                course: "Rust".to_string(),
                created_date: NaiveDate::MIN,
            });
        }
        records
    }

    fn go_to(page: usize) -> DashboardChange {
        DashboardChange {
            page: Some(page),
            ..Default::default()
        }
    }

    #[test]
    fn steps_stay_within_bounds() {
        let mut state = DashboardState::default();
        let previous = DashboardChange {
            step: Some(PageStep::Previous),
            ..Default::default()
        };
        let next = DashboardChange {
            step: Some(PageStep::Next),
            ..Default::default()
        };

        assert_eq!(state.update(previous.clone(), records(6), 5).page, 1);
        assert_eq!(state.update(next.clone(), records(6), 5).page, 2);
        assert_eq!(state.update(next, records(6), 5).page, 2);
        assert_eq!(state.update(previous, records(6), 5).page, 1);
    }

    #[test]
    fn huge_page_with_next_lands_on_last_page() {
        let mut state = DashboardState::default();
        let view = state.update(
            DashboardChange {
                page: Some(usize::MAX),
                step: Some(PageStep::Next),
                ..Default::default()
            },
            records(6),
            5,
        );
        assert_eq!(view.page, 2);
        assert_eq!(state.query().page, 2);

        let view = state.update(
            DashboardChange {
                page: Some(usize::MAX),
                step: Some(PageStep::Previous),
                ..Default::default()
            },
            records(6),
            5,
        );
        assert_eq!(view.page, 1);
    }

    #[test]
    fn six_records_split_five_and_one() {
        let mut state = DashboardState::default();
        let first = state.update(DashboardChange::default(), records(6), 5);
        assert_eq!(first.rows.len(), 5);
        assert_eq!(first.page_count, 2);

        let second = state.update(go_to(2), records(6), 5);
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.rows[0].serial, 6);
    }

    #[test]
    fn search_keeps_page_when_it_still_exists() {
        let mut state = DashboardState::default();
        state.update(go_to(2), records(12), 5);

        let view = state.update(
            DashboardChange {
                search: Some("corp.test".to_string()),
                ..Default::default()
            },
            records(12),
            5,
        );
        assert_eq!(view.page, 2);
        assert_eq!(view.total, 10);
    }

    #[test]
    fn search_clamps_page_when_results_shrink() {
        let mut state = DashboardState::default();
        state.update(go_to(3), records(12), 5);

        let view = state.update(
            DashboardChange {
                search: Some("jane".to_string()),
                ..Default::default()
            },
            records(12),
            5,
        );
        assert_eq!(view.page, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(state.query().page, 1);
    }

    #[test]
    fn render_clamps_after_records_disappear() {
        let mut state = DashboardState::default();
        state.update(go_to(2), records(6), 5);
        let view = state.update(DashboardChange::default(), records(5), 5);
        assert_eq!(view.page, 1);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn changing_sort_does_not_reset_page() {
        let mut state = DashboardState::default();
        state.update(go_to(2), records(6), 5);
        let view = state.update(
            DashboardChange {
                sort: Some(SortCriterion::Name),
                ..Default::default()
            },
            records(6),
            5,
        );
        assert_eq!(view.page, 2);
    }
}
