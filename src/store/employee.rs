use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::draft::ValidDraft;
use crate::models::employee::{seed_employees, Employee};

#[derive(Debug)]
pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
    placeholder_image: String,
}

impl EmployeeStore {
    pub fn new(placeholder_image: impl Into<String>) -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// A store preloaded with the sample records.
    pub fn seeded(placeholder_image: impl Into<String>) -> Self {
        let placeholder_image = placeholder_image.into();
        Self {
            employees: RwLock::new(seed_employees(&placeholder_image, today())),
            placeholder_image,
        }
    }

    pub async fn insert(&self, draft: ValidDraft) -> Employee {
        let mut employees = self.employees.write().await;

        let id = loop {
            let candidate = Uuid::new_v4();
            if !employees.iter().any(|e| e.id == candidate) {
                break candidate;
            }
        };

        let employee = Employee {
            id,
            image: draft
                .image
                .unwrap_or_else(|| self.placeholder_image.clone()),
            name: draft.name,
            email: draft.email,
            mobile: draft.mobile,
            designation: draft.designation,
            gender: draft.gender,
            course: draft.course,
            created_date: today(),
        };
        employees.push(employee.clone());
        log::info!("Employee {} created", employee.id);
        employee
    }

    /// Replaces everything except `id` and `created_date`.
    pub async fn update(&self, id: Uuid, draft: ValidDraft) -> AppResult<Employee> {
        let mut employees = self.employees.write().await;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(not_found)?;

        if let Some(image) = draft.image {
            employee.image = image;
        }
        employee.name = draft.name;
        employee.email = draft.email;
        employee.mobile = draft.mobile;
        employee.designation = draft.designation;
        employee.gender = draft.gender;
        employee.course = draft.course;

        log::info!("Employee {} updated", id);
        Ok(employee.clone())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Employee> {
        let mut employees = self.employees.write().await;
        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(not_found)?;
        let removed = employees.remove(index);
        log::info!("Employee {} deleted", id);
        Ok(removed)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Employee> {
        let employees = self.employees.read().await;
        employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    /// Copy of the records in store order, for the list pipeline.
    pub async fn snapshot(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}
