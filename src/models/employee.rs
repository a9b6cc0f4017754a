use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// en-US `toLocaleDateString` rendering, e.g. `3/7/2025`.
pub const LOCALE_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Designation {
    Manager,
    #[serde(rename = "HR")]
    Hr,
    Sales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub image: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: Designation,
    pub gender: Gender,
    pub course: String,
    #[serde(serialize_with = "serialize_locale_date")]
    pub created_date: NaiveDate,
}

fn serialize_locale_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(LOCALE_DATE_FORMAT))
}

/// The two sample records the directory starts with.
pub fn seed_employees(placeholder_image: &str, today: NaiveDate) -> Vec<Employee> {
    vec![
        Employee {
            id: Uuid::new_v4(),
            image: placeholder_image.to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            mobile: "123-456-7890".to_string(),
            designation: Designation::Manager,
            gender: Gender::Male,
            course: "React Basics".to_string(),
            created_date: today,
        },
        Employee {
            id: Uuid::new_v4(),
            image: placeholder_image.to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "987-654-3210".to_string(),
            designation: Designation::Hr,
            gender: Gender::Female,
            course: "UI/UX Design".to_string(),
            created_date: today,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_and_locale_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let employee = seed_employees("https://via.placeholder.com/50", date).remove(1);
        let value = serde_json::to_value(&employee).unwrap();

        assert_eq!(value["createdDate"], "3/7/2025");
        assert_eq!(value["designation"], "HR");
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["id"], employee.id.to_string());
    }

    #[test]
    fn seed_ids_are_distinct() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let seed = seed_employees("https://via.placeholder.com/50", date);
        assert_eq!(seed.len(), 2);
        assert_ne!(seed[0].id, seed[1].id);
    }
}
