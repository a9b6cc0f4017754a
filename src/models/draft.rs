use serde::de::value::StringDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::errors::AppResult;
use crate::models::employee::{Designation, Employee, Gender};
use crate::utils;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// Uncommitted form input. Everything may be blank until it is validated.
#[derive(Deserialize, Serialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub mobile: String,
    #[validate(required)]
    #[serde(deserialize_with = "blank_as_none")]
    pub designation: Option<Designation>,
    #[validate(required)]
    #[serde(deserialize_with = "blank_as_none")]
    pub gender: Option<Gender>,
    #[validate(length(min = 1))]
    pub course: String,
    #[validate(custom = "utils::image::validate_image_uri")]
    pub image: Option<String>,
}

/// A draft that passed validation and can be committed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: Designation,
    pub gender: Gender,
    pub course: String,
    pub image: Option<String>,
}

/// Partial form update; absent fields keep their current value and a blank
/// designation or gender clears the selection.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "blank_as_cleared")]
    pub designation: Option<Option<Designation>>,
    #[serde(default, deserialize_with = "blank_as_cleared")]
    pub gender: Option<Option<Gender>>,
    pub course: Option<String>,
    pub image: Option<String>,
}

impl EmployeeDraft {
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(mobile) = patch.mobile {
            self.mobile = mobile;
        }
        if let Some(designation) = patch.designation {
            self.designation = designation;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if patch.image.is_some() {
            self.image = patch.image;
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            mobile: employee.mobile.clone(),
            designation: Some(employee.designation),
            gender: Some(employee.gender),
            course: employee.course.clone(),
            image: Some(employee.image.clone()),
        }
    }
}

// An unselected dropdown submits "".
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => {
            let raw: StringDeserializer<D::Error> = raw.into_deserializer();
            T::deserialize(raw).map(Some)
        }
        _ => Ok(None),
    }
}

fn blank_as_cleared<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    blank_as_none(deserializer).map(Some)
}

/// Checks that the six required fields are filled in.
pub fn validate_draft(draft: &EmployeeDraft) -> AppResult<ValidDraft> {
    utils::validation::validate_payload(draft, REQUIRED_FIELDS_MESSAGE)?;

    match (draft.designation, draft.gender) {
        (Some(designation), Some(gender)) => Ok(ValidDraft {
            name: draft.name.clone(),
            email: draft.email.clone(),
            mobile: draft.mobile.clone(),
            designation,
            gender,
            course: draft.course.clone(),
            image: draft.image.clone(),
        }),
        _ => Err(crate::errors::AppError::Validation(
            REQUIRED_FIELDS_MESSAGE.to_string(),
        )),
    }
}
