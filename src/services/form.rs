use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::draft::{validate_draft, DraftPatch, EmployeeDraft};
use crate::models::employee::Employee;
use crate::store::EmployeeStore;
use crate::utils;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub mode: FormMode,
    pub editing_id: Option<Uuid>,
    pub draft: EmployeeDraft,
    /// An uploaded image is still being converted.
    pub image_pending: bool,
}

#[derive(Debug)]
struct OpenDraft {
    editing: Option<Uuid>,
    draft: EmployeeDraft,
    image_pending: bool,
}

#[derive(Debug, Default)]
struct FormSlot {
    // Bumped whenever the draft or its pending image is replaced, so a
    // conversion that finishes late can tell it is stale.
    generation: u64,
    open: Option<OpenDraft>,
    image_task: Option<JoinHandle<()>>,
}

impl FormSlot {
    fn discard(&mut self) -> bool {
        self.generation += 1;
        if let Some(task) = self.image_task.take() {
            task.abort();
        }
        self.open.take().is_some()
    }

    fn replace(&mut self, open: OpenDraft) -> FormView {
        self.discard();
        let view = open.view();
        self.open = Some(open);
        view
    }

    fn view(&self) -> Option<FormView> {
        self.open.as_ref().map(OpenDraft::view)
    }
}

impl OpenDraft {
    fn view(&self) -> FormView {
        FormView {
            mode: if self.editing.is_some() {
                FormMode::Edit
            } else {
                FormMode::Add
            },
            editing_id: self.editing,
            draft: self.draft.clone(),
            image_pending: self.image_pending,
        }
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    slot: Arc<Mutex<FormSlot>>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open_add(&self) -> FormView {
        self.slot.lock().await.replace(OpenDraft {
            editing: None,
            draft: EmployeeDraft::default(),
            image_pending: false,
        })
    }

    pub async fn open_edit(&self, employee: &Employee) -> FormView {
        self.slot.lock().await.replace(OpenDraft {
            editing: Some(employee.id),
            draft: EmployeeDraft::from(employee),
            image_pending: false,
        })
    }

    pub async fn patch(&self, patch: DraftPatch) -> AppResult<FormView> {
        let mut slot = self.slot.lock().await;
        let open = slot.open.as_mut().ok_or_else(no_open_form)?;
        open.draft.apply(patch);
        Ok(open.view())
    }

    /// The draft picks up the image only if it is still open when conversion ends.
    pub async fn attach_image(&self, bytes: Vec<u8>, max_bytes: usize) -> AppResult<FormView> {
        let mime = utils::image::sniff_image(&bytes, max_bytes)?;

        let mut guard = self.slot.lock().await;
        let slot = &mut *guard;
        let open = slot.open.as_mut().ok_or_else(no_open_form)?;
        open.image_pending = true;
        let view = open.view();

        if let Some(previous) = slot.image_task.take() {
            previous.abort();
        }
        slot.generation += 1;
        let generation = slot.generation;

        let shared = Arc::clone(&self.slot);
        slot.image_task = Some(tokio::spawn(async move {
            let uri = utils::image::to_data_uri(mime, &bytes);
            let mut slot = shared.lock().await;
            if slot.generation != generation {
                return;
            }
            if let Some(open) = slot.open.as_mut() {
                open.draft.image = Some(uri);
                open.image_pending = false;
                log::debug!("Image ready for open draft ({} bytes)", bytes.len());
            }
            slot.image_task = None;
        }));

        Ok(view)
    }

    /// Validates and commits the open draft, then closes the form.
    ///
    /// A still-pending image is abandoned: the record keeps its prior image
    /// (edit) or gets the placeholder (add). On failure the draft stays open.
    pub async fn submit(&self, store: &EmployeeStore) -> AppResult<Employee> {
        let mut slot = self.slot.lock().await;
        let open = slot.open.as_ref().ok_or_else(no_open_form)?;
        let valid = validate_draft(&open.draft)?;

        let employee = match open.editing {
            Some(id) => store.update(id, valid).await?,
            None => store.insert(valid).await,
        };
        slot.discard();
        Ok(employee)
    }

    pub async fn cancel(&self) -> bool {
        self.slot.lock().await.discard()
    }

    pub async fn current(&self) -> Option<FormView> {
        self.slot.lock().await.view()
    }
}

fn no_open_form() -> AppError {
    AppError::BadRequest("No employee form is open".to_string())
}
