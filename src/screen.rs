use crate::{
    api::MahasiswaApi,
    data::{
        form::{FormField, StudentDraft, StudentForm},
        prodi::{Prodi, resolve_prodi_input},
        student::Student,
    },
    screen::{
        confirm::{Confirm, DELETE_CONFIRMATION},
        dialog::{DialogController, ModalDialog, PageBody},
    },
};
use tokio::sync::{Mutex, MutexGuard};

pub mod confirm;
pub mod dialog;

///everything the page shows, rebuilt from the api on every mount
#[derive(Debug)]
pub struct ScreenState<D> {
    pub mahasiswa: Vec<Student>,
    pub prodi: Vec<Prodi>,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub form: StudentForm,
    pub dialog: Option<D>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    Failed,
    Declined,
    Invalid,
}

pub struct MahasiswaScreen<A, D = ModalDialog> {
    api: A,
    state: Mutex<ScreenState<D>>,
}

fn restore_page(body: &mut PageBody) {
    body.restore();
}

impl<A: MahasiswaApi, D: DialogController> MahasiswaScreen<A, D> {
    pub fn new(api: A, form: StudentForm, dialog: Option<D>) -> Self {
        Self {
            api,
            state: Mutex::new(ScreenState {
                mahasiswa: vec![],
                prodi: vec![],
                is_loading: true,
                is_submitting: false,
                form,
                dialog,
            }),
        }
    }

    pub async fn state(&self) -> MutexGuard<'_, ScreenState<D>> {
        self.state.lock().await
    }

    ///fetches both lists at once, neither waits for the other
    pub async fn init(&self) {
        tokio::join!(self.load_mahasiswa(), self.load_prodi());
    }

    ///throws away local state the way a fresh page would, then loads again
    pub async fn remount(&self) {
        {
            let mut state = self.state.lock().await;
            state.mahasiswa.clear();
            state.prodi.clear();
            state.is_loading = true;
            state.is_submitting = false;
            state.form.reset();
            if let Some(dialog) = state.dialog.as_mut().filter(|d| d.is_shown()) {
                dialog.on_closed(Box::new(restore_page));
                dialog.close();
            }
        }

        self.init().await;
    }

    pub async fn load_mahasiswa(&self) -> ActionOutcome {
        let result = self.api.list_mahasiswa().await;

        let mut state = self.state.lock().await;
        state.is_loading = false;
        match result {
            Ok(mahasiswa) => {
                state.mahasiswa = mahasiswa;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(?e, "Error fetching mahasiswa data");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn load_prodi(&self) -> ActionOutcome {
        match self.api.list_prodi().await {
            Ok(prodi) => {
                self.state.lock().await.prodi = prodi;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(?e, "Error fetching prodi data");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn delete(&self, id: &str, confirm: &impl Confirm) -> ActionOutcome {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            return ActionOutcome::Declined;
        }

        match self.api.delete_mahasiswa(id).await {
            Ok(()) => {
                info!(?id, "Mahasiswa deleted");
                self.load_mahasiswa().await;
                ActionOutcome::Done
            }
            Err(e) => {
                error!(?e, ?id, "Error deleting mahasiswa");
                ActionOutcome::Failed
            }
        }
    }

    pub async fn create(&self) -> ActionOutcome {
        let draft = {
            let mut state = self.state.lock().await;
            if !state.form.valid() {
                return ActionOutcome::Invalid;
            }
            state.is_submitting = true;
            state.form.value().clone()
        };

        match self.api.create_mahasiswa(&draft).await {
            Ok(response) => {
                info!(?response, "Mahasiswa added");
                //refresh goes out first, the local cleanup happens while it's in flight
                tokio::join!(self.load_mahasiswa(), async {
                    let mut state = self.state.lock().await;
                    state.form.reset();
                    state.is_submitting = false;
                    if let Some(dialog) = state.dialog.as_mut().filter(|d| d.is_shown()) {
                        dialog.on_closed(Box::new(restore_page));
                        dialog.close();
                    }
                });
                ActionOutcome::Done
            }
            Err(e) => {
                error!(?e, "Error adding mahasiswa");
                self.state.lock().await.is_submitting = false;
                ActionOutcome::Failed
            }
        }
    }

    pub async fn set_field(&self, field: FormField, value: &str) {
        let mut state = self.state.lock().await;
        if field == FormField::ProdiId {
            let prodi_id = resolve_prodi_input(&state.prodi, value);
            state.form.set_prodi(prodi_id);
        } else {
            state.form.set_field(field, value);
        }
    }

    pub async fn update_form(&self, draft: StudentDraft) {
        self.state.lock().await.form.replace(draft);
    }

    pub async fn open_dialog(&self) {
        if let Some(dialog) = self.state.lock().await.dialog.as_mut() {
            dialog.open();
        }
    }

    ///dismissed without submitting, the draft stays as typed
    pub async fn dismiss_dialog(&self) {
        if let Some(dialog) = self.state.lock().await.dialog.as_mut().filter(|d| d.is_shown()) {
            dialog.on_closed(Box::new(restore_page));
            dialog.close();
        }
    }
}
