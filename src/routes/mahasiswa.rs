use crate::{
    data::{
        form::{FormField, StudentDraft},
        prodi::{Prodi, find_prodi, resolve_prodi_input},
        student::Student,
    },
    error::{MahasiswaResult, MissingIdSnafu},
    maud_conveniences::{INPUT_CLASSES, escape, form_element, live_form_element, render_table},
    screen::{
        ScreenState,
        confirm::{Answered, DELETE_CONFIRMATION},
        dialog::{DialogController, ModalDialog},
    },
    state::{MahasiswaState, page_style},
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, Render, html};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

type Screen = ScreenState<ModalDialog>;

#[axum::debug_handler]
pub async fn get_index(State(state): State<MahasiswaState>) -> Markup {
    state.remount().await;

    let screen = state.state().await;
    let body = screen
        .dialog
        .as_ref()
        .map(|d| d.body().clone())
        .unwrap_or_default();

    state.render(
        &body,
        html! {
            div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-5xl w-full flex flex-col space-y-4" {
                div class="flex flex-row items-center justify-between" {
                    h1 class="text-2xl font-semibold" {"Data Mahasiswa"}
                    button class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" hx-get="/internal/modal/open" hx-target="#dialog_area" hx-swap="outerHTML" {
                        "Tambah Mahasiswa"
                    }
                }
                div id="all_mahasiswa" {
                    (render_mahasiswa_table(&screen))
                }
            }
            (render_dialog_area(&screen))
        },
    )
}

pub async fn internal_get_mahasiswa(State(state): State<MahasiswaState>) -> Markup {
    render_mahasiswa_table(&*state.state().await)
}

pub async fn internal_get_open_modal(State(state): State<MahasiswaState>) -> Markup {
    state.open_dialog().await;
    render_dialog_response(&*state.state().await)
}

pub async fn internal_get_close_modal(State(state): State<MahasiswaState>) -> Markup {
    state.dismiss_dialog().await;
    render_dialog_response(&*state.state().await)
}

#[derive(Deserialize)]
pub struct FieldQuery {
    field: FormField,
}

pub async fn internal_post_field(
    State(state): State<MahasiswaState>,
    Query(FieldQuery { field }): Query<FieldQuery>,
    Form(values): Form<HashMap<String, String>>,
) -> Markup {
    let value = values.get(field.name()).map_or("", String::as_str);
    state.set_field(field, value).await;
    html! {}
}

#[derive(Deserialize)]
pub struct NewMahasiswaForm {
    #[serde(default)]
    nama: String,
    #[serde(default)]
    npm: String,
    #[serde(default)]
    jenis_kelamin: String,
    #[serde(default)]
    asal_sekolah: String,
    #[serde(default)]
    prodi_id: String,
}

impl NewMahasiswaForm {
    fn into_draft(self, all_prodi: &[Prodi]) -> StudentDraft {
        StudentDraft {
            prodi_id: resolve_prodi_input(all_prodi, &self.prodi_id),
            nama: self.nama,
            npm: self.npm,
            jenis_kelamin: self.jenis_kelamin,
            asal_sekolah: self.asal_sekolah,
        }
    }
}

pub async fn post_mahasiswa(
    State(state): State<MahasiswaState>,
    Form(form): Form<NewMahasiswaForm>,
) -> Markup {
    let draft = form.into_draft(&state.state().await.prodi);
    state.update_form(draft).await;
    state.create().await;

    let screen = state.state().await;
    html! {
        (render_dialog_response(&screen))
        div hx-swap-oob="outerHTML:#all_mahasiswa" id="all_mahasiswa" {
            (render_mahasiswa_table(&screen))
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    id: String,
    confirmed: Option<bool>,
}

pub async fn delete_mahasiswa(
    State(state): State<MahasiswaState>,
    Query(DeleteQuery { id, confirmed }): Query<DeleteQuery>,
) -> MahasiswaResult<Markup> {
    snafu::ensure!(!id.trim().is_empty(), MissingIdSnafu);

    state
        .delete(&id, &Answered(confirmed.unwrap_or(false)))
        .await;

    Ok(render_mahasiswa_table(&*state.state().await))
}

fn prodi_label(all_prodi: &[Prodi], student: &Student) -> String {
    student
        .prodi_id()
        .map(|id| {
            find_prodi(all_prodi, &id).map_or_else(|| id.to_string(), Prodi::label)
        })
        .unwrap_or_default()
}

pub fn render_mahasiswa_table(screen: &Screen) -> Markup {
    if screen.is_loading {
        return html! {
            p class="italic text-gray-300" {"Memuat data..."}
        };
    }

    if screen.mahasiswa.is_empty() {
        return html! {
            p class="italic text-gray-300" {"Belum ada data mahasiswa"}
        };
    }

    render_table(
        "Mahasiswa",
        ["Nama", "NPM", "Jenis Kelamin", "Asal Sekolah", "Prodi", "Aksi"],
        screen
            .mahasiswa
            .iter()
            .map(|student| {
                [
                    student.render(),
                    escape(student.npm().unwrap_or_default()),
                    escape(student.jenis_kelamin().unwrap_or_default()),
                    escape(student.asal_sekolah().unwrap_or_default()),
                    escape(prodi_label(&screen.prodi, student)),
                    html! {
                        @if let Some(id) = student.id() {
                            button class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded"
                                hx-delete="/mahasiswa"
                                hx-vals=(json!({"id": id, "confirmed": true}).to_string())
                                hx-confirm=(DELETE_CONFIRMATION)
                                hx-target="#all_mahasiswa" {
                                "Hapus"
                            }
                        }
                    },
                ]
            })
            .collect(),
    )
}

fn render_dialog_response(screen: &Screen) -> Markup {
    let body = screen
        .dialog
        .as_ref()
        .map(|d| d.body().clone())
        .unwrap_or_default();

    html! {
        (render_dialog_area(screen))
        (page_style(&body))
    }
}

pub fn render_dialog_area(screen: &Screen) -> Markup {
    let Some(dialog) = screen.dialog.as_ref() else {
        return html! { div id="dialog_area" {} };
    };

    let draft = screen.form.value();

    html! {
        div id="dialog_area" {
            @if dialog.body().backdrop {
                div class="modal-backdrop fixed inset-0 bg-black/60" {}
            }
            @if dialog.is_shown() {
                div id=(dialog.id()) role="dialog" class="modal fixed inset-0 flex items-center justify-center" {
                    div class="bg-gray-800 rounded shadow-md p-6 w-full max-w-md" {
                        div class="flex flex-row items-center justify-between mb-4" {
                            h2 class="text-xl font-semibold" {"Tambah Mahasiswa"}
                            button type="button" class="text-gray-400 hover:text-white" hx-get="/internal/modal/close" hx-target="#dialog_area" hx-swap="outerHTML" {
                                "✕"
                            }
                        }
                        form hx-post="/mahasiswa" hx-trigger="submit" hx-target="#dialog_area" hx-swap="outerHTML" hx-disabled-elt="find button[type='submit']" {
                            (live_form_element(FormField::Nama.name(), "Nama", &draft.get(FormField::Nama)))
                            (live_form_element(FormField::Npm.name(), "NPM", &draft.get(FormField::Npm)))
                            (form_element("jenis_kelamin", "Jenis Kelamin", html! {
                                select id="jenis_kelamin" name="jenis_kelamin" class=(INPUT_CLASSES)
                                    hx-post="/internal/modal/field?field=jenis_kelamin" hx-trigger="change" hx-swap="none" {
                                    option value="" selected[draft.jenis_kelamin.is_empty()] {"Pilih jenis kelamin"}
                                    option value="L" selected[draft.jenis_kelamin == "L"] {"Laki-laki"}
                                    option value="P" selected[draft.jenis_kelamin == "P"] {"Perempuan"}
                                }
                            }))
                            (live_form_element(FormField::AsalSekolah.name(), "Asal Sekolah", &draft.get(FormField::AsalSekolah)))
                            (form_element("prodi_id", "Program Studi", html! {
                                select id="prodi_id" name="prodi_id" class=(INPUT_CLASSES)
                                    hx-post="/internal/modal/field?field=prodi_id" hx-trigger="change" hx-swap="none" {
                                    option value="" selected[draft.prodi_id.is_none()] {"Pilih prodi"}
                                    @for prodi in &screen.prodi {
                                        @if let Some(id) = prodi.id() {
                                            option value=(id) selected[draft.prodi_id.as_ref() == Some(&id)] {(prodi.label())}
                                        }
                                    }
                                }
                            }))

                            div class="flex items-center justify-end" {
                                button type="submit" disabled[screen.is_submitting] class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                                    @if screen.is_submitting {
                                        "Menyimpan..."
                                    } @else {
                                        "Simpan"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
