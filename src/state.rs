use crate::{
    api::HttpApi,
    config::RuntimeConfiguration,
    data::form::StudentForm,
    error::MahasiswaResult,
    screen::{
        MahasiswaScreen,
        dialog::{ModalDialog, PageBody},
    },
};
use maud::{DOCTYPE, Markup, html};
use std::{ops::Deref, sync::Arc};

#[derive(Clone)]
pub struct MahasiswaState {
    screen: Arc<MahasiswaScreen<HttpApi>>,
    config: RuntimeConfiguration,
}

impl MahasiswaState {
    pub fn new(config: RuntimeConfiguration) -> MahasiswaResult<Self> {
        let api = HttpApi::new(config.api_config())?;
        let screen = MahasiswaScreen::new(api, StudentForm::new(), Some(ModalDialog::default()));

        Ok(Self {
            screen: Arc::new(screen),
            config,
        })
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, body: &PageBody, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    (page_style(body))
                    title { "Data Mahasiswa" }
                }
                body class={"bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white " (body.class_attr())} {
                    (markup)
                }
            }
        }
    }
}

///body styling lives in its own element so partial responses can swap it out-of-band
pub fn page_style(body: &PageBody) -> Markup {
    let style = body.style_attr();
    html! {
        style id="page_style" hx-swap-oob="true" {
            @if !style.is_empty() {
                "body {" (style) "}"
            }
        }
    }
}

impl Deref for MahasiswaState {
    type Target = MahasiswaScreen<HttpApi>;

    fn deref(&self) -> &Self::Target {
        &self.screen
    }
}
