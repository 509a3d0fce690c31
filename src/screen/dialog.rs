use std::{
    collections::BTreeSet,
    fmt::{Debug, Formatter},
};

pub const ADD_MAHASISWA_MODAL_ID: &str = "tambahMahasiswaModal";
pub const MODAL_OPEN_CLASS: &str = "modal-open";
const SCROLLBAR_COMPENSATION: &str = "15px";

///the bits of `<body>` that an open modal messes with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBody {
    pub classes: BTreeSet<String>,
    pub overflow: Option<String>,
    pub padding_right: Option<String>,
    pub backdrop: bool,
}

impl PageBody {
    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn class_attr(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }

    pub fn style_attr(&self) -> String {
        let mut style = String::new();
        if let Some(overflow) = &self.overflow {
            style += &format!("overflow: {overflow};");
        }
        if let Some(padding_right) = &self.padding_right {
            style += &format!("padding-right: {padding_right};");
        }
        style
    }

    ///what the page looks like once nothing modal is left behind
    pub fn restore(&mut self) {
        self.backdrop = false;
        self.classes.remove(MODAL_OPEN_CLASS);
        self.overflow = None;
        self.padding_right = None;
    }
}

pub type ClosedCallback = Box<dyn FnOnce(&mut PageBody) + Send>;

pub trait DialogController: Send {
    fn is_shown(&self) -> bool;
    fn open(&mut self);
    fn close(&mut self);
    ///fires once, on the next close
    fn on_closed(&mut self, callback: ClosedCallback);
}

///server-side model of the add-student modal and the page around it
pub struct ModalDialog {
    id: &'static str,
    shown: bool,
    body: PageBody,
    closed_listeners: Vec<ClosedCallback>,
}

impl ModalDialog {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            shown: false,
            body: PageBody::default(),
            closed_listeners: vec![],
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn body(&self) -> &PageBody {
        &self.body
    }

    #[cfg(test)]
    pub fn pending_listeners(&self) -> usize {
        self.closed_listeners.len()
    }
}

impl Default for ModalDialog {
    fn default() -> Self {
        Self::new(ADD_MAHASISWA_MODAL_ID)
    }
}

impl Debug for ModalDialog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalDialog")
            .field("id", &self.id)
            .field("shown", &self.shown)
            .field("body", &self.body)
            .field("closed_listeners", &self.closed_listeners.len())
            .finish()
    }
}

impl DialogController for ModalDialog {
    fn is_shown(&self) -> bool {
        self.shown
    }

    fn open(&mut self) {
        if self.shown {
            return;
        }

        self.shown = true;
        self.body.backdrop = true;
        self.body.classes.insert(MODAL_OPEN_CLASS.to_string());
        self.body.overflow = Some("hidden".to_string());
        self.body.padding_right = Some(SCROLLBAR_COMPENSATION.to_string());
    }

    fn close(&mut self) {
        //hiding something already hidden never fires `closed`, listeners wait for the next one
        if !self.shown {
            return;
        }

        self.shown = false;
        for listener in std::mem::take(&mut self.closed_listeners) {
            listener(&mut self.body);
        }
    }

    fn on_closed(&mut self, callback: ClosedCallback) {
        self.closed_listeners.push(callback);
    }
}
