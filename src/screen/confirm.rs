pub const DELETE_CONFIRMATION: &str = "Apakah Anda yakin ingin menghapus data ini?";

///blocking yes/no question put to the user before anything destructive happens
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

///the browser already asked (htmx `hx-confirm`), this just carries the answer through
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Answered(pub bool);

impl Confirm for Answered {
    fn confirm(&self, message: &str) -> bool {
        if !self.0 {
            debug!(?message, "confirmation declined");
        }
        self.0
    }
}
