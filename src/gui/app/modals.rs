use crate::gui::{
    dialogs::{
        ErrorDialog,
        NoticeDialog,
    },
    stake_modal::StakePickerModal,
};

pub struct Modals {
    pub stake_picker: StakePickerModal,
    pub notice: NoticeDialog,
    pub error: ErrorDialog,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            stake_picker: StakePickerModal::new(),
            notice: NoticeDialog::new(),
            error: ErrorDialog::new(),
        }
    }
}
