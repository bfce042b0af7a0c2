pub mod dialogs;
pub mod logging;
pub mod telegram;
