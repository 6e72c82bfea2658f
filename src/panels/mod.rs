mod central_panel;
mod pickers;
mod top_bar;

pub use central_panel::{central_panel, history_controls};
pub use pickers::{Picker, picker_window};
pub use top_bar::top_bar;
