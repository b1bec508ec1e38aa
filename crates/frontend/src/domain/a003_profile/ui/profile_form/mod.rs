//! Profile edit form
//!
//! MVVM split:
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProfileForm;
pub use view_model::ProfileFormViewModel;
