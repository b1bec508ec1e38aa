pub mod account;
pub mod hosting;
pub mod profile_form;

pub use account::AccountPage;
pub use profile_form::ProfileForm;
