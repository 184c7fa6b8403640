pub mod opportunities;
pub mod opportunity_form;
pub mod profile;
pub mod settings;
pub mod users;
