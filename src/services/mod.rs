pub mod enrollment_state;
pub mod lead_form;
pub mod payment;
