pub mod course_detail;
pub mod course_selection;
pub mod design_system;
pub mod enrollment_confirmation;
pub mod enrollment_modal;
pub mod hero;
pub mod payment_gateway;
pub mod progress_indicator;
