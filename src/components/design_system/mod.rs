//! Design System Components
//!
//! Small set of reusable, styled form controls shared by the funnel screens.

mod button;
mod input;
mod loading;
mod select;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use loading::LoadingSpinner;
pub use select::Select;
