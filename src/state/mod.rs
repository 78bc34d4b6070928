//! Application state module

mod app_state;
mod designer;
mod field_list;
mod form;
mod input;
mod listing;
mod runtime;
mod timestamp;
mod ui_area;
mod validation;

pub use app_state::*;
pub use designer::*;
pub use field_list::*;
pub use form::*;
pub use input::*;
pub use listing::*;
pub use runtime::*;
pub use timestamp::*;
pub use ui_area::*;
pub use validation::*;
