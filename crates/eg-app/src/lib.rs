//! Session service layer for the graph generator.
//!
//! Holds everything the window carries between button presses (form text,
//! the curve list and the currently displayed figure) and exposes each button
//! as one synchronous operation. The GUI only renders this state and turns
//! results into notices.

pub mod error;
pub mod forms;
pub mod notice;
pub mod session;

pub use error::{AppError, AppResult};
pub use forms::{BjtForm, CurveForm, GraphKind};
pub use notice::{Notice, NoticeLevel};
pub use session::GraphSession;
