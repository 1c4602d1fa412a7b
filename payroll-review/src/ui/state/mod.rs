//! UI state for the payroll review dashboard, split by concern.

pub mod approval_state;
pub mod dashboard_state;
pub mod filter_state;
pub mod table_state;

pub use approval_state::*;
pub use dashboard_state::*;
pub use filter_state::*;
pub use table_state::*;
