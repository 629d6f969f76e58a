//! Employee hiring lifecycle: the legal status transitions and the tenure derived from a hire date.
//!
//! Everything here is a pure function of its inputs. Callers inject "now" so tenure is reproducible
//! in tests and reports.

mod status;
mod tenure;

pub use status::{
    ensure_transition, is_valid_transition, valid_transitions, EmployeeStatus, StatusSet,
    TransitionError, UnknownStatus, TRANSITIONS,
};
pub use tenure::compute_days_employed;
