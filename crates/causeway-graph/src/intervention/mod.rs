//! Intervention engine: do-operator graph mutilation and adjustment-set search.

pub mod adjustment;
pub mod do_operator;

pub use adjustment::find_adjustment_set;
pub use do_operator::{intervene, MutilatedGraph};
