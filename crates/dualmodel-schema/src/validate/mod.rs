//! Declaration-time checks shared by both schema kinds.

pub mod naming;
