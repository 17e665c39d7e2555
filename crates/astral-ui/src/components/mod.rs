//! Shared presentation components.

pub(crate) mod placeholder;
pub(crate) mod shell;
pub(crate) mod toast;
