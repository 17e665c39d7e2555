//! Login feature slice: bearer-token entry only.

pub mod view;
