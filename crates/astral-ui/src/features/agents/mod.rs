//! Agents feature slice (list/CRUD not built yet).

pub mod view;
