//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider interaction so route handlers can stay
//! focused on request parsing and status mapping.

pub mod generate;
