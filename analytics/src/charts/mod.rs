//! Chart geometry and series preparation. Everything here is pure data: the
//! rendering layer maps these records straight onto chart-library props.

pub mod layout;
pub mod series;
