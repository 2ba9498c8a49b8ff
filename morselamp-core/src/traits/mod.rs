//! Hardware capability traits
//!
//! These traits define the interface between the emission logic and
//! whatever drives the lamp and measures time. Both are fallible so a
//! failing GPIO or timer aborts emission instead of being ignored.

pub mod actuator;
pub mod clock;

pub use actuator::Actuator;
pub use clock::Clock;
