pub mod integrator;
pub mod scheme;
pub mod session;

pub use integrator::*;
pub use scheme::*;
pub use session::*;
