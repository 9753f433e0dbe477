use crate::stencil::standard_stencils;
use crate::stencil::*;
use clap::ValueEnum;

/// Explicit three point schemes for `u_t + u_x = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Scheme {
    #[default]
    Upwind,
    /// Lax-Friedrichs
    Lax,
    LaxWendroff,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Upwind, Scheme::Lax, Scheme::LaxWendroff];

    pub fn stencil(&self, alpha: f64) -> Stencil<3> {
        match self {
            Scheme::Upwind => standard_stencils::upwind(alpha),
            Scheme::Lax => standard_stencils::lax_friedrichs(alpha),
            Scheme::LaxWendroff => standard_stencils::lax_wendroff(alpha),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Upwind => "upwind",
            Scheme::Lax => "lax",
            Scheme::LaxWendroff => "lax_wendroff",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name())
    }
}
