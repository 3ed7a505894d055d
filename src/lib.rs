// SOLID in practice: two small demonstrations.
//
// - single_responsibility: an entity separated from its storage interface
// - polymorphism: a name-checking if/else chain next to trait dispatch

pub mod config;
pub mod error;
pub mod logging;
pub mod polymorphism;
pub mod single_responsibility;

use std::io::Write;

use tracing::info;

pub use config::{Config, Routines};
pub use error::{Result, SolidError};

/// Runs the routines enabled in `config`, branching first, writing to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    if config.routines.branching {
        info!("running branching routine");
        polymorphism::animal_sounds_wrong(out)?;
    }
    if config.routines.dispatch {
        info!("running dispatch routine");
        polymorphism::animal_sounds_trait(out)?;
    }
    out.flush()?;
    Ok(())
}
