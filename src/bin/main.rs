use std::io;

use solid::{logging, Config, SolidError};

fn main() -> Result<(), SolidError> {
    let config = Config::default();
    logging::init(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    solid::run(&config, &mut out)
}
