//! Randrange demo entry point.
//!
//! Builds a range from the environment and prints one of each derived value.

use std::error::Error;

use randrange_range::{PopulateOptions, RandomRange};
use randrange_sequence::arithmetic_range;
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::{DemoConfig, LogFormat};

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        minimum = config.minimum,
        maximum = config.maximum,
        count = config.count,
        "starting randrange demo"
    );

    let range = RandomRange::new(config.minimum, config.maximum).map_err(error::AppError::from)?;

    println!(
        "A random number from {} to {}: {}.",
        range.minimum(),
        range.maximum(),
        range.random_number()
    );
    println!(
        "A random integer from {} to {}: {}.",
        range.minimum(),
        range.maximum(),
        range.random_integer()
    );
    println!(
        "A random instance of either the numbers zero or one: {}.",
        range.zero_or_one()
    );

    let nums = [2, 4];
    println!("A random element of {nums:?}: {}.", range.choice(&nums)?);

    let evens = arithmetic_range((2.0, 9.0, 2.0)).map_err(error::AppError::from)?;
    println!("A random element of {evens:?}: {}.", range.choice(&evens)?);

    let batch = RandomRange::populate(config.count, PopulateOptions::default())?;
    println!("{} random integers from 0 to 100: {batch:?}.", config.count);

    let fractions = RandomRange::populate(config.count, PopulateOptions::default().with_frac(true))?;
    println!("{} random fractions: {fractions:?}.", config.count);

    tracing::info!("demo finished");
    Ok(())
}
