//! Foundation: the pieces everything else leans on
//!
//! - [`math`]: `Vec2` and small scalar helpers (`+y` is down)
//! - [`collections`]: generational entity handles
//! - [`time`]: fixed-step accumulator and a stopwatch
//! - [`logging`]: `env_logger` setup

pub mod collections;
pub mod logging;
pub mod math;
pub mod time;
