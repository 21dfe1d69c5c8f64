//! Library side of the `mrz` command: logging setup, record assembly and
//! command output.

pub mod encode;
pub mod logging;
pub mod record;
pub mod summary;
