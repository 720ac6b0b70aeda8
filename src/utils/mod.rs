pub mod coerce;
pub mod env;
pub mod error;
pub mod json;
pub mod logger;
pub mod net;
pub mod numeric;
pub mod paths;
pub mod process;
pub mod salt;
pub mod timeout;
pub mod validation;
