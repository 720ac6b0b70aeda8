// Adapters layer: concrete handler backends for the dispatcher.

pub mod unconfigured;
