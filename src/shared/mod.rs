//! Geteilte Typen: Konfiguration.

pub mod options;

pub use options::ClientOptions;
