//! Common functionality shared across the crate

/// Generic builder trait for configuration and model objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the object, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepdotError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepdotError>;
}
