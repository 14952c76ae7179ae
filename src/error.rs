use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tmxmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("unsupported map format version: {version}")]
    #[diagnostic(code(tmxmap::version))]
    FormatVersion {
        version: String,
        #[help]
        help: Option<String>,
    },

    #[error("unrecognized map orientation: {value}")]
    #[diagnostic(code(tmxmap::orientation))]
    Orientation { value: String },

    #[error("unrecognized stagger axis: {value}")]
    #[diagnostic(code(tmxmap::stagger_axis))]
    StaggerAxis { value: String },

    #[error("unrecognized stagger index: {value}")]
    #[diagnostic(code(tmxmap::stagger_index))]
    StaggerIndex { value: String },

    #[error("invalid colour: {value}")]
    #[diagnostic(code(tmxmap::colour))]
    Colour {
        value: String,
        #[help]
        help: Option<String>,
    },

    #[error("map has no name")]
    #[diagnostic(code(tmxmap::name), help("set a name on the map before comparing by name"))]
    NameMissing,
}

pub type Result<T> = std::result::Result<T, MapError>;
