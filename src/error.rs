use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to load catalog settings"))]
    LoadConfig {
        source: ::config::ConfigError,
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("Failed to parse catalog settings"))]
    ParseConfig {
        source: toml::de::Error,
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("Invalid settings: {message}"))]
    InvalidSettings { message: String },
}
