use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Cannot compute progress for iteration {iteration}: total iterations is zero"))]
    DivisionByZero { iteration: u32 },

    #[snafu(display("Invalid simulation config: {reason}"))]
    InvalidConfig { reason: String },

    #[snafu(display("Failed to report progress for iteration {iteration}: {source}"))]
    ReportFailed {
        iteration: u32,
        #[snafu(source(from(Error, Box::new)))]
        source: Box<Error>,
    },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
