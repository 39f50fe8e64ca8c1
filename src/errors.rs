use failure::Fail;

#[derive(Debug, Fail)]
pub enum SnipsNluPlaygroundError {
    #[fail(display = "Unable to read file '{}'", _0)]
    ModelLoad(String),
    #[fail(display = "Invalid keyword rule for intent '{}': {}", intent, reason)]
    InvalidKeywordRule { intent: String, reason: String },
    #[fail(display = "Invalid engine configuration: {}", _0)]
    InvalidConfiguration(String),
    #[fail(display = "Unknown intent: '{}'", _0)]
    UnknownIntent(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
