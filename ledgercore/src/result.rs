use hex::FromHexError;
use std::fmt;

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// An argument provided is invalid
    BadArgument(String),
    /// A hex string has an odd length or contains non-hex characters.
    MalformedHex(String),
    /// A character outside the base-58 alphabet was encountered.
    InvalidBase58Character(char),
    /// The hex string does not decode to a point on the curve.
    InvalidPublicKey,
    /// A fixed-width block header field overflowed its byte budget.
    FieldTooLong { field: &'static str, len: usize },
    /// secp256k1 library error
    Secp256k1Error(secp256k1::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadArgument(s) => f.write_str(&format!("Bad argument: {}", s)),
            Error::MalformedHex(s) => f.write_str(&format!("Malformed hex: {}", s)),
            Error::InvalidBase58Character(c) => {
                f.write_str(&format!("Invalid base58 character: {:?}", c))
            }
            Error::InvalidPublicKey => f.write_str("Invalid public key"),
            Error::FieldTooLong { field, len } => f.write_str(&format!(
                "Header field {} too long: {} hex digits, maximum is 64",
                field, len
            )),
            Error::Secp256k1Error(e) => f.write_str(&format!("secp256k1 error: {:?}", e)),
        }
    }
}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Error::MalformedHex(e.to_string())
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        Error::Secp256k1Error(e)
    }
}
