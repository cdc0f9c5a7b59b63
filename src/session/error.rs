use std::fmt;

/// Errors that can occur when interacting with the wallet session registry.
#[derive(Debug)]
pub enum SessionError {
    /// The supplied string is not a well-formed base58 Solana public key.
    InvalidAddress(String),
    /// The chat has no wallet bound; the user must /connectwallet first.
    NoWalletConnected(i64),
    /// A generic internal error.
    Internal(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidAddress(raw) => {
                write!(f, "Invalid Solana address: {}", raw)
            }
            SessionError::NoWalletConnected(chat_id) => {
                write!(f, "No wallet connected for chat {}", chat_id)
            }
            SessionError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}
