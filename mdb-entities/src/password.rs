use pwhash::bcrypt;
use std::str::FromStr;
use thiserror::Error;

/// A bcrypt hashed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

pub const MIN_LEN: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
    #[error("Unable to hash password")]
    Hash,
}

impl Password {
    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }

    /// Wraps an already hashed password (e.g. loaded from the database).
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

/// Checks the strength rules of a plain password.
pub fn check_strength(password: &str) -> Result<(), ParseError> {
    if password.chars().count() < MIN_LEN {
        return Err(ParseError::TooShort);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ParseError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ParseError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::MissingDigit);
    }
    Ok(())
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(password: &str) -> Result<Password, Self::Err> {
        check_strength(password)?;
        let hash = bcrypt::hash(password).map_err(|_| ParseError::Hash)?;
        Ok(Self(hash))
    }
}
