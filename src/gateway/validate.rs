use crate::{Error, Result};

pub fn model(model: &str) -> Result<()> {
    if model.is_empty() {
        return Err(Error::ModelEmpty);
    }
    Ok(())
}

pub fn input_ref(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(Error::InputEmpty);
    }
    Ok(())
}

/// An empty byte string here means the caller had no valid data, not an empty payload.
pub fn input_bytes(input: &[u8]) -> Result<()> {
    if input.is_empty() {
        return Err(Error::InputBytesZeroLength);
    }
    Ok(())
}
