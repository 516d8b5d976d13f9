use crate::settings::Scheme;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error(
        "{} scheme supports at most {capacity} files per group (position {} requested)",
        .scheme.label(),
        .index + 1
    )]
    Overflow {
        scheme: Scheme,
        index: usize,
        capacity: usize,
    },
}

/// Token for the zero-based `index` within a group.
pub fn sequence_token(index: usize, scheme: Scheme) -> Result<String, SequenceError> {
    if let Some(capacity) = scheme.capacity() {
        if index >= capacity {
            return Err(SequenceError::Overflow {
                scheme,
                index,
                capacity,
            });
        }
    }

    let token = match scheme {
        Scheme::Numeric => (index + 1).to_string(),
        Scheme::Alphabetical => {
            let mut out = String::with_capacity(2);
            out.push(letter(index / 26));
            out.push(letter(index % 26));
            out
        }
        Scheme::Mixed => format!("{}{}", letter(index / 10), index % 10),
    };
    Ok(token)
}

// Caller keeps `n` below 26.
fn letter(n: usize) -> char {
    char::from(b'A' + n as u8)
}
