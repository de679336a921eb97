// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Validation errors raised while preparing a packing instance.
//!
//! All variants describe problems with the caller's input, never with the
//! engines themselves. Positions refer to the original input order so that
//! callers can point users directly at the offending element.

/// The error type for instance preparation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The bin capacity is zero or negative.
    NonPositiveCapacity,
    /// An item size is negative. The position refers to the caller's
    /// original input order.
    NegativeSize {
        /// Zero-based position of the offending item in the input.
        position: usize,
    },
    /// The total size of all fitting items overflows the size type.
    SizeOverflow,
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveCapacity => {
                write!(f, "Bin capacity must be a positive integer")
            }
            Self::NegativeSize { position } => {
                write!(f, "Item at position {} has a negative size", position)
            }
            Self::SizeOverflow => {
                write!(f, "Total item size overflows the numeric size type")
            }
        }
    }
}

impl std::error::Error for InstanceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", InstanceError::NonPositiveCapacity),
            "Bin capacity must be a positive integer"
        );
        assert_eq!(
            format!("{}", InstanceError::NegativeSize { position: 3 }),
            "Item at position 3 has a negative size"
        );
        assert_eq!(
            format!("{}", InstanceError::SizeOverflow),
            "Total item size overflows the numeric size type"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(InstanceError::NegativeSize { position: 0 });
        assert!(err.to_string().contains("position 0"));
    }
}
