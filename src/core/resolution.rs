use std::fmt;
use std::str::FromStr;

use crate::core::error::ComphyError;

/// Output size requested from the image generator, written as `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ComphyError> {
        if width == 0 || height == 0 {
            return Err(ComphyError::invalid(format!(
                "resolution must be positive (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }
}

impl FromStr for Resolution {
    type Err = ComphyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            ComphyError::invalid(format!(
                "resolution '{input}' must look like WIDTHxHEIGHT, e.g. 1024x768"
            ))
        };
        let (w, h) = input
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        let width: u32 = w.parse().map_err(|_| malformed())?;
        let height: u32 = h.parse().map_err(|_| malformed())?;
        Resolution::new(width, height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn parses_either_separator_case() {
        assert_eq!(
            "1024x768".parse::<Resolution>().unwrap(),
            Resolution {
                width: 1024,
                height: 768
            }
        );
        assert_eq!(
            "512X512".parse::<Resolution>().unwrap().to_string(),
            "512x512"
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        for raw in ["", "1024", "x768", "1024x", "0x10", "10x0", "-5x5", "1x2x3", "axb"] {
            let err = raw.parse::<Resolution>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input {raw:?}");
        }
    }
}
