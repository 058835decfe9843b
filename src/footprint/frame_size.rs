use super::ValidationError;

use once_cell::sync::Lazy;
use regex::Regex;

// first `<digit>x<digit>` anywhere in the text, e.g. "9x9" or "Frame 9X18"
static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9])[xX]([0-9])").unwrap());

/// Print dimensions in inches
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSize {
    pub length: f64,
    pub width: f64,
}

impl FrameSize {
    pub fn parse(size: Option<&str>) -> Result<FrameSize, ValidationError> {
        let error = || ValidationError::SizeUnparseable(size.map(str::to_string));

        let captures = size
            .and_then(|s| SIZE_PATTERN.captures(s))
            .ok_or_else(error)?;

        let (Some(length), Some(width)) = (captures.get(1), captures.get(2)) else {
            return Err(error());
        };

        let length: f64 = length.as_str().parse().map_err(|_| error())?;
        let width: f64 = width.as_str().parse().map_err(|_| error())?;

        // a zero side would give a footprint without area
        if length == 0. || width == 0. {
            return Err(error());
        }

        Ok(FrameSize { length, width })
    }

    pub fn is_square(&self) -> bool {
        self.length == self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_and_rectangular() -> Result<(), ValidationError> {
        let square = FrameSize::parse(Some("9x9"))?;
        assert_eq!(
            square,
            FrameSize {
                length: 9.,
                width: 9.
            }
        );
        assert!(square.is_square());

        let rect = FrameSize::parse(Some("4X5"))?;
        assert_eq!(
            rect,
            FrameSize {
                length: 4.,
                width: 5.
            }
        );
        assert!(!rect.is_square());
        Ok(())
    }

    #[test]
    fn searches_inside_text() -> Result<(), ValidationError> {
        // only single digits take part in the match
        assert_eq!(
            FrameSize::parse(Some("9x18 in"))?,
            FrameSize {
                length: 9.,
                width: 1.
            }
        );
        assert_eq!(
            FrameSize::parse(Some("frame 7x7"))?,
            FrameSize {
                length: 7.,
                width: 7.
            }
        );
        Ok(())
    }

    #[test]
    fn unparseable() {
        assert_eq!(
            FrameSize::parse(Some("bad")),
            Err(ValidationError::SizeUnparseable(Some("bad".to_string())))
        );
        assert_eq!(
            FrameSize::parse(Some("9 x 9")),
            Err(ValidationError::SizeUnparseable(Some("9 x 9".to_string())))
        );
        assert_eq!(
            FrameSize::parse(None),
            Err(ValidationError::SizeUnparseable(None))
        );
        assert_eq!(
            FrameSize::parse(Some("0x9")).map_err(|e| e.to_string()),
            Err("size: 0x9".to_string())
        );
    }
}
