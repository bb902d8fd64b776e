//! Geographic coordinate labels.

use super::number::ScalarFormatter;
use super::Formatter;

/// Labels for latitude and longitude axes.
///
/// With a cardinal pair configured, negative values print their magnitude
/// followed by the first letter and positive values get the second; zero
/// stays plain. The degree sign, when enabled, sits between the number and
/// the cardinal letter.
///
/// # Examples
///
/// ```
/// use skala::format::{CoordinateFormatter, Formatter};
///
/// let lat = CoordinateFormatter::deglat();
/// assert_eq!(lat.format(-30.0, 0), "30°S");
/// assert_eq!(lat.format(45.0, 0), "45°N");
/// assert_eq!(lat.format(0.0, 0), "0°");
///
/// let bare = CoordinateFormatter::new(true);
/// assert_eq!(bare.format(-30.0, 0), "\u{2212}30°");
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateFormatter {
    inner: ScalarFormatter,
    degree_sign: bool,
    cardinal: Option<[char; 2]>,
}

impl CoordinateFormatter {
    /// Plain coordinate labels, signed, with an optional degree sign.
    pub fn new(degree_sign: bool) -> Self {
        Self {
            inner: ScalarFormatter::new(),
            degree_sign,
            cardinal: None,
        }
    }

    /// Latitude labels with `S`/`N` letters and no degree sign.
    pub fn lat() -> Self {
        Self {
            cardinal: Some(['S', 'N']),
            ..Self::new(false)
        }
    }

    /// Longitude labels with `W`/`E` letters and no degree sign.
    pub fn lon() -> Self {
        Self {
            cardinal: Some(['W', 'E']),
            ..Self::new(false)
        }
    }

    /// Latitude labels with both the degree sign and `S`/`N` letters.
    pub fn deglat() -> Self {
        Self {
            degree_sign: true,
            ..Self::lat()
        }
    }

    /// Longitude labels with both the degree sign and `W`/`E` letters.
    pub fn deglon() -> Self {
        Self {
            degree_sign: true,
            ..Self::lon()
        }
    }
}

impl Formatter for CoordinateFormatter {
    fn format(&self, value: f64, index: usize) -> String {
        let (magnitude, letter) = match self.cardinal {
            Some([south, _]) if value < 0.0 => (-value, Some(south)),
            Some([_, north]) if value > 0.0 => (value, Some(north)),
            _ => (value, None),
        };
        let mut label = self.inner.format(magnitude, index);
        if label.is_empty() {
            return label;
        }
        if self.degree_sign {
            label.push('°');
        }
        if let Some(letter) = letter {
            label.push(letter);
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_uses_cardinal_letters_instead_of_signs() {
        let fmt = CoordinateFormatter::lat();
        assert_eq!(fmt.format(-30.0, 0), "30S");
        assert_eq!(fmt.format(45.5, 0), "45.5N");
        assert_eq!(fmt.format(0.0, 0), "0");
    }

    #[test]
    fn longitude_uses_west_and_east() {
        let fmt = CoordinateFormatter::lon();
        assert_eq!(fmt.format(-122.25, 0), "122.25W");
        assert_eq!(fmt.format(10.0, 0), "10E");
    }

    #[test]
    fn degree_variants_insert_the_sign_before_the_letter() {
        let lat = CoordinateFormatter::deglat();
        assert_eq!(lat.format(-30.0, 0), "30°S");
        let lon = CoordinateFormatter::deglon();
        assert_eq!(lon.format(-122.5, 0), "122.5°W");
        assert_eq!(lon.format(10.0, 0), "10°E");
    }

    #[test]
    fn bare_degrees_keep_the_sign() {
        let fmt = CoordinateFormatter::new(true);
        assert_eq!(fmt.format(-30.0, 0), "\u{2212}30°");
        assert_eq!(fmt.format(30.0, 0), "30°");
        assert_eq!(fmt.format(0.0, 0), "0°");
    }

    #[test]
    fn negative_zero_stays_plain() {
        let fmt = CoordinateFormatter::lat();
        assert_eq!(fmt.format(-0.0, 0), "0");
    }
}
