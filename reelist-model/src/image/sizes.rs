use std::fmt::Display;
use std::fmt::Formatter;

/// Image size variants, one family per TMDB image class
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq)]
pub enum ImageSize {
    Poster(PosterSize),     // Standard poster (2:3)
    Backdrop(BackdropSize), // Wide backdrop/banner
    Profile(ProfileSize),   // Person profile image
    Logo(LogoSize),         // Studio/network logo
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::Poster(s) => write!(f, "Poster (size: {})", s),
            ImageSize::Backdrop(s) => write!(f, "Backdrop (size: {})", s),
            ImageSize::Profile(s) => write!(f, "Profile (size: {})", s),
            ImageSize::Logo(s) => write!(f, "Logo (size: {})", s),
        }
    }
}

impl ImageSize {
    /// Default poster size (342px), used by list grids
    pub const fn poster() -> Self {
        Self::Poster(PosterSize::W342)
    }

    /// Small poster for list rows and search results
    pub const fn poster_thumb() -> Self {
        Self::Poster(PosterSize::W185)
    }

    /// Large poster for the details header
    pub const fn poster_large() -> Self {
        Self::Poster(PosterSize::W780)
    }

    /// Default backdrop size (1280px)
    pub const fn backdrop() -> Self {
        Self::Backdrop(BackdropSize::W1280)
    }

    /// Default profile size (185px)
    pub const fn profile() -> Self {
        Self::Profile(ProfileSize::W185)
    }

    /// Default logo size (185px)
    pub const fn logo() -> Self {
        Self::Logo(LogoSize::W185)
    }

    /// TMDB path segment for this size, e.g. "w342" or "original"
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Poster(s) => s.as_str(),
            ImageSize::Backdrop(s) => s.as_str(),
            ImageSize::Profile(s) => s.as_str(),
            ImageSize::Logo(s) => s.as_str(),
        }
    }
}

/// Poster image sizes offered by the TMDB CDN
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    #[default]
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub const ALL: [PosterSize; 7] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W342,
        Self::W500,
        Self::W780,
        Self::Original,
    ];

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W92 => Some(92),
            Self::W154 => Some(154),
            Self::W185 => Some(185),
            Self::W342 => Some(342),
            Self::W500 => Some(500),
            Self::W780 => Some(780),
            Self::Original => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.width() {
            Some(w) => write!(f, "{w}px"),
            None => write!(f, "Original"),
        }
    }
}

/// 16:9 backdrop sizes
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub const ALL: [BackdropSize; 4] =
        [Self::W300, Self::W780, Self::W1280, Self::Original];

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W300 => Some(300),
            Self::W780 => Some(780),
            Self::W1280 => Some(1280),
            Self::Original => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W300 => "w300",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

impl Display for BackdropSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.width() {
            Some(w) => write!(f, "{w}px"),
            None => write!(f, "Original"),
        }
    }
}

/// Profile/cast image sizes. `H632` is height-bound, the rest width-bound.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub const ALL: [ProfileSize; 4] =
        [Self::W45, Self::W185, Self::H632, Self::Original];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W185 => "w185",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

impl Display for ProfileSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::W45 => write!(f, "45px"),
            Self::W185 => write!(f, "185px"),
            Self::H632 => write!(f, "632px tall"),
            Self::Original => write!(f, "Original"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
pub enum LogoSize {
    W45,
    W92,
    W154,
    #[default]
    W185,
    W300,
    W500,
    Original,
}

impl LogoSize {
    pub const ALL: [LogoSize; 7] = [
        Self::W45,
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W300,
        Self::W500,
        Self::Original,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W300 => "w300",
            Self::W500 => "w500",
            Self::Original => "original",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

impl Display for LogoSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_back_to_their_size() {
        for size in PosterSize::ALL {
            assert_eq!(PosterSize::parse(size.as_str()), Some(size));
        }
        for size in ProfileSize::ALL {
            assert_eq!(ProfileSize::parse(size.as_str()), Some(size));
        }
        assert_eq!(BackdropSize::parse("w1920"), None);
    }

    #[test]
    fn image_size_delegates_token() {
        assert_eq!(ImageSize::poster().as_str(), "w342");
        assert_eq!(ImageSize::backdrop().as_str(), "w1280");
        assert_eq!(ImageSize::Profile(ProfileSize::H632).as_str(), "h632");
        assert_eq!(ImageSize::Logo(LogoSize::Original).as_str(), "original");
    }
}
