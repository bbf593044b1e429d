use super::sizes::{
    BackdropSize, ImageSize, LogoSize, PosterSize, ProfileSize,
};

/// Public TMDB image CDN root
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Builds absolute CDN URLs of the form `{base}/{size}{path}`.
///
/// TMDB paths carry their own leading slash (`/abc.jpg`). A missing or
/// blank path yields `None` so callers can fall back to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::new(TMDB_IMAGE_BASE_URL)
    }
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let sep = if path.starts_with('/') { "" } else { "/" };
        Some(format!("{}/{}{}{}", self.base_url, size.as_str(), sep, path))
    }

    pub fn poster(&self, path: Option<&str>, size: PosterSize) -> Option<String> {
        self.url(path, ImageSize::Poster(size))
    }

    pub fn backdrop(
        &self,
        path: Option<&str>,
        size: BackdropSize,
    ) -> Option<String> {
        self.url(path, ImageSize::Backdrop(size))
    }

    pub fn profile(
        &self,
        path: Option<&str>,
        size: ProfileSize,
    ) -> Option<String> {
        self.url(path, ImageSize::Profile(size))
    }

    pub fn logo(&self, path: Option<&str>, size: LogoSize) -> Option<String> {
        self.url(path, ImageSize::Logo(size))
    }
}

/// Poster URL on the public TMDB CDN
pub fn poster_url(path: Option<&str>, size: PosterSize) -> Option<String> {
    ImageUrlBuilder::default().poster(path, size)
}

/// Backdrop URL on the public TMDB CDN
pub fn backdrop_url(path: Option<&str>, size: BackdropSize) -> Option<String> {
    ImageUrlBuilder::default().backdrop(path, size)
}

pub fn profile_url(path: Option<&str>, size: ProfileSize) -> Option<String> {
    ImageUrlBuilder::default().profile(path, size)
}

pub fn logo_url(path: Option<&str>, size: LogoSize) -> Option<String> {
    ImageUrlBuilder::default().logo(path, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_cdn_urls() {
        let urls = ImageUrlBuilder::default();
        assert_eq!(
            urls.poster(Some("/abc.jpg"), PosterSize::W500).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            urls.profile(Some("/p.png"), ProfileSize::H632).as_deref(),
            Some("https://image.tmdb.org/t/p/h632/p.png")
        );
    }

    #[test]
    fn missing_or_blank_paths_have_no_url() {
        let urls = ImageUrlBuilder::default();
        assert_eq!(urls.poster(None, PosterSize::W92), None);
        assert_eq!(urls.backdrop(Some("  "), BackdropSize::W780), None);
    }

    #[test]
    fn free_helpers_use_the_public_cdn() {
        assert_eq!(
            poster_url(Some("/abc.jpg"), PosterSize::W342).as_deref(),
            Some("https://image.tmdb.org/t/p/w342/abc.jpg")
        );
        assert_eq!(
            backdrop_url(Some("/b.jpg"), BackdropSize::W1280).as_deref(),
            Some("https://image.tmdb.org/t/p/w1280/b.jpg")
        );
        assert_eq!(profile_url(Some(""), ProfileSize::W45), None);
        assert_eq!(logo_url(None, LogoSize::W92), None);
    }

    #[test]
    fn custom_base_is_normalized() {
        let urls = ImageUrlBuilder::new("https://cdn.example.com/t/p/");
        assert_eq!(
            urls.logo(Some("l.svg"), LogoSize::Original).as_deref(),
            Some("https://cdn.example.com/t/p/original/l.svg")
        );
    }
}
