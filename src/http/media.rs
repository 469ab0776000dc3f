/// Media classification derived from a resource's filename suffix.
///
/// Classification is a pure function of the suffix string: the match is
/// case-sensitive and anything without a recognized suffix falls back to
/// HTML. The same classification drives both the `Content-Type` header and
/// the text-vs-binary body handling, so a recognized image extension can
/// never fall through to the text path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// HTML markup, the default for unrecognized or missing suffixes
    Html,
    /// PNG image
    Png,
    /// JPEG image (`.jpg`)
    Jpg,
    /// GIF image
    Gif,
    /// Favicon (`.ico`)
    Icon,
}

impl MediaKind {
    /// Classifies a resource path by its suffix.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.').map(|(_, ext)| ext) {
            Some("png") => MediaKind::Png,
            Some("jpg") => MediaKind::Jpg,
            Some("gif") => MediaKind::Gif,
            Some("ico") => MediaKind::Icon,
            _ => MediaKind::Html,
        }
    }

    /// Returns the MIME string sent in the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            MediaKind::Html => "text/html",
            MediaKind::Png => "image/png",
            MediaKind::Jpg => "image/jpg",
            MediaKind::Gif => "image/gif",
            MediaKind::Icon => "image/x-icon",
        }
    }

    /// True for kinds whose bodies are streamed verbatim, byte for byte,
    /// without any text decoding.
    pub fn is_binary(&self) -> bool {
        !matches!(self, MediaKind::Html)
    }
}
