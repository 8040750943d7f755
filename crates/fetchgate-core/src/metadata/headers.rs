//! Typed fetch metadata header values.

/// Request header naming the origin relationship.
pub const SEC_FETCH_SITE: &str = "sec-fetch-site";
/// Request header naming the request mode.
pub const SEC_FETCH_MODE: &str = "sec-fetch-mode";
/// Request header naming the request destination.
pub const SEC_FETCH_DEST: &str = "sec-fetch-dest";

/// Label used for unrecognised tokens (keeps metric cardinality bounded).
const OTHER: &str = "other";

fn normalize(raw: &str) -> Option<&str> {
    let v = raw.trim();
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

/// `Sec-Fetch-Site` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Site {
    SameOrigin,
    SameSite,
    /// User-initiated (address bar, bookmark).
    None,
    CrossSite,
    Other(String),
}

impl Site {
    /// Parse a header value. Empty or whitespace-only input is absent.
    pub fn parse(raw: &str) -> Option<Self> {
        let v = normalize(raw)?;
        Some(match v {
            "same-origin" => Site::SameOrigin,
            "same-site" => Site::SameSite,
            "none" => Site::None,
            "cross-site" => Site::CrossSite,
            other => Site::Other(other.to_string()),
        })
    }

    /// First-party or user-initiated traffic.
    pub fn is_trusted(&self) -> bool {
        matches!(self, Site::SameOrigin | Site::SameSite | Site::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Site::SameOrigin => "same-origin",
            Site::SameSite => "same-site",
            Site::None => "none",
            Site::CrossSite => "cross-site",
            Site::Other(_) => OTHER,
        }
    }
}

/// `Sec-Fetch-Mode` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    NestedNavigate,
    Cors,
    NoCors,
    SameOrigin,
    Websocket,
    Other(String),
}

impl Mode {
    pub fn parse(raw: &str) -> Option<Self> {
        let v = normalize(raw)?;
        Some(match v {
            "navigate" => Mode::Navigate,
            "nested-navigate" => Mode::NestedNavigate,
            "cors" => Mode::Cors,
            "no-cors" => Mode::NoCors,
            "same-origin" => Mode::SameOrigin,
            "websocket" => Mode::Websocket,
            other => Mode::Other(other.to_string()),
        })
    }

    /// Top-level or framed navigation.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Mode::Navigate | Mode::NestedNavigate)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Navigate => "navigate",
            Mode::NestedNavigate => "nested-navigate",
            Mode::Cors => "cors",
            Mode::NoCors => "no-cors",
            Mode::SameOrigin => "same-origin",
            Mode::Websocket => "websocket",
            Mode::Other(_) => OTHER,
        }
    }
}

/// `Sec-Fetch-Dest` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dest {
    Document,
    NestedDocument,
    Iframe,
    Frame,
    Object,
    Embed,
    Script,
    Style,
    Image,
    Font,
    Audio,
    Video,
    Track,
    Worker,
    SharedWorker,
    ServiceWorker,
    Manifest,
    Report,
    Xslt,
    AudioWorklet,
    PaintWorklet,
    Empty,
    Other(String),
}

impl Dest {
    pub fn parse(raw: &str) -> Option<Self> {
        let v = normalize(raw)?;
        Some(match v {
            "document" => Dest::Document,
            "nested-document" => Dest::NestedDocument,
            "iframe" => Dest::Iframe,
            "frame" => Dest::Frame,
            "object" => Dest::Object,
            "embed" => Dest::Embed,
            "script" => Dest::Script,
            "style" => Dest::Style,
            "image" => Dest::Image,
            "font" => Dest::Font,
            "audio" => Dest::Audio,
            "video" => Dest::Video,
            "track" => Dest::Track,
            "worker" => Dest::Worker,
            "sharedworker" => Dest::SharedWorker,
            "serviceworker" => Dest::ServiceWorker,
            "manifest" => Dest::Manifest,
            "report" => Dest::Report,
            "xslt" => Dest::Xslt,
            "audioworklet" => Dest::AudioWorklet,
            "paintworklet" => Dest::PaintWorklet,
            "empty" => Dest::Empty,
            other => Dest::Other(other.to_string()),
        })
    }

    /// Destinations a cross-site navigation may load under the default policy.
    /// Fixed list: `iframe`/`frame` are deliberately not included.
    pub fn is_navigable_document(&self) -> bool {
        matches!(self, Dest::Document | Dest::NestedDocument)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Dest::Document => "document",
            Dest::NestedDocument => "nested-document",
            Dest::Iframe => "iframe",
            Dest::Frame => "frame",
            Dest::Object => "object",
            Dest::Embed => "embed",
            Dest::Script => "script",
            Dest::Style => "style",
            Dest::Image => "image",
            Dest::Font => "font",
            Dest::Audio => "audio",
            Dest::Video => "video",
            Dest::Track => "track",
            Dest::Worker => "worker",
            Dest::SharedWorker => "sharedworker",
            Dest::ServiceWorker => "serviceworker",
            Dest::Manifest => "manifest",
            Dest::Report => "report",
            Dest::Xslt => "xslt",
            Dest::AudioWorklet => "audioworklet",
            Dest::PaintWorklet => "paintworklet",
            Dest::Empty => "empty",
            Dest::Other(_) => OTHER,
        }
    }
}
