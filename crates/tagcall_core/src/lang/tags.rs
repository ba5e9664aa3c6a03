//! Define the tag vocabulary: every identifier the call surface recognizes as a markup tag.
//!
//! This module is the single source of truth for tag spellings: an ordered const table ([`TAGS`]) plus one
//! `pub const` per upper-cased alias, so a tag can be passed around as data (`tags::DIV`) as well as invoked.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`clipPath`, not `clippath`).
//! - Upper-cased aliases are resolved through [`constant`]; they are not accepted by [`from_str`].
//! - The order of [`TAGS`] is the installation order: document markup first, then vector graphics.
//!
//! ## Examples
//! ```rust
//! use tagcall_core::lang::registry::TagFamily;
//! use tagcall_core::lang::tags;
//!
//! assert_eq!(tags::from_str("clipPath").map(|t| t.family), Some(TagFamily::Svg));
//! assert_eq!(tags::upper_alias("clipPath"), Some("CLIPPATH"));
//! assert_eq!(tags::CLIPPATH, "clipPath");
//! ```

use super::registry::{TagFamily, TagInfo};

macro_rules! tag_vocabulary {
    (
        html { $($hconst:ident = $hname:literal),* $(,)? }
        svg { $($sconst:ident = $sname:literal),* $(,)? }
    ) => {
        $(
            #[doc = concat!("The `", $hname, "` document-markup tag.")]
            pub const $hconst: &str = $hname;
        )*
        $(
            #[doc = concat!("The `", $sname, "` vector-graphics tag.")]
            pub const $sconst: &str = $sname;
        )*

        /// Document-markup tag spellings, in vocabulary order.
        pub const HTML_TAGS: &[&str] = &[$($hname),*];

        /// Vector-graphics tag spellings, in vocabulary order.
        pub const SVG_TAGS: &[&str] = &[$($sname),*];

        /// Registry of all tags.
        pub const TAGS: &[TagInfo] = &[
            $(info($hname, stringify!($hconst), TagFamily::Html),)*
            $(info($sname, stringify!($sconst), TagFamily::Svg),)*
        ];
    };
}

tag_vocabulary! {
    html {
        A = "a",
        ABBR = "abbr",
        ADDRESS = "address",
        AREA = "area",
        ARTICLE = "article",
        ASIDE = "aside",
        AUDIO = "audio",
        B = "b",
        BASE = "base",
        BDI = "bdi",
        BDO = "bdo",
        BIG = "big",
        BLOCKQUOTE = "blockquote",
        BODY = "body",
        BR = "br",
        BUTTON = "button",
        CANVAS = "canvas",
        CAPTION = "caption",
        CITE = "cite",
        CODE = "code",
        COL = "col",
        COLGROUP = "colgroup",
        DATA = "data",
        DATALIST = "datalist",
        DD = "dd",
        DEL = "del",
        DETAILS = "details",
        DFN = "dfn",
        DIALOG = "dialog",
        DIV = "div",
        DL = "dl",
        DT = "dt",
        EM = "em",
        EMBED = "embed",
        FIELDSET = "fieldset",
        FIGCAPTION = "figcaption",
        FIGURE = "figure",
        FOOTER = "footer",
        FORM = "form",
        H1 = "h1",
        H2 = "h2",
        H3 = "h3",
        H4 = "h4",
        H5 = "h5",
        H6 = "h6",
        HEAD = "head",
        HEADER = "header",
        HR = "hr",
        HTML = "html",
        I = "i",
        IFRAME = "iframe",
        IMG = "img",
        INPUT = "input",
        INS = "ins",
        KBD = "kbd",
        KEYGEN = "keygen",
        LABEL = "label",
        LEGEND = "legend",
        LI = "li",
        LINK = "link",
        MAIN = "main",
        MAP = "map",
        MARK = "mark",
        MENU = "menu",
        MENUITEM = "menuitem",
        META = "meta",
        METER = "meter",
        NAV = "nav",
        NOSCRIPT = "noscript",
        OBJECT = "object",
        OL = "ol",
        OPTGROUP = "optgroup",
        OPTION = "option",
        OUTPUT = "output",
        P = "p",
        PARAM = "param",
        PICTURE = "picture",
        PRE = "pre",
        PROGRESS = "progress",
        Q = "q",
        RP = "rp",
        RT = "rt",
        RUBY = "ruby",
        S = "s",
        SAMP = "samp",
        SCRIPT = "script",
        SECTION = "section",
        SELECT = "select",
        SMALL = "small",
        SOURCE = "source",
        SPAN = "span",
        STRONG = "strong",
        STYLE = "style",
        SUB = "sub",
        SUMMARY = "summary",
        SUP = "sup",
        TABLE = "table",
        TBODY = "tbody",
        TD = "td",
        TEXTAREA = "textarea",
        TFOOT = "tfoot",
        TH = "th",
        THEAD = "thead",
        TIME = "time",
        TITLE = "title",
        TR = "tr",
        TRACK = "track",
        U = "u",
        UL = "ul",
        VAR = "var",
        VIDEO = "video",
        WBR = "wbr",
    }
    svg {
        CIRCLE = "circle",
        CLIPPATH = "clipPath",
        DEFS = "defs",
        ELLIPSE = "ellipse",
        G = "g",
        LINE = "line",
        LINEARGRADIENT = "linearGradient",
        MASK = "mask",
        PATH = "path",
        PATTERN = "pattern",
        POLYGON = "polygon",
        POLYLINE = "polyline",
        RADIALGRADIENT = "radialGradient",
        RECT = "rect",
        STOP = "stop",
        SVG = "svg",
        TEXT = "text",
        TSPAN = "tspan",
    }
}

/// Lookup by canonical spelling.
///
/// ## Returns
/// - `Some(&TagInfo)` if `s` is a vocabulary tag (case-sensitive).
/// - `None` otherwise.
#[allow(clippy::should_implement_trait)]
pub fn from_str(s: &str) -> Option<&'static TagInfo> {
    TAGS.iter().find(|t| t.canonical == s)
}

/// Whether `s` is a vocabulary tag.
pub fn is_tag(s: &str) -> bool {
    from_str(s).is_some()
}

/// Resolve an upper-cased constant name to its tag spelling.
///
/// ## Examples
/// ```rust
/// use tagcall_core::lang::tags;
///
/// assert_eq!(tags::constant("LINEARGRADIENT"), Some("linearGradient"));
/// assert_eq!(tags::constant("div"), None);
/// ```
pub fn constant(name: &str) -> Option<&'static str> {
    TAGS.iter().find(|t| t.constant == name).map(|t| t.canonical)
}

/// Upper-cased alias for a tag.
pub fn upper_alias(tag: &str) -> Option<&'static str> {
    from_str(tag).map(|t| t.constant)
}

/// Tags belonging to `family`, in vocabulary order.
pub fn in_family(family: TagFamily) -> impl Iterator<Item = &'static TagInfo> {
    TAGS.iter().filter(move |t| t.family == family)
}

// --- helpers -----------------------------------------------------------------

const fn info(canonical: &'static str, constant: &'static str, family: TagFamily) -> TagInfo {
    TagInfo {
        canonical,
        constant,
        family,
    }
}
