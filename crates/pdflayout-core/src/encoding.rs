//! Glyph names, standard simple-font encodings and the glyph list.
//!
//! Simple fonts map a one-byte code to a glyph *name* (through a base
//! encoding plus `/Differences`), and the name to Unicode through the
//! glyph list. Outline lookup for encoded fonts needs the name, so the
//! tables here are keyed by name rather than by character.

use std::collections::HashMap;

/// String substituted when a code has no Unicode mapping.
pub const NO_UNICODE: &str = "[NO_UNICODE]";

/// A named base encoding for simple fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardEncoding {
    /// StandardEncoding, the built-in encoding of most Type1 fonts.
    Standard,
    /// MacRomanEncoding.
    MacRoman,
    /// WinAnsiEncoding.
    WinAnsi,
}

impl StandardEncoding {
    /// Parse an `/Encoding` name such as `WinAnsiEncoding`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "StandardEncoding" => Some(Self::Standard),
            "MacRomanEncoding" => Some(Self::MacRoman),
            "WinAnsiEncoding" => Some(Self::WinAnsi),
            _ => None,
        }
    }

    /// Glyph name at `code`, if the encoding defines one.
    pub fn glyph_name(&self, code: u8) -> Option<&'static str> {
        LATIN
            .iter()
            .find(|row| self.position(row) == Some(code))
            .map(|row| row.0)
    }

    /// Code of `name` in this encoding.
    pub fn code_of(&self, name: &str) -> Option<u8> {
        LATIN
            .iter()
            .find(|row| row.0 == name)
            .and_then(|row| self.position(row))
    }

    fn position(&self, row: &LatinRow) -> Option<u8> {
        match self {
            Self::Standard => row.2,
            Self::MacRoman => row.3,
            Self::WinAnsi => row.4,
        }
    }
}

/// Code-to-name mapping of a simple font: base encoding plus `/Differences`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontEncoding {
    pub base: Option<StandardEncoding>,
    pub differences: HashMap<u8, String>,
}

impl FontEncoding {
    pub fn new(base: Option<StandardEncoding>) -> Self {
        Self {
            base,
            differences: HashMap::new(),
        }
    }

    /// Apply a parsed `/Differences` array.
    pub fn with_differences(mut self, differences: impl IntoIterator<Item = (u8, String)>) -> Self {
        self.differences.extend(differences);
        self
    }

    /// Resolve `code` to a glyph name; differences take precedence.
    pub fn glyph_name(&self, code: u8) -> Option<&str> {
        if let Some(name) = self.differences.get(&code) {
            return Some(name.as_str());
        }
        self.base.and_then(|enc| enc.glyph_name(code))
    }
}

/// Glyph-name to Unicode lookup.
///
/// Covers the Latin character set, a handful of common ligature and symbol
/// names, and the algorithmic `uniXXXX` and `uXXXX[XX]` forms. Suffixed
/// names (`a.sc`) and ligature names (`f_i`) resolve through their parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphList;

impl GlyphList {
    pub fn new() -> Self {
        Self
    }

    /// Unicode string for a glyph name.
    pub fn to_unicode(&self, name: &str) -> Option<String> {
        // a.sc, one.oldstyle
        let base = name.split('.').next().unwrap_or(name);
        if base.is_empty() {
            return None;
        }
        if base.contains('_') {
            let parts: Option<String> = base
                .split('_')
                .map(|part| self.to_unicode(part))
                .collect();
            return parts;
        }
        if let Some(c) = lookup_char(base) {
            return Some(c.to_string());
        }
        parse_uni_name(base)
    }

    /// Reverse lookup used by fonts whose `post` table lacks a name.
    pub fn name_for(&self, c: char) -> Option<&'static str> {
        LATIN
            .iter()
            .find(|row| row.1 == c)
            .map(|row| row.0)
            .or_else(|| ADDITIONAL.iter().find(|row| row.1 == c).map(|row| row.0))
    }
}

fn lookup_char(name: &str) -> Option<char> {
    LATIN
        .iter()
        .find(|row| row.0 == name)
        .map(|row| row.1)
        .or_else(|| ADDITIONAL.iter().find(|row| row.0 == name).map(|row| row.1))
}

/// `uni0041` (one or more groups of four hex digits) or `u1F600`.
fn parse_uni_name(name: &str) -> Option<String> {
    if let Some(hex) = name.strip_prefix("uni") {
        if hex.is_empty() || hex.len() % 4 != 0 {
            return None;
        }
        let mut out = String::new();
        for chunk in hex.as_bytes().chunks(4) {
            let s = std::str::from_utf8(chunk).ok()?;
            let v = u32::from_str_radix(s, 16).ok()?;
            out.push(char::from_u32(v)?);
        }
        return Some(out);
    }
    if let Some(hex) = name.strip_prefix('u') {
        if (4..=6).contains(&hex.len()) && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let v = u32::from_str_radix(hex, 16).ok()?;
            return char::from_u32(v).map(String::from);
        }
    }
    None
}

/// `(name, character, standard, mac_roman, win_ansi)`.
type LatinRow = (&'static str, char, Option<u8>, Option<u8>, Option<u8>);

/// Latin character set and encodings (ISO 32000-1, Annex D.2).
static LATIN: &[LatinRow] = &[
    ("A", 'A', Some(65), Some(65), Some(65)),
    ("AE", '\u{00C6}', Some(225), Some(174), Some(198)),
    ("Aacute", '\u{00C1}', None, Some(231), Some(193)),
    ("Acircumflex", '\u{00C2}', None, Some(229), Some(194)),
    ("Adieresis", '\u{00C4}', None, Some(128), Some(196)),
    ("Agrave", '\u{00C0}', None, Some(203), Some(192)),
    ("Aring", '\u{00C5}', None, Some(129), Some(197)),
    ("Atilde", '\u{00C3}', None, Some(204), Some(195)),
    ("B", 'B', Some(66), Some(66), Some(66)),
    ("C", 'C', Some(67), Some(67), Some(67)),
    ("Ccedilla", '\u{00C7}', None, Some(130), Some(199)),
    ("D", 'D', Some(68), Some(68), Some(68)),
    ("E", 'E', Some(69), Some(69), Some(69)),
    ("Eacute", '\u{00C9}', None, Some(131), Some(201)),
    ("Ecircumflex", '\u{00CA}', None, Some(230), Some(202)),
    ("Edieresis", '\u{00CB}', None, Some(232), Some(203)),
    ("Egrave", '\u{00C8}', None, Some(233), Some(200)),
    ("Eth", '\u{00D0}', None, None, Some(208)),
    ("Euro", '\u{20AC}', None, None, Some(128)),
    ("F", 'F', Some(70), Some(70), Some(70)),
    ("G", 'G', Some(71), Some(71), Some(71)),
    ("H", 'H', Some(72), Some(72), Some(72)),
    ("I", 'I', Some(73), Some(73), Some(73)),
    ("Iacute", '\u{00CD}', None, Some(234), Some(205)),
    ("Icircumflex", '\u{00CE}', None, Some(235), Some(206)),
    ("Idieresis", '\u{00CF}', None, Some(236), Some(207)),
    ("Igrave", '\u{00CC}', None, Some(237), Some(204)),
    ("J", 'J', Some(74), Some(74), Some(74)),
    ("K", 'K', Some(75), Some(75), Some(75)),
    ("L", 'L', Some(76), Some(76), Some(76)),
    ("Lslash", '\u{0141}', Some(232), None, None),
    ("M", 'M', Some(77), Some(77), Some(77)),
    ("N", 'N', Some(78), Some(78), Some(78)),
    ("Ntilde", '\u{00D1}', None, Some(132), Some(209)),
    ("O", 'O', Some(79), Some(79), Some(79)),
    ("OE", '\u{0152}', Some(234), Some(206), Some(140)),
    ("Oacute", '\u{00D3}', None, Some(238), Some(211)),
    ("Ocircumflex", '\u{00D4}', None, Some(239), Some(212)),
    ("Odieresis", '\u{00D6}', None, Some(133), Some(214)),
    ("Ograve", '\u{00D2}', None, Some(241), Some(210)),
    ("Oslash", '\u{00D8}', Some(233), Some(175), Some(216)),
    ("Otilde", '\u{00D5}', None, Some(205), Some(213)),
    ("P", 'P', Some(80), Some(80), Some(80)),
    ("Q", 'Q', Some(81), Some(81), Some(81)),
    ("R", 'R', Some(82), Some(82), Some(82)),
    ("S", 'S', Some(83), Some(83), Some(83)),
    ("Scaron", '\u{0160}', None, None, Some(138)),
    ("T", 'T', Some(84), Some(84), Some(84)),
    ("Thorn", '\u{00DE}', None, None, Some(222)),
    ("U", 'U', Some(85), Some(85), Some(85)),
    ("Uacute", '\u{00DA}', None, Some(242), Some(218)),
    ("Ucircumflex", '\u{00DB}', None, Some(243), Some(219)),
    ("Udieresis", '\u{00DC}', None, Some(134), Some(220)),
    ("Ugrave", '\u{00D9}', None, Some(244), Some(217)),
    ("V", 'V', Some(86), Some(86), Some(86)),
    ("W", 'W', Some(87), Some(87), Some(87)),
    ("X", 'X', Some(88), Some(88), Some(88)),
    ("Y", 'Y', Some(89), Some(89), Some(89)),
    ("Yacute", '\u{00DD}', None, None, Some(221)),
    ("Ydieresis", '\u{0178}', None, Some(217), Some(159)),
    ("Z", 'Z', Some(90), Some(90), Some(90)),
    ("Zcaron", '\u{017D}', None, None, Some(142)),
    ("a", 'a', Some(97), Some(97), Some(97)),
    ("aacute", '\u{00E1}', None, Some(135), Some(225)),
    ("acircumflex", '\u{00E2}', None, Some(137), Some(226)),
    ("acute", '\u{00B4}', Some(194), Some(171), Some(180)),
    ("adieresis", '\u{00E4}', None, Some(138), Some(228)),
    ("ae", '\u{00E6}', Some(241), Some(190), Some(230)),
    ("agrave", '\u{00E0}', None, Some(136), Some(224)),
    ("ampersand", '&', Some(38), Some(38), Some(38)),
    ("aring", '\u{00E5}', None, Some(140), Some(229)),
    ("asciicircum", '^', Some(94), Some(94), Some(94)),
    ("asciitilde", '~', Some(126), Some(126), Some(126)),
    ("asterisk", '*', Some(42), Some(42), Some(42)),
    ("at", '@', Some(64), Some(64), Some(64)),
    ("atilde", '\u{00E3}', None, Some(139), Some(227)),
    ("b", 'b', Some(98), Some(98), Some(98)),
    ("backslash", '\\', Some(92), Some(92), Some(92)),
    ("bar", '|', Some(124), Some(124), Some(124)),
    ("braceleft", '{', Some(123), Some(123), Some(123)),
    ("braceright", '}', Some(125), Some(125), Some(125)),
    ("bracketleft", '[', Some(91), Some(91), Some(91)),
    ("bracketright", ']', Some(93), Some(93), Some(93)),
    ("breve", '\u{02D8}', Some(198), Some(249), None),
    ("brokenbar", '\u{00A6}', None, None, Some(166)),
    ("bullet", '\u{2022}', Some(183), Some(165), Some(149)),
    ("c", 'c', Some(99), Some(99), Some(99)),
    ("caron", '\u{02C7}', Some(207), Some(255), None),
    ("ccedilla", '\u{00E7}', None, Some(141), Some(231)),
    ("cedilla", '\u{00B8}', Some(203), Some(252), Some(184)),
    ("cent", '\u{00A2}', Some(162), Some(162), Some(162)),
    ("circumflex", '\u{02C6}', Some(195), Some(246), Some(136)),
    ("colon", ':', Some(58), Some(58), Some(58)),
    ("comma", ',', Some(44), Some(44), Some(44)),
    ("copyright", '\u{00A9}', None, Some(169), Some(169)),
    ("currency", '\u{00A4}', Some(168), Some(219), Some(164)),
    ("d", 'd', Some(100), Some(100), Some(100)),
    ("dagger", '\u{2020}', Some(178), Some(160), Some(134)),
    ("daggerdbl", '\u{2021}', Some(179), Some(224), Some(135)),
    ("degree", '\u{00B0}', None, Some(161), Some(176)),
    ("dieresis", '\u{00A8}', Some(200), Some(172), Some(168)),
    ("divide", '\u{00F7}', None, Some(214), Some(247)),
    ("dollar", '$', Some(36), Some(36), Some(36)),
    ("dotaccent", '\u{02D9}', Some(199), Some(250), None),
    ("dotlessi", '\u{0131}', Some(245), Some(245), None),
    ("e", 'e', Some(101), Some(101), Some(101)),
    ("eacute", '\u{00E9}', None, Some(142), Some(233)),
    ("ecircumflex", '\u{00EA}', None, Some(144), Some(234)),
    ("edieresis", '\u{00EB}', None, Some(145), Some(235)),
    ("egrave", '\u{00E8}', None, Some(143), Some(232)),
    ("eight", '8', Some(56), Some(56), Some(56)),
    ("ellipsis", '\u{2026}', Some(188), Some(201), Some(133)),
    ("emdash", '\u{2014}', Some(208), Some(209), Some(151)),
    ("endash", '\u{2013}', Some(177), Some(208), Some(150)),
    ("equal", '=', Some(61), Some(61), Some(61)),
    ("eth", '\u{00F0}', None, None, Some(240)),
    ("exclam", '!', Some(33), Some(33), Some(33)),
    ("exclamdown", '\u{00A1}', Some(161), Some(193), Some(161)),
    ("f", 'f', Some(102), Some(102), Some(102)),
    ("fi", '\u{FB01}', Some(174), Some(222), None),
    ("five", '5', Some(53), Some(53), Some(53)),
    ("fl", '\u{FB02}', Some(175), Some(223), None),
    ("florin", '\u{0192}', Some(166), Some(196), Some(131)),
    ("four", '4', Some(52), Some(52), Some(52)),
    ("fraction", '\u{2044}', Some(164), Some(218), None),
    ("g", 'g', Some(103), Some(103), Some(103)),
    ("germandbls", '\u{00DF}', Some(251), Some(167), Some(223)),
    ("grave", '`', Some(193), Some(96), Some(96)),
    ("greater", '>', Some(62), Some(62), Some(62)),
    ("guillemotleft", '\u{00AB}', Some(171), Some(199), Some(171)),
    ("guillemotright", '\u{00BB}', Some(187), Some(200), Some(187)),
    ("guilsinglleft", '\u{2039}', Some(172), Some(220), Some(139)),
    ("guilsinglright", '\u{203A}', Some(173), Some(221), Some(155)),
    ("h", 'h', Some(104), Some(104), Some(104)),
    ("hungarumlaut", '\u{02DD}', Some(205), Some(253), None),
    ("hyphen", '-', Some(45), Some(45), Some(45)),
    ("i", 'i', Some(105), Some(105), Some(105)),
    ("iacute", '\u{00ED}', None, Some(146), Some(237)),
    ("icircumflex", '\u{00EE}', None, Some(148), Some(238)),
    ("idieresis", '\u{00EF}', None, Some(149), Some(239)),
    ("igrave", '\u{00EC}', None, Some(147), Some(236)),
    ("j", 'j', Some(106), Some(106), Some(106)),
    ("k", 'k', Some(107), Some(107), Some(107)),
    ("l", 'l', Some(108), Some(108), Some(108)),
    ("less", '<', Some(60), Some(60), Some(60)),
    ("logicalnot", '\u{00AC}', None, Some(194), Some(172)),
    ("lslash", '\u{0142}', Some(248), None, None),
    ("m", 'm', Some(109), Some(109), Some(109)),
    ("macron", '\u{00AF}', Some(197), Some(248), Some(175)),
    ("minus", '\u{2212}', None, None, None),
    ("mu", '\u{00B5}', None, Some(181), Some(181)),
    ("multiply", '\u{00D7}', None, None, Some(215)),
    ("n", 'n', Some(110), Some(110), Some(110)),
    ("nbspace", '\u{00A0}', None, Some(202), Some(160)),
    ("nine", '9', Some(57), Some(57), Some(57)),
    ("ntilde", '\u{00F1}', None, Some(150), Some(241)),
    ("numbersign", '#', Some(35), Some(35), Some(35)),
    ("o", 'o', Some(111), Some(111), Some(111)),
    ("oacute", '\u{00F3}', None, Some(151), Some(243)),
    ("ocircumflex", '\u{00F4}', None, Some(153), Some(244)),
    ("odieresis", '\u{00F6}', None, Some(154), Some(246)),
    ("oe", '\u{0153}', Some(250), Some(207), Some(156)),
    ("ogonek", '\u{02DB}', Some(206), Some(254), None),
    ("ograve", '\u{00F2}', None, Some(152), Some(242)),
    ("one", '1', Some(49), Some(49), Some(49)),
    ("onehalf", '\u{00BD}', None, None, Some(189)),
    ("onequarter", '\u{00BC}', None, None, Some(188)),
    ("onesuperior", '\u{00B9}', None, None, Some(185)),
    ("ordfeminine", '\u{00AA}', Some(227), Some(187), Some(170)),
    ("ordmasculine", '\u{00BA}', Some(235), Some(188), Some(186)),
    ("oslash", '\u{00F8}', Some(249), Some(191), Some(248)),
    ("otilde", '\u{00F5}', None, Some(155), Some(245)),
    ("p", 'p', Some(112), Some(112), Some(112)),
    ("paragraph", '\u{00B6}', Some(182), Some(166), Some(182)),
    ("parenleft", '(', Some(40), Some(40), Some(40)),
    ("parenright", ')', Some(41), Some(41), Some(41)),
    ("percent", '%', Some(37), Some(37), Some(37)),
    ("period", '.', Some(46), Some(46), Some(46)),
    ("periodcentered", '\u{00B7}', Some(180), Some(225), Some(183)),
    ("perthousand", '\u{2030}', Some(189), Some(228), Some(137)),
    ("plus", '+', Some(43), Some(43), Some(43)),
    ("plusminus", '\u{00B1}', None, Some(177), Some(177)),
    ("q", 'q', Some(113), Some(113), Some(113)),
    ("question", '?', Some(63), Some(63), Some(63)),
    ("questiondown", '\u{00BF}', Some(191), Some(192), Some(191)),
    ("quotedbl", '"', Some(34), Some(34), Some(34)),
    ("quotedblbase", '\u{201E}', Some(185), Some(227), Some(132)),
    ("quotedblleft", '\u{201C}', Some(170), Some(210), Some(147)),
    ("quotedblright", '\u{201D}', Some(186), Some(211), Some(148)),
    ("quoteleft", '\u{2018}', Some(96), Some(212), Some(145)),
    ("quoteright", '\u{2019}', Some(39), Some(213), Some(146)),
    ("quotesinglbase", '\u{201A}', Some(184), Some(226), Some(130)),
    ("quotesingle", '\'', Some(169), Some(39), Some(39)),
    ("r", 'r', Some(114), Some(114), Some(114)),
    ("registered", '\u{00AE}', None, Some(168), Some(174)),
    ("ring", '\u{02DA}', Some(202), Some(251), None),
    ("s", 's', Some(115), Some(115), Some(115)),
    ("scaron", '\u{0161}', None, None, Some(154)),
    ("section", '\u{00A7}', Some(167), Some(164), Some(167)),
    ("semicolon", ';', Some(59), Some(59), Some(59)),
    ("seven", '7', Some(55), Some(55), Some(55)),
    ("six", '6', Some(54), Some(54), Some(54)),
    ("slash", '/', Some(47), Some(47), Some(47)),
    ("space", '\u{0020}', Some(32), Some(32), Some(32)),
    ("space", '\u{0020}', None, Some(202), Some(160)),
    ("space", '\u{0020}', None, Some(202), Some(173)),
    ("sterling", '\u{00A3}', Some(163), Some(163), Some(163)),
    ("t", 't', Some(116), Some(116), Some(116)),
    ("thorn", '\u{00FE}', None, None, Some(254)),
    ("three", '3', Some(51), Some(51), Some(51)),
    ("threequarters", '\u{00BE}', None, None, Some(190)),
    ("threesuperior", '\u{00B3}', None, None, Some(179)),
    ("tilde", '\u{02DC}', Some(196), Some(247), Some(152)),
    ("trademark", '\u{2122}', None, Some(170), Some(153)),
    ("two", '2', Some(50), Some(50), Some(50)),
    ("twosuperior", '\u{00B2}', None, None, Some(178)),
    ("u", 'u', Some(117), Some(117), Some(117)),
    ("uacute", '\u{00FA}', None, Some(156), Some(250)),
    ("ucircumflex", '\u{00FB}', None, Some(158), Some(251)),
    ("udieresis", '\u{00FC}', None, Some(159), Some(252)),
    ("ugrave", '\u{00F9}', None, Some(157), Some(249)),
    ("underscore", '_', Some(95), Some(95), Some(95)),
    ("v", 'v', Some(118), Some(118), Some(118)),
    ("w", 'w', Some(119), Some(119), Some(119)),
    ("x", 'x', Some(120), Some(120), Some(120)),
    ("y", 'y', Some(121), Some(121), Some(121)),
    ("yacute", '\u{00FD}', None, None, Some(253)),
    ("ydieresis", '\u{00FF}', None, Some(216), Some(255)),
    ("yen", '\u{00A5}', Some(165), Some(180), Some(165)),
    ("z", 'z', Some(122), Some(122), Some(122)),
    ("zcaron", '\u{017E}', None, None, Some(158)),
    ("zero", '0', Some(48), Some(48), Some(48)),
];

/// Names outside the Latin set that show up in embedded fonts.
static ADDITIONAL: &[(&str, char)] = &[
    ("minus", '\u{2212}'),
    ("ff", '\u{FB00}'),
    ("ffi", '\u{FB03}'),
    ("ffl", '\u{FB04}'),
    ("Delta", '\u{2206}'),
    ("Omega", '\u{2126}'),
    ("pi", '\u{03C0}'),
    ("infinity", '\u{221E}'),
    ("notequal", '\u{2260}'),
    ("lessequal", '\u{2264}'),
    ("greaterequal", '\u{2265}'),
    ("partialdiff", '\u{2202}'),
    ("summation", '\u{2211}'),
    ("product", '\u{220F}'),
    ("integral", '\u{222B}'),
    ("radical", '\u{221A}'),
    ("approxequal", '\u{2248}'),
    ("lozenge", '\u{25CA}'),
    ("apple", '\u{F8FF}'),
    ("arrowright", '\u{2192}'),
    ("arrowleft", '\u{2190}'),
    ("arrowup", '\u{2191}'),
    ("arrowdown", '\u{2193}'),
    ("checkmark", '\u{2713}'),
    ("afii61289", '\u{2113}'),
    ("nonbreakingspace", '\u{00A0}'),
    ("sfthyphen", '\u{00AD}'),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_encoding_names() {
        assert_eq!(StandardEncoding::Standard.glyph_name(65), Some("A"));
        assert_eq!(StandardEncoding::Standard.glyph_name(0xAE), Some("fi"));
        assert_eq!(StandardEncoding::WinAnsi.glyph_name(0xE9), Some("eacute"));
        assert_eq!(StandardEncoding::MacRoman.glyph_name(0x8E), Some("eacute"));
        assert_eq!(StandardEncoding::WinAnsi.glyph_name(0x20), Some("space"));
        assert_eq!(StandardEncoding::WinAnsi.glyph_name(0xA0), Some("space"));
        assert_eq!(StandardEncoding::Standard.glyph_name(0x01), None);
    }

    #[test]
    fn encoding_from_name() {
        assert_eq!(
            StandardEncoding::from_name("WinAnsiEncoding"),
            Some(StandardEncoding::WinAnsi)
        );
        assert_eq!(StandardEncoding::from_name("Identity-H"), None);
    }

    #[test]
    fn code_of_name() {
        assert_eq!(StandardEncoding::WinAnsi.code_of("Euro"), Some(128));
        assert_eq!(StandardEncoding::Standard.code_of("Euro"), None);
    }

    #[test]
    fn differences_override_base() {
        let enc = FontEncoding::new(Some(StandardEncoding::WinAnsi))
            .with_differences([(65u8, "Alpha".to_string())]);
        assert_eq!(enc.glyph_name(65), Some("Alpha"));
        assert_eq!(enc.glyph_name(66), Some("B"));
    }

    #[test]
    fn no_base_encoding_only_differences() {
        let enc = FontEncoding::new(None).with_differences([(1u8, "g1".to_string())]);
        assert_eq!(enc.glyph_name(1), Some("g1"));
        assert_eq!(enc.glyph_name(65), None);
    }

    #[test]
    fn glyph_list_basic_names() {
        let gl = GlyphList::new();
        assert_eq!(gl.to_unicode("A").as_deref(), Some("A"));
        assert_eq!(gl.to_unicode("space").as_deref(), Some(" "));
        assert_eq!(gl.to_unicode("eacute").as_deref(), Some("\u{e9}"));
        assert_eq!(gl.to_unicode("fi").as_deref(), Some("\u{fb01}"));
        assert_eq!(gl.to_unicode("minus").as_deref(), Some("\u{2212}"));
    }

    #[test]
    fn glyph_list_algorithmic_names() {
        let gl = GlyphList::new();
        assert_eq!(gl.to_unicode("uni0041").as_deref(), Some("A"));
        assert_eq!(gl.to_unicode("uni00410042").as_deref(), Some("AB"));
        assert_eq!(gl.to_unicode("u1F600").as_deref(), Some("\u{1F600}"));
        assert_eq!(gl.to_unicode("uniXYZ"), None);
        assert_eq!(gl.to_unicode("g17"), None);
    }

    #[test]
    fn glyph_list_suffixes_and_ligatures() {
        let gl = GlyphList::new();
        assert_eq!(gl.to_unicode("a.sc").as_deref(), Some("a"));
        assert_eq!(gl.to_unicode("f_i").as_deref(), Some("fi"));
        assert_eq!(gl.to_unicode(".notdef"), None);
    }

    #[test]
    fn reverse_lookup() {
        let gl = GlyphList::new();
        assert_eq!(gl.name_for('A'), Some("A"));
        assert_eq!(gl.name_for('\u{2212}'), Some("minus"));
        assert_eq!(gl.name_for('\u{4E00}'), None);
    }
}
