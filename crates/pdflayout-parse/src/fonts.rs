//! Font resources resolved from lopdf dictionaries.
//!
//! [`LopdfFont`] answers the core [`FontQuery`] for simple fonts (Type1,
//! TrueType, MMType1), composite Type0 fonts with a CID descendant, and
//! Type3 fonts. Outline bounds come from embedded sfnt programs parsed with
//! `ttf-parser`; Type3 glyph boxes come from the `d1` operator of each
//! character procedure.

use std::collections::HashMap;

use lopdf::{Dictionary, Document, Object, dictionary};
use pdflayout_core::{
    DEFAULT_FONT_MATRIX, EncodedOutlines, FontEncoding, FontQuery, GlyphList, GlyphProgram,
    LayoutError, Matrix, ProceduralGlyphs, Rect, ScalableOutlines, StandardEncoding,
};
use tracing::debug;
use ttf_parser::{Face, GlyphId, PlatformId};

use crate::cmap::ToUnicodeCMap;
use crate::error::BackendError;
use crate::objects::{
    decode_stream, get_dict, get_name, get_number, get_object, get_stream, number_array,
    object_to_f64, rect_from_object, resolve,
};
use crate::standard_fonts::{self, StandardFont};
use crate::tokenizer::tokenize;

/// Default `/DW` of CID fonts.
const DEFAULT_CID_WIDTH: f64 = 1000.0;

/// Font family, as far as code width and outline lookup are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    /// One-byte codes through an encoding (Type1, TrueType, MMType1).
    Simple,
    /// One-byte codes, glyphs are content streams.
    Type3,
    /// Two-byte codes selecting CIDs of a descendant font.
    Composite,
}

#[derive(Debug, Clone, PartialEq)]
enum CidToGid {
    Identity,
    Table(Vec<u16>),
}

impl CidToGid {
    fn gid(&self, cid: u32) -> Option<u16> {
        match self {
            CidToGid::Identity => u16::try_from(cid).ok(),
            CidToGid::Table(table) => table.get(cid as usize).copied(),
        }
    }
}

/// Entries of a `/FontDescriptor`.
#[derive(Default)]
struct Descriptor {
    bbox: Option<Rect>,
    cap_height: Option<f64>,
    avg_width: Option<f64>,
    missing_width: Option<f64>,
    sfnt: Option<Vec<u8>>,
}

impl Descriptor {
    fn read(doc: &Document, font: &Dictionary) -> Self {
        let Some(fd) = get_dict(doc, font, b"FontDescriptor") else {
            return Self::default();
        };
        Self {
            bbox: get_object(doc, fd, b"FontBBox").and_then(|obj| rect_from_object(doc, obj)),
            cap_height: get_number(doc, fd, b"CapHeight"),
            avg_width: get_number(doc, fd, b"AvgWidth"),
            missing_width: get_number(doc, fd, b"MissingWidth"),
            sfnt: embedded_sfnt(doc, fd),
        }
    }
}

/// Embedded TrueType (`/FontFile2`) or OpenType (`/FontFile3` with
/// `/Subtype /OpenType`) program bytes.
///
/// Bare CFF and Type1 programs are not returned: their outlines are not
/// available to the resolver.
fn embedded_sfnt(doc: &Document, fd: &Dictionary) -> Option<Vec<u8>> {
    let stream = match get_stream(doc, fd, b"FontFile2") {
        Some(stream) => stream,
        None => {
            let stream = get_stream(doc, fd, b"FontFile3")?;
            if get_name(doc, &stream.dict, b"Subtype").as_deref() != Some("OpenType") {
                return None;
            }
            stream
        }
    };
    match decode_stream(stream) {
        Ok(data) if Face::parse(&data, 0).is_ok() => Some(data),
        Ok(_) => {
            debug!("embedded font program is not a parseable sfnt");
            None
        }
        Err(err) => {
            debug!(%err, "embedded font program could not be decoded");
            None
        }
    }
}

/// A font resource resolved for metric and outline queries.
pub struct LopdfFont {
    name: String,
    kind: FontKind,
    first_char: u32,
    widths: Vec<f64>,
    cid_widths: HashMap<u32, f64>,
    /// `/MissingWidth` for simple fonts, `/DW` for composite fonts.
    default_width: f64,
    standard: Option<&'static StandardFont>,
    bbox: Rect,
    cap_height: f64,
    avg_width: f64,
    font_matrix: Matrix,
    encoding: FontEncoding,
    /// Whether `/Encoding` was given explicitly.
    has_encoding: bool,
    to_unicode: Option<ToUnicodeCMap>,
    cid_to_gid: CidToGid,
    sfnt: Option<Vec<u8>>,
    /// Type3 procedure name to its `d1` box (`None` for `d0`).
    procedures: HashMap<String, Option<Rect>>,
}

impl std::fmt::Debug for LopdfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfFont")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("embedded", &self.sfnt.is_some())
            .finish_non_exhaustive()
    }
}

impl LopdfFont {
    /// Resolve a font dictionary.
    ///
    /// `resource_name` is used as the font name when `/BaseFont` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Font`] when a Type0 font has no descendant.
    pub fn load(doc: &Document, dict: &Dictionary, resource_name: &str) -> Result<Self, BackendError> {
        let subtype = get_name(doc, dict, b"Subtype").unwrap_or_default();
        let name = get_name(doc, dict, b"BaseFont").unwrap_or_else(|| resource_name.to_string());
        let to_unicode = load_to_unicode(doc, dict, &name);

        let mut font = match subtype.as_str() {
            "Type0" => Self::load_composite(doc, dict, name)?,
            "Type3" => Self::load_type3(doc, dict, name),
            _ => Self::load_simple(doc, dict, name),
        };
        font.to_unicode = to_unicode;
        debug!(
            font = %font.name,
            kind = ?font.kind,
            program = font.glyph_program().kind(),
            "font loaded"
        );
        Ok(font)
    }

    /// A non-embedded standard font standing in for an unresolvable one.
    pub fn substitute(doc: &Document, base_font: &str) -> Self {
        let dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base_font,
        };
        Self::load_simple(doc, &dict, base_font.to_string())
    }

    fn empty(name: String, kind: FontKind) -> Self {
        Self {
            name,
            kind,
            first_char: 0,
            widths: Vec::new(),
            cid_widths: HashMap::new(),
            default_width: 0.0,
            standard: None,
            bbox: Rect::new(0.0, 0.0, 0.0, 0.0),
            cap_height: 0.0,
            avg_width: 0.0,
            font_matrix: DEFAULT_FONT_MATRIX,
            encoding: FontEncoding::default(),
            has_encoding: false,
            to_unicode: None,
            cid_to_gid: CidToGid::Identity,
            sfnt: None,
            procedures: HashMap::new(),
        }
    }

    fn load_simple(doc: &Document, dict: &Dictionary, name: String) -> Self {
        let mut font = Self::empty(name, FontKind::Simple);
        font.read_simple_widths(doc, dict);
        let (encoding, explicit) = read_encoding(doc, dict, Some(StandardEncoding::Standard));
        font.encoding = encoding;
        font.has_encoding = explicit;

        if font.widths.is_empty() {
            font.standard = standard_fonts::lookup(&font.name);
        }
        let descriptor = Descriptor::read(doc, dict);
        font.apply_descriptor(&descriptor);
        font.default_width = descriptor.missing_width.unwrap_or(0.0);
        font.sfnt = descriptor.sfnt;
        font
    }

    fn load_type3(doc: &Document, dict: &Dictionary, name: String) -> Self {
        let mut font = Self::empty(name, FontKind::Type3);
        font.read_simple_widths(doc, dict);
        let (encoding, explicit) = read_encoding(doc, dict, None);
        font.encoding = encoding;
        font.has_encoding = explicit;

        if let Some(values) = get_object(doc, dict, b"FontMatrix").and_then(|obj| number_array(doc, obj)) {
            if let [a, b, c, d, e, f] = values.as_slice() {
                font.font_matrix = Matrix::new(*a, *b, *c, *d, *e, *f);
            }
        }
        if let Some(bbox) = get_object(doc, dict, b"FontBBox").and_then(|obj| rect_from_object(doc, obj)) {
            font.bbox = bbox;
        }
        let descriptor = Descriptor::read(doc, dict);
        font.cap_height = descriptor.cap_height.unwrap_or(0.0);
        font.avg_width = descriptor.avg_width.unwrap_or(0.0);
        font.default_width = descriptor.missing_width.unwrap_or(0.0);

        if let Some(procs) = get_dict(doc, dict, b"CharProcs") {
            for (key, value) in procs.iter() {
                let proc_name = String::from_utf8_lossy(key).into_owned();
                let bbox = resolve(doc, value)
                    .as_stream()
                    .ok()
                    .and_then(|stream| procedure_bbox(&proc_name, &decode_stream(stream).ok()?));
                font.procedures.insert(proc_name, bbox);
            }
        }
        font
    }

    fn load_composite(doc: &Document, dict: &Dictionary, name: String) -> Result<Self, BackendError> {
        let mut font = Self::empty(name, FontKind::Composite);
        let descendant = get_object(doc, dict, b"DescendantFonts")
            .and_then(|obj| obj.as_array().ok())
            .and_then(|arr| arr.first())
            .and_then(|obj| resolve(doc, obj).as_dict().ok())
            .ok_or_else(|| BackendError::Font(format!("{}: Type0 font without descendant", font.name)))?;

        match get_name(doc, dict, b"Encoding").as_deref() {
            Some("Identity-H") | Some("Identity-V") => {}
            other => debug!(
                font = %font.name,
                encoding = other.unwrap_or("<stream>"),
                "non-identity CMap read as two-byte codes"
            ),
        }

        font.default_width = get_number(doc, descendant, b"DW").unwrap_or(DEFAULT_CID_WIDTH);
        if let Some(w) = get_object(doc, descendant, b"W").and_then(|obj| obj.as_array().ok()) {
            font.cid_widths = parse_cid_widths(doc, w);
        }
        if let Some(stream) = get_stream(doc, descendant, b"CIDToGIDMap") {
            match decode_stream(stream) {
                Ok(data) => {
                    font.cid_to_gid = CidToGid::Table(
                        data.chunks_exact(2)
                            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                            .collect(),
                    );
                }
                Err(err) => debug!(font = %font.name, %err, "unreadable CIDToGIDMap, using identity"),
            }
        }
        let descriptor = Descriptor::read(doc, descendant);
        font.apply_descriptor(&descriptor);
        font.sfnt = descriptor.sfnt;
        Ok(font)
    }

    fn read_simple_widths(&mut self, doc: &Document, dict: &Dictionary) {
        self.first_char = get_number(doc, dict, b"FirstChar")
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(0);
        if let Some(widths) = get_object(doc, dict, b"Widths").and_then(|obj| number_array(doc, obj)) {
            self.widths = widths;
        }
    }

    fn apply_descriptor(&mut self, descriptor: &Descriptor) {
        let standard = self.standard;
        self.bbox = descriptor
            .bbox
            .or_else(|| {
                standard.map(|s| {
                    let [llx, lly, urx, ury] = s.font_bbox;
                    Rect::new(llx.into(), lly.into(), urx.into(), ury.into())
                })
            })
            .unwrap_or(self.bbox);
        self.cap_height = descriptor
            .cap_height
            .or_else(|| standard.map(|s| f64::from(s.cap_height)))
            .unwrap_or(0.0);
        self.avg_width = descriptor.avg_width.unwrap_or(0.0);
    }

    pub fn kind(&self) -> FontKind {
        self.kind
    }

    /// Bytes per character code in shown strings.
    pub fn code_length(&self) -> usize {
        match self.kind {
            FontKind::Composite => 2,
            FontKind::Simple | FontKind::Type3 => 1,
        }
    }

    /// Split a shown string into character codes.
    pub fn decode_codes(&self, bytes: &[u8]) -> Vec<u32> {
        match self.code_length() {
            2 => bytes
                .chunks(2)
                .map(|pair| match pair {
                    [hi, lo] => (u32::from(*hi) << 8) | u32::from(*lo),
                    [single] => u32::from(*single),
                    _ => 0,
                })
                .collect(),
            _ => bytes.iter().map(|b| u32::from(*b)).collect(),
        }
    }

    /// Width of `code` when the font states one.
    fn width_of(&self, code: u32) -> Option<f64> {
        match self.kind {
            FontKind::Composite => Some(self.cid_widths.get(&code).copied().unwrap_or(self.default_width)),
            FontKind::Simple | FontKind::Type3 => {
                if !self.widths.is_empty() {
                    return code
                        .checked_sub(self.first_char)
                        .and_then(|i| self.widths.get(i as usize))
                        .copied();
                }
                let standard = self.standard?;
                let name = self.encoding.glyph_name(u8::try_from(code).ok()?)?;
                standard.width(name).map(f64::from)
            }
        }
    }

    fn face(&self) -> Option<Face<'_>> {
        let data = self.sfnt.as_deref()?;
        Face::parse(data, 0).ok()
    }
}

impl FontQuery for LopdfFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance_width(&self, code: u32) -> f64 {
        self.width_of(code).unwrap_or(self.default_width)
    }

    fn bounding_box(&self) -> Rect {
        self.bbox
    }

    fn cap_height(&self) -> f64 {
        self.cap_height
    }

    fn font_matrix(&self) -> Matrix {
        self.font_matrix
    }

    fn space_width(&self) -> Result<f64, LayoutError> {
        let code = match (&self.to_unicode, self.kind) {
            (Some(cmap), _) if cmap.code_for(" ").is_some() => cmap.code_for(" "),
            (_, FontKind::Composite) => None,
            _ => Some(32),
        };
        code.and_then(|code| self.width_of(code))
            .ok_or_else(|| LayoutError::FontError(format!("{}: no width for the space glyph", self.name)))
    }

    fn average_width(&self) -> f64 {
        if self.avg_width > 0.0 {
            return self.avg_width;
        }
        let nonzero: Vec<f64> = match self.kind {
            FontKind::Composite => self.cid_widths.values().copied().filter(|w| *w > 0.0).collect(),
            _ if !self.widths.is_empty() => self.widths.iter().copied().filter(|w| *w > 0.0).collect(),
            _ => return self.standard.map(StandardFont::average_width).unwrap_or(0.0),
        };
        if nonzero.is_empty() {
            0.0
        } else {
            nonzero.iter().sum::<f64>() / nonzero.len() as f64
        }
    }

    fn to_unicode(&self, code: u32, glyph_list: &GlyphList) -> Option<String> {
        if let Some(text) = self.to_unicode.as_ref().and_then(|cmap| cmap.lookup(code)) {
            return Some(text.to_string());
        }
        if self.kind == FontKind::Composite {
            return None;
        }
        let name = self.encoding.glyph_name(u8::try_from(code).ok()?)?;
        glyph_list.to_unicode(name)
    }

    fn glyph_program(&self) -> GlyphProgram<'_> {
        match (self.kind, &self.sfnt) {
            (FontKind::Type3, _) => GlyphProgram::Procedural(self),
            (_, None) => GlyphProgram::Unsupported,
            (FontKind::Simple, Some(_)) if self.has_encoding => GlyphProgram::Encoded(self),
            (_, Some(_)) => GlyphProgram::Scalable(self),
        }
    }
}

impl ProceduralGlyphs for LopdfFont {
    fn glyph_bbox(&self, code: u32) -> Option<Rect> {
        let name = self.encoding.glyph_name(u8::try_from(code).ok()?)?;
        self.procedures.get(name).copied().flatten()
    }
}

impl ScalableOutlines for LopdfFont {
    fn outline_bounds(&self, code: u32) -> Option<Rect> {
        let face = self.face()?;
        let gid = match self.kind {
            FontKind::Composite => self.cid_to_gid.gid(code)?,
            _ => symbolic_glyph_index(&face, code)?,
        };
        glyph_bounds(&face, GlyphId(gid))
    }

    fn units_per_em(&self) -> Option<f64> {
        self.face().map(|face| f64::from(face.units_per_em()))
    }
}

impl EncodedOutlines for LopdfFont {
    fn glyph_name(&self, code: u32) -> Option<String> {
        self.encoding
            .glyph_name(u8::try_from(code).ok()?)
            .map(str::to_string)
    }

    fn outline_bounds_by_name(&self, name: &str) -> Option<Rect> {
        let face = self.face()?;
        let gid = face.glyph_index_by_name(name).or_else(|| {
            let text = GlyphList::new().to_unicode(name)?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => face.glyph_index(c),
                _ => None,
            }
        })?;
        let bounds = glyph_bounds(&face, gid)?;
        let k = 1000.0 / f64::from(face.units_per_em());
        Some(Rect::new(bounds.llx * k, bounds.lly * k, bounds.urx * k, bounds.ury * k))
    }
}

/// Glyph lookup for fonts without an encoding: the (3,0) symbol subtable
/// at `0xF000 + code`, then any Macintosh subtable at `code`.
fn symbolic_glyph_index(face: &Face<'_>, code: u32) -> Option<u16> {
    let subtables = face.tables().cmap?.subtables;
    let mut found = None;
    for subtable in subtables {
        let gid = match (subtable.platform_id, subtable.encoding_id) {
            (PlatformId::Windows, 0) => subtable
                .glyph_index(0xF000 + code)
                .or_else(|| subtable.glyph_index(code)),
            (PlatformId::Macintosh, _) => subtable.glyph_index(code),
            _ => None,
        };
        if gid.is_some() {
            found = gid;
            break;
        }
    }
    found
        .or_else(|| char::from_u32(code).and_then(|c| face.glyph_index(c)))
        .map(|gid| gid.0)
}

/// Outline bounds in design units.
///
/// A valid glyph without contours (a space) has an empty box at the origin;
/// `.notdef` and out-of-range ids have none.
fn glyph_bounds(face: &Face<'_>, gid: GlyphId) -> Option<Rect> {
    if gid.0 == 0 || gid.0 >= face.number_of_glyphs() {
        return None;
    }
    let rect = face
        .glyph_bounding_box(gid)
        .map(|r| Rect::new(r.x_min.into(), r.y_min.into(), r.x_max.into(), r.y_max.into()))
        .unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0));
    Some(rect)
}

fn load_to_unicode(doc: &Document, dict: &Dictionary, font_name: &str) -> Option<ToUnicodeCMap> {
    let stream = get_stream(doc, dict, b"ToUnicode")?;
    let parsed = decode_stream(stream).and_then(|data| ToUnicodeCMap::parse(&data));
    match parsed {
        Ok(cmap) => Some(cmap),
        Err(err) => {
            debug!(font = font_name, %err, "ignoring unreadable ToUnicode CMap");
            None
        }
    }
}

/// Read `/Encoding`; `default_base` applies when no base encoding is named.
///
/// Returns the encoding and whether `/Encoding` was present at all.
fn read_encoding(
    doc: &Document,
    dict: &Dictionary,
    default_base: Option<StandardEncoding>,
) -> (FontEncoding, bool) {
    match get_object(doc, dict, b"Encoding") {
        Some(Object::Name(name)) => {
            let base = StandardEncoding::from_name(&String::from_utf8_lossy(name)).or(default_base);
            (FontEncoding::new(base), true)
        }
        Some(Object::Dictionary(enc)) => {
            let base = get_name(doc, enc, b"BaseEncoding")
                .and_then(|name| StandardEncoding::from_name(&name))
                .or(default_base);
            let differences = get_object(doc, enc, b"Differences")
                .and_then(|obj| obj.as_array().ok())
                .map(|arr| parse_differences(doc, arr))
                .unwrap_or_default();
            (FontEncoding::new(base).with_differences(differences), true)
        }
        _ => (FontEncoding::new(default_base), false),
    }
}

/// `[code name name ... code name ...]`.
fn parse_differences(doc: &Document, arr: &[Object]) -> Vec<(u8, String)> {
    let mut out = Vec::new();
    let mut code: u32 = 0;
    for item in arr {
        match resolve(doc, item) {
            Object::Integer(i) => code = (*i).clamp(0, 255) as u32,
            Object::Name(name) => {
                if let Ok(byte) = u8::try_from(code) {
                    out.push((byte, String::from_utf8_lossy(name).into_owned()));
                }
                code += 1;
            }
            _ => {}
        }
    }
    out
}

/// `/W` array: `c [w1 w2 ...]` and `c_first c_last w` entries.
fn parse_cid_widths(doc: &Document, arr: &[Object]) -> HashMap<u32, f64> {
    let mut widths = HashMap::new();
    let mut i = 0;
    while i < arr.len() {
        let Ok(first) = object_to_f64(resolve(doc, &arr[i])) else {
            break;
        };
        let first = first.max(0.0) as u32;
        match arr.get(i + 1).map(|obj| resolve(doc, obj)) {
            Some(Object::Array(list)) => {
                for (offset, w) in list.iter().enumerate() {
                    // CIDs past u32::MAX cannot be shown; skip them.
                    let Some(cid) = u32::try_from(offset)
                        .ok()
                        .and_then(|offset| first.checked_add(offset))
                    else {
                        break;
                    };
                    if let Ok(w) = object_to_f64(resolve(doc, w)) {
                        widths.insert(cid, w);
                    }
                }
                i += 2;
            }
            Some(last) => {
                let (Ok(last), Some(Ok(w))) = (
                    object_to_f64(last),
                    arr.get(i + 2).map(|obj| object_to_f64(resolve(doc, obj))),
                ) else {
                    break;
                };
                let last = last.max(0.0) as u32;
                if last >= first && last.saturating_sub(first) <= 0xFFFF {
                    for cid in first..=last {
                        widths.insert(cid, w);
                    }
                }
                i += 3;
            }
            None => break,
        }
    }
    widths
}

/// Bounding box declared by a Type3 procedure: the last four operands of
/// `d1`. `d0` declares none.
fn procedure_bbox(name: &str, content: &[u8]) -> Option<Rect> {
    let ops = match tokenize(content) {
        Ok(ops) => ops,
        Err(err) => {
            debug!(procedure = name, %err, "unreadable Type3 procedure");
            return None;
        }
    };
    let op = ops.iter().find(|op| op.operator == "d0" || op.operator == "d1")?;
    if op.operator == "d0" {
        return None;
    }
    let [_, _, llx, lly, urx, ury] = op.numbers::<6>()?;
    Some(Rect::new(llx, lly, urx, ury))
}
