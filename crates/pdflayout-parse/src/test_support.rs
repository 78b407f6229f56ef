//! Fixture PDFs and font programs for unit tests.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// One page of a fixture document.
pub(crate) struct TestPage {
    pub content: Vec<u8>,
    pub resources: Dictionary,
    /// Extra page dictionary entries (`MediaBox`, `Rotate`, `CropBox`).
    pub entries: Dictionary,
}

impl TestPage {
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            resources: Dictionary::new(),
            entries: Dictionary::new(),
        }
    }

    pub fn with_resources(mut self, resources: Dictionary) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_entry(mut self, key: &str, value: impl Into<Object>) -> Self {
        self.entries.set(key, value);
        self
    }
}

/// Assemble `pages` under one `/Pages` node carrying `tree_entries`
/// (a 612x792 MediaBox unless overridden) and serialize the document.
pub(crate) fn save_pdf(mut doc: Document, pages: Vec<TestPage>, tree_entries: Dictionary) -> Vec<u8> {
    let pages_id: ObjectId = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let contents = doc.add_object(Stream::new(dictionary! {}, page.content));
        let mut dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => contents,
            "Resources" => page.resources,
        };
        for (key, value) in page.entries.iter() {
            dict.set(key.clone(), value.clone());
        }
        kids.push(doc.add_object(dict).into());
    }

    let count = kids.len() as i64;
    let mut tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    for (key, value) in tree_entries.iter() {
        tree.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(tree));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// A non-embedded Helvetica with explicit widths: 500 for every code
/// from 32 to 126.
pub(crate) fn helvetica_dict() -> Dictionary {
    let widths: Vec<Object> = (32..=126).map(|_| 500.into()).collect();
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "FirstChar" => 32,
        "LastChar" => 126,
        "Widths" => widths,
        "FontDescriptor" => dictionary! {
            "FontBBox" => vec![0.into(), (-200).into(), 1000.into(), 800.into()],
            "CapHeight" => 700,
        },
    }
}

/// A TrueType font dictionary embedding [`minimal_truetype`].
pub(crate) fn truetype_font_dict(doc: &mut Document, with_encoding: bool) -> Dictionary {
    let program = doc.add_object(Stream::new(dictionary! {}, minimal_truetype()));
    let widths: Vec<Object> = (32..=65)
        .map(|code| match code {
            32 => 250.into(),
            65 => 600.into(),
            _ => 0.into(),
        })
        .collect();
    let mut dict = dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => "Mini",
        "FirstChar" => 32,
        "LastChar" => 65,
        "Widths" => widths,
        "FontDescriptor" => dictionary! {
            "FontBBox" => vec![0.into(), (-200).into(), 1000.into(), 800.into()],
            "CapHeight" => 700,
            "FontFile2" => program,
        },
    };
    if with_encoding {
        dict.set("Encoding", "WinAnsiEncoding");
    }
    dict
}

/// A three-glyph TrueType program at 2000 units per em.
///
/// Glyph 1 (`A`, code 65) is a triangle bounded by (100, 0)-(500, 700);
/// glyph 2 (`space`, code 32) has no contours. Codes are mapped by a
/// Macintosh format 0 `cmap`, names by a format 2 `post` table.
pub(crate) fn minimal_truetype() -> Vec<u8> {
    let mut glyph = Vec::new();
    push_i16(&mut glyph, 1); // contours
    for v in [100, 0, 500, 700] {
        push_i16(&mut glyph, v);
    }
    push_u16(&mut glyph, 2); // last point of contour 0
    push_u16(&mut glyph, 0); // instructions
    glyph.extend_from_slice(&[0x01, 0x01, 0x01]);
    for dx in [100, 400, -200] {
        push_i16(&mut glyph, dx);
    }
    for dy in [0, 0, 700] {
        push_i16(&mut glyph, dy);
    }
    pad4(&mut glyph);
    let glyph_len = glyph.len() as u32;

    let mut loca = Vec::new();
    for offset in [0, 0, glyph_len, glyph_len] {
        push_u32(&mut loca, offset);
    }

    let mut cmap = Vec::new();
    push_u16(&mut cmap, 0); // version
    push_u16(&mut cmap, 1); // subtables
    push_u16(&mut cmap, 1); // Macintosh
    push_u16(&mut cmap, 0); // Roman
    push_u32(&mut cmap, 12);
    push_u16(&mut cmap, 0); // format
    push_u16(&mut cmap, 262);
    push_u16(&mut cmap, 0); // language
    let mut ids = [0u8; 256];
    ids[32] = 2;
    ids[65] = 1;
    cmap.extend_from_slice(&ids);

    let mut head = Vec::new();
    push_u32(&mut head, 0x0001_0000);
    push_u32(&mut head, 0x0001_0000); // revision
    push_u32(&mut head, 0); // checksum adjustment
    push_u32(&mut head, 0x5F0F_3CF5);
    push_u16(&mut head, 0); // flags
    push_u16(&mut head, 2000); // units per em
    head.extend_from_slice(&[0; 16]); // created, modified
    for v in [0, 0, 500, 700] {
        push_i16(&mut head, v);
    }
    push_u16(&mut head, 0); // mac style
    push_u16(&mut head, 8); // lowest ppem
    push_i16(&mut head, 2); // direction hint
    push_i16(&mut head, 1); // long loca
    push_i16(&mut head, 0); // glyph data format

    let mut hhea = Vec::new();
    push_u32(&mut hhea, 0x0001_0000);
    push_i16(&mut hhea, 1600); // ascender
    push_i16(&mut hhea, -400); // descender
    push_i16(&mut hhea, 0); // line gap
    push_u16(&mut hhea, 1200); // advance max
    for _ in 0..11 {
        push_i16(&mut hhea, 0);
    }
    push_u16(&mut hhea, 1); // horizontal metrics

    let mut hmtx = Vec::new();
    push_u16(&mut hmtx, 1200);
    for lsb in [0, 100, 0] {
        push_i16(&mut hmtx, lsb);
    }

    let mut maxp = Vec::new();
    push_u32(&mut maxp, 0x0000_5000);
    push_u16(&mut maxp, 3);

    let mut post = Vec::new();
    push_u32(&mut post, 0x0002_0000);
    post.extend_from_slice(&[0; 28]);
    push_u16(&mut post, 3);
    for index in [0, 36, 3] {
        push_u16(&mut post, index); // .notdef, A, space
    }

    let tables: [(&[u8; 4], Vec<u8>); 8] = [
        (b"cmap", cmap),
        (b"glyf", glyph),
        (b"head", head),
        (b"hhea", hhea),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp),
        (b"post", post),
    ];

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000);
    push_u16(&mut font, tables.len() as u16);
    push_u16(&mut font, 128); // search range
    push_u16(&mut font, 3); // entry selector
    push_u16(&mut font, 0); // range shift
    let mut offset = 12 + 16 * tables.len() as u32;
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        push_u32(&mut font, 0); // checksum
        push_u32(&mut font, offset);
        push_u32(&mut font, data.len() as u32);
        body.extend_from_slice(data);
        pad4(&mut body);
        offset = 12 + 16 * tables.len() as u32 + body.len() as u32;
    }
    font.extend_from_slice(&body);
    font
}

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn pad4(buf: &mut Vec<u8>) {
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}
