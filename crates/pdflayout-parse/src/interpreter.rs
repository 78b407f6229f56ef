//! Content stream interpreter.
//!
//! Replays tokenized content stream operators, maintaining the graphics and
//! text state, and reports rendering events to a [`ContentConsumer`].
//! Form XObjects are expanded recursively through the `Do` operator under
//! the invoking graphics state.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdflayout_core::{
    ContentConsumer, ExtractWarning, ExtractWarningCode, FontQuery, GlyphEvent, ImageDraw, Matrix,
    Point, ReplayMode,
};
use tracing::debug;

use crate::error::BackendError;
use crate::fonts::LopdfFont;
use crate::objects::{decode_stream, get_dict, get_name, get_object, number_array};
use crate::text_state::{TextParams, TextState};
use crate::tokenizer::{Operand, Operation, tokenize};

/// Font used when a `Tf` name cannot be resolved.
const FALLBACK_FONT: &str = "Helvetica";

/// Graphics state saved by `q` and restored by `Q`.
#[derive(Debug, Clone)]
struct SavedState {
    ctm: Matrix,
    text: TextParams,
}

/// Replays the content of one page.
///
/// Image identifiers count every image draw (XObject or inline) in
/// pre-order over the form-expanded operator sequence. The counter does
/// not depend on the [`ReplayMode`], so both replays of a page agree.
pub struct ContentInterpreter<'d> {
    doc: &'d Document,
    mode: ReplayMode,
    max_form_depth: usize,
    ctm: Matrix,
    stack: Vec<SavedState>,
    text: TextState,
    current_point: Option<Point>,
    subpath_start: Option<Point>,
    next_image_id: usize,
    fonts: HashMap<ObjectId, Rc<LopdfFont>>,
    fallback_font: Option<Rc<LopdfFont>>,
    reported_fonts: HashSet<String>,
}

impl<'d> ContentInterpreter<'d> {
    /// Start a replay with `initial_ctm` (normally the identity).
    pub fn new(doc: &'d Document, mode: ReplayMode, max_form_depth: usize, initial_ctm: Matrix) -> Self {
        Self {
            doc,
            mode,
            max_form_depth,
            ctm: initial_ctm,
            stack: Vec::new(),
            text: TextState::new(),
            current_point: None,
            subpath_start: None,
            next_image_id: 0,
            fonts: HashMap::new(),
            fallback_font: None,
            reported_fonts: HashSet::new(),
        }
    }

    /// Number of image draws seen so far.
    pub fn image_count(&self) -> usize {
        self.next_image_id
    }

    /// Interpret one content stream.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Interpreter`] when the stream cannot be lexed
    /// or form XObjects nest deeper than the configured limit.
    pub fn run(
        &mut self,
        content: &[u8],
        resources: &Dictionary,
        consumer: &mut dyn ContentConsumer,
        depth: usize,
    ) -> Result<(), BackendError> {
        if depth > self.max_form_depth {
            return Err(BackendError::Interpreter(format!(
                "form XObject nesting depth {depth} exceeds limit {}",
                self.max_form_depth
            )));
        }
        for op in tokenize(content)? {
            self.execute(&op, resources, consumer, depth)?;
        }
        Ok(())
    }

    fn execute(
        &mut self,
        op: &Operation,
        resources: &Dictionary,
        consumer: &mut dyn ContentConsumer,
        depth: usize,
    ) -> Result<(), BackendError> {
        match op.operator.as_str() {
            // --- Graphics state ---
            "q" => self.save(),
            "Q" => self.restore(),
            "cm" => {
                if let Some([a, b, c, d, e, f]) = op.numbers::<6>() {
                    self.ctm = Matrix::new(a, b, c, d, e, f).concat(&self.ctm);
                }
            }

            // --- XObjects and inline images ---
            "Do" => {
                if let Some(name) = op.operands.first().and_then(Operand::as_name) {
                    self.handle_do(name, resources, consumer, depth)?;
                }
            }
            "BI" => {
                let id = self.take_image_id();
                consumer.show_image(&ImageDraw {
                    id,
                    ctm: self.ctm,
                    name: None,
                });
            }

            _ if self.mode == ReplayMode::ImagesOnly => {}

            // --- Text state ---
            "BT" => self.text.begin_text(),
            "ET" => self.text.end_text(),
            "Tf" => {
                if let (Some(name), Some(size)) =
                    (op.operands.first().and_then(Operand::as_name), op.number(1))
                {
                    self.text.params.font = Some(name.to_string());
                    self.text.params.font_size = size;
                }
            }
            "Tc" => set_number(op, &mut self.text.params.char_spacing),
            "Tw" => set_number(op, &mut self.text.params.word_spacing),
            "Tz" => set_number(op, &mut self.text.params.h_scaling),
            "TL" => set_number(op, &mut self.text.params.leading),
            "Ts" => set_number(op, &mut self.text.params.rise),
            "Tr" => {
                if let Some(mode) = op.number(0) {
                    self.text.params.render_mode = mode as i64;
                }
            }
            "Td" => {
                if let Some([tx, ty]) = op.numbers::<2>() {
                    self.text.move_text_position(tx, ty);
                }
            }
            "TD" => {
                if let Some([tx, ty]) = op.numbers::<2>() {
                    self.text.move_text_position_and_set_leading(tx, ty);
                }
            }
            "Tm" => {
                if let Some([a, b, c, d, e, f]) = op.numbers::<6>() {
                    self.text.set_text_matrix(Matrix::new(a, b, c, d, e, f));
                }
            }
            "T*" => self.text.move_to_next_line(),

            // --- Text showing ---
            "Tj" => {
                if let Some(bytes) = op.operands.first().and_then(Operand::as_bytes) {
                    self.show_text(bytes, resources, consumer);
                }
            }
            "'" => {
                self.text.move_to_next_line();
                if let Some(bytes) = op.operands.first().and_then(Operand::as_bytes) {
                    self.show_text(bytes, resources, consumer);
                }
            }
            "\"" => {
                if let (Some(aw), Some(ac)) = (op.number(0), op.number(1)) {
                    self.text.params.word_spacing = aw;
                    self.text.params.char_spacing = ac;
                }
                self.text.move_to_next_line();
                if let Some(bytes) = op.operands.get(2).and_then(Operand::as_bytes) {
                    self.show_text(bytes, resources, consumer);
                }
            }
            "TJ" => {
                if let Some(Operand::Array(items)) = op.operands.first() {
                    for item in items {
                        match item {
                            Operand::String(bytes) => self.show_text(bytes, resources, consumer),
                            other => {
                                if let Some(adjustment) = other.as_f64() {
                                    let tx = self.text.adjustment_displacement(adjustment);
                                    self.text.advance(tx);
                                }
                            }
                        }
                    }
                }
            }

            // --- Path construction ---
            "m" => {
                if let Some([x, y]) = op.numbers::<2>() {
                    let p = self.device(x, y);
                    self.current_point = Some(p);
                    self.subpath_start = Some(p);
                    consumer.move_to(p);
                }
            }
            "l" => {
                if let Some([x, y]) = op.numbers::<2>() {
                    let p = self.device(x, y);
                    self.current_point = Some(p);
                    consumer.line_to(p);
                }
            }
            "c" => {
                if let Some([x1, y1, x2, y2, x3, y3]) = op.numbers::<6>() {
                    let (p1, p2, p3) = (self.device(x1, y1), self.device(x2, y2), self.device(x3, y3));
                    self.current_point = Some(p3);
                    consumer.curve_to(p1, p2, p3);
                }
            }
            "v" => {
                if let Some([x2, y2, x3, y3]) = op.numbers::<4>() {
                    let (p2, p3) = (self.device(x2, y2), self.device(x3, y3));
                    let p1 = self.current_point.unwrap_or(p2);
                    self.current_point = Some(p3);
                    consumer.curve_to(p1, p2, p3);
                }
            }
            "y" => {
                if let Some([x1, y1, x3, y3]) = op.numbers::<4>() {
                    let (p1, p3) = (self.device(x1, y1), self.device(x3, y3));
                    self.current_point = Some(p3);
                    consumer.curve_to(p1, p3, p3);
                }
            }
            "re" => {
                if let Some([x, y, w, h]) = op.numbers::<4>() {
                    let corners = [
                        self.device(x, y),
                        self.device(x + w, y),
                        self.device(x + w, y + h),
                        self.device(x, y + h),
                    ];
                    self.current_point = Some(corners[0]);
                    self.subpath_start = Some(corners[0]);
                    consumer.append_rectangle(corners);
                }
            }
            "h" => self.close(consumer),

            // --- Painting ---
            "S" => self.paint(consumer, false, |c| c.stroke_path()),
            "s" => self.paint(consumer, true, |c| c.stroke_path()),
            "f" | "F" | "f*" => self.paint(consumer, false, |c| c.fill_path()),
            "B" | "B*" => self.paint(consumer, false, |c| c.fill_and_stroke_path()),
            "b" | "b*" => self.paint(consumer, true, |c| c.fill_and_stroke_path()),
            "n" => self.paint(consumer, false, |c| c.end_path()),
            "W" | "W*" => consumer.clip(),
            "sh" => {
                if let Some(name) = op.operands.first().and_then(Operand::as_name) {
                    consumer.shading_fill(name);
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(SavedState {
            ctm: self.ctm,
            text: self.text.params.clone(),
        });
    }

    fn restore(&mut self) {
        // unbalanced Q is ignored
        if let Some(saved) = self.stack.pop() {
            self.ctm = saved.ctm;
            self.text.params = saved.text;
        }
    }

    fn device(&self, x: f64, y: f64) -> Point {
        self.ctm.transform_point(Point::new(x, y))
    }

    fn close(&mut self, consumer: &mut dyn ContentConsumer) {
        self.current_point = self.subpath_start;
        consumer.close_path();
    }

    fn paint(
        &mut self,
        consumer: &mut dyn ContentConsumer,
        close_first: bool,
        paint: impl FnOnce(&mut dyn ContentConsumer),
    ) {
        if close_first {
            self.close(consumer);
        }
        paint(consumer);
        self.current_point = None;
        self.subpath_start = None;
    }

    fn take_image_id(&mut self) -> usize {
        let id = self.next_image_id;
        self.next_image_id += 1;
        id
    }

    fn show_text(&mut self, bytes: &[u8], resources: &Dictionary, consumer: &mut dyn ContentConsumer) {
        let font = self.current_font(resources, consumer);
        let width_scale = font.font_matrix().a;
        for code in font.decode_codes(bytes) {
            let trm = self.text.rendering_matrix(&self.ctm);
            consumer.show_glyph(&GlyphEvent {
                font: &*font,
                code,
                trm,
            });
            let w0 = font.advance_width(code) * width_scale;
            let is_space = font.code_length() == 1 && code == 32;
            let tx = self.text.glyph_displacement(w0, is_space);
            self.text.advance(tx);
        }
    }

    /// The font selected by `Tf`, resolved in `resources`.
    ///
    /// An unknown or unreadable font is reported once per name and replaced
    /// by a non-embedded Helvetica so the glyphs still produce records.
    fn current_font(&mut self, resources: &Dictionary, consumer: &mut dyn ContentConsumer) -> Rc<LopdfFont> {
        let name = self.text.params.font.clone().unwrap_or_default();
        let doc = self.doc;
        let entry = get_dict(doc, resources, b"Font").and_then(|fonts| fonts.get(name.as_bytes()).ok());

        let loaded = match entry {
            Some(Object::Reference(id)) => {
                if let Some(font) = self.fonts.get(id) {
                    return Rc::clone(font);
                }
                doc.get_object(*id)
                    .ok()
                    .and_then(|obj| obj.as_dict().ok())
                    .map(|dict| LopdfFont::load(doc, dict, &name).map(|font| (Some(*id), font)))
            }
            Some(Object::Dictionary(dict)) => Some(LopdfFont::load(doc, dict, &name).map(|font| (None, font))),
            _ => None,
        };

        match loaded {
            Some(Ok((id, font))) => {
                let font = Rc::new(font);
                if let Some(id) = id {
                    self.fonts.insert(id, Rc::clone(&font));
                }
                font
            }
            Some(Err(err)) => {
                self.report_font(consumer, &name, ExtractWarningCode::MalformedObject, err.to_string());
                self.fallback_font()
            }
            None => {
                let description = if name.is_empty() {
                    "text shown before any Tf".to_string()
                } else {
                    format!("font /{name} not found in resources")
                };
                self.report_font(consumer, &name, ExtractWarningCode::MissingFont, description);
                self.fallback_font()
            }
        }
    }

    fn report_font(
        &mut self,
        consumer: &mut dyn ContentConsumer,
        name: &str,
        code: ExtractWarningCode,
        description: String,
    ) {
        if self.reported_fonts.insert(name.to_string()) {
            debug!(font = name, %description, "substituting {FALLBACK_FONT}");
            consumer.on_warning(ExtractWarning::with_code(code, description).for_font(name));
        }
    }

    fn fallback_font(&mut self) -> Rc<LopdfFont> {
        if let Some(font) = &self.fallback_font {
            return Rc::clone(font);
        }
        let font = Rc::new(LopdfFont::substitute(self.doc, FALLBACK_FONT));
        self.fallback_font = Some(Rc::clone(&font));
        font
    }

    fn handle_do(
        &mut self,
        name: &str,
        resources: &Dictionary,
        consumer: &mut dyn ContentConsumer,
        depth: usize,
    ) -> Result<(), BackendError> {
        let doc = self.doc;
        let stream = get_dict(doc, resources, b"XObject")
            .and_then(|xobjects| get_object(doc, xobjects, name.as_bytes()))
            .and_then(|obj| obj.as_stream().ok());
        let Some(stream) = stream else {
            debug!(xobject = name, "XObject not found in resources");
            consumer.on_warning(ExtractWarning::with_code(
                ExtractWarningCode::MalformedObject,
                format!("XObject /{name} not found in resources"),
            ));
            return Ok(());
        };

        match get_name(doc, &stream.dict, b"Subtype").as_deref() {
            Some("Image") => {
                let id = self.take_image_id();
                consumer.show_image(&ImageDraw {
                    id,
                    ctm: self.ctm,
                    name: Some(name.to_string()),
                });
                Ok(())
            }
            Some("Form") => {
                let content = decode_stream(stream).map_err(|e| {
                    BackendError::Interpreter(format!("failed to decode form XObject /{name}: {e}"))
                })?;
                let form_resources = get_dict(doc, &stream.dict, b"Resources").unwrap_or(resources);
                let matrix = get_object(doc, &stream.dict, b"Matrix")
                    .and_then(|obj| number_array(doc, obj))
                    .and_then(|values| <[f64; 6]>::try_from(values).ok())
                    .map(Matrix::from_array);

                let base = self.stack.len();
                self.save();
                if let Some(matrix) = matrix {
                    self.ctm = matrix.concat(&self.ctm);
                }
                let result = self.run(&content, form_resources, consumer, depth + 1);
                // drop whatever the form left saved
                self.stack.truncate(base + 1);
                self.restore();
                result
            }
            _ => Ok(()),
        }
    }
}

fn set_number(op: &Operation, slot: &mut f64) {
    if let Some(v) = op.number(0) {
        *slot = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helvetica_dict;
    use lopdf::{Stream, dictionary};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        glyphs: Vec<(String, u32, Matrix)>,
        images: Vec<ImageDraw>,
        warnings: Vec<ExtractWarning>,
    }

    impl ContentConsumer for Recorder {
        fn move_to(&mut self, p: Point) {
            self.events.push(format!("m {} {}", p.x, p.y));
        }
        fn line_to(&mut self, p: Point) {
            self.events.push(format!("l {} {}", p.x, p.y));
        }
        fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
            self.events.push(format!(
                "c {} {} {} {} {} {}",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ));
        }
        fn append_rectangle(&mut self, corners: [Point; 4]) {
            let coords: Vec<String> = corners.iter().map(|p| format!("{} {}", p.x, p.y)).collect();
            self.events.push(format!("re {}", coords.join(" ")));
        }
        fn close_path(&mut self) {
            self.events.push("h".to_string());
        }
        fn end_path(&mut self) {
            self.events.push("n".to_string());
        }
        fn stroke_path(&mut self) {
            self.events.push("S".to_string());
        }
        fn fill_path(&mut self) {
            self.events.push("f".to_string());
        }
        fn fill_and_stroke_path(&mut self) {
            self.events.push("B".to_string());
        }
        fn clip(&mut self) {
            self.events.push("W".to_string());
        }
        fn shading_fill(&mut self, name: &str) {
            self.events.push(format!("sh {name}"));
        }
        fn show_glyph(&mut self, glyph: &GlyphEvent<'_>) {
            self.events.push(format!("glyph {}", glyph.code));
            self.glyphs
                .push((glyph.font.name().to_string(), glyph.code, glyph.trm));
        }
        fn show_image(&mut self, image: &ImageDraw) {
            self.events.push(format!("image {}", image.id));
            self.images.push(image.clone());
        }
        fn on_warning(&mut self, warning: ExtractWarning) {
            self.warnings.push(warning);
        }
    }

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn font_resources() -> Dictionary {
        dictionary! { "Font" => dictionary! { "F1" => helvetica_dict() } }
    }

    fn replay(doc: &Document, content: &[u8], resources: &Dictionary, mode: ReplayMode) -> Recorder {
        let mut recorder = Recorder::default();
        let mut interp = ContentInterpreter::new(doc, mode, 16, Matrix::identity());
        interp
            .run(content, resources, &mut recorder, 0)
            .expect("replay");
        recorder
    }

    fn glyph_xs(recorder: &Recorder) -> Vec<f64> {
        recorder.glyphs.iter().map(|(_, _, trm)| trm.e).collect()
    }

    #[test]
    fn tj_reports_each_glyph_with_rendering_matrix() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 100 700 Td (AB) Tj ET",
            &font_resources(),
            ReplayMode::Full,
        );
        assert_eq!(rec.glyphs.len(), 2);
        assert_eq!(rec.glyphs[0].0, "Helvetica");
        assert_eq!(rec.glyphs[0].1, 65);
        let trm = rec.glyphs[0].2;
        assert_approx(trm.a, 10.0);
        assert_approx(trm.d, 10.0);
        assert_approx(trm.f, 700.0);
        let xs = glyph_xs(&rec);
        assert_approx(xs[0], 100.0);
        assert_approx(xs[1], 105.0);
    }

    #[test]
    fn tj_array_applies_adjustments() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 100 700 Td [(A) -1000 (B) 500 (C)] TJ ET",
            &font_resources(),
            ReplayMode::Full,
        );
        let xs = glyph_xs(&rec);
        assert_approx(xs[0], 100.0);
        assert_approx(xs[1], 115.0);
        assert_approx(xs[2], 115.0);
    }

    #[test]
    fn word_spacing_applies_to_code_32_only() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 2 Tw 1 Tc 0 0 Td (A B) Tj ET",
            &font_resources(),
            ReplayMode::Full,
        );
        let xs = glyph_xs(&rec);
        assert_approx(xs[1], 6.0);
        assert_approx(xs[2], 14.0);
    }

    #[test]
    fn horizontal_scaling_and_rise() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 50 Tz 3 Ts 0 0 Td (AB) Tj ET",
            &font_resources(),
            ReplayMode::Full,
        );
        let (_, _, first) = rec.glyphs[0];
        assert_approx(first.a, 5.0);
        assert_approx(first.f, 3.0);
        assert_approx(rec.glyphs[1].2.e, 2.5);
    }

    #[test]
    fn quote_operators_move_to_next_line() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 12 TL 72 700 Td (A) Tj (B) ' 3 1 (C) \" ET",
            &font_resources(),
            ReplayMode::Full,
        );
        let ys: Vec<f64> = rec.glyphs.iter().map(|(_, _, m)| m.f).collect();
        assert_approx(ys[0], 700.0);
        assert_approx(ys[1], 688.0);
        assert_approx(ys[2], 676.0);
        assert_approx(rec.glyphs[2].2.e, 72.0);
    }

    #[test]
    fn q_restores_ctm_and_font_size() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf q 2 0 0 2 0 0 cm /F1 20 Tf 0 0 Td (A) Tj Q (B) Tj ET",
            &font_resources(),
            ReplayMode::Full,
        );
        assert_approx(rec.glyphs[0].2.a, 40.0);
        assert_approx(rec.glyphs[1].2.a, 10.0);
    }

    #[test]
    fn path_points_are_in_device_space() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"10 0 0 10 5 0 cm 1 2 m 3 4 l S",
            &Dictionary::new(),
            ReplayMode::Full,
        );
        assert_eq!(rec.events, vec!["m 15 20", "l 35 40", "S"]);
    }

    #[test]
    fn rectangle_reports_four_corners() {
        let doc = Document::with_version("1.5");
        let rec = replay(&doc, b"10 20 30 40 re f", &Dictionary::new(), ReplayMode::Full);
        assert_eq!(rec.events, vec!["re 10 20 40 20 40 60 10 60", "f"]);
    }

    #[test]
    fn v_and_y_become_cubic_curves() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"0 0 m 1 1 2 2 v 3 3 4 4 y s",
            &Dictionary::new(),
            ReplayMode::Full,
        );
        assert_eq!(
            rec.events,
            vec!["m 0 0", "c 0 0 1 1 2 2", "c 3 3 4 4 4 4", "h", "S"]
        );
    }

    #[test]
    fn closing_paint_operators_close_first() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"0 0 m 1 0 l b 0 0 m 1 0 l B* 0 0 m W n /Sh0 sh",
            &Dictionary::new(),
            ReplayMode::Full,
        );
        assert_eq!(
            rec.events,
            vec![
                "m 0 0", "l 1 0", "h", "B", "m 0 0", "l 1 0", "B", "m 0 0", "W", "n", "sh Sh0"
            ]
        );
    }

    fn image_stream() -> Stream {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => 1,
                "Height" => 1,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            vec![0],
        )
    }

    /// Page resources with an image `Im0` and a form `Fm0` that draws the
    /// image once, scaled by its `/Matrix`, and shows text with the page's
    /// font (no `/Resources` of its own for fonts).
    fn form_document() -> (Document, Dictionary) {
        let mut doc = Document::with_version("1.5");
        let image = doc.add_object(image_stream());
        let form = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Form",
                "BBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
                "Matrix" => vec![2.into(), 0.into(), 0.into(), 2.into(), 10.into(), 10.into()],
            },
            b"q 10 0 0 10 0 0 cm /Im0 Do Q BT /F1 10 Tf (A) Tj ET".to_vec(),
        ));
        let resources = dictionary! {
            "Font" => dictionary! { "F1" => helvetica_dict() },
            "XObject" => dictionary! { "Im0" => image, "Fm0" => form },
        };
        (doc, resources)
    }

    #[test]
    fn image_ids_follow_preorder_through_forms() {
        let (doc, resources) = form_document();
        let rec = replay(
            &doc,
            b"q 50 0 0 50 0 0 cm /Im0 Do Q /Fm0 Do BI /W 1 /H 1 /CS /G /BPC 8 ID \x00 EI",
            &resources,
            ReplayMode::Full,
        );
        let ids: Vec<usize> = rec.images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(rec.images[0].name.as_deref(), Some("Im0"));
        assert_eq!(rec.images[2].name, None);
        // form matrix then the inner cm
        let nested = rec.images[1].ctm;
        assert_approx(nested.a, 20.0);
        assert_approx(nested.e, 10.0);
        // the form's text uses the parent's font resources
        assert_eq!(rec.glyphs.len(), 1);
        assert_approx(rec.glyphs[0].2.a, 20.0);
    }

    #[test]
    fn images_only_mode_skips_text_and_paths() {
        let (doc, resources) = form_document();
        let content = b"0 0 m 1 1 l S /Fm0 Do BT /F1 10 Tf (XY) Tj ET /Im0 Do";
        let full = replay(&doc, content, &resources, ReplayMode::Full);
        let images = replay(&doc, content, &resources, ReplayMode::ImagesOnly);
        assert_eq!(images.events, vec!["image 0", "image 1"]);
        assert_eq!(images.images, full.images);
        assert!(images.glyphs.is_empty());
    }

    #[test]
    fn form_recursion_is_limited() {
        let mut doc = Document::with_version("1.5");
        let form_id = doc.new_object_id();
        doc.objects.insert(
            form_id,
            Object::Stream(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Form",
                    "Resources" => dictionary! { "XObject" => dictionary! { "Fm0" => form_id } },
                },
                b"/Fm0 Do".to_vec(),
            )),
        );
        let resources = dictionary! { "XObject" => dictionary! { "Fm0" => form_id } };
        let mut interp = ContentInterpreter::new(&doc, ReplayMode::Full, 4, Matrix::identity());
        let err = interp
            .run(b"/Fm0 Do", &resources, &mut Recorder::default(), 0)
            .expect_err("recursion must stop");
        assert!(err.to_string().contains("nesting depth 5 exceeds limit 4"));
    }

    #[test]
    fn unknown_xobject_is_a_warning() {
        let doc = Document::with_version("1.5");
        let rec = replay(&doc, b"/Nope Do", &Dictionary::new(), ReplayMode::Full);
        assert!(rec.images.is_empty());
        assert_eq!(rec.warnings.len(), 1);
        assert_eq!(rec.warnings[0].code, ExtractWarningCode::MalformedObject);
    }

    #[test]
    fn missing_font_falls_back_with_one_warning() {
        let doc = Document::with_version("1.5");
        let rec = replay(
            &doc,
            b"BT /F9 12 Tf (ab) Tj (c) Tj ET",
            &Dictionary::new(),
            ReplayMode::Full,
        );
        assert_eq!(rec.glyphs.len(), 3);
        assert_eq!(rec.glyphs[0].0, "Helvetica");
        assert_eq!(rec.warnings.len(), 1);
        assert_eq!(rec.warnings[0].code, ExtractWarningCode::MissingFont);
        assert_eq!(rec.warnings[0].font_name.as_deref(), Some("F9"));
        // standard Helvetica width of "a" is 556
        assert_approx(rec.glyphs[1].2.e, 12.0 * 0.556);
    }

    #[test]
    fn composite_fonts_read_two_byte_codes() {
        let mut doc = Document::with_version("1.5");
        let descendant = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => "Sans",
            "DW" => 1000,
        });
        let font = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "Sans",
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![descendant.into()],
        });
        let resources = dictionary! { "Font" => dictionary! { "F1" => font } };
        let rec = replay(
            &doc,
            b"BT /F1 10 Tf 1 Tw <00200041> Tj ET",
            &resources,
            ReplayMode::Full,
        );
        let codes: Vec<u32> = rec.glyphs.iter().map(|(_, code, _)| *code).collect();
        assert_eq!(codes, vec![0x20, 0x41]);
        // no word spacing for two-byte codes
        assert_approx(rec.glyphs[1].2.e, 10.0);
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let doc = Document::with_version("1.5");
        let rec = replay(&doc, b"Q Q 1 1 m", &Dictionary::new(), ReplayMode::Full);
        assert_eq!(rec.events, vec!["m 1 1"]);
    }
}
