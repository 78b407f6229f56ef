//! Text state for the content stream interpreter.
//!
//! Tracks the text object (`BT`/`ET`), the text and line matrices, and the
//! text parameters that `q`/`Q` save with the graphics state.

use pdflayout_core::Matrix;

/// Text parameters saved and restored by `q`/`Q`.
///
/// The text and line matrices are not part of the graphics state and are
/// left out.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    /// `Tc`, in unscaled text space units.
    pub char_spacing: f64,
    /// `Tw`, applied to single-byte code 32 only.
    pub word_spacing: f64,
    /// `Tz` as a percentage.
    pub h_scaling: f64,
    /// `TL`.
    pub leading: f64,
    /// Resource name of the current font.
    pub font: Option<String>,
    pub font_size: f64,
    /// `Tr`; glyph events are reported for every mode.
    pub render_mode: i64,
    /// `Ts`.
    pub rise: f64,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            char_spacing: 0.0,
            word_spacing: 0.0,
            h_scaling: 100.0,
            leading: 0.0,
            font: None,
            font_size: 0.0,
            render_mode: 0,
            rise: 0.0,
        }
    }
}

/// Full text state of one interpreter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextState {
    pub params: TextParams,
    in_text_object: bool,
    text_matrix: Matrix,
    line_matrix: Matrix,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_text_object(&self) -> bool {
        self.in_text_object
    }

    pub fn text_matrix(&self) -> &Matrix {
        &self.text_matrix
    }

    /// `BT`: reset both matrices.
    pub fn begin_text(&mut self) {
        self.text_matrix = Matrix::identity();
        self.line_matrix = Matrix::identity();
        self.in_text_object = true;
    }

    /// `ET`.
    pub fn end_text(&mut self) {
        self.in_text_object = false;
    }

    /// `Tm`: replace both matrices.
    pub fn set_text_matrix(&mut self, m: Matrix) {
        self.text_matrix = m;
        self.line_matrix = m;
    }

    /// `Td`: offset from the start of the current line.
    pub fn move_text_position(&mut self, tx: f64, ty: f64) {
        self.line_matrix = Matrix::translate(tx, ty).concat(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// `TD`: set leading to `-ty`, then `Td`.
    pub fn move_text_position_and_set_leading(&mut self, tx: f64, ty: f64) {
        self.params.leading = -ty;
        self.move_text_position(tx, ty);
    }

    /// `T*`.
    pub fn move_to_next_line(&mut self) {
        let leading = self.params.leading;
        self.move_text_position(0.0, -leading);
    }

    /// Shift the text matrix by `tx` unscaled text space units.
    pub fn advance(&mut self, tx: f64) {
        self.text_matrix = Matrix::translate(tx, 0.0).concat(&self.text_matrix);
    }

    /// Horizontal scaling as a factor.
    pub fn h_scale(&self) -> f64 {
        self.params.h_scaling / 100.0
    }

    /// Text rendering matrix: text space parameters, then the text matrix,
    /// then `ctm`.
    pub fn rendering_matrix(&self, ctm: &Matrix) -> Matrix {
        let p = &self.params;
        let params = Matrix::new(p.font_size * self.h_scale(), 0.0, 0.0, p.font_size, 0.0, p.rise);
        params.concat(&self.text_matrix).concat(ctm)
    }

    /// Horizontal displacement after showing a glyph whose width `w0` is
    /// already in text space units per unit font size.
    pub fn glyph_displacement(&self, w0: f64, is_space: bool) -> f64 {
        let p = &self.params;
        let word = if is_space { p.word_spacing } else { 0.0 };
        (w0 * p.font_size + p.char_spacing + word) * self.h_scale()
    }

    /// Displacement of a `TJ` number (thousandths of text space).
    pub fn adjustment_displacement(&self, adjustment: f64) -> f64 {
        -(adjustment / 1000.0) * self.params.font_size * self.h_scale()
    }
}
