//! Static font-metric tables for the PDF base-14 Helvetica faces.
//!
//! Character widths are in em units (relative to font size), taken from the Adobe AFM
//! files rounded to three decimals. Tables cover ASCII 0x20..=0x7E (95 printable
//! characters); index = (char as usize) - 32. Anything else measures as
//! `average_char_width`.

use serde::{Deserialize, Serialize};

/// Helvetica faces used by the note export. Oblique shares the regular widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
}

impl FontFace {
    /// PostScript name of the base-14 font.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Oblique => "Helvetica-Oblique",
        }
    }

    /// Resource name the face is registered under on every page.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
            FontFace::Oblique => "F3",
        }
    }
}

/// Static character-width table for a font face.
pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in points at the given font size.
    pub fn measure_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }

    /// Greedy word-wrap of `text` into lines no wider than `max_width_pt`.
    ///
    /// Newlines start new paragraphs and blank lines are kept. A word wider than a
    /// whole line is split at character boundaries.
    pub fn wrap_lines(&self, text: &str, size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let max_width = max_width_pt / size_pt;
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in paragraph.split_whitespace() {
                for piece in self.split_long_word(word, max_width) {
                    let piece_w = self.measure_str(&piece);
                    if current.is_empty() {
                        current_width = piece_w;
                        current = piece;
                    } else if current_width + self.space_width + piece_w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = piece_w;
                        current = piece;
                    } else {
                        current.push(' ');
                        current.push_str(&piece);
                        current_width += self.space_width + piece_w;
                    }
                }
            }

            lines.push(current);
        }

        // trailing blank paragraphs add nothing to the page
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    fn split_long_word(&self, word: &str, max_width: f32) -> Vec<String> {
        if self.measure_str(word) <= max_width {
            return vec![word.to_string()];
        }
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0_f32;
        for c in word.chars() {
            let mut buf = [0u8; 4];
            let w = self.measure_str(c.encode_utf8(&mut buf));
            if !piece.is_empty() && width + w > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += w;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0-9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.57,
    space_width: 0.278,
};

/// Returns the static metric table for a given face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Regular | FontFace::Oblique => &HELVETICA_TABLE,
        FontFace::Bold => &HELVETICA_BOLD_TABLE,
    }
}
