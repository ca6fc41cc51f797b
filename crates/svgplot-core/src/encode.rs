//! The [`Encode`] capability and the text helpers shared by every primitive.

use std::fmt::Write as _;

/// Serializes a value as SVG markup.
///
/// Implementations append to `out` and never fail. Container elements encode their children
/// recursively, in list order.
pub trait Encode {
    fn encode(&self, out: &mut String);

    fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.encode(&mut out);
        out
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut String) {
        (**self).encode(out);
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, out: &mut String) {
        (**self).encode(out);
    }
}

impl<T: Encode + ?Sized> Encode for std::sync::Arc<T> {
    fn encode(&self, out: &mut String) {
        (**self).encode(out);
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, out: &mut String) {
        if let Some(v) = self {
            v.encode(out);
        }
    }
}

/// Appends `v` with two fractional digits.
///
/// Non-finite values are written as `0.00` and `-0.00` is normalized to `0.00`, so the output
/// stays a valid SVG number.
pub fn push_num(out: &mut String, v: f64) {
    let v = if v.is_finite() { v } else { 0.0 };
    let start = out.len();
    let _ = write!(out, "{v:.2}");
    if &out[start..] == "-0.00" {
        out.truncate(start);
        out.push_str("0.00");
    }
}

/// Appends ` name="v"` with the number formatted by [`push_num`].
pub fn push_num_attr(out: &mut String, name: &str, v: f64) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_num(out, v);
    out.push('"');
}

/// Appends ` name="value"` when `value` is present and non-empty.
pub fn push_str_attr(out: &mut String, name: &str, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

/// Appends `text` with XML special characters escaped.
pub fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
