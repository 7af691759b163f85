//! Textual rendering of constant pool values.
//!
//! Disassembly output shows constants the way they would appear in Java source: integers in
//! decimal, floating point values in the JVM's `Float.toString`/`Double.toString` shape, string
//! literals quoted and escaped, classes by their dotted name.
//!
//! The four `render_*` methods on [`ConstantPool`] correspond to the operand kinds of the
//! instructions and attributes that load constants. Each accepts a fixed set of variants and
//! fails with [`crate::Error::TypeMismatch`] for anything else:
//!
//! | Method | Accepts | Typical user |
//! |--------|---------|--------------|
//! | [`ConstantPool::render_integer_float_class_string`] | `Integer`, `Float`, `Class`, `String` | `ldc`, `ldc_w` |
//! | [`ConstantPool::render_integer_float_long_double_string`] | `Integer`, `Float`, `Long`, `Double`, `String` | `ConstantValue` attribute |
//! | [`ConstantPool::render_long_double_string`] | `Long`, `Double`, `String` | `ldc2_w` |
//! | [`ConstantPool::render_integer_float_long_double`] | `Integer`, `Float`, `Long`, `Double` | annotation element values |
//!
//! Only [`ConstantPool::render_long_double_string`] suffixes its results (`L`, `D`); the other
//! helpers print longs and doubles bare.

use crate::{
    constpool::{pool::type_mismatch, ConstantEntry, ConstantPool},
    Result,
};

/// Position in the partially escaped string after which escaping stops.
const ESCAPE_LIMIT: usize = 80;

impl ConstantPool {
    /// Render an `Integer`, `Float`, `Class` or `String` entry.
    ///
    /// # Errors
    /// Returns a reference error for unusable indices and [`crate::Error::TypeMismatch`] for
    /// entries of any other variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use classpool::ConstantPool;
    ///
    /// // #1 = Utf8 "java/util/List", #2 = Class #1
    /// let data = [
    ///     0x00, 0x03,
    ///     0x01, 0x00, 0x0E, b'j', b'a', b'v', b'a', b'/', b'u', b't', b'i', b'l', b'/', b'L', b'i', b's', b't',
    ///     0x07, 0x00, 0x01,
    /// ];
    /// let pool = ConstantPool::from_bytes(&data)?;
    /// assert_eq!(pool.render_integer_float_class_string(2)?, "java.util.List");
    /// assert!(pool.render_integer_float_class_string(1).is_err());
    /// # Ok::<(), classpool::Error>(())
    /// ```
    pub fn render_integer_float_class_string(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            ConstantEntry::Integer(value) => Ok(value.to_string()),
            ConstantEntry::Float(value) => Ok(java_float_to_string(*value)),
            ConstantEntry::Class(class) => Ok(class.name.clone()),
            ConstantEntry::String(string) => Ok(string_to_java_literal(&string.value)),
            other => Err(type_mismatch(index, "Integer|Float|Class|String", other)),
        }
    }

    /// Render an `Integer`, `Float`, `Long`, `Double` or `String` entry.
    ///
    /// # Errors
    /// Returns a reference error for unusable indices and [`crate::Error::TypeMismatch`] for
    /// entries of any other variant.
    pub fn render_integer_float_long_double_string(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            ConstantEntry::Integer(value) => Ok(value.to_string()),
            ConstantEntry::Float(value) => Ok(java_float_to_string(*value)),
            ConstantEntry::Long(value) => Ok(value.to_string()),
            ConstantEntry::Double(value) => Ok(java_double_to_string(*value)),
            ConstantEntry::String(string) => Ok(string_to_java_literal(&string.value)),
            other => Err(type_mismatch(
                index,
                "Integer|Float|Long|Double|String",
                other,
            )),
        }
    }

    /// Render a `Long`, `Double` or `String` entry, with `L` and `D` suffixes on the numbers.
    ///
    /// # Errors
    /// Returns a reference error for unusable indices and [`crate::Error::TypeMismatch`] for
    /// entries of any other variant.
    pub fn render_long_double_string(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            ConstantEntry::Long(value) => Ok(format!("{value}L")),
            ConstantEntry::Double(value) => Ok(format!("{}D", java_double_to_string(*value))),
            ConstantEntry::String(string) => Ok(string_to_java_literal(&string.value)),
            other => Err(type_mismatch(index, "Long|Double|String", other)),
        }
    }

    /// Render an `Integer`, `Float`, `Long` or `Double` entry.
    ///
    /// # Errors
    /// Returns a reference error for unusable indices and [`crate::Error::TypeMismatch`] for
    /// entries of any other variant.
    pub fn render_integer_float_long_double(&self, index: u16) -> Result<String> {
        match self.get(index)? {
            ConstantEntry::Integer(value) => Ok(value.to_string()),
            ConstantEntry::Float(value) => Ok(java_float_to_string(*value)),
            ConstantEntry::Long(value) => Ok(value.to_string()),
            ConstantEntry::Double(value) => Ok(java_double_to_string(*value)),
            other => Err(type_mismatch(index, "Integer|Float|Long|Double", other)),
        }
    }
}

/// Quote `value` as a Java string literal.
///
/// Carriage return, line feed, double quote, tab and backspace are replaced by their
/// two-character escapes. Escaping stops as soon as the partially escaped text reaches
/// position 80 (counted in UTF-16 units); everything after that point is copied verbatim.
/// Backslashes and other control characters are never escaped.
///
/// # Examples
///
/// ```rust
/// use classpool::string_to_java_literal;
///
/// assert_eq!(string_to_java_literal("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
#[must_use]
pub fn string_to_java_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');

    let mut position = 0_usize;
    let mut chars = value.chars();
    for c in chars.by_ref() {
        let escaped = match c {
            '\r' => Some('r'),
            '\n' => Some('n'),
            '"' => Some('"'),
            '\t' => Some('t'),
            '\u{8}' => Some('b'),
            _ => None,
        };

        match escaped {
            Some(letter) => {
                literal.push('\\');
                literal.push(letter);
                position += 2;
            }
            None => {
                literal.push(c);
                position += c.len_utf16();
            }
        }

        if position >= ESCAPE_LIMIT {
            break;
        }
    }
    literal.extend(chars);

    literal.push('"');
    literal
}

/// Format a `float` the way `java.lang.Float.toString` does.
///
/// Magnitudes in `[1e-3, 1e7)` are written in plain decimal notation, everything else in
/// computerized scientific notation (`1.0E10`). There is always at least one digit after the
/// decimal point.
#[must_use]
pub fn java_float_to_string(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1.0e-3..1.0e7).contains(&magnitude) {
        plain_notation(format!("{value}"))
    } else {
        scientific_notation(&format!("{value:e}"))
    }
}

/// Format a `double` the way `java.lang.Double.toString` does.
///
/// Same layout rules as [`java_float_to_string`], applied to the shortest digit string that
/// round-trips the `f64`.
#[must_use]
pub fn java_double_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1.0e-3..1.0e7).contains(&magnitude) {
        plain_notation(format!("{value}"))
    } else {
        scientific_notation(&format!("{value:e}"))
    }
}

fn plain_notation(mut text: String) -> String {
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn scientific_notation(text: &str) -> String {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::PoolBuilder, Error};

    #[test]
    fn literal_escapes() {
        assert_eq!(string_to_java_literal(""), "\"\"");
        assert_eq!(string_to_java_literal("plain"), "\"plain\"");
        assert_eq!(
            string_to_java_literal("a\rb\nc\"d\te\u{8}f"),
            "\"a\\rb\\nc\\\"d\\te\\bf\""
        );
        // Backslash and other control characters pass through
        assert_eq!(string_to_java_literal("C:\\x\u{1}"), "\"C:\\x\u{1}\"");
    }

    #[test]
    fn literal_escaping_stops_at_80() {
        let head = "x".repeat(79);

        // Position 79 is escaped and the pass stops right after it
        let input = format!("{head}\n\n");
        assert_eq!(
            string_to_java_literal(&input),
            format!("\"{head}\\n\n\"")
        );

        // Reaching 80 with a plain character stops the pass too
        let input = format!("{head}y\t");
        assert_eq!(string_to_java_literal(&input), format!("\"{head}y\t\""));

        // Escapes before the limit count twice towards it
        let input = format!("{}{}\t\t", "\"".repeat(40), "z");
        assert_eq!(
            string_to_java_literal(&input),
            format!("\"{}z\t\t\"", "\\\"".repeat(40))
        );
    }

    #[test]
    fn literal_mid_escape_truncation() {
        // 39 tabs render as 78 characters, "ab" brings the position to 80
        let input = format!("{}ab\t\"", "\t".repeat(39));
        assert_eq!(
            string_to_java_literal(&input),
            format!("\"{}ab\t\"\"", "\\t".repeat(39))
        );

        // 40 quotes render as exactly 80 characters
        let input = format!("{}\r", "\"".repeat(40));
        assert_eq!(
            string_to_java_literal(&input),
            format!("\"{}\r\"", "\\\"".repeat(40))
        );
    }

    #[test]
    fn float_text() {
        assert_eq!(java_float_to_string(1.0), "1.0");
        assert_eq!(java_float_to_string(-2.5), "-2.5");
        assert_eq!(java_float_to_string(0.0), "0.0");
        assert_eq!(java_float_to_string(-0.0), "-0.0");
        assert_eq!(java_float_to_string(0.1), "0.1");
        assert_eq!(java_float_to_string(0.001), "0.001");
        assert_eq!(java_float_to_string(1.0e7), "1.0E7");
        assert_eq!(java_float_to_string(1.5e-5), "1.5E-5");
        assert_eq!(java_float_to_string(f32::NAN), "NaN");
        assert_eq!(java_float_to_string(f32::INFINITY), "Infinity");
        assert_eq!(java_float_to_string(f32::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn double_text() {
        assert_eq!(java_double_to_string(3.0), "3.0");
        assert_eq!(java_double_to_string(1234567.0), "1234567.0");
        assert_eq!(java_double_to_string(1.0e10), "1.0E10");
        assert_eq!(java_double_to_string(-1.25e-7), "-1.25E-7");
        assert_eq!(java_double_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    fn sample_pool() -> ConstantPool {
        let data = PoolBuilder::new()
            .integer(42) //                     #1
            .float(0.5) //                      #2
            .long(-9) //                        #3 (+4)
            .double(1.0e10) //                  #5 (+6)
            .utf8("com/company/user/Country") // #7
            .class(7) //                        #8
            .string(10) //                      #9
            .utf8("line\nbreak") //             #10
            .name_and_type(7, 7) //             #11
            .methodref(8, 11) //                #12
            .build();
        ConstantPool::from_bytes(&data).unwrap()
    }

    #[test]
    fn integer_float_class_string() {
        let pool = sample_pool();
        assert_eq!(pool.render_integer_float_class_string(1).unwrap(), "42");
        assert_eq!(pool.render_integer_float_class_string(2).unwrap(), "0.5");
        assert_eq!(
            pool.render_integer_float_class_string(8).unwrap(),
            "com.company.user.Country"
        );
        assert_eq!(
            pool.render_integer_float_class_string(9).unwrap(),
            "\"line\\nbreak\""
        );

        for index in [3, 5, 7, 10, 11, 12] {
            assert!(matches!(
                pool.render_integer_float_class_string(index),
                Err(Error::TypeMismatch {
                    expected: "Integer|Float|Class|String",
                    ..
                })
            ));
        }
        assert!(matches!(
            pool.render_integer_float_class_string(12),
            Err(Error::TypeMismatch {
                index: 12,
                found: "Methodref",
                ..
            })
        ));
    }

    #[test]
    fn integer_float_long_double_string() {
        let pool = sample_pool();
        assert_eq!(pool.render_integer_float_long_double_string(1).unwrap(), "42");
        assert_eq!(pool.render_integer_float_long_double_string(3).unwrap(), "-9");
        assert_eq!(
            pool.render_integer_float_long_double_string(5).unwrap(),
            "1.0E10"
        );
        assert_eq!(
            pool.render_integer_float_long_double_string(9).unwrap(),
            "\"line\\nbreak\""
        );
        assert!(pool.render_integer_float_long_double_string(8).is_err());
    }

    #[test]
    fn long_double_string() {
        let pool = sample_pool();
        assert_eq!(pool.render_long_double_string(3).unwrap(), "-9L");
        assert_eq!(pool.render_long_double_string(5).unwrap(), "1.0E10D");
        assert_eq!(
            pool.render_long_double_string(9).unwrap(),
            "\"line\\nbreak\""
        );
        assert!(matches!(
            pool.render_long_double_string(1),
            Err(Error::TypeMismatch { found: "Integer", .. })
        ));
        assert!(matches!(
            pool.render_long_double_string(4),
            Err(Error::UnusableEntry(4))
        ));
    }

    #[test]
    fn integer_float_long_double() {
        let pool = sample_pool();
        assert_eq!(pool.render_integer_float_long_double(2).unwrap(), "0.5");
        assert_eq!(pool.render_integer_float_long_double(3).unwrap(), "-9");
        assert!(matches!(
            pool.render_integer_float_long_double(9),
            Err(Error::TypeMismatch { found: "String", .. })
        ));
        assert!(matches!(
            pool.render_integer_float_long_double(0),
            Err(Error::InvalidIndex { index: 0, .. })
        ));
        assert!(matches!(
            pool.render_integer_float_long_double(13),
            Err(Error::InvalidIndex { index: 13, .. })
        ));
    }
}
