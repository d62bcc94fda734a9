//! Value-level round trip of literals.
//!
//! A literal is stable when rebuilding it from its decoded value yields raw
//! text that decodes to the very same value. The rebuilt text may differ from
//! the source text (`0x10` rebuilds as `16`); only the value has to survive.

use crate::ast::literal;
use crate::ast::{AstNode, BooleanLiteral, CharLiteral, FloatingPointLiteral, IntegralLiteral, StringLiteral};
use crate::error::{Error, Result};

pub trait RoundTrip: AstNode {
    /// Label used in diagnostics, e.g. `integral`
    const LABEL: &'static str;

    fn raw_text(&self) -> Option<&str>;

    /// Decode, rebuild and decode again; `Err` when the value does not survive
    fn check_round_trip(&self) -> Result<()>;
}

fn mismatch(raw: Option<&str>, rebuilt: String) -> Error {
    Error::RoundTrip { raw: raw.unwrap_or_default().to_string(), rebuilt }
}

impl RoundTrip for IntegralLiteral {
    const LABEL: &'static str = "integral";

    fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn check_round_trip(&self) -> Result<()> {
        let (rebuilt, same) = if self.is_marked_as_long() {
            let value = self.long_value()?;
            let rebuilt = literal::encode_long(value);
            let same = literal::decode_integral(&rebuilt)? == (value, true);
            (rebuilt, same)
        } else {
            let value = self.int_value()?;
            let rebuilt = literal::encode_int(value);
            let same = literal::decode_integral(&rebuilt)? == (i64::from(value), false);
            (rebuilt, same)
        };
        if same {
            Ok(())
        } else {
            Err(mismatch(self.raw_text(), rebuilt))
        }
    }
}

impl RoundTrip for FloatingPointLiteral {
    const LABEL: &'static str = "floating point";

    fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn check_round_trip(&self) -> Result<()> {
        let (rebuilt, same) = if self.is_marked_as_float() {
            let value = self.float_value()?;
            let rebuilt = literal::encode_float(value)?;
            let (back, is_float) = literal::decode_floating(&rebuilt)?;
            (rebuilt, is_float && back as f32 == value)
        } else {
            let value = self.double_value()?;
            let rebuilt = literal::encode_double(value)?;
            let (back, is_float) = literal::decode_floating(&rebuilt)?;
            (rebuilt, !is_float && back == value)
        };
        if same {
            Ok(())
        } else {
            Err(mismatch(self.raw_text(), rebuilt))
        }
    }
}

impl RoundTrip for BooleanLiteral {
    const LABEL: &'static str = "boolean";

    fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn check_round_trip(&self) -> Result<()> {
        let value = self.value()?;
        let rebuilt = value.to_string();
        if literal::decode_boolean(&rebuilt)? == value {
            Ok(())
        } else {
            Err(mismatch(self.raw_text(), rebuilt))
        }
    }
}

impl RoundTrip for CharLiteral {
    const LABEL: &'static str = "char";

    fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn check_round_trip(&self) -> Result<()> {
        let value = self.value()?;
        let rebuilt = literal::encode_char(value)?;
        if literal::decode_char(&rebuilt)? == value {
            Ok(())
        } else {
            Err(mismatch(self.raw_text(), rebuilt))
        }
    }
}

impl RoundTrip for StringLiteral {
    const LABEL: &'static str = "string";

    fn raw_text(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    fn check_round_trip(&self) -> Result<()> {
        let value = self.value()?;
        let rebuilt = literal::encode_string(&value);
        if literal::decode_string(&rebuilt)? == value {
            Ok(())
        } else {
            Err(mismatch(self.raw_text(), rebuilt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_literals_pass() {
        assert_eq!(IntegralLiteral::from_raw("0x10").check_round_trip(), Ok(()));
        assert_eq!(IntegralLiteral::from_raw("0xFFFFFFFFFFFFFFFFL").check_round_trip(), Ok(()));
        assert_eq!(FloatingPointLiteral::from_raw("1.5e3").check_round_trip(), Ok(()));
        assert_eq!(FloatingPointLiteral::from_raw("0.1f").check_round_trip(), Ok(()));
        assert_eq!(BooleanLiteral::from_raw("true").check_round_trip(), Ok(()));
        assert_eq!(CharLiteral::from_raw("'\\u0041'").check_round_trip(), Ok(()));
        assert_eq!(StringLiteral::from_raw("\"a\\tb\"").check_round_trip(), Ok(()));
    }

    #[test]
    fn corrupted_raw_text_fails() {
        let mut lit = IntegralLiteral::from_raw("12");
        lit.raw = Some("12x".into());
        assert!(lit.is_syntactically_valid());
        assert!(lit.check_round_trip().is_err());

        let missing = StringLiteral::default();
        assert_eq!(missing.check_round_trip(), Err(Error::missing("string literal text")));
    }

    #[test]
    fn labels() {
        assert_eq!(<CharLiteral as RoundTrip>::LABEL, "char");
        assert_eq!(<FloatingPointLiteral as RoundTrip>::LABEL, "floating point");
    }
}
