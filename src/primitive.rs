//! Coercion of raw configuration values into typed scalars.
//!
//! Every supported scalar implements [`Primitive`], which is all the resolution
//! pipeline needs: a way to read the scalar out of an opaque structured value, a
//! way to parse it from text, an ordering for bound checks, and a rendering for
//! error messages and prompt defaults.
//!
//! Coercion never fails loudly. A value that cannot be read as the target type
//! yields `None`, and the caller turns that into
//! [`InvalidPrimitiveType`](crate::ConfigReaderError::InvalidPrimitiveType).

use serde_json::Value;

use crate::types::PrimitiveType;

pub trait Primitive: Clone + PartialOrd + Sized {
    /// The primitive kind reported when coercion fails.
    const KIND: PrimitiveType;

    /// Read the scalar out of a structured value.
    fn from_value(raw: &Value) -> Option<Self>;

    /// Parse the scalar from its textual form.
    fn parse_str(raw: &str) -> Option<Self>;

    /// How the value appears inside error messages.
    fn render(&self) -> String;

    /// How the value is pre-filled in an interactive prompt.
    fn prompt_default(&self) -> String {
        self.render()
    }
}

/// Integral floats (`8080.0`) are accepted wherever an integer is expected.
fn integral_float(f: f64) -> Option<i128> {
    if f.is_finite() && f.fract() == 0.0 && f >= i128::MIN as f64 && f <= i128::MAX as f64 {
        Some(f as i128)
    } else {
        None
    }
}

macro_rules! impl_int_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: PrimitiveType = PrimitiveType::Int;

            fn from_value(raw: &Value) -> Option<Self> {
                let Value::Number(n) = raw else {
                    return None;
                };
                if let Some(i) = n.as_i64() {
                    return <$ty>::try_from(i).ok();
                }
                if let Some(u) = n.as_u64() {
                    return <$ty>::try_from(u).ok();
                }
                n.as_f64()
                    .and_then(integral_float)
                    .and_then(|i| <$ty>::try_from(i).ok())
            }

            fn parse_str(raw: &str) -> Option<Self> {
                raw.trim().parse().ok()
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_int_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: PrimitiveType = PrimitiveType::Float;

            fn from_value(raw: &Value) -> Option<Self> {
                match raw {
                    Value::Number(n) => n.as_f64().map(|f| f as $ty).filter(|f| f.is_finite()),
                    _ => None,
                }
            }

            // NaN and infinities parse in Rust but never satisfy bounds sensibly.
            // Out-of-range magnitudes become infinite after the cast.
            fn parse_str(raw: &str) -> Option<Self> {
                raw.trim().parse::<$ty>().ok().filter(|f| f.is_finite())
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_float_primitive!(f32, f64);

impl Primitive for bool {
    const KIND: PrimitiveType = PrimitiveType::Bool;

    fn from_value(raw: &Value) -> Option<Self> {
        raw.as_bool()
    }

    fn parse_str(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.eq_ignore_ascii_case("true") {
            Some(true)
        } else if s.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Primitive for String {
    const KIND: PrimitiveType = PrimitiveType::String;

    fn from_value(raw: &Value) -> Option<Self> {
        raw.as_str().map(str::to_string)
    }

    fn parse_str(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn render(&self) -> String {
        format!("{self:?}")
    }

    fn prompt_default(&self) -> String {
        self.clone()
    }
}
