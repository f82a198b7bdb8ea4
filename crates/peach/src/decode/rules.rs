//! Grammar rules for RFC 7159 JSON text, one function per BNF rule.
//!
//! Each rule consumes characters from the shared [`Context`] and returns
//! its parsed result, invoking sub-rules directly. Dispatch is predictive
//! (on the next unconsumed character), so no rule ever backtracks, and a
//! grammar violation aborts the whole decode with a positioned error.
//!
//! Per the RFC, the structural characters (`[ ] { } : ,`) absorb the
//! whitespace around them; scalar rules leave the cursor on the first
//! character they did not consume.

use crate::decode::context::Context;
use crate::error::Result;
use crate::value::{Number, Value};

/// JSON-text = ws value ws, then end of input.
pub fn root(ctx: &mut Context) -> Result<Value> {
    whitespace(ctx);
    let value = value(ctx)?;
    whitespace(ctx);
    if let Some(c) = ctx.current() {
        return ctx.fail(format!("unexpected character '{c}'"));
    }
    Ok(value)
}

/// Zero or more of space, tab, CR, LF. Never fails.
pub fn whitespace(ctx: &mut Context) {
    while matches!(ctx.current(), Some(' ' | '\t' | '\r' | '\n')) {
        ctx.skip(1);
    }
}

/// value = false / null / true / object / array / number / string
pub fn value(ctx: &mut Context) -> Result<Value> {
    match ctx.current() {
        Some('{') => object(ctx),
        Some('[') => array(ctx),
        Some('"') => string(ctx).map(Value::String),
        Some('-' | '0'..='9') => number(ctx),
        Some('t') => ctx.consume_literal("true").map(|_| Value::Bool(true)),
        Some('f') => ctx.consume_literal("false").map(|_| Value::Bool(false)),
        Some('n') => ctx.consume_literal("null").map(|_| Value::Null),
        Some(c) => ctx.fail(format!("unexpected character '{c}'")),
        None => ctx.fail("unexpected end of input"),
    }
}

/// number = [ minus ] int [ frac ] [ exp ]
///
/// A literal with no fraction and no exponent stays an integer. When the
/// `bigint_as_string` option is set and the integer magnitude falls
/// outside the signed 32-bit range, the exact digit string is returned
/// instead, sign included.
pub fn number(ctx: &mut Context) -> Result<Value> {
    let mut text = String::new();

    if ctx.current() == Some('-') {
        ctx.skip(1);
        text.push('-');
    }

    // int = zero / ( digit1-9 *DIGIT ); a leading zero followed by
    // another digit is a hard error.
    match ctx.current() {
        Some('0') => {
            ctx.skip(1);
            text.push('0');
            if matches!(ctx.current(), Some('0'..='9')) {
                return ctx.fail("leading zeros are not allowed");
            }
        }
        Some(c @ '1'..='9') => {
            ctx.skip(1);
            text.push(c);
            while let Some(c @ '0'..='9') = ctx.current() {
                ctx.skip(1);
                text.push(c);
            }
        }
        Some(c) => return ctx.fail(format!("unexpected character '{c}' in number")),
        None => return ctx.fail("unexpected end of input"),
    }

    let mut is_float = false;

    if ctx.current() == Some('.') {
        ctx.skip(1);
        text.push('.');
        if !matches!(ctx.current(), Some('0'..='9')) {
            return ctx.fail("expected digit after '.'");
        }
        while let Some(c @ '0'..='9') = ctx.current() {
            ctx.skip(1);
            text.push(c);
        }
        is_float = true;
    }

    if matches!(ctx.current(), Some('e' | 'E')) {
        ctx.skip(1);
        text.push('e');
        if let Some(c @ ('+' | '-')) = ctx.current() {
            ctx.skip(1);
            text.push(c);
        }
        if !matches!(ctx.current(), Some('0'..='9')) {
            return ctx.fail("expected digit in exponent");
        }
        while let Some(c @ '0'..='9') = ctx.current() {
            ctx.skip(1);
            text.push(c);
        }
        is_float = true;
    }

    if is_float {
        return match text.parse::<f64>() {
            Ok(f) => Ok(Value::Number(Number::Float(f))),
            Err(_) => ctx.fail(format!("malformed number '{text}'")),
        };
    }

    match text.parse::<i64>() {
        Ok(i) => {
            if ctx.bigint_as_string() && (i < i64::from(i32::MIN) || i > i64::from(i32::MAX)) {
                Ok(Value::String(text))
            } else {
                Ok(Value::Number(Number::Int(i)))
            }
        }
        // Too large even for i64: keep the digits or fall back to float.
        Err(_) if ctx.bigint_as_string() => Ok(Value::String(text)),
        Err(_) => match text.parse::<f64>() {
            Ok(f) => Ok(Value::Number(Number::Float(f))),
            Err(_) => ctx.fail(format!("malformed number '{text}'")),
        },
    }
}

/// string = quotation-mark *char quotation-mark
pub fn string(ctx: &mut Context) -> Result<String> {
    if ctx.current() != Some('"') {
        return match ctx.current() {
            Some(c) => ctx.fail(format!("unexpected character '{c}', expected '\"'")),
            None => ctx.fail("unexpected end of input"),
        };
    }
    ctx.skip(1);

    let mut result = String::new();
    loop {
        match ctx.next() {
            Ok('"') => return Ok(result),
            Ok('\\') => result.push(escape(ctx)?),
            Ok(c) if (c as u32) < 0x20 => {
                return ctx.fail("unescaped control character in string");
            }
            Ok(c) => result.push(c),
            Err(_) => return ctx.fail("unterminated string"),
        }
    }
}

/// One backslash escape, cursor already past the backslash.
fn escape(ctx: &mut Context) -> Result<char> {
    match ctx.next()? {
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        '/' => Ok('/'),
        'b' => Ok('\u{0008}'),
        'f' => Ok('\u{000C}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'u' => unicode_escape(ctx),
        c => ctx.fail(format!("invalid escape character '{c}'")),
    }
}

/// \uXXXX, with a following low surrogate required and combined when the
/// first unit is a high surrogate.
fn unicode_escape(ctx: &mut Context) -> Result<char> {
    let unit = hex4(ctx)?;
    if (0xD800..=0xDBFF).contains(&unit) {
        if ctx.consume_literal("\\u").is_err() {
            return ctx.fail("unpaired surrogate in unicode escape");
        }
        let low = hex4(ctx)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return ctx.fail("unpaired surrogate in unicode escape");
        }
        let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(combined)
            .map_or_else(|| ctx.fail("invalid unicode escape"), Ok);
    }
    if (0xDC00..=0xDFFF).contains(&unit) {
        return ctx.fail("unpaired surrogate in unicode escape");
    }
    char::from_u32(unit).map_or_else(|| ctx.fail("invalid unicode escape"), Ok)
}

fn hex4(ctx: &mut Context) -> Result<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let c = ctx.next()?;
        let digit = match c.to_digit(16) {
            Some(d) => d,
            None => return ctx.fail(format!("invalid hex digit '{c}' in unicode escape")),
        };
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

/// array = begin-array [ value *( value-separator value ) ] end-array
pub fn array(ctx: &mut Context) -> Result<Value> {
    ctx.consume_literal("[")?;
    whitespace(ctx);

    let mut items = Vec::new();
    if ctx.current() == Some(']') {
        ctx.skip(1);
        whitespace(ctx);
        return Ok(Value::Array(items));
    }

    loop {
        items.push(value(ctx)?);
        whitespace(ctx);
        match ctx.current() {
            Some(',') => {
                ctx.skip(1);
                whitespace(ctx);
            }
            Some(']') => {
                ctx.skip(1);
                whitespace(ctx);
                return Ok(Value::Array(items));
            }
            Some(c) => return ctx.fail(format!("unexpected character '{c}', expected ',' or ']'")),
            None => return ctx.fail("unexpected end of input"),
        }
    }
}

/// object = begin-object [ member *( value-separator member ) ] end-object
///
/// Members keep insertion order; a duplicate key overwrites the earlier
/// value in place.
pub fn object(ctx: &mut Context) -> Result<Value> {
    ctx.consume_literal("{")?;
    whitespace(ctx);

    let mut entries: Vec<(String, Value)> = Vec::new();
    if ctx.current() == Some('}') {
        ctx.skip(1);
        whitespace(ctx);
        return Ok(Value::Object(entries));
    }

    loop {
        let key = string(ctx)?;
        whitespace(ctx);
        if ctx.current() != Some(':') {
            return match ctx.current() {
                Some(c) => ctx.fail(format!("unexpected character '{c}', expected ':'")),
                None => ctx.fail("unexpected end of input"),
            };
        }
        ctx.skip(1);
        whitespace(ctx);
        let member = value(ctx)?;

        if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = member;
        } else {
            entries.push((key, member));
        }

        whitespace(ctx);
        match ctx.current() {
            Some(',') => {
                ctx.skip(1);
                whitespace(ctx);
            }
            Some('}') => {
                ctx.skip(1);
                whitespace(ctx);
                return Ok(Value::Object(entries));
            }
            Some(c) => return ctx.fail(format!("unexpected character '{c}', expected ',' or '}}'")),
            None => return ctx.fail("unexpected end of input"),
        }
    }
}
