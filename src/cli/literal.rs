//! Argument literals accepted on the command line.
//!
//! ```text
//! literal := integer | "true" | "false"
//!          | "list:" literal
//!          | "constr:" tag ":" literal
//!          | "idata:" integer
//!          | "bytes:" hex
//! ```
//!
//! Integers are decimal with an optional sign and may be arbitrarily long.

use num_bigint::BigInt;

use crate::diagnostics::{to_error_source, RtsError, SourceArc, Span};
use crate::err_ctx;
use crate::value::{Data, Value};

/// Parses one command-line argument into a value.
pub fn parse_literal(text: &str) -> Result<Value, RtsError> {
    let src = to_error_source("argument", text);
    let mut wrappers = Vec::new();
    let mut offset = 0;
    let mut rest = text;
    loop {
        if let Some(inner) = rest.strip_prefix("list:") {
            wrappers.push(Wrapper::List);
            offset += "list:".len();
            rest = inner;
        } else if let Some(after) = rest.strip_prefix("constr:") {
            let start = offset + "constr:".len();
            let Some((tag, fields)) = after.split_once(':') else {
                return Err(err_ctx!(
                    Parse,
                    "constructor literal needs a tag and a field value",
                    &src,
                    Span::new(offset, text.len()),
                    "write constr:<tag>:<literal>, e.g. constr:0:list:1"
                ));
            };
            let tag: u64 = tag.parse().map_err(|_| {
                err_ctx!(
                    Parse,
                    format!("invalid constructor tag '{}'", tag),
                    &src,
                    Span::new(start, start + tag.len())
                )
            })?;
            wrappers.push(Wrapper::Constr(tag));
            offset = start + after.len() - fields.len();
            rest = fields;
        } else {
            break;
        }
    }
    let leaf = parse_leaf(rest, offset, &src)?;
    Ok(wrappers.into_iter().rev().fold(leaf, |inner, wrapper| match wrapper {
        Wrapper::List => Value::list_data(inner.into_ref()),
        Wrapper::Constr(tag) => Value::constr_data(tag, inner.into_ref()),
    }))
}

/// A `list:` or `constr:<tag>:` prefix, applied once the innermost literal is known.
enum Wrapper {
    List,
    Constr(u64),
}

fn parse_leaf(text: &str, offset: usize, src: &SourceArc) -> Result<Value, RtsError> {
    if let Some(rest) = text.strip_prefix("idata:") {
        let start = offset + "idata:".len();
        let n = parse_integer(rest, start, src)?;
        return Ok(Value::Data(Data::Integer(n)));
    }
    if let Some(rest) = text.strip_prefix("bytes:") {
        let start = offset + "bytes:".len();
        return Ok(Value::Data(Data::Bytes(parse_hex(rest, start, src)?)));
    }
    match text {
        "true" => Ok(Value::boolean(true)),
        "false" => Ok(Value::boolean(false)),
        _ => parse_integer(text, offset, src).map(Value::Integer),
    }
}

fn parse_integer(text: &str, offset: usize, src: &SourceArc) -> Result<BigInt, RtsError> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let span = Span::new(offset, offset + text.len());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err_ctx!(
            Parse,
            format!("invalid literal '{}'", text),
            src,
            span,
            "expected a decimal integer, true, false, or a list:/constr:/idata:/bytes: literal"
        ));
    }
    text.parse::<BigInt>().map_err(|e| {
        err_ctx!(Parse, format!("invalid integer '{}'", text), src, span).caused_by(e)
    })
}

fn parse_hex(text: &str, offset: usize, src: &SourceArc) -> Result<Vec<u8>, RtsError> {
    let span = Span::new(offset, offset + text.len());
    if text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err_ctx!(
            Parse,
            format!("invalid hex bytes '{}'", text),
            src,
            span,
            "bytes are written as an even number of hex digits, e.g. bytes:cafe"
        ));
    }
    text.as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| err_ctx!(Parse, "invalid hex digit pair", src, span))
        })
        .collect()
}
