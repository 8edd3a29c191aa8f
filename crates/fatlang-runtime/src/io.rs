//! Formatted standard output and scanf-style standard input.
//!
//! Print calls flush before returning so program output interleaves with
//! prompts, input and `__ext_exit`. Input calls flush stdout first, then read
//! from the shared stdin buffer; bytes a call does not consume stay there for
//! the next one.

use std::ffi::c_void;
use std::io::{self, BufRead, Write};
use std::{ptr, slice};

use paste::paste;

use crate::exports::export_symbols;
use crate::sealed::Sealed;
use crate::surface;

/// A raw `(address, length)` byte buffer, laid out as `struct __c_char_arr`.
///
/// `len` counts the trailing NUL for buffers produced by this library.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharArr {
    pub ptr: *mut c_void,
    pub len: usize,
}

impl CharArr {
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Copies `bytes` and a terminating NUL into a fresh `__ext_malloc`
    /// buffer. Returns the null pair if the allocation fails.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len() + 1;
        let ptr = crate::memory::__ext_malloc(len);
        if ptr.is_null() {
            return Self::null();
        }
        // SAFETY: `ptr` is a live allocation of `len` bytes that does not
        // overlap `bytes`.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.cast::<u8>(), bytes.len());
            ptr.cast::<u8>().add(bytes.len()).write(0);
        }
        Self { ptr, len }
    }

    /// The whole buffer, NUL included.
    ///
    /// # Safety
    /// A non-null `ptr` must point to `len` readable bytes that stay valid and
    /// unmodified for the returned lifetime.
    pub unsafe fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        // SAFETY: upheld by the caller.
        unsafe { slice::from_raw_parts(self.ptr.cast::<u8>(), self.len) }
    }

    /// The bytes before the first NUL within `len`.
    ///
    /// # Safety
    /// Same contract as [`CharArr::as_bytes`].
    pub unsafe fn text(&self) -> &[u8] {
        // SAFETY: upheld by the caller.
        let bytes = unsafe { self.as_bytes() };
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        &bytes[..end]
    }
}

/// Canonical textual form of a scalar.
pub trait Scalar: Sealed + Copy {
    fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()>;
}

macro_rules! decimal_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

decimal_scalar!(i32, u32, i64, u64, usize);

fn write_float<W: Write + ?Sized>(out: &mut W, v: f64) -> io::Result<()> {
    let special: &[u8] = match (v.is_nan(), v.is_infinite(), v.is_sign_negative()) {
        (true, _, false) => b"nan",
        (true, _, true) => b"-nan",
        (_, true, false) => b"inf",
        (_, true, true) => b"-inf",
        _ => return write!(out, "{v:.6}"),
    };
    out.write_all(special)
}

impl Scalar for f32 {
    fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        write_float(out, f64::from(self))
    }
}

impl Scalar for f64 {
    fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        write_float(out, self)
    }
}

impl Scalar for u8 {
    fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        out.write_all(&[self])
    }
}

impl Scalar for bool {
    fn write_text<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", u8::from(self))
    }
}

/// Parse one value of a kind from a buffered reader, scanf-style.
///
/// `None` means the input was exhausted or did not start with a value of
/// the kind. Bytes consumed before the failure stay consumed.
pub trait Scan: Sealed + Sized {
    fn scan<R: BufRead + ?Sized>(input: &mut R) -> Option<Self>;
}

fn peek<R: BufRead + ?Sized>(input: &mut R) -> Option<u8> {
    loop {
        match input.fill_buf() {
            Ok(buf) => return buf.first().copied(),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::debug!(%err, "stdin read failed");
                return None;
            }
        }
    }
}

/// Consume the next byte if it satisfies `accept`, appending it to `token`.
fn next_byte_if<R: BufRead + ?Sized>(
    input: &mut R,
    token: &mut Vec<u8>,
    accept: impl Fn(u8) -> bool,
) -> bool {
    match peek(input) {
        Some(byte) if accept(byte) => {
            token.push(byte);
            input.consume(1);
            true
        }
        _ => false,
    }
}

fn skip_whitespace<R: BufRead + ?Sized>(input: &mut R) {
    while peek(input).is_some_and(|b| b.is_ascii_whitespace()) {
        input.consume(1);
    }
}

/// Reads an optionally signed decimal integer, wrapping modulo 2^64.
fn scan_integer<R: BufRead + ?Sized>(input: &mut R) -> Option<u64> {
    skip_whitespace(input);
    let mut token = Vec::new();
    let negative = next_byte_if(input, &mut token, |b| b == b'-' || b == b'+') && token[0] == b'-';
    let mut value = 0u64;
    let mut digits = 0usize;
    while next_byte_if(input, &mut token, |b| b.is_ascii_digit()) {
        let digit = token[token.len() - 1] - b'0';
        value = value.wrapping_mul(10).wrapping_add(u64::from(digit));
        digits += 1;
    }
    if digits == 0 {
        tracing::debug!(token = %String::from_utf8_lossy(&token), "no integer on stdin");
        return None;
    }
    Some(if negative { value.wrapping_neg() } else { value })
}

/// Collects the longest prefix shaped like a floating-point literal.
fn float_token<R: BufRead + ?Sized>(input: &mut R) -> Vec<u8> {
    skip_whitespace(input);
    let mut token = Vec::new();
    next_byte_if(input, &mut token, |b| b == b'-' || b == b'+');
    if peek(input).is_some_and(|b| matches!(b.to_ascii_lowercase(), b'i' | b'n')) {
        while next_byte_if(input, &mut token, |b| b.is_ascii_alphabetic()) {}
        return token;
    }
    while next_byte_if(input, &mut token, |b| b.is_ascii_digit()) {}
    if next_byte_if(input, &mut token, |b| b == b'.') {
        while next_byte_if(input, &mut token, |b| b.is_ascii_digit()) {}
    }
    let mantissa = token.len();
    if next_byte_if(input, &mut token, |b| b == b'e' || b == b'E') {
        next_byte_if(input, &mut token, |b| b == b'-' || b == b'+');
        let exponent_start = token.len();
        while next_byte_if(input, &mut token, |b| b.is_ascii_digit()) {}
        if token.len() == exponent_start {
            token.truncate(mantissa);
        }
    }
    token
}

fn parse_float<T: std::str::FromStr>(token: &[u8]) -> Option<T> {
    let parsed = std::str::from_utf8(token).ok().and_then(|s| s.parse().ok());
    if parsed.is_none() {
        tracing::debug!(token = %String::from_utf8_lossy(token), "no float on stdin");
    }
    parsed
}

macro_rules! integer_scan {
    ($($ty:ty),*) => {
        $(
            impl Scan for $ty {
                fn scan<R: BufRead + ?Sized>(input: &mut R) -> Option<Self> {
                    scan_integer(input).map(|v| v as $ty)
                }
            }
        )*
    };
}

integer_scan!(i32, u32, i64, u64, usize);

impl Scan for f32 {
    fn scan<R: BufRead + ?Sized>(input: &mut R) -> Option<Self> {
        parse_float(&float_token(input))
    }
}

impl Scan for f64 {
    fn scan<R: BufRead + ?Sized>(input: &mut R) -> Option<Self> {
        parse_float(&float_token(input))
    }
}

impl Scan for u8 {
    fn scan<R: BufRead + ?Sized>(input: &mut R) -> Option<Self> {
        let byte = peek(input)?;
        input.consume(1);
        Some(byte)
    }
}

/// Reads one line, excluding the `\n`, into a fresh NUL-terminated buffer.
/// End of input before any byte yields the null pair.
fn read_line_buffer<R: BufRead + ?Sized>(input: &mut R) -> CharArr {
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line) {
        Ok(0) => return CharArr::null(),
        Ok(_) => {}
        Err(err) => {
            tracing::debug!(%err, "stdin read failed");
            if line.is_empty() {
                return CharArr::null();
            }
        }
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    CharArr::from_bytes(&line)
}

fn emit(write: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) {
    let mut out = io::stdout().lock();
    if let Err(err) = write(&mut out).and_then(|()| out.flush()) {
        tracing::warn!(%err, "failed to write to stdout");
    }
}

pub(crate) fn flush_stdout() {
    if let Err(err) = io::stdout().flush() {
        tracing::warn!(%err, "failed to flush stdout");
    }
}

fn print_scalar<T: Scalar>(v: T, newline: bool) {
    emit(|out| {
        v.write_text(out)?;
        if newline {
            out.write_all(b"\n")?;
        }
        Ok(())
    });
}

fn read_scalar<T: Scan + Default>() -> T {
    flush_stdout();
    T::scan(&mut io::stdin().lock()).unwrap_or_default()
}

macro_rules! print_surface {
    ($($kind:ident: $ty:ty),*) => {
        paste! {
            surface! {
                register_print;
                $(
                    [<__ext_print_ $kind>](v: $ty) { print_scalar(v, false) }
                    [<__ext_println_ $kind>](v: $ty) { print_scalar(v, true) }
                )*
            }
        }
    };
}

print_surface!(
    i32: i32,
    ui32: u32,
    i64: i64,
    ui64: u64,
    usize: usize,
    f32: f32,
    f64: f64,
    char: u8,
    bool: bool
);

macro_rules! input_surface {
    ($($kind:ident: $ty:ty),*) => {
        paste! {
            surface! {
                register_input;
                $(
                    [<__ext_input_ $kind>]() -> $ty { read_scalar::<$ty>() }
                )*
                __ext_input_string() -> CharArr {
                    flush_stdout();
                    read_line_buffer(&mut io::stdin().lock())
                }
            }
        }
    };
}

input_surface!(
    i32: i32,
    ui32: u32,
    i64: i64,
    ui64: u64,
    usize: usize,
    f32: f32,
    f64: f64,
    char: u8
);

/// Writes the bytes of `chars` up to its first NUL.
///
/// # Safety
/// `chars` must be the null pair or describe `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __ext_print_char_arr(chars: CharArr) {
    // SAFETY: upheld by the caller.
    let text = unsafe { chars.text() };
    emit(|out| out.write_all(text));
}

/// Like [`__ext_print_char_arr`], followed by `\n`.
///
/// # Safety
/// Same contract as [`__ext_print_char_arr`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __ext_println_char_arr(chars: CharArr) {
    // SAFETY: upheld by the caller.
    let text = unsafe { chars.text() };
    emit(|out| {
        out.write_all(text)?;
        out.write_all(b"\n")
    });
}

pub(crate) fn register_io(table: &mut Vec<crate::Export>) {
    register_print(table);
    export_symbols!(table; __ext_print_char_arr, __ext_println_char_arr);
    register_input(table);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::memory::__ext_free;

    fn text<T: Scalar>(v: T) -> String {
        let mut out = Vec::new();
        v.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integer_text() {
        assert_eq!(text(-42i32), "-42");
        assert_eq!(text(4_294_967_295u32), "4294967295");
        assert_eq!(text(i64::MIN), "-9223372036854775808");
        assert_eq!(text(u64::MAX), "18446744073709551615");
        assert_eq!(text(0usize), "0");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(text(3.5f32), "3.500000");
        assert_eq!(text(-0.25f64), "-0.250000");
        assert_eq!(text(1.0f64 / 3.0), "0.333333");
        assert_eq!(text(f64::INFINITY), "inf");
        assert_eq!(text(f32::NEG_INFINITY), "-inf");
        assert_eq!(text(f64::NAN), "nan");
        assert_eq!(text(-f64::NAN), "-nan");
        // 0.0 / 0.0 yields a negative NaN on x86-64.
        assert_eq!(text(f64::from_bits(f64::NAN.to_bits() | 1 << 63)), "-nan");
    }

    #[test]
    fn test_char_and_bool_text() {
        assert_eq!(text(b'A'), "A");
        assert_eq!(text(true), "1");
        assert_eq!(text(false), "0");
    }

    #[test]
    fn test_scan_integers_leaves_rest_buffered() {
        let mut input = Cursor::new(&b"  42\n-7 x"[..]);
        assert_eq!(i32::scan(&mut input), Some(42));
        assert_eq!(i64::scan(&mut input), Some(-7));
        assert_eq!(i32::scan(&mut input), None);
        assert_eq!(u8::scan(&mut input), Some(b'x'));
        assert_eq!(u8::scan(&mut input), None);
    }

    #[test]
    fn test_scan_unsigned_wraps_negative() {
        assert_eq!(u32::scan(&mut Cursor::new(&b"-1"[..])), Some(u32::MAX));
        assert_eq!(u64::scan(&mut Cursor::new(&b"+18"[..])), Some(18));
        assert_eq!(i32::scan(&mut Cursor::new(&b"4294967297"[..])), Some(1));
    }

    #[test]
    fn test_scan_floats() {
        let mut input = Cursor::new(&b"3.25 -1e3 2.5e inf NaN ."[..]);
        assert_eq!(f64::scan(&mut input), Some(3.25));
        assert_eq!(f32::scan(&mut input), Some(-1000.0));
        assert_eq!(f64::scan(&mut input), Some(2.5));
        // The dangling `e` was consumed with the token.
        assert_eq!(f64::scan(&mut input), Some(f64::INFINITY));
        assert!(f32::scan(&mut input).is_some_and(f32::is_nan));
        assert_eq!(f64::scan(&mut input), None);
    }

    #[test]
    fn test_scan_char_does_not_skip_whitespace() {
        let mut input = Cursor::new(&b" a"[..]);
        assert_eq!(u8::scan(&mut input), Some(b' '));
        assert_eq!(u8::scan(&mut input), Some(b'a'));
    }

    #[test]
    fn test_read_line_buffer() {
        let mut input = Cursor::new(&b"hello\n\nlast"[..]);

        let line = read_line_buffer(&mut input);
        assert_eq!(line.len, 6);
        assert_eq!(unsafe { line.as_bytes() }, b"hello\0");
        assert_eq!(unsafe { line.text() }, b"hello");
        unsafe { __ext_free(line.ptr) };

        let empty = read_line_buffer(&mut input);
        assert_eq!(empty.len, 1);
        assert_eq!(unsafe { empty.as_bytes() }, b"\0");
        unsafe { __ext_free(empty.ptr) };

        let last = read_line_buffer(&mut input);
        assert_eq!(unsafe { last.text() }, b"last");
        unsafe { __ext_free(last.ptr) };

        assert!(read_line_buffer(&mut input).is_null());
    }

    #[test]
    fn test_text_stops_at_first_nul() {
        let mut bytes = *b"ab\0cd";
        let chars = CharArr {
            ptr: bytes.as_mut_ptr().cast(),
            len: bytes.len(),
        };
        assert_eq!(unsafe { chars.text() }, b"ab");
        let null = CharArr::null();
        assert_eq!(unsafe { null.text() }, b"");
    }
}
