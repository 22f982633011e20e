// RouterOS API wire format: length-prefixed words, sentences end with an
// empty word.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::TransportError;

/// Largest single word accepted from the device.
pub const MAX_WORD_LEN: usize = 16 * 1024 * 1024;

/// Append the variable-length prefix for a word of `len` bytes.
pub fn encode_length(len: u32, dst: &mut BytesMut) {
    match len {
        0..0x80 => dst.put_u8(len as u8),
        0x80..0x4000 => dst.put_u16(len as u16 | 0x8000),
        0x4000..0x20_0000 => {
            let v = len | 0xC0_0000;
            dst.put_slice(&v.to_be_bytes()[1..]);
        }
        0x20_0000..0x1000_0000 => dst.put_u32(len | 0xE000_0000),
        _ => {
            dst.put_u8(0xF0);
            dst.put_u32(len);
        }
    }
}

/// Append one sentence: every word, then the zero-length terminator.
pub fn encode_sentence<S: AsRef<str>>(words: &[S], dst: &mut BytesMut) -> Result<(), TransportError> {
    for word in words {
        let bytes = word.as_ref().as_bytes();
        if bytes.len() > MAX_WORD_LEN {
            return Err(TransportError::Protocol(format!(
                "word of {} bytes exceeds limit",
                bytes.len()
            )));
        }
        encode_length(bytes.len() as u32, dst);
        dst.put_slice(bytes);
    }
    dst.put_u8(0);
    Ok(())
}

/// Decode a length prefix from the front of `src`. Returns the word length
/// and the prefix size, or `None` when more bytes are needed.
pub fn decode_length(src: &[u8]) -> Result<Option<(usize, usize)>, TransportError> {
    let Some(&first) = src.first() else {
        return Ok(None);
    };
    let (prefix, mut len) = match first {
        0x00..=0x7F => return Ok(Some((first as usize, 1))),
        0x80..=0xBF => (2, (first & 0x3F) as usize),
        0xC0..=0xDF => (3, (first & 0x1F) as usize),
        0xE0..=0xEF => (4, (first & 0x0F) as usize),
        0xF0 => (5, 0),
        _ => {
            return Err(TransportError::Protocol(format!(
                "unexpected control byte 0x{:02X}",
                first
            )));
        }
    };
    if src.len() < prefix {
        return Ok(None);
    }
    for &b in &src[1..prefix] {
        len = (len << 8) | b as usize;
    }
    Ok(Some((len, prefix)))
}

/// Take one complete sentence off the front of `src`. Leaves `src` untouched
/// and returns `None` when the sentence is not fully buffered yet.
pub fn decode_sentence(src: &mut BytesMut) -> Result<Option<Vec<String>>, TransportError> {
    let mut pos = 0;
    let mut words = Vec::new();
    loop {
        let Some((len, prefix)) = decode_length(&src[pos..])? else {
            return Ok(None);
        };
        if len == 0 {
            src.advance(pos + prefix);
            return Ok(Some(words));
        }
        if len > MAX_WORD_LEN {
            return Err(TransportError::Protocol(format!(
                "word of {} bytes exceeds limit",
                len
            )));
        }
        let start = pos + prefix;
        let end = start + len;
        if src.len() < end {
            return Ok(None);
        }
        words.push(String::from_utf8_lossy(&src[start..end]).into_owned());
        pos = end;
    }
}
