/*!
Provides convenience routines for rendering raw input bytes in error messages.

Parse errors quote the offending input. Since input is given as `&[u8]`, it
might not be valid UTF-8 or might contain control characters, so it is
escaped before being shown.
*/

/// Renders a single byte for human consumption.
///
/// Printable ASCII is written as-is. Everything else is written using the
/// same escapes as [`core::ascii::escape_default`], with upper case hex
/// digits (e.g., `\xFF`).
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' {
            return f.write_str(" ");
        }
        // 4 bytes is enough to cover any output from ascii::escape_default.
        let mut bytes = [0u8; 4];
        let mut len = 0;
        for (i, mut b) in core::ascii::escape_default(self.0).enumerate() {
            // capitalize \xab to \xAB
            if i >= 2 && b'a' <= b && b <= b'f' {
                b -= 32;
            }
            bytes[len] = b;
            len += 1;
        }
        // escape_default only ever yields ASCII.
        f.write_str(core::str::from_utf8(&bytes[..len]).unwrap())
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

/// Renders a slice of bytes for human consumption.
///
/// Valid UTF-8 sequences are written as their characters (with control
/// characters escaped) and invalid bytes are written as `\xNN` escapes.
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for chunk in self.0.utf8_chunks() {
            for ch in chunk.valid().chars() {
                match ch {
                    '\0' => f.write_str("\\0")?,
                    '\x01'..='\x08'
                    | '\x0b'
                    | '\x0c'
                    | '\x0e'..='\x19'
                    | '\x7f' => write!(f, "\\x{:02x}", u32::from(ch))?,
                    _ => write!(f, "{}", ch.escape_debug())?,
                }
            }
            for &byte in chunk.invalid() {
                write!(f, "\\x{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn byte() {
        assert_eq!(format!("{}", Byte(b'Z')), "Z");
        assert_eq!(format!("{}", Byte(b' ')), " ");
        assert_eq!(format!("{}", Byte(b'\n')), "\\n");
        assert_eq!(format!("{}", Byte(0xFF)), "\\xFF");
        assert_eq!(format!("{}", Byte(0xAB)), "\\xAB");
        assert_eq!(format!("{}", Byte(b'm')), "m");
        assert_eq!(format!("{}", Byte(b'y')), "y");
        assert_eq!(format!("{}", Byte(b'a')), "a");
        assert_eq!(format!("{}", Byte(b'\t')), "\\t");
        assert_eq!(format!("{}", Byte(b'\'')), "\\'");
        assert_eq!(format!("{:?}", Byte(b'-')), "\"-\"");
    }

    #[test]
    fn bytes() {
        assert_eq!(format!("{:?}", Bytes(b"P1Y")), "\"P1Y\"");
        assert_eq!(format!("{:?}", Bytes(b"P\xFF1Y")), "\"P\\xff1Y\"");
        assert_eq!(format!("{:?}", Bytes("P1☃".as_bytes())), "\"P1☃\"");
        assert_eq!(format!("{:?}", Bytes(b"P\x001Y")), "\"P\\01Y\"");
    }
}
