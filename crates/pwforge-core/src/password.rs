//! Secret password buffer with automatic zeroization

use std::io::Read;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Most password bytes accepted from the input stream
pub const MAX_PASSWORD_LEN: usize = 127;

/// Password read from the input stream - automatically zeroed when dropped.
///
/// The drop-based scrub is what guarantees the secret is wiped on every exit
/// path: the buffer lives in a stack frame that unwinds before the process
/// picks its exit status, success or failure alike.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password {
    bytes: [u8; MAX_PASSWORD_LEN],
    len: usize,
}

impl Password {
    /// Read the whole input stream in chunks of up to the buffer capacity.
    ///
    /// Each full-capacity chunk overwrites the previous one, so for streams
    /// longer than the buffer the final chunk wins. A trailing line feed on
    /// the final content is stripped, so piping `echo secret` works as
    /// expected. An empty stream yields an empty (still valid) password.
    pub fn read_from<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut pwd = Self {
            bytes: [0; MAX_PASSWORD_LEN],
            len: 0,
        };

        loop {
            let mut filled = 0;
            while filled < MAX_PASSWORD_LEN {
                let n = reader.read(&mut pwd.bytes[filled..])?;
                if n == 0 {
                    break;
                }
                filled += n;
            }
            if filled == 0 {
                break;
            }
            pwd.len = filled;
            if filled < MAX_PASSWORD_LEN {
                break;
            }
        }

        if pwd.len > 0 && pwd.bytes[pwd.len - 1] == b'\n' {
            pwd.bytes[pwd.len - 1] = 0;
            pwd.len -= 1;
        }

        Ok(pwd)
    }

    /// The secret bytes (use carefully - avoid copying)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("bytes", &"[REDACTED]")
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_strips_trailing_newline() {
        let mut input = Cursor::new(b"password\n".to_vec());
        let pwd = Password::read_from(&mut input).unwrap();
        assert_eq!(pwd.as_bytes(), b"password");
    }

    #[test]
    fn test_read_without_newline() {
        let mut input = Cursor::new(b"password".to_vec());
        let pwd = Password::read_from(&mut input).unwrap();
        assert_eq!(pwd.as_bytes(), b"password");
    }

    #[test]
    fn test_interior_newline_kept() {
        let mut input = Cursor::new(b"pass\nword".to_vec());
        let pwd = Password::read_from(&mut input).unwrap();
        assert_eq!(pwd.as_bytes(), b"pass\nword");
    }

    #[test]
    fn test_empty_stream_is_valid() {
        let mut input = Cursor::new(Vec::new());
        let pwd = Password::read_from(&mut input).unwrap();
        assert!(pwd.is_empty());
        assert_eq!(pwd.as_bytes(), b"");
    }

    #[test]
    fn test_long_stream_keeps_final_chunk() {
        // one full chunk plus five bytes: the trailing partial chunk wins
        let mut data = vec![b'a'; MAX_PASSWORD_LEN];
        data.extend_from_slice(b"tail5");
        let mut input = Cursor::new(data);
        let pwd = Password::read_from(&mut input).unwrap();
        assert_eq!(pwd.as_bytes(), b"tail5");
    }

    #[test]
    fn test_exact_capacity_stream() {
        let data = vec![b'x'; MAX_PASSWORD_LEN];
        let mut input = Cursor::new(data.clone());
        let pwd = Password::read_from(&mut input).unwrap();
        assert_eq!(pwd.as_bytes(), data.as_slice());
    }

    #[test]
    fn test_zeroize_clears_buffer() {
        let mut input = Cursor::new(b"supersecret".to_vec());
        let mut pwd = Password::read_from(&mut input).unwrap();
        pwd.zeroize();
        assert_eq!(pwd.len(), 0);
        assert!(pwd.bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_debug_redacted() {
        let mut input = Cursor::new(b"topsecret".to_vec());
        let pwd = Password::read_from(&mut input).unwrap();
        let debug = format!("{:?}", pwd);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("topsecret"));
    }
}
