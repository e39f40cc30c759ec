//! Console utilities for the exit prompt.
//!
//! Blocks for a single key press the way an interactive console tool does
//! before its window closes.

use std::io::{self, Read, Write};

/// Prompt printed before waiting
pub const EXIT_PROMPT: &str = "Press any key to exit...";

/// Print the exit prompt to `out` and block until `input` yields one byte
/// or reaches end of input
pub fn prompt_and_wait<W: Write, R: Read>(out: &mut W, input: &mut R) -> io::Result<()> {
    writeln!(out, "{}", EXIT_PROMPT)?;
    out.flush()?;
    read_one_byte(input)
}

fn read_one_byte<R: Read>(input: &mut R) -> io::Result<()> {
    let mut byte = [0u8; 1];
    input.read(&mut byte).map(|_| ())
}

/// Standard input, read one key at a time when attached to a Windows console.
///
/// Redirected input and other platforms fall back to plain stdin reads.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl Read for ConsoleInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        #[cfg(windows)]
        {
            if let Some(result) = read_console_key(buf) {
                return result;
            }
        }

        io::stdin().read(buf)
    }
}

/// `None` when stdin is not a console
#[cfg(windows)]
fn read_console_key(buf: &mut [u8]) -> Option<io::Result<usize>> {
    use ::windows::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, ReadConsoleW, SetConsoleMode, CONSOLE_MODE,
        ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT, STD_INPUT_HANDLE,
    };

    unsafe {
        let input = match GetStdHandle(STD_INPUT_HANDLE) {
            Ok(input) => input,
            Err(e) => return Some(Err(e.into())),
        };
        let mut mode = CONSOLE_MODE::default();
        if GetConsoleMode(input, &mut mode).is_err() {
            return None;
        }

        // Unbuffered, unechoed: the first key returns immediately
        let raw = CONSOLE_MODE(mode.0 & !(ENABLE_LINE_INPUT.0 | ENABLE_ECHO_INPUT.0));
        if let Err(e) = SetConsoleMode(input, raw) {
            return Some(Err(e.into()));
        }

        let mut key = [0u16; 1];
        let mut read = 0u32;
        let result = ReadConsoleW(input, key.as_mut_ptr() as *mut _, 1, &mut read, None);
        let _ = SetConsoleMode(input, mode);

        Some(result.map_err(io::Error::from).map(|()| {
            if read == 0 {
                0
            } else {
                buf[0] = key[0] as u8;
                1
            }
        }))
    }
}
