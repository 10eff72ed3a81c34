use crate::error::{Error, Result};
use log::info;
use std::io::{self, IsTerminal, Read};

/// Reads all of stdin, refusing to wait on an interactive terminal.
pub fn read_piped_stdin() -> Result<Vec<u8>> {
    read_piped(io::stdin().lock())
}

pub fn read_piped<R: Read + IsTerminal>(mut reader: R) -> Result<Vec<u8>> {
    if reader.is_terminal() {
        return Err(Error::NoInput);
    }

    info!("Reading image data from stdin...");

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::ReadInput)?;
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    #[test]
    fn reads_everything_from_a_file() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"not really an image").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        assert_eq!(read_piped(file).unwrap(), b"not really an image");
    }

    #[test]
    fn empty_input_is_an_error() {
        let file = tempfile::tempfile().unwrap();
        assert!(matches!(read_piped(file), Err(Error::EmptyInput)));
    }
}
