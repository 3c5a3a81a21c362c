use std::io::{self, Read};
use std::path::PathBuf;

/// A program source: a file or standard input.
pub struct PathRead {
    /// name for log messages
    pub name: String,
    pub read: Box<dyn Read>,
}

impl TryFrom<&PathBuf> for PathRead {
    type Error = io::Error;

    /// Open the file at the given path, or standard input if the path is "-".
    fn try_from(path: &PathBuf) -> Result<Self, Self::Error> {
        if path.as_os_str() == "-" {
            let read: Box<dyn Read> = Box::new(io::stdin());
            let name = "standard input".to_owned();
            Ok(Self { name, read })
        } else {
            let read: Box<dyn Read> = Box::new(std::fs::File::open(path)?);
            let name = path.display().to_string();
            Ok(Self { name, read })
        }
    }
}

impl PathRead {
    pub fn read_to_string(mut self) -> io::Result<String> {
        let mut s = String::new();
        self.read.read_to_string(&mut s)?;
        Ok(s)
    }
}

#[test]
fn missing_file() {
    let path = PathBuf::from("/nonexistent/program.t");
    let err = PathRead::try_from(&path).err().map(|e| e.kind());
    assert_eq!(err, Some(io::ErrorKind::NotFound));
}

#[test]
fn stdin() -> io::Result<()> {
    assert_eq!(PathRead::try_from(&PathBuf::from("-"))?.name, "standard input");
    Ok(())
}
