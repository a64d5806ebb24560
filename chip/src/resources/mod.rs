use std::{
    fs,
    io::{prelude::*, Cursor},
    path::Path,
};
use zip::read::ZipArchive;

use crate::RomError;

/// Represents an archive of roms, the roms are stored as the files of a ZIP archive held in
/// memory.
pub struct RomArchives<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> RomArchives<'a> {
    /// Will open the rom archive contained in `data`
    pub fn new(data: &'a [u8]) -> Result<Self, RomError> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        log::debug!("opened a rom archive with {} entries", archive.len());
        Ok(RomArchives { archive })
    }

    /// Will return all the rom names available to be chosen
    pub fn file_names(&self) -> Vec<&'_ str> {
        self.archive.file_names().collect()
    }

    /// Will decompress the rom with the given name from the archive
    pub fn get_file_data(&mut self, name: &str) -> Result<Rom, RomError> {
        let mut file = self.archive.by_name(name)?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        Ok(Rom::new(name, data))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program, loaded verbatim without any header
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data
    pub fn new<T>(name: &str, data: T) -> Self
    where
        T: Into<Box<[u8]>>,
    {
        Rom {
            name: name.to_string(),
            data: data.into(),
        }
    }

    /// Will read the rom from a file, the file name becomes the rom name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!("read rom '{}' from {}", name, path.display());
        Ok(Rom::new(&name, data))
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{chip8::ChipSet, definitions::cpu},
        std::io::Write,
        zip::{write::FileOptions, CompressionMethod, ZipWriter},
    };

    const PONG: [u8; 6] = [0x6A, 0x02, 0x6B, 0x0C, 0x6C, 0x3F];
    const MAZE: [u8; 4] = [0xA2, 0x1E, 0xC2, 0x01];

    /// builds an archive holding the two roms
    fn archive() -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let stored = FileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = FileOptions::default().compression_method(CompressionMethod::Deflated);

        writer.start_file("PONG", stored).expect("start PONG");
        writer.write_all(&PONG).expect("write PONG");
        writer.start_file("MAZE", deflated).expect("start MAZE");
        writer.write_all(&MAZE).expect("write MAZE");

        writer.finish().expect("finish archive").into_inner()
    }

    #[test]
    fn test_rom_extract() {
        let data = archive();
        let mut ra = RomArchives::new(&data).expect("a valid archive");

        let rom = ra.get_file_data("PONG").expect("PONG is included");
        assert_eq!(rom.get_name(), "PONG");
        assert_eq!(rom.get_data(), &PONG[..]);

        let rom = ra.get_file_data("MAZE").expect("MAZE is included");
        assert_eq!(rom.get_data(), &MAZE[..]);
    }

    #[test]
    fn test_file_names() {
        let data = archive();
        let ra = RomArchives::new(&data).expect("a valid archive");
        let mut files = ra.file_names();
        files.sort_unstable();

        assert_eq!(files, ["MAZE", "PONG"]);
    }

    #[test]
    fn test_missing_rom() {
        let data = archive();
        let mut ra = RomArchives::new(&data).expect("a valid archive");

        assert!(matches!(
            ra.get_file_data("TETRIS"),
            Err(RomError::Archive(zip::result::ZipError::FileNotFound))
        ));
    }

    #[test]
    fn test_invalid_archive() {
        assert!(matches!(
            RomArchives::new(&PONG),
            Err(RomError::Archive(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("chip8-vm-{}.ch8", std::process::id()));
        fs::write(&path, PONG).expect("write the rom");

        let rom = Rom::from_path(&path);
        fs::remove_file(&path).expect("remove the rom");

        let rom = rom.expect("a readable rom");
        assert_eq!(rom.get_data(), &PONG[..]);
        assert!(rom.get_name().ends_with(".ch8"));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Rom::from_path("/this/rom/does/not/exist.ch8"),
            Err(RomError::Io(_))
        ));
    }

    #[test]
    fn test_load_rom() {
        let mut chip = ChipSet::new();
        chip.load_rom(&Rom::new("PONG", PONG.to_vec()))
            .expect("the rom fits");

        assert_eq!(chip.get_name(), "PONG");
        let start = cpu::PROGRAM_COUNTER;
        assert_eq!(&chip.get_memory()[start..(start + PONG.len())], &PONG[..]);
    }
}
