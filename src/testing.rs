//! Fixture builders shared by the unit tests
//!
//! Archives are written with the same crates the adapters read them with.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// One item to place into a fixture archive
pub enum Item<'a> {
    File(&'a str, &'a [u8]),
    Dir(&'a str),
    Symlink(&'a str, &'a str),
}

/// Write a plain file, creating its parent directories
pub fn write_file(path: &Path, data: &[u8]) {
    fs::write(create_parent(path), data).unwrap();
}

fn create_parent(path: &Path) -> &Path {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    path
}

/// Write a ZIP archive (symlink items are skipped)
pub fn write_zip(path: &Path, items: &[Item]) {
    let file = File::create(create_parent(path)).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for item in items {
        match item {
            Item::File(name, data) => {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data).unwrap();
            }
            Item::Dir(name) => zip.add_directory(*name, options).unwrap(),
            Item::Symlink(..) => {}
        }
    }

    zip.finish().unwrap();
}

/// Write a tarball, compressed according to the filename suffix
pub fn write_tar(path: &Path, items: &[Item]) {
    let file = File::create(create_parent(path)).unwrap();
    let name = path.to_string_lossy();

    if name.ends_with(".tar.gz") {
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        build_tar(encoder, items).finish().unwrap();
    } else if name.ends_with(".tar.bz2") {
        let encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
        build_tar(encoder, items).finish().unwrap();
    } else if name.ends_with(".tar.xz") {
        let encoder = xz2::write::XzEncoder::new(file, 6);
        build_tar(encoder, items).finish().unwrap();
    } else {
        build_tar(file, items);
    }
}

fn build_tar<W: Write>(writer: W, items: &[Item]) -> W {
    let mut builder = tar::Builder::new(writer);

    for item in items {
        let mut header = tar::Header::new_gnu();
        match item {
            Item::File(name, data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_size(data.len() as u64);
                header.set_mode(0o644);
                builder.append_data(&mut header, name, *data).unwrap();
            }
            Item::Dir(name) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                builder.append_data(&mut header, name, io::empty()).unwrap();
            }
            Item::Symlink(name, target) => {
                header.set_entry_type(tar::EntryType::Symlink);
                header.set_size(0);
                header.set_mode(0o777);
                header.set_link_name(target).unwrap();
                builder.append_data(&mut header, name, io::empty()).unwrap();
            }
        }
    }

    builder.into_inner().unwrap()
}

/// Sorted names of a set of entries, for order-independent assertions
pub fn sorted_names(entries: &[crate::Entry]) -> Vec<String> {
    let mut names: Vec<String> = entries.iter().map(|e| e.name()).collect();
    names.sort();
    names
}
