//! Drives the whole pipeline through a real external editor process.
//!
//! Kept in its own test binary: the script is written and executed right
//! away, so no other test may be forking while its file handle is open.
#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;
use ubermove::{run, Config, ExternalEditor};

#[test]
fn test_shell_script_editor() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("source");
    let target = dir.path().join("target");
    fs::create_dir_all(source.join("docs")).unwrap();
    fs::write(source.join("docs/readme.md"), b"read me").unwrap();
    fs::write(source.join("scratch.txt"), b"throw away").unwrap();

    // Rename the readme and delete the scratch file, in place
    let script = dir.path().join("editor.sh");
    {
        let mut file = fs::File::create(&script).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(
            file,
            "sed -i -e 's|^docs/readme.md$|README.md|' -e 's|^scratch.txt$||' \"$1\""
        )
        .unwrap();
        file.sync_all().unwrap();
    }
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let config = Config::resolve(source.clone(), target.clone(), None, Some(script.into()))
        .unwrap();
    let editor = ExternalEditor::new(config.editor());

    let summary = run(&config, &editor).unwrap();

    assert_eq!(summary.moved, 1);
    assert_eq!(summary.removed, 1);
    assert_eq!(fs::read(target.join("README.md")).unwrap(), b"read me");
    assert!(!source.join("docs/readme.md").exists());
    assert!(!source.join("scratch.txt").exists());
}
