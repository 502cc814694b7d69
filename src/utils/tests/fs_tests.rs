extern crate std;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::plan::errors::PlanError;
use crate::utils::fs_utils::{ensure_dir, partial_path, remove_if_exists, remove_stale_tiles, write_atomically};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plantiles_fs_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_partial_path_appends_suffix() {
    std::assert_eq!(partial_path(Path::new("out/output.csv")), PathBuf::from("out/output.csv.partial"));
}

#[test]
fn test_write_atomically_renames_on_success() {
    let dir = scratch_dir("atomic_ok");
    ensure_dir(&dir).unwrap();
    let target = dir.join("doc.txt");

    write_atomically(&target, |w| {
        w.write_all(b"hello")?;
        Ok(())
    }).unwrap();

    std::assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
    std::assert!(!partial_path(&target).exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_write_atomically_keeps_old_document_on_failure() {
    let dir = scratch_dir("atomic_fail");
    ensure_dir(&dir).unwrap();
    let target = dir.join("doc.txt");
    std::fs::write(&target, "previous").unwrap();

    let result = write_atomically(&target, |w| {
        w.write_all(b"half")?;
        Err(PlanError::GenericError("boom".to_string()))
    });

    std::assert!(result.is_err());
    std::assert_eq!(std::fs::read_to_string(&target).unwrap(), "previous");
    std::assert!(!partial_path(&target).exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_remove_stale_tiles_only_touches_tiles() {
    let dir = scratch_dir("stale");
    ensure_dir(&dir).unwrap();
    for name in ["tile_z0_x0_y0.png", "tile_z2_x3_y1.png", "output.csv", "tile_notes.png"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    std::assert_eq!(remove_stale_tiles(&dir).unwrap(), 2);
    std::assert!(dir.join("output.csv").exists());
    std::assert!(dir.join("tile_notes.png").exists());
    std::assert!(!dir.join("tile_z2_x3_y1.png").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_directory_has_no_stale_tiles() {
    std::assert_eq!(remove_stale_tiles(&scratch_dir("absent")).unwrap(), 0);
}

#[test]
fn test_remove_if_exists_ignores_missing_file() {
    let dir = scratch_dir("remove");
    std::assert!(remove_if_exists(&dir.join("nothing.txt")).is_ok());
}
