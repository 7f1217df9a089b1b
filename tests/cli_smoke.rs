use std::path::PathBuf;

fn placard_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_placard")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "placard.exe"
            } else {
                "placard"
            });
            p
        })
}

#[test]
fn cli_single_writes_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let out_path = dir.join("single.png");
    let _ = std::fs::remove_file(&out_path);

    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(placard_exe())
        .args([
            "single",
            "--text",
            "smoke",
            "--width",
            "64",
            "--height",
            "64",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    let bytes = std::fs::read(&out_path).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (64, 64));
}

#[test]
fn cli_batch_writes_zip() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("lines.txt");
    let out_path = dir.join("batch.zip");
    let _ = std::fs::remove_file(&out_path);

    std::fs::write(&in_path, "Alpha\n\n  Beta  \n").unwrap();

    let in_arg = in_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();
    let status = std::process::Command::new(placard_exe())
        .args([
            "batch",
            "--in",
            in_arg.as_str(),
            "--width",
            "64",
            "--height",
            "64",
            "--out",
        ])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());

    let bytes = std::fs::read(&out_path).unwrap();
    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(zip.len(), 2);
    assert_eq!(zip.by_index(0).unwrap().name(), "Alpha.png");
    assert_eq!(zip.by_index(1).unwrap().name(), "Beta.png");
}
