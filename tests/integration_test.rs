use extension_icons::fallback::FALLBACK_PNG;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `extension-icons` with no arguments inside a fresh directory and
/// checks that `icons/icon-{16,32,48,128}.png` appear.
#[test]
fn test_default_run_creates_icons_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(&temp_dir, &[]);
    assert_success(&output, "extension-icons");

    for size in [16, 32, 48, 128] {
        let icon_path = temp_dir.path().join("icons").join(format!("icon-{size}.png"));
        assert!(
            icon_path.exists(),
            "Output icon should exist at: {}",
            icon_path.display()
        );
        let bytes = std::fs::read(&icon_path).expect("Failed to read icon");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("icon-128.png"), "stdout: {stdout}");
}

#[test]
fn test_minimal_flag_writes_fallback_blob() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(&temp_dir, &["--minimal", "--output", "out", "--sizes", "16,128"]);
    assert_success(&output, "extension-icons --minimal");

    for size in [16, 128] {
        let bytes = std::fs::read(temp_dir.path().join("out").join(format!("icon-{size}.png")))
            .expect("Failed to read fallback icon");
        assert_eq!(bytes, FALLBACK_PNG, "icon-{size}.png should be the fallback blob");
    }
    assert!(!temp_dir.path().join("icons").exists());
}

#[cfg(feature = "render")]
#[test]
fn test_custom_sizes_and_colors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(
        &temp_dir,
        &["-s", "64", "--fill", "#ff0000", "--outline", "#0000ff", "--label", "DEV"],
    );
    assert_success(&output, "extension-icons with colors");

    let icon = image::open(temp_dir.path().join("icons").join("icon-64.png"))
        .expect("Failed to load generated icon")
        .to_rgba8();
    assert_eq!((icon.width(), icon.height()), (64, 64));
    // Inside the circle, clear of the chart line and the label.
    assert_eq!(icon.get_pixel(20, 40).0, [255, 0, 0, 255]);
}

/// `--font` with a real TrueType file draws a label the built-in font lacks.
#[cfg(feature = "render")]
#[test]
fn test_font_flag_draws_truetype_label() {
    let Some(font) = system_font() else {
        eprintln!("no system TrueType font found, skipping");
        return;
    };
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let font_copy = temp_dir.path().join("brand.ttf");
    std::fs::copy(&font, &font_copy).expect("Failed to copy font");

    let output = run_in(
        &temp_dir,
        &["-s", "48", "--label", "L?", "--font", font_copy.to_str().unwrap()],
    );
    assert_success(&output, "extension-icons --font");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("icon-48.png"), "stdout: {stdout}");
    assert!(!stdout.contains("no label"), "label should be drawn, stdout: {stdout}");
}

/// An unreadable `--font` is skipped; the icon is still produced.
#[cfg(feature = "render")]
#[test]
fn test_broken_font_flag_still_writes_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let broken = temp_dir.path().join("broken.ttf");
    std::fs::write(&broken, b"not a font").expect("Failed to write broken font");

    let output = run_in(&temp_dir, &["-s", "32", "--font", broken.to_str().unwrap()]);
    assert_success(&output, "extension-icons with broken --font");

    let icon = image::open(temp_dir.path().join("icons").join("icon-32.png"))
        .expect("Failed to load generated icon");
    assert_eq!((icon.width(), icon.height()), (32, 32));
    // "LS" is covered by the built-in font, so some font always draws it.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("no label"), "stdout: {stdout}");
}

/// An empty label cannot be drawn; the icon is written and reported unlabelled.
#[cfg(feature = "render")]
#[test]
fn test_empty_label_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(&temp_dir, &["-s", "16", "--label", ""]);
    assert_success(&output, "extension-icons with empty label");

    assert!(temp_dir.path().join("icons").join("icon-16.png").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no label"), "stdout: {stdout}");
}

#[test]
fn test_zero_size_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(&temp_dir, &["--sizes", "0"]);
    assert!(!output.status.success(), "size 0 should be rejected");
    assert!(!temp_dir.path().join("icons").exists());
}

#[test]
fn test_invalid_color_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(&temp_dir, &["--fill", "not-a-color"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid CSS color"), "stderr: {stderr}");
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(get_extension_icons_binary_path())
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("Failed to run extension-icons command")
}

fn assert_success(output: &Output, what: &str) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("{what} failed");
    }
}

/// Gets the path to the extension-icons binary built for this test run
fn get_extension_icons_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_extension-icons"))
}

/// A TrueType font installed on this machine, if any.
#[cfg(feature = "render")]
fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|path| path.exists())
}
