//! Edge case and error handling tests for foldyy


use harness::{TestDir, run_foldyy};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Root Errors
// ============================================================================

#[test]
fn test_nonexistent_root() {
    let dir = TestDir::new();

    let (stdout, stderr, success) = run_foldyy(dir.path(), &["missing"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("does not exist"), "got: {}", stderr);
}

#[test]
fn test_file_root() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "content");

    let (_stdout, stderr, success) = run_foldyy(dir.path(), &["plain.txt"]);
    assert!(!success);
    assert!(stderr.contains("not a directory"), "got: {}", stderr);
}

#[test]
fn test_failed_scan_writes_no_file() {
    let dir = TestDir::new();
    let out = dir.path().join("never.html");

    let (_stdout, _stderr, success) = run_foldyy(
        dir.path(),
        &["missing", "--html", "-o", out.to_str().unwrap()],
    );
    assert!(!success);
    assert!(!out.exists(), "no output file on root failure");
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "real");
    symlink("nonexistent.txt", dir.path().join("broken_link"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &["."]);
    assert!(success, "foldyy should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
    assert!(!stdout.contains("broken_link"), "got: {}", stdout);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "abc");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &[".", "-d", "3"]);
    assert!(success, "foldyy should not hang on parent symlink");
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("file.txt"));
    assert!(stdout.contains("parent"));
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.txt", "abc");
    symlink("self_link", dir.path().join("self_link")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("file.txt"));
    assert!(!stdout.contains("self_link"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "visible");

    let unreadable = dir.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "secret").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &["."]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "foldyy should handle unreadable directories gracefully");
    assert!(stdout.contains("readable"));
    assert!(stdout.contains("file.txt"));
    // The folder itself is still listed, only its contents are hidden
    assert!(stdout.contains("📁 unreadable"), "got: {}", stdout);
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces_and_unicode() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.txt", "a");
    dir.add_file("日本語.txt", "b");
    dir.add_file("émoji_🎉/文件.txt", "c");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("file with spaces.txt"));
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("émoji_🎉"));
    assert!(stdout.contains("文件.txt"));
}

#[test]
fn test_html_escapes_markup_in_names() {
    let dir = TestDir::new();
    dir.add_file("<script>", "alert(1)");
    dir.add_file("a&b \"quoted\" 'single'", "x");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &[".", "--html"]);
    assert!(success);
    assert!(stdout.contains("&lt;script&gt;"));
    assert_eq!(
        stdout.matches("<script>").count(),
        1,
        "only the embedded script tag should appear"
    );
    assert!(stdout.contains("a&amp;b &quot;quoted&quot; &#039;single&#039;"));
}

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    let deep: String = (0..40).map(|i| format!("d{}/", i)).collect();
    dir.add_file(&format!("{}leaf.txt", deep), "leaf");

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &[".", "-d", "100"]);
    assert!(success);
    assert!(stdout.contains("leaf.txt"));
    assert!(stdout.contains("📁 d0 (4 B)"));
}

#[test]
fn test_many_files_in_directory() {
    let dir = TestDir::new();
    for i in 0..200 {
        dir.add_file(&format!("file_{:03}.txt", i), "0123456789");
    }

    let (stdout, _stderr, success) = run_foldyy(dir.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("file_000.txt"));
    assert!(stdout.contains("file_199.txt"));
    assert!(stdout.contains("Total Size: 1.95 KB"));
}
