use super::*;

#[test]
fn detached_files_get_distinct_keys() {
    let a = PickedFile::detached(FileMeta::new("a.png", "image/png", 10));
    let b = PickedFile::detached(FileMeta::new("b.png", "image/png", 10));
    assert_ne!(a.key, b.key);
    assert_eq!(a.preview_url, None);
}

#[test]
fn format_size_picks_a_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
}

#[test]
fn release_without_browser_is_a_no_op() {
    let picked = PickedFile::detached(FileMeta::new("notes.pdf", "application/pdf", 2048));
    release(&picked);
    release_all([&picked]);
    assert_eq!(picked.size_label(), "2.0 KB");
}
