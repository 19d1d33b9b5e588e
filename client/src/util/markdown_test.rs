use super::*;

#[test]
fn renders_basic_formatting() {
    let html = render_markdown("# Cardiology\n\nRead **chapter 2** first.");
    assert!(html.contains("<h1>Cardiology</h1>"));
    assert!(html.contains("<strong>chapter 2</strong>"));
}

#[test]
fn escapes_raw_html() {
    let html = render_markdown("hello <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn empty_source_renders_nothing() {
    assert_eq!(render_markdown(""), "");
}
