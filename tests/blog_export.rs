use skillkwiz::content::{article_body, BLOG_POSTS};
use skillkwiz::export::{download_pdf, export_file_name, PLACEHOLDER};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn every_blog_post_downloads_its_article() {
    for post in BLOG_POSTS {
        let export = download_pdf(post.subtitle);
        assert!(!export.used_placeholder, "{} has an article", post.subtitle);
        assert_eq!(export.file_name, export_file_name(post.subtitle));
        assert!(!export.file_name.contains(' '));
        assert!(export.file_name.ends_with(".pdf"));
        assert!(article_body(post.subtitle).is_some());
    }
}

#[test]
fn unknown_title_yields_placeholder_document() {
    let export = download_pdf("Unknown Title");
    assert_eq!(export.file_name, "Unknown_Title.pdf");
    assert!(export.used_placeholder);
    assert!(contains(&export.bytes, PLACEHOLDER.as_bytes()));
}

#[test]
fn same_title_gives_identical_bytes() {
    let first = download_pdf(BLOG_POSTS[1].subtitle);
    let second = download_pdf(BLOG_POSTS[1].subtitle);
    assert_eq!(first.bytes, second.bytes);
    assert_ne!(first.bytes, download_pdf(BLOG_POSTS[2].subtitle).bytes);
}

#[test]
fn body_lines_start_at_the_left_margin() {
    let export = download_pdf(BLOG_POSTS[0].subtitle);
    let text = String::from_utf8_lossy(&export.bytes);

    // 15 mm from the left edge.
    let body_lines = text.matches("42.52 ").count();
    assert!(body_lines > 5, "expected several wrapped lines, saw {body_lines}");
    assert!(text.contains("/F1 18.00 Tf"));
    assert!(text.contains("/F1 12.00 Tf"));
}
