use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use folio_models::blog::{BlogPost, BlogPostCreate, BlogPostSummary};

pub static ALL_POSTS: LazyLock<Vec<&BlogPost>> =
    LazyLock::new(|| vec![&RUST_POST, &WEB_POST, &CAREER_POST]);

/// Summaries of all published posts, newest first (the order the
/// repository lists them in).
pub static ALL_SUMMARIES: LazyLock<Vec<BlogPostSummary>> = LazyLock::new(|| {
    vec![
        CAREER_POST.clone().into(),
        WEB_POST.clone().into(),
        RUST_POST.clone().into(),
    ]
});

/// Create-input for a fourth post that does not exist yet.
pub static NEW_POST: LazyLock<BlogPostCreate> = LazyLock::new(|| BlogPostCreate {
    title: "Debugging With Tracing".try_into().unwrap(),
    description: "Spans, events, and how to read the firehose.".try_into().unwrap(),
    content: "<h2>Spans</h2><p>Enter, exit, repeat.</p>".try_into().unwrap(),
    categories: vec!["Rust".try_into().unwrap()].try_into().unwrap(),
    read_time: 6.try_into().unwrap(),
    cover_image: None,
});

pub static RUST_POST: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: 1.into(),
    title: "Getting Started with Rust".try_into().unwrap(),
    slug: "getting-started-with-rust".try_into().unwrap(),
    description: "A tour of the toolchain and the first few stumbling blocks."
        .try_into()
        .unwrap(),
    content: "<h2>Installing</h2><p>Start with rustup.</p>".try_into().unwrap(),
    categories: vec!["Rust".try_into().unwrap(), "Tutorial".try_into().unwrap()]
        .try_into()
        .unwrap(),
    read_time: 7.try_into().unwrap(),
    cover_image: Some(
        "/blogs/assets/getting-started-with-rust/images/cover.jpg"
            .try_into()
            .unwrap(),
    ),
    created_at: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
    is_published: true,
});

pub static WEB_POST: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: 2.into(),
    title: "Responsive Layouts Without Tears".try_into().unwrap(),
    slug: "responsive-layouts-without-tears".try_into().unwrap(),
    description: "Grid, flexbox, and when to reach for which.".try_into().unwrap(),
    content: "<h2>Grid first</h2><p>Rows and columns.</p>".try_into().unwrap(),
    categories: vec!["Web".try_into().unwrap()].try_into().unwrap(),
    read_time: 4.try_into().unwrap(),
    cover_image: None,
    created_at: Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 3, 14, 13, 37, 42).unwrap(),
    is_published: true,
});

pub static CAREER_POST: LazyLock<BlogPost> = LazyLock::new(|| BlogPost {
    id: 3.into(),
    title: "What I Learned From My First Internship".try_into().unwrap(),
    slug: "what-i-learned-from-my-first-internship".try_into().unwrap(),
    description: "Notes to my past self about shipping, asking, and listening."
        .try_into()
        .unwrap(),
    content: "<h2>Shipping</h2><p>Done beats perfect.</p>".try_into().unwrap(),
    categories: vec!["Career".try_into().unwrap(), "Web".try_into().unwrap()]
        .try_into()
        .unwrap(),
    read_time: 5.try_into().unwrap(),
    cover_image: Some(
        "/blogs/assets/what-i-learned-from-my-first-internship/images/cover.jpg"
            .try_into()
            .unwrap(),
    ),
    created_at: Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap(),
    updated_at: Utc.with_ymd_and_hms(2024, 6, 2, 8, 15, 0).unwrap(),
    is_published: true,
});
