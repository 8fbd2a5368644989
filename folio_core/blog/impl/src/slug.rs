use folio_models::blog::BlogPostSlug;

const FALLBACK_SLUG: &str = "untitled-blog-post";
const MAX_SLUG_CHARS: usize = 200;

/// Derives the URL slug of a post from its title: lowercase, spaces become
/// hyphens, everything else non-alphanumeric is removed, hyphen runs
/// collapse.
pub fn slugify(title: &str) -> BlogPostSlug {
    let mut raw = String::with_capacity(title.len());
    for c in title.trim().to_lowercase().chars() {
        match c {
            ' ' => raw.push('-'),
            c if c.is_ascii_alphanumeric() || c == '-' => raw.push(c),
            _ => {}
        }
    }

    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars().take(MAX_SLUG_CHARS) {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { FALLBACK_SLUG } else { slug };

    // By construction the result is non-empty, lowercase alphanumeric with
    // single interior hyphens, so it always satisfies the slug pattern.
    slug.to_owned().try_into().unwrap()
}
