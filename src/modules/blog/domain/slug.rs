use rand::distributions::Alphanumeric;
use rand::Rng;

/// Number of candidates tried (`base`, `base-1` … `base-999`) before falling
/// back to a random suffix.
pub const MAX_SLUG_ATTEMPTS: u32 = 1000;

const FALLBACK_BASE: &str = "post";
const RANDOM_SUFFIX_LEN: usize = 8;

/// Lower-cases `text` and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, trimming hyphens at both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug base for a title or an explicitly supplied slug.
pub fn slug_base(text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        slug
    }
}

/// Candidate number `attempt`, always derived from `base`.
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

pub fn random_candidate(base: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{base}-{suffix}")
}
