//! Site map shared by the header, the footer and the router.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        path: "/",
        label: "Home",
    },
    NavLink {
        path: "/features",
        label: "Features",
    },
    NavLink {
        path: "/implementation",
        label: "Implementation",
    },
    NavLink {
        path: "/roadmap",
        label: "Roadmap",
    },
];

/// `/` is active only on an exact match; any other link is active for every
/// path it prefixes.
pub fn is_link_active(current: &str, link: &str) -> bool {
    if link == "/" {
        current == "/"
    } else {
        current.starts_with(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_matches_exactly() {
        assert!(is_link_active("/", "/"));
        assert!(!is_link_active("/features", "/"));
        assert!(!is_link_active("/roadmap", "/"));
    }

    #[test]
    fn other_links_match_by_prefix() {
        assert!(is_link_active("/features", "/features"));
        assert!(is_link_active("/features/languages", "/features"));
        assert!(!is_link_active("/", "/features"));
        assert!(!is_link_active("/roadmap", "/implementation"));
    }

    #[test]
    fn links_are_unique_and_rooted() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            assert!(link.path.starts_with('/'));
            assert!(NAV_LINKS[i + 1..].iter().all(|other| other.path != link.path));
        }
    }
}
