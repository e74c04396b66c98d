//! Site navigation: link tables, base path and active link detection.

/// First path segments that belong to the site itself rather than naming a
/// project prefix.
const SITE_SECTIONS: &[&str] = &["product", "about", "for-teachers", "blog"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Path relative to the base path.
    pub path: &'static str,
}

pub const PRODUCT: &str = "Product";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", path: "/" },
    NavLink { name: PRODUCT, path: "/product/" },
    NavLink { name: "For Teachers", path: "/for-teachers.html" },
    NavLink { name: "Pricing", path: "/pricing.html" },
    NavLink { name: "Blog", path: "/blog.html" },
    NavLink { name: "About", path: "/about.html" },
];

pub const PRODUCT_SUBPAGES: &[NavLink] = &[
    NavLink { name: "Overview", path: "/product/" },
    NavLink { name: "Origin story", path: "/product/origin.html" },
    NavLink { name: "Features", path: "/product/features.html" },
    NavLink { name: "Monetization", path: "/product/monetization.html" },
    NavLink { name: "Reporting", path: "/product/reporting.html" },
    NavLink { name: "Hallucinations & safety", path: "/product/hallucinations.html" },
    NavLink { name: "Content ownership", path: "/product/content-ownership.html" },
    NavLink { name: "FAQ", path: "/product/faq.html" },
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            NavLink { name: "How it Works", path: "/product/" },
            NavLink { name: "Pricing", path: "/pricing.html" },
            NavLink { name: "Case Study", path: "/case-study.html" },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavLink { name: "About / Philosophy", path: "/about.html" },
            NavLink { name: "For Teachers", path: "/for-teachers.html" },
            NavLink { name: "Blog", path: "/blog.html" },
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            NavLink { name: "Privacy", path: "#" },
            NavLink { name: "Terms", path: "#" },
        ],
    },
];

/// Prefix the site is served under, derived from the page path.
///
/// On a project site the first segment is the repository name, e.g.
/// `/spark-website/pricing.html` has base `/spark-website`. Served from the
/// root there is no base.
pub fn base_path(pathname: &str) -> String {
    let Some(first) = pathname.split('/').find(|segment| !segment.is_empty()) else {
        return String::new();
    };
    if SITE_SECTIONS.contains(&first) || first.ends_with(".html") {
        return String::new();
    }
    format!("/{first}")
}

/// Absolute link to `path` under `base`. Fragment-only links are left alone.
pub fn href(base: &str, path: &str) -> String {
    if path.starts_with('#') {
        return path.to_string();
    }
    match (base.is_empty(), path) {
        (true, _) => path.to_string(),
        (false, "/") => format!("{base}/"),
        (false, _) => format!("{base}{path}"),
    }
}

/// Whether the link to `href` should be highlighted on page `current`.
pub fn is_active(current: &str, href: &str) -> bool {
    current == href || (href != "/" && current.starts_with(href))
}

/// Link opening the waitlist form from any page.
pub fn waitlist_href(base: &str) -> String {
    format!("{base}/#waitlist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_the_project_segment() {
        assert_eq!(base_path("/"), "");
        assert_eq!(base_path(""), "");
        assert_eq!(base_path("/spark-website/"), "/spark-website");
        assert_eq!(base_path("/spark-website/pricing.html"), "/spark-website");
    }

    #[test]
    fn site_sections_have_no_base() {
        assert_eq!(base_path("/product/features.html"), "");
        assert_eq!(base_path("/about/"), "");
        assert_eq!(base_path("/for-teachers/"), "");
        assert_eq!(base_path("/pricing.html"), "");
        assert_eq!(base_path("/blog"), "");
        assert_eq!(base_path("/spark-website/blog"), "/spark-website");
    }

    #[test]
    fn links_are_prefixed_with_the_base() {
        assert_eq!(href("", "/"), "/");
        assert_eq!(href("/spark-website", "/"), "/spark-website/");
        assert_eq!(href("/spark-website", "/blog.html"), "/spark-website/blog.html");
        assert_eq!(href("/spark-website", "#"), "#");
    }

    #[test]
    fn home_is_only_active_on_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/pricing.html", "/"));
        assert!(is_active("/product/faq.html", "/product/"));
        assert!(!is_active("/about.html", "/product/"));
    }
}
