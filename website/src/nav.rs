//! Header navigation builder.

use crate::config::{NavLink, SiteConfig};
use crate::model::{BreadcrumbItem, NavItem};
use crate::renderer::escape_html;

/// Builds the header navigation tree from the configured links.
pub fn build_nav(config: &SiteConfig) -> Vec<NavItem> {
    config.nav.iter().map(|link| nav_item(config, link)).collect()
}

fn nav_item(config: &SiteConfig, link: &NavLink) -> NavItem {
    NavItem {
        label: link.label.clone(),
        url: if link.url.is_empty() {
            String::new()
        } else {
            config.url(&link.url)
        },
        children: link.children.iter().map(|c| nav_item(config, c)).collect(),
    }
}

/// Renders the navigation tree as an HTML string. Items whose URL is a
/// prefix of `current_path` get `class="current"`; the root URL only
/// matches itself.
pub fn render_nav(nav: &[NavItem], current_path: &str) -> String {
    let mut html = String::from("<ul>\n");
    for item in nav {
        render_nav_item(&mut html, item, current_path, 1);
    }
    html.push_str("</ul>\n");
    html
}

fn is_current(url: &str, current_path: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    if url.ends_with('/') && url.trim_end_matches('/').is_empty() {
        return url == current_path;
    }
    current_path.starts_with(url)
}

/// Recursively renders a navigation item.
fn render_nav_item(html: &mut String, item: &NavItem, current_path: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    let class = if is_current(&item.url, current_path) {
        " class=\"current\""
    } else {
        ""
    };
    let label = escape_html(&item.label);

    if item.url.is_empty() {
        html.push_str(&format!("{indent}<li{class}><span>{label}</span>"));
    } else {
        html.push_str(&format!(
            "{indent}<li{class}><a href=\"{url}\">{label}</a>",
            url = escape_html(&item.url)
        ));
    }

    if !item.children.is_empty() {
        html.push_str(&format!("\n{indent}<ul>\n"));
        for child in &item.children {
            render_nav_item(html, child, current_path, depth + 1);
        }
        html.push_str(&format!("{indent}</ul>\n"));
    }

    html.push_str("</li>\n");
}

/// Breadcrumbs for the viewer page: site home, then the ontology.
pub fn viewer_breadcrumbs(config: &SiteConfig, ontology_label: &str) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: config.title.clone(),
            url: config.url("/"),
        },
        BreadcrumbItem {
            label: ontology_label.to_string(),
            url: String::new(),
        },
    ]
}

/// Renders breadcrumbs; the last item is plain text.
pub fn render_breadcrumbs(items: &[BreadcrumbItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.url.is_empty() {
                format!("<span aria-current=\"page\">{}</span>", escape_html(&item.label))
            } else {
                format!(
                    "<a href=\"{}\">{}</a>",
                    escape_html(&item.url),
                    escape_html(&item.label)
                )
            }
        })
        .collect::<Vec<_>>()
        .join(" <span class=\"sep\">/</span> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only_matches_itself() {
        let config = SiteConfig::default();
        let html = render_nav(&build_nav(&config), "/");
        assert!(html.contains("<li class=\"current\"><a href=\"/\">Viewer</a>"));
        assert!(html.contains("<li><a href=\"/data/table.json\">Data</a>"));
    }

    #[test]
    fn base_path_applied_and_children_nested() {
        let mut config = SiteConfig::default().with_base_path_override(Some("/v".to_string()));
        config.nav = vec![NavLink {
            label: "Group".to_string(),
            url: String::new(),
            children: vec![NavLink {
                label: "A & B".to_string(),
                url: "/ab/".to_string(),
                children: Vec::new(),
            }],
        }];
        let html = render_nav(&build_nav(&config), "/v/ab/");
        assert!(html.contains("<span>Group</span>"));
        assert!(html.contains("<li class=\"current\"><a href=\"/v/ab/\">A &amp; B</a>"));
    }

    #[test]
    fn breadcrumbs_end_with_current_page() {
        let crumbs = viewer_breadcrumbs(&SiteConfig::default(), "Animals");
        let html = render_breadcrumbs(&crumbs);
        assert!(html.starts_with("<a href=\"/\">Ontology Viewer</a>"));
        assert!(html.ends_with("<span aria-current=\"page\">Animals</span>"));
    }
}
