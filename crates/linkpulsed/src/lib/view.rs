use crate::{
    entry::{Entry, Status},
    seo::Seo,
};

/// Container labels that get a bucket on the homepage. Entries filed under
/// any other label are kept in the store but not displayed.
pub const CONTAINERS: [&str; 3] = ["1", "2", "3"];

pub struct IndexPage<'a> {
    seo: &'a Seo,
    containers: [Vec<&'a Entry>; 3],
}

impl<'a> IndexPage<'a> {
    pub fn new(seo: &'a Seo, entries: &'a [Entry]) -> Self {
        let containers = CONTAINERS.map(|label| {
            entries
                .iter()
                .filter(|entry| entry.container() == label)
                .collect::<Vec<_>>()
        });
        Self { seo, containers }
    }

    /// Entries bucketed under `CONTAINERS[index]`.
    pub fn container(&self, index: usize) -> &[&'a Entry] {
        self.containers
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        self.render_seo(&mut out);
        out.push_str("<link rel=\"stylesheet\" href=\"/style.css\">\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!("<h1>{}</h1>\n", html_escape(&self.seo.title)));
        render_form(&mut out);
        out.push_str("<div class=\"containers\">\n");
        for (label, entries) in CONTAINERS.iter().zip(&self.containers) {
            render_container(&mut out, label, entries);
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }

    fn render_seo(&self, out: &mut String) {
        let seo = self.seo;
        out.push_str(&format!("<title>{}</title>\n", html_escape(&seo.title)));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            html_escape(&seo.description)
        ));
        let canonical = seo.canonical_url.as_deref().unwrap_or(&seo.url);
        if !canonical.is_empty() {
            out.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                html_escape(canonical)
            ));
        }
        out.push_str(&format!(
            "<meta property=\"og:title\" content=\"{}\">\n",
            html_escape(&seo.title)
        ));
        out.push_str(&format!(
            "<meta property=\"og:description\" content=\"{}\">\n",
            html_escape(&seo.description)
        ));
        if !seo.url.is_empty() {
            out.push_str(&format!(
                "<meta property=\"og:url\" content=\"{}\">\n",
                html_escape(&seo.url)
            ));
        }
        if let Some(image) = &seo.image {
            out.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                html_escape(image)
            ));
            if let Some(alt) = &seo.image_alt {
                out.push_str(&format!(
                    "<meta property=\"og:image:alt\" content=\"{}\">\n",
                    html_escape(alt)
                ));
            }
        }
    }
}

fn render_form(out: &mut String) {
    out.push_str("<form class=\"analyze\" method=\"post\" action=\"/analyze\">\n");
    out.push_str("<input type=\"text\" name=\"title\" placeholder=\"Title (optional)\">\n");
    out.push_str(
        "<textarea name=\"urls\" rows=\"6\" placeholder=\"One URL per line\" required></textarea>\n",
    );
    out.push_str("<select name=\"container\">\n");
    for label in CONTAINERS {
        out.push_str(&format!(
            "<option value=\"{label}\">Container {label}</option>\n"
        ));
    }
    out.push_str("</select>\n<button type=\"submit\">Analyze</button>\n</form>\n");
}

fn render_container(out: &mut String, label: &str, entries: &[&Entry]) {
    out.push_str(&format!(
        "<section class=\"container\" data-container=\"{}\">\n<h2>Container {}</h2>\n<ul>\n",
        html_escape(label),
        html_escape(label)
    ));
    for entry in entries {
        let class = match entry.status() {
            Status::Active => "active",
            Status::Inactive => "inactive",
        };
        out.push_str(&format!("<li class=\"entry {class}\">\n"));
        out.push_str(&format!(
            "<a href=\"{}\" rel=\"noopener\" target=\"_blank\">{}</a>\n",
            html_escape(entry.url()),
            html_escape(entry.title())
        ));
        match entry.error() {
            Some(error) => out.push_str(&format!(
                "<span class=\"status\" title=\"{}\">{}</span>\n",
                html_escape(error),
                entry.status()
            )),
            None => out.push_str(&format!(
                "<span class=\"status\">{}</span>\n",
                entry.status()
            )),
        }
        out.push_str(&format!(
            "<form method=\"post\" action=\"/delete\"><input type=\"hidden\" name=\"title\" value=\"{}\"><button type=\"submit\">Delete</button></form>\n",
            html_escape(entry.title())
        ));
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</section>\n");
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, container: &str) -> Entry {
        Entry::new(
            title.into(),
            format!("https://{title}"),
            Status::Active,
            None,
            container.into(),
            None,
        )
    }

    #[test]
    fn partitions_by_exact_container() {
        let entries = vec![
            entry("a", "1"),
            entry("b", "2"),
            entry("c", "4"),
            entry("d", "1"),
            entry("e", " 3"),
            entry("f", "3"),
        ];
        let seo = Seo::default();
        let page = IndexPage::new(&seo, &entries);

        let titles = |i: usize| {
            page.container(i)
                .iter()
                .map(|e| e.title())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(0), ["a", "d"]);
        assert_eq!(titles(1), ["b"]);
        assert_eq!(titles(2), ["f"]);
        assert!(page.container(3).is_empty());

        let shown: usize = (0..CONTAINERS.len()).map(|i| page.container(i).len()).sum();
        let displayable = entries
            .iter()
            .filter(|e| CONTAINERS.iter().any(|label| *label == e.container()))
            .count();
        assert_eq!(shown, displayable);
    }

    #[test]
    fn escapes_user_text() {
        let entries = vec![entry("<script>alert('x')</script>", "1")];
        let seo = Seo {
            title: "Links & \"things\"".into(),
            ..Seo::default()
        };
        let html = IndexPage::new(&seo, &entries).render();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("<title>Links &amp; &quot;things&quot;</title>"));
    }

    #[test]
    fn inactive_entries_carry_their_reason() {
        let entries = vec![Entry::new(
            "down".into(),
            "https://down.example".into(),
            Status::Inactive,
            Some("unexpected status 404 Not Found".into()),
            "2".into(),
            None,
        )];
        let seo = Seo::default();
        let html = IndexPage::new(&seo, &entries).render();

        assert!(html.contains("class=\"entry inactive\""));
        assert!(html.contains("title=\"unexpected status 404 Not Found\">Inactive</span>"));
    }
}
