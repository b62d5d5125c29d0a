//! Render view: pure projection of a Document into a printable HTML page.
//!
//! Markup and text are identical for every template; the template only picks
//! the stylesheet and root class. Empty fields are omitted, and a section
//! with nothing to show is left out entirely.

pub mod format;
pub mod handlers;
pub mod templates;

use serde::Serialize;

use crate::models::document::{Document, EducationEntry, PersonalInfo, TemplateId, WorkEntry};
use format::{date_range, escape_html, escape_multiline, join_present};

/// Final HTML handed to the print/export collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub html: String,
}

pub fn render(document: &Document, template: TemplateId) -> RenderedDocument {
    let personal = &document.personal;
    let name = personal.full_name();
    let title = if name.is_empty() {
        "Curriculum Vitae".to_string()
    } else {
        name.clone()
    };

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html.push_str(&format!(
        "<style>\n{}</style>\n</head>\n<body>\n",
        templates::stylesheet(template)
    ));
    html.push_str(&format!(
        "<article class=\"{}\">\n",
        templates::root_class(template)
    ));

    push_header(&mut html, personal, &name);

    html.push_str("<div class=\"cv-body\">\n");
    if !personal.summary.trim().is_empty() {
        html.push_str("<section class=\"cv-section cv-summary\">\n<h2>Profile</h2>\n");
        html.push_str(&format!(
            "<p>{}</p>\n</section>\n",
            escape_multiline(&personal.summary)
        ));
    }
    if !document.work.is_empty() {
        html.push_str("<section class=\"cv-section cv-work\">\n<h2>Work Experience</h2>\n<div>\n");
        for entry in &document.work {
            push_work(&mut html, entry);
        }
        html.push_str("</div>\n</section>\n");
    }
    if !document.education.is_empty() {
        html.push_str(
            "<section class=\"cv-section cv-education\">\n<h2>Education and Training</h2>\n<div>\n",
        );
        for entry in &document.education {
            push_education(&mut html, entry);
        }
        html.push_str("</div>\n</section>\n");
    }
    push_list(&mut html, "cv-skills", "Skills", &document.skills);
    push_list(&mut html, "cv-languages", "Languages", &document.languages);
    html.push_str("</div>\n</article>\n</body>\n</html>\n");

    RenderedDocument { template, html }
}

fn push_header(html: &mut String, personal: &PersonalInfo, name: &str) {
    html.push_str("<header class=\"cv-header\">\n");
    if !name.is_empty() {
        html.push_str(&format!("<h1 class=\"cv-name\">{}</h1>\n", escape_html(name)));
    }
    if !personal.job_title.trim().is_empty() {
        html.push_str(&format!(
            "<p class=\"cv-job-title\">{}</p>\n",
            escape_html(personal.job_title.trim())
        ));
    }

    let city_line = join_present(&[&personal.postal_code, &personal.city], " ");
    let address = join_present(&[&personal.address, &city_line, &personal.country], ", ");
    let contacts = [
        ("email", personal.email.as_str()),
        ("phone", personal.phone.as_str()),
        ("address", address.as_str()),
        ("website", personal.website.as_str()),
        ("linkedin", personal.linkedin.as_str()),
    ];
    if contacts.iter().any(|(_, v)| !v.trim().is_empty()) {
        html.push_str("<ul class=\"cv-contact\">\n");
        for (kind, value) in contacts {
            if !value.trim().is_empty() {
                html.push_str(&format!(
                    "<li class=\"cv-contact-{kind}\">{}</li>\n",
                    escape_html(value.trim())
                ));
            }
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</header>\n");
}

fn push_entry(
    html: &mut String,
    dates: &str,
    heading: &str,
    organisation: &str,
    description: &str,
) {
    html.push_str("<div class=\"cv-entry\">\n");
    html.push_str(&format!(
        "<div class=\"cv-entry-dates\">{}</div>\n",
        escape_html(dates)
    ));
    html.push_str("<div class=\"cv-entry-body\">\n");
    if !heading.trim().is_empty() {
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(heading.trim())));
    }
    if !organisation.is_empty() {
        html.push_str(&format!(
            "<p class=\"cv-entry-org\">{}</p>\n",
            escape_html(organisation)
        ));
    }
    if !description.trim().is_empty() {
        html.push_str(&format!(
            "<p class=\"cv-entry-description\">{}</p>\n",
            escape_multiline(description)
        ));
    }
    html.push_str("</div>\n</div>\n");
}

fn push_work(html: &mut String, entry: &WorkEntry) {
    push_entry(
        html,
        &date_range(&entry.start_date, &entry.end_date, entry.current),
        &entry.title,
        &join_present(&[&entry.company, &entry.city], ", "),
        &entry.description,
    );
}

fn push_education(html: &mut String, entry: &EducationEntry) {
    push_entry(
        html,
        &date_range(&entry.start_date, &entry.end_date, false),
        &entry.degree,
        &join_present(&[&entry.institution, &entry.city], ", "),
        &entry.description,
    );
}

fn push_list(html: &mut String, class: &str, heading: &str, items: &[String]) {
    let items: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        return;
    }
    html.push_str(&format!(
        "<section class=\"cv-section {class}\">\n<h2>{heading}</h2>\n<ul>\n"
    ));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n</section>\n");
}
