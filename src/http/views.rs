//! Server-rendered HTML views.
//!
//! Pages are assembled from format! templates around a shared layout.
//! All user-supplied values pass through [`escape_html`] before rendering.

use crate::catalog::{Course, CourseForm};

const STYLE: &str = "\
body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem;color:#222}\
nav a{margin-right:1rem}\
table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #ccc;padding:.4rem .6rem;text-align:left}\
label{display:block;margin-top:.8rem}\
input,textarea{width:100%;padding:.3rem}\
.banner{background:#e6f4ea;border:1px solid #8bc49a;padding:.6rem;margin-bottom:1rem}\
.errors{background:#fdecea;border:1px solid #e0a9a2;padding:.6rem;margin-bottom:1rem}\
.error-page{background:#fdecea;border:1px solid #e0a9a2;padding:1rem}";

/// Wrap page content in the shared chrome.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Course Catalog</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a><a href=\"/courses\">Catalog</a>\
         <a href=\"/courses/new\">Add Course</a></nav>\n\
         {body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn home_page() -> String {
    layout(
        "Home",
        "<h1>Course Catalog</h1>\
         <p>Browse the <a href=\"/courses\">course catalog</a> or \
         <a href=\"/courses/new\">add a new course</a>.</p>",
    )
}

pub fn catalog_page(courses: &[Course], added: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(code) = added {
        body.push_str(&format!(
            "<div class=\"banner\">Course '{}' added successfully!</div>",
            escape_html(code)
        ));
    }

    body.push_str("<h1>Catalog</h1>");

    if courses.is_empty() {
        body.push_str("<p>No courses yet.</p>");
    } else {
        body.push_str(
            "<table><tr><th>Code</th><th>Name</th><th>Instructor</th></tr>",
        );
        for course in courses {
            body.push_str(&format!(
                "<tr><td><a href=\"/courses/{code}\">{code}</a></td>\
                 <td>{name}</td><td>{instructor}</td></tr>",
                code = escape_html(&course.code),
                name = escape_html(&course.name),
                instructor = escape_html(&course.instructor),
            ));
        }
        body.push_str("</table>");
    }

    layout("Catalog", &body)
}

pub fn course_detail_page(course: &Course) -> String {
    let body = format!(
        "<h1>{code}: {name}</h1>\
         <p><strong>Instructor:</strong> {instructor}</p>\
         <p>{description}</p>",
        code = escape_html(&course.code),
        name = escape_html(&course.name),
        instructor = escape_html(&course.instructor),
        description = escape_html(&course.description),
    );
    layout(&course.name, &body)
}

pub fn add_course_page(form: &CourseForm, errors: &[String]) -> String {
    let mut body = String::new();

    if !errors.is_empty() {
        body.push_str("<div class=\"errors\"><ul>");
        for error in errors {
            body.push_str(&format!("<li>{}</li>", escape_html(error)));
        }
        body.push_str("</ul></div>");
    }

    body.push_str(&format!(
        "<h1>Add Course</h1>\
         <form method=\"post\" action=\"/courses\">\
         <label>Code<input name=\"code\" value=\"{code}\"></label>\
         <label>Name<input name=\"name\" value=\"{name}\"></label>\
         <label>Instructor<input name=\"instructor\" value=\"{instructor}\"></label>\
         <label>Description<textarea name=\"description\">{description}</textarea></label>\
         <p><button type=\"submit\">Add</button></p>\
         </form>",
        code = escape_html(&form.code),
        name = escape_html(&form.name),
        instructor = escape_html(&form.instructor),
        description = escape_html(&form.description),
    ));

    layout("Add Course", &body)
}

pub fn error_page(error_type: &str, message: &str) -> String {
    let body = format!(
        "<div class=\"error-page\"><h1>{}</h1><p>{}</p>\
         <p><a href=\"/courses\">Back to the catalog</a></p></div>",
        escape_html(error_type),
        escape_html(message),
    );
    layout(error_type, &body)
}

/// Minimal HTML escaping for text and attribute positions.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            code: "CS101".into(),
            name: "Intro <script>".into(),
            instructor: "Staff".into(),
            description: "A & B".into(),
        }
    }

    #[test]
    fn escaping_neutralizes_markup() {
        assert_eq!(
            escape_html("<b>\"x\" & 'y'</b>"),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn detail_page_escapes_course_fields() {
        let html = course_detail_page(&course());
        assert!(html.contains("Intro &lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn catalog_page_links_each_course() {
        let html = catalog_page(&[course()], None);
        assert!(html.contains("href=\"/courses/CS101\""));
    }

    #[test]
    fn catalog_page_shows_confirmation_banner() {
        let html = catalog_page(&[], Some("CS900"));
        assert!(html.contains("banner"));
        assert!(html.contains("CS900"));
    }

    #[test]
    fn form_rerender_keeps_submitted_values() {
        let form = CourseForm {
            code: "CS900".into(),
            name: String::new(),
            instructor: "Me".into(),
            description: String::new(),
        };
        let errors = vec!["Field 'name' is required.".to_string()];
        let html = add_course_page(&form, &errors);

        assert!(html.contains("value=\"CS900\""));
        assert!(html.contains("Field &#39;name&#39; is required."));
    }
}
