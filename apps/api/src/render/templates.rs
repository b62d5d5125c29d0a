// Per-template styling. Templates change only CSS and the root class;
// markup and text are produced once in render/mod.rs for all of them.

use crate::models::document::TemplateId;

/// Shared rules: page size for printing and the base box model.
const BASE_CSS: &str = "\
@page { size: A4; margin: 0; }
* { box-sizing: border-box; }
body { margin: 0; background: #fff; color: #1f2937; }
.cv { width: 210mm; min-height: 297mm; margin: 0 auto; padding: 16mm; }
.cv h1, .cv h2, .cv h3, .cv p { margin: 0; }
.cv ul { list-style: none; margin: 0; padding: 0; }
.cv-entry { margin-bottom: 12px; page-break-inside: avoid; }
.cv-entry-description { margin-top: 4px; font-size: 0.9em; }
@media print { .cv { margin: 0; width: auto; } }
";

const CLASSIC_CSS: &str = "\
.cv-classic { font-family: Arial, Helvetica, sans-serif; }
.cv-classic .cv-header { border-bottom: 4px solid #004494; padding-bottom: 12px; margin-bottom: 16px; }
.cv-classic .cv-name { color: #004494; font-size: 28px; }
.cv-classic .cv-job-title { color: #ffd617; background: #004494; display: inline-block; padding: 2px 8px; margin-top: 6px; }
.cv-classic .cv-contact li { display: inline; margin-right: 16px; font-size: 0.9em; }
.cv-classic .cv-section { display: grid; grid-template-columns: 45mm 1fr; gap: 8px; margin-bottom: 16px; }
.cv-classic .cv-section > h2 { color: #004494; font-size: 13px; text-transform: uppercase; text-align: right; }
.cv-classic .cv-entry { display: grid; grid-template-columns: 35mm 1fr; gap: 8px; }
.cv-classic .cv-entry-dates { color: #004494; font-size: 0.85em; }
.cv-classic .cv-skills li { display: inline-block; border: 1px solid #004494; border-radius: 3px; padding: 1px 6px; margin: 0 4px 4px 0; }
";

const MODERN_CSS: &str = "\
.cv-modern { font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; padding: 0; display: grid; grid-template-columns: 62mm 1fr; }
.cv-modern .cv-header { grid-column: 1; background: #1e293b; color: #f8fafc; padding: 16mm 8mm; }
.cv-modern .cv-name { font-size: 24px; }
.cv-modern .cv-job-title { color: #38bdf8; margin-top: 4px; }
.cv-modern .cv-contact { margin-top: 16px; font-size: 0.85em; }
.cv-modern .cv-contact li { margin-bottom: 6px; word-break: break-all; }
.cv-modern .cv-body { grid-column: 2; padding: 16mm 10mm; }
.cv-modern .cv-section { margin-bottom: 18px; }
.cv-modern .cv-section > h2 { font-size: 15px; color: #0f172a; border-bottom: 2px solid #38bdf8; padding-bottom: 4px; margin-bottom: 10px; }
.cv-modern .cv-entry-dates { float: right; color: #64748b; font-size: 0.85em; }
.cv-modern .cv-skills li { display: inline-block; background: #e0f2fe; border-radius: 10px; padding: 2px 8px; margin: 0 4px 4px 0; }
";

const MINIMAL_CSS: &str = "\
.cv-minimal { font-family: Georgia, 'Times New Roman', serif; max-width: 180mm; }
.cv-minimal .cv-header { text-align: center; margin-bottom: 20px; }
.cv-minimal .cv-name { font-weight: normal; font-size: 30px; letter-spacing: 2px; }
.cv-minimal .cv-job-title { font-style: italic; color: #6b7280; margin-top: 4px; }
.cv-minimal .cv-contact li { display: inline; font-size: 0.85em; }
.cv-minimal .cv-contact li + li::before { content: ' · '; }
.cv-minimal .cv-section { margin-bottom: 18px; }
.cv-minimal .cv-section > h2 { font-weight: normal; font-size: 13px; letter-spacing: 3px; text-transform: uppercase; color: #6b7280; margin-bottom: 8px; }
.cv-minimal .cv-entry-dates { font-size: 0.85em; color: #6b7280; }
.cv-minimal .cv-skills li { display: inline; }
.cv-minimal .cv-skills li + li::before { content: ', '; }
";

pub fn root_class(template: TemplateId) -> String {
    format!("cv cv-{}", template.as_str())
}

pub fn stylesheet(template: TemplateId) -> String {
    let specific = match template {
        TemplateId::Classic => CLASSIC_CSS,
        TemplateId::Modern => MODERN_CSS,
        TemplateId::Minimal => MINIMAL_CSS,
    };
    format!("{BASE_CSS}{specific}")
}
