//! Wizard pages: progress indicator plus the body of the current step.

use uuid::Uuid;

use super::{chips, escape_html, layout};
use crate::analysis::schedule::{
    AnalysisProgress, StepStatus, ANALYSIS_LOG, ANALYSIS_STEPS, FINISHING_LOG,
};
use crate::catalog::ROLE_CATALOG;
use crate::wizard::machine::{Wizard, WizardState};
use crate::wizard::upload::{accept_attribute, FileSummary};

/// Seconds between reloads while analyzing, so the browser sees the handoff.
pub const ANALYZING_REFRESH_SECS: u32 = 1;

/// Snapshot of a wizard taken under the session lock, rendered after release.
#[derive(Debug, Clone)]
pub struct WizardView {
    pub session_id: Uuid,
    pub state: WizardState,
    pub file: Option<FileSummary>,
    pub role: Option<String>,
    pub progress: Option<AnalysisProgress>,
}

impl WizardView {
    pub fn capture(session_id: Uuid, wizard: &Wizard) -> Self {
        Self {
            session_id,
            state: wizard.state(),
            file: wizard.file().map(|f| f.summary()),
            role: wizard.role().map(String::from),
            progress: wizard.progress(),
        }
    }
}

pub fn wizard_page(view: &WizardView) -> String {
    let step_body = match view.state {
        WizardState::Upload => upload_step(view.session_id),
        WizardState::RoleSelect => role_step(view.session_id, view.file.as_ref()),
        WizardState::Analyzing => analyzing_step(
            view.role.as_deref().unwrap_or_default(),
            view.progress.as_ref(),
        ),
    };

    let body = format!(
        r#"<p><a href="/">&larr; Back to Home</a></p>
{indicator}
{step_body}"#,
        indicator = progress_indicator(view.state),
    );

    let refresh = (view.state == WizardState::Analyzing).then_some(ANALYZING_REFRESH_SECS);
    layout("Analyze Your CV", &body, refresh)
}

fn progress_indicator(state: WizardState) -> String {
    let items: String = WizardState::ALL
        .iter()
        .map(|item| {
            let (class, mark) = if *item == state {
                ("current", (item.position() + 1).to_string())
            } else if item.position() < state.position() {
                ("done", "&#10003;".to_string())
            } else {
                ("", (item.position() + 1).to_string())
            };
            format!(
                r#"<div class="step"><span class="dot {class}">{mark}</span><p class="muted">{}</p></div>"#,
                item.label()
            )
        })
        .collect();
    format!(r#"<div class="steps">{items}</div>"#)
}

fn upload_step(session_id: Uuid) -> String {
    format!(
        r#"<h1>Upload Your <span class="gradient-text">CV</span></h1>
<p class="muted">Let&#39;s analyze your skills and identify gaps for your dream role</p>
<form class="card" method="post" action="/analyze/{session_id}/cv" enctype="multipart/form-data">
<h3>Drag &amp; drop your CV</h3>
<p class="muted">or click to browse your files</p>
<input type="file" name="cv" accept="{accept}">
<p><button class="button" type="submit">Continue to Role Selection</button></p>
<p class="muted">Supported formats: PDF, DOC, DOCX &bull; Max size: 5MB</p>
</form>
<div class="grid">
<div class="card"><h3>100% Secure</h3><p class="muted">Your data is encrypted</p></div>
<div class="card"><h3>Private</h3><p class="muted">Not stored or shared</p></div>
<div class="card"><h3>Fast Analysis</h3><p class="muted">Results in 60 seconds</p></div>
</div>"#,
        accept = escape_html(&accept_attribute()),
    )
}

fn role_step(session_id: Uuid, file: Option<&FileSummary>) -> String {
    let uploaded = file
        .map(|f| {
            format!(
                r#"<p class="ok">&#10003; {} ({:.1} KB)</p>"#,
                escape_html(&f.name),
                f.size_bytes as f64 / 1024.0
            )
        })
        .unwrap_or_default();

    let cards: String = ROLE_CATALOG
        .iter()
        .map(|role| {
            format!(
                r#"<form class="card" method="post" action="/analyze/{session_id}/role" style="border-image: linear-gradient(90deg, {from}, {to}) 1;">
<input type="hidden" name="role" value="{title}">
<h3>{title}</h3>
<p class="muted">{description}</p>
<p class="muted">Key skills:</p>
<div>{skills}</div>
<p><button class="button" type="submit">Select</button></p>
</form>"#,
                from = role.theme.from,
                to = role.theme.to,
                title = escape_html(role.title),
                description = escape_html(role.description),
                skills = chips(&role.skills, ""),
            )
        })
        .collect();

    format!(
        r#"<h1>Select Your <span class="gradient-text">Target Role</span></h1>
<p class="muted">Choose the role you&#39;re applying for to get a personalized skill gap analysis</p>
{uploaded}
<div class="grid">{cards}</div>
<p class="muted">Not sure which role? Choose the one you&#39;re most interested in&mdash;you can always analyze again.</p>"#
    )
}

fn analyzing_step(role: &str, progress: Option<&AnalysisProgress>) -> String {
    let steps: String = ANALYSIS_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let status = progress
                .and_then(|p| p.statuses.get(index).copied())
                .unwrap_or(StepStatus::Pending);
            let (class, mark) = match status {
                StepStatus::Completed => ("ok", "&#10003;"),
                StepStatus::Current => ("", "&hellip;"),
                StepStatus::Pending => ("pending", "&bull;"),
            };
            format!(
                r#"<div class="{class}"><strong>{mark} {}</strong><br><span class="muted">{}</span></div>"#,
                step.message, step.subtext
            )
        })
        .collect();

    let mut log: String = ANALYSIS_LOG
        .iter()
        .map(|line| format!(r#"<div><span class="ok">&#10003;</span> {line}</div>"#))
        .collect();
    if progress.is_some_and(|p| p.finishing) {
        log.push_str(&format!(r#"<div>&rarr; {FINISHING_LOG}</div>"#));
    }

    format!(
        r#"<h1>Analyzing Your Profile for <span class="gradient-text">{role}</span></h1>
<p class="muted">AI is working its magic... This will take about 60 seconds</p>
<div class="card terminal">
{steps}
<hr>
{log}
</div>
<div class="card"><p class="muted"><strong>Did you know?</strong> 73% of hiring managers say they prioritize specific skill sets over degrees when reviewing candidates.</p></div>"#,
        role = escape_html(role),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::schedule::progress_at;

    fn view(state: WizardState) -> WizardView {
        WizardView {
            session_id: Uuid::nil(),
            state,
            file: None,
            role: None,
            progress: None,
        }
    }

    #[test]
    fn test_upload_step_posts_multipart_to_session() {
        let page = wizard_page(&view(WizardState::Upload));
        assert!(page.contains(&format!("/analyze/{}/cv", Uuid::nil())));
        assert!(page.contains(r#"enctype="multipart/form-data""#));
        assert!(page.contains(".docx"));
        assert!(!page.contains("http-equiv"));
    }

    #[test]
    fn test_role_step_offers_every_catalog_role() {
        let mut v = view(WizardState::RoleSelect);
        v.file = Some(FileSummary {
            name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size_bytes: 2048,
        });
        let page = wizard_page(&v);
        for role in ROLE_CATALOG.iter() {
            assert!(page.contains(&format!(
                r#"name="role" value="{}""#,
                escape_html(role.title)
            )));
        }
        assert!(page.contains("cv.pdf (2.0 KB)"));
    }

    #[test]
    fn test_progress_indicator_marks_previous_steps_done() {
        let html = progress_indicator(WizardState::Analyzing);
        assert_eq!(html.matches("dot done").count(), 2);
        assert_eq!(html.matches("dot current").count(), 1);

        let html = progress_indicator(WizardState::Upload);
        assert_eq!(html.matches("dot done").count(), 0);
    }

    #[test]
    fn test_analyzing_step_refreshes_and_escapes_role() {
        let mut v = view(WizardState::Analyzing);
        v.role = Some("<b>Web</b>".to_string());
        v.progress = Some(progress_at(Duration::ZERO));
        let page = wizard_page(&v);
        assert!(page.contains("http-equiv=\"refresh\""));
        assert!(page.contains("&lt;b&gt;Web&lt;/b&gt;"));
        assert!(!page.contains(FINISHING_LOG));
    }

    #[test]
    fn test_finishing_line_shown_late_in_analysis() {
        let mut v = view(WizardState::Analyzing);
        v.role = Some("Data Engineer".to_string());
        v.progress = Some(progress_at(Duration::from_millis(3_500)));
        assert!(wizard_page(&v).contains(FINISHING_LOG));
    }
}
