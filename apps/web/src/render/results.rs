//! Results page.

use super::{chips, escape_html, layout};
use crate::results::{Difficulty, ResultPayload};

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::BeginnerIntermediate => "ok",
        Difficulty::Intermediate => "warn",
        Difficulty::Advanced => "bad",
    }
}

pub fn results_page(payload: &ResultPayload) -> String {
    let role = escape_html(&payload.role);
    let report_href = format!(
        "/results/report?role={}",
        urlencoding::encode(&payload.role)
    );

    let roadmap: String = payload
        .roadmap
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            format!(
                r#"<div class="card">
<p class="muted">{number}. {period}</p>
<h3>{title}</h3>
<p>Skills to learn:</p><div>{skills}</div>
<p>Resources:</p><div>{resources}</div>
</div>"#,
                number = index + 1,
                period = escape_html(&phase.period),
                title = escape_html(&phase.title),
                skills = chips(&phase.skills, ""),
                resources = chips(&phase.resources, ""),
            )
        })
        .collect();

    let projects: String = payload
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="card">
<h3>{title}</h3>
<p class="muted">{description}</p>
<div>{stack}</div>
<p><span class="chip {class}">{difficulty}</span> <span class="muted">{time}</span></p>
<p>Impact: {impact}</p>
</div>"#,
                title = escape_html(&project.title),
                description = escape_html(&project.description),
                stack = chips(&project.stack, ""),
                class = difficulty_class(project.difficulty),
                difficulty = project.difficulty.label(),
                time = escape_html(&project.estimated_time),
                impact = escape_html(&project.impact),
            )
        })
        .collect();

    let body = format!(
        r#"<p><a href="/analyze">&larr; Analyze Another CV</a> &middot; <a href="{report_href}">Download Report</a></p>
<h1>Your <span class="gradient-text">Skill Gap Analysis</span></h1>
<p class="muted">for <strong>{role}</strong> Position</p>
<div class="card">
<h2>Skill Readiness Score</h2>
<p class="muted">Based on industry requirements for {role}</p>
<p><span class="gradient-text" style="font-size: 2.5rem; font-weight: 700;">{score}</span> <span class="muted">/ 100</span></p>
</div>
<h2>Skill Breakdown</h2>
<div class="grid">
<div class="card"><h3 class="ok">Strong Skills</h3>{strong}</div>
<div class="card"><h3 class="warn">Needs Improvement</h3>{weak}</div>
<div class="card"><h3 class="bad">Missing Skills</h3>{missing}</div>
</div>
<h2>Your 90-Day Learning Roadmap</h2>
{roadmap}
<h2>Portfolio-Worthy Project Ideas</h2>
<div class="grid">{projects}</div>
<div class="card">
<h2>Ready to Turn This Into <span class="gradient-text">Interview Calls?</span></h2>
<p class="muted">Follow this roadmap, build these projects, and watch your profile transform from invisible to interview-ready.</p>
<p><a class="button" href="{report_href}">Download Full Report</a> <a class="button" href="/analyze">Analyze Another CV</a></p>
</div>"#,
        score = payload.score,
        strong = chips(&payload.skills.strong, "ok"),
        weak = chips(&payload.skills.weak, "warn"),
        missing = chips(&payload.skills.missing, "bad"),
    );

    layout("Your Skill Gap Analysis", &body, None)
}
