//! Plain-text export of a results payload, served as the "Download Report" file.

use super::ResultPayload;

pub const REPORT_FILENAME: &str = "skill-gap-report.txt";

pub fn render_report(payload: &ResultPayload) -> String {
    let mut out = String::new();

    out.push_str(&format!("SKILL GAP ANALYSIS — {}\n", payload.role));
    out.push_str(&format!("Skill readiness score: {}/100\n\n", payload.score));

    out.push_str("SKILL BREAKDOWN\n");
    out.push_str(&format!("  Strong:            {}\n", payload.skills.strong.join(", ")));
    out.push_str(&format!("  Needs improvement: {}\n", payload.skills.weak.join(", ")));
    out.push_str(&format!("  Missing:           {}\n\n", payload.skills.missing.join(", ")));

    out.push_str("90-DAY LEARNING ROADMAP\n");
    for (index, phase) in payload.roadmap.iter().enumerate() {
        out.push_str(&format!("  {}. {} — {}\n", index + 1, phase.period, phase.title));
        out.push_str(&format!("     Skills:    {}\n", phase.skills.join(", ")));
        out.push_str(&format!("     Resources: {}\n", phase.resources.join(", ")));
    }
    out.push('\n');

    out.push_str("PROJECT IDEAS\n");
    for project in &payload.projects {
        out.push_str(&format!(
            "  * {} [{}, {}]\n",
            project.title,
            project.difficulty.label(),
            project.estimated_time
        ));
        out.push_str(&format!("    {}\n", project.description));
        out.push_str(&format!("    Stack:  {}\n", project.stack.join(", ")));
        out.push_str(&format!("    Impact: {}\n", project.impact));
    }

    out
}
