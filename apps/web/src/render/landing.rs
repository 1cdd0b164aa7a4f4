//! Landing page. Static marketing content, no request data.

use super::{escape_html, layout};

const STATS: [(&str, &str); 3] = [
    ("89%", "Students lack clear direction"),
    ("67%", "Apply without right skills"),
    ("3x", "More calls with strategy"),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Precise Skill Gap Analysis",
        "AI identifies exact skills missing from your profile compared to job requirements",
    ),
    (
        "Personalized Roadmap",
        "30/60/90 day learning plans tailored to your target role and current level",
    ),
    (
        "Real Project Ideas",
        "Industry-relevant projects to build portfolio pieces that actually get interviews",
    ),
];

const PROBLEMS: [(&str, &str); 4] = [
    (
        "Blind Applications",
        "Sending 100+ CVs without knowing which skills matter",
    ),
    (
        "Tutorial Hell",
        "Following random courses without a clear path",
    ),
    (
        "Weak Portfolio",
        "Building toy projects that don't impress recruiters",
    ),
    (
        "No Direction",
        "Confused about what to learn next and in what order",
    ),
];

fn cards(items: &[(&str, &str)], title_tag: &str) -> String {
    items
        .iter()
        .map(|(title, text)| {
            format!(
                r#"<div class="card"><{title_tag}>{}</{title_tag}><p class="muted">{}</p></div>"#,
                escape_html(title),
                escape_html(text)
            )
        })
        .collect()
}

pub fn landing_page() -> String {
    let stats: String = STATS
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="card"><h2 class="gradient-text">{value}</h2><p class="muted">{}</p></div>"#,
                escape_html(label)
            )
        })
        .collect();

    let body = format!(
        r#"<section>
<p class="chip">AI-Powered Career Intelligence</p>
<h1>Not Getting <span class="gradient-text">Internship Calls?</span><br>Let AI Fix Your Skill Gap.</h1>
<p class="muted">Stop sending blind applications. Know exactly what skills you need, how to learn them, and what to build.</p>
<p class="muted">Built for passionate CSE students who work hard but don&#39;t get callbacks. Your degree isn&#39;t the problem&mdash;your skill strategy is.</p>
<p><a class="button" href="/analyze">Analyze My CV Now</a> <a href="/results">See Example Report</a></p>
</section>
<section class="grid">{stats}</section>
<section>
<h2>How We Help You Get <span class="gradient-text">Interview Calls</span></h2>
<p class="muted">Three powerful tools to transform your profile from invisible to interview-ready</p>
<div class="grid">{features}</div>
</section>
<section>
<h2>Why Final Year Students <span class="gradient-text">Struggle</span></h2>
<div class="grid">{problems}</div>
</section>
<section>
<h2>Your Degree Isn&#39;t the Problem.<br><span class="gradient-text">Your Skill Strategy Is.</span></h2>
<p class="muted">Upload your CV. Get a clear plan. Start getting interview calls.</p>
<p><a class="button" href="/analyze">Start Skill Gap Analysis</a></p>
<p class="muted">Free analysis &bull; 60 seconds &bull; No sign-up</p>
</section>"#,
        features = cards(&FEATURES, "h3"),
        problems = cards(&PROBLEMS, "h3"),
    );

    layout("Skill Gap Analysis", &body, None)
}
