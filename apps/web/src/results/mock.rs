//! Fixed placeholder dataset returned for every role.

use super::{Difficulty, ProjectIdea, ResultPayload, RoadmapPhase, SkillBreakdown};

pub const MOCK_SCORE: u32 = 67;

const STRONG: &[&str] = &["JavaScript", "React", "HTML/CSS", "Git", "REST APIs"];
const WEAK: &[&str] = &["TypeScript", "Testing", "Node.js"];
const MISSING: &[&str] = &["Docker", "CI/CD", "MongoDB", "Redis", "AWS/Cloud"];

/// (period, title, skills, resources)
const ROADMAP: &[(&str, &str, &[&str], &[&str])] = &[
    (
        "Week 1-2",
        "TypeScript Fundamentals",
        &["Type annotations", "Interfaces", "Generics"],
        &["TypeScript Handbook", "Type Challenges"],
    ),
    (
        "Week 3-4",
        "Backend with Node.js",
        &["Express.js", "REST API Design", "Middleware"],
        &["Node.js Official Docs", "Express Guide"],
    ),
    (
        "Week 5-6",
        "Database & Authentication",
        &["MongoDB", "JWT", "Session Management"],
        &["MongoDB University", "Auth Best Practices"],
    ),
    (
        "Week 7-8",
        "Testing & Quality",
        &["Jest", "React Testing Library", "E2E Testing"],
        &["Testing JavaScript", "Testing Trophy"],
    ),
    (
        "Week 9-10",
        "DevOps Basics",
        &["Docker", "CI/CD", "GitHub Actions"],
        &["Docker Curriculum", "GitHub Actions Docs"],
    ),
    (
        "Week 11-12",
        "Cloud Deployment",
        &["AWS EC2", "S3", "RDS", "Environment Setup"],
        &["AWS Free Tier", "Deploy Checklist"],
    ),
];

struct ProjectSeed {
    title: &'static str,
    description: &'static str,
    stack: &'static [&'static str],
    difficulty: Difficulty,
    impact: &'static str,
    estimated_time: &'static str,
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        title: "Full-Stack Task Management System",
        description: "Build a Trello-like app with real-time updates, user authentication, and drag-and-drop",
        stack: &["React", "TypeScript", "Node.js", "MongoDB", "Socket.io"],
        difficulty: Difficulty::Intermediate,
        impact: "High - Shows full-stack capability",
        estimated_time: "3-4 weeks",
    },
    ProjectSeed {
        title: "Developer Portfolio with CMS",
        description: "Personal portfolio with admin panel to manage projects, blog posts, and analytics",
        stack: &["Next.js", "TypeScript", "PostgreSQL", "Prisma", "TailwindCSS"],
        difficulty: Difficulty::Intermediate,
        impact: "High - Great for showcasing",
        estimated_time: "2-3 weeks",
    },
    ProjectSeed {
        title: "Real-time Chat Application",
        description: "WebSocket-based chat with rooms, file sharing, and message history",
        stack: &["React", "Node.js", "Socket.io", "Redis", "MongoDB"],
        difficulty: Difficulty::Advanced,
        impact: "Very High - Real-time systems",
        estimated_time: "3-4 weeks",
    },
    ProjectSeed {
        title: "API Testing Dashboard",
        description: "Tool to test and monitor REST APIs with response time tracking and error logging",
        stack: &["React", "TypeScript", "Node.js", "Docker"],
        difficulty: Difficulty::Intermediate,
        impact: "Medium - DevOps relevant",
        estimated_time: "2 weeks",
    },
    ProjectSeed {
        title: "Job Application Tracker",
        description: "Track applications, interviews, and follow-ups with analytics and reminders",
        stack: &["Next.js", "TypeScript", "Supabase", "TailwindCSS"],
        difficulty: Difficulty::BeginnerIntermediate,
        impact: "Medium - Practical use case",
        estimated_time: "1-2 weeks",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the placeholder payload. `role` only affects the label.
pub fn mock_payload(role: &str) -> ResultPayload {
    ResultPayload {
        role: role.to_string(),
        score: MOCK_SCORE,
        skills: SkillBreakdown {
            strong: owned(STRONG),
            weak: owned(WEAK),
            missing: owned(MISSING),
        },
        roadmap: ROADMAP
            .iter()
            .map(|(period, title, skills, resources)| RoadmapPhase {
                period: period.to_string(),
                title: title.to_string(),
                skills: owned(skills),
                resources: owned(resources),
            })
            .collect(),
        projects: PROJECTS
            .iter()
            .map(|p| ProjectIdea {
                title: p.title.to_string(),
                description: p.description.to_string(),
                stack: owned(p.stack),
                difficulty: p.difficulty,
                impact: p.impact.to_string(),
                estimated_time: p.estimated_time.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = mock_payload("Web Developer");
        assert_eq!(payload.score, 67);
        assert_eq!(payload.skills.strong.len(), 5);
        assert_eq!(payload.skills.weak.len(), 3);
        assert_eq!(payload.skills.missing.len(), 5);
        assert_eq!(payload.roadmap.len(), 6);
        assert_eq!(payload.projects.len(), 5);
        assert_eq!(payload.roadmap[0].period, "Week 1-2");
        assert_eq!(payload.roadmap[5].period, "Week 11-12");
    }

    #[test]
    fn test_dataset_is_identical_across_roles() {
        let web = serde_json::to_value(mock_payload("Web Developer")).unwrap();
        let data = serde_json::to_value(mock_payload("Data Engineer")).unwrap();
        assert_ne!(web["role"], data["role"]);
        for key in ["score", "skills", "roadmap", "projects"] {
            assert_eq!(web[key], data[key], "field {key} should not depend on role");
        }
    }

    #[test]
    fn test_dataset_ignores_role_skill_catalog() {
        // DevOps Engineer lists Docker as a required skill, yet it is still reported missing.
        let payload = mock_payload("DevOps Engineer");
        assert!(payload.skills.missing.contains(&"Docker".to_string()));
    }
}
