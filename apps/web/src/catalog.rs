//! Role catalog — the fixed set of target roles a CV can be analyzed against.

use serde::Serialize;

/// Colour pair used when rendering a role card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: [&'static str; 6],
    pub theme: Theme,
}

pub static ROLE_CATALOG: [RoleRecord; 6] = [
    RoleRecord {
        id: "backend",
        title: "Backend Developer",
        description: "Build scalable server-side applications",
        skills: ["Node.js", "Python", "Java", "SQL", "REST APIs", "Docker"],
        theme: Theme { from: "#3b82f6", to: "#06b6d4" },
    },
    RoleRecord {
        id: "web",
        title: "Web Developer",
        description: "Create modern, responsive web applications",
        skills: ["React", "JavaScript", "TypeScript", "HTML/CSS", "Next.js", "TailwindCSS"],
        theme: Theme { from: "#a855f7", to: "#ec4899" },
    },
    RoleRecord {
        id: "ml",
        title: "Machine Learning / AI",
        description: "Develop intelligent systems and models",
        skills: ["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Data Analysis", "Statistics"],
        theme: Theme { from: "#f97316", to: "#ef4444" },
    },
    RoleRecord {
        id: "fullstack",
        title: "Full Stack Developer",
        description: "Master both frontend and backend",
        skills: ["React", "Node.js", "MongoDB", "Express", "TypeScript", "AWS"],
        theme: Theme { from: "#22c55e", to: "#14b8a6" },
    },
    RoleRecord {
        id: "devops",
        title: "DevOps Engineer",
        description: "Automate and optimize infrastructure",
        skills: ["Docker", "Kubernetes", "CI/CD", "AWS", "Linux", "Terraform"],
        theme: Theme { from: "#6366f1", to: "#3b82f6" },
    },
    RoleRecord {
        id: "data",
        title: "Data Engineer",
        description: "Build data pipelines and warehouses",
        skills: ["SQL", "Python", "Spark", "Airflow", "ETL", "Big Data"],
        theme: Theme { from: "#eab308", to: "#f97316" },
    },
];

/// Looks up a role by its exact display title.
pub fn find_by_title(title: &str) -> Option<&'static RoleRecord> {
    ROLE_CATALOG.iter().find(|r| r.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_unique_roles() {
        let mut ids: Vec<_> = ROLE_CATALOG.iter().map(|r| r.id).collect();
        let mut titles: Vec<_> = ROLE_CATALOG.iter().map(|r| r.title).collect();
        ids.sort();
        ids.dedup();
        titles.sort();
        titles.dedup();
        assert_eq!(ids.len(), 6);
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn test_find_by_title_is_exact() {
        assert_eq!(find_by_title("Web Developer").map(|r| r.id), Some("web"));
        assert_eq!(
            find_by_title("Machine Learning / AI").map(|r| r.id),
            Some("ml")
        );
        assert!(find_by_title("web developer").is_none());
        assert!(find_by_title(" Web Developer").is_none());
        assert!(find_by_title("").is_none());
    }

    #[test]
    fn test_catalog_serializes_skills_as_array() {
        let json = serde_json::to_value(&ROLE_CATALOG[0]).unwrap();
        assert_eq!(json["skills"].as_array().unwrap().len(), 6);
        assert_eq!(json["theme"]["from"], "#3b82f6");
    }
}
